//! HTML preview of the generated listing descriptions
//!
//! Each description is shown under a "Prodotto N" label and followed by a
//! horizontal rule, in feed order.

const PREVIEW_HEADING: &str = "Anteprima HTML della Descrizione";

/// Escape text for use inside an HTML element
fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// One labelled fragment per description (labels are 1-based)
pub fn render_preview_fragments(descriptions: &[String]) -> Vec<String> {
    descriptions
        .iter()
        .enumerate()
        .map(|(idx, html)| {
            format!(
                "<p><strong>Prodotto {}:</strong></p>\n{}\n<hr />\n",
                idx + 1,
                html
            )
        })
        .collect()
}

/// Standalone HTML page containing every preview fragment
pub fn render_preview_page(title: &str, descriptions: &[String]) -> String {
    let mut page = String::new();
    page.push_str("<!DOCTYPE html>\n<html lang=\"it\">\n<head>\n");
    page.push_str("<meta charset=\"utf-8\" />\n");
    page.push_str(&format!("<title>{}</title>\n", escape_html(title)));
    page.push_str("</head>\n<body>\n");
    page.push_str(&format!("<h1>{}</h1>\n", PREVIEW_HEADING));
    for fragment in render_preview_fragments(descriptions) {
        page.push_str(&fragment);
    }
    page.push_str("</body>\n</html>\n");
    page
}
