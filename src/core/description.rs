//! HTML description for the eBay listing body

/// Render the listing description.
///
/// The title becomes an `<h2>` and every non-blank line of `text` a `<p>`,
/// in source order. Missing text yields the heading alone.
///
/// Text is inserted verbatim: markup already present in the catalog passes
/// through unescaped.
pub fn render_description(title: &str, text: Option<&str>) -> String {
    let mut html = format!("<h2>{}</h2>\n", title);
    for line in text.unwrap_or("").split('\n') {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        html.push_str("<p>");
        html.push_str(line);
        html.push_str("</p>\n");
    }
    html
}
