//! End-to-end conversion tests: catalog workbook → eBay workbook

mod common;

use calamine::Data;
use common::*;
use oilfeed::config::CatalogConstants;
use oilfeed::core::convert;
use oilfeed::error::FeedError;
use oilfeed::excel::{CatalogImporter, FeedExporter};
use oilfeed::types::{Field, Template};
use pretty_assertions::assert_eq;
use tempfile::TempDir;

fn convert_sample(dir: &TempDir, template: Template) -> Vec<Vec<Data>> {
    let input = sample_catalog(dir.path());
    let output = dir.path().join("ebay_output.xlsx");

    let table = CatalogImporter::from_path(&input).unwrap();
    let feed = convert(&table, template, &CatalogConstants::default()).unwrap();
    FeedExporter::new(&feed).export(&output).unwrap();

    let (sheets, rows) = read_feed(&output);
    assert_eq!(sheets, vec!["eBay".to_string()]);
    rows
}

// ═══════════════════════════════════════════════════════════════════════════
// IMPORT
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_import_normalizes_headers() {
    let dir = TempDir::new().unwrap();
    let input = sample_catalog(dir.path());
    let table = CatalogImporter::from_path(&input).unwrap();

    assert_eq!(
        table.columns(),
        &[
            "sku",
            "formato (l)",
            "nome olio",
            "viscosita",
            "tipologia",
            "acea",
            "marca",
            "prezzo marketplace",
            "codice prodotto",
            "utilizzo",
            "descrizione",
            "img1",
            "img2",
            "img3",
        ]
    );
    assert_eq!(table.len(), 3);
}

#[test]
fn test_import_from_bytes_matches_path() {
    let dir = TempDir::new().unwrap();
    let input = sample_catalog(dir.path());
    let from_path = CatalogImporter::from_path(&input).unwrap();
    let from_bytes = CatalogImporter::from_bytes(&std::fs::read(&input).unwrap()).unwrap();

    assert_eq!(from_path.columns(), from_bytes.columns());
    assert_eq!(from_path.len(), from_bytes.len());
}

// ═══════════════════════════════════════════════════════════════════════════
// FULL TEMPLATE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_full_template_headers_in_order() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);
    let headers: Vec<String> = rows[0].iter().map(text).collect();
    let expected: Vec<String> = Template::Full
        .headers()
        .iter()
        .map(|h| h.to_string())
        .collect();
    assert_eq!(headers, expected);
}

#[test]
fn test_one_output_row_per_input_row_in_order() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);
    let sku = column(&rows, "Custom label (SKU)");

    let skus: Vec<String> = rows[1..].iter().map(|r| text(&r[sku])).collect();
    assert_eq!(skus, vec!["TAM-1", "TAM-5", "TAM-X"]);
}

#[test]
fn test_title_and_description() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);
    let title = column(&rows, "Title");
    let description = column(&rows, "Description");

    assert_eq!(
        text(&rows[1][title]),
        "Olio Motore Auto 1 L di Tamoil Sint Future 5W-30 Sintetico C3 Tamoil"
    );
    assert_eq!(
        text(&rows[1][description]),
        "<h2>Olio Motore Auto 1 L di Tamoil Sint Future 5W-30 Sintetico C3 Tamoil</h2>\n\
         <p>Riga1</p>\n<p>Riga2</p>\n"
    );
    // No description text: heading only
    assert_eq!(
        text(&rows[2][description]),
        "<h2>Olio Motore Auto 5 L di Tamoil Sint Future 5W-40 Sintetico A3/B4 Tamoil</h2>\n"
    );
    // Non-numeric size still appears verbatim in the title
    assert!(text(&rows[3][title]).starts_with("Olio Motore Auto abc L di Tamoil Racing"));
}

#[test]
fn test_capacity_labels() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);
    let capacity = column(&rows, "C:Capienza");

    let labels: Vec<String> = rows[1..].iter().map(|r| text(&r[capacity])).collect();
    assert_eq!(labels, vec!["1 Litro", "5 Litri", "Sconosciuto"]);
}

#[test]
fn test_photo_urls() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);
    let photos = column(&rows, "Item photo URL");

    assert_eq!(text(&rows[1][photos]), "a.jpg|c.jpg");
    assert_eq!(text(&rows[2][photos]), "");
    assert_eq!(text(&rows[3][photos]), "x.jpg|y.jpg");
}

#[test]
fn test_prices_and_constants() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);

    assert_eq!(rows[1][column(&rows, "Start price")], Data::Float(12.5));
    assert_eq!(rows[1][column(&rows, "Buy It Now price")], Data::Float(12.5));
    assert_eq!(rows[1][column(&rows, "Quantity")], Data::Float(10.0));
    assert_eq!(rows[1][column(&rows, "VAT%")], Data::Float(22.0));
    assert_eq!(text(&rows[1][column(&rows, "Location")]), "82030");
    assert_eq!(
        text(&rows[1][column(&rows, "Action(SiteID=Italy|Country=IT|Currency=EUR|Version=1193)")]),
        "Add"
    );
    assert_eq!(text(&rows[1][column(&rows, "Format")]), "FixedPrice");
    assert_eq!(text(&rows[1][column(&rows, "Duration")]), "GTC");
    assert_eq!(text(&rows[1][column(&rows, "Returns within option")]), "Days_14");
    assert_eq!(
        text(&rows[1][column(&rows, "Return shipping cost paid by")]),
        "Seller"
    );
    assert_eq!(
        text(&rows[3][column(&rows, "Manufacturer Name")]),
        "TAMOIL ITALIA S.p.A."
    );
    assert_eq!(
        text(&rows[3][column(&rows, "Responsible Person 1 PostalCode")]),
        "20131"
    );
}

#[test]
fn test_item_specifics() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Full);

    assert_eq!(text(&rows[2][column(&rows, "C:Marca")]), "Tamoil");
    assert_eq!(text(&rows[2][column(&rows, "C:MPN")]), "RT-0540");
    assert_eq!(text(&rows[2][column(&rows, "C:Viscosità SAE")]), "5W-40");
    assert_eq!(text(&rows[2][column(&rows, "C:Utilizzo")]), "Diesel");
    assert_eq!(text(&rows[2][column(&rows, "C:Tipologia")]), "Sintetico");
    assert_eq!(
        text(&rows[2][column(&rows, "C:Marca veicolo")]),
        "Leggere descrizione per specifiche"
    );
}

// ═══════════════════════════════════════════════════════════════════════════
// MINIMAL TEMPLATE
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_minimal_template_columns() {
    let dir = TempDir::new().unwrap();
    let rows = convert_sample(&dir, Template::Minimal);
    let headers: Vec<String> = rows[0].iter().map(text).collect();

    assert_eq!(headers.len(), 17);
    assert!(!headers.contains(&"Item photo URL".to_string()));
    assert!(!headers.contains(&"Manufacturer Name".to_string()));
    assert_eq!(rows.len(), 4);
    assert_eq!(text(&rows[3][column(&rows, "C:Capienza")]), "Sconosciuto");
}

// ═══════════════════════════════════════════════════════════════════════════
// ERRORS AND DETERMINISM
// ═══════════════════════════════════════════════════════════════════════════

#[test]
fn test_missing_sku_halts_without_output() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("no_sku.xlsx");
    let rows: Vec<Vec<Cell>> = sample_rows()
        .into_iter()
        .map(|r| r.into_iter().skip(1).collect())
        .collect();
    write_catalog(&input, &CATALOG_HEADERS[1..], &rows);

    let table = CatalogImporter::from_path(&input).unwrap();
    match convert(&table, Template::Full, &CatalogConstants::default()) {
        Err(FeedError::MissingColumns(missing)) => assert_eq!(missing, vec!["sku"]),
        other => panic!("Expected MissingColumns, got {:?}", other),
    }
}

#[test]
fn test_header_only_catalog_gives_header_only_feed() {
    let dir = TempDir::new().unwrap();
    let input = dir.path().join("empty.xlsx");
    write_catalog(&input, &CATALOG_HEADERS, &[]);
    let output = dir.path().join("out.xlsx");

    let table = CatalogImporter::from_path(&input).unwrap();
    let feed = convert(&table, Template::Full, &CatalogConstants::default()).unwrap();
    assert!(feed.is_empty());
    FeedExporter::new(&feed).export(&output).unwrap();

    let (_, rows) = read_feed(&output);
    assert_eq!(rows.len(), 1);
}

#[test]
fn test_rerun_is_identical() {
    let dir = TempDir::new().unwrap();
    let input = sample_catalog(dir.path());
    let constants = CatalogConstants::default();

    let first = convert(
        &CatalogImporter::from_path(&input).unwrap(),
        Template::Full,
        &constants,
    )
    .unwrap();
    let second = convert(
        &CatalogImporter::from_path(&input).unwrap(),
        Template::Full,
        &constants,
    )
    .unwrap();

    assert_eq!(first, second);
    assert_eq!(first.descriptions(), second.descriptions());
}

#[test]
fn test_constants_override_reaches_output() {
    let mut constants = CatalogConstants::default();
    constants.listing.location = "00100".to_string();
    constants.manufacturer.email = "info@example.it".to_string();

    let dir = TempDir::new().unwrap();
    let input = sample_catalog(dir.path());
    let table = CatalogImporter::from_path(&input).unwrap();
    let feed = convert(&table, Template::Full, &constants).unwrap();

    assert_eq!(feed.listings[0].text(Field::Location), "00100");
    assert_eq!(feed.listings[2].text(Field::ManufacturerEmail), "info@example.it");
}
