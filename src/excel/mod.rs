//! Excel import/export for catalogs and eBay feeds
//!
//! - Import: catalog workbook (.xlsx) → normalized `InputTable`
//! - Export: `OutputTable` → single-sheet eBay workbook (.xlsx)

mod exporter;
mod importer;

pub use exporter::{FeedExporter, FEED_FILE_NAME, FEED_SHEET_NAME, XLSX_MIME_TYPE};
pub use importer::CatalogImporter;
