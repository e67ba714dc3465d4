//! Feed exporter - OutputTable → eBay File Exchange workbook

use crate::error::{FeedError, FeedResult};
use crate::types::{CellValue, OutputTable};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// Name of the single worksheet eBay's uploader reads
pub const FEED_SHEET_NAME: &str = "eBay";

/// Suggested download name for the generated feed
pub const FEED_FILE_NAME: &str = "ebay_output.xlsx";

/// MIME type of an .xlsx file
pub const XLSX_MIME_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// Writes a derived feed to a single-sheet workbook
pub struct FeedExporter<'a> {
    feed: &'a OutputTable,
}

impl<'a> FeedExporter<'a> {
    pub fn new(feed: &'a OutputTable) -> Self {
        Self { feed }
    }

    /// Export the feed to an .xlsx file
    pub fn export(&self, output_path: &Path) -> FeedResult<()> {
        let mut workbook = self.build_workbook()?;
        workbook
            .save(output_path)
            .map_err(|e| FeedError::Export(format!("Failed to save Excel file: {}", e)))?;
        Ok(())
    }

    /// Serialize the feed to .xlsx bytes (for downloads)
    pub fn to_buffer(&self) -> FeedResult<Vec<u8>> {
        let mut workbook = self.build_workbook()?;
        workbook
            .save_to_buffer()
            .map_err(|e| FeedError::Export(format!("Failed to serialize Excel file: {}", e)))
    }

    fn build_workbook(&self) -> FeedResult<Workbook> {
        let mut workbook = Workbook::new();
        let header_format = Format::new().set_bold();

        let worksheet = workbook.add_worksheet();
        worksheet
            .set_name(FEED_SHEET_NAME)
            .map_err(|e| FeedError::Export(format!("Failed to set worksheet name: {}", e)))?;

        // Header row
        for (col_idx, header) in self.feed.headers().iter().enumerate() {
            worksheet
                .write_string_with_format(0, col_idx as u16, *header, &header_format)
                .map_err(|e| FeedError::Export(format!("Failed to write header: {}", e)))?;
        }

        // Data rows (starting at row 1)
        for row_idx in 0..self.feed.len() {
            let Some(cells) = self.feed.row(row_idx) else {
                continue;
            };
            let excel_row = (row_idx + 1) as u32;
            for (col_idx, cell) in cells.into_iter().enumerate() {
                Self::write_cell(worksheet, excel_row, col_idx as u16, cell)?;
            }
        }

        Ok(workbook)
    }

    /// Write a single cell; empty cells are left blank
    fn write_cell(
        worksheet: &mut Worksheet,
        row: u32,
        col: u16,
        value: &CellValue,
    ) -> FeedResult<()> {
        match value {
            CellValue::Empty => {}
            CellValue::Text(text) if text.is_empty() => {}
            CellValue::Text(text) => {
                worksheet
                    .write_string(row, col, text)
                    .map_err(|e| FeedError::Export(format!("Failed to write text: {}", e)))?;
            }
            CellValue::Number(n) => {
                worksheet
                    .write_number(row, col, *n)
                    .map_err(|e| FeedError::Export(format!("Failed to write number: {}", e)))?;
            }
            CellValue::Bool(b) => {
                worksheet
                    .write_boolean(row, col, *b)
                    .map_err(|e| FeedError::Export(format!("Failed to write boolean: {}", e)))?;
            }
        }
        Ok(())
    }
}
