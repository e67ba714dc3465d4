//! Catalog importer - Excel (.xlsx) → InputTable

use crate::core::normalizer::normalize_column_name;
use crate::error::{FeedError, FeedResult};
use crate::types::{CellValue, InputTable};
use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use std::io::{Cursor, Read, Seek};
use std::path::Path;
use tracing::debug;

/// Reads the first worksheet of a catalog workbook
pub struct CatalogImporter;

impl CatalogImporter {
    /// Import a catalog from a file on disk
    pub fn from_path<P: AsRef<Path>>(path: P) -> FeedResult<InputTable> {
        let path = path.as_ref();
        let workbook: Xlsx<_> = open_workbook(path).map_err(|e| {
            FeedError::Import(format!(
                "Failed to open Excel file {}: {}",
                path.display(),
                e
            ))
        })?;
        Self::read_first_sheet(workbook)
    }

    /// Import a catalog from an uploaded workbook held in memory
    pub fn from_bytes(bytes: &[u8]) -> FeedResult<InputTable> {
        let workbook = Xlsx::new(Cursor::new(bytes))
            .map_err(|e| FeedError::Import(format!("Failed to read Excel data: {}", e)))?;
        Self::read_first_sheet(workbook)
    }

    fn read_first_sheet<RS: Read + Seek>(mut workbook: Xlsx<RS>) -> FeedResult<InputTable> {
        let sheet_name = workbook
            .sheet_names()
            .first()
            .cloned()
            .ok_or_else(|| FeedError::Import("Workbook has no worksheets".to_string()))?;

        let range = workbook
            .worksheet_range(&sheet_name)
            .map_err(|e| FeedError::Import(format!("Failed to read sheet '{}': {}", sheet_name, e)))?;

        let table = Self::table_from_range(&range);
        debug!(
            sheet = %sheet_name,
            columns = table.columns().len(),
            rows = table.len(),
            "catalog sheet loaded"
        );
        Ok(table)
    }

    /// Header row → normalized column names, remaining rows → data.
    /// Rows with no content at all are spreadsheet padding and are skipped.
    fn table_from_range(range: &Range<Data>) -> InputTable {
        let mut rows = range.rows();

        let columns: Vec<String> = match rows.next() {
            Some(header) => header
                .iter()
                .enumerate()
                .map(|(idx, cell)| Self::header_name(idx, cell))
                .collect(),
            None => return InputTable::default(),
        };

        let mut table = InputTable::new(columns);
        for row in rows {
            let cells: Vec<CellValue> = row.iter().map(Self::convert_cell).collect();
            if cells.iter().all(|c| matches!(c, CellValue::Empty)) {
                continue;
            }
            table.push_row(cells);
        }
        table
    }

    fn header_name(idx: usize, cell: &Data) -> String {
        let raw = Self::convert_cell(cell).to_string();
        if raw.trim().is_empty() {
            format!("unnamed: {}", idx)
        } else {
            normalize_column_name(&raw)
        }
    }

    /// Convert a calamine cell to a CellValue
    fn convert_cell(cell: &Data) -> CellValue {
        match cell {
            Data::Empty | Data::Error(_) => CellValue::Empty,
            Data::String(s) => CellValue::Text(s.clone()),
            Data::Float(f) => CellValue::Number(*f),
            Data::Int(i) => CellValue::Number(*i as f64),
            Data::Bool(b) => CellValue::Bool(*b),
            other => CellValue::Text(other.to_string()),
        }
    }
}
