//! Shared fixtures: catalog workbooks written with rust_xlsxwriter,
//! feeds read back with calamine.

#![allow(dead_code)]

use calamine::{open_workbook, Data, Reader, Xlsx};
use rust_xlsxwriter::Workbook;
use std::path::{Path, PathBuf};

/// A catalog cell in a fixture
pub enum Cell {
    Text(&'static str),
    Number(f64),
    Blank,
}

pub const CATALOG_HEADERS: [&str; 14] = [
    "SKU",
    "Formato (L)",
    "Nome Olio",
    "Viscosità",
    "Tipologia",
    "ACEA",
    "Marca",
    "Prezzo Marketplace",
    "Codice Prodotto",
    "Utilizzo",
    "Descrizione",
    "img1",
    "img2",
    "img3",
];

/// Three catalog rows covering singular/plural/unknown capacity and photo gaps
pub fn sample_rows() -> Vec<Vec<Cell>> {
    use Cell::*;
    vec![
        vec![
            Text("TAM-1"),
            Number(1.0),
            Text("Tamoil Sint Future"),
            Text("5W-30"),
            Text("Sintetico"),
            Text("C3"),
            Text("Tamoil"),
            Number(12.5),
            Text("RT-0130"),
            Text("Benzina"),
            Text("Riga1\n\nRiga2  \n"),
            Text("a.jpg"),
            Blank,
            Text("c.jpg"),
        ],
        vec![
            Text("TAM-5"),
            Number(5.0),
            Text("Tamoil Sint Future"),
            Text("5W-40"),
            Text("Sintetico"),
            Text("A3/B4"),
            Text("Tamoil"),
            Number(39.9),
            Text("RT-0540"),
            Text("Diesel"),
            Blank,
            Blank,
            Blank,
            Blank,
        ],
        vec![
            Text("TAM-X"),
            Text("abc"),
            Text("Tamoil Racing"),
            Text("10W-60"),
            Text("Sintetico"),
            Text("A3/B4"),
            Text("Tamoil"),
            Number(54.0),
            Text("RT-1060"),
            Text("Racing"),
            Text("Solo pista"),
            Text("x.jpg"),
            Text("y.jpg"),
            Blank,
        ],
    ]
}

/// Write a single-sheet catalog workbook
pub fn write_catalog(path: &Path, headers: &[&str], rows: &[Vec<Cell>]) {
    let mut workbook = Workbook::new();
    let sheet = workbook.add_worksheet();
    sheet.set_name("Catalogo").unwrap();
    for (col, header) in headers.iter().enumerate() {
        sheet.write_string(0, col as u16, *header).unwrap();
    }
    for (r, row) in rows.iter().enumerate() {
        let excel_row = (r + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            match cell {
                Cell::Text(s) => {
                    sheet.write_string(excel_row, col as u16, *s).unwrap();
                }
                Cell::Number(n) => {
                    sheet.write_number(excel_row, col as u16, *n).unwrap();
                }
                Cell::Blank => {}
            }
        }
    }
    workbook.save(path).unwrap();
}

/// Write the sample catalog into `dir` and return its path
pub fn sample_catalog(dir: &Path) -> PathBuf {
    let path = dir.join("catalogo.xlsx");
    write_catalog(&path, &CATALOG_HEADERS, &sample_rows());
    path
}

/// Sample catalog as in-memory bytes
pub fn sample_catalog_bytes() -> Vec<u8> {
    let dir = tempfile::TempDir::new().unwrap();
    let path = sample_catalog(dir.path());
    std::fs::read(path).unwrap()
}

/// Read a feed workbook back: (sheet names, rows of cells including header)
pub fn read_feed(path: &Path) -> (Vec<String>, Vec<Vec<Data>>) {
    let mut workbook: Xlsx<_> = open_workbook(path).unwrap();
    let names = workbook.sheet_names();
    let range = workbook.worksheet_range(&names[0]).unwrap();
    let rows = range.rows().map(|r| r.to_vec()).collect();
    (names, rows)
}

/// Column position of `header` in a feed's header row
pub fn column(rows: &[Vec<Data>], header: &str) -> usize {
    rows[0]
        .iter()
        .position(|c| c.to_string() == header)
        .unwrap_or_else(|| panic!("missing header {}", header))
}

/// Text of a cell (empty string for blank cells)
pub fn text(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}
