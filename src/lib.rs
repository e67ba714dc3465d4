//! OilFeed - motor-oil catalog to eBay bulk-listing feed
//!
//! Reads a catalog workbook, normalizes its headers, derives the eBay File
//! Exchange columns for every row and writes them to a new workbook, along
//! with an HTML preview of the generated descriptions.
//!
//! # Example
//!
//! ```no_run
//! use oilfeed::config::CatalogConstants;
//! use oilfeed::excel::{CatalogImporter, FeedExporter};
//! use oilfeed::types::Template;
//! use std::path::Path;
//!
//! let table = CatalogImporter::from_path("catalogo.xlsx")?;
//! let feed = oilfeed::core::convert(&table, Template::Full, &CatalogConstants::default())?;
//!
//! println!("Listings: {}", feed.len());
//! FeedExporter::new(&feed).export(Path::new("ebay_output.xlsx"))?;
//! # Ok::<(), oilfeed::error::FeedError>(())
//! ```

pub mod api;
pub mod cli;
pub mod config;
pub mod core;
pub mod error;
pub mod excel;
pub mod preview;
pub mod types;

// Re-export commonly used types
pub use config::CatalogConstants;
pub use error::{FeedError, FeedResult};
pub use types::{CellValue, InputTable, Listing, OutputTable, Template};
