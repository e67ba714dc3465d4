//! End-to-end conversion: catalog table in, eBay feed out

use crate::config::CatalogConstants;
use crate::core::mapper::ListingMapper;
use crate::error::FeedResult;
use crate::types::{InputTable, OutputTable, Template};
use tracing::info;

/// Convert a normalized catalog into a feed for `template`.
///
/// Fails with `MissingColumns` before any row is mapped; otherwise returns
/// exactly one listing per catalog row, in catalog order.
pub fn convert(
    table: &InputTable,
    template: Template,
    constants: &CatalogConstants,
) -> FeedResult<OutputTable> {
    let mapper = ListingMapper::new(constants.clone());
    let listings = mapper.map_table(table)?;

    info!(
        rows = listings.len(),
        template = %template,
        "catalog converted"
    );

    Ok(OutputTable::new(template, listings))
}
