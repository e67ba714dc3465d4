//! `C:Capienza` label from the pack size column

use crate::types::CellValue;

/// Label used when the size cannot be read as a number
pub const UNKNOWN_CAPACITY: &str = "Sconosciuto";

/// Format a pack size in litres.
///
/// Exactly one litre is singular (`"1 Litro"`), anything else is the
/// truncated integer followed by `"Litri"`. Unreadable sizes never fail the
/// run; they become [`UNKNOWN_CAPACITY`].
pub fn format_capacity(size: &CellValue) -> String {
    match size.as_f64().filter(|v| v.is_finite()) {
        Some(v) if v == 1.0 => "1 Litro".to_string(),
        // `+ 0.0` folds -0 into 0 so sizes in (-1, 0) print as "0 Litri"
        Some(v) => format!("{:.0} Litri", v.trunc() + 0.0),
        None => {
            tracing::debug!(value = %size, "pack size is not numeric, using fallback label");
            UNKNOWN_CAPACITY.to_string()
        }
    }
}
