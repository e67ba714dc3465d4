//! Required-column check, run before any row is mapped

use crate::error::{FeedError, FeedResult};

/// Normalized headers every catalog must carry
pub const REQUIRED_COLUMNS: [&str; 10] = [
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
];

/// Optional free-text column rendered into the HTML description
pub const DESCRIPTION_COLUMN: &str = "descrizione";

/// Columns starting with this prefix hold photo URLs
pub const IMAGE_COLUMN_PREFIX: &str = "img";

/// Required columns absent from `columns`, in required order
pub fn missing_columns<S: AsRef<str>>(columns: &[S]) -> Vec<String> {
    REQUIRED_COLUMNS
        .iter()
        .filter(|required| !columns.iter().any(|c| c.as_ref() == **required))
        .map(|required| required.to_string())
        .collect()
}

/// Fail with [`FeedError::MissingColumns`] when any required column is absent
pub fn check_required_columns<S: AsRef<str>>(columns: &[S]) -> FeedResult<()> {
    let missing = missing_columns(columns);
    if missing.is_empty() {
        Ok(())
    } else {
        Err(FeedError::MissingColumns(missing))
    }
}
