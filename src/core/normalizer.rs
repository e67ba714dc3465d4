//! Header normalization
//!
//! Catalog authors type headers as "Viscosità", " Nome Olio " or "VISCOSITA".
//! All of them must match the same required column.

use unicode_normalization::char::canonical_combining_class;
use unicode_normalization::UnicodeNormalization as _;

/// Strip diacritics, trim and lowercase a column header.
///
/// Characters are NFKD-decomposed and every combining mark is dropped, so
/// `"Viscosità"` becomes `"viscosita"`.
pub fn normalize_column_name(name: &str) -> String {
    let stripped: String = name
        .nfkd()
        .filter(|c| canonical_combining_class(*c) == 0)
        .collect();
    stripped.trim().to_lowercase()
}
