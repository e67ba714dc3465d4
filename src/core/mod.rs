//! Catalog → eBay listing transformation

pub mod capacity;
pub mod description;
pub mod mapper;
pub mod normalizer;
pub mod pipeline;
pub mod validator;

pub use capacity::format_capacity;
pub use description::render_description;
pub use mapper::{build_title, join_photo_urls, ListingMapper};
pub use normalizer::normalize_column_name;
pub use pipeline::convert;
pub use validator::{check_required_columns, missing_columns, REQUIRED_COLUMNS};
