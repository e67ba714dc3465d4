//! OilFeed API Server module
//!
//! HTTP API for upload-and-convert integrations.
//! Run with `oilfeed-server`.

pub mod handlers;
pub mod server;

pub use server::{router, run_api_server, ApiConfig, AppState};
