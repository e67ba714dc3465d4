//! CLI command handlers

pub mod commands;

pub use commands::{check, columns, constants, convert, preview};
