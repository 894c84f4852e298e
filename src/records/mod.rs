//! Record loading and grouping.
//!
//! This module is split into submodules for better separation of concerns:
//! - `model` - the record value model and leaf stringification
//! - `loader` - CSV and JSON loaders
//! - `flatten` - dotted-key flattening of nested records
//! - `identity` - invoice identifier inference and lookup

pub mod flatten;
pub mod identity;
pub mod loader;
pub mod model;

pub use flatten::flatten_record;
pub use identity::{build_invoice_map, find_invoice_key, InvoiceMap};
pub use loader::load_records;
pub use model::{value_text, FlatRecord, Record, RenderContext};

use thiserror::Error;

/// Errors that can occur while loading or grouping records.
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("failed to read data file: {0}")]
    Io(#[source] std::io::Error),
    #[error("failed to parse CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to parse JSON data: {0}")]
    Json(#[source] serde_json::Error),
    #[error("unsupported data layout: {0}")]
    Schema(String),
    #[error("no invoice identifier field found in the data")]
    MissingIdentifier,
}
