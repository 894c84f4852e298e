//! Shared helpers for document generation.

use chrono::Local;
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref UNSAFE_RUN: Regex =
        Regex::new(r"[^\w.-]+").expect("filename pattern must compile");
}

/// Sanitize an invoice identifier for use as an output file stem.
///
/// Runs of characters outside `[\w.-]` collapse to a single `_`. An
/// identifier with nothing usable yields "invoice".
pub fn sanitize_file_stem(value: &str) -> String {
    let clean = UNSAFE_RUN.replace_all(value.trim(), "_").into_owned();
    if clean.is_empty() {
        "invoice".to_string()
    } else {
        clean
    }
}

/// Timestamp recorded on generated documents, local time.
pub fn format_timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S").to_string()
}
