//! Dotted-key flattening of nested records.

use serde_json::Value;

use super::model::{FlatRecord, Record};

/// Collapse nested objects into dotted keys (`address.city`).
///
/// Walks the record depth-first in its own key order. Only nested objects
/// are descended into; sequences and scalars are stored as-is under the
/// accumulated key.
pub fn flatten_record(record: &Record) -> FlatRecord {
    let mut flat = FlatRecord::new();
    flatten_into(record, "", &mut flat);
    flat
}

fn flatten_into(record: &Record, prefix: &str, flat: &mut FlatRecord) {
    for (key, value) in record {
        let full_key = if prefix.is_empty() {
            key.clone()
        } else {
            format!("{prefix}.{key}")
        };
        match value {
            Value::Object(nested) => flatten_into(nested, &full_key, flat),
            other => {
                flat.insert(full_key, other.clone());
            }
        }
    }
}
