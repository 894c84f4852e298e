//! The record value model.
//!
//! Input rows and objects have no fixed schema, so a record is an ordered
//! string-keyed map over `serde_json::Value` (the `preserve_order` feature
//! keeps fields in source order).

use serde_json::Value;

/// One input entity's field-value data, in source field order.
pub type Record = serde_json::Map<String, Value>;

/// A record with nested objects collapsed into dotted keys.
pub type FlatRecord = serde_json::Map<String, Value>;

/// A flat record plus render-time synthetic keys (the QR image reference).
pub type RenderContext = FlatRecord;

/// Stringify a leaf value for substitution, payloads, and map keys.
///
/// Strings render verbatim, numbers and booleans in their canonical text
/// form, null as the empty string, and anything else as compact JSON.
pub fn value_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(text) => text.clone(),
        Value::Bool(flag) => flag.to_string(),
        Value::Number(number) => number.to_string(),
        other => other.to_string(),
    }
}
