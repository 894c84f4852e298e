//! Loaders for tabular (CSV) and structured (JSON) invoice data.

use std::fs;
use std::path::Path;

use serde_json::Value;

use super::model::Record;
use super::RecordError;

/// Load records from a data file, dispatching on the file extension.
///
/// `.csv` (case-insensitive) is read as tabular data; anything else is
/// parsed as JSON.
pub fn load_records(path: &Path) -> Result<Vec<Record>, RecordError> {
    let tabular = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);

    if tabular {
        load_csv_records(path)
    } else {
        load_json_records(path)
    }
}

/// Read a CSV file into records, one per row.
///
/// Column headers become field names and each cell keeps its inferred
/// scalar type.
pub fn load_csv_records(path: &Path) -> Result<Vec<Record>, RecordError> {
    let mut reader = csv::Reader::from_path(path)?;
    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for row in reader.records() {
        let row = row?;
        let mut record = Record::new();
        for (header, cell) in headers.iter().zip(row.iter()) {
            record.insert(header.to_string(), infer_cell_value(cell));
        }
        records.push(record);
    }
    Ok(records)
}

/// Parse a JSON file and normalize it into a record sequence.
pub fn load_json_records(path: &Path) -> Result<Vec<Record>, RecordError> {
    let text = fs::read_to_string(path).map_err(RecordError::Io)?;
    let data: Value = serde_json::from_str(&text).map_err(RecordError::Json)?;
    collect_json_records(data)
}

/// Normalize a parsed JSON document into a record sequence.
///
/// A root array must contain only objects. A root object is searched for
/// its first value that is a non-empty array starting with an object and
/// that array becomes the record set; when none exists the root object
/// itself is a single record. Any other root is a schema error.
pub fn collect_json_records(data: Value) -> Result<Vec<Record>, RecordError> {
    match data {
        Value::Array(items) => items.into_iter().map(into_record).collect(),
        Value::Object(map) => {
            let mut entries: Vec<(String, Value)> = map.into_iter().collect();
            let nested = entries.iter().position(|(_, value)| match value {
                Value::Array(items) => items.first().map_or(false, Value::is_object),
                _ => false,
            });
            match nested {
                Some(index) => match entries.swap_remove(index).1 {
                    Value::Array(items) => items.into_iter().map(into_record).collect(),
                    _ => Err(RecordError::Schema(
                        "record set is not an array".to_string(),
                    )),
                },
                None => Ok(vec![entries.into_iter().collect()]),
            }
        }
        other => Err(RecordError::Schema(format!(
            "expected an array or object at the JSON root, found {}",
            json_type_name(&other)
        ))),
    }
}

fn into_record(item: Value) -> Result<Record, RecordError> {
    match item {
        Value::Object(map) => Ok(map),
        other => Err(RecordError::Schema(format!(
            "expected every record to be an object, found {}",
            json_type_name(&other)
        ))),
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

/// Interpret a raw CSV cell as the narrowest matching scalar.
///
/// Tried in order: integer, float, boolean, string. An empty cell is null.
fn infer_cell_value(cell: &str) -> Value {
    let trimmed = cell.trim();
    if trimmed.is_empty() {
        return Value::Null;
    }
    if let Ok(integer) = trimmed.parse::<i64>() {
        return Value::from(integer);
    }
    if let Ok(float) = trimmed.parse::<f64>() {
        return Value::from(float);
    }
    if trimmed.eq_ignore_ascii_case("true") {
        return Value::Bool(true);
    }
    if trimmed.eq_ignore_ascii_case("false") {
        return Value::Bool(false);
    }
    Value::String(cell.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_infer_cell_value() {
        assert_eq!(infer_cell_value("10"), json!(10));
        assert_eq!(infer_cell_value("10.5"), json!(10.5));
        assert_eq!(infer_cell_value("true"), json!(true));
        assert_eq!(infer_cell_value("FALSE"), json!(false));
        assert_eq!(infer_cell_value(""), json!(null));
        assert_eq!(infer_cell_value("INV-001"), json!("INV-001"));
    }

    #[test]
    fn test_collect_root_array() {
        let records =
            collect_json_records(json!([{"id": "A1"}, {"id": "A2"}])).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[1]["id"], json!("A2"));
    }

    #[test]
    fn test_collect_root_array_rejects_non_objects() {
        let result = collect_json_records(json!([{"id": "A1"}, 42]));
        assert!(matches!(result, Err(RecordError::Schema(_))));
    }

    #[test]
    fn test_collect_root_object_picks_first_record_array() {
        let records =
            collect_json_records(json!({"meta": {}, "rows": [{"id": "B1"}]})).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["id"], json!("B1"));
    }

    #[test]
    fn test_collect_root_object_without_record_array_is_single_record() {
        let records =
            collect_json_records(json!({"id": "C1", "total": 5})).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0]["total"], json!(5));
    }

    #[test]
    fn test_collect_root_scalar_is_schema_error() {
        let result = collect_json_records(json!("just a string"));
        assert!(matches!(result, Err(RecordError::Schema(_))));
    }

    #[test]
    fn test_collect_skips_scalar_arrays_when_searching_the_root_object() {
        // "tags" is an array but not of objects, so "rows" wins.
        let records = collect_json_records(json!({
            "tags": ["a", "b"],
            "rows": [{"id": "D1"}]
        }))
        .unwrap();
        assert_eq!(records[0]["id"], json!("D1"));
    }
}
