use serde_json::{json, Value};

use invoice_press::records::{build_invoice_map, find_invoice_key, Record, RecordError};

fn batch(value: Value) -> Vec<Record> {
    match value {
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(map) => map,
                _ => panic!("fixture records must be objects"),
            })
            .collect(),
        _ => panic!("fixture must be an array"),
    }
}

#[test]
fn test_every_record_with_the_chosen_key_is_mapped() {
    let records = batch(json!([
        {"Invoice": "A1", "total": 10},
        {"Invoice": "A2", "total": 20},
        {"invoice": "lowercase key, not the chosen literal"},
        {"total": 30}
    ]));

    let (key, invoices) = build_invoice_map(&records).unwrap();
    assert_eq!(key, "Invoice");
    // Only records carrying the literal "Invoice" key participate; the
    // lowercase variant and the keyless record are absent.
    assert_eq!(invoices.len(), 2);
    assert!(invoices.contains_key("A1"));
    assert!(invoices.contains_key("A2"));
}

#[test]
fn test_chosen_key_is_not_re_resolved_per_record() {
    let records = batch(json!([
        {"invoiceid": "A1"},
        {"invoice_id": "A2"}
    ]));

    let (key, invoices) = build_invoice_map(&records).unwrap();
    assert_eq!(key, "invoiceid");
    assert_eq!(invoices.len(), 1);
    assert!(invoices.contains_key("A1"));
}

#[test]
fn test_map_keeps_input_order() {
    let records = batch(json!([
        {"id": "C"},
        {"id": "A"},
        {"id": "B"}
    ]));

    let (_, invoices) = build_invoice_map(&records).unwrap();
    let ids: Vec<&str> = invoices.keys().map(String::as_str).collect();
    assert_eq!(ids, ["C", "A", "B"]);
}

#[test]
fn test_no_candidate_anywhere_aborts() {
    let records = batch(json!([{"customer": "X"}, {"total": 10}]));
    assert_eq!(find_invoice_key(&records), None);
    assert!(matches!(
        build_invoice_map(&records),
        Err(RecordError::MissingIdentifier)
    ));
}
