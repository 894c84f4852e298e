use serde_json::{json, Value};

use invoice_press::generators::assembler::PAGE_BREAK_MARKER;
use invoice_press::generators::{
    CodeEncoder, DocumentAssembler, GeneratorError, QrSvgEncoder, Selection,
};
use invoice_press::records::{build_invoice_map, Record};

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

/// Encoder stub returning a marker derived from the payload.
struct StubEncoder;

impl CodeEncoder for StubEncoder {
    fn encode(&self, payload: &str) -> Result<String, GeneratorError> {
        Ok(format!("stub:{payload}"))
    }
}

#[test]
fn test_render_all_with_real_qr_references() {
    let records = batch(json!([
        {"invoice_id": "A1", "total": 10, "customer_name": "X"},
        {"invoice_id": "A2", "total": 20, "customer": "Y"}
    ]));
    let (key, invoices) = build_invoice_map(&records).unwrap();

    let encoder = QrSvgEncoder;
    let assembler = DocumentAssembler::new("{{invoice_id}} {{total}} {{qr_src}}", &encoder);
    let assembled = assembler
        .assemble(&Selection::All, &invoices, &key)
        .unwrap();

    // Two fragments joined by one page break, identifier text intact,
    // no unresolved tokens.
    assert_eq!(assembled.markup.matches(PAGE_BREAK_MARKER).count(), 1);
    assert!(assembled.markup.contains("A1 10 data:image/svg+xml;base64,"));
    assert!(assembled.markup.contains("A2 20 data:image/svg+xml;base64,"));
    assert!(!assembled.markup.contains("{{"));

    // Each record gets its own code reference.
    let references: Vec<&str> = assembled
        .markup
        .split_whitespace()
        .filter(|word| word.starts_with("data:image/svg+xml;base64,"))
        .collect();
    assert_eq!(references.len(), 2);
    assert_ne!(references[0], references[1]);
}

#[test]
fn test_page_break_count_grows_with_the_batch() {
    let records = batch(json!([
        {"id": "A"}, {"id": "B"}, {"id": "C"}
    ]));
    let (key, invoices) = build_invoice_map(&records).unwrap();

    let encoder = StubEncoder;
    let assembler = DocumentAssembler::new("{{id}}", &encoder);
    let assembled = assembler
        .assemble(&Selection::All, &invoices, &key)
        .unwrap();

    assert_eq!(assembled.markup.matches(PAGE_BREAK_MARKER).count(), 2);
    assert!(assembled.markup.ends_with('C'));
}

#[test]
fn test_single_selection_not_found() {
    let records = batch(json!([{"invoice_id": "A1"}]));
    let (key, invoices) = build_invoice_map(&records).unwrap();

    let encoder = StubEncoder;
    let assembler = DocumentAssembler::new("{{invoice_id}}", &encoder);
    let result = assembler.assemble(
        &Selection::Invoice("missing".to_string()),
        &invoices,
        &key,
    );

    assert!(matches!(
        result,
        Err(GeneratorError::InvoiceNotFound(id)) if id == "missing"
    ));
}

#[test]
fn test_nested_fields_render_through_dotted_tokens() {
    let records = batch(json!([
        {"invoice_id": "A1", "customer": {"name": "X", "city": "Riga"}}
    ]));
    let (key, invoices) = build_invoice_map(&records).unwrap();

    let encoder = StubEncoder;
    let assembler =
        DocumentAssembler::new("{{customer.name}} / {{customer.city}}", &encoder);
    let assembled = assembler
        .assemble(&Selection::Invoice("A1".to_string()), &invoices, &key)
        .unwrap();

    assert_eq!(assembled.markup, "X / Riga");
}
