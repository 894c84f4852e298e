//! Invoice identifier inference and lookup.

use indexmap::IndexMap;

use super::model::{value_text, Record};
use super::RecordError;

/// Lookup from stringified invoice identifier to its owning record, in
/// input order. A later record with the same identifier replaces the
/// earlier one.
pub type InvoiceMap = IndexMap<String, Record>;

/// Field names recognised as invoice identifiers, matched case-insensitively.
const IDENTIFIER_CANDIDATES: [&str; 4] = ["invoice_id", "invoiceid", "invoice", "id"];

/// Find the field that names invoices in this batch.
///
/// Scans records in input order and returns the first key whose lowercase
/// form is a known candidate. That literal key is used for the whole
/// batch; the candidate list carries no priority between its entries.
pub fn find_invoice_key(records: &[Record]) -> Option<String> {
    for record in records {
        for key in record.keys() {
            if IDENTIFIER_CANDIDATES.contains(&key.to_lowercase().as_str()) {
                return Some(key.clone());
            }
        }
    }
    None
}

/// Group records by their invoice identifier.
///
/// Records lacking the chosen key are skipped silently. Fails with
/// `MissingIdentifier` when no record carries any candidate field, which
/// aborts the run before any rendering.
pub fn build_invoice_map(records: &[Record]) -> Result<(String, InvoiceMap), RecordError> {
    let invoice_key = find_invoice_key(records).ok_or(RecordError::MissingIdentifier)?;

    let mut invoices = InvoiceMap::new();
    for record in records {
        if let Some(value) = record.get(&invoice_key) {
            invoices.insert(value_text(value), record.clone());
        }
    }
    Ok((invoice_key, invoices))
}
