//! Assembly of selected invoices into combined, paginated markup.

use crate::records::flatten::flatten_record;
use crate::records::identity::InvoiceMap;
use crate::records::model::{value_text, Record};
use crate::template::render_template;

use super::common::sanitize_file_stem;
use super::traits::CodeEncoder;
use super::GeneratorError;

/// Context key the generated QR image reference is injected under.
pub const QR_CONTEXT_KEY: &str = "qr_src";

/// Markup directive starting a new page in the rendered document.
pub const PAGE_BREAK_MARKER: &str = "<div style=\"page-break-after: always;\"></div>";

/// File stem used when every invoice is rendered into one document.
const BATCH_FILE_STEM: &str = "invoice_all";

/// Which invoices to render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// Every invoice in the map, in input order.
    All,
    /// A single invoice by identifier value.
    Invoice(String),
}

/// Combined markup ready for the document renderer.
#[derive(Debug)]
pub struct AssembledDocument {
    pub markup: String,
    pub file_stem: String,
}

/// Renders selected invoices through the template and joins the fragments
/// with page breaks.
pub struct DocumentAssembler<'a> {
    template: String,
    encoder: &'a dyn CodeEncoder,
}

impl<'a> DocumentAssembler<'a> {
    pub fn new(template: impl Into<String>, encoder: &'a dyn CodeEncoder) -> Self {
        Self {
            template: template.into(),
            encoder,
        }
    }

    /// Assemble the combined markup for a selection.
    ///
    /// Each record is flattened into a render context, its QR payload is
    /// encoded and injected under `qr_src`, and the template substituted.
    /// Every fragment except the last is suffixed with the page-break
    /// marker. Fails with `InvoiceNotFound` when a single selected
    /// identifier is absent; encoder failures propagate.
    pub fn assemble(
        &self,
        selection: &Selection,
        invoices: &InvoiceMap,
        invoice_key: &str,
    ) -> Result<AssembledDocument, GeneratorError> {
        let selected: Vec<&Record> = match selection {
            Selection::All => invoices.values().collect(),
            Selection::Invoice(id) => {
                let record = invoices
                    .get(id)
                    .ok_or_else(|| GeneratorError::InvoiceNotFound(id.clone()))?;
                vec![record]
            }
        };

        let mut fragments = Vec::with_capacity(selected.len());
        for (index, record) in selected.iter().enumerate() {
            let mut context = flatten_record(record);
            let reference = self.encoder.encode(&qr_payload(record, invoice_key))?;
            context.insert(QR_CONTEXT_KEY.to_string(), reference.into());

            let mut rendered = render_template(&self.template, &context);
            if index < selected.len() - 1 {
                rendered.push('\n');
                rendered.push_str(PAGE_BREAK_MARKER);
            }
            fragments.push(rendered);
        }

        let file_stem = match selection {
            Selection::All => BATCH_FILE_STEM.to_string(),
            Selection::Invoice(id) => format!("invoice_{}", sanitize_file_stem(id)),
        };

        Ok(AssembledDocument {
            markup: fragments.join("\n"),
            file_stem,
        })
    }
}

/// Payload embedded in each invoice's QR code.
///
/// Built from the raw record: the identifier value under the chosen key,
/// the `total` field, and the customer name (`customer_name`, falling
/// back to `customer`; empty values are treated as absent).
fn qr_payload(record: &Record, invoice_key: &str) -> String {
    let id = record.get(invoice_key).map(value_text).unwrap_or_default();
    let total = record.get("total").map(value_text).unwrap_or_default();
    let customer = ["customer_name", "customer"]
        .iter()
        .filter_map(|key| record.get(*key).map(value_text))
        .find(|name| !name.is_empty())
        .unwrap_or_default();
    format!("invoice:{id};total:{total};customer:{customer}")
}
