//! invoice-press
//!
//! Renders invoice records (CSV or JSON) through an HTML template into a
//! single paginated PDF, one QR code per invoice.

pub mod config;
pub mod fonts;
pub mod generators;
pub mod records;
pub mod template;

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::info;

use crate::config::{AppConfig, RunOptions};
use crate::generators::common::format_timestamp;
use crate::generators::styles::build_stylesheet;
use crate::generators::{
    DocumentAssembler, DocumentRenderer, GeneratedDocument, QrSvgEncoder, Selection,
    WeasyPrintEngine,
};
use crate::records::{build_invoice_map, load_records};

/// Run one generation pass and return the path of the written PDF.
pub fn run(options: &RunOptions) -> anyhow::Result<PathBuf> {
    let config = AppConfig::from_env();
    config
        .ensure_directories()
        .context("failed to prepare working directories")?;

    let font_path = fonts::ensure_font(&config.font_dir);

    let data_path = match &options.data_file {
        Some(path) => path.clone(),
        None => config::list_data_files(&config.data_dir)
            .context("failed to list data files")?
            .into_iter()
            .next()
            .with_context(|| {
                format!("no CSV/JSON data files in {}", config.data_dir.display())
            })?,
    };
    let template_path = match &options.template_file {
        Some(path) => path.clone(),
        None => config::list_template_files(&config.template_dir)
            .context("failed to list template files")?
            .into_iter()
            .next()
            .with_context(|| {
                format!("no HTML templates in {}", config.template_dir.display())
            })?,
    };

    info!("loading records from {}", data_path.display());
    let records = load_records(&data_path)?;
    let (invoice_key, invoices) = build_invoice_map(&records)?;
    info!(
        "identifier field '{}' groups {} invoice(s)",
        invoice_key,
        invoices.len()
    );

    let template_text = fs::read_to_string(&template_path)
        .with_context(|| format!("failed to read template {}", template_path.display()))?;

    let selection = match &options.invoice {
        Some(id) => Selection::Invoice(id.clone()),
        None => Selection::All,
    };

    let encoder = QrSvgEncoder;
    let assembler = DocumentAssembler::new(template_text, &encoder);
    let assembled = assembler.assemble(&selection, &invoices, &invoice_key)?;

    let stylesheet = build_stylesheet(font_path.as_deref());
    let asset_base = template_path
        .parent()
        .filter(|dir| !dir.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let renderer = WeasyPrintEngine::new();
    let pdf = renderer.render(&assembled.markup, &stylesheet, asset_base)?;

    let document = GeneratedDocument {
        filename: format!("{}.pdf", assembled.file_stem),
        pdf,
        generated_at: format_timestamp(),
    };

    let output_path = config.output_dir.join(&document.filename);
    fs::write(&output_path, &document.pdf)
        .with_context(|| format!("failed to write {}", output_path.display()))?;
    info!(
        "PDF saved to {} at {}",
        output_path.display(),
        document.generated_at
    );

    Ok(output_path)
}
