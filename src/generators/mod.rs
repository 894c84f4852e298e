//! Document assembly and rendering.
//!
//! This module is split into submodules for better separation of concerns:
//! - `assembler` - invoice selection, QR payloads, pagination, combined markup
//! - `common` - filename sanitization and timestamps
//! - `engine` - WeasyPrint-backed PDF rendering
//! - `qr` - QR code encoding to inline data URIs
//! - `styles` - stylesheet construction
//! - `traits` - collaborator seams

pub mod assembler;
pub mod common;
pub mod engine;
pub mod qr;
pub mod styles;
pub mod traits;

pub use assembler::{AssembledDocument, DocumentAssembler, Selection};
pub use engine::WeasyPrintEngine;
pub use qr::QrSvgEncoder;
pub use traits::{CodeEncoder, DocumentRenderer};

use thiserror::Error;

/// Errors that can occur during document generation.
#[derive(Debug, Error)]
pub enum GeneratorError {
    #[error("invoice '{0}' not found in the loaded data")]
    InvoiceNotFound(String),
    #[error("failed to encode QR payload: {0}")]
    QrEncode(String),
    #[error("failed to create temporary directory: {0}")]
    TempDir(#[source] std::io::Error),
    #[error("failed to write rendered markup: {0}")]
    WriteMarkup(#[source] std::io::Error),
    #[error("failed to write stylesheet: {0}")]
    WriteStylesheet(#[source] std::io::Error),
    #[error("PDF renderer execution failed: {0}")]
    RendererIo(#[source] std::io::Error),
    #[error("PDF renderer exited with status {0}")]
    RendererExit(i32),
    #[error("failed to read generated PDF: {0}")]
    ReadPdf(#[source] std::io::Error),
}

/// Result of a successful document generation.
#[derive(Debug)]
pub struct GeneratedDocument {
    pub filename: String,
    pub pdf: Vec<u8>,
    pub generated_at: String,
}
