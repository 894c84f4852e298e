//! WeasyPrint rendering engine.
//!
//! Handles the low-level details of writing rendered markup to temporary
//! files, invoking the renderer CLI, and reading back the output PDF.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::tempdir;

use super::traits::DocumentRenderer;
use super::GeneratorError;

const MARKUP_FILE: &str = "invoice.html";
const STYLESHEET_FILE: &str = "invoice.css";
const OUTPUT_FILE: &str = "invoice.pdf";

/// Stateless engine invoking the `weasyprint` CLI.
#[derive(Debug)]
pub struct WeasyPrintEngine {
    binary: PathBuf,
}

impl WeasyPrintEngine {
    /// Use the `weasyprint` binary found on PATH.
    pub fn new() -> Self {
        Self {
            binary: PathBuf::from("weasyprint"),
        }
    }

    /// Use a specific renderer binary instead of the one on PATH.
    pub fn with_binary(binary: impl Into<PathBuf>) -> Self {
        Self {
            binary: binary.into(),
        }
    }
}

impl Default for WeasyPrintEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl DocumentRenderer for WeasyPrintEngine {
    fn render(
        &self,
        markup: &str,
        stylesheet: &str,
        asset_base: &Path,
    ) -> Result<Vec<u8>, GeneratorError> {
        let temp_dir = tempdir().map_err(GeneratorError::TempDir)?;
        let markup_path = temp_dir.path().join(MARKUP_FILE);
        let stylesheet_path = temp_dir.path().join(STYLESHEET_FILE);
        let output_path = temp_dir.path().join(OUTPUT_FILE);

        fs::write(&markup_path, markup).map_err(GeneratorError::WriteMarkup)?;
        fs::write(&stylesheet_path, stylesheet).map_err(GeneratorError::WriteStylesheet)?;

        let status = Command::new(&self.binary)
            .arg(&markup_path)
            .arg(&output_path)
            .arg("--stylesheet")
            .arg(&stylesheet_path)
            .arg("--base-url")
            .arg(asset_base)
            .status()
            .map_err(GeneratorError::RendererIo)?;

        if !status.success() {
            let code = status.code().unwrap_or(-1);
            return Err(GeneratorError::RendererExit(code));
        }

        fs::read(&output_path).map_err(GeneratorError::ReadPdf)
    }
}
