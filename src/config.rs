//! Run configuration resolved from the environment.

use std::env;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Directory layout the run works against.
///
/// Every path can be overridden from the environment (a `.env` file is
/// honoured); the defaults mirror the conventional project layout.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub font_dir: PathBuf,
}

impl AppConfig {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self {
            data_dir: dir_from_env("INVOICE_DATA_DIR", "./data"),
            template_dir: dir_from_env("INVOICE_TEMPLATE_DIR", "./templates"),
            output_dir: dir_from_env("INVOICE_OUTPUT_DIR", "./output"),
            font_dir: dir_from_env("INVOICE_FONT_DIR", "./fonts"),
        }
    }

    /// Create any configured directories that are missing.
    pub fn ensure_directories(&self) -> io::Result<()> {
        for dir in [
            &self.data_dir,
            &self.template_dir,
            &self.output_dir,
            &self.font_dir,
        ] {
            fs::create_dir_all(dir)?;
        }
        Ok(())
    }
}

fn dir_from_env(var: &str, default: &str) -> PathBuf {
    env::var(var)
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from(default))
}

/// Data files the run can pick from: `*.csv` and `*.json`, sorted by name.
pub fn list_data_files(data_dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_by_extensions(data_dir, &["csv", "json"])
}

/// Template files the run can pick from: `*.html`, sorted by name.
pub fn list_template_files(template_dir: &Path) -> io::Result<Vec<PathBuf>> {
    list_by_extensions(template_dir, &["html"])
}

fn list_by_extensions(dir: &Path, extensions: &[&str]) -> io::Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        let wanted = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| extensions.iter().any(|want| ext.eq_ignore_ascii_case(want)))
            .unwrap_or(false);
        if wanted && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Resolved inputs for one generation run.
#[derive(Debug, Default)]
pub struct RunOptions {
    /// Data file to load; the first file in the data directory when unset.
    pub data_file: Option<PathBuf>,
    /// Template to render; the first template in the template directory when unset.
    pub template_file: Option<PathBuf>,
    /// Identifier of the invoice to render; all invoices when unset.
    pub invoice: Option<String>,
}
