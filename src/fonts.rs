//! DejaVu Sans provisioning for Cyrillic-capable rendering.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};

const FONT_FILE: &str = "DejaVuSans.ttf";
const FONT_URL: &str =
    "https://raw.githubusercontent.com/dejavu-fonts/dejavu-fonts/version_2_37/ttf/DejaVuSans.ttf";

/// Return the path to DejaVu Sans, downloading it on first use.
///
/// Failure is not fatal: the caller gets `None` and rendering falls back
/// to the system font stack.
pub fn ensure_font(font_dir: &Path) -> Option<PathBuf> {
    let font_path = font_dir.join(FONT_FILE);
    if font_path.exists() {
        return Some(absolute(font_path));
    }

    info!("downloading DejaVu Sans for Cyrillic support");
    match fetch_font() {
        Ok(bytes) => {
            if let Err(e) = fs::write(&font_path, bytes) {
                warn!("could not store downloaded font: {e}");
                return None;
            }
            Some(absolute(font_path))
        }
        Err(e) => {
            warn!("could not download font: {e}");
            None
        }
    }
}

fn fetch_font() -> Result<Vec<u8>, reqwest::Error> {
    let response = reqwest::blocking::get(FONT_URL)?.error_for_status()?;
    Ok(response.bytes()?.to_vec())
}

fn absolute(path: PathBuf) -> PathBuf {
    path.canonicalize().unwrap_or(path)
}
