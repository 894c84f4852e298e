//! Stylesheet construction for the rendered document.

use std::path::Path;

/// Font family stack used when no embedded face is available.
const FALLBACK_FAMILY: &str = "'DejaVu Sans', 'Roboto', Arial, sans-serif";

/// Build the auxiliary stylesheet handed to the renderer.
///
/// When a font file is present an `@font-face` rule embeds it and the
/// body font stack prefers the embedded face; otherwise only the
/// fallback stack is emitted.
pub fn build_stylesheet(font_path: Option<&Path>) -> String {
    match font_path.filter(|path| path.exists()) {
        Some(path) => format!(
            "@font-face {{\n  font-family: 'DejaVuSansEmbedded';\n  src: url('file://{}') format('truetype');\n}}\nbody {{ font-family: DejaVuSansEmbedded, {}; }}",
            path.display(),
            FALLBACK_FAMILY
        ),
        None => format!("body {{ font-family: {}; }}", FALLBACK_FAMILY),
    }
}
