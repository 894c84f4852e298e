//! QR code encoding for invoice payloads.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use qrcode::render::svg;
use qrcode::QrCode;

use super::traits::CodeEncoder;
use super::GeneratorError;

/// Encodes payloads as QR codes rendered to inline SVG data URIs.
#[derive(Debug, Default)]
pub struct QrSvgEncoder;

impl CodeEncoder for QrSvgEncoder {
    fn encode(&self, payload: &str) -> Result<String, GeneratorError> {
        let code = QrCode::new(payload.as_bytes())
            .map_err(|e| GeneratorError::QrEncode(e.to_string()))?;
        let image = code
            .render()
            .min_dimensions(240, 240)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build();
        Ok(format!(
            "data:image/svg+xml;base64,{}",
            BASE64.encode(image.as_bytes())
        ))
    }
}
