//! QR code adapter backed by the `qrcode` crate.
//!
//! Produces an SVG string the webview can inline directly.

use qrcode::render::svg;
use qrcode::{EcLevel, QrCode};

use crate::domain::{PortError, PortResult};
use crate::ports::QrRenderer;

#[derive(Debug, Default, Clone, Copy)]
pub struct SvgQrRenderer;

impl QrRenderer for SvgQrRenderer {
    fn render_svg(&self, text: &str, size_px: u32) -> PortResult<String> {
        let code = QrCode::with_error_correction_level(text.as_bytes(), EcLevel::M)
            .map_err(|e| PortError::Render(format!("Failed to generate QR code: {e}")))?;

        Ok(code
            .render::<svg::Color>()
            .min_dimensions(size_px, size_px)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::sample_ports;

    #[test]
    fn renders_payload_as_svg() {
        let json = sample_ports()[0].to_json().unwrap();
        let svg = SvgQrRenderer.render_svg(&json, 240).unwrap();
        assert!(svg.contains("<svg"));
        assert!(svg.contains("#000000"));
    }

    #[test]
    fn oversized_input_is_a_render_error() {
        // Version 40 at level M tops out well below 4 KiB of bytes
        let text = "x".repeat(4096);
        assert!(matches!(
            SvgQrRenderer.render_svg(&text, 240),
            Err(PortError::Render(_))
        ));
    }
}
