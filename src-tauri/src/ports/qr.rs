//! QR code rendering port

use crate::domain::PortResult;

/// Renders a string as a QR code at error-correction level M
pub trait QrRenderer: Send + Sync {
    /// Render `text` as an SVG document at least `size_px` pixels square
    fn render_svg(&self, text: &str, size_px: u32) -> PortResult<String>;
}
