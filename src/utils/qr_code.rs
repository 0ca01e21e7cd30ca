//! QR code rendering for short URLs.
//!
//! A pure function from a URL string to PNG bytes; no I/O beyond the
//! in-memory encode.

use image::{ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Pixel width of one QR module.
const MODULE_SIZE: u32 = 10;

/// Errors raised while rendering a QR code.
#[derive(Debug, thiserror::Error)]
pub enum QrRenderError {
    #[error("Failed to build QR matrix: {0}")]
    Encode(#[from] qrcode::types::QrError),

    #[error("Failed to encode PNG: {0}")]
    Png(#[from] image::ImageError),
}

/// Renders a URL into a PNG QR image.
///
/// Uses error-correction level L with 10px modules and the standard
/// 4-module quiet zone. Returns the encoded PNG bytes.
pub fn render_png(url: &str) -> Result<Vec<u8>, QrRenderError> {
    let code = QrCode::with_error_correction_level(url.as_bytes(), EcLevel::L)?;

    let img = code
        .render::<Luma<u8>>()
        .module_dimensions(MODULE_SIZE, MODULE_SIZE)
        .quiet_zone(true)
        .build();

    let mut bytes = Vec::new();
    image::DynamicImage::ImageLuma8(img).write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;

    Ok(bytes)
}
