//! Raster input: format sniffing and decoding.

use std::io::Cursor;
use std::path::Path;

use stencil_trace::Rgb;

use crate::error::ConvertError;
use crate::models::{SourceFormat, SourceImage};

/// Read and decode the image at `path`.
pub fn load_image(path: &Path) -> Result<SourceImage, ConvertError> {
    let bytes = std::fs::read(path)?;
    let image = decode_image(&bytes)?;
    tracing::info!(
        path = %path.display(),
        format = %image.format,
        width = image.width,
        height = image.height,
        "Loaded image"
    );
    Ok(image)
}

/// Decode an in-memory PNG, GIF or JPEG.
///
/// The format is sniffed from the content, not from a file name. GIFs
/// contribute their first frame. Any alpha channel is discarded.
pub fn decode_image(bytes: &[u8]) -> Result<SourceImage, ConvertError> {
    let reader = image::ImageReader::new(Cursor::new(bytes)).with_guessed_format()?;
    let sniffed = reader.format();
    let format = sniffed
        .and_then(SourceFormat::from_image_format)
        .ok_or_else(|| {
            ConvertError::UnsupportedFormat(
                sniffed
                    .map(|f| format!("{f:?}").to_lowercase())
                    .unwrap_or_else(|| "unknown".to_string()),
            )
        })?;

    let rgb = reader.decode()?.to_rgb8();
    let (width, height) = rgb.dimensions();
    let pixels = rgb
        .pixels()
        .map(|p| Rgb::from_bytes(p.0))
        .collect();

    Ok(SourceImage {
        format,
        width: width as usize,
        height: height as usize,
        pixels,
    })
}
