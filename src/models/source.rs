use std::fmt;

use stencil_trace::Rgb;

/// Raster formats accepted as input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Png,
    Gif,
    Jpeg,
}

impl SourceFormat {
    /// Map a sniffed format; `None` for anything unsupported.
    pub fn from_image_format(format: image::ImageFormat) -> Option<Self> {
        match format {
            image::ImageFormat::Png => Some(Self::Png),
            image::ImageFormat::Gif => Some(Self::Gif),
            image::ImageFormat::Jpeg => Some(Self::Jpeg),
            _ => None,
        }
    }
}

impl fmt::Display for SourceFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Gif => "GIF",
            Self::Jpeg => "JPEG",
        };
        f.write_str(name)
    }
}

/// A decoded input image, alpha dropped.
#[derive(Debug, Clone)]
pub struct SourceImage {
    pub format: SourceFormat,
    pub width: usize,
    pub height: usize,
    /// Row-major pixels, `width * height` entries
    pub pixels: Vec<Rgb>,
}
