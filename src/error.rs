use thiserror::Error;

use stencil_trace::StencilError;

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error("Unsupported image format: {0} (supported: PNG, GIF, JPEG)")]
    UnsupportedFormat(String),

    #[error("Decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Stencil error: {0}")]
    Stencil(#[from] StencilError),

    #[error("Rendering error: {0}")]
    Render(#[from] RenderError),
}

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("SVG parse error: {0}")]
    SvgParse(String),

    #[error("Unsupported dimensions: {width}x{height}")]
    UnsupportedDimensions { width: usize, height: usize },

    #[error("Failed to allocate pixmap")]
    PixmapAllocation,

    #[error("PNG encode error: {0}")]
    PngEncode(String),
}
