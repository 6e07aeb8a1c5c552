//! Output types for the stencil pipeline.
//!
//! - [`IndexedImage`]: the posterized raster, one palette index per pixel
//! - [`Document`]: canvas size plus the fill paths traced from the raster

mod document;
mod indexed_image;

pub use document::Document;
pub use indexed_image::IndexedImage;
