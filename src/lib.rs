//! Stenciled - raster artwork to layered SVG stencils
//!
//! Loads a PNG, GIF or JPEG, reduces it to a small adaptive palette and
//! writes one even-odd filled path per non-background color.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod rendering;
pub mod services;
