//! Palette types and adaptive palette selection
//!
//! This module provides the [`Palette`] table, the [`Quantizer`] seam with
//! its [`AdaptiveQuantizer`] implementation, and the palette error type.

mod error;
mod palette;
mod quantize;

pub use error::PaletteError;
pub use palette::Palette;
pub use quantize::{AdaptiveQuantizer, Quantizer};

/// Largest palette addressable by a `u8` index.
pub const MAX_COLORS: usize = 256;
