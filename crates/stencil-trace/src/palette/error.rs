//! Error types for palette operations
//!
//! This module provides the error type for palette construction and
//! reduction.

use thiserror::Error;

/// Error type for palette construction and reduction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PaletteError {
    /// Requested color count is outside `1..=256`
    #[error("color count must be between 1 and 256, got {requested}")]
    InvalidColorCount {
        /// The rejected request
        requested: usize,
    },
    /// No colors provided, or no pixels to derive colors from
    #[error("palette cannot be empty")]
    EmptyPalette,
    /// Duplicate color found at the specified index
    #[error("duplicate color found at index {index}")]
    DuplicateColor {
        /// Index where the duplicate was found
        index: usize,
    },
    /// More entries than a `u8` index can address
    #[error("palette has {count} colors, at most 256 are supported")]
    TooManyColors {
        /// Number of colors supplied
        count: usize,
    },
    /// The clustering backend could not reduce the image
    #[error("palette reduction failed: {0}")]
    Quantize(&'static str),
}
