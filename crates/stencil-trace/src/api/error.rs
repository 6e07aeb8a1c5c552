//! Unified error type for the stencil-trace public API.

use thiserror::Error;

use crate::palette::PaletteError;

/// Fatal pipeline errors.
///
/// Any of these aborts the run before a [`Document`](crate::Document) is
/// produced. Contours that collapse during simplification are not errors;
/// they are dropped where they occur.
///
/// # Example
///
/// ```
/// use stencil_trace::{Rgb, StencilError, Stenciler};
///
/// let err = Stenciler::new()
///     .vectorize(&[Rgb::new(0, 0, 0); 3], 2, 2)
///     .unwrap_err();
/// assert!(matches!(err, StencilError::InvalidInput { .. }));
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum StencilError {
    /// Zero-area raster, or a pixel buffer that does not match its dimensions
    #[error("invalid input: {len} pixels for a {width}x{height} image")]
    InvalidInput {
        width: usize,
        height: usize,
        len: usize,
    },
    /// Color count out of range, or no palette could be derived
    #[error("invalid palette: {0}")]
    InvalidPalette(#[from] PaletteError),
    /// Simplification tolerance that is negative or not finite
    #[error("invalid simplification tolerance {0}: must be finite and non-negative")]
    InvalidTolerance(f64),
}
