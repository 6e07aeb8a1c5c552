//! Palette struct with nearest-color matching.
//!
//! A [`Palette`] is an ordered list of distinct colors. Position matters:
//! index 0 is the background entry that the vectorizer never emits, and
//! the remaining indices are emitted in ascending order.

use std::collections::HashSet;

use super::error::PaletteError;
use super::MAX_COLORS;
use crate::color::Rgb;

/// An ordered set of at most 256 distinct colors.
///
/// # Example
///
/// ```
/// use stencil_trace::{Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(255, 0, 0), Rgb::new(0, 255, 0)]).unwrap();
/// assert_eq!(palette.len(), 2);
/// assert_eq!(palette.find_nearest(Rgb::new(10, 240, 5)), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<Rgb>,
}

impl Palette {
    /// Create a palette from colors in index order.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `colors` is empty ([`PaletteError::EmptyPalette`])
    /// - `colors` has more than 256 entries ([`PaletteError::TooManyColors`])
    /// - a color appears twice ([`PaletteError::DuplicateColor`])
    pub fn new(colors: &[Rgb]) -> Result<Self, PaletteError> {
        if colors.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }
        if colors.len() > MAX_COLORS {
            return Err(PaletteError::TooManyColors {
                count: colors.len(),
            });
        }

        let mut seen = HashSet::new();
        for (i, color) in colors.iter().enumerate() {
            if !seen.insert(*color) {
                return Err(PaletteError::DuplicateColor { index: i });
            }
        }

        Ok(Self {
            colors: colors.to_vec(),
        })
    }

    /// Returns the number of colors in the palette.
    #[inline]
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always `false`: empty palettes are rejected at construction.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// Color at `idx`.
    ///
    /// # Panics
    ///
    /// Panics if `idx >= self.len()`.
    #[inline]
    pub fn color(&self, idx: usize) -> Rgb {
        self.colors[idx]
    }

    /// All colors in index order.
    #[inline]
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// Index of the entry nearest to `color` by squared RGB distance.
    ///
    /// Ties resolve to the lower index.
    #[inline]
    pub fn find_nearest(&self, color: Rgb) -> usize {
        // Linear scan; palettes are small
        let mut best_idx = 0;
        let mut best_dist = u32::MAX;

        for (i, &entry) in self.colors.iter().enumerate() {
            let dist = entry.distance_squared(color);
            if dist < best_dist {
                best_dist = dist;
                best_idx = i;
                if dist == 0 {
                    break;
                }
            }
        }

        best_idx
    }
}
