//! IndexedImage: the posterized raster.
//!
//! [`IndexedImage`] stores one palette index per pixel together with the
//! dimensions and the owned [`Palette`]. It is computed once per run and
//! read-only afterwards; every per-color mask is derived from it.

use std::collections::{BTreeSet, HashMap};

use crate::color::Rgb;
use crate::palette::Palette;

/// An image reduced to palette indices.
///
/// # Example
///
/// ```
/// use stencil_trace::{IndexedImage, Palette, Rgb};
///
/// let palette = Palette::new(&[Rgb::new(0, 0, 0), Rgb::new(255, 255, 255)]).unwrap();
/// let pixels = [Rgb::new(10, 10, 10), Rgb::new(250, 250, 250)];
/// let image = IndexedImage::from_pixels(&pixels, 2, 1, palette);
///
/// assert_eq!(image.indices(), &[0, 1]);
/// assert_eq!(image.present_indices(), vec![0, 1]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedImage {
    /// Palette indices, one per pixel, row-major order.
    indices: Vec<u8>,
    width: usize,
    height: usize,
    palette: Palette,
}

impl IndexedImage {
    /// Wrap precomputed indices.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `indices.len() == width * height` and that every
    /// index is below `palette.len()`.
    pub fn new(indices: Vec<u8>, width: usize, height: usize, palette: Palette) -> Self {
        debug_assert_eq!(
            indices.len(),
            width * height,
            "indices length ({}) must match width * height ({}x{}={})",
            indices.len(),
            width,
            height,
            width * height,
        );
        debug_assert!(
            indices.iter().all(|&i| (i as usize) < palette.len()),
            "index out of palette range"
        );
        Self {
            indices,
            width,
            height,
            palette,
        }
    }

    /// Assign every pixel its nearest palette entry.
    ///
    /// Nearest lookups are cached per distinct color, so flat artwork costs
    /// one palette scan per color rather than per pixel.
    pub fn from_pixels(pixels: &[Rgb], width: usize, height: usize, palette: Palette) -> Self {
        let mut cache: HashMap<Rgb, u8> = HashMap::new();
        let indices = pixels
            .iter()
            .map(|&p| {
                *cache
                    .entry(p)
                    .or_insert_with(|| palette.find_nearest(p) as u8)
            })
            .collect();
        Self::new(indices, width, height, palette)
    }

    /// Returns the palette indices as a slice.
    #[inline]
    pub fn indices(&self) -> &[u8] {
        &self.indices
    }

    /// Returns the image width in pixels.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Returns the image height in pixels.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Returns the palette the indices refer to.
    #[inline]
    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Index at pixel `(x, y)`.
    #[inline]
    pub fn index_at(&self, x: usize, y: usize) -> u8 {
        self.indices[y * self.width + x]
    }

    /// Distinct indices that occur in the image, ascending.
    pub fn present_indices(&self) -> Vec<u8> {
        let set: BTreeSet<u8> = self.indices.iter().copied().collect();
        set.into_iter().collect()
    }

    /// Expand back to RGB bytes in `[R, G, B, R, G, B, ...]` layout.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.indices.len() * 3);
        for &idx in &self.indices {
            rgb.extend_from_slice(&self.palette.color(idx as usize).to_bytes());
        }
        rgb
    }
}
