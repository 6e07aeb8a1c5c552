//! Per-color occupancy masks.

use image::{GrayImage, Luma};

use crate::output::IndexedImage;

const SET: u8 = 255;

/// Binary raster: nonzero where a pixel belongs to the region being traced.
///
/// Stored as a [`GrayImage`] so the border follower can read it directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OccupancyMask {
    image: GrayImage,
}

impl OccupancyMask {
    /// Isolate the pixels of `image` that carry palette `index`.
    ///
    /// An index absent from the image yields an all-clear mask.
    pub fn isolate(image: &IndexedImage, index: u8) -> Self {
        let (width, height) = (image.width() as u32, image.height() as u32);
        let indices = image.indices();
        Self {
            image: GrayImage::from_fn(width, height, |x, y| {
                let i = indices[y as usize * width as usize + x as usize];
                Luma([if i == index { SET } else { 0 }])
            }),
        }
    }

    /// The mask as an 8-bit image, 255 for set pixels and 0 elsewhere.
    #[inline]
    pub fn as_image(&self) -> &GrayImage {
        &self.image
    }

    /// Number of foreground pixels.
    pub fn count(&self) -> usize {
        self.image.as_raw().iter().filter(|&&v| v != 0).count()
    }

    /// True when no pixel is set.
    pub fn is_blank(&self) -> bool {
        self.image.as_raw().iter().all(|&v| v == 0)
    }

    #[cfg(test)]
    pub(crate) fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        Self {
            image: GrayImage::from_fn(width as u32, height as u32, |x, y| {
                Luma([if f(x as usize, y as usize) { SET } else { 0 }])
            }),
        }
    }

    /// Parse rows of `#` (set) and anything else (clear).
    #[cfg(test)]
    pub(crate) fn from_ascii(rows: &[&str]) -> Self {
        let height = rows.len();
        let width = rows.first().map_or(0, |r| r.len());
        Self::from_fn(width, height, |x, y| rows[y].as_bytes()[x] == b'#')
    }

    #[cfg(test)]
    pub(crate) fn get(&self, x: u32, y: u32) -> bool {
        self.image.get_pixel(x, y)[0] != 0
    }
}
