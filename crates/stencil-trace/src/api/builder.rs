//! Stenciler builder: the primary entry point for the crate.
//!
//! [`Stenciler`] wraps the raster-to-vector pipeline with fluent
//! configuration. The pipeline runs in a fixed order:
//!
//! 1. Reduce the image to an adaptive palette (index 0 is the dominant color)
//! 2. For every other index present, ascending: isolate, trace, simplify
//! 3. Assemble one even-odd path per index that still has contours

use crate::color::Rgb;
use crate::output::{Document, IndexedImage};
use crate::palette::{AdaptiveQuantizer, Quantizer};
use crate::path::assemble_path;
use crate::trace::{simplify_contours, trace_contours, OccupancyMask};

use super::error::StencilError;

/// High-level stencil builder.
///
/// # Design
///
/// - Configuration methods consume and return `self` (standard builder pattern)
/// - Pipeline methods take `&self` so one builder can process many images
/// - Validation happens when a pipeline method runs, not when a setter is
///   called
///
/// # Example
///
/// ```
/// use stencil_trace::{Point, Rgb, Stenciler};
///
/// let red = Rgb::new(255, 0, 0);
/// let green = Rgb::new(0, 255, 0);
/// let pixels: Vec<Rgb> = (0..36)
///     .map(|i| if i % 6 < 3 && i / 6 < 3 { green } else { red })
///     .collect();
///
/// let doc = Stenciler::new().colors(2).vectorize(&pixels, 6, 6).unwrap();
///
/// assert_eq!(doc.paths().len(), 1);
/// assert_eq!(doc.paths()[0].fill_hex(), "#00ff00");
/// assert_eq!(
///     doc.paths()[0].bounding_box(),
///     (Point::new(0, 0), Point::new(2, 2))
/// );
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stenciler {
    colors: usize,
    simplify: f64,
}

impl Default for Stenciler {
    fn default() -> Self {
        Self::new()
    }
}

impl Stenciler {
    /// Palette size used when none is set.
    pub const DEFAULT_COLORS: usize = 8;
    /// Relative simplification tolerance used when none is set.
    pub const DEFAULT_SIMPLIFY: f64 = 0.01;

    /// Create a stenciler with 8 colors and tolerance 0.01.
    pub fn new() -> Self {
        Self {
            colors: Self::DEFAULT_COLORS,
            simplify: Self::DEFAULT_SIMPLIFY,
        }
    }

    /// Set the maximum palette size (`1..=256`).
    #[inline]
    pub fn colors(mut self, colors: usize) -> Self {
        self.colors = colors;
        self
    }

    /// Set the simplification tolerance as a fraction of each perimeter.
    ///
    /// `0.0` keeps every traced corner.
    #[inline]
    pub fn simplify(mut self, tolerance: f64) -> Self {
        self.simplify = tolerance;
        self
    }

    #[inline]
    pub fn color_count(&self) -> usize {
        self.colors
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.simplify
    }

    /// Reduce `pixels` to an adaptive palette of at most `colors` entries.
    ///
    /// # Errors
    ///
    /// - [`StencilError::InvalidInput`] for a zero-area image or a buffer
    ///   whose length is not `width * height`
    /// - [`StencilError::InvalidPalette`] for a color count outside `1..=256`
    pub fn posterize(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<IndexedImage, StencilError> {
        if width == 0 || height == 0 || width.checked_mul(height) != Some(pixels.len()) {
            return Err(StencilError::InvalidInput {
                width,
                height,
                len: pixels.len(),
            });
        }
        let palette = AdaptiveQuantizer.quantize(pixels, self.colors)?;
        Ok(IndexedImage::from_pixels(pixels, width, height, palette))
    }

    /// Trace an already posterized raster into a [`Document`].
    ///
    /// Index 0 is background and never produces a path. Every other index
    /// present in the raster yields at most one path, in ascending index
    /// order.
    ///
    /// # Errors
    ///
    /// [`StencilError::InvalidTolerance`] if the tolerance is negative or
    /// not finite.
    pub fn vectorize_indexed(&self, image: &IndexedImage) -> Result<Document, StencilError> {
        self.check_tolerance()?;

        let mut document = Document::new(image.width(), image.height());
        for index in image.present_indices().into_iter().filter(|&i| i != 0) {
            let fill = image.palette().color(index as usize);
            let mask = OccupancyMask::isolate(image, index);
            let contours = trace_contours(&mask);
            let simplified = simplify_contours(&contours, self.simplify);
            tracing::debug!(
                index,
                color = %fill,
                pixels = mask.count(),
                contours = contours.len(),
                kept = simplified.len(),
                holes = simplified.iter().filter(|c| c.is_hole()).count(),
                "traced palette index"
            );
            if let Some(path) = assemble_path(&simplified, fill) {
                document.push(path);
            }
        }
        Ok(document)
    }

    /// Run the whole pipeline on raw pixels.
    ///
    /// # Errors
    ///
    /// Any error of [`posterize`](Self::posterize) or
    /// [`vectorize_indexed`](Self::vectorize_indexed). The tolerance is
    /// checked first, before any pixel work.
    pub fn vectorize(
        &self,
        pixels: &[Rgb],
        width: usize,
        height: usize,
    ) -> Result<Document, StencilError> {
        self.check_tolerance()?;
        let image = self.posterize(pixels, width, height)?;
        self.vectorize_indexed(&image)
    }

    fn check_tolerance(&self) -> Result<(), StencilError> {
        if self.simplify.is_finite() && self.simplify >= 0.0 {
            Ok(())
        } else {
            Err(StencilError::InvalidTolerance(self.simplify))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::PaletteError;
    use crate::trace::Point;

    const RED: Rgb = Rgb::new(255, 0, 0);
    const BLUE: Rgb = Rgb::new(0, 0, 255);

    #[test]
    fn test_defaults() {
        let s = Stenciler::default();
        assert_eq!(s.color_count(), 8);
        assert_eq!(s.tolerance(), 0.01);
    }

    #[test]
    fn test_setters_chain() {
        let s = Stenciler::new().colors(3).simplify(0.0);
        assert_eq!(s.color_count(), 3);
        assert_eq!(s.tolerance(), 0.0);
    }

    #[test]
    fn test_zero_area_rejected() {
        let err = Stenciler::new().posterize(&[], 0, 5).unwrap_err();
        assert_eq!(
            err,
            StencilError::InvalidInput {
                width: 0,
                height: 5,
                len: 0
            }
        );
    }

    #[test]
    fn test_length_mismatch_rejected() {
        let err = Stenciler::new().posterize(&[RED; 5], 2, 2).unwrap_err();
        assert!(matches!(err, StencilError::InvalidInput { len: 5, .. }));
    }

    #[test]
    fn test_color_count_out_of_range() {
        for colors in [0, 257] {
            let err = Stenciler::new()
                .colors(colors)
                .posterize(&[RED; 4], 2, 2)
                .unwrap_err();
            assert_eq!(
                err,
                StencilError::InvalidPalette(PaletteError::InvalidColorCount {
                    requested: colors
                })
            );
        }
    }

    #[test]
    fn test_bad_tolerance_rejected_before_pixel_work() {
        for t in [-0.1, f64::NAN, f64::INFINITY] {
            // The buffer is invalid too; the tolerance must be reported
            let err = Stenciler::new().simplify(t).vectorize(&[], 0, 0).unwrap_err();
            assert!(matches!(err, StencilError::InvalidTolerance(_)), "{t}");
        }
    }

    #[test]
    fn test_vectorize_indexed_skips_background() {
        let pixels: Vec<Rgb> = (0..16)
            .map(|i| if (1..3).contains(&(i % 4)) && (1..3).contains(&(i / 4)) { BLUE } else { RED })
            .collect();
        let s = Stenciler::new().colors(2);
        let image = s.posterize(&pixels, 4, 4).unwrap();
        assert_eq!(image.palette().color(0), RED);

        let doc = s.vectorize_indexed(&image).unwrap();
        assert_eq!((doc.width(), doc.height()), (4, 4));
        assert_eq!(doc.paths().len(), 1);
        assert_eq!(doc.paths()[0].fill(), BLUE);
        assert_eq!(
            doc.paths()[0].bounding_box(),
            (Point::new(1, 1), Point::new(2, 2))
        );
        assert_eq!(doc.paths()[0].subpath_count(), 1);
    }

    #[test]
    fn test_lone_pixel_leaves_no_path() {
        let mut pixels = vec![RED; 9];
        pixels[4] = BLUE;
        let doc = Stenciler::new().colors(2).vectorize(&pixels, 3, 3).unwrap();
        assert!(doc.is_empty());
    }

    #[test]
    fn test_single_color_count_yields_empty_document() {
        let mut pixels = vec![RED; 9];
        pixels[4] = BLUE;
        let doc = Stenciler::new().colors(1).vectorize(&pixels, 3, 3).unwrap();
        assert!(doc.is_empty());
    }
}
