//! Adaptive palette selection.
//!
//! Cluster centers come from `quantizr`. The crate picks the colors; this
//! module owns their order. Every distinct input color is assigned to its
//! nearest center, centers nobody picked are dropped, and the rest are
//! ranked by the population they gathered. Index 0 is therefore the
//! dominant color of the image.

use std::collections::{BTreeMap, BTreeSet};

use super::error::PaletteError;
use super::palette::Palette;
use super::MAX_COLORS;
use crate::color::Rgb;

/// Strategy for choosing a palette that approximates an image.
pub trait Quantizer {
    /// Choose at most `max_colors` representative colors for `pixels`.
    ///
    /// The returned palette is ordered by descending pixel population, so
    /// index 0 is the dominant color.
    ///
    /// # Errors
    ///
    /// - [`PaletteError::InvalidColorCount`] if `max_colors` is outside `1..=256`
    /// - [`PaletteError::EmptyPalette`] if `pixels` is empty
    /// - [`PaletteError::Quantize`] if the clustering backend rejects the input
    fn quantize(&self, pixels: &[Rgb], max_colors: usize) -> Result<Palette, PaletteError>;
}

/// Quantizer backed by `quantizr` clustering.
///
/// Deterministic: the same pixels and count always give the same palette.
/// Images with at most `max_colors` distinct colors keep them exactly.
#[derive(Debug, Clone, Copy, Default)]
pub struct AdaptiveQuantizer;

impl Quantizer for AdaptiveQuantizer {
    fn quantize(&self, pixels: &[Rgb], max_colors: usize) -> Result<Palette, PaletteError> {
        if max_colors == 0 || max_colors > MAX_COLORS {
            return Err(PaletteError::InvalidColorCount {
                requested: max_colors,
            });
        }
        if pixels.is_empty() {
            return Err(PaletteError::EmptyPalette);
        }

        let mut histogram: BTreeMap<Rgb, u64> = BTreeMap::new();
        for &p in pixels {
            *histogram.entry(p).or_insert(0) += 1;
        }

        let centers: Vec<Rgb> = if histogram.len() <= max_colors {
            histogram.keys().copied().collect()
        } else if max_colors == 1 {
            vec![weighted_mean(&histogram)]
        } else {
            cluster_centers(pixels, max_colors)?
        };

        let colors = rank_by_population(&histogram, centers)?;
        tracing::trace!(
            requested = max_colors,
            distinct = histogram.len(),
            chosen = colors.len(),
            "adaptive palette"
        );
        Palette::new(&colors)
    }
}

/// Run `quantizr` over the pixels as a single-row RGBA image.
fn cluster_centers(pixels: &[Rgb], max_colors: usize) -> Result<Vec<Rgb>, PaletteError> {
    let rgba: Vec<u8> = pixels
        .iter()
        .flat_map(|c| [c.r, c.g, c.b, u8::MAX])
        .collect();
    let width = pixels
        .len()
        .try_into()
        .map_err(|_| PaletteError::Quantize("image too large"))?;
    let image = quantizr::Image::new(&rgba, width, 1)
        .map_err(|_| PaletteError::Quantize("pixel buffer rejected"))?;

    let mut options = quantizr::Options::default();
    options
        .set_max_colors(
            max_colors
                .try_into()
                .map_err(|_| PaletteError::InvalidColorCount {
                    requested: max_colors,
                })?,
        )
        .map_err(|_| PaletteError::InvalidColorCount {
            requested: max_colors,
        })?;

    let result = quantizr::QuantizeResult::quantize(&image, &options);
    let palette = result.get_palette();
    let count = (palette.count as usize).min(max_colors);
    let centers: BTreeSet<Rgb> = palette
        .entries
        .iter()
        .take(count)
        .map(|c| Rgb::new(c.r, c.g, c.b))
        .collect();
    if centers.is_empty() {
        return Err(PaletteError::Quantize("no clusters produced"));
    }
    Ok(centers.into_iter().collect())
}

/// Population-weighted mean, rounded to the nearest integer.
fn weighted_mean(histogram: &BTreeMap<Rgb, u64>) -> Rgb {
    let population: u64 = histogram.values().sum::<u64>().max(1);
    let mut sums = [0u64; 3];
    for (c, &n) in histogram {
        sums[0] += c.r as u64 * n;
        sums[1] += c.g as u64 * n;
        sums[2] += c.b as u64 * n;
    }
    let avg = |sum: u64| ((sum + population / 2) / population).min(255) as u8;
    Rgb::new(avg(sums[0]), avg(sums[1]), avg(sums[2]))
}

/// Order `centers` by how many pixels are nearest to each.
///
/// Ties go to the lower color value. Centers without pixels are dropped.
fn rank_by_population(
    histogram: &BTreeMap<Rgb, u64>,
    centers: Vec<Rgb>,
) -> Result<Vec<Rgb>, PaletteError> {
    let candidates = Palette::new(&centers)?;
    let mut population = vec![0u64; candidates.len()];
    for (&color, &n) in histogram {
        population[candidates.find_nearest(color)] += n;
    }

    let mut ranked: Vec<(u64, Rgb)> = population
        .into_iter()
        .zip(centers)
        .filter(|&(n, _)| n > 0)
        .collect();
    ranked.sort_unstable_by(|a, b| b.0.cmp(&a.0).then(a.1.cmp(&b.1)));
    Ok(ranked.into_iter().map(|(_, c)| c).collect())
}
