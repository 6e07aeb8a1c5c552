//! Path assembly: contours of one color into a single fill path.
//!
//! Outer boundaries and holes are written as sibling subpaths of the same
//! path. With `fill-rule="evenodd"` a hole is cut out by geometry alone, so
//! nesting and winding never have to be resolved.

use std::fmt::Write;

use crate::color::Rgb;
use crate::trace::{Contour, Point};

/// One filled region of the output: a color plus its path data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    fill: Rgb,
    data: String,
    bounds: (Point, Point),
}

impl Path {
    /// Fill color, byte-exact from the palette.
    #[inline]
    pub fn fill(&self) -> Rgb {
        self.fill
    }

    /// Fill as lowercase `#rrggbb`.
    pub fn fill_hex(&self) -> String {
        self.fill.to_hex()
    }

    /// Path data: `M x y L x y ... Z` per contour, space separated.
    #[inline]
    pub fn data(&self) -> &str {
        &self.data
    }

    /// Number of closed subpaths.
    pub fn subpath_count(&self) -> usize {
        self.data.matches('Z').count()
    }

    /// Smallest `(min, max)` box holding every vertex of every subpath.
    #[inline]
    pub fn bounding_box(&self) -> (Point, Point) {
        self.bounds
    }
}

/// Serialize `contours` into one even-odd path filled with `fill`.
///
/// Returns `None` when there is nothing to draw. Contour order is kept.
///
/// # Example
///
/// ```
/// use stencil_trace::{assemble_path, Contour, Point, Rgb};
///
/// let square = Contour::outer(vec![
///     Point::new(0, 0),
///     Point::new(2, 0),
///     Point::new(2, 2),
///     Point::new(0, 2),
/// ]);
/// let path = assemble_path(&[square], Rgb::new(0, 255, 0)).unwrap();
///
/// assert_eq!(path.data(), "M 0 0 L 2 0 L 2 2 L 0 2 Z");
/// assert_eq!(path.fill_hex(), "#00ff00");
/// assert_eq!(path.bounding_box(), (Point::new(0, 0), Point::new(2, 2)));
/// assert!(assemble_path(&[], Rgb::new(0, 0, 0)).is_none());
/// ```
pub fn assemble_path(contours: &[Contour], fill: Rgb) -> Option<Path> {
    let mut data = String::new();
    let mut bounds: Option<(Point, Point)> = None;
    for contour in contours {
        let Some((lo, hi)) = contour.bounding_box() else {
            continue;
        };
        bounds = Some(match bounds {
            Some((min, max)) => (
                Point::new(min.x.min(lo.x), min.y.min(lo.y)),
                Point::new(max.x.max(hi.x), max.y.max(hi.y)),
            ),
            None => (lo, hi),
        });
        if !data.is_empty() {
            data.push(' ');
        }
        for (i, p) in contour.points().iter().enumerate() {
            let cmd = if i == 0 { 'M' } else { 'L' };
            // Writing to a String cannot fail
            let _ = write!(data, "{cmd} {} {} ", p.x, p.y);
        }
        data.push('Z');
    }
    let bounds = bounds?;
    Some(Path { fill, data, bounds })
}
