//! Boundary tracing by Suzuki-Abe border following.
//!
//! [`imageproc::contours::find_contours`] walks the foreground pixels that
//! touch the background, so vertices sit on pixel centers. Foreground is
//! 8-connected: pixels that share only a corner belong to one region and
//! come back as one border.
//!
//! ```text
//!   ##..
//!   ##..    one outer border through (1, 1) and (2, 2)
//!   ..##
//!   ..##
//! ```
//!
//! The follower reports every border pixel. Straight runs are collapsed to
//! their end points here, so a filled rectangle comes back as its four
//! corner pixels before any simplification.

use imageproc::contours::{find_contours, BorderType};

use super::contour::{Contour, Point};
use super::mask::OccupancyMask;

/// Extract every outer and hole border of the set pixels in `mask`.
///
/// Contours are returned in discovery order (raster scan of their first
/// pixel). A lone pixel or a one-pixel-wide line yields a contour of fewer
/// than three points; [`simplify_contours`](super::simplify_contours)
/// drops those.
pub fn trace_contours(mask: &OccupancyMask) -> Vec<Contour> {
    if mask.is_blank() {
        return Vec::new();
    }
    find_contours::<i32>(mask.as_image())
        .into_iter()
        .map(|border| {
            let points = collapse_runs(
                border
                    .points
                    .iter()
                    .map(|p| Point::new(p.x, p.y))
                    .collect(),
            );
            match border.border_type {
                BorderType::Outer => Contour::outer(points),
                BorderType::Hole => Contour::hole(points),
            }
        })
        .collect()
}

/// Drop every vertex whose incoming and outgoing steps point the same way.
///
/// Consecutive border pixels are 8-neighbours, so comparing step signs is
/// exact.
fn collapse_runs(points: Vec<Point>) -> Vec<Point> {
    let n = points.len();
    if n < 3 {
        return points;
    }
    let step = |a: Point, b: Point| ((b.x - a.x).signum(), (b.y - a.y).signum());
    (0..n)
        .filter(|&i| {
            let prev = points[(i + n - 1) % n];
            let next = points[(i + 1) % n];
            step(prev, points[i]) != step(points[i], next)
        })
        .map(|i| points[i])
        .collect()
}
