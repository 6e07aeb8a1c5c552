//! Closed-polygon simplification (Douglas-Peucker).
//!
//! The tolerance is relative: a vertex survives only if it lies farther than
//! `tolerance * perimeter` from the chord that would replace it. Scaling an
//! image therefore scales the allowed deviation with it.

use super::contour::{Contour, Point};

/// Simplify one closed contour.
///
/// The loop is split at point 0 and at the vertex farthest from it; each
/// half is then reduced independently, so both anchors always survive.
/// A tolerance of zero (or below) returns the contour unchanged, as does any
/// contour with fewer than three points.
///
/// Raising the tolerance never adds vertices: the split tree does not depend
/// on it, only how deep the reduction descends.
pub fn approximate_polygon(contour: &Contour, tolerance: f64) -> Contour {
    let points = contour.points();
    let n = points.len();
    if tolerance.is_nan() || tolerance <= 0.0 || n < 3 {
        return contour.clone();
    }
    let epsilon = tolerance * contour.perimeter();

    let origin = points[0];
    let mut anchor = 0;
    let mut anchor_dist = 0;
    for (i, p) in points.iter().enumerate().skip(1) {
        let d = origin.distance_squared(*p);
        if d > anchor_dist {
            anchor = i;
            anchor_dist = d;
        }
    }
    if anchor == 0 {
        return contour.clone();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[anchor] = true;

    // Chains are index ranges; `n` stands for point 0 closing the loop.
    let mut stack = vec![(anchor, n), (0, anchor)];
    while let Some((first, last)) = stack.pop() {
        if last - first < 2 {
            continue;
        }
        let a = points[first];
        let b = points[last % n];
        let mut split = first;
        let mut split_dist = -1.0;
        for (i, p) in points.iter().enumerate().take(last).skip(first + 1) {
            let d = segment_distance(*p, a, b);
            if d > split_dist {
                split = i;
                split_dist = d;
            }
        }
        if split_dist > epsilon {
            keep[split] = true;
            stack.push((split, last));
            stack.push((first, split));
        }
    }

    contour.with_points(
        points
            .iter()
            .zip(&keep)
            .filter(|(_, &k)| k)
            .map(|(p, _)| *p)
            .collect(),
    )
}

/// Simplify every contour, dropping those left with fewer than three points.
pub fn simplify_contours(contours: &[Contour], tolerance: f64) -> Vec<Contour> {
    contours
        .iter()
        .filter_map(|contour| {
            let simplified = approximate_polygon(contour, tolerance);
            if simplified.is_degenerate() {
                tracing::trace!(
                    points = contour.len(),
                    remaining = simplified.len(),
                    "dropping degenerate contour"
                );
                None
            } else {
                Some(simplified)
            }
        })
        .collect()
}

/// Euclidean distance from `p` to the segment `a`-`b`.
fn segment_distance(p: Point, a: Point, b: Point) -> f64 {
    let (px, py) = (p.x as f64, p.y as f64);
    let (ax, ay) = (a.x as f64, a.y as f64);
    let (dx, dy) = (b.x as f64 - ax, b.y as f64 - ay);
    let len2 = dx * dx + dy * dy;
    if len2 == 0.0 {
        return p.distance(a);
    }
    let t = (((px - ax) * dx + (py - ay) * dy) / len2).clamp(0.0, 1.0);
    (px - (ax + t * dx)).hypot(py - (ay + t * dy))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::trace::{trace_contours, OccupancyMask};

    fn contour(coords: &[(i32, i32)]) -> Contour {
        Contour::outer(coords.iter().map(|&(x, y)| Point::new(x, y)).collect())
    }

    /// Staircase approximating a diagonal, closed by an L back to the start.
    fn staircase(steps: i32) -> Contour {
        let mut coords = vec![(0, 0)];
        for i in 0..steps {
            coords.push((i + 1, i));
            coords.push((i + 1, i + 1));
        }
        coords.push((0, steps));
        contour(&coords)
    }

    #[test]
    fn test_zero_tolerance_is_identity() {
        let c = staircase(6);
        assert_eq!(approximate_polygon(&c, 0.0), c);
    }

    #[test]
    fn test_negative_and_nan_tolerance_are_identity() {
        let c = staircase(4);
        assert_eq!(approximate_polygon(&c, -1.0), c);
        assert_eq!(approximate_polygon(&c, f64::NAN), c);
    }

    #[test]
    fn test_short_contours_untouched() {
        let c = contour(&[(0, 0), (4, 0)]);
        assert_eq!(approximate_polygon(&c, 0.5), c);
    }

    #[test]
    fn test_rectangle_keeps_corners() {
        let c = contour(&[(0, 0), (5, 0), (5, 5), (0, 5)]);
        assert_eq!(approximate_polygon(&c, 0.01), c);
    }

    #[test]
    fn test_collinear_vertex_removed() {
        let c = contour(&[(0, 0), (3, 0), (6, 0), (6, 4), (0, 4)]);
        assert_eq!(
            approximate_polygon(&c, 0.01),
            contour(&[(0, 0), (6, 0), (6, 4), (0, 4)])
        );
    }

    #[test]
    fn test_staircase_collapses_to_triangle() {
        let c = staircase(10);
        let simplified = approximate_polygon(&c, 0.02);
        assert_eq!(simplified, contour(&[(0, 0), (10, 10), (0, 10)]));
    }

    #[test]
    fn test_vertex_count_monotone_in_tolerance() {
        let c = staircase(12);
        let mut previous = usize::MAX;
        for t in [0.0, 0.001, 0.005, 0.01, 0.02, 0.05, 0.1, 0.5, 1.0] {
            let len = approximate_polygon(&c, t).len();
            assert!(len <= previous, "t = {t}: {len} > {previous}");
            previous = len;
        }
    }

    /// Deterministic noise masks; xorshift keeps the fixtures stable.
    fn noise_masks(count: usize, size: usize) -> Vec<OccupancyMask> {
        let mut state = 0x2545_f491_u32;
        (0..count)
            .map(|_| {
                OccupancyMask::from_fn(size, size, |_, _| {
                    state ^= state << 13;
                    state ^= state >> 17;
                    state ^= state << 5;
                    state % 5 < 3
                })
            })
            .collect()
    }

    #[test]
    fn test_vertex_count_monotone_on_traced_borders() {
        let tolerances = [0.0, 0.001, 0.005, 0.01, 0.02, 0.05, 0.1, 0.5];
        let mut checked = 0;
        for mask in noise_masks(6, 16) {
            for c in trace_contours(&mask) {
                let mut previous = usize::MAX;
                for t in tolerances {
                    let simplified = approximate_polygon(&c, t);
                    assert!(simplified.len() <= previous, "t = {t}: {c:?}");
                    assert_eq!(simplified.is_hole(), c.is_hole());
                    previous = simplified.len();
                }
                checked += 1;
            }
        }
        assert!(checked > 6, "noise masks traced to only {checked} borders");
    }

    #[test]
    fn test_simplified_points_are_subset_in_order() {
        let c = staircase(8);
        let simplified = approximate_polygon(&c, 0.01);
        let mut source = c.points().iter();
        for p in simplified.points() {
            assert!(source.any(|q| q == p), "{p:?} out of order");
        }
    }

    #[test]
    fn test_simplify_contours_drops_degenerate() {
        let square = contour(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        let contours = vec![square.clone(), contour(&[(0, 0), (1, 1)])];
        assert_eq!(simplify_contours(&contours, 0.01), vec![square]);
    }

    #[test]
    fn test_simplify_contours_drops_lone_pixels() {
        let mask = OccupancyMask::from_ascii(&[
            "#....", //
            "..###", //
            "..###", //
        ]);
        let contours = trace_contours(&mask);
        assert_eq!(contours.len(), 2);
        let kept = simplify_contours(&contours, 0.0);
        assert_eq!(kept.len(), 1);
        assert_eq!(
            kept[0].bounding_box(),
            Some((Point::new(2, 1), Point::new(4, 2)))
        );
    }

    #[test]
    fn test_huge_tolerance_leaves_only_anchors() {
        let square = contour(&[(0, 0), (2, 0), (2, 2), (0, 2)]);
        assert_eq!(approximate_polygon(&square, 10.0).len(), 2);
        assert!(simplify_contours(&[square], 10.0).is_empty());
    }

    #[test]
    fn test_segment_distance_degenerate_segment() {
        let a = Point::new(1, 1);
        assert_eq!(segment_distance(Point::new(4, 5), a, a), 5.0);
    }

    #[test]
    fn test_segment_distance_clamps_to_endpoints() {
        let d = segment_distance(Point::new(-3, 4), Point::new(0, 0), Point::new(10, 0));
        assert_eq!(d, 5.0);
    }
}
