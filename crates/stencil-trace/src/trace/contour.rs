//! Contour geometry in pixel coordinates.

/// A vertex at the center of pixel `(x, y)`.
///
/// A `W x H` raster has vertices in `[0, W - 1] x [0, H - 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    #[inline]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn distance(self, other: Point) -> f64 {
        let dx = (self.x - other.x) as f64;
        let dy = (self.y - other.y) as f64;
        dx.hypot(dy)
    }

    #[inline]
    pub(crate) fn distance_squared(self, other: Point) -> i64 {
        let dx = (self.x - other.x) as i64;
        let dy = (self.y - other.y) as i64;
        dx * dx + dy * dy
    }
}

/// A closed polygon; the last point connects back to the first.
///
/// Each contour remembers whether the tracer found it as the outer border
/// of a region or as the border of a hole inside one. Emission does not
/// depend on it: the even-odd fill rule renders holes from the geometry.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Contour {
    points: Vec<Point>,
    hole: bool,
}

impl Contour {
    /// The outer border of a region.
    pub fn outer(points: Vec<Point>) -> Self {
        Self {
            points,
            hole: false,
        }
    }

    /// The border of a hole inside a region.
    pub fn hole(points: Vec<Point>) -> Self {
        Self { points, hole: true }
    }

    /// Same border kind, different vertices.
    pub(crate) fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            points,
            hole: self.hole,
        }
    }

    #[inline]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Fewer than three vertices cannot enclose an area.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.points.len() < 3
    }

    #[inline]
    pub fn is_hole(&self) -> bool {
        self.hole
    }

    /// Closed arc length, including the edge from the last point to the first.
    pub fn perimeter(&self) -> f64 {
        let n = self.points.len();
        if n < 2 {
            return 0.0;
        }
        (0..n)
            .map(|i| self.points[i].distance(self.points[(i + 1) % n]))
            .sum()
    }

    /// Axis-aligned bounds as `(min, max)` corners.
    pub fn bounding_box(&self) -> Option<(Point, Point)> {
        let first = *self.points.first()?;
        Some(self.points.iter().fold((first, first), |(lo, hi), p| {
            (
                Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                Point::new(hi.x.max(p.x), hi.y.max(p.y)),
            )
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn square(x0: i32, y0: i32, size: i32) -> Contour {
        Contour::outer(vec![
            Point::new(x0, y0),
            Point::new(x0 + size, y0),
            Point::new(x0 + size, y0 + size),
            Point::new(x0, y0 + size),
        ])
    }

    #[test]
    fn test_perimeter_closes_the_loop() {
        assert_eq!(square(0, 0, 3).perimeter(), 12.0);
    }

    #[test]
    fn test_perimeter_of_short_contours() {
        assert_eq!(Contour::default().perimeter(), 0.0);
        assert_eq!(Contour::outer(vec![Point::new(4, 4)]).perimeter(), 0.0);
    }

    #[test]
    fn test_with_points_keeps_border_kind() {
        let hole = Contour::hole(square(1, 1, 2).points().to_vec());
        assert!(hole.is_hole());
        assert!(hole.with_points(vec![Point::new(0, 0)]).is_hole());
        assert!(!square(1, 1, 2).with_points(Vec::new()).is_hole());
    }

    #[test]
    fn test_bounding_box() {
        let c = Contour::outer(vec![Point::new(3, 1), Point::new(7, 2), Point::new(4, 9)]);
        assert_eq!(c.bounding_box(), Some((Point::new(3, 1), Point::new(7, 9))));
        assert_eq!(Contour::default().bounding_box(), None);
    }

    #[test]
    fn test_degenerate() {
        assert!(Contour::outer(vec![Point::new(0, 0), Point::new(1, 0)]).is_degenerate());
        assert!(!square(0, 0, 1).is_degenerate());
    }
}
