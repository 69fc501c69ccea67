//! Core geometry types and measurements.
//!
//! All coordinates are canvas pixels; `scale` pixels equal one metre.
//! Physical conversions happen at the edges (area in m², edge lengths
//! rounded to decimetres), everything in between stays in pixels.

/// A 2D point in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    #[inline]
    pub fn distance(&self, other: Point) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Bounding box of a point sequence as (min_x, min_y, max_x, max_y).
pub fn bounding_box(points: &[Point]) -> Option<(f64, f64, f64, f64)> {
    if points.is_empty() {
        return None;
    }

    let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
    let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
    let max_x = points.iter().map(|p| p.x).fold(f64::NEG_INFINITY, f64::max);
    let max_y = points.iter().map(|p| p.y).fold(f64::NEG_INFINITY, f64::max);

    Some((min_x, min_y, max_x, max_y))
}

/// Polygon area in square metres via the shoelace formula.
///
/// Indices wrap modulo the point count, so the polygon is treated as
/// closed whether or not the caller repeats the first point at the end.
/// Winding direction does not matter; the result is absolute.
/// Returns 0 for fewer than 3 points.
pub fn polygon_area(points: &[Point], scale: f64) -> f64 {
    let n = points.len();
    if n < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        area += points[i].x * points[j].y;
        area -= points[j].x * points[i].y;
    }
    (area / (2.0 * scale * scale)).abs()
}
