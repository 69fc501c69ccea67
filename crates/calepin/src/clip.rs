//! Point-in-polygon testing.
//!
//! This is the hot path of the layout engine: every candidate tile
//! tests its four corners against the outline.

use crate::geometry::Point;

/// Test if a point is inside a polygon using ray casting.
///
/// Casts a ray to the right and counts edge crossings; odd means inside.
/// Edges wrap last→first, so a repeated closing vertex is harmless
/// (a zero-length edge never crosses the ray).
#[inline]
pub fn point_in_polygon(px: f64, py: f64, polygon: &[Point]) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let mut inside = false;
    let mut j = n - 1;

    for i in 0..n {
        let (xi, yi) = (polygon[i].x, polygon[i].y);
        let (xj, yj) = (polygon[j].x, polygon[j].y);

        if ((yi > py) != (yj > py)) && (px < (xj - xi) * (py - yi) / (yj - yi) + xi) {
            inside = !inside;
        }

        j = i;
    }

    inside
}

/// Inclusion test for a candidate tile rectangle.
///
/// A tile is kept if *any* of its four corners lies inside the outline.
/// This deliberately over-includes thin boundary slivers rather than
/// dropping tiles that straddle the edge; true containment is not checked.
#[inline]
pub fn any_corner_inside(corners: &[(f64, f64); 4], polygon: &[Point]) -> bool {
    corners
        .iter()
        .any(|&(cx, cy)| point_in_polygon(cx, cy, polygon))
}
