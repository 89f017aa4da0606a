use std::f64::consts::{FRAC_PI_2, PI};

use crate::foundation::core::{BezPath, Point, Rect};

/// Inner vertices sit at this fraction of the outer radius.
pub const STAR_INNER_RATIO: f64 = 0.4;

/// Vertices of an N-pointed star inscribed in `rect`.
///
/// Returns `2 * points` vertices alternating outer/inner radius, vertex `i` at
/// angle `i * PI / points - PI / 2`. Radii are taken per axis, so vertex 0 is
/// always the top-center of `rect`. `points < 2` is treated as 2.
pub fn star_vertices(rect: Rect, points: usize) -> Vec<Point> {
    let points = points.max(2);
    let rect = rect.abs();
    let c = rect.center();
    let rx = rect.width() / 2.0;
    let ry = rect.height() / 2.0;

    (0..points * 2)
        .map(|i| {
            let f = if i % 2 == 0 { 1.0 } else { STAR_INNER_RATIO };
            let angle = i as f64 * PI / points as f64 - FRAC_PI_2;
            Point::new(c.x + rx * f * angle.cos(), c.y + ry * f * angle.sin())
        })
        .collect()
}

/// Closed star polygon; see [`star_vertices`].
pub fn star_path(rect: Rect, points: usize) -> BezPath {
    polygon(&star_vertices(rect, points))
}

pub(crate) fn polygon(vertices: &[Point]) -> BezPath {
    let mut path = BezPath::new();
    let mut iter = vertices.iter();
    if let Some(&first) = iter.next() {
        path.move_to(first);
        for &p in iter {
            path.line_to(p);
        }
        path.close_path();
    }
    path
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/star.rs"]
mod tests;
