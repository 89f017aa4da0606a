use crate::{
    foundation::core::{BezPath, Point, Rect},
    shapes::star::polygon,
};

/// Rhombus through the edge midpoints of `rect`: top, right, bottom, left.
pub fn diamond_path(rect: Rect) -> BezPath {
    let r = rect.abs();
    let c = r.center();
    polygon(&[
        Point::new(c.x, r.y0),
        Point::new(r.x1, c.y),
        Point::new(c.x, r.y1),
        Point::new(r.x0, c.y),
    ])
}
