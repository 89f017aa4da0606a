use crate::foundation::core::{BezPath, Point, Rect};

/// Candle-flame silhouette filling `rect`.
///
/// Two cubic segments run from the bottom center up to the tip and back; the
/// four control points are fixed fractions of the box.
pub fn flame_path(rect: Rect) -> BezPath {
    let r = rect.abs();
    let (w, h) = (r.width(), r.height());
    let bottom = Point::new(r.center().x, r.y1);
    let tip = Point::new(r.center().x, r.y0);

    let mut path = BezPath::new();
    path.move_to(bottom);
    path.curve_to(
        Point::new(r.x0, r.y1 - 0.1 * h),
        Point::new(r.x0 + 0.2 * w, r.y0 + 0.4 * h),
        tip,
    );
    path.curve_to(
        Point::new(r.x1 - 0.2 * w, r.y0 + 0.4 * h),
        Point::new(r.x1, r.y1 - 0.1 * h),
        bottom,
    );
    path.close_path();
    path
}

/// Inner flame: the silhouette at 55% scale, sharing the outer flame's base.
pub fn flame_core_path(rect: Rect) -> BezPath {
    flame_path(flame_core_rect(rect))
}

pub(crate) fn flame_core_rect(rect: Rect) -> Rect {
    const SCALE: f64 = 0.55;
    let r = rect.abs();
    let (w, h) = (r.width() * SCALE, r.height() * SCALE);
    let cx = r.center().x;
    Rect::new(cx - w / 2.0, r.y1 - h, cx + w / 2.0, r.y1)
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/flame.rs"]
mod tests;
