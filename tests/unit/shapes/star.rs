use super::*;
use kurbo::PathEl;

fn assert_close(a: Point, b: Point) {
    assert!((a - b).hypot() < 1e-9, "{a:?} != {b:?}");
}

#[test]
fn first_vertex_points_up_for_any_aspect() {
    for rect in [
        Rect::new(0.0, 0.0, 100.0, 100.0),
        Rect::new(10.0, 20.0, 310.0, 70.0),
        Rect::new(-5.0, -40.0, 15.0, 200.0),
    ] {
        let v = star_vertices(rect, 4);
        assert_eq!(v.len(), 8);
        assert_close(v[0], Point::new(rect.center().x, rect.y0));
    }
}

#[test]
fn vertices_alternate_outer_and_inner_radius() {
    let rect = Rect::new(0.0, 0.0, 200.0, 200.0);
    let c = rect.center();
    for (i, p) in star_vertices(rect, 5).into_iter().enumerate() {
        let r = (p - c).hypot();
        let expected = if i % 2 == 0 { 100.0 } else { 40.0 };
        assert!((r - expected).abs() < 1e-9, "vertex {i}: r={r}");
    }
}

#[test]
fn second_vertex_follows_the_angle_convention() {
    let rect = Rect::new(0.0, 0.0, 100.0, 100.0);
    let v = star_vertices(rect, 4);
    // i = 1 -> angle = PI/4 - PI/2 = -PI/4 at inner radius 20.
    let a = -std::f64::consts::FRAC_PI_4;
    assert_close(v[1], Point::new(50.0 + 20.0 * a.cos(), 50.0 + 20.0 * a.sin()));
}

#[test]
fn path_is_closed_polygon() {
    let path = star_path(Rect::new(0.0, 0.0, 10.0, 10.0), 6);
    let els = path.elements();
    assert!(matches!(els[0], PathEl::MoveTo(_)));
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));
    assert_eq!(els.len(), 1 + 11 + 1);
}

#[test]
fn too_few_points_is_clamped() {
    assert_eq!(star_vertices(Rect::new(0.0, 0.0, 1.0, 1.0), 0).len(), 4);
}

#[test]
fn degenerate_rect_does_not_panic() {
    let v = star_vertices(Rect::ZERO, 5);
    assert!(v.iter().all(|p| p.x == 0.0 && p.y == 0.0));
}
