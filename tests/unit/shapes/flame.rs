use super::*;
use kurbo::{PathEl, Shape as _};

#[test]
fn flame_runs_bottom_to_tip_and_back() {
    let rect = Rect::new(0.0, 0.0, 40.0, 100.0);
    let path = flame_path(rect);
    let els = path.elements();
    assert_eq!(els.len(), 4);
    assert_eq!(els[0], PathEl::MoveTo(Point::new(20.0, 100.0)));
    let PathEl::CurveTo(_, _, tip) = els[1] else {
        panic!("expected curve, got {:?}", els[1]);
    };
    assert_eq!(tip, Point::new(20.0, 0.0));
    assert_eq!(els[3], PathEl::ClosePath);
}

#[test]
fn flame_stays_inside_its_box() {
    let rect = Rect::new(5.0, 10.0, 45.0, 110.0);
    let bbox = flame_path(rect).bounding_box();
    assert!(bbox.x0 >= rect.x0 - 1e-9 && bbox.x1 <= rect.x1 + 1e-9);
    assert!(bbox.y0 >= rect.y0 - 1e-9 && bbox.y1 <= rect.y1 + 1e-9);
}

#[test]
fn core_shares_the_base() {
    let rect = Rect::new(0.0, 0.0, 40.0, 100.0);
    let core = flame_core_rect(rect);
    assert_eq!(core.y1, rect.y1);
    assert!((core.width() - 22.0).abs() < 1e-9);
    assert!((core.height() - 55.0).abs() < 1e-9);
    assert_eq!(core.center().x, rect.center().x);
    assert!(!flame_core_path(rect).elements().is_empty());
}
