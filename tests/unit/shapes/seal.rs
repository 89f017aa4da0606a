use super::*;
use crate::render::record::{DrawList, DrawOp};
use kurbo::PathEl;

#[test]
fn rim_is_closed_and_within_radius() {
    let g = WaxSeal::geometry(Rect::new(0.0, 0.0, 120.0, 80.0));
    assert_eq!(g.center, Point::new(60.0, 40.0));
    assert_eq!(g.radius, 40.0);

    let els = g.rim.elements();
    assert_eq!(els.len(), RIM_SAMPLES + 1);
    assert!(matches!(els.last(), Some(PathEl::ClosePath)));
    for el in els {
        if let PathEl::MoveTo(p) | PathEl::LineTo(p) = el {
            let d = (*p - g.center).hypot();
            assert!(d <= g.radius + 1e-9);
            assert!(d >= g.radius * (1.0 - 2.0 * RIM_MODULATION) - 1e-9);
        }
    }
}

#[test]
fn rim_starts_at_a_lobe_peak_on_top() {
    let g = WaxSeal::geometry(Rect::new(0.0, 0.0, 100.0, 100.0));
    let PathEl::MoveTo(p) = g.rim.elements()[0] else {
        panic!("rim must start with move_to");
    };
    assert!((p.x - 50.0).abs() < 1e-9);
    assert!((p.y - 0.0).abs() < 1e-9);
}

#[test]
fn geometry_is_pure() {
    let rect = Rect::new(3.0, 4.0, 50.0, 60.0);
    let a = WaxSeal::geometry(rect);
    let b = WaxSeal::geometry(rect);
    assert_eq!(a.rim, b.rim);
    assert_eq!(a.face, b.face);
}

#[test]
fn draw_emits_layers_in_order() {
    let mut list = DrawList::new();
    WaxSeal::default().draw(&mut list, Rect::new(0.0, 0.0, 64.0, 64.0));
    let ops = list.ops();
    assert_eq!(ops.len(), 5);
    assert!(matches!(ops[0], DrawOp::FillPath { .. }));
    assert!(matches!(ops[2], DrawOp::StrokePath { .. }));
    assert!(matches!(ops[4], DrawOp::FillCircle { .. }));

    let plain = WaxSeal {
        emblem_points: None,
        ..WaxSeal::default()
    };
    let mut list = DrawList::new();
    plain.draw(&mut list, Rect::new(0.0, 0.0, 64.0, 64.0));
    assert_eq!(list.draw_count(), 4);
}

#[test]
fn degenerate_box_draws_nothing() {
    let mut list = DrawList::new();
    WaxSeal::default().draw(&mut list, Rect::new(10.0, 10.0, 10.0, 50.0));
    assert!(list.is_empty());
}
