use super::*;
use crate::render::record::DrawList;

#[test]
fn bars_fill_the_rect_edge_to_edge() {
    let rect = Rect::new(10.0, 5.0, 210.0, 45.0);
    let bars = barcode_bars(rect, "YG-0421");
    assert_eq!(bars.len(), 2 + DATA_BARS + 2);

    let first = bars[0];
    let last = bars[bars.len() - 1];
    assert!((first.x0 - rect.x0).abs() < 1e-9);
    assert!((last.x1 - rect.x1).abs() < 1e-9);
    for b in &bars {
        assert_eq!(b.y0, rect.y0);
        assert_eq!(b.y1, rect.y1);
        assert!(b.width() > 0.0);
    }
}

#[test]
fn bars_do_not_overlap_and_widths_are_whole_modules() {
    let rect = Rect::new(0.0, 0.0, 300.0, 20.0);
    let bars = barcode_bars(rect, "keepsake");
    let runs = module_runs("keepsake");
    let total: u32 = runs.iter().map(|&m| u32::from(m)).sum();
    let module = 300.0 / f64::from(total);

    for pair in bars.windows(2) {
        assert!(pair[0].x1 < pair[1].x0);
    }
    for b in &bars {
        let modules = b.width() / module;
        assert!((modules - modules.round()).abs() < 1e-6);
        assert!((1.0..=3.0).contains(&modules.round()));
    }
}

#[test]
fn same_payload_same_bars() {
    let rect = Rect::new(0.0, 0.0, 120.0, 30.0);
    assert_eq!(barcode_bars(rect, "a"), barcode_bars(rect, "a"));
    assert_ne!(barcode_bars(rect, "a"), barcode_bars(rect, "b"));
}

#[test]
fn empty_rect_has_no_bars() {
    assert!(barcode_bars(Rect::new(0.0, 0.0, 0.0, 30.0), "x").is_empty());
    assert!(barcode_bars(Rect::new(0.0, 0.0, 30.0, 0.0), "x").is_empty());
}

#[test]
fn draw_fills_one_rect_per_bar() {
    let mut list = DrawList::new();
    let rect = Rect::new(0.0, 0.0, 100.0, 10.0);
    draw_barcode(&mut list, rect, "", Color::BLACK);
    assert_eq!(list.draw_count(), barcode_bars(rect, "").len());
}
