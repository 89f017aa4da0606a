use super::*;

const SIZE: Size = Size::new(300.0, 450.0);

#[test]
fn same_timestamp_same_layout() {
    let grain = FilmGrain::default();
    assert_eq!(grain.record_at(SIZE, 12.345), grain.record_at(SIZE, 12.345));
}

#[test]
fn different_timestamps_differ() {
    let grain = FilmGrain::default();
    let a = grain.record_at(SIZE, 12.345);
    let b = grain.record_at(SIZE, 12.345 + 1.0 / 24.0);
    assert_ne!(a, b);
    assert_eq!(a.draw_count(), b.draw_count());
}

#[test]
fn counts_are_fixed() {
    let grain = FilmGrain {
        fine_count: 100,
        defect_count: 7,
        ..FilmGrain::default()
    };
    let list = grain.record_at(SIZE, 1.0);
    assert_eq!(list.draw_count(), 107);
    assert_eq!(list.layer_count(), 1);
}

#[test]
fn alpha_is_bounded_by_intensity() {
    for intensity in [0.0f32, 0.2, 0.5, 1.0] {
        let list = FilmGrain::with_intensity(intensity).record_at(SIZE, 3.0);
        assert!(list.max_effective_alpha() <= intensity + 1e-6);
    }
    let list = FilmGrain::with_intensity(7.0).record_at(SIZE, 3.0);
    assert!(list.max_effective_alpha() <= 1.0);
}

#[test]
fn degenerate_surface_draws_nothing() {
    assert!(
        FilmGrain::default()
            .record_at(Size::new(0.0, 0.0), 1.0)
            .is_empty()
    );
}

#[test]
fn overlay_only_draws_while_ticking() {
    let mut overlay = FilmGrainOverlay::new(FilmGrain {
        fine_count: 10,
        defect_count: 1,
        ..FilmGrain::default()
    });
    let mut list = DrawList::new();

    assert!(!overlay.tick(0.0, &mut list, SIZE));
    overlay.appear(1.0);
    assert!(overlay.is_ticking());
    assert!(overlay.tick(1.0, &mut list, SIZE));
    assert!(!overlay.tick(1.01, &mut list, SIZE));
    assert!(overlay.tick(1.0 + 1.0 / 24.0, &mut list, SIZE));
    overlay.disappear();
    assert!(!overlay.tick(5.0, &mut list, SIZE));

    assert_eq!(overlay.frames_drawn(), 2);
    assert_eq!(list.draw_count(), 2 * 11);
}

#[test]
fn overlay_frame_matches_direct_draw() {
    let grain = FilmGrain::default();
    let mut overlay = FilmGrainOverlay::new(grain.clone());
    overlay.appear(2.5);
    let mut list = DrawList::new();
    assert!(overlay.tick(2.5, &mut list, SIZE));
    assert_eq!(list, grain.record_at(SIZE, 2.5));
}

#[test]
fn reduced_motion_never_ticks() {
    let mut overlay = FilmGrainOverlay::new(FilmGrain::default()).with_motion(false);
    overlay.appear(0.0);
    assert!(!overlay.is_ticking());
    let mut list = DrawList::new();
    assert!(!overlay.tick(0.0, &mut list, SIZE));
    assert!(list.is_empty());
}
