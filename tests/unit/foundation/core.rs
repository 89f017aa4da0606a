use super::*;

#[test]
fn fps_rejects_zero_parts() {
    assert!(Fps::new(0, 1).is_err());
    assert!(Fps::new(24, 0).is_err());
    assert_eq!(Fps::default(), Fps::new(24, 1).unwrap());
}

#[test]
fn fps_frame_math() {
    let fps = Fps::FILM;
    assert!((fps.frame_duration_secs() - 1.0 / 24.0).abs() < 1e-12);
    assert!((fps.frames_to_secs(48) - 2.0).abs() < 1e-12);
    assert_eq!(fps.secs_to_frames_ceil(1.01), 25);
    assert_eq!(fps.secs_to_frames_ceil(-3.0), 0);
}

#[test]
fn color_alpha_is_clamped() {
    assert_eq!(Color::WHITE.with_alpha(2.0).a, 1.0);
    assert_eq!(Color::WHITE.with_alpha(-1.0).a, 0.0);
    assert_eq!(Color::BLACK.with_alpha(0.5).to_rgba8(), [0, 0, 0, 128]);
}

#[test]
fn color_lerp_endpoints() {
    let a = Color::rgb(10, 20, 30);
    let b = Color::rgb(110, 120, 130).with_alpha(0.0);
    assert_eq!(a.lerp(b, 0.0), a);
    assert_eq!(a.lerp(b, 1.0), b);
    assert_eq!(a.lerp(b, 0.5).r, 60);
}

#[test]
fn degenerate_sizes() {
    assert!(is_degenerate(Size::new(0.0, 10.0)));
    assert!(is_degenerate(Size::new(10.0, -1.0)));
    assert!(!is_degenerate(Size::new(1.0, 1.0)));
}
