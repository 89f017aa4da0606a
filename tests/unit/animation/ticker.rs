use super::*;

#[test]
fn idle_ticker_never_yields() {
    let mut t = FrameTicker::default();
    assert!(!t.is_ticking());
    assert_eq!(t.poll(0.0), None);
    assert_eq!(t.poll(100.0), None);
}

#[test]
fn attach_yields_immediately_then_at_cadence() {
    let mut t = FrameTicker::new(Fps::FILM);
    t.attach(10.0);
    assert!(t.is_ticking());
    assert_eq!(t.poll(10.0), Some(10.0));
    assert_eq!(t.poll(10.01), None);
    let next = 10.0 + 1.0 / 24.0;
    assert_eq!(t.poll(next), Some(next));
}

#[test]
fn late_poll_yields_once_without_backlog() {
    let mut t = FrameTicker::new(Fps::FILM);
    t.attach(0.0);
    assert!(t.poll(0.0).is_some());
    // Five frame periods elapse with no poll.
    assert_eq!(t.poll(0.25), Some(0.25));
    assert_eq!(t.poll(0.25), None);
    assert_eq!(t.poll(0.26), None);
}

#[test]
fn detach_returns_to_idle() {
    let mut t = FrameTicker::default();
    t.attach(1.0);
    t.detach();
    assert_eq!(t.state(), TickerState::Idle);
    assert_eq!(t.poll(2.0), None);
}

#[test]
fn reattach_while_ticking_keeps_schedule() {
    let mut t = FrameTicker::default();
    t.attach(0.0);
    assert!(t.poll(0.0).is_some());
    t.attach(0.01);
    assert_eq!(t.poll(0.01), None);
}
