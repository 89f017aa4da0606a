use super::*;

#[test]
fn rng_is_deterministic() {
    for seed in [0u64, 1, 42, u64::MAX] {
        let mut a = Lcg64::new(seed);
        let mut b = Lcg64::new(seed);
        for _ in 0..64 {
            assert_eq!(a.next_u64(), b.next_u64());
        }
    }
}

#[test]
fn zero_seed_starts_at_increment() {
    let mut rng = Lcg64::new(0);
    assert_eq!(rng.next_u64(), Lcg64::INCREMENT);
    assert_eq!(
        rng.next_u64(),
        Lcg64::INCREMENT
            .wrapping_mul(Lcg64::MULTIPLIER)
            .wrapping_add(Lcg64::INCREMENT)
    );
}

#[test]
fn unit_interval_and_ranges_are_bounded() {
    let mut rng = Lcg64::new(7);
    for _ in 0..10_000 {
        let u = rng.next_f64();
        assert!((0.0..1.0).contains(&u));

        let v = rng.range(-3.0, 5.0);
        assert!((-3.0..=5.0).contains(&v));

        let w = rng.range(5.0, -3.0);
        assert!((-3.0..=5.0).contains(&w));

        assert!(rng.index(3) < 3);
    }
}

#[test]
fn collapsed_range_yields_single_point() {
    let mut rng = Lcg64::new(9);
    assert_eq!(rng.range(4.0, 4.0), 4.0);
    assert_eq!(rng.range(0.0, 0.0), 0.0);
    assert_eq!(rng.index(0), 0);
}

#[test]
fn timestamp_seeds_have_millisecond_resolution() {
    assert_eq!(Lcg64::seed_for_timestamp(1.0), 1000);
    assert_eq!(Lcg64::seed_for_timestamp(1.0004), 1000);
    assert_ne!(
        Lcg64::seed_for_timestamp(1.000),
        Lcg64::seed_for_timestamp(1.002)
    );
    assert_eq!(Lcg64::seed_for_timestamp(-5.0), 0);
    assert_eq!(Lcg64::seed_for_timestamp(f64::NAN), 0);
    assert_eq!(Lcg64::from_timestamp(2.5), Lcg64::new(2500));
}
