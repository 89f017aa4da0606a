/// Seeded linear-congruential generator.
///
/// Every call advances `state = state * A + C` (wrapping) and returns the new
/// state. The sequence is a pure function of the seed, which makes any frame of
/// a procedural overlay reproducible from the seed alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lcg64 {
    state: u64,
}

impl Lcg64 {
    /// Multiplier (Knuth MMIX).
    pub const MULTIPLIER: u64 = 6_364_136_223_846_793_005;
    /// Increment (Knuth MMIX).
    pub const INCREMENT: u64 = 1_442_695_040_888_963_407;

    /// Create a generator. A seed of 0 is valid.
    pub fn new(seed: u64) -> Self {
        Self { state: seed }
    }

    /// Seed derived from a wall-clock timestamp at millisecond resolution.
    pub fn seed_for_timestamp(secs: f64) -> u64 {
        if !secs.is_finite() {
            return 0;
        }
        (secs.max(0.0) * 1000.0).round() as u64
    }

    /// Generator seeded from [`Lcg64::seed_for_timestamp`].
    pub fn from_timestamp(secs: f64) -> Self {
        Self::new(Self::seed_for_timestamp(secs))
    }

    /// Advance and return the next raw value.
    pub fn next_u64(&mut self) -> u64 {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
        self.state
    }

    /// Uniform value in `[0, 1)` from the top 53 bits.
    pub fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) * (1.0 / ((1u64 << 53) as f64))
    }

    /// Uniform value between `lo` and `hi`.
    ///
    /// Inverted bounds are swapped; equal bounds collapse to that single value.
    pub fn range(&mut self, lo: f64, hi: f64) -> f64 {
        let (lo, hi) = if hi < lo { (hi, lo) } else { (lo, hi) };
        let u = self.next_f64();
        if hi == lo {
            return lo;
        }
        (lo + u * (hi - lo)).min(hi)
    }

    /// Uniform `f32` between `lo` and `hi`.
    pub fn range_f32(&mut self, lo: f32, hi: f32) -> f32 {
        self.range(f64::from(lo), f64::from(hi)) as f32
    }

    /// Uniform index in `0..n`; always 0 when `n == 0`.
    pub fn index(&mut self, n: usize) -> usize {
        let u = self.next_f64();
        if n == 0 {
            return 0;
        }
        ((u * n as f64) as usize).min(n - 1)
    }

    /// `true` with probability `p`.
    pub fn chance(&mut self, p: f64) -> bool {
        self.next_f64() < p
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/rng.rs"]
mod tests;
