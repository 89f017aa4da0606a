#[derive(Clone, Copy, Debug)]
pub(crate) struct Fnv1a64(u64);

impl Fnv1a64 {
    pub(crate) const OFFSET_BASIS: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01B3;

    pub(crate) fn new(seed: u64) -> Self {
        Self(seed)
    }

    pub(crate) fn new_default() -> Self {
        Self(Self::OFFSET_BASIS)
    }

    pub(crate) fn write_u64(&mut self, v: u64) {
        self.write_bytes(&v.to_le_bytes());
    }

    pub(crate) fn write_bytes(&mut self, bytes: &[u8]) {
        let mut h = self.0;
        for &b in bytes {
            h ^= u64::from(b);
            h = h.wrapping_mul(Self::PRIME);
        }
        self.0 = h;
    }

    pub(crate) fn finish(self) -> u64 {
        self.0
    }
}

/// Endless stream of hash words derived from a byte payload.
///
/// Each word re-hashes the payload digest with a running counter, so the
/// stream is stable for a given payload and never repeats within `u64` range.
pub(crate) struct HashStream {
    digest: u64,
    counter: u64,
}

impl HashStream {
    pub(crate) fn new(payload: &[u8]) -> Self {
        let mut h = Fnv1a64::new_default();
        h.write_bytes(payload);
        Self {
            digest: h.finish(),
            counter: 0,
        }
    }

    pub(crate) fn next_word(&mut self) -> u64 {
        let mut h = Fnv1a64::new(self.digest);
        h.write_u64(self.counter);
        self.counter = self.counter.wrapping_add(1);
        h.finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/math.rs"]
mod tests;
