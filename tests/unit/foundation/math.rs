use super::*;

#[test]
fn fnv_seeded_hash_is_stable() {
    let mut a = Fnv1a64::new_default();
    a.write_bytes(b"keepsake");
    let mut b = Fnv1a64::new(Fnv1a64::OFFSET_BASIS);
    b.write_bytes(b"keep");
    b.write_bytes(b"sake");
    assert_eq!(a.finish(), b.finish());
}

#[test]
fn hash_stream_is_payload_stable() {
    let mut a = HashStream::new(b"2024-03-01");
    let mut b = HashStream::new(b"2024-03-01");
    let mut c = HashStream::new(b"2024-03-02");
    let wa: Vec<u64> = (0..8).map(|_| a.next_word()).collect();
    let wb: Vec<u64> = (0..8).map(|_| b.next_word()).collect();
    let wc: Vec<u64> = (0..8).map(|_| c.next_word()).collect();
    assert_eq!(wa, wb);
    assert_ne!(wa, wc);
    assert_ne!(wa[0], wa[1]);
}
