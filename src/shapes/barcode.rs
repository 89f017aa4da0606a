use crate::{
    foundation::core::{Color, Rect},
    foundation::math::HashStream,
    render::backend::{DrawBackend, Paint},
};

/// Data bars between the guard patterns.
const DATA_BARS: usize = 24;

/// Guard pattern (bar, gap, bar) in modules.
const GUARD: [u8; 3] = [1, 1, 1];

/// Bar/gap run lengths in modules, starting and ending with a bar.
fn module_runs(payload: &str) -> Vec<u8> {
    let mut stream = HashStream::new(payload.as_bytes());
    let mut runs = Vec::with_capacity(GUARD.len() * 2 + DATA_BARS * 2 + 2);
    runs.extend_from_slice(&GUARD);
    runs.push(1);
    for _ in 0..DATA_BARS {
        let w = stream.next_word();
        runs.push(1 + (w % 3) as u8);
        runs.push(1 + ((w >> 8) % 3) as u8);
    }
    runs.extend_from_slice(&GUARD);
    runs
}

/// Bars of a decorative barcode for `payload`, scaled to fill `rect`.
///
/// The pattern is a pure function of the payload: guard bars at both ends and
/// hash-derived bar/gap widths of 1-3 modules in between. An empty rect yields
/// no bars.
pub fn barcode_bars(rect: Rect, payload: &str) -> Vec<Rect> {
    let r = rect.abs();
    if r.width() <= 0.0 || r.height() <= 0.0 {
        return Vec::new();
    }

    let runs = module_runs(payload);
    let total: u32 = runs.iter().map(|&m| u32::from(m)).sum();
    let module = r.width() / f64::from(total);

    let mut bars = Vec::with_capacity(runs.len() / 2 + 1);
    let mut x = r.x0;
    for (i, &m) in runs.iter().enumerate() {
        let w = f64::from(m) * module;
        if i % 2 == 0 {
            bars.push(Rect::new(x, r.y0, x + w, r.y1));
        }
        x += w;
    }
    bars
}

/// Fill the bars of [`barcode_bars`].
pub fn draw_barcode(backend: &mut dyn DrawBackend, rect: Rect, payload: &str, ink: Color) {
    let paint = Paint::Solid(ink);
    for bar in barcode_bars(rect, payload) {
        backend.fill_rect(bar, &paint);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/barcode.rs"]
mod tests;
