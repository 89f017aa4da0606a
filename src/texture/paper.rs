use std::f64::consts::TAU;

use crate::{
    foundation::core::{Color, Point, Size, is_degenerate},
    foundation::rng::Lcg64,
    render::backend::{BlendMode, DrawBackend, Paint},
    render::record::DrawList,
};

const FIBER_DARK: Color = Color::rgb(92, 72, 48);
const FIBER_LIGHT: Color = Color::rgb(168, 146, 112);
const STAIN: Color = Color::rgb(139, 101, 58);
const SCRATCH: Color = Color::rgb(70, 56, 40);

/// Aged-paper overlay: fiber dots, stains and scratches under a multiply layer.
///
/// Computed once per card appearance; record it with [`PaperTexture::record`]
/// and replay the [`DrawList`] instead of re-sampling every frame.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct PaperTexture {
    /// Opacity of the multiply layer; also the ceiling of every element's effective alpha.
    pub opacity: f32,
    /// Small fiber dots.
    pub fiber_count: usize,
    /// Large faint stains.
    pub stain_count: usize,
    /// Short scratch segments.
    pub scratch_count: usize,
}

impl Default for PaperTexture {
    fn default() -> Self {
        Self {
            opacity: 0.25,
            fiber_count: 8000,
            stain_count: 30,
            scratch_count: 10,
        }
    }
}

impl PaperTexture {
    /// Texture with default counts at the given opacity.
    pub fn with_opacity(opacity: f32) -> Self {
        Self {
            opacity,
            ..Self::default()
        }
    }

    /// Number of draw calls a non-degenerate surface receives.
    pub fn draw_calls(&self) -> usize {
        self.fiber_count + self.stain_count + self.scratch_count
    }

    /// Sample the texture onto `backend`. Degenerate sizes draw nothing.
    pub fn draw(&self, backend: &mut dyn DrawBackend, size: Size, rng: &mut Lcg64) {
        if is_degenerate(size) {
            tracing::trace!(?size, "paper texture skipped for degenerate surface");
            return;
        }
        let (w, h) = (size.width, size.height);

        backend.push_layer(BlendMode::Multiply, self.opacity.clamp(0.0, 1.0));

        for _ in 0..self.fiber_count {
            let center = Point::new(rng.range(0.0, w), rng.range(0.0, h));
            let radius = rng.range(0.3, 1.2);
            let base = if rng.chance(0.5) {
                FIBER_DARK
            } else {
                FIBER_LIGHT
            };
            let alpha = rng.range_f32(0.03, 0.12);
            backend.fill_circle(center, radius, &Paint::Solid(base.with_alpha(alpha)));
        }

        for _ in 0..self.stain_count {
            let center = Point::new(rng.range(0.0, w), rng.range(0.0, h));
            let radius = rng.range(10.0, 40.0);
            let alpha = rng.range_f32(0.02, 0.06);
            backend.fill_circle(center, radius, &Paint::Solid(STAIN.with_alpha(alpha)));
        }

        for _ in 0..self.scratch_count {
            let from = Point::new(rng.range(0.0, w), rng.range(0.0, h));
            let angle = rng.range(0.0, TAU);
            let len = rng.range(10.0, 60.0);
            let to = Point::new(from.x + len * angle.cos(), from.y + len * angle.sin());
            let width = rng.range(0.3, 0.8);
            let alpha = rng.range_f32(0.05, 0.15);
            backend.stroke_line(from, to, width, &Paint::Solid(SCRATCH.with_alpha(alpha)));
        }

        backend.pop_layer();
    }

    /// Sample once into a replayable [`DrawList`].
    #[tracing::instrument(skip(self))]
    pub fn record(&self, size: Size, seed: u64) -> DrawList {
        let mut list = DrawList::new();
        self.draw(&mut list, size, &mut Lcg64::new(seed));
        list
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/paper.rs"]
mod tests;
