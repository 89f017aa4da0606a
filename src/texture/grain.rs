use crate::{
    animation::ticker::FrameTicker,
    foundation::core::{Color, Fps, Point, Size, is_degenerate},
    foundation::rng::Lcg64,
    render::backend::{BlendMode, DrawBackend, Paint},
    render::record::DrawList,
};

const DEFECT: Color = Color::rgb(13, 11, 10);

/// Film-grain overlay redrawn from a timestamp-derived seed.
///
/// Any frame is a pure function of its timestamp: nothing carries over
/// between ticks except the seed derived from the clock.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct FilmGrain {
    /// Alpha ceiling in `[0, 1]`.
    pub intensity: f32,
    /// Fine grain dots per frame.
    pub fine_count: usize,
    /// Large dust/defect dots per frame.
    pub defect_count: usize,
    /// Redraw cadence.
    pub fps: Fps,
}

impl Default for FilmGrain {
    fn default() -> Self {
        Self {
            intensity: 0.5,
            fine_count: 1200,
            defect_count: 12,
            fps: Fps::FILM,
        }
    }
}

impl FilmGrain {
    /// Grain with default counts at the given intensity.
    pub fn with_intensity(intensity: f32) -> Self {
        Self {
            intensity,
            ..Self::default()
        }
    }

    /// Draw the frame for `timestamp` (seconds).
    pub fn draw_at(&self, backend: &mut dyn DrawBackend, size: Size, timestamp: f64) {
        self.draw_with(backend, size, &mut Lcg64::from_timestamp(timestamp));
    }

    /// Record the frame for `timestamp` into a [`DrawList`].
    pub fn record_at(&self, size: Size, timestamp: f64) -> DrawList {
        let mut list = DrawList::new();
        self.draw_at(&mut list, size, timestamp);
        list
    }

    fn draw_with(&self, backend: &mut dyn DrawBackend, size: Size, rng: &mut Lcg64) {
        if is_degenerate(size) {
            tracing::trace!(?size, "film grain skipped for degenerate surface");
            return;
        }
        let (w, h) = (size.width, size.height);
        let intensity = self.intensity.clamp(0.0, 1.0);

        backend.push_layer(BlendMode::Overlay, 1.0);

        for _ in 0..self.fine_count {
            let center = Point::new(rng.range(0.0, w), rng.range(0.0, h));
            let radius = rng.range(0.3, 1.0);
            let level = rng.next_f64();
            let alpha = intensity * rng.range_f32(0.1, 0.4);
            backend.fill_circle(
                center,
                radius,
                &Paint::Solid(Color::gray(level).with_alpha(alpha)),
            );
        }

        for _ in 0..self.defect_count {
            let center = Point::new(rng.range(0.0, w), rng.range(0.0, h));
            let radius = rng.range(1.5, 3.5);
            let alpha = intensity * rng.range_f32(0.3, 0.7);
            backend.fill_circle(center, radius, &Paint::Solid(DEFECT.with_alpha(alpha)));
        }

        backend.pop_layer();
    }
}

/// Film grain bound to a [`FrameTicker`]: idle until it appears, then one
/// redraw per due tick until it disappears.
#[derive(Clone, Debug)]
pub struct FilmGrainOverlay {
    grain: FilmGrain,
    ticker: FrameTicker,
    motion: bool,
    frames_drawn: u64,
}

impl FilmGrainOverlay {
    /// Idle overlay ticking at `grain.fps`.
    pub fn new(grain: FilmGrain) -> Self {
        let ticker = FrameTicker::new(grain.fps);
        Self {
            grain,
            ticker,
            motion: true,
            frames_drawn: 0,
        }
    }

    /// Disable animation entirely; the overlay then never leaves `Idle`.
    pub fn with_motion(mut self, enabled: bool) -> Self {
        self.motion = enabled;
        if !enabled {
            self.ticker.detach();
        }
        self
    }

    /// Grain parameters.
    pub fn grain(&self) -> &FilmGrain {
        &self.grain
    }

    /// `true` while subscribed to ticks.
    pub fn is_ticking(&self) -> bool {
        self.ticker.is_ticking()
    }

    /// Frames drawn since construction.
    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    /// Idle -> Ticking.
    pub fn appear(&mut self, now: f64) {
        if self.motion {
            self.ticker.attach(now);
        }
    }

    /// Ticking -> Idle.
    pub fn disappear(&mut self) {
        self.ticker.detach();
    }

    /// Redraw when a tick is due; returns whether a frame was drawn.
    pub fn tick(&mut self, now: f64, backend: &mut dyn DrawBackend, size: Size) -> bool {
        let Some(at) = self.ticker.poll(now) else {
            return false;
        };
        self.grain.draw_at(backend, size, at);
        self.frames_drawn += 1;
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/texture/grain.rs"]
mod tests;
