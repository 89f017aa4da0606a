use crate::foundation::core::Fps;

/// Lifecycle state of a [`FrameTicker`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TickerState {
    /// Not attached; polls never yield frames.
    Idle,
    /// Attached; the next frame is due at `next_due` seconds.
    Ticking {
        /// Timestamp (seconds) at which the next frame becomes due.
        next_due: f64,
    },
}

/// Explicit start/stop frame loop.
///
/// The owner calls [`FrameTicker::attach`] when its overlay becomes visible,
/// [`FrameTicker::poll`] on every display refresh, and [`FrameTicker::detach`]
/// on teardown. Late polls yield a single frame; missed frames are dropped
/// rather than queued.
#[derive(Clone, Debug)]
pub struct FrameTicker {
    fps: Fps,
    state: TickerState,
}

impl FrameTicker {
    /// Create an idle ticker at the given cadence.
    pub fn new(fps: Fps) -> Self {
        Self {
            fps,
            state: TickerState::Idle,
        }
    }

    /// Cadence of this ticker.
    pub fn fps(&self) -> Fps {
        self.fps
    }

    /// Current state.
    pub fn state(&self) -> TickerState {
        self.state
    }

    /// `true` while attached.
    pub fn is_ticking(&self) -> bool {
        matches!(self.state, TickerState::Ticking { .. })
    }

    /// Start ticking; the first frame is due at `now`. No-op when already ticking.
    pub fn attach(&mut self, now: f64) {
        if self.is_ticking() {
            return;
        }
        tracing::debug!(now, fps = self.fps.as_f64(), "ticker attached");
        self.state = TickerState::Ticking { next_due: now };
    }

    /// Stop ticking.
    pub fn detach(&mut self) {
        if self.is_ticking() {
            tracing::debug!("ticker detached");
        }
        self.state = TickerState::Idle;
    }

    /// Return `Some(now)` when a frame is due and schedule the following one.
    pub fn poll(&mut self, now: f64) -> Option<f64> {
        let TickerState::Ticking { next_due } = self.state else {
            return None;
        };
        if now < next_due {
            return None;
        }
        let period = self.fps.frame_duration_secs();
        let late_by = now - next_due;
        if late_by >= period {
            tracing::trace!(late_by, "ticker skipped frames");
        }
        self.state = TickerState::Ticking {
            next_due: now + period,
        };
        Some(now)
    }
}

impl Default for FrameTicker {
    fn default() -> Self {
        Self::new(Fps::FILM)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ticker.rs"]
mod tests;
