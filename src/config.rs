use std::{fs::File, io::BufReader, path::Path};

use crate::{
    effects::burst::{Burst, BurstConfig},
    foundation::core::{Fps, Point},
    foundation::error::{KeepsakeError, KeepsakeResult},
    foundation::rng::Lcg64,
    texture::{
        grain::{FilmGrain, FilmGrainOverlay},
        paper::PaperTexture,
    },
};

/// Effect settings shared by every generator.
///
/// Passed explicitly to whoever needs them; there is no process-wide instance.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct EffectSettings {
    /// Whether cards get the paper overlay.
    pub paper_enabled: bool,
    /// Paper overlay parameters.
    pub paper: PaperTexture,
    /// Film grain parameters.
    pub grain: FilmGrain,
    /// Burst parameters.
    pub burst: BurstConfig,
    /// Suppress animation: grain never ticks, bursts shrink to a single ring.
    pub reduce_motion: bool,
}

impl Default for EffectSettings {
    fn default() -> Self {
        Self {
            paper_enabled: true,
            paper: PaperTexture::default(),
            grain: FilmGrain::default(),
            burst: BurstConfig::default(),
            reduce_motion: false,
        }
    }
}

impl EffectSettings {
    /// Load and validate settings from a JSON file. Missing fields take defaults.
    pub fn from_path(path: &Path) -> KeepsakeResult<Self> {
        let f = File::open(path).map_err(|e| {
            KeepsakeError::io(format!("open settings '{}': {e}", path.display()))
        })?;
        let settings: Self = serde_json::from_reader(BufReader::new(f))
            .map_err(|e| KeepsakeError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        tracing::debug!(path = %path.display(), "loaded effect settings");
        Ok(settings)
    }

    /// Parse and validate settings from a JSON string.
    pub fn from_json_str(json: &str) -> KeepsakeResult<Self> {
        let settings: Self = serde_json::from_str(json)
            .map_err(|e| KeepsakeError::serde(format!("parse settings JSON: {e}")))?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject out-of-range knobs.
    pub fn validate(&self) -> KeepsakeResult<()> {
        if !(0.0..=1.0).contains(&self.paper.opacity) {
            return Err(KeepsakeError::validation(
                "paper opacity must be in [0, 1]",
            ));
        }
        if !(0.0..=1.0).contains(&self.grain.intensity) {
            return Err(KeepsakeError::validation(
                "grain intensity must be in [0, 1]",
            ));
        }
        Fps::new(self.grain.fps.num, self.grain.fps.den)?;
        self.burst.validate()
    }

    /// Grain overlay honoring `reduce_motion`.
    pub fn grain_overlay(&self) -> FilmGrainOverlay {
        FilmGrainOverlay::new(self.grain.clone()).with_motion(!self.reduce_motion)
    }

    /// Trigger a burst at `origin`, reduced to a single ring under `reduce_motion`.
    pub fn trigger_burst(&self, origin: Point, rng: &mut Lcg64) -> Burst {
        if self.reduce_motion {
            Burst::trigger_reduced(origin, &self.burst)
        } else {
            Burst::trigger(origin, &self.burst, rng)
        }
    }
}

#[cfg(test)]
#[path = "../tests/unit/config/settings.rs"]
mod tests;
