use std::f64::consts::TAU;
use std::ops::RangeInclusive;

use kurbo::Shape as _;

use crate::{
    animation::ease::Ease,
    foundation::core::{Affine, Color, Point, Rect, Vec2},
    foundation::error::{KeepsakeError, KeepsakeResult},
    foundation::rng::Lcg64,
    render::backend::{DrawBackend, Paint},
    shapes::{diamond::diamond_path, star::star_path},
};

const RING_COLOR: Color = Color::rgb(255, 236, 179);

/// Shape drawn for a particle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParticleKind {
    /// Filled circle.
    Circle = 0,
    /// Four-pointed star.
    Star = 1,
    /// Diamond.
    Diamond = 2,
}

impl ParticleKind {
    /// All kinds, in tag order.
    pub const ALL: [Self; 3] = [Self::Circle, Self::Star, Self::Diamond];

    /// Numeric tag in `0..3`.
    pub fn tag(self) -> u8 {
        self as u8
    }
}

/// One particle of a burst, fixed at trigger time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    /// Travel direction in degrees, `[0, 360)`.
    pub angle_deg: f64,
    /// Final radial distance from the origin.
    pub distance: f64,
    /// Diameter at full scale.
    pub size: f64,
    /// Seconds from start to fully faded.
    pub duration: f64,
    /// Seconds after the trigger before moving.
    pub delay: f64,
    /// Drawn shape.
    pub kind: ParticleKind,
    /// Color.
    pub color: Color,
}

/// One expanding ring of a burst.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ring {
    /// Seconds after the trigger before expanding.
    pub delay: f64,
    /// Radius when fully expanded.
    pub max_radius: f64,
    /// Seconds from start to fully expanded.
    pub duration: f64,
    /// Stroke width at start; thins while expanding.
    pub line_width: f64,
}

/// Parameters for [`Burst::trigger`].
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BurstConfig {
    /// Particles per burst.
    pub particle_count: usize,
    /// Rings per burst.
    pub ring_count: usize,
    /// Radial travel band.
    pub distance: RangeInclusive<f64>,
    /// Particle size band.
    pub size: RangeInclusive<f64>,
    /// Particle lifetime band (seconds).
    pub duration: RangeInclusive<f64>,
    /// Particle start delay band (seconds).
    pub delay: RangeInclusive<f64>,
    /// Radius of the first ring.
    pub ring_base_radius: f64,
    /// Radius added per subsequent ring; must be > 0.
    pub ring_spacing: f64,
    /// Delay added per subsequent ring; must be > 0.
    pub ring_delay_step: f64,
    /// Expansion time of each ring.
    pub ring_duration: f64,
    /// Particle travel curve.
    pub particle_ease: Ease,
    /// Ring expansion curve.
    pub ring_ease: Ease,
    /// Palette sampled uniformly for particle colors.
    pub palette: Vec<Color>,
}

impl Default for BurstConfig {
    fn default() -> Self {
        Self {
            particle_count: 60,
            ring_count: 4,
            distance: 80.0..=200.0,
            size: 4.0..=12.0,
            duration: 0.6..=1.2,
            delay: 0.0..=0.15,
            ring_base_radius: 60.0,
            ring_spacing: 40.0,
            ring_delay_step: 0.1,
            ring_duration: 0.8,
            particle_ease: Ease::OutCubic,
            ring_ease: Ease::OutQuad,
            palette: vec![
                Color::rgb(255, 214, 102),
                Color::rgb(255, 159, 67),
                Color::rgb(238, 82, 83),
                Color::rgb(255, 240, 200),
            ],
        }
    }
}

impl BurstConfig {
    /// Reject inverted bands and non-cascading ring parameters.
    pub fn validate(&self) -> KeepsakeResult<()> {
        for (name, band) in [
            ("distance", &self.distance),
            ("size", &self.size),
            ("duration", &self.duration),
            ("delay", &self.delay),
        ] {
            if band.start() > band.end() {
                return Err(KeepsakeError::validation(format!(
                    "burst {name} band is inverted"
                )));
            }
            if *band.start() < 0.0 {
                return Err(KeepsakeError::validation(format!(
                    "burst {name} band must be non-negative"
                )));
            }
        }
        if self.ring_spacing <= 0.0 || self.ring_delay_step <= 0.0 {
            return Err(KeepsakeError::validation(
                "burst ring spacing and delay step must be > 0",
            ));
        }
        if self.ring_duration <= 0.0 {
            return Err(KeepsakeError::validation(
                "burst ring duration must be > 0",
            ));
        }
        Ok(())
    }
}

/// Animated state of one particle at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleState {
    /// Current center.
    pub position: Point,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Scale factor applied to `size`.
    pub scale: f64,
    /// Rotation in radians.
    pub rotation: f64,
}

/// Animated state of one ring at a point in time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RingState {
    /// Current radius.
    pub radius: f64,
    /// Opacity in `[0, 1]`.
    pub opacity: f32,
    /// Current stroke width.
    pub line_width: f64,
}

/// All animated states of a burst at one instant.
#[derive(Clone, Debug, PartialEq)]
pub struct BurstFrame {
    /// Per-particle states, same order as [`Burst::particles`].
    pub particles: Vec<ParticleState>,
    /// Per-ring states, same order as [`Burst::rings`].
    pub rings: Vec<RingState>,
}

/// A single burst invocation: particles and rings fanning out from `origin`.
#[derive(Clone, Debug)]
pub struct Burst {
    origin: Point,
    particles: Vec<Particle>,
    rings: Vec<Ring>,
    particle_ease: Ease,
    ring_ease: Ease,
}

fn sample_band(rng: &mut Lcg64, band: &RangeInclusive<f64>) -> f64 {
    rng.range(*band.start(), *band.end())
}

fn progress(t: f64, delay: f64, duration: f64) -> f64 {
    if t < delay {
        return 0.0;
    }
    if duration <= 0.0 {
        return 1.0;
    }
    ((t - delay) / duration).clamp(0.0, 1.0)
}

impl Burst {
    /// Generate a burst. Particle and ring counts are exactly those of `config`.
    #[tracing::instrument(
        skip(config, rng),
        fields(particles = config.particle_count, rings = config.ring_count)
    )]
    pub fn trigger(origin: Point, config: &BurstConfig, rng: &mut Lcg64) -> Self {
        let particles = (0..config.particle_count)
            .map(|_| {
                let angle_deg = (rng.next_f64() * 360.0) % 360.0;
                let distance = sample_band(rng, &config.distance);
                let size = sample_band(rng, &config.size);
                let duration = sample_band(rng, &config.duration);
                let delay = sample_band(rng, &config.delay);
                let kind = ParticleKind::ALL[rng.index(ParticleKind::ALL.len())];
                let color = if config.palette.is_empty() {
                    Color::WHITE
                } else {
                    config.palette[rng.index(config.palette.len())]
                };
                Particle {
                    angle_deg,
                    distance,
                    size,
                    duration,
                    delay,
                    kind,
                    color,
                }
            })
            .collect();

        let rings = (0..config.ring_count)
            .map(|i| {
                let i = i as f64;
                Ring {
                    delay: i * config.ring_delay_step,
                    max_radius: config.ring_base_radius + i * config.ring_spacing,
                    duration: config.ring_duration,
                    line_width: 3.0,
                }
            })
            .collect();

        Self {
            origin,
            particles,
            rings,
            particle_ease: config.particle_ease,
            ring_ease: config.ring_ease,
        }
    }

    /// Reduced-motion variant: no particles and only the first ring.
    pub fn trigger_reduced(origin: Point, config: &BurstConfig) -> Self {
        let reduced = BurstConfig {
            particle_count: 0,
            ring_count: config.ring_count.min(1),
            ..config.clone()
        };
        Self::trigger(origin, &reduced, &mut Lcg64::new(0))
    }

    /// Burst origin.
    pub fn origin(&self) -> Point {
        self.origin
    }

    /// Particle descriptors.
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Ring descriptors, in cascade order.
    pub fn rings(&self) -> &[Ring] {
        &self.rings
    }

    /// Seconds until every particle and ring has finished.
    pub fn total_duration(&self) -> f64 {
        let p = self.particles.iter().map(|p| p.delay + p.duration);
        let r = self.rings.iter().map(|r| r.delay + r.duration);
        p.chain(r).fold(0.0, f64::max)
    }

    /// `true` once `t` seconds have passed the last animation.
    pub fn is_finished(&self, t: f64) -> bool {
        t >= self.total_duration()
    }

    /// Animated state `t` seconds after the trigger.
    pub fn sample(&self, t: f64) -> BurstFrame {
        let particles = self
            .particles
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let started = t >= p.delay;
                let k = progress(t, p.delay, p.duration);
                let travel = self.particle_ease.apply(k) * p.distance;
                let dir = Vec2::from_angle(p.angle_deg.to_radians());
                let spin = if i % 2 == 0 { 1.0 } else { -1.0 };
                ParticleState {
                    position: self.origin + dir * travel,
                    opacity: if started { (1.0 - k) as f32 } else { 0.0 },
                    scale: 1.0 - 0.5 * k,
                    rotation: spin * k * TAU,
                }
            })
            .collect();

        let rings = self
            .rings
            .iter()
            .map(|r| {
                let started = t >= r.delay;
                let k = progress(t, r.delay, r.duration);
                RingState {
                    radius: self.ring_ease.apply(k) * r.max_radius,
                    opacity: if started {
                        (0.8 * (1.0 - k)) as f32
                    } else {
                        0.0
                    },
                    line_width: r.line_width * (1.0 - 0.7 * k),
                }
            })
            .collect();

        BurstFrame { particles, rings }
    }

    /// Draw the burst as it looks `t` seconds after the trigger.
    ///
    /// Invisible elements (not started, or fully faded) are skipped.
    pub fn draw_at(&self, backend: &mut dyn DrawBackend, t: f64) {
        let frame = self.sample(t);

        for state in &frame.rings {
            if state.opacity <= 0.0 || state.radius <= 0.0 {
                continue;
            }
            let path = kurbo::Circle::new(self.origin, state.radius).to_path(0.1);
            let color = RING_COLOR.with_alpha(state.opacity);
            backend.stroke_path(&path, state.line_width, &Paint::Solid(color));
        }

        for (p, state) in self.particles.iter().zip(&frame.particles) {
            if state.opacity <= 0.0 {
                continue;
            }
            let paint = Paint::Solid(p.color.with_alpha(state.opacity));
            let half = p.size * state.scale / 2.0;
            match p.kind {
                ParticleKind::Circle => backend.fill_circle(state.position, half, &paint),
                ParticleKind::Star | ParticleKind::Diamond => {
                    let local = Rect::new(-half, -half, half, half);
                    let shape = match p.kind {
                        ParticleKind::Star => star_path(local, 4),
                        _ => diamond_path(local),
                    };
                    let xf = Affine::translate(state.position.to_vec2())
                        * Affine::rotate(state.rotation);
                    backend.fill_path(&(xf * shape), &paint);
                }
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/effects/burst.rs"]
mod tests;
