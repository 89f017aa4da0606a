//! Keepsake is a deterministic procedural-effects library for decorative journal cards.
//!
//! Everything is driven by a seeded [`Lcg64`] and drawn through the [`DrawBackend`] trait:
//!
//! - Texture overlays: [`PaperTexture`] (static) and [`FilmGrain`] (redrawn per frame)
//! - Pure shape geometry: stars, flames, diamonds, wax seals and barcodes
//! - A [`Burst`] of particles and rings with closed-form kinematics
//! - Whole cards via [`render_artifact`], rasterized with [`CpuCanvas`]
#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub(crate) mod animation;
pub(crate) mod artifact;
pub(crate) mod config;
pub(crate) mod effects;
mod foundation;
/// Drawing surfaces: the backend trait, a recorder and a CPU rasterizer.
pub mod render;
pub(crate) mod shapes;
pub(crate) mod texture;

pub use crate::foundation::core::{
    Affine, BezPath, Color, Fps, Point, Rect, Size, Vec2, is_degenerate,
};
pub use crate::foundation::error::{KeepsakeError, KeepsakeResult};
pub use crate::foundation::rng::Lcg64;

pub use crate::animation::ease::Ease;
pub use crate::animation::ticker::{FrameTicker, TickerState};
pub use crate::artifact::{
    ArtifactCtx, ArtifactRenderer, ArtifactStyle, record_artifact, render_artifact,
};
pub use crate::config::EffectSettings;
pub use crate::effects::burst::{
    Burst, BurstConfig, BurstFrame, Particle, ParticleKind, ParticleState, Ring, RingState,
};
pub use crate::render::backend::{BlendMode, DrawBackend, FrameRGBA, Paint};
pub use crate::render::cpu::CpuCanvas;
pub use crate::render::record::{DrawList, DrawOp};
pub use crate::shapes::barcode::{barcode_bars, draw_barcode};
pub use crate::shapes::diamond::diamond_path;
pub use crate::shapes::flame::{flame_core_path, flame_path};
pub use crate::shapes::seal::{SealGeometry, WaxSeal};
pub use crate::shapes::star::{STAR_INNER_RATIO, star_path, star_vertices};
pub use crate::texture::grain::{FilmGrain, FilmGrainOverlay};
pub use crate::texture::paper::PaperTexture;
