use crate::foundation::core::{BezPath, Color, Point, Rect};

/// A rendered frame as RGBA8 pixels.
#[derive(Clone, Debug)]
pub struct FrameRGBA {
    /// Frame width in pixels.
    pub width: u32,
    /// Frame height in pixels.
    pub height: u32,
    /// RGBA8 bytes, tightly packed, row-major.
    pub data: Vec<u8>,
    /// Whether the `data` is premultiplied alpha.
    pub premultiplied: bool,
}

/// Layer composition mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlendMode {
    /// Source-over.
    #[default]
    Normal,
    /// Darkens; used by paper texture.
    Multiply,
    /// Contrast-preserving; used by film grain.
    Overlay,
    /// Lightens.
    Screen,
}

/// Fill or stroke paint.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Paint {
    /// Single color.
    Solid(Color),
    /// Two-stop gradient along `start -> end`.
    LinearGradient {
        /// Gradient start point.
        start: Point,
        /// Gradient end point.
        end: Point,
        /// Color at `start`.
        from: Color,
        /// Color at `end`.
        to: Color,
    },
    /// Two-stop gradient from `center` out to `radius`.
    RadialGradient {
        /// Gradient center.
        center: Point,
        /// Outer radius.
        radius: f64,
        /// Color at the center.
        inner: Color,
        /// Color at the radius.
        outer: Color,
    },
}

impl Paint {
    /// Largest alpha any pixel of this paint can carry.
    pub fn max_alpha(&self) -> f32 {
        match self {
            Self::Solid(c) => c.a,
            Self::LinearGradient { from, to, .. } => from.a.max(to.a),
            Self::RadialGradient { inner, outer, .. } => inner.a.max(outer.a),
        }
    }
}

impl From<Color> for Paint {
    fn from(c: Color) -> Self {
        Self::Solid(c)
    }
}

/// Immediate-mode drawing surface targeted by every generator.
///
/// Operations are infallible: the generators are total over their inputs, and
/// a backend that cannot honor an op (e.g. a degenerate path) simply skips it.
pub trait DrawBackend {
    /// Open a composition layer. Every push must be matched by [`DrawBackend::pop_layer`].
    fn push_layer(&mut self, blend: BlendMode, opacity: f32);

    /// Close the most recent layer.
    fn pop_layer(&mut self);

    /// Fill a circle.
    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint);

    /// Stroke a straight segment.
    fn stroke_line(&mut self, from: Point, to: Point, width: f64, paint: &Paint);

    /// Fill a closed path (non-zero winding).
    fn fill_path(&mut self, path: &BezPath, paint: &Paint);

    /// Stroke a path outline.
    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: &Paint);

    /// Fill an axis-aligned rectangle.
    fn fill_rect(&mut self, rect: Rect, paint: &Paint);
}
