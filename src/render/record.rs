use crate::{
    foundation::core::{BezPath, Point, Rect},
    render::backend::{BlendMode, DrawBackend, Paint},
};

/// One recorded drawing call.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum DrawOp {
    /// [`DrawBackend::push_layer`].
    PushLayer {
        /// Layer blend mode.
        blend: BlendMode,
        /// Layer opacity.
        opacity: f32,
    },
    /// [`DrawBackend::pop_layer`].
    PopLayer,
    /// [`DrawBackend::fill_circle`].
    FillCircle {
        /// Circle center.
        center: Point,
        /// Circle radius.
        radius: f64,
        /// Fill paint.
        paint: Paint,
    },
    /// [`DrawBackend::stroke_line`].
    StrokeLine {
        /// Segment start.
        from: Point,
        /// Segment end.
        to: Point,
        /// Stroke width.
        width: f64,
        /// Stroke paint.
        paint: Paint,
    },
    /// [`DrawBackend::fill_path`].
    FillPath {
        /// Closed outline.
        path: BezPath,
        /// Fill paint.
        paint: Paint,
    },
    /// [`DrawBackend::stroke_path`].
    StrokePath {
        /// Outline.
        path: BezPath,
        /// Stroke width.
        width: f64,
        /// Stroke paint.
        paint: Paint,
    },
    /// [`DrawBackend::fill_rect`].
    FillRect {
        /// Rectangle.
        rect: Rect,
        /// Fill paint.
        paint: Paint,
    },
}

impl DrawOp {
    /// Paint used by a drawing op; `None` for layer ops.
    pub fn paint(&self) -> Option<&Paint> {
        match self {
            Self::PushLayer { .. } | Self::PopLayer => None,
            Self::FillCircle { paint, .. }
            | Self::StrokeLine { paint, .. }
            | Self::FillPath { paint, .. }
            | Self::StrokePath { paint, .. }
            | Self::FillRect { paint, .. } => Some(paint),
        }
    }

    /// `true` for ops that put pixels down.
    pub fn is_draw(&self) -> bool {
        self.paint().is_some()
    }
}

/// Recording backend.
///
/// Generators can draw into a `DrawList` once and replay it on every frame,
/// and tests use it to count calls and inspect composited alpha.
#[derive(Clone, Debug, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DrawList {
    ops: Vec<DrawOp>,
}

impl DrawList {
    /// Empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Recorded ops in call order.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// `true` when nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Number of pixel-producing calls (layer pushes/pops excluded).
    pub fn draw_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_draw()).count()
    }

    /// Number of layers opened.
    pub fn layer_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::PushLayer { .. }))
            .count()
    }

    /// Highest effective alpha of any draw call, i.e. paint alpha times the
    /// product of enclosing layer opacities. `0.0` for an empty list.
    pub fn max_effective_alpha(&self) -> f32 {
        let mut stack: Vec<f32> = Vec::new();
        let mut current = 1.0f32;
        let mut max = 0.0f32;
        for op in &self.ops {
            match op {
                DrawOp::PushLayer { opacity, .. } => {
                    stack.push(current);
                    current *= opacity.clamp(0.0, 1.0);
                }
                DrawOp::PopLayer => {
                    current = stack.pop().unwrap_or(1.0);
                }
                _ => {
                    if let Some(paint) = op.paint() {
                        max = max.max(paint.max_alpha() * current);
                    }
                }
            }
        }
        max
    }

    /// Re-issue every recorded call on `backend`.
    pub fn replay(&self, backend: &mut dyn DrawBackend) {
        for op in &self.ops {
            match op {
                DrawOp::PushLayer { blend, opacity } => backend.push_layer(*blend, *opacity),
                DrawOp::PopLayer => backend.pop_layer(),
                DrawOp::FillCircle {
                    center,
                    radius,
                    paint,
                } => backend.fill_circle(*center, *radius, paint),
                DrawOp::StrokeLine {
                    from,
                    to,
                    width,
                    paint,
                } => backend.stroke_line(*from, *to, *width, paint),
                DrawOp::FillPath { path, paint } => backend.fill_path(path, paint),
                DrawOp::StrokePath { path, width, paint } => {
                    backend.stroke_path(path, *width, paint)
                }
                DrawOp::FillRect { rect, paint } => backend.fill_rect(*rect, paint),
            }
        }
    }
}

impl DrawBackend for DrawList {
    fn push_layer(&mut self, blend: BlendMode, opacity: f32) {
        self.ops.push(DrawOp::PushLayer { blend, opacity });
    }

    fn pop_layer(&mut self) {
        self.ops.push(DrawOp::PopLayer);
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        self.ops.push(DrawOp::FillCircle {
            center,
            radius,
            paint: paint.clone(),
        });
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, paint: &Paint) {
        self.ops.push(DrawOp::StrokeLine {
            from,
            to,
            width,
            paint: paint.clone(),
        });
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        self.ops.push(DrawOp::FillPath {
            path: path.clone(),
            paint: paint.clone(),
        });
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: &Paint) {
        self.ops.push(DrawOp::StrokePath {
            path: path.clone(),
            width,
            paint: paint.clone(),
        });
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.ops.push(DrawOp::FillRect {
            rect,
            paint: paint.clone(),
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/record.rs"]
mod tests;
