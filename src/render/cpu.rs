use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Color, Point, Rect},
    foundation::error::{KeepsakeError, KeepsakeResult},
    render::backend::{BlendMode, DrawBackend, FrameRGBA, Paint},
};

/// Tolerance used when flattening circles into Bézier paths.
const CIRCLE_TOLERANCE: f64 = 0.05;

/// CPU raster backend powered by `vello_cpu`.
pub struct CpuCanvas {
    width: u16,
    height: u16,
    ctx: vello_cpu::RenderContext,
    // Native layers pushed per logical layer, so `pop_layer` unwinds them together.
    layers: Vec<u8>,
}

impl CpuCanvas {
    /// Create a canvas cleared to `clear`.
    ///
    /// Fails when either dimension is zero or exceeds `u16`.
    pub fn new(width: u32, height: u32, clear: Color) -> KeepsakeResult<Self> {
        let width: u16 = width
            .try_into()
            .map_err(|_| KeepsakeError::render("canvas width exceeds u16"))?;
        let height: u16 = height
            .try_into()
            .map_err(|_| KeepsakeError::render("canvas height exceeds u16"))?;
        if width == 0 || height == 0 {
            return Err(KeepsakeError::validation(
                "canvas width and height must be > 0",
            ));
        }

        let mut canvas = Self {
            width,
            height,
            ctx: vello_cpu::RenderContext::new(width, height),
            layers: Vec::new(),
        };
        canvas.fill_rect(
            Rect::new(0.0, 0.0, f64::from(width), f64::from(height)),
            &Paint::Solid(clear),
        );
        Ok(canvas)
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u32 {
        u32::from(self.width)
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u32 {
        u32::from(self.height)
    }

    /// Rasterize everything drawn so far into premultiplied RGBA8.
    pub fn finish(mut self) -> FrameRGBA {
        while !self.layers.is_empty() {
            self.pop_layer();
        }
        self.ctx.flush();
        let mut pixmap = vello_cpu::Pixmap::new(self.width, self.height);
        self.ctx.render_to_pixmap(&mut pixmap);
        FrameRGBA {
            width: u32::from(self.width),
            height: u32::from(self.height),
            data: pixmap.data_as_u8_slice().to_vec(),
            premultiplied: true,
        }
    }

    fn prepare(&mut self, paint: &Paint) {
        self.ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        self.ctx
            .set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        match paint {
            Paint::Solid(c) => self.ctx.set_paint(color_to_cpu(*c)),
            Paint::LinearGradient {
                start,
                end,
                from,
                to,
            } => {
                let g = vello_cpu::peniko::Gradient::new_linear(
                    point_to_cpu(*start),
                    point_to_cpu(*end),
                )
                .with_stops([color_to_cpu(*from), color_to_cpu(*to)]);
                self.ctx.set_paint(g);
            }
            Paint::RadialGradient {
                center,
                radius,
                inner,
                outer,
            } => {
                let g = vello_cpu::peniko::Gradient::new_radial(
                    point_to_cpu(*center),
                    radius.max(f64::EPSILON) as f32,
                )
                .with_stops([color_to_cpu(*inner), color_to_cpu(*outer)]);
                self.ctx.set_paint(g);
            }
        }
    }
}

impl DrawBackend for CpuCanvas {
    fn push_layer(&mut self, blend: BlendMode, opacity: f32) {
        let mut pushed = 0u8;
        if blend != BlendMode::Normal {
            self.ctx.push_blend_layer(blend_to_cpu(blend));
            pushed += 1;
        }
        let opacity = opacity.clamp(0.0, 1.0);
        if opacity < 1.0 {
            self.ctx.push_opacity_layer(opacity);
            pushed += 1;
        }
        self.layers.push(pushed);
    }

    fn pop_layer(&mut self) {
        let Some(pushed) = self.layers.pop() else {
            tracing::warn!("pop_layer without matching push_layer");
            return;
        };
        for _ in 0..pushed {
            self.ctx.pop_layer();
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f64, paint: &Paint) {
        if radius <= 0.0 {
            return;
        }
        let path = kurbo::Circle::new(center, radius).to_path(CIRCLE_TOLERANCE);
        self.fill_path(&path, paint);
    }

    fn stroke_line(&mut self, from: Point, to: Point, width: f64, paint: &Paint) {
        let mut path = BezPath::new();
        path.move_to(from);
        path.line_to(to);
        self.stroke_path(&path, width, paint);
    }

    fn fill_path(&mut self, path: &BezPath, paint: &Paint) {
        self.prepare(paint);
        self.ctx.fill_path(&bezpath_to_cpu(path));
    }

    fn stroke_path(&mut self, path: &BezPath, width: f64, paint: &Paint) {
        if width <= 0.0 {
            return;
        }
        self.prepare(paint);
        self.ctx.set_stroke(vello_cpu::kurbo::Stroke::new(width));
        self.ctx.stroke_path(&bezpath_to_cpu(path));
    }

    fn fill_rect(&mut self, rect: Rect, paint: &Paint) {
        self.prepare(paint);
        self.ctx.fill_rect(&vello_cpu::kurbo::Rect::new(
            rect.x0, rect.y0, rect.x1, rect.y1,
        ));
    }
}

fn blend_to_cpu(blend: BlendMode) -> vello_cpu::peniko::BlendMode {
    use vello_cpu::peniko::{Compose, Mix};

    let mix = match blend {
        BlendMode::Normal => Mix::Normal,
        BlendMode::Multiply => Mix::Multiply,
        BlendMode::Overlay => Mix::Overlay,
        BlendMode::Screen => Mix::Screen,
    };
    vello_cpu::peniko::BlendMode::new(mix, Compose::SrcOver)
}

fn color_to_cpu(c: Color) -> vello_cpu::peniko::Color {
    let [r, g, b, a] = c.to_rgba8();
    vello_cpu::peniko::Color::from_rgba8(r, g, b, a)
}

fn point_to_cpu(p: Point) -> vello_cpu::kurbo::Point {
    vello_cpu::kurbo::Point::new(p.x, p.y)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(point_to_cpu(p)),
            PathEl::LineTo(p) => out.line_to(point_to_cpu(p)),
            PathEl::QuadTo(p1, p2) => out.quad_to(point_to_cpu(p1), point_to_cpu(p2)),
            PathEl::CurveTo(p1, p2, p3) => {
                out.curve_to(point_to_cpu(p1), point_to_cpu(p2), point_to_cpu(p3));
            }
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
