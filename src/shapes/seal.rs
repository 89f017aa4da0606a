use std::f64::consts::{FRAC_PI_2, TAU};

use kurbo::Shape as _;

use crate::{
    foundation::core::{BezPath, Color, Point, Rect},
    render::backend::{DrawBackend, Paint},
    shapes::star::star_path,
};

const RIM_LOBES: usize = 18;
const RIM_SAMPLES: usize = 144;
const RIM_MODULATION: f64 = 0.06;
const FACE_RATIO: f64 = 0.82;
const RING_RATIO: f64 = 0.64;
const EMBLEM_RATIO: f64 = 0.4;

/// Vector geometry of a wax seal centered in its bounding box.
#[derive(Clone, Debug)]
pub struct SealGeometry {
    /// Seal center.
    pub center: Point,
    /// Outer radius (half the shorter box side).
    pub radius: f64,
    /// Scalloped outline of the poured wax.
    pub rim: BezPath,
    /// Flat stamped face.
    pub face: BezPath,
    /// Embossed ring inside the face.
    pub ring: BezPath,
    /// Center of the specular highlight.
    pub highlight_center: Point,
    /// Radius of the specular highlight.
    pub highlight_radius: f64,
}

/// Circular wax-stamp ornament.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WaxSeal {
    /// Base wax color.
    pub color: Color,
    /// Points of the star stamped in the middle; `None` for a plain face.
    pub emblem_points: Option<usize>,
}

impl Default for WaxSeal {
    fn default() -> Self {
        Self {
            color: Color::rgb(142, 27, 36),
            emblem_points: Some(5),
        }
    }
}

impl WaxSeal {
    /// Compute seal geometry for `rect`. Pure; no randomness.
    pub fn geometry(rect: Rect) -> SealGeometry {
        let r = rect.abs();
        let center = r.center();
        let radius = r.width().min(r.height()) / 2.0;

        let mut rim = BezPath::new();
        for i in 0..RIM_SAMPLES {
            // Phase 0 is the top of the seal and sits on a lobe peak.
            let phase = i as f64 / RIM_SAMPLES as f64 * TAU;
            let theta = phase - FRAC_PI_2;
            let k = 1.0 - RIM_MODULATION + RIM_MODULATION * (RIM_LOBES as f64 * phase).cos();
            let p = Point::new(
                center.x + radius * k * theta.cos(),
                center.y + radius * k * theta.sin(),
            );
            if i == 0 {
                rim.move_to(p);
            } else {
                rim.line_to(p);
            }
        }
        rim.close_path();

        SealGeometry {
            center,
            radius,
            rim,
            face: kurbo::Circle::new(center, radius * FACE_RATIO).to_path(0.1),
            ring: kurbo::Circle::new(center, radius * RING_RATIO).to_path(0.1),
            highlight_center: Point::new(center.x - 0.3 * radius, center.y - 0.3 * radius),
            highlight_radius: 0.25 * radius,
        }
    }

    /// Draw the seal into `rect`. Degenerate boxes draw nothing.
    pub fn draw(&self, backend: &mut dyn DrawBackend, rect: Rect) {
        let g = Self::geometry(rect);
        if g.radius <= 0.0 {
            return;
        }
        let light = Point::new(g.center.x - 0.2 * g.radius, g.center.y - 0.25 * g.radius);

        backend.fill_path(
            &g.rim,
            &Paint::RadialGradient {
                center: light,
                radius: g.radius * 1.2,
                inner: self.color.lerp(Color::WHITE, 0.25),
                outer: self.color.lerp(Color::BLACK, 0.35),
            },
        );
        backend.fill_path(
            &g.face,
            &Paint::RadialGradient {
                center: g.center,
                radius: g.radius * FACE_RATIO,
                inner: self.color,
                outer: self.color.lerp(Color::BLACK, 0.2),
            },
        );
        backend.stroke_path(
            &g.ring,
            0.04 * g.radius,
            &Paint::Solid(self.color.lerp(Color::BLACK, 0.3).with_alpha(0.6)),
        );

        if let Some(points) = self.emblem_points {
            let e = g.radius * EMBLEM_RATIO;
            let emblem = Rect::new(g.center.x - e, g.center.y - e, g.center.x + e, g.center.y + e);
            backend.fill_path(
                &star_path(emblem, points),
                &Paint::Solid(self.color.lerp(Color::BLACK, 0.4).with_alpha(0.8)),
            );
        }

        backend.fill_circle(
            g.highlight_center,
            g.highlight_radius,
            &Paint::RadialGradient {
                center: g.highlight_center,
                radius: g.highlight_radius,
                inner: Color::WHITE.with_alpha(0.35),
                outer: Color::WHITE.with_alpha(0.0),
            },
        );
    }
}

#[cfg(test)]
#[path = "../../tests/unit/shapes/seal.rs"]
mod tests;
