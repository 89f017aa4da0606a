use std::{fmt, str::FromStr};

use kurbo::Shape as _;

use crate::{
    config::EffectSettings,
    foundation::core::{BezPath, Color, Point, Rect, Size, is_degenerate},
    foundation::error::KeepsakeError,
    foundation::rng::Lcg64,
    render::backend::{DrawBackend, Paint},
    render::record::DrawList,
    shapes::{
        barcode::draw_barcode,
        diamond::diamond_path,
        flame::{flame_core_path, flame_path},
        seal::WaxSeal,
        star::star_path,
    },
};

/// Card layouts a keepsake can be rendered as.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ArtifactStyle {
    /// Instant photo with a caption strip.
    Polaroid,
    /// Kraft envelope closed with a wax seal.
    #[serde(alias = "envelope")]
    WaxEnvelope,
    /// Strip of film negative with sprocket holes and grain.
    FilmNegative,
    /// Record sleeve with a vinyl disc.
    VinylSleeve,
    /// Ticket with a tear-off stub and barcode.
    BoardingPass,
    /// Lit candle in a warm glow.
    CandleNote,
    /// Gold star charm on a night sky.
    StarCharm,
}

/// Inputs shared by every artifact renderer.
#[derive(Clone, Copy, Debug)]
pub struct ArtifactCtx<'a> {
    /// Card size; never degenerate when a renderer is called.
    pub size: Size,
    /// Effect settings in force.
    pub settings: &'a EffectSettings,
    /// Seed for every randomized decoration of this card.
    pub seed: u64,
}

/// Render function registered for an [`ArtifactStyle`].
pub type ArtifactRenderer = fn(&ArtifactCtx<'_>, &mut dyn DrawBackend);

impl ArtifactStyle {
    /// Every style, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::Polaroid,
        Self::WaxEnvelope,
        Self::FilmNegative,
        Self::VinylSleeve,
        Self::BoardingPass,
        Self::CandleNote,
        Self::StarCharm,
    ];

    /// Canonical snake_case name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Polaroid => "polaroid",
            Self::WaxEnvelope => "wax_envelope",
            Self::FilmNegative => "film_negative",
            Self::VinylSleeve => "vinyl_sleeve",
            Self::BoardingPass => "boarding_pass",
            Self::CandleNote => "candle_note",
            Self::StarCharm => "star_charm",
        }
    }

    /// Render function for this style.
    pub fn renderer(self) -> ArtifactRenderer {
        match self {
            Self::Polaroid => draw_polaroid,
            Self::WaxEnvelope => draw_wax_envelope,
            Self::FilmNegative => draw_film_negative,
            Self::VinylSleeve => draw_vinyl_sleeve,
            Self::BoardingPass => draw_boarding_pass,
            Self::CandleNote => draw_candle_note,
            Self::StarCharm => draw_star_charm,
        }
    }
}

impl fmt::Display for ArtifactStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ArtifactStyle {
    type Err = KeepsakeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase().replace([' ', '-'], "_");
        if key == "envelope" {
            return Ok(Self::WaxEnvelope);
        }
        Self::ALL
            .into_iter()
            .find(|style| style.name() == key)
            .ok_or_else(|| KeepsakeError::validation(format!("unknown artifact style '{s}'")))
    }
}

/// Draw a full card: base, style decorations, then the paper overlay when enabled.
///
/// Degenerate sizes draw nothing.
#[tracing::instrument(skip(settings, backend))]
pub fn render_artifact(
    style: ArtifactStyle,
    size: Size,
    settings: &EffectSettings,
    seed: u64,
    backend: &mut dyn DrawBackend,
) {
    if is_degenerate(size) {
        tracing::debug!("artifact skipped for degenerate surface");
        return;
    }
    let ctx = ArtifactCtx {
        size,
        settings,
        seed,
    };
    (style.renderer())(&ctx, backend);
    if settings.paper_enabled {
        settings.paper.draw(backend, size, &mut Lcg64::new(seed));
    }
}

/// [`render_artifact`] into a fresh [`DrawList`].
pub fn record_artifact(
    style: ArtifactStyle,
    size: Size,
    settings: &EffectSettings,
    seed: u64,
) -> DrawList {
    let mut list = DrawList::new();
    render_artifact(style, size, settings, seed, &mut list);
    list
}

fn card_base(backend: &mut dyn DrawBackend, size: Size, top: Color, bottom: Color) {
    let paint = Paint::LinearGradient {
        start: Point::ZERO,
        end: Point::new(0.0, size.height),
        from: top,
        to: bottom,
    };
    backend.fill_rect(size.to_rect(), &paint);
}

fn draw_polaroid(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(250, 247, 240),
        Color::rgb(236, 230, 218),
    );

    let m = w * 0.07;
    let photo = Rect::new(m, m, w - m, h * 0.75);
    backend.fill_rect(
        photo,
        &Paint::LinearGradient {
            start: Point::new(photo.x0, photo.y0),
            end: Point::new(photo.x1, photo.y1),
            from: Color::rgb(64, 84, 110),
            to: Color::rgb(214, 160, 110),
        },
    );
    let sun = Point::new(
        photo.x0 + photo.width() * 0.7,
        photo.y0 + photo.height() * 0.3,
    );
    backend.fill_circle(
        sun,
        photo.width() * 0.08,
        &Paint::Solid(Color::rgb(255, 236, 179).with_alpha(0.85)),
    );

    let ink = Paint::Solid(Color::rgb(60, 52, 44).with_alpha(0.6));
    for i in 0..2u32 {
        let i = f64::from(i);
        let y = h * (0.82 + 0.05 * i);
        backend.stroke_line(
            Point::new(m * 1.5, y),
            Point::new(w - m * 1.5 - w * 0.2 * i, y),
            1.0,
            &ink,
        );
    }
}

fn draw_wax_envelope(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(222, 196, 158),
        Color::rgb(201, 172, 132),
    );

    let fold = Paint::Solid(Color::rgb(120, 92, 60).with_alpha(0.35));
    let bottom_tip = Point::new(w / 2.0, h * 0.6);
    backend.stroke_line(Point::new(0.0, h), bottom_tip, 1.0, &fold);
    backend.stroke_line(Point::new(w, h), bottom_tip, 1.0, &fold);

    let tip = Point::new(w / 2.0, h * 0.45);
    let mut flap = BezPath::new();
    flap.move_to(Point::ZERO);
    flap.line_to(Point::new(w, 0.0));
    flap.line_to(tip);
    flap.close_path();
    backend.fill_path(
        &flap,
        &Paint::LinearGradient {
            start: Point::ZERO,
            end: tip,
            from: Color::rgb(214, 186, 146),
            to: Color::rgb(188, 158, 118),
        },
    );
    backend.stroke_path(&flap, 1.0, &fold);

    let r = w.min(h) * 0.14;
    WaxSeal::default().draw(backend, Rect::from_center_size(tip, (2.0 * r, 2.0 * r)));
}

fn draw_film_negative(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(38, 30, 26),
        Color::rgb(20, 17, 15),
    );

    let hole = Paint::Solid(Color::rgb(240, 228, 205).with_alpha(0.9));
    let hole_w = w * 0.06;
    let hole_h = hole_w * 1.4;
    let holes = ((h / (hole_h * 2.0)).floor() as usize).max(1);
    let pitch = h / holes as f64;
    for i in 0..holes {
        let y = (i as f64 + 0.5) * pitch - hole_h / 2.0;
        for x in [w * 0.03, w * 0.97 - hole_w] {
            backend.fill_rect(Rect::new(x, y, x + hole_w, y + hole_h), &hole);
        }
    }

    let (x0, x1) = (w * 0.15, w * 0.85);
    let frame_h = h * 0.28;
    let gap = (h - 3.0 * frame_h) / 4.0;
    for i in 0..3u32 {
        let y = gap + f64::from(i) * (frame_h + gap);
        let frame = Rect::new(x0, y, x1, y + frame_h);
        backend.fill_rect(
            frame,
            &Paint::LinearGradient {
                start: Point::new(frame.x0, frame.y0),
                end: Point::new(frame.x1, frame.y1),
                from: Color::rgb(196, 98, 42),
                to: Color::rgb(120, 54, 28),
            },
        );
    }

    ctx.settings
        .grain
        .draw_at(backend, ctx.size, ctx.seed as f64 / 1000.0);
}

fn draw_vinyl_sleeve(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(244, 238, 226),
        Color::rgb(226, 216, 198),
    );

    let m = w * 0.08;
    let side = (w - 2.0 * m).min(h - 2.0 * m).max(0.0);
    let sleeve = Rect::new(m, m, m + side, m + side);
    backend.fill_rect(sleeve, &Paint::Solid(Color::rgb(52, 92, 112)));

    let center = sleeve.center();
    let r = side * 0.42;
    backend.fill_circle(center, r, &Paint::Solid(Color::rgb(18, 18, 20)));
    let groove = Paint::Solid(Color::rgb(140, 140, 150).with_alpha(0.25));
    for i in 1..=6u32 {
        let gr = r * (0.5 + 0.07 * f64::from(i));
        let path = kurbo::Circle::new(center, gr).to_path(0.1);
        backend.stroke_path(&path, 0.6, &groove);
    }
    backend.fill_circle(
        center,
        r * 0.3,
        &Paint::RadialGradient {
            center,
            radius: r * 0.3,
            inner: Color::rgb(238, 82, 83),
            outer: Color::rgb(170, 40, 48),
        },
    );
    backend.fill_circle(center, r * 0.03, &Paint::Solid(Color::rgb(244, 238, 226)));

    let ink = Paint::Solid(Color::rgb(60, 52, 44).with_alpha(0.7));
    let y = sleeve.y1 + (h - sleeve.y1) * 0.4;
    backend.stroke_line(Point::new(m, y), Point::new(w * 0.7, y), 1.5, &ink);
}

fn draw_boarding_pass(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(252, 252, 248),
        Color::rgb(240, 240, 234),
    );
    backend.fill_rect(
        Rect::new(0.0, 0.0, w, h * 0.16),
        &Paint::Solid(Color::rgb(28, 48, 86)),
    );

    let field = Paint::Solid(Color::rgb(120, 120, 128).with_alpha(0.5));
    for row in 0..3u32 {
        let y = h * (0.24 + 0.1 * f64::from(row));
        backend.fill_rect(Rect::new(w * 0.1, y, w * 0.45, y + h * 0.025), &field);
        backend.fill_rect(Rect::new(w * 0.55, y, w * 0.85, y + h * 0.025), &field);
    }

    let perforation = Paint::Solid(Color::rgb(190, 190, 196));
    let y = h * 0.72;
    let dots = (w / 10.0).floor() as usize;
    for i in 0..dots {
        backend.fill_circle(Point::new(5.0 + i as f64 * 10.0, y), 1.5, &perforation);
    }

    let payload = format!("{:016x}", ctx.seed);
    draw_barcode(
        backend,
        Rect::new(w * 0.1, h * 0.78, w * 0.9, h * 0.93),
        &payload,
        Color::rgb(20, 20, 24),
    );
}

fn draw_candle_note(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(46, 34, 28),
        Color::rgb(24, 18, 15),
    );

    let glow_center = Point::new(w / 2.0, h * 0.38);
    let glow_r = w * 0.35;
    backend.fill_circle(
        glow_center,
        glow_r,
        &Paint::RadialGradient {
            center: glow_center,
            radius: glow_r,
            inner: Color::rgb(255, 190, 92).with_alpha(0.45),
            outer: Color::rgb(255, 190, 92).with_alpha(0.0),
        },
    );

    let body = Rect::new(w * 0.42, h * 0.5, w * 0.58, h * 0.85);
    backend.fill_rect(
        body,
        &Paint::LinearGradient {
            start: Point::new(body.x0, body.y0),
            end: Point::new(body.x1, body.y0),
            from: Color::rgb(250, 240, 220),
            to: Color::rgb(214, 198, 170),
        },
    );
    backend.stroke_line(
        Point::new(w / 2.0, h * 0.5),
        Point::new(w / 2.0, h * 0.47),
        1.2,
        &Paint::Solid(Color::rgb(40, 32, 28)),
    );

    let flame = Rect::new(w * 0.44, h * 0.32, w * 0.56, h * 0.49);
    backend.fill_path(
        &flame_path(flame),
        &Paint::LinearGradient {
            start: Point::new(flame.center().x, flame.y0),
            end: Point::new(flame.center().x, flame.y1),
            from: Color::rgb(255, 140, 40),
            to: Color::rgb(255, 214, 102),
        },
    );
    backend.fill_path(
        &flame_core_path(flame),
        &Paint::Solid(Color::rgb(255, 246, 214).with_alpha(0.9)),
    );
}

fn draw_star_charm(ctx: &ArtifactCtx<'_>, backend: &mut dyn DrawBackend) {
    let (w, h) = (ctx.size.width, ctx.size.height);
    card_base(
        backend,
        ctx.size,
        Color::rgb(20, 28, 62),
        Color::rgb(8, 10, 28),
    );

    let mut rng = Lcg64::new(ctx.seed);
    for _ in 0..24 {
        let c = Point::new(rng.range(0.0, w), rng.range(0.0, h));
        let s = rng.range(2.0, 6.0);
        let alpha = rng.range_f32(0.3, 0.9);
        backend.fill_path(
            &star_path(Rect::from_center_size(c, (2.0 * s, 2.0 * s)), 4),
            &Paint::Solid(Color::rgb(255, 248, 220).with_alpha(alpha)),
        );
    }

    let center = Point::new(w / 2.0, h * 0.45);
    let side = w.min(h) * 0.5;
    let charm = star_path(Rect::from_center_size(center, (side, side)), 5);
    backend.fill_path(
        &charm,
        &Paint::RadialGradient {
            center,
            radius: side / 2.0,
            inner: Color::rgb(255, 232, 140),
            outer: Color::rgb(212, 160, 40),
        },
    );
    backend.stroke_path(&charm, 1.5, &Paint::Solid(Color::rgb(160, 110, 20)));

    let gem = Rect::from_center_size(
        Point::new(center.x, center.y + side * 0.65),
        (side * 0.16, side * 0.22),
    );
    backend.fill_path(
        &diamond_path(gem),
        &Paint::Solid(Color::rgb(180, 220, 255).with_alpha(0.9)),
    );
}

#[cfg(test)]
#[path = "../tests/unit/artifact/render.rs"]
mod tests;
