use std::path::{Path, PathBuf};

use anyhow::Context as _;
use clap::{Parser, Subcommand, ValueEnum};

use keepsake::{
    ArtifactStyle, Color, CpuCanvas, EffectSettings, FilmGrain, Fps, FrameRGBA, Lcg64, Point, Size,
};

#[derive(Parser, Debug)]
#[command(name = "keepsake", version)]
struct Cli {
    /// Log library diagnostics to stderr.
    #[arg(long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a keepsake card as a PNG.
    Card(CardArgs),
    /// Render a single film-grain frame as a PNG.
    Grain(GrainArgs),
    /// Render a burst animation as a numbered PNG sequence.
    Burst(BurstArgs),
}

#[derive(Parser, Debug)]
struct CardArgs {
    /// Card style.
    #[arg(long, value_enum)]
    style: StyleChoice,

    /// Card width in pixels.
    #[arg(long, default_value_t = 300)]
    width: u32,

    /// Card height in pixels.
    #[arg(long, default_value_t = 450)]
    height: u32,

    /// Seed for randomized decorations.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Effect settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct GrainArgs {
    /// Timestamp in seconds the frame is seeded from.
    #[arg(long)]
    time: f64,

    /// Grain intensity in [0, 1].
    #[arg(long, default_value_t = 0.5)]
    intensity: f32,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 300)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 450)]
    height: u32,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,
}

#[derive(Parser, Debug)]
struct BurstArgs {
    /// Seed for particle layout.
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Output frame rate.
    #[arg(long, default_value_t = 24)]
    fps: u32,

    /// Frame width in pixels.
    #[arg(long, default_value_t = 400)]
    width: u32,

    /// Frame height in pixels.
    #[arg(long, default_value_t = 400)]
    height: u32,

    /// Effect settings JSON.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory receiving `frame_0000.png`, `frame_0001.png`, ...
    #[arg(long)]
    out_dir: PathBuf,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum StyleChoice {
    Polaroid,
    #[value(alias = "envelope")]
    WaxEnvelope,
    FilmNegative,
    VinylSleeve,
    BoardingPass,
    CandleNote,
    StarCharm,
}

impl From<StyleChoice> for ArtifactStyle {
    fn from(choice: StyleChoice) -> Self {
        match choice {
            StyleChoice::Polaroid => Self::Polaroid,
            StyleChoice::WaxEnvelope => Self::WaxEnvelope,
            StyleChoice::FilmNegative => Self::FilmNegative,
            StyleChoice::VinylSleeve => Self::VinylSleeve,
            StyleChoice::BoardingPass => Self::BoardingPass,
            StyleChoice::CandleNote => Self::CandleNote,
            StyleChoice::StarCharm => Self::StarCharm,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_writer(std::io::stderr)
            .init();
    }
    match cli.cmd {
        Command::Card(args) => cmd_card(args),
        Command::Grain(args) => cmd_grain(args),
        Command::Burst(args) => cmd_burst(args),
    }
}

fn load_settings(path: Option<&Path>) -> anyhow::Result<EffectSettings> {
    match path {
        Some(p) => EffectSettings::from_path(p)
            .with_context(|| format!("load settings '{}'", p.display())),
        None => Ok(EffectSettings::default()),
    }
}

fn surface_size(width: u32, height: u32) -> Size {
    Size::new(f64::from(width), f64::from(height))
}

fn write_png(path: &Path, frame: &FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }

    image::save_buffer_with_format(
        path,
        &frame.data,
        frame.width,
        frame.height,
        image::ColorType::Rgba8,
        image::ImageFormat::Png,
    )
    .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

fn cmd_card(args: CardArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let style = ArtifactStyle::from(args.style);

    let mut canvas = CpuCanvas::new(args.width, args.height, Color::WHITE)?;
    keepsake::render_artifact(
        style,
        surface_size(args.width, args.height),
        &settings,
        args.seed,
        &mut canvas,
    );

    write_png(&args.out, &canvas.finish())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_grain(args: GrainArgs) -> anyhow::Result<()> {
    if !(0.0..=1.0).contains(&args.intensity) {
        anyhow::bail!("intensity must be in [0, 1], got {}", args.intensity);
    }
    let grain = FilmGrain::with_intensity(args.intensity);

    let mut canvas = CpuCanvas::new(args.width, args.height, Color::gray(0.5))?;
    grain.draw_at(&mut canvas, surface_size(args.width, args.height), args.time);

    write_png(&args.out, &canvas.finish())?;
    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_burst(args: BurstArgs) -> anyhow::Result<()> {
    let settings = load_settings(args.config.as_deref())?;
    let fps = Fps::new(args.fps, 1)?;

    let size = surface_size(args.width, args.height);
    let origin = Point::new(size.width / 2.0, size.height / 2.0);
    let burst = settings.trigger_burst(origin, &mut Lcg64::new(args.seed));

    let frames = fps.secs_to_frames_ceil(burst.total_duration()) + 1;
    std::fs::create_dir_all(&args.out_dir)
        .with_context(|| format!("create output dir '{}'", args.out_dir.display()))?;

    for i in 0..frames {
        let t = fps.frames_to_secs(i);
        let mut canvas = CpuCanvas::new(args.width, args.height, Color::rgb(18, 20, 28))?;
        burst.draw_at(&mut canvas, t);
        let path = args.out_dir.join(format!("frame_{i:04}.png"));
        write_png(&path, &canvas.finish())?;
    }

    eprintln!("wrote {frames} frames to {}", args.out_dir.display());
    Ok(())
}
