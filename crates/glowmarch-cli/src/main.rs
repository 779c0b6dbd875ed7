//! Glowmarch CLI - render the sphere-traced glow animation to PNG files

mod settings;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use glowmarch_core::animation::{Animation, FixedStepClock, FrameClock, WallClock, frame_file_name};
use glowmarch_core::camera::Camera;
use glowmarch_core::march::MarchOutcome;
use glowmarch_core::render::{render_frame, render_pixel};
use glowmarch_core::scene::{AnimatedScene, SceneTime};
use settings::{Overrides, load_settings, save_path};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

#[derive(Parser)]
#[command(name = "glowmarch")]
#[command(about = "Sphere-traced SDF animation rendered on the CPU", long_about = None)]
#[command(version)]
struct Cli {
    /// Settings file (defaults to {config_dir}/glowmarch/settings.json)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Resolution flags shared by the rendering commands
#[derive(Args, Clone, Copy)]
struct ViewportArgs {
    /// Image width
    #[arg(long)]
    width: Option<u32>,

    /// Image height
    #[arg(long)]
    height: Option<u32>,

    /// Step budget per ray
    #[arg(long)]
    max_steps: Option<u32>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render a single frame
    Render {
        /// Scene time in milliseconds
        #[arg(short, long, default_value = "0")]
        time_ms: f64,

        /// Output image file (.png)
        #[arg(short, long, default_value = "render.png")]
        output: PathBuf,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Render a sequence of frames
    Animate {
        /// Directory the frames are written to
        #[arg(short, long, default_value = "frames")]
        out_dir: PathBuf,

        /// Number of frames
        #[arg(short, long)]
        frames: Option<u32>,

        /// Frames per second of scene time
        #[arg(long)]
        fps: Option<f32>,

        /// Take scene time from the wall clock instead of fixed steps
        #[arg(long)]
        realtime: bool,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Trace a single pixel and report how the ray ended
    Probe {
        /// Pixel column
        #[arg(short, long)]
        x: u32,

        /// Pixel row (0 is the top)
        #[arg(short, long)]
        y: u32,

        /// Scene time in milliseconds
        #[arg(short, long, default_value = "0")]
        time_ms: f64,

        #[command(flatten)]
        viewport: ViewportArgs,
    },

    /// Print the effective settings as JSON
    Settings {
        /// Also write them back to the settings file (`--config`, or the default location)
        #[arg(long)]
        save: bool,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = cli.config.as_deref();

    match cli.command {
        Commands::Render {
            time_ms,
            output,
            viewport,
        } => {
            run_render(config, viewport, time_ms, &output)?;
        }
        Commands::Animate {
            out_dir,
            frames,
            fps,
            realtime,
            viewport,
        } => {
            let overrides = Overrides {
                fps,
                frames,
                ..overrides(viewport)
            };
            run_animate(config, overrides, realtime, &out_dir)?;
        }
        Commands::Probe {
            x,
            y,
            time_ms,
            viewport,
        } => {
            run_probe(config, viewport, x, y, time_ms)?;
        }
        Commands::Settings { save } => {
            run_settings(config, save)?;
        }
    }

    Ok(())
}

fn overrides(viewport: ViewportArgs) -> Overrides {
    Overrides {
        width: viewport.width,
        height: viewport.height,
        max_steps: viewport.max_steps,
        ..Default::default()
    }
}

fn run_render(
    config: Option<&Path>,
    viewport_args: ViewportArgs,
    time_ms: f64,
    output: &Path,
) -> Result<()> {
    let settings = overrides(viewport_args).apply(load_settings(config)?)?;
    let viewport = settings.viewport()?;

    println!(
        "Rendering t = {:.3}s to {} ({}x{})...",
        time_ms / 1000.0,
        output.display(),
        viewport.width(),
        viewport.height()
    );

    let start = Instant::now();
    let scene = AnimatedScene::at(SceneTime::from_millis(time_ms));
    let (image, stats) = render_frame(&scene, &settings.marcher(), &Camera::default(), viewport);
    tracing::info!(
        "Render took {:.3}s, {:.1} mean steps per pixel",
        start.elapsed().as_secs_f32(),
        stats.mean_steps()
    );

    image
        .save(output)
        .with_context(|| format!("Failed to write {}", output.display()))?;
    println!("Saved to: {}", output.display());

    Ok(())
}

fn run_animate(
    config: Option<&Path>,
    overrides: Overrides,
    realtime: bool,
    out_dir: &Path,
) -> Result<()> {
    let settings = overrides.apply(load_settings(config)?)?;
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create {}", out_dir.display()))?;

    println!(
        "Rendering {} frames ({}x{}) into {}...",
        settings.frame_count,
        settings.width,
        settings.height,
        out_dir.display()
    );

    let mut clock: Box<dyn FrameClock> = if realtime {
        Box::new(WallClock::new())
    } else {
        Box::new(FixedStepClock::new(settings.fps))
    };

    let start = Instant::now();
    let animation = Animation::new(settings)?;
    let summary = animation.run(clock.as_mut(), |info, image| {
        let path = out_dir.join(frame_file_name(info.index));
        image.save(&path)?;
        tracing::info!(
            "Frame {} (t = {:.3}s) -> {}",
            info.index,
            info.time.seconds(),
            path.display()
        );
        Ok(())
    })?;

    println!(
        "Rendered {} frames in {:.2}s (last t = {:.3}s, {:.1} mean steps per pixel)",
        summary.frames,
        start.elapsed().as_secs_f32(),
        summary.last_time.seconds(),
        summary.stats.mean_steps()
    );

    Ok(())
}

fn run_probe(
    config: Option<&Path>,
    viewport_args: ViewportArgs,
    x: u32,
    y: u32,
    time_ms: f64,
) -> Result<()> {
    let settings = overrides(viewport_args).apply(load_settings(config)?)?;
    let viewport = settings.viewport()?;

    if x >= viewport.width() || y >= viewport.height() {
        anyhow::bail!(
            "Pixel ({}, {}) is outside the {}x{} viewport",
            x,
            y,
            viewport.width(),
            viewport.height()
        );
    }

    let camera = Camera::default();
    let scene = AnimatedScene::at(SceneTime::from_millis(time_ms));
    let (outcome, color) = render_pixel(&scene, &settings.marcher(), &camera, viewport, x, y);
    let ray = camera.pixel_ray(viewport, x, y);

    println!("Pixel ({}, {}) at t = {:.3}s", x, y, time_ms / 1000.0);
    println!("  direction: {:?}", ray.direction);
    match outcome {
        MarchOutcome::Hit {
            steps,
            ray_length,
            point,
            material,
        } => {
            println!("  hit after {} steps at distance {:.4}", steps, ray_length);
            println!("  point:     {:?}", point);
            println!("  material:  {:?}", material);
        }
        MarchOutcome::Miss { steps } => {
            println!("  missed after {} steps", steps);
        }
    }
    println!(
        "  colour:    [{:.3}, {:.3}, {:.3}, {:.3}]",
        color[0], color[1], color[2], color[3]
    );

    Ok(())
}

fn run_settings(config: Option<&Path>, save: bool) -> Result<()> {
    let settings = load_settings(config)?;
    println!("{}", settings.to_json()?);

    if save {
        let path = save_path(config)?;
        settings.save(&path)?;
        println!("Saved to: {}", path.display());
    }

    Ok(())
}
