#![deny(unsafe_code)]
//! CLI binary for the drift-field particle renderer.
//!
//! Subcommands:
//! - `render` — simulate a field for N frames, write a PNG snapshot
//! - `info` — print tiering and configuration facts

mod error;

use clap::{Parser, Subcommand};
use drift_field_ambient::runner::{animate, FixedFrames, LoopHandle, MotionPreference};
use drift_field_ambient::ParticleField;
use drift_field_core::{DeviceTier, FieldConfig, Scene, Surface};
use drift_field_raster::RasterSurface;
use error::CliError;
use std::path::PathBuf;
use std::process;

#[derive(Parser)]
#[command(name = "drift-field", about = "Ambient particle field renderer")]
struct Cli {
    /// Output as JSON instead of human-readable text.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Simulate a field for N frames and write a PNG snapshot.
    Render {
        /// Viewport width in logical pixels.
        #[arg(short = 'W', long, default_value_t = 1024.0)]
        width: f64,

        /// Viewport height in logical pixels.
        #[arg(short = 'H', long, default_value_t = 768.0)]
        height: f64,

        /// Number of frames to simulate before the snapshot.
        #[arg(short, long, default_value_t = 240)]
        frames: usize,

        /// PRNG seed for deterministic output.
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Field configuration overrides as a JSON object.
        #[arg(long, default_value = "{}")]
        params: String,

        /// Read the full scene (viewport, seed, frames, config) from a JSON
        /// file instead of the flags above.
        #[arg(long)]
        scene: Option<PathBuf>,

        /// Honor a reduced-motion preference: clear the surface and run
        /// zero frames.
        #[arg(long)]
        reduced_motion: bool,

        /// Output file path.
        #[arg(short, long, default_value = "field.png")]
        output: PathBuf,
    },
    /// Print tiering and configuration facts.
    Info {
        /// Classify this viewport width against the breakpoint.
        #[arg(long)]
        width: Option<f64>,
    },
}

fn load_scene(path: &PathBuf) -> Result<Scene, CliError> {
    let text = std::fs::read_to_string(path)
        .map_err(|e| CliError::Io(format!("cannot read {}: {e}", path.display())))?;
    serde_json::from_str(&text)
        .map_err(|e| CliError::Input(format!("invalid scene {}: {e}", path.display())))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Command::Info { width } => {
            let config = FieldConfig::default();
            if cli.json {
                let mut info = serde_json::json!({ "config": config });
                if let Some(w) = width {
                    let tier = DeviceTier::from_viewport_width(w, config.breakpoint);
                    info["tier"] = serde_json::to_value(tier)?;
                    info["particle_count"] = serde_json::json!(config.count_for(tier));
                }
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                println!("breakpoint: {}", config.breakpoint);
                println!(
                    "counts: {} constrained / {} full",
                    config.constrained_count, config.full_count
                );
                println!(
                    "links: < {} units, base alpha {}",
                    config.link_distance, config.link_base_alpha
                );
                println!("palette: {} stops", config.palette.len());
                if let Some(w) = width {
                    let tier = DeviceTier::from_viewport_width(w, config.breakpoint);
                    println!(
                        "width {w} -> {tier:?} tier, {} particles, links {}",
                        config.count_for(tier),
                        if tier.draws_links() { "on" } else { "off" }
                    );
                }
            }
        }
        Command::Render {
            width,
            height,
            frames,
            seed,
            params,
            scene,
            reduced_motion,
            output,
        } => {
            let scene = match scene {
                Some(path) => load_scene(&path)?,
                None => {
                    let config: FieldConfig = serde_json::from_str(&params)
                        .map_err(|e| CliError::Input(format!("invalid --params JSON: {e}")))?;
                    Scene {
                        width,
                        height,
                        seed,
                        frames,
                        config,
                    }
                }
            };
            scene.validate()?;

            let mut field = ParticleField::from_scene(&scene)?;
            let mut surface = RasterSurface::new(scene.width, scene.height);
            let handle = LoopHandle::new();
            let motion = if reduced_motion {
                MotionPreference::Reduced
            } else {
                MotionPreference::Full
            };
            let ran = animate(
                &mut field,
                Some(&mut surface as &mut dyn Surface),
                &mut FixedFrames::new(scene.frames),
                &handle,
                motion,
            );

            drift_field_raster::snapshot::write_png(&surface, &output)?;

            if cli.json {
                let info = serde_json::json!({
                    "scene": scene,
                    "tier": field.tier(),
                    "particles": field.particles().len(),
                    "frames_run": ran,
                    "output": output.display().to_string(),
                });
                println!("{}", serde_json::to_string_pretty(&info)?);
            } else {
                eprintln!(
                    "rendered {} particles ({:?} tier, {ran} frames, seed {}) -> {}",
                    field.particles().len(),
                    field.tier(),
                    scene.seed,
                    output.display()
                );
            }
        }
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();
    let json_mode = cli.json;
    if let Err(e) = run(cli) {
        if json_mode {
            let j = serde_json::json!({"error": e.to_string(), "exit_code": e.exit_code()});
            eprintln!("{}", serde_json::to_string_pretty(&j).unwrap_or_default());
        } else {
            eprintln!("error: {e}");
        }
        process::exit(e.exit_code());
    }
}
