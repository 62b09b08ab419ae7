//! Headless isoline frame driver.
//!
//! Samples a Perlin field over a fixed grid for a sequence of times,
//! extracts the zero isolines of each frame, and either writes every frame
//! to a JSON-lines file or logs a per-frame summary.

use anyhow::Result;
use clap::Parser;
use frame_driver::{run, DriverConfig, JsonLinesSink, SummarySink};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "frame-driver")]
#[command(about = "Compute isoline frames from a time-varying noise field")]
struct Args {
    /// Configuration file path (YAML)
    #[arg(short, long, env = "FRAME_DRIVER_CONFIG")]
    config: Option<PathBuf>,

    /// Number of frames to compute
    #[arg(short, long)]
    frames: Option<u64>,

    /// Time of the first frame
    #[arg(long)]
    start_time: Option<f64>,

    /// Time advanced between frames
    #[arg(long)]
    time_step: Option<f64>,

    /// Noise permutation seed
    #[arg(long)]
    seed: Option<u64>,

    /// Write frames as JSON lines to this file
    #[arg(short, long, env = "FRAME_DRIVER_OUTPUT")]
    output: Option<PathBuf>,

    /// Log level
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Emit logs as JSON objects
    #[arg(long)]
    json_logs: bool,
}

impl Args {
    /// Overlay command-line values on a loaded configuration.
    fn apply(&self, config: &mut DriverConfig) {
        if let Some(frames) = self.frames {
            config.frames = frames;
        }
        if let Some(start_time) = self.start_time {
            config.start_time = start_time;
        }
        if let Some(time_step) = self.time_step {
            config.time_step = time_step;
        }
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.output.is_some() {
            config.output = self.output.clone();
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Initialize tracing
    let filter = EnvFilter::new(&args.log_level);

    if args.json_logs {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .json()
            .init();
    } else {
        fmt()
            .with_env_filter(filter)
            .with_target(true)
            .with_level(true)
            .init();
    }

    let mut config = match &args.config {
        Some(path) => DriverConfig::from_file(path)?,
        None => DriverConfig {
            engine: contour_engine::EngineConfig::from_env(),
            ..DriverConfig::default()
        },
    };
    args.apply(&mut config);
    config.validate()?;

    info!(
        rows = config.engine.rows,
        cols = config.engine.cols,
        grid_spacing = config.engine.grid_spacing,
        ambiguity = %config.engine.ambiguity,
        "Loaded configuration"
    );

    let summary = match &config.output {
        Some(path) => {
            let mut sink = JsonLinesSink::create(path)?;
            let summary = run(&config, &mut sink)?;
            info!(path = %path.display(), "Wrote frames");
            summary
        }
        None => {
            let mut sink = SummarySink::default();
            run(&config, &mut sink)?
        }
    };

    println!(
        "{} frames, {} segments, {:.2} ms/frame",
        summary.frames,
        summary.segments,
        summary.mean_frame_time().as_secs_f64() * 1000.0
    );

    Ok(())
}
