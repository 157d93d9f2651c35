//! Run the gravity simulation without a window and print a summary.
//! Real time is simulated: the frame clock advances one period per frame.

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use gravity_core::{Bounds, DisplayList, SimConfig};
use gravity_sim::{FrameClock, SimulationState};

#[derive(Parser, Debug)]
#[command(about = "Headless gravity simulation runner")]
struct Args {
    /// YAML file with a SimConfig; flags below override it
    #[arg(short, long)]
    config: Option<PathBuf>,
    /// Number of ticks to run
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,
    #[arg(long)]
    seed: Option<u64>,
    #[arg(long)]
    fps: Option<f32>,
    #[arg(long)]
    speed: Option<f32>,
    #[arg(long)]
    gm: Option<f32>,
    #[arg(long)]
    random_spawn: bool,
    #[arg(long)]
    max_particles: Option<usize>,
    #[arg(long, default_value_t = 1280.0)]
    width: f32,
    #[arg(long, default_value_t = 720.0)]
    height: f32,
    /// Cursor x in surface units (defaults to the centre)
    #[arg(long)]
    cursor_x: Option<f32>,
    /// Cursor y in surface units (defaults to the centre)
    #[arg(long)]
    cursor_y: Option<f32>,
}

fn load_config(args: &Args) -> Result<SimConfig> {
    let mut config = match &args.config {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("failed to open config {}", path.display()))?;
            serde_yaml::from_reader(BufReader::new(file))
                .with_context(|| format!("failed to parse config {}", path.display()))?
        }
        None => SimConfig::default(),
    };

    if let Some(seed) = args.seed {
        config.seed = seed;
    }
    if let Some(fps) = args.fps {
        config.frames_per_second = fps;
    }
    if let Some(speed) = args.speed {
        config.simulation_speed = speed;
    }
    if let Some(gm) = args.gm {
        config.gravitational_parameter = gm;
    }
    if args.random_spawn {
        config.spawn_randomly = true;
    }
    if args.max_particles.is_some() {
        config.max_particles = args.max_particles;
    }

    config.validate().context("invalid configuration")?;
    Ok(config)
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = load_config(&args)?;

    let bounds = Bounds::new(args.width, args.height);
    let mut clock = FrameClock::new(config.frames_per_second);
    let mut state = SimulationState::new(config, bounds);
    let [cx, cy] = bounds.center();
    state.set_cursor(args.cursor_x.unwrap_or(cx), args.cursor_y.unwrap_or(cy));

    let mut canvas = DisplayList::new();
    let mut frames = 0u64;
    while state.ticks < args.ticks {
        let due = clock.advance(clock.period());
        frames += 1;
        for _ in 0..due {
            if state.ticks >= args.ticks {
                break;
            }
            state.tick(&mut canvas);
            if state.ticks % 100 == 0 {
                eprint!("  {}/{}...\r", state.ticks, args.ticks);
            }
        }
    }
    eprintln!("Done. Ran {} ticks over {} frames.", state.ticks, frames);

    let non_finite = state.particles.iter().filter(|p| !p.is_finite()).count();
    let period_ms = clock.period().as_secs_f64() * 1000.0;

    println!("seed:               {}", state.config.seed);
    println!("frames per second:  {} ({:.3} ms period)", state.config.frames_per_second, period_ms);
    println!("time step:          {:.5}", state.config.time_step());
    println!("GM:                 {}", state.config.gravitational_parameter);
    println!("surface:            {}x{}", state.bounds.width, state.bounds.height);
    println!("cursor:             ({}, {})", state.cursor[0], state.cursor[1]);
    println!("ticks:              {}", state.ticks);
    println!("particles:          {}", state.particle_count());
    println!("recycled:           {}", state.recycled);
    println!("circles last frame: {}", canvas.len());
    println!("mean speed:         {:.3}", state.mean_speed());
    println!("non-finite:         {}", non_finite);

    Ok(())
}
