use anyhow::Result;
use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::path::PathBuf;
use wormbrain_core::loader;
use wormbrain_core::{AppConfig, ExecutionMode};
use wormbrain_lib::app::{Frame, Simulation};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON weight table, `{"SRC": {"DST": weight}}`
    #[arg(short, long)]
    weights: PathBuf,

    /// Custom config file path
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Number of brain updates to run
    #[arg(short, long, default_value_t = 20)]
    updates: u64,

    /// Bootstrap seed, overrides the config
    #[arg(short, long)]
    seed: Option<u64>,

    /// Simulated times (ms) at which the nose touches a wall
    #[arg(long = "touch-at")]
    touch_at: Vec<u64>,

    /// Simulated times (ms) at which food comes into range
    #[arg(long = "food-at")]
    food_at: Vec<u64>,

    /// Neuron whose voltage is printed every update
    #[arg(long)]
    watch: Vec<String>,

    /// Use the rayon execution mode
    #[arg(long)]
    parallel: bool,

    /// Print one JSON object per update
    #[arg(long)]
    json: bool,
}

fn print_frame(frame: &Frame, json: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string(frame)?);
        return Ok(());
    }
    let mut line = format!(
        "t={:>6}ms  L={:>9.3}  R={:>9.3}  turn={:>7.3}  speed={:>6.3}",
        frame.time_ms, frame.output.left, frame.output.right, frame.steering.turn, frame.steering.speed
    );
    for (name, v) in &frame.watched {
        line.push_str(&format!("  {name}={v:.3}"));
    }
    println!("{line}");
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    wormbrain_core::init_logging();

    let mut config = match &args.config {
        Some(path) => loader::read_config(path)?,
        None => AppConfig::default(),
    };
    if args.parallel {
        config.simulation.execution = ExecutionMode::Parallel;
    }
    let seed = args
        .seed
        .or(config.bootstrap.seed)
        .unwrap_or_else(rand::random);
    let interval = config.simulation.brain_update_interval_ms;

    let mut sim = Simulation::from_weights(&args.weights, config)?;
    for name in &args.watch {
        sim.watch(name)?;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let picks = sim.bootstrap(&mut rng);
    tracing::info!(seed, stimulated = picks.len(), "Bootstrapped");

    for _ in 0..args.updates {
        let window = sim.clock_ms()..sim.clock_ms() + interval;
        if args.touch_at.iter().any(|t| window.contains(t)) {
            sim.touch();
        }
        if args.food_at.iter().any(|t| window.contains(t)) {
            sim.sense_food();
        }
        let frame = sim.step();
        print_frame(&frame, args.json)?;
    }

    let metrics = sim.engine().metrics();
    tracing::info!(
        ticks = metrics.tick_count(),
        spikes = metrics.spike_count(),
        stimulations = metrics.stimulations(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Simulation finished"
    );
    Ok(())
}
