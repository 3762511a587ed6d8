// main.rs - Command line front end: interactive display or timed benchmark

use std::io;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::builder::PossibleValuesParser;
use clap::{Parser, ValueEnum};

use conway_torus::config::{DEFAULT_PATTERN_FILE, DEFAULT_SIZE, DEFAULT_TRIALS};
use conway_torus::pattern::builtin_names;
use conway_torus::{
    run_benchmark, run_interactive, GenerationScheduler, Mode, Partition, PatternSource,
    SimulationConfig,
};

/// Conway's Game of Life on a wrap-around grid.
#[derive(Parser)]
#[command(name = "conway-torus", version, about)]
struct Args {
    /// Width and height of the square world.
    #[arg(long, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Worker threads for generation updates (0 = all available).
    #[arg(long, default_value_t = 0)]
    procs: usize,

    /// Time a fixed number of generations instead of displaying them.
    #[arg(long)]
    bench: bool,

    /// Generations timed in benchmark mode.
    #[arg(long, default_value_t = DEFAULT_TRIALS)]
    trials: u64,

    /// Pause between displayed generations, in milliseconds.
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Stop after this many displayed generations (default: run until killed).
    #[arg(long)]
    generations: Option<u64>,

    /// Pattern file of '0'/'1' rows, placed at the top-left corner.
    #[arg(long, default_value = DEFAULT_PATTERN_FILE, conflicts_with = "builtin")]
    pattern: PathBuf,

    /// Use a built-in pattern instead of a file.
    #[arg(long, value_parser = builtin_parser())]
    builtin: Option<String>,

    /// How rows are split into tasks.
    #[arg(long, value_enum, default_value_t = PartitionArg::Row)]
    partition: PartitionArg,
}

fn builtin_parser() -> PossibleValuesParser {
    PossibleValuesParser::new(builtin_names())
}

#[derive(Clone, Copy, ValueEnum)]
enum PartitionArg {
    /// One task per row.
    Row,
    /// One block of rows per worker.
    Worker,
}

impl From<Args> for SimulationConfig {
    fn from(args: Args) -> Self {
        let mode = if args.bench {
            Mode::Benchmark { trials: args.trials }
        } else {
            Mode::Interactive {
                interval: Duration::from_millis(args.interval_ms),
                generations: args.generations,
            }
        };
        let pattern = match args.builtin {
            Some(name) => PatternSource::Builtin(name),
            None => PatternSource::File(args.pattern),
        };
        let partition = match args.partition {
            PartitionArg::Row => Partition::PerRow,
            PartitionArg::Worker => Partition::PerWorker,
        };
        SimulationConfig { size: args.size, workers: args.procs, partition, mode, pattern }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let config = SimulationConfig::from(Args::parse());
    config.validate().context("invalid configuration")?;

    let grid = config.initial_grid().context("failed to set up the initial generation")?;
    let scheduler = GenerationScheduler::new(config.scheduler_config())
        .context("failed to start the generation scheduler")?;

    match config.mode {
        Mode::Benchmark { trials } => {
            let report = run_benchmark(&scheduler, grid, trials).context("benchmark failed")?;
            println!("{report}");
        }
        Mode::Interactive { interval, generations } => {
            run_interactive(&scheduler, grid, interval, generations, io::stdout().lock())
                .context("simulation failed")?;
        }
    }
    Ok(())
}
