// driver.rs - Interactive and benchmark loops around the scheduler

use std::fmt;
use std::io::Write;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};

use crate::error::Result;
use crate::grid::Grid;
use crate::history::CycleDetector;
use crate::render::render;
use crate::scheduler::GenerationScheduler;

/// Renders, advances and sleeps, in that order, for each generation.
///
/// With `generations == None` this only returns on error. Otherwise it
/// returns the grid reached after that many generations.
pub fn run_interactive(
    scheduler: &GenerationScheduler,
    grid: Grid,
    interval: Duration,
    generations: Option<u64>,
    mut out: impl Write,
) -> Result<Arc<Grid>> {
    let mut grid = Arc::new(grid);
    let mut cycles = CycleDetector::new();
    let mut in_cycle = false;
    let mut generation: u64 = 0;

    while generations.map_or(true, |limit| generation < limit) {
        render(&grid, &mut out)?;

        let repeating = cycles.observe(&grid);
        if repeating && !in_cycle {
            log::info!("Generation {generation} repeats a recent generation; pattern is cycling");
        }
        in_cycle = repeating;

        grid = scheduler.advance(&grid)?;
        generation += 1;
        log::debug!("Generation {generation}: population {}", grid.population());

        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    Ok(grid)
}

/// Timing of a benchmark run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkReport {
    pub trials: u64,
    pub workers: usize,
    pub elapsed: Duration,
    pub final_population: usize,
}

impl BenchmarkReport {
    pub fn per_generation(&self) -> Duration {
        let trials = u32::try_from(self.trials).unwrap_or(u32::MAX).max(1);
        self.elapsed / trials
    }
}

impl fmt::Display for BenchmarkReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?} per generation ({} generations on {} workers)",
            self.per_generation(),
            self.trials,
            self.workers
        )
    }
}

/// Advances `trials` generations back to back and times the whole run.
pub fn run_benchmark(
    scheduler: &GenerationScheduler,
    grid: Grid,
    trials: u64,
) -> Result<BenchmarkReport> {
    let mut grid = Arc::new(grid);
    let start = Instant::now();
    for _ in 0..trials {
        grid = scheduler.advance(&grid)?;
    }
    let elapsed = start.elapsed();

    let report = BenchmarkReport {
        trials,
        workers: scheduler.workers(),
        elapsed,
        final_population: grid.population(),
    };
    log::debug!("Benchmark finished: {report:?}");
    Ok(report)
}
