// config.rs - Run configuration, validated before any grid is allocated

use std::path::PathBuf;
use std::time::Duration;

use crate::error::{ConfigError, Result};
use crate::grid::{check_size, Grid};
use crate::pattern::{load_pattern, Pattern};
use crate::scheduler::{Partition, SchedulerConfig};

pub const DEFAULT_SIZE: usize = 20;
pub const DEFAULT_TRIALS: u64 = 100;
pub const DEFAULT_INTERVAL: Duration = Duration::from_millis(100);
pub const DEFAULT_PATTERN_FILE: &str = "glider";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    /// Render every generation, pausing `interval` between frames.
    Interactive {
        interval: Duration,
        /// `None` runs until the process is killed.
        generations: Option<u64>,
    },
    /// Time `trials` back-to-back generations without rendering.
    Benchmark { trials: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PatternSource {
    File(PathBuf),
    Builtin(String),
}

impl PatternSource {
    pub fn load(&self) -> Result<Pattern> {
        Ok(match self {
            PatternSource::File(path) => load_pattern(path)?,
            PatternSource::Builtin(name) => Pattern::builtin(name)?,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationConfig {
    pub size: usize,
    /// 0 means every available processing unit.
    pub workers: usize,
    pub partition: Partition,
    pub mode: Mode,
    pub pattern: PatternSource,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_SIZE,
            workers: 0,
            partition: Partition::default(),
            mode: Mode::Interactive { interval: DEFAULT_INTERVAL, generations: None },
            pattern: PatternSource::File(PathBuf::from(DEFAULT_PATTERN_FILE)),
        }
    }
}

impl SimulationConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_size(self.size)?;
        if let Mode::Benchmark { trials: 0 } = self.mode {
            return Err(ConfigError::ZeroTrials);
        }
        Ok(())
    }

    pub fn scheduler_config(&self) -> SchedulerConfig {
        SchedulerConfig::new(self.size)
            .with_workers(self.workers)
            .with_partition(self.partition)
    }

    /// Validates, loads the pattern and places it at the top-left corner.
    pub fn initial_grid(&self) -> Result<Grid> {
        self.validate()?;
        let pattern = self.pattern.load()?;
        Ok(Grid::from_pattern(self.size, &pattern, (0, 0))?)
    }
}
