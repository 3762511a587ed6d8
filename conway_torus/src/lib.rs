// lib.rs - Conway's Game of Life on a toroidal grid
//
// Each generation is computed from a frozen snapshot of the previous one by
// row-range tasks on a tokio worker pool, then joined into a fresh grid.

pub mod config;
pub mod driver;
pub mod error;
pub mod grid;
pub mod history;
pub mod pattern;
pub mod render;
pub mod rules;
pub mod scheduler;
pub mod topology;

pub use config::{Mode, PatternSource, SimulationConfig};
pub use driver::{run_benchmark, run_interactive, BenchmarkReport};
pub use error::{ConfigError, Error, PatternError, Result, SchedulerError};
pub use grid::{Cell, Grid};
pub use pattern::{load_pattern, parse_pattern, Pattern};
pub use rules::next_state;
pub use scheduler::{GenerationScheduler, Partition, SchedulerConfig};
pub use topology::{count_alive_neighbors, wrap_coordinate};
