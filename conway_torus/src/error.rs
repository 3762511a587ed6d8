// error.rs - Error types for the simulation

use std::path::PathBuf;
use thiserror::Error;

/// Rejected before any grid is allocated.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("grid size must be positive")]
    ZeroSize,

    #[error("a {size}x{size} grid has more cells than fit in memory")]
    SizeTooLarge { size: usize },

    #[error("benchmark trial count must be positive")]
    ZeroTrials,

    #[error("pattern of {rows}x{cols} cells does not fit at ({row}, {col}) in a {size}x{size} grid")]
    PatternOverflow {
        rows: usize,
        cols: usize,
        row: usize,
        col: usize,
        size: usize,
    },

    #[error("unknown built-in pattern `{0}`")]
    UnknownPattern(String),
}

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("failed to read pattern file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to read pattern data")]
    Read(#[source] std::io::Error),

    #[error("invalid cell {found:?} at line {line}, column {column} (expected '0' or '1')")]
    InvalidCell {
        line: usize,
        column: usize,
        found: char,
    },
}

#[derive(Debug, Error)]
pub enum SchedulerError {
    #[error("failed to start worker runtime")]
    Runtime(#[source] std::io::Error),

    #[error("grid is {found}x{found} but the scheduler was configured for {expected}x{expected}")]
    SizeMismatch { expected: usize, found: usize },

    #[error("worker for rows {first_row}..{end_row} failed")]
    Worker {
        first_row: usize,
        end_row: usize,
        #[source]
        source: tokio::task::JoinError,
    },
}

/// Any failure the library can report.
#[derive(Debug, Error)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Pattern(#[from] PatternError),

    #[error(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error("failed to write output")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
