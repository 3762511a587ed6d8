// pattern.rs - Initial patterns: text files of '0'/'1' rows and a built-in table

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{ConfigError, PatternError};

/// A rectangular block of cells, positioned relative to its own top-left corner.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    name: String,
    rows: usize,
    cols: usize,
    alive: Vec<(usize, usize)>,
}

struct Builtin {
    name: &'static str,
    cells: &'static [(usize, usize)],
}

const BUILTINS: &[Builtin] = &[
    Builtin {
        name: "glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Builtin {
        name: "blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Builtin {
        name: "block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Builtin {
        name: "toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Builtin {
        name: "beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Builtin {
        name: "pulsar",
        cells: &[
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Builtin {
        name: "r-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Builtin {
        name: "gosper-glider-gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

/// Names accepted by [`Pattern::builtin`].
pub fn builtin_names() -> impl Iterator<Item = &'static str> {
    BUILTINS.iter().map(|builtin| builtin.name)
}

impl Pattern {
    /// Pattern whose bounding box is the smallest one holding every cell.
    pub fn from_cells(name: impl Into<String>, cells: &[(usize, usize)]) -> Self {
        let rows = cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
        let cols = cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
        let mut alive = cells.to_vec();
        alive.sort_unstable();
        alive.dedup();
        Self { name: name.into(), rows, cols, alive }
    }

    pub fn builtin(name: &str) -> Result<Self, ConfigError> {
        BUILTINS
            .iter()
            .find(|builtin| builtin.name.eq_ignore_ascii_case(name))
            .map(|builtin| Self::from_cells(builtin.name, builtin.cells))
            .ok_or_else(|| ConfigError::UnknownPattern(name.to_owned()))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Alive cells in row-major order.
    pub fn alive(&self) -> &[(usize, usize)] {
        &self.alive
    }
}

/// Parses one row per line, one `'0'` (dead) or `'1'` (alive) per column.
///
/// Short lines are padded with dead cells; blank lines still count as rows.
pub fn parse_pattern(name: &str, reader: impl BufRead) -> Result<Pattern, PatternError> {
    let mut rows = 0;
    let mut cols = 0;
    let mut alive = Vec::new();

    for (row, line) in reader.lines().enumerate() {
        let line = line.map_err(PatternError::Read)?;
        let mut width = 0;
        for (col, ch) in line.chars().enumerate() {
            match ch {
                '0' => {}
                '1' => alive.push((row, col)),
                found => {
                    return Err(PatternError::InvalidCell {
                        line: row + 1,
                        column: col + 1,
                        found,
                    })
                }
            }
            width = col + 1;
        }
        cols = cols.max(width);
        rows = row + 1;
    }

    Ok(Pattern { name: name.to_owned(), rows, cols, alive })
}

/// Reads a pattern file from disk.
pub fn load_pattern(path: &Path) -> Result<Pattern, PatternError> {
    let io_error = |source: std::io::Error| PatternError::Io { path: path.to_path_buf(), source };
    let file = File::open(path).map_err(io_error)?;
    let name = path
        .file_name()
        .map_or_else(|| path.display().to_string(), |name| name.to_string_lossy().into_owned());

    let pattern = parse_pattern(&name, BufReader::new(file)).map_err(|err| match err {
        PatternError::Read(source) => io_error(source),
        other => other,
    })?;
    log::info!(
        "Loaded pattern {} ({}x{}, {} alive)",
        path.display(),
        pattern.rows(),
        pattern.cols(),
        pattern.alive().len()
    );
    Ok(pattern)
}
