// grid.rs - Cell states and the square grid that holds one generation

use std::ops::Range;

use crate::error::ConfigError;
use crate::pattern::Pattern;

/// State of a single cell. Stored as one byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[repr(u8)]
pub enum Cell {
    #[default]
    Dead = 0,
    Alive = 1,
}

impl Cell {
    pub fn is_alive(self) -> bool {
        self == Cell::Alive
    }
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive { Cell::Alive } else { Cell::Dead }
    }
}

/// An N x N generation, addressed as `(row, col)` and stored row-major.
///
/// A grid is never updated in place by the simulation: each generation is a
/// fresh `Grid` built from the previous one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    size: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// All-dead grid of `size` x `size` cells.
    pub fn new(size: usize) -> Result<Self, ConfigError> {
        check_size(size)?;
        Ok(Self::dead(size))
    }

    /// Callers guarantee `size` passed [`check_size`].
    pub(crate) fn dead(size: usize) -> Self {
        Self {
            size,
            cells: vec![Cell::Dead; size * size],
        }
    }

    /// Dead grid with `pattern` overlaid so its top-left cell lands on `origin`.
    ///
    /// A pattern whose bounding box would cross the grid edge is rejected
    /// rather than wrapped or clipped.
    pub fn from_pattern(
        size: usize,
        pattern: &Pattern,
        origin: (usize, usize),
    ) -> Result<Self, ConfigError> {
        let mut grid = Self::new(size)?;
        let (row, col) = origin;
        let overflow = row
            .checked_add(pattern.rows())
            .zip(col.checked_add(pattern.cols()))
            .map_or(true, |(end_row, end_col)| end_row > size || end_col > size);
        if overflow {
            return Err(ConfigError::PatternOverflow {
                rows: pattern.rows(),
                cols: pattern.cols(),
                row,
                col,
                size,
            });
        }
        for &(r, c) in pattern.alive() {
            grid.set(row + r, col + c, Cell::Alive);
        }
        Ok(grid)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Panics if `row` or `col` is outside `0..size`.
    pub fn get(&self, row: usize, col: usize) -> Cell {
        self.cells[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, cell: Cell) {
        let index = self.index(row, col);
        self.cells[index] = cell;
    }

    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.size;
        &self.cells[start..start + self.size]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.size)
    }

    /// Number of alive cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Coordinates of every alive cell in row-major order.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let size = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_alive())
            .map(move |(index, _)| (index / size, index % size))
    }

    /// Contiguous storage for a range of whole rows.
    pub(crate) fn rows_mut(&mut self, rows: Range<usize>) -> &mut [Cell] {
        &mut self.cells[rows.start * self.size..rows.end * self.size]
    }

    fn index(&self, row: usize, col: usize) -> usize {
        assert!(
            row < self.size && col < self.size,
            "cell ({row}, {col}) is outside a {0}x{0} grid",
            self.size
        );
        row * self.size + col
    }
}

/// Rejects sizes with no cells or whose cell count overflows `usize`.
pub fn check_size(size: usize) -> Result<(), ConfigError> {
    if size == 0 {
        return Err(ConfigError::ZeroSize);
    }
    if size.checked_mul(size).is_none() {
        return Err(ConfigError::SizeTooLarge { size });
    }
    Ok(())
}
