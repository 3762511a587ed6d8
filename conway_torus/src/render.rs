// render.rs - Console output of a generation

use std::io::{self, Write};

use crate::grid::Grid;

/// Writes one line per row of space-separated `0`/`1` digits, then a blank line.
pub fn render(grid: &Grid, mut out: impl Write) -> io::Result<()> {
    let mut line = String::with_capacity(grid.size() * 2);
    for row in grid.rows() {
        line.clear();
        for (col, cell) in row.iter().enumerate() {
            if col > 0 { line.push(' '); }
            line.push(if cell.is_alive() { '1' } else { '0' });
        }
        writeln!(out, "{line}")?;
    }
    writeln!(out)?;
    out.flush()
}
