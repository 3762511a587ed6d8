// topology.rs - Toroidal neighbour addressing

use crate::grid::Grid;

/// Relative `(row, col)` offsets of the Moore neighbourhood, radius 1.
#[rustfmt::skip]
pub const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    ( 0, -1),          ( 0, 1),
    ( 1, -1), ( 1, 0), ( 1, 1),
];

/// Maps `a` into `0..n` with mathematical modulo, so `-1` becomes `n - 1`.
pub fn wrap_axis(a: isize, n: usize) -> usize {
    // Grid dimensions come from a Vec allocation and always fit in isize.
    a.rem_euclid(n as isize) as usize
}

/// Normalises a transient `(row, col)` pair onto an `n` x `n` torus.
pub fn wrap_coordinate((row, col): (isize, isize), n: usize) -> (usize, usize) {
    (wrap_axis(row, n), wrap_axis(col, n))
}

/// Alive cells among the eight wrapped neighbours of `(row, col)`.
pub fn count_alive_neighbors(grid: &Grid, row: usize, col: usize) -> u8 {
    let n = grid.size();
    let mut count = 0;
    for &(dr, dc) in &NEIGHBOR_OFFSETS {
        let (nr, nc) = wrap_coordinate((row as isize + dr, col as isize + dc), n);
        if grid.get(nr, nc).is_alive() { count += 1; }
    }
    count
}
