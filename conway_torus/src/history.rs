// history.rs - Recent-generation hashes for spotting cycles

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::grid::Grid;

const HISTORY_LEN: usize = 10;

/// Remembers the hashes of the last ten generations.
///
/// Detection is best-effort: a hash collision reads as a cycle, and periods
/// longer than the window are missed.
#[derive(Debug, Default)]
pub struct CycleDetector {
    hashes: [u64; HISTORY_LEN],
    seen: usize,
}

impl CycleDetector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records `grid` and reports whether it matches one of the remembered generations.
    pub fn observe(&mut self, grid: &Grid) -> bool {
        let hash = hash_grid(grid);
        let filled = self.seen.min(HISTORY_LEN);
        if self.hashes[..filled].contains(&hash) {
            return true;
        }
        self.hashes[self.seen % HISTORY_LEN] = hash;
        self.seen += 1;
        false
    }
}

fn hash_grid(grid: &Grid) -> u64 {
    let mut hasher = DefaultHasher::new();
    grid.hash(&mut hasher);
    hasher.finish()
}
