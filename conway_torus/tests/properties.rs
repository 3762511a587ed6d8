//! Property-based tests for wrapping and generation updates.

use std::sync::Arc;

use conway_torus::topology::wrap_axis;
use conway_torus::{Cell, GenerationScheduler, Grid, Partition, SchedulerConfig};
use proptest::prelude::*;

fn grid_from_bits(size: usize, bits: &[bool]) -> Grid {
    let mut grid = Grid::new(size).unwrap();
    for (index, &alive) in bits.iter().enumerate() {
        grid.set(index / size, index % size, Cell::from(alive));
    }
    grid
}

fn arb_grid() -> impl Strategy<Value = Grid> {
    (1usize..=12).prop_flat_map(|size| {
        prop::collection::vec(any::<bool>(), size * size)
            .prop_map(move |bits| grid_from_bits(size, &bits))
    })
}

proptest! {
    /// Wrapped values land in range and agree with the input modulo n.
    #[test]
    fn prop_wrap_in_range(a in -1000isize..1000, n in 1usize..64) {
        let wrapped = wrap_axis(a, n);
        prop_assert!(wrapped < n);
        prop_assert_eq!((a - wrapped as isize) % n as isize, 0);
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// The next generation does not depend on how rows are spread over workers.
    #[test]
    fn prop_parallel_matches_sequential(grid in arb_grid(), workers in 2usize..6) {
        let grid = Arc::new(grid);
        let size = grid.size();
        let sequential = GenerationScheduler::new(SchedulerConfig::new(size).with_workers(1)).unwrap();
        let parallel = GenerationScheduler::new(
            SchedulerConfig::new(size).with_workers(workers).with_partition(Partition::PerWorker),
        ).unwrap();

        let expected = sequential.advance(&grid).unwrap();
        prop_assert_eq!(parallel.advance(&grid).unwrap(), expected);
    }

    /// Each cell follows B3/S23 applied to its eight wrapped neighbours.
    #[test]
    fn prop_cells_follow_rule(grid in arb_grid()) {
        let grid = Arc::new(grid);
        let size = grid.size();
        let scheduler = GenerationScheduler::new(SchedulerConfig::new(size).with_workers(2)).unwrap();
        let next = scheduler.advance(&grid).unwrap();

        for row in 0..size {
            for col in 0..size {
                let n = size as isize;
                let mut count = 0;
                for dr in -1isize..=1 {
                    for dc in -1isize..=1 {
                        let r = (row as isize + dr).rem_euclid(n) as usize;
                        let c = (col as isize + dc).rem_euclid(n) as usize;
                        if (dr, dc) != (0, 0) && grid.get(r, c).is_alive() {
                            count += 1;
                        }
                    }
                }
                let alive = grid.get(row, col).is_alive();
                let expected = count == 3 || (alive && count == 2);
                prop_assert_eq!(next.get(row, col).is_alive(), expected, "cell ({}, {})", row, col);
            }
        }
    }
}
