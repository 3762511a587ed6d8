//! End-to-end behaviour of whole generations: classic patterns, determinism
//! across worker counts, and the input grid surviving `advance` untouched.

use std::io::Write;
use std::sync::Arc;

use conway_torus::{
    load_pattern, Cell, GenerationScheduler, Grid, Partition, Pattern, SchedulerConfig,
};

fn scheduler(size: usize, workers: usize, partition: Partition) -> GenerationScheduler {
    let config = SchedulerConfig::new(size).with_workers(workers).with_partition(partition);
    GenerationScheduler::new(config).unwrap()
}

fn advance_n(scheduler: &GenerationScheduler, grid: Grid, n: usize) -> Arc<Grid> {
    let mut grid = Arc::new(grid);
    for _ in 0..n {
        grid = scheduler.advance(&grid).unwrap();
    }
    grid
}

/// A deterministic, irregular starting grid.
fn soup(size: usize, seed: u64) -> Grid {
    let mut grid = Grid::new(size).unwrap();
    let mut state = seed;
    for row in 0..size {
        for col in 0..size {
            state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
            grid.set(row, col, Cell::from(state >> 61 < 3));
        }
    }
    grid
}

#[test]
fn block_is_a_still_life() {
    let mut grid = Grid::new(4).unwrap();
    for (row, col) in [(1, 1), (1, 2), (2, 1), (2, 2)] {
        grid.set(row, col, Cell::Alive);
    }
    let next = scheduler(4, 2, Partition::PerRow).advance(&Arc::new(grid.clone())).unwrap();
    assert_eq!(*next, grid);
}

#[test]
fn glider_moves_one_cell_diagonally_every_four_generations() {
    let glider = Pattern::builtin("glider").unwrap();
    let start = Grid::from_pattern(20, &glider, (0, 0)).unwrap();
    let moved = advance_n(&scheduler(20, 4, Partition::PerRow), start.clone(), 4);

    let expected: Vec<_> = start.alive_cells().map(|(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(moved.alive_cells().collect::<Vec<_>>(), expected);
}

#[test]
fn glider_laps_the_torus() {
    let glider = Pattern::builtin("glider").unwrap();
    let start = Grid::from_pattern(8, &glider, (0, 0)).unwrap();
    let lapped = advance_n(&scheduler(8, 3, Partition::PerWorker), start.clone(), 4 * 8);
    assert_eq!(*lapped, start);
}

#[test]
fn pulsar_has_period_three() {
    let pulsar = Pattern::builtin("pulsar").unwrap();
    let start = Grid::from_pattern(17, &pulsar, (2, 2)).unwrap();
    let scheduler = scheduler(17, 4, Partition::PerRow);

    let one = advance_n(&scheduler, start.clone(), 1);
    assert_ne!(*one, start);
    assert_eq!(*advance_n(&scheduler, start.clone(), 3), start);
}

#[test]
fn r_pentomino_is_not_a_still_life() {
    let r = Pattern::builtin("r-pentomino").unwrap();
    assert_eq!(r.alive(), &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)]);
    let start = Grid::from_pattern(20, &r, (8, 8)).unwrap();
    let next = advance_n(&scheduler(20, 2, Partition::PerRow), start.clone(), 1);
    assert_eq!(next.population(), 6);
}

#[test]
fn output_is_identical_for_any_worker_count_or_partition() {
    let grid = soup(37, 7);
    let reference = advance_n(&scheduler(37, 1, Partition::PerRow), grid.clone(), 5);
    for workers in [2, 3, 8] {
        for partition in [Partition::PerRow, Partition::PerWorker] {
            let result = advance_n(&scheduler(37, workers, partition), grid.clone(), 5);
            assert_eq!(result, reference, "{workers} workers, {partition:?}");
        }
    }
}

#[test]
fn advance_leaves_the_input_untouched() {
    let grid = Arc::new(soup(16, 42));
    let before = (*grid).clone();
    let next = scheduler(16, 8, Partition::PerWorker).advance(&grid).unwrap();
    assert_eq!(*grid, before);
    assert_ne!(*next, before);
}

#[test]
fn pattern_file_round_trips_into_the_grid() {
    let path = std::env::temp_dir().join(format!("conway_torus_pattern_{}", std::process::id()));
    let mut file = std::fs::File::create(&path).unwrap();
    writeln!(file, "010").unwrap();
    writeln!(file, "001").unwrap();
    writeln!(file, "111").unwrap();
    drop(file);

    let pattern = load_pattern(&path).unwrap();
    std::fs::remove_file(&path).unwrap();

    let grid = Grid::from_pattern(5, &pattern, (0, 0)).unwrap();
    assert_eq!(grid.row(0), &[Cell::Dead, Cell::Alive, Cell::Dead, Cell::Dead, Cell::Dead]);
    assert_eq!(grid.row(2)[..3], [Cell::Alive; 3]);
    assert_eq!(grid.population(), 5);
}
