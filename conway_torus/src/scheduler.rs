// scheduler.rs - Parallel generation update: row-range tasks over a frozen snapshot

use std::num::NonZeroUsize;
use std::ops::Range;
use std::sync::Arc;
use std::thread;

use tokio::runtime::{Builder, Runtime};
use tokio::task::JoinHandle;

use crate::error::{Result, SchedulerError};
use crate::grid::{check_size, Cell, Grid};
use crate::rules::next_state;
use crate::topology::count_alive_neighbors;

/// How the rows of a generation are split into tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Partition {
    /// One task per row.
    #[default]
    PerRow,
    /// One contiguous block of rows per worker thread.
    PerWorker,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchedulerConfig {
    pub size: usize,
    /// Worker threads; 0 means every available processing unit.
    pub workers: usize,
    pub partition: Partition,
}

impl SchedulerConfig {
    pub fn new(size: usize) -> Self {
        Self { size, workers: 0, partition: Partition::default() }
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }
}

/// Computes generation G+1 from generation G on a private worker pool.
///
/// Every task reads the shared input snapshot and produces the cells for its
/// own rows only, so the output needs no locking; `advance` returns once all
/// tasks have been joined.
pub struct GenerationScheduler {
    runtime: Runtime,
    size: usize,
    workers: usize,
    partition: Partition,
}

impl GenerationScheduler {
    pub fn new(config: SchedulerConfig) -> Result<Self> {
        check_size(config.size)?;
        let workers = resolve_workers(config.workers);
        let runtime = Builder::new_multi_thread()
            .worker_threads(workers)
            .thread_name("generation-worker")
            .build()
            .map_err(SchedulerError::Runtime)?;

        log::info!(
            "Generation scheduler ready: {0}x{0} grid, {1} workers, {2:?} partition",
            config.size,
            workers,
            config.partition
        );
        Ok(Self { runtime, size: config.size, workers, partition: config.partition })
    }

    /// Worker threads actually running, after resolving 0 to the machine's parallelism.
    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Row ranges handed to tasks, in row order.
    pub fn row_ranges(&self) -> Vec<Range<usize>> {
        let tasks = match self.partition {
            Partition::PerRow => self.size,
            Partition::PerWorker => self.workers,
        };
        partition_rows(self.size, tasks)
    }

    /// Produces the next generation. `grid` itself is never written.
    pub fn advance(&self, grid: &Arc<Grid>) -> Result<Arc<Grid>, SchedulerError> {
        if grid.size() != self.size {
            return Err(SchedulerError::SizeMismatch { expected: self.size, found: grid.size() });
        }

        self.runtime.block_on(async {
            // Spawn every range at once; each task owns a handle to the snapshot
            let mut handles = Vec::new();
            for rows in self.row_ranges() {
                let handle = tokio::spawn(process_rows(Arc::clone(grid), rows.clone()));
                handles.push((rows, handle));
            }
            join_rows(Grid::dead(self.size), handles).await.map(Arc::new)
        })
    }
}

/// Awaits every task in order, copying each finished block into `next_grid`.
///
/// The first failed task aborts the ones still pending and discards the grid.
async fn join_rows(
    mut next_grid: Grid,
    handles: Vec<(Range<usize>, JoinHandle<Vec<Cell>>)>,
) -> Result<Grid, SchedulerError> {
    let mut pending = handles.into_iter();
    while let Some((rows, handle)) = pending.next() {
        match handle.await {
            Ok(cells) => next_grid.rows_mut(rows).copy_from_slice(&cells),
            Err(source) => {
                for (_, rest) in pending {
                    rest.abort();
                }
                return Err(SchedulerError::Worker {
                    first_row: rows.start,
                    end_row: rows.end,
                    source,
                });
            }
        }
    }
    Ok(next_grid)
}

/// Next-generation cells for `rows`, row-major.
async fn process_rows(grid: Arc<Grid>, rows: Range<usize>) -> Vec<Cell> {
    let size = grid.size();
    let mut cells = Vec::with_capacity(rows.len() * size);
    for row in rows {
        for col in 0..size {
            let count = count_alive_neighbors(&grid, row, col);
            cells.push(next_state(grid.get(row, col), count));
        }
        tokio::task::yield_now().await; // Let sibling rows make progress
    }
    cells
}

fn resolve_workers(requested: usize) -> usize {
    if requested > 0 {
        return requested;
    }
    thread::available_parallelism().map_or(1, NonZeroUsize::get)
}

/// Splits `0..size` into `tasks` contiguous ranges whose lengths differ by at most one.
fn partition_rows(size: usize, tasks: usize) -> Vec<Range<usize>> {
    let tasks = tasks.clamp(1, size.max(1));
    let base = size / tasks;
    let extra = size % tasks;
    let mut start = 0;
    (0..tasks)
        .map(|i| {
            let len = base + usize::from(i < extra);
            let rows = start..start + len;
            start += len;
            rows
        })
        .collect()
}
