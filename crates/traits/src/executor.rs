//! Executor trait for fanning per-label work out over a batch.
//!
//! The core pipeline never spawns threads itself. Whoever assembles it hands
//! in an executor, which keeps the core usable from a sequential context as
//! well as from a thread pool.

use std::fmt::Debug;

/// Runs a batch of independent work items, possibly in parallel.
///
/// # Implementations
///
/// - `SyncExecutor`: sequential, always available
/// - `RayonExecutor`: work-stealing pool (`labelsheet-executor`, feature `rayon`)
pub trait Executor: Send + Sync + Debug {
    /// Applies `f` to every item. Results come back in input order.
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static;

    /// Scatter/gather over a batch: every item is tagged with its position,
    /// handed to `f`, and the outputs are written back into a pre-sized slot
    /// vector by that position. The output order therefore never depends on
    /// the order in which the work finished.
    fn execute_indexed<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<Option<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(usize, T) -> R + Send + Sync + Clone + 'static,
    {
        let total = items.len();
        let tagged: Vec<(usize, T)> = items.into_iter().enumerate().collect();
        let finished = self.execute_all(tagged, move |(index, item)| (index, f(index, item)));

        let mut slots: Vec<Option<R>> = (0..total).map(|_| None).collect();
        for (index, result) in finished {
            if let Some(slot) = slots.get_mut(index) {
                *slot = Some(result);
            }
        }
        slots
    }

    /// 1 for sequential executors, the pool size otherwise.
    fn parallelism(&self) -> usize;

    /// Human-readable name, for logging.
    fn name(&self) -> &'static str;
}

/// Processes items one after another on the calling thread.
#[derive(Debug, Clone, Default)]
pub struct SyncExecutor;

impl SyncExecutor {
    pub fn new() -> Self {
        Self
    }
}

impl Executor for SyncExecutor {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        items.into_iter().map(f).collect()
    }

    fn parallelism(&self) -> usize {
        1
    }

    fn name(&self) -> &'static str {
        "SyncExecutor"
    }
}
