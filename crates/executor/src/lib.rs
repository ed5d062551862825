//! Executors used to fan QR generation out over a label batch.
//!
//! - [`RayonExecutor`]: work-stealing thread pool (feature: `rayon`)
//! - [`SyncExecutor`]: sequential, re-exported from `labelsheet-traits`
//!
//! ```ignore
//! use labelsheet_executor::ExecutorImpl;
//! use labelsheet_traits::Executor;
//!
//! let executor = ExecutorImpl::default();
//! let images = executor.execute_indexed(texts, |_, text| encode(&text));
//! ```

#[cfg(feature = "rayon")]
mod rayon_executor;

#[cfg(feature = "rayon")]
pub use rayon_executor::RayonExecutor;

pub use labelsheet_traits::{Executor, SyncExecutor};

/// The executor a label pipeline fans its QR batches out over.
///
/// `Executor` has generic methods and so cannot be a trait object; the
/// pipeline stores this enum instead of being generic over the executor.
#[derive(Clone, Debug)]
pub enum ExecutorImpl {
    Sync(SyncExecutor),

    #[cfg(feature = "rayon")]
    Rayon(RayonExecutor),
}

impl ExecutorImpl {
    /// Encodes every label on the calling thread.
    pub fn sequential() -> Self {
        ExecutorImpl::Sync(SyncExecutor::new())
    }

    /// Encodes labels on rayon's pool, or sequentially when the `rayon`
    /// feature is off.
    pub fn parallel() -> Self {
        #[cfg(feature = "rayon")]
        {
            let executor = RayonExecutor::new();
            log::debug!("QR batches run on rayon with {} threads", executor.parallelism());
            ExecutorImpl::Rayon(executor)
        }
        #[cfg(not(feature = "rayon"))]
        {
            log::warn!("Parallel QR generation requested but the rayon feature is off; running sequentially");
            Self::sequential()
        }
    }

    pub fn is_parallel(&self) -> bool {
        self.parallelism() > 1
    }
}

impl Executor for ExecutorImpl {
    fn execute_all<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<R>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(T) -> R + Send + Sync + Clone + 'static,
    {
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_all(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_all(items, f),
        }
    }

    /// A batch of one label (a single resource print) stays on the calling
    /// thread; larger batches go to the configured executor.
    fn execute_indexed<T, R, F>(&self, items: Vec<T>, f: F) -> Vec<Option<R>>
    where
        T: Send + 'static,
        R: Send + 'static,
        F: Fn(usize, T) -> R + Send + Sync + Clone + 'static,
    {
        if items.len() <= 1 {
            return SyncExecutor::new().execute_indexed(items, f);
        }
        log::trace!("Scattering {} labels over {}", items.len(), self.name());
        match self {
            ExecutorImpl::Sync(exec) => exec.execute_indexed(items, f),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.execute_indexed(items, f),
        }
    }

    fn parallelism(&self) -> usize {
        match self {
            ExecutorImpl::Sync(exec) => exec.parallelism(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.parallelism(),
        }
    }

    fn name(&self) -> &'static str {
        match self {
            ExecutorImpl::Sync(exec) => exec.name(),
            #[cfg(feature = "rayon")]
            ExecutorImpl::Rayon(exec) => exec.name(),
        }
    }
}

impl Default for ExecutorImpl {
    fn default() -> Self {
        Self::parallel()
    }
}
