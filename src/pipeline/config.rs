/// Selects how the QR batch of each request is fanned out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExecutorKind {
    /// One item after another on the calling thread.
    Sequential,
    /// Rayon's work-stealing pool. Falls back to sequential when the
    /// `rayon-executor` feature is off.
    #[default]
    Parallel,
}
