use labelsheet_core::{LabelSetBuilder, RecordSource};
use labelsheet_executor::ExecutorImpl;
use std::sync::Arc;

/// Shared, read-only state for every request a pipeline serves.
///
/// Created once by the `PipelineBuilder`; requests only ever borrow it.
#[derive(Clone, Debug)]
pub struct PipelineContext {
    pub labels: Arc<LabelSetBuilder<ExecutorImpl>>,
    /// Where records are fetched from by id. Optional: callers that already
    /// hold the raw record can build from it directly.
    pub source: Option<Arc<dyn RecordSource>>,
}
