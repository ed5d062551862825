// src/pipeline/orchestrator.rs
use super::context::PipelineContext;
use crate::error::PipelineError;
use crate::request::{PrintParams, PrintTarget};
use labelsheet_core::{LabelConfig, LabelRequest, LabelSet};
use log::{debug, info};
use serde_json::Value;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::{self, JoinSet};

/// Serves label requests against a shared [`PipelineContext`].
///
/// Cheap to clone; clones share the context.
#[derive(Clone, Debug)]
pub struct LabelPipeline {
    context: Arc<PipelineContext>,
}

impl LabelPipeline {
    pub(super) fn new(context: Arc<PipelineContext>) -> Self {
        Self { context }
    }

    pub fn config(&self) -> &LabelConfig {
        self.context.labels.config()
    }

    /// Builds labels from a record the caller already holds, on the current
    /// thread.
    pub fn build_labels(&self, source: Value, request: &LabelRequest) -> Result<LabelSet, PipelineError> {
        let start = Instant::now();
        let set = self.context.labels.build(source, request)?;
        debug!("Built {} labels in {:.2?}", set.len(), start.elapsed());
        Ok(set)
    }

    /// Like [`build_labels`](Self::build_labels), but off the async runtime.
    /// QR encoding is CPU-bound and must not block the reactor.
    pub async fn build_labels_async(
        &self,
        source: Value,
        request: LabelRequest,
    ) -> Result<LabelSet, PipelineError> {
        let pipeline = self.clone();
        task::spawn_blocking(move || pipeline.build_labels(source, &request)).await?
    }

    /// Looks up the target record in the configured source.
    ///
    /// # Errors
    ///
    /// `Config` when no source is configured, `NotFound` when the source
    /// has no such record, `Source` when the lookup itself fails.
    pub async fn fetch(&self, target: &PrintTarget) -> Result<Value, PipelineError> {
        let source = self.context.source.clone().ok_or_else(|| {
            PipelineError::Config("no record source configured".to_string())
        })?;

        let lookup = target.clone();
        let record = task::spawn_blocking(move || source.fetch(lookup.shape, &lookup.id)).await??;

        record.ok_or_else(|| PipelineError::NotFound(format!("{} '{}'", target.shape, target.id)))
    }

    /// Validates caller parameters, fetches the record and builds its labels.
    pub async fn print(&self, params: PrintParams) -> Result<LabelSet, PipelineError> {
        let (target, request) = params.into_request()?;
        info!("Printing {} labels for '{}'", target.shape, target.id);

        let record = self.fetch(&target).await?;
        let set = self.build_labels_async(record, request).await?;
        info!(
            "Finished {} '{}': {} labels on {} pages",
            target.shape,
            target.id,
            set.len(),
            set.page_count()
        );
        Ok(set)
    }

    /// Serves several print jobs concurrently. Results come back in input
    /// order, each job succeeding or failing on its own.
    pub async fn print_all(&self, jobs: Vec<PrintParams>) -> Vec<Result<LabelSet, PipelineError>> {
        let mut tasks: JoinSet<(usize, Result<LabelSet, PipelineError>)> = JoinSet::new();
        let total = jobs.len();
        for (index, params) in jobs.into_iter().enumerate() {
            let pipeline = self.clone();
            tasks.spawn(async move { (index, pipeline.print(params).await) });
        }

        let mut slots: Vec<Option<Result<LabelSet, PipelineError>>> = (0..total).map(|_| None).collect();
        while let Some(joined) = tasks.join_next().await {
            match joined {
                Ok((index, result)) => slots[index] = Some(result),
                // The index is lost with the task; its slot is filled below.
                Err(e) => log::error!("Print task failed: {e}"),
            }
        }

        slots
            .into_iter()
            .map(|slot| slot.unwrap_or_else(|| Err(PipelineError::TaskJoin("print task aborted".to_string()))))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::pipeline::{ExecutorKind, PipelineBuilder};
    use crate::request::PrintParams;
    use labelsheet_core::{InMemoryRecordSource, PrintShape};
    use serde_json::json;
    use std::sync::Arc;

    fn source() -> Arc<InMemoryRecordSource> {
        Arc::new(
            InMemoryRecordSource::new()
                .with(PrintShape::Resource, "R1", json!({ "name": "Drill", "internalId": "R1" }))
                .with(
                    PrintShape::Purchase,
                    "PO-1",
                    json!({ "itemList": [{ "resource": { "name": "Saw", "code": "S-1" } }] }),
                ),
        )
    }

    fn params_for_resource(id: &str) -> PrintParams {
        PrintParams {
            resource_id: Some(id.to_string()),
            ..PrintParams::default()
        }
    }

    #[tokio::test]
    async fn print_fetches_and_builds() {
        let pipeline = PipelineBuilder::new()
            .with_executor(ExecutorKind::Sequential)
            .with_record_source(source())
            .build()
            .unwrap();

        let set = pipeline.print(params_for_resource("R1")).await.unwrap();
        assert_eq!(set.len(), 1);
        assert_eq!(set.records[0].qr_text, "R1");
        assert!(set.records[0].has_qr_image());
    }

    #[tokio::test]
    async fn missing_record_is_not_found() {
        let pipeline = PipelineBuilder::new().with_record_source(source()).build().unwrap();
        let err = pipeline.print(params_for_resource("nope")).await.unwrap_err();
        assert!(err.is_not_found());
        assert!(err.to_string().contains("nope"));
    }

    #[tokio::test]
    async fn printing_without_a_source_is_a_config_error() {
        let pipeline = PipelineBuilder::new().build().unwrap();
        let err = pipeline.print(params_for_resource("R1")).await.unwrap_err();
        assert!(matches!(err, crate::error::PipelineError::Config(_)));
    }

    #[tokio::test]
    async fn print_all_keeps_job_order() {
        let pipeline = PipelineBuilder::new().with_record_source(source()).build().unwrap();
        let jobs = vec![
            PrintParams {
                purchase_id: Some("PO-1".to_string()),
                ..PrintParams::default()
            },
            params_for_resource("missing"),
            params_for_resource("R1"),
        ];

        let results = pipeline.print_all(jobs).await;
        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().records[0].qr_text, "Saw");
        assert!(results[1].as_ref().unwrap_err().is_not_found());
        assert_eq!(results[2].as_ref().unwrap().records[0].qr_text, "R1");
    }
}
