// src/pipeline/builder.rs
use super::config::ExecutorKind;
use super::context::PipelineContext;
use super::orchestrator::LabelPipeline;
use crate::error::PipelineError;
use labelsheet_core::{Executor, LabelConfig, LabelSetBuilder, QrBackend, RecordSource};
use labelsheet_executor::ExecutorImpl;
use std::path::Path;
use std::sync::Arc;

/// A builder for creating a `LabelPipeline`.
#[derive(Debug, Default)]
pub struct PipelineBuilder {
    config: LabelConfig,
    executor: ExecutorKind,
    qr_backend: Option<Arc<dyn QrBackend>>,
    source: Option<Arc<dyn RecordSource>>,
}

impl PipelineBuilder {
    /// Creates a builder with the default configuration, parallel QR
    /// generation, the PNG backend and no record source.
    pub fn new() -> Self {
        Default::default()
    }

    pub fn with_config(mut self, config: LabelConfig) -> Self {
        self.config = config;
        self
    }

    /// Loads the configuration from a JSON file.
    pub fn with_config_file<P: AsRef<Path>>(mut self, path: P) -> Result<Self, PipelineError> {
        self.config = LabelConfig::from_file(path)?;
        Ok(self)
    }

    pub fn with_executor(mut self, kind: ExecutorKind) -> Self {
        self.executor = kind;
        self
    }

    /// Replaces the PNG backend, e.g. with one producing SVG or a test double.
    pub fn with_qr_backend(mut self, backend: Arc<dyn QrBackend>) -> Self {
        self.qr_backend = Some(backend);
        self
    }

    pub fn with_record_source(mut self, source: Arc<dyn RecordSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Validates the configuration and creates the `LabelPipeline`.
    pub fn build(self) -> Result<LabelPipeline, PipelineError> {
        let executor = self.select_executor();
        log::info!(
            "Building label pipeline with {} ({} threads)",
            executor.name(),
            executor.parallelism()
        );

        let mut labels = LabelSetBuilder::new(self.config, executor)?;
        if let Some(backend) = self.qr_backend {
            log::debug!("Using QR backend {}", backend.name());
            labels = labels.with_backend(backend);
        }

        Ok(LabelPipeline::new(Arc::new(PipelineContext {
            labels: Arc::new(labels),
            source: self.source,
        })))
    }

    fn select_executor(&self) -> ExecutorImpl {
        match self.executor {
            ExecutorKind::Sequential => ExecutorImpl::sequential(),
            ExecutorKind::Parallel => ExecutorImpl::parallel(),
        }
    }
}
