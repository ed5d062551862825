// src/error.rs
use labelsheet_core::{LabelError, SourceError};
use thiserror::Error;

/// Errors surfaced by the platform-level pipeline.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("Label generation failed: {0}")]
    Label(#[from] LabelError),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Record source failed: {0}")]
    Source(#[from] SourceError),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Background task failed: {0}")]
    TaskJoin(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// True for errors a caller fixes by changing the request.
    pub fn is_invalid_argument(&self) -> bool {
        match self {
            PipelineError::InvalidRequest(_) => true,
            PipelineError::Label(e) => e.is_invalid_argument(),
            _ => false,
        }
    }

    /// True when the requested record does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            PipelineError::NotFound(_) | PipelineError::Label(LabelError::NotFound(_))
        )
    }
}

impl From<tokio::task::JoinError> for PipelineError {
    fn from(e: tokio::task::JoinError) -> Self {
        PipelineError::TaskJoin(e.to_string())
    }
}
