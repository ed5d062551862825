//! Error types for label-set construction.

use labelsheet_jpath::JPathError;
use labelsheet_types::UnknownShape;
use thiserror::Error;

/// Fatal, request-level failures.
///
/// Data-quality problems (missing fields, a QR code that fails to encode)
/// never show up here; they degrade to placeholders and absent images.
#[derive(Error, Debug)]
pub enum LabelError {
    #[error("Invalid print type '{given}', allowed values are: {allowed}")]
    InvalidShape { given: String, allowed: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Invalid field path: {0}")]
    InvalidFieldPath(#[from] JPathError),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("JSON serialization/deserialization error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<UnknownShape> for LabelError {
    fn from(e: UnknownShape) -> Self {
        LabelError::InvalidShape {
            given: e.given,
            allowed: e.allowed,
        }
    }
}

impl LabelError {
    /// True for errors caused by what the caller asked for, as opposed to
    /// missing data or environment failures.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            LabelError::InvalidShape { .. }
                | LabelError::InvalidArgument(_)
                | LabelError::InvalidFieldPath(_)
        )
    }
}
