//! RecordSource trait for the upstream data store.
//!
//! How records are fetched (database, HTTP, files) is outside the pipeline.
//! A source answers one question: given a print shape and an opaque
//! identifier, what is the raw record?

use labelsheet_types::PrintShape;
use serde_json::Value;
use std::collections::HashMap;
use std::fmt::Debug;
use std::sync::RwLock;
use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SourceError {
    #[error("Failed to fetch {shape} '{id}': {message}")]
    FetchFailed {
        shape: PrintShape,
        id: String,
        message: String,
    },

    #[error("Record source unavailable: {0}")]
    Unavailable(String),
}

/// Supplies raw records to the pipeline.
///
/// `Ok(None)` means the store has no such record. Callers surface that as a
/// not-found condition, which is distinct from a failing store (`Err`).
pub trait RecordSource: Send + Sync + Debug {
    fn fetch(&self, shape: PrintShape, id: &str) -> Result<Option<Value>, SourceError>;

    /// Human-readable name, for logging.
    fn name(&self) -> &'static str;
}

/// A record source backed by a map, populated up front.
#[derive(Debug, Default)]
pub struct InMemoryRecordSource {
    records: RwLock<HashMap<(PrintShape, String), Value>>,
}

impl InMemoryRecordSource {
    pub fn new() -> Self {
        Self::default()
    }

    /// Stores a record, replacing any previous record under the same key.
    ///
    /// # Errors
    ///
    /// Returns `SourceError::Unavailable` if the internal lock is poisoned.
    pub fn insert(
        &self,
        shape: PrintShape,
        id: impl Into<String>,
        record: Value,
    ) -> Result<(), SourceError> {
        let mut records = self
            .records
            .write()
            .map_err(|_| SourceError::Unavailable("record store lock poisoned".to_string()))?;
        records.insert((shape, id.into()), record);
        Ok(())
    }

    /// Builder-style insert for fixtures.
    pub fn with(self, shape: PrintShape, id: impl Into<String>, record: Value) -> Self {
        if let Ok(mut records) = self.records.write() {
            records.insert((shape, id.into()), record);
        }
        self
    }

    /// Returns 0 if the lock is poisoned.
    pub fn len(&self) -> usize {
        self.records.read().map(|r| r.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSource for InMemoryRecordSource {
    fn fetch(&self, shape: PrintShape, id: &str) -> Result<Option<Value>, SourceError> {
        let records = self
            .records
            .read()
            .map_err(|_| SourceError::FetchFailed {
                shape,
                id: id.to_string(),
                message: "record store lock poisoned".to_string(),
            })?;
        Ok(records.get(&(shape, id.to_string())).cloned())
    }

    fn name(&self) -> &'static str {
        "InMemoryRecordSource"
    }
}
