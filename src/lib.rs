//! # labelsheet
//!
//! Turns resource, purchase and wishlist records into printable QR label
//! sets.
//!
//! The heavy lifting lives in `labelsheet-core`; this crate adds the async
//! [`LabelPipeline`], caller-facing request parsing and the CLI.
//!
//! ```ignore
//! use labelsheet::{PipelineBuilder, PrintParams};
//!
//! let pipeline = PipelineBuilder::new().with_record_source(source).build()?;
//! let labels = pipeline.print(PrintParams {
//!     purchase_id: Some("PO-1".into()),
//!     ..Default::default()
//! }).await?;
//! ```

pub mod error;
pub mod pipeline;
pub mod request;
pub mod summary;

pub use error::PipelineError;
pub use pipeline::{ExecutorKind, LabelPipeline, PipelineBuilder};
pub use request::{PrintParams, PrintTarget};
pub use summary::{LabelSetSummary, LabelSummary};

pub use labelsheet_core::{
    DisplayField, FieldSpec, GridMetrics, InMemoryRecordSource, ItemsPerPage, LabelConfig, LabelError,
    LabelRecord, LabelRequest, LabelSet, Orientation, PrintShape, QrBackend, QrError, QrImage, QrSymbolConfig,
    RecordSource,
};
