//! # labelsheet-core
//!
//! Platform-agnostic record-to-label pipeline.
//!
//! - **shape**: flattens resource / purchase / wishlist input into items
//! - **qr_text**: picks the text each item's QR code encodes
//! - **qr**: renders QR images for a whole batch over an [`Executor`]
//! - **grid**: maps a page capacity onto columns, rows and sizing
//! - **fields**: which attributes a label prints and under which caption
//! - **builder**: ties the steps together into a [`LabelSet`]
//!
//! ## Design Principle
//!
//! No async runtime and no thread pool live here. Parallelism comes in
//! through the [`Executor`] trait, QR encoding through [`QrBackend`], and
//! data access through [`RecordSource`], so the platform layer decides how
//! each is provided.

// Re-export foundation crates
pub use labelsheet_jpath as jpath;
pub use labelsheet_traits as traits;
pub use labelsheet_types as types;

pub mod builder;
pub mod config;
pub mod error;
pub mod fields;
pub mod grid;
pub mod label;
pub mod qr;
pub mod qr_text;
pub mod shape;

pub use builder::{LabelRequest, LabelSetBuilder};
pub use config::{DEFAULT_FIELDS, LabelConfig};
pub use error::LabelError;
pub use fields::{DisplayField, FieldSpec};
pub use grid::GridLayoutPlanner;
pub use label::{LabelCard, LabelRecord, LabelSet};
pub use qr::{PngQrBackend, QrCodeGenerator};
pub use qr_text::{QR_TEXT_CANDIDATES, QR_TEXT_KEY, QrTextSelector};
pub use shape::extract_items;

pub use jpath::{FieldPath, ValueFormatter};
pub use traits::{
    EcLevel, Executor, InMemoryRecordSource, QrBackend, QrError, QrImage, QrSymbolConfig, RecordSource,
    SourceError, SyncExecutor,
};
pub use types::{GridMetrics, ItemsPerPage, Orientation, PrintShape};
