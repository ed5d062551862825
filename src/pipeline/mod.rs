//! Label pipeline orchestration.
//!
//! - [`PipelineBuilder`]: fluent builder for a [`LabelPipeline`]
//! - [`ExecutorKind`]: sequential or parallel QR generation
//!
//! # Example
//!
//! ```ignore
//! use labelsheet::{PipelineBuilder, PrintParams};
//!
//! let pipeline = PipelineBuilder::new()
//!     .with_record_source(source)
//!     .build()?;
//!
//! let labels = pipeline.print(params).await?;
//! ```

mod builder;
pub mod config;
pub mod context;
mod orchestrator;

pub use builder::PipelineBuilder;
pub use config::ExecutorKind;
pub use context::PipelineContext;
pub use orchestrator::LabelPipeline;
