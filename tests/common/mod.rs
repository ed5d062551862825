pub mod fixtures;

use labelsheet::{ExecutorKind, InMemoryRecordSource, LabelPipeline, PipelineBuilder, PrintParams, PrintShape};
use std::sync::Arc;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Routes pipeline logs to the test output; safe to call from every test.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A source holding one record of each shape.
pub fn populated_source() -> Arc<InMemoryRecordSource> {
    Arc::new(
        InMemoryRecordSource::new()
            .with(PrintShape::Resource, "R-1001", fixtures::drill())
            .with(PrintShape::Purchase, "PO-1", fixtures::purchase_order())
            .with(PrintShape::Wishlist, "W-1", fixtures::wishlist(19)),
    )
}

pub fn pipeline() -> LabelPipeline {
    init_logging();
    PipelineBuilder::new()
        .with_executor(ExecutorKind::Parallel)
        .with_record_source(populated_source())
        .build()
        .expect("default pipeline builds")
}

pub fn params(shape: PrintShape, id: &str) -> PrintParams {
    let id = Some(id.to_string());
    match shape {
        PrintShape::Resource => PrintParams {
            resource_id: id,
            ..PrintParams::default()
        },
        PrintShape::Purchase => PrintParams {
            purchase_id: id,
            ..PrintParams::default()
        },
        PrintShape::Wishlist => PrintParams {
            wishlist_id: id,
            ..PrintParams::default()
        },
    }
}
