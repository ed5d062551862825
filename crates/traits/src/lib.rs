pub mod executor;
pub mod qr;
pub mod source;

pub use executor::{Executor, SyncExecutor};
pub use qr::{EcLevel, QrBackend, QrError, QrImage, QrSymbolConfig, SharedImageData};
pub use source::{InMemoryRecordSource, RecordSource, SourceError};
