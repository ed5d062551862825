//! QR image backend seam.
//!
//! The pipeline treats QR encoding as a black box: text goes in together with
//! a fixed symbol configuration, an image (or an error) comes out.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::sync::Arc;
use thiserror::Error;

/// Encoded image bytes, shared between label records without copying.
pub type SharedImageData = Arc<Vec<u8>>;

#[derive(Error, Debug, Clone)]
pub enum QrError {
    #[error("Cannot encode empty text")]
    EmptyText,

    #[error("QR encoding failed for '{text}': {message}")]
    Encode { text: String, message: String },

    #[error("QR image output failed: {0}")]
    Image(String),
}

/// Error correction level of the symbol.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum EcLevel {
    L,
    #[default]
    M,
    Q,
    H,
}

/// Symbol settings shared by every code in one batch.
///
/// The settings never depend on the text being encoded, so every label on a
/// sheet gets a QR image of identical pixel size and quiet zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct QrSymbolConfig {
    /// Edge length of the square output image, in pixels.
    pub size_px: u32,
    /// Quiet zone around the symbol, in modules.
    pub margin: u32,
    pub error_correction: EcLevel,
}

impl Default for QrSymbolConfig {
    fn default() -> Self {
        Self {
            size_px: 200,
            margin: 1,
            error_correction: EcLevel::M,
        }
    }
}

/// A rendered QR code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    /// PNG-encoded image bytes.
    pub data: SharedImageData,
    pub width: u32,
    pub height: u32,
}

impl QrImage {
    pub fn new(data: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            data: Arc::new(data),
            width,
            height,
        }
    }

    pub fn byte_len(&self) -> usize {
        self.data.len()
    }
}

/// Something that can turn text into a QR image.
///
/// Implementations must be safe to call from several threads at once; the
/// generator fans a whole batch out over an executor.
pub trait QrBackend: Send + Sync + Debug {
    fn encode(&self, text: &str, symbol: &QrSymbolConfig) -> Result<QrImage, QrError>;

    /// Human-readable name, for logging.
    fn name(&self) -> &'static str;
}
