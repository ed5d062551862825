//! QR image generation for a batch of labels.

use image::{DynamicImage, GrayImage, ImageFormat, Luma, imageops};
use labelsheet_traits::{EcLevel, Executor, QrBackend, QrError, QrImage, QrSymbolConfig};
use log::{debug, warn};
use qrcode::QrCode;
use std::io::Cursor;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

/// Encodes QR symbols with the `qrcode` crate and writes them out as
/// grayscale PNG.
///
/// Every image is exactly `size_px` square. The symbol is scaled by a whole
/// number of pixels per module and centred, with at least `margin` modules
/// of white around it.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngQrBackend;

impl PngQrBackend {
    pub fn new() -> Self {
        Self
    }
}

fn ec_level(level: EcLevel) -> qrcode::EcLevel {
    match level {
        EcLevel::L => qrcode::EcLevel::L,
        EcLevel::M => qrcode::EcLevel::M,
        EcLevel::Q => qrcode::EcLevel::Q,
        EcLevel::H => qrcode::EcLevel::H,
    }
}

impl QrBackend for PngQrBackend {
    fn encode(&self, text: &str, symbol: &QrSymbolConfig) -> Result<QrImage, QrError> {
        if text.is_empty() {
            return Err(QrError::EmptyText);
        }

        let code = QrCode::with_error_correction_level(text.as_bytes(), ec_level(symbol.error_correction))
            .map_err(|e| QrError::Encode {
                text: text.to_string(),
                message: e.to_string(),
            })?;

        let modules = code.width() as u32;
        let module_px = symbol
            .margin
            .checked_mul(2)
            .and_then(|margin| margin.checked_add(modules))
            .map(|total_modules| symbol.size_px / total_modules)
            .filter(|&px| px > 0)
            .ok_or_else(|| {
                QrError::Image(format!(
                    "a {modules}-module symbol with a {}-module margin does not fit into {}px",
                    symbol.margin, symbol.size_px
                ))
            })?;

        let rendered = code
            .render::<Luma<u8>>()
            .quiet_zone(false)
            .module_dimensions(module_px, module_px)
            .build();

        let mut canvas = GrayImage::from_pixel(symbol.size_px, symbol.size_px, Luma([255u8]));
        let offset = i64::from(symbol.size_px.saturating_sub(rendered.width()) / 2);
        imageops::overlay(&mut canvas, &rendered, offset, offset);

        let mut bytes = Vec::new();
        DynamicImage::ImageLuma8(canvas)
            .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)
            .map_err(|e| QrError::Image(e.to_string()))?;

        Ok(QrImage::new(bytes, symbol.size_px, symbol.size_px))
    }

    fn name(&self) -> &'static str {
        "PngQrBackend"
    }
}

/// Produces QR images for label records.
///
/// Empty text yields no image. A failing (or panicking) backend call is
/// logged and also yields no image; it never aborts the rest of the batch.
#[derive(Debug, Clone)]
pub struct QrCodeGenerator {
    backend: Arc<dyn QrBackend>,
    symbol: QrSymbolConfig,
}

impl QrCodeGenerator {
    pub fn new(backend: Arc<dyn QrBackend>, symbol: QrSymbolConfig) -> Self {
        Self { backend, symbol }
    }

    /// A generator using [`PngQrBackend`].
    pub fn png(symbol: QrSymbolConfig) -> Self {
        Self::new(Arc::new(PngQrBackend::new()), symbol)
    }

    pub fn symbol(&self) -> &QrSymbolConfig {
        &self.symbol
    }

    pub fn generate(&self, text: &str) -> Option<QrImage> {
        encode_one(self.backend.as_ref(), &self.symbol, 0, text)
    }

    /// Generates one image per text across `executor`.
    ///
    /// The output has the same length as `texts` and position `i` always
    /// belongs to `texts[i]`, whatever order the work completes in.
    pub fn generate_batch<E: Executor>(&self, executor: &E, texts: Vec<String>) -> Vec<Option<QrImage>> {
        debug!(
            "Generating {} QR codes with {} on {}",
            texts.len(),
            self.backend.name(),
            executor.name()
        );
        let backend = Arc::clone(&self.backend);
        let symbol = self.symbol.clone();
        executor
            .execute_indexed(texts, move |index, text| {
                encode_one(backend.as_ref(), &symbol, index, &text)
            })
            .into_iter()
            .map(Option::flatten)
            .collect()
    }
}

fn encode_one(backend: &dyn QrBackend, symbol: &QrSymbolConfig, index: usize, text: &str) -> Option<QrImage> {
    if text.is_empty() {
        return None;
    }
    match panic::catch_unwind(AssertUnwindSafe(|| backend.encode(text, symbol))) {
        Ok(Ok(image)) => Some(image),
        Ok(Err(e)) => {
            warn!("QR generation failed for item {index}: {e}");
            None
        }
        Err(_) => {
            warn!("QR backend {} panicked on item {index}", backend.name());
            None
        }
    }
}
