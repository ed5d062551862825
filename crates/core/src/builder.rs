//! Top-level assembly of a label set from raw source data.

use crate::config::LabelConfig;
use crate::error::LabelError;
use crate::fields::FieldSpec;
use crate::grid::GridLayoutPlanner;
use crate::label::{LabelRecord, LabelSet};
use crate::qr::QrCodeGenerator;
use crate::qr_text::{QR_TEXT_KEY, QrTextSelector};
use crate::shape::extract_items;
use labelsheet_traits::{Executor, QrBackend};
use labelsheet_types::{ItemsPerPage, PrintShape};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;
use std::sync::Arc;

/// What the caller asked for.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelRequest {
    pub shape: PrintShape,
    #[serde(default)]
    pub items_per_page: ItemsPerPage,
    /// Ordered field paths; `None` or empty means the configured defaults.
    #[serde(default)]
    pub fields: Option<Vec<String>>,
    /// Path → caption; `None` means the configured default captions.
    #[serde(default)]
    pub labels: Option<BTreeMap<String, String>>,
}

impl LabelRequest {
    pub fn new(shape: PrintShape) -> Self {
        Self {
            shape,
            items_per_page: ItemsPerPage::default(),
            fields: None,
            labels: None,
        }
    }

    /// Starts a request from a raw discriminator such as `"purchase"`.
    ///
    /// # Errors
    ///
    /// `InvalidShape`, naming the accepted values, for anything else.
    pub fn for_discriminator(discriminator: &str) -> Result<Self, LabelError> {
        Ok(Self::new(discriminator.parse::<PrintShape>()?))
    }

    pub fn with_items_per_page(mut self, requested: u32) -> Self {
        self.items_per_page = ItemsPerPage::from_requested(requested);
        self
    }

    pub fn with_fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_labels(mut self, labels: BTreeMap<String, String>) -> Self {
        self.labels = Some(labels);
        self
    }
}

/// Turns raw source data into a [`LabelSet`].
///
/// A builder holds no per-request state; one instance can serve any number
/// of requests, concurrently if the executor allows.
#[derive(Debug, Clone)]
pub struct LabelSetBuilder<E: Executor> {
    config: LabelConfig,
    selector: QrTextSelector,
    generator: QrCodeGenerator,
    executor: E,
}

impl<E: Executor> LabelSetBuilder<E> {
    /// A builder rendering QR codes as PNG with the configured symbol settings.
    ///
    /// # Errors
    ///
    /// `Config` if `config` fails [`LabelConfig::validate`].
    pub fn new(config: LabelConfig, executor: E) -> Result<Self, LabelError> {
        config.validate()?;
        let generator = QrCodeGenerator::png(config.qr.clone());
        Ok(Self {
            config,
            selector: QrTextSelector::default(),
            generator,
            executor,
        })
    }

    pub fn with_backend(mut self, backend: Arc<dyn QrBackend>) -> Self {
        self.generator = QrCodeGenerator::new(backend, self.config.qr.clone());
        self
    }

    pub fn with_selector(mut self, selector: QrTextSelector) -> Self {
        self.selector = selector;
        self
    }

    pub fn config(&self) -> &LabelConfig {
        &self.config
    }

    pub fn executor(&self) -> &E {
        &self.executor
    }

    /// Builds the label set for one request.
    ///
    /// # Errors
    ///
    /// Fails only on structural problems: a null source (`NotFound`), a
    /// source that does not match the requested shape, or a syntactically
    /// invalid field path. Missing fields and failed QR codes degrade per
    /// item instead.
    pub fn build(&self, source: Value, request: &LabelRequest) -> Result<LabelSet, LabelError> {
        let items = extract_items(source, request.shape)?;
        let fields = FieldSpec::resolve(
            request.fields.as_deref(),
            request.labels.as_ref(),
            &self.config,
        )?;
        debug!(
            "Extracted {} {} items, {} fields per label",
            items.len(),
            request.shape,
            fields.len()
        );

        let texts: Vec<String> = items.iter().map(|item| self.selector.select(item)).collect();
        let images = self.generator.generate_batch(&self.executor, texts.clone());

        let records: Vec<LabelRecord> = items
            .into_iter()
            .zip(texts)
            .zip(images)
            .map(|((mut record, qr_text), qr_image)| {
                if let Value::Object(map) = &mut record {
                    map.insert(QR_TEXT_KEY.to_string(), Value::String(qr_text.clone()));
                }
                LabelRecord {
                    record,
                    qr_text,
                    qr_image,
                }
            })
            .collect();

        let grid = GridLayoutPlanner::plan(request.items_per_page);
        info!(
            "Built {} {} labels on a {}x{} grid ({} missing QR images)",
            records.len(),
            request.shape,
            grid.columns,
            grid.rows,
            records.iter().filter(|r| !r.has_qr_image()).count()
        );

        Ok(LabelSet {
            shape: request.shape,
            records,
            fields,
            grid,
            formatter: self.config.format.clone(),
        })
    }
}
