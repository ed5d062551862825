//! The pipeline's output: enriched records plus what the renderer needs to
//! place them.

use crate::fields::{DisplayField, FieldSpec};
use labelsheet_jpath::ValueFormatter;
use labelsheet_traits::QrImage;
use labelsheet_types::{GridMetrics, PrintShape};
use serde_json::Value;

/// One printable label.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelRecord {
    /// The source item, with `qrText` added when it is an object.
    pub record: Value,
    /// Text encoded into the QR code; empty when the item had none.
    pub qr_text: String,
    /// Absent when `qr_text` is empty or encoding failed.
    pub qr_image: Option<QrImage>,
}

impl LabelRecord {
    pub fn display_fields(&self, spec: &FieldSpec, formatter: &ValueFormatter) -> Vec<DisplayField> {
        spec.display(&self.record, formatter)
    }

    pub fn has_qr_image(&self) -> bool {
        self.qr_image.is_some()
    }
}

/// A label with its attribute text already formatted.
#[derive(Debug, Clone, PartialEq)]
pub struct LabelCard<'a> {
    pub qr_text: &'a str,
    pub qr_image: Option<&'a QrImage>,
    pub fields: Vec<DisplayField>,
}

/// Everything the rendering layer consumes for one print job.
#[derive(Debug, Clone)]
pub struct LabelSet {
    pub shape: PrintShape,
    pub records: Vec<LabelRecord>,
    pub fields: FieldSpec,
    pub grid: GridMetrics,
    pub formatter: ValueFormatter,
}

impl LabelSet {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records split into pages of the configured grid capacity. The last
    /// page may be partly empty; it still uses the same grid.
    pub fn pages(&self) -> impl Iterator<Item = &[LabelRecord]> {
        self.records.chunks(self.grid.capacity().max(1))
    }

    pub fn page_count(&self) -> usize {
        self.records.len().div_ceil(self.grid.capacity().max(1))
    }

    /// Formats every record against the effective field spec.
    pub fn cards(&self) -> Vec<LabelCard<'_>> {
        self.records
            .iter()
            .map(|label| LabelCard {
                qr_text: &label.qr_text,
                qr_image: label.qr_image.as_ref(),
                fields: label.display_fields(&self.fields, &self.formatter),
            })
            .collect()
    }
}
