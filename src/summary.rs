//! A JSON-friendly digest of a [`LabelSet`], as written by the CLI.

use labelsheet_core::{DisplayField, GridMetrics, LabelSet, PrintShape};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSetSummary {
    pub shape: PrintShape,
    pub grid: GridMetrics,
    pub page_count: usize,
    /// Effective field paths, in display order.
    pub fields: Vec<String>,
    pub labels: Vec<LabelSummary>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LabelSummary {
    pub qr_text: String,
    /// Size of the encoded image, `None` when the label has no QR code.
    pub qr_image_bytes: Option<usize>,
    pub fields: Vec<DisplayField>,
}

impl From<&LabelSet> for LabelSetSummary {
    fn from(set: &LabelSet) -> Self {
        let labels = set
            .cards()
            .into_iter()
            .map(|card| LabelSummary {
                qr_text: card.qr_text.to_string(),
                qr_image_bytes: card.qr_image.map(|image| image.byte_len()),
                fields: card.fields,
            })
            .collect();

        Self {
            shape: set.shape,
            grid: set.grid,
            page_count: set.page_count(),
            fields: set.fields.paths().iter().map(|p| p.as_str().to_string()).collect(),
            labels,
        }
    }
}
