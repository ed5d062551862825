//! Caller-facing request parameters.
//!
//! These mirror what an HTTP query string carries: three mutually exclusive
//! record selectors plus optional layout and field settings, all as raw
//! strings. [`PrintParams::into_request`] validates them into a
//! [`PrintTarget`] and a [`LabelRequest`].

use crate::error::PipelineError;
use labelsheet_core::{ItemsPerPage, LabelRequest, PrintShape};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Raw print parameters as received from a caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct PrintParams {
    pub resource_id: Option<String>,
    pub purchase_id: Option<String>,
    pub wishlist_id: Option<String>,
    /// One of 10, 12, 16, 18, 21, 24, 27; anything else means 10.
    pub items_per_page: Option<String>,
    /// Comma-separated field paths.
    pub fields: Option<String>,
    /// JSON object mapping field path to caption.
    pub labels: Option<String>,
}

/// The record a print job is about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PrintTarget {
    pub shape: PrintShape,
    pub id: String,
}

impl PrintParams {
    /// Picks the single record selector that is set.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` when none or more than one selector is set.
    pub fn target(&self) -> Result<PrintTarget, PipelineError> {
        let selectors = [
            (PrintShape::Resource, &self.resource_id),
            (PrintShape::Purchase, &self.purchase_id),
            (PrintShape::Wishlist, &self.wishlist_id),
        ];
        let mut set = selectors.into_iter().filter_map(|(shape, id)| {
            id.as_deref()
                .map(str::trim)
                .filter(|id| !id.is_empty())
                .map(|id| PrintTarget {
                    shape,
                    id: id.to_string(),
                })
        });

        match (set.next(), set.next()) {
            (Some(target), None) => Ok(target),
            (None, _) => Err(PipelineError::InvalidRequest(
                "one of resourceId, purchaseId or wishlistId is required".to_string(),
            )),
            (Some(_), Some(_)) => Err(PipelineError::InvalidRequest(
                "only one of resourceId, purchaseId or wishlistId may be given".to_string(),
            )),
        }
    }

    /// Splits the comma-separated field list. Blank entries are dropped; a
    /// list with nothing left is treated as absent.
    pub fn field_list(&self) -> Option<Vec<String>> {
        let fields: Vec<String> = self
            .fields
            .as_deref()?
            .split(',')
            .map(str::trim)
            .filter(|f| !f.is_empty())
            .map(str::to_string)
            .collect();
        (!fields.is_empty()).then_some(fields)
    }

    /// Parses the caption map.
    ///
    /// # Errors
    ///
    /// `InvalidRequest` if `labels` is not a JSON object of strings.
    pub fn label_map(&self) -> Result<Option<BTreeMap<String, String>>, PipelineError> {
        match self.labels.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(raw) => serde_json::from_str(raw)
                .map(Some)
                .map_err(|e| PipelineError::InvalidRequest(format!("labels: {e}"))),
        }
    }

    pub fn into_request(self) -> Result<(PrintTarget, LabelRequest), PipelineError> {
        let target = self.target()?;
        let request = LabelRequest {
            shape: target.shape,
            items_per_page: ItemsPerPage::parse_lenient(self.items_per_page.as_deref()),
            fields: self.field_list(),
            labels: self.label_map()?,
        };
        Ok((target, request))
    }
}
