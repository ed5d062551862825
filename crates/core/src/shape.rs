//! Flattens the three accepted input shapes into one list of item records.

use crate::error::LabelError;
use labelsheet_types::PrintShape;
use log::{debug, warn};
use serde_json::Value;

const RESOURCE_KEY: &str = "resource";

/// Extracts the printable items from `source` according to `shape`.
///
/// - `Resource`: the record itself, or each element if it is a sequence.
/// - `Purchase` / `Wishlist`: `resource` of every entry under `itemList` /
///   `items`. Entries without a `resource` object are skipped. A missing or
///   null collection yields no items.
///
/// # Errors
///
/// `NotFound` if `source` is null, `InvalidArgument` if a collection shape is
/// not an object or its collection is not a sequence.
pub fn extract_items(source: Value, shape: PrintShape) -> Result<Vec<Value>, LabelError> {
    if source.is_null() {
        return Err(LabelError::NotFound(format!("{shape} record")));
    }

    let Some(collection_key) = shape.collection_key() else {
        return Ok(match source {
            Value::Array(elements) => elements,
            single => vec![single],
        });
    };

    let Value::Object(mut record) = source else {
        return Err(LabelError::InvalidArgument(format!(
            "{shape} record must be an object"
        )));
    };

    let entries = match record.remove(collection_key) {
        None | Some(Value::Null) => {
            debug!("{shape} record has no '{collection_key}', nothing to print");
            return Ok(Vec::new());
        }
        Some(Value::Array(entries)) => entries,
        Some(_) => {
            return Err(LabelError::InvalidArgument(format!(
                "'{collection_key}' of a {shape} record must be a list"
            )));
        }
    };

    let mut items = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        match entry {
            Value::Object(mut line) => match line.remove(RESOURCE_KEY) {
                Some(resource @ Value::Object(_)) => items.push(resource),
                _ => warn!("{shape} entry {index} has no '{RESOURCE_KEY}', skipping"),
            },
            _ => warn!("{shape} entry {index} is not an object, skipping"),
        }
    }
    Ok(items)
}
