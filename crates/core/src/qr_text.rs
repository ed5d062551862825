//! Chooses the text encoded into each label's QR code.

use labelsheet_jpath::{is_present, to_text};
use serde_json::Value;

/// Key under which the chosen text is stored on a merged label record.
pub const QR_TEXT_KEY: &str = "qrText";

/// Fields consulted, in priority order.
pub const QR_TEXT_CANDIDATES: [&str; 4] = ["qrCode", "barCode", "internalId", "name"];

/// Picks QR text by walking an ordered list of candidate fields and taking
/// the first one that is present (not absent, null, `false`, `0` or `""`).
///
/// A record that already carries `qrText` keeps it, so selecting twice over
/// the same record never changes the answer.
#[derive(Debug, Clone)]
pub struct QrTextSelector {
    candidates: Vec<String>,
}

impl Default for QrTextSelector {
    fn default() -> Self {
        Self::new(QR_TEXT_CANDIDATES)
    }
}

impl QrTextSelector {
    pub fn new<I, S>(candidates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            candidates: candidates.into_iter().map(Into::into).collect(),
        }
    }

    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// Returns the text to encode, or an empty string if no candidate is set.
    pub fn select(&self, item: &Value) -> String {
        std::iter::once(QR_TEXT_KEY)
            .chain(self.candidates.iter().map(String::as_str))
            .filter_map(|key| item.get(key))
            .find(|value| is_present(value))
            .map(to_text)
            .unwrap_or_default()
    }
}
