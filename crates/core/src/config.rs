//! Pipeline configuration.

use crate::error::LabelError;
use labelsheet_jpath::{FieldPath, ValueFormatter};
use labelsheet_traits::QrSymbolConfig;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// Fields printed when the caller does not choose any, in display order.
pub const DEFAULT_FIELDS: [&str; 6] = ["name", "internalId", "code", "system.name", "locations", "tags"];

/// Width in modules of a version 1 QR symbol.
const SMALLEST_SYMBOL_MODULES: u32 = 21;

const DEFAULT_LABELS: [(&str, &str); 6] = [
    ("name", "Name"),
    ("internalId", "Internal ID"),
    ("code", "Code"),
    ("system.name", "System"),
    ("locations", "Locations"),
    ("tags", "Tags"),
];

/// Everything about label generation that is fixed per deployment rather
/// than chosen per request. Every field has a default, so a partial JSON
/// document is a valid configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct LabelConfig {
    pub format: ValueFormatter,
    pub qr: QrSymbolConfig,
    pub default_fields: Vec<String>,
    pub default_labels: BTreeMap<String, String>,
}

impl Default for LabelConfig {
    fn default() -> Self {
        Self {
            format: ValueFormatter::default(),
            qr: QrSymbolConfig::default(),
            default_fields: DEFAULT_FIELDS.iter().map(|s| s.to_string()).collect(),
            default_labels: DEFAULT_LABELS
                .iter()
                .map(|(path, label)| (path.to_string(), label.to_string()))
                .collect(),
        }
    }
}

impl LabelConfig {
    pub fn from_json(json: &str) -> Result<Self, LabelError> {
        let config: LabelConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LabelError> {
        let path_ref = path.as_ref();
        let source = std::fs::read_to_string(path_ref).map_err(|e| {
            LabelError::Config(format!(
                "Failed to read configuration from '{}': {}",
                path_ref.display(),
                e
            ))
        })?;
        Self::from_json(&source)
    }

    /// Rejects configurations that could never produce a usable sheet.
    pub fn validate(&self) -> Result<(), LabelError> {
        if self.default_fields.is_empty() {
            return Err(LabelError::Config("defaultFields must not be empty".to_string()));
        }
        for field in &self.default_fields {
            FieldPath::parse(field)
                .map_err(|e| LabelError::Config(format!("defaultFields: {e}")))?;
        }
        if self.format.truncate_at == 0 {
            return Err(LabelError::Config("format.truncateAt must be positive".to_string()));
        }
        if self.qr.size_px == 0 {
            return Err(LabelError::Config("qr.sizePx must be positive".to_string()));
        }
        // Even the smallest symbol must get at least one pixel per module.
        let smallest = self
            .qr
            .margin
            .checked_mul(2)
            .and_then(|margin| margin.checked_add(SMALLEST_SYMBOL_MODULES));
        if smallest.is_none_or(|modules| self.qr.size_px / modules == 0) {
            return Err(LabelError::Config(format!(
                "qr.margin {} leaves no room for a symbol in {}px",
                self.qr.margin, self.qr.size_px
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = LabelConfig::default();
        config.validate().unwrap();
        assert_eq!(config.format.truncate_at, 56);
        assert_eq!(config.format.placeholder, "N/A");
        assert_eq!(config.default_fields.first().map(String::as_str), Some("name"));
        assert_eq!(config.default_labels.get("system.name").map(String::as_str), Some("System"));
    }

    #[test]
    fn partial_json_keeps_remaining_defaults() {
        let config = LabelConfig::from_json(r#"{ "format": { "truncateAt": 40 } }"#).unwrap();
        assert_eq!(config.format.truncate_at, 40);
        assert_eq!(config.format.placeholder, "N/A");
        assert_eq!(config.qr, QrSymbolConfig::default());
        assert_eq!(config.default_fields.len(), DEFAULT_FIELDS.len());
    }

    #[test]
    fn empty_default_fields_are_rejected() {
        let err = LabelConfig::from_json(r#"{ "defaultFields": [] }"#).unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }

    #[test]
    fn malformed_default_field_is_rejected() {
        let err = LabelConfig::from_json(r#"{ "defaultFields": ["name", "a..b"] }"#).unwrap_err();
        assert!(err.to_string().contains("a..b"));
    }

    #[test]
    fn zero_sized_qr_is_rejected() {
        assert!(LabelConfig::from_json(r#"{ "qr": { "sizePx": 0 } }"#).is_err());
    }

    #[test]
    fn margin_wider_than_the_image_is_rejected() {
        let err = LabelConfig::from_json(r#"{ "qr": { "margin": 100 } }"#).unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
        assert!(err.to_string().contains("qr.margin"));

        let huge = format!(r#"{{ "qr": {{ "margin": {} }} }}"#, u32::MAX / 2);
        assert!(matches!(LabelConfig::from_json(&huge), Err(LabelError::Config(_))));
    }

    #[test]
    fn tightest_usable_margin_is_accepted() {
        // 21 + 2 * 89 = 199 modules leaves one pixel each in 200px.
        LabelConfig::from_json(r#"{ "qr": { "margin": 89 } }"#).unwrap();
        assert!(LabelConfig::from_json(r#"{ "qr": { "margin": 90 } }"#).is_err());
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = LabelConfig::from_file("/definitely/not/here.json").unwrap_err();
        assert!(matches!(err, LabelError::Config(_)));
    }
}
