//! Which attributes a label shows, in which order, under which captions.

use crate::config::LabelConfig;
use crate::error::LabelError;
use itertools::Itertools;
use labelsheet_jpath::{FieldPath, ValueFormatter};
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Ordered field paths plus their captions.
///
/// A path with no caption is captioned with the path itself.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldSpec {
    paths: Vec<FieldPath>,
    labels: BTreeMap<String, String>,
}

/// One formatted attribute, ready to print.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DisplayField {
    pub path: String,
    pub label: String,
    pub value: String,
    /// Set on the first field only; renderers print it bold.
    pub emphasized: bool,
}

impl FieldSpec {
    pub fn new(paths: Vec<FieldPath>, labels: BTreeMap<String, String>) -> Self {
        Self { paths, labels }
    }

    /// Parses every path. Blank entries are dropped and repeated paths keep
    /// their first position.
    pub fn parse<I, S>(fields: I, labels: BTreeMap<String, String>) -> Result<Self, LabelError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = fields
            .into_iter()
            .filter(|f| !f.as_ref().trim().is_empty())
            .map(|f| FieldPath::parse(f.as_ref()))
            .collect::<Result<Vec<_>, _>>()?
            .into_iter()
            .unique()
            .collect();
        Ok(Self { paths, labels })
    }

    /// Like [`parse`](Self::parse), but a malformed path is kept and simply
    /// resolves to nothing when displayed.
    pub fn parse_lenient<I, S>(fields: I, labels: BTreeMap<String, String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let paths = fields
            .into_iter()
            .filter_map(|f| FieldPath::lenient(f.as_ref()))
            .unique()
            .collect();
        Self { paths, labels }
    }

    /// Builds the effective spec for one request.
    ///
    /// The caller's field list replaces the default list wholesale, and the
    /// caller's label map replaces the default map wholesale; nothing is
    /// merged entry by entry. A field list with no usable entries counts as
    /// absent. Caller paths are taken leniently; the configured defaults
    /// were validated up front.
    pub fn resolve(
        fields: Option<&[String]>,
        labels: Option<&BTreeMap<String, String>>,
        config: &LabelConfig,
    ) -> Result<Self, LabelError> {
        let labels = labels.cloned().unwrap_or_else(|| config.default_labels.clone());

        let requested = fields
            .map(|list| Self::parse_lenient(list, labels.clone()))
            .filter(|spec| !spec.is_empty());

        match requested {
            Some(spec) => Ok(spec),
            None => Self::parse(&config.default_fields, labels),
        }
    }

    pub fn paths(&self) -> &[FieldPath] {
        &self.paths
    }

    pub fn labels(&self) -> &BTreeMap<String, String> {
        &self.labels
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    pub fn label_for<'a>(&'a self, path: &'a FieldPath) -> &'a str {
        self.labels
            .get(path.as_str())
            .map(String::as_str)
            .unwrap_or(path.as_str())
    }

    /// Formats every field of `record` in display order.
    pub fn display(&self, record: &Value, formatter: &ValueFormatter) -> Vec<DisplayField> {
        self.paths
            .iter()
            .enumerate()
            .map(|(position, path)| DisplayField {
                path: path.as_str().to_string(),
                label: self.label_for(path).to_string(),
                value: formatter.format_field(record, path),
                emphasized: position == 0,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn absent_list_and_map_use_defaults() {
        let config = LabelConfig::default();
        let spec = FieldSpec::resolve(None, None, &config).unwrap();
        let paths: Vec<&str> = spec.paths().iter().map(FieldPath::as_str).collect();
        assert_eq!(paths, config.default_fields.iter().map(String::as_str).collect::<Vec<_>>());
        assert_eq!(spec.labels(), &config.default_labels);
    }

    #[test]
    fn empty_list_counts_as_absent() {
        let config = LabelConfig::default();
        let from_empty = FieldSpec::resolve(Some(Vec::new().as_slice()), None, &config).unwrap();
        let from_blank = FieldSpec::resolve(Some(strings(&["", "  "]).as_slice()), None, &config).unwrap();
        let from_none = FieldSpec::resolve(None, None, &config).unwrap();
        assert_eq!(from_empty, from_none);
        assert_eq!(from_blank, from_none);
    }

    #[test]
    fn caller_list_replaces_defaults_in_caller_order() {
        let config = LabelConfig::default();
        let fields = strings(&["system.name", "name", "system.name"]);
        let spec = FieldSpec::resolve(Some(fields.as_slice()), None, &config).unwrap();
        let paths: Vec<&str> = spec.paths().iter().map(FieldPath::as_str).collect();
        assert_eq!(paths, vec!["system.name", "name"]);
        // Default captions still apply to the caller's fields.
        assert_eq!(spec.label_for(&spec.paths()[0]), "System");
    }

    #[test]
    fn caller_labels_replace_the_whole_default_map() {
        let config = LabelConfig::default();
        let labels = BTreeMap::from([("name".to_string(), "Item".to_string())]);
        let spec = FieldSpec::resolve(None, Some(&labels), &config).unwrap();

        let name = FieldPath::parse("name").unwrap();
        let internal = FieldPath::parse("internalId").unwrap();
        assert_eq!(spec.label_for(&name), "Item");
        // No partial merge: the default "Internal ID" caption is gone.
        assert_eq!(spec.label_for(&internal), "internalId");
    }

    #[test]
    fn malformed_caller_path_prints_the_placeholder() {
        let config = LabelConfig::default();
        let spec = FieldSpec::resolve(Some(strings(&["name", "a..b"]).as_slice()), None, &config).unwrap();
        assert_eq!(spec.len(), 2);

        let fields = spec.display(&json!({ "name": "Drill", "a": { "b": 1 } }), &ValueFormatter::default());
        assert_eq!(fields[1].label, "a..b");
        assert_eq!(fields[1].value, "N/A");
    }

    #[test]
    fn strict_parse_rejects_malformed_paths() {
        let err = FieldSpec::parse(["name", "a..b"], BTreeMap::new()).unwrap_err();
        assert!(err.is_invalid_argument());
    }

    #[test]
    fn display_marks_only_the_first_field() {
        let spec = FieldSpec::parse(["name", "missing", "tags"], BTreeMap::new()).unwrap();
        let record = json!({ "name": "Drill", "tags": ["red", "heavy"] });
        let fields = spec.display(&record, &ValueFormatter::default());

        assert_eq!(fields.len(), 3);
        assert!(fields[0].emphasized);
        assert!(fields[1..].iter().all(|f| !f.emphasized));
        assert_eq!(fields[0].value, "Drill");
        assert_eq!(fields[1].value, "N/A");
        assert_eq!(fields[1].label, "missing");
        assert_eq!(fields[2].value, "red, heavy");
    }
}
