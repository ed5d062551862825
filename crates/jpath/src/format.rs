//! Turns resolved values into the strings printed on a label.
use crate::ast::FieldPath;
use crate::engine::select;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Longest display value printed before truncation kicks in.
pub const DEFAULT_TRUNCATE_AT: usize = 56;
/// Printed when a field resolves to nothing displayable.
pub const DEFAULT_PLACEHOLDER: &str = "N/A";
/// Keys tried, in order, when an object has to be shown as one string.
pub const OBJECT_DISPLAY_KEYS: [&str; 4] = ["name", "code", "unit", "internalId"];

const JOIN: &str = ", ";
const ELLIPSIS: &str = "...";

/// Formats a single raw value.
///
/// - null → `""`
/// - boolean → `"Yes"` / `"No"`
/// - sequence → elements formatted by these same rules, empties dropped,
///   joined with `", "`
/// - object → its best display key (see [`object_display`])
/// - number, string → as written
pub fn format_value(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::Bool(true) => "Yes".to_string(),
        Value::Bool(false) => "No".to_string(),
        Value::Array(elements) => join_non_empty(elements.iter().map(format_value)),
        Value::Object(map) => object_display(map),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
    }
}

/// Best-effort one-line name for an object: the first of `name`, `code`,
/// `unit`, `internalId` holding a non-empty string after trimming. Numbers
/// count as strings here; anything else is skipped.
pub fn object_display(map: &Map<String, Value>) -> String {
    OBJECT_DISPLAY_KEYS
        .iter()
        .filter_map(|key| map.get(*key))
        .filter_map(|candidate| match candidate {
            Value::String(s) => Some(s.trim().to_string()),
            Value::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .find(|s| !s.is_empty())
        .unwrap_or_default()
}

/// Loose truthiness: null, `false`, `0` and `""` are absent, everything
/// else is present.
pub fn is_present(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Plain text of a value, for feeding into an encoder rather than a label.
pub fn to_text(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        other => other.to_string(),
    }
}

fn join_non_empty<I: Iterator<Item = String>>(parts: I) -> String {
    parts
        .filter(|part| !part.trim().is_empty())
        .collect::<Vec<_>>()
        .join(JOIN)
}

/// Formatting rules for whole fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ValueFormatter {
    pub truncate_at: usize,
    pub placeholder: String,
}

impl Default for ValueFormatter {
    fn default() -> Self {
        Self {
            truncate_at: DEFAULT_TRUNCATE_AT,
            placeholder: DEFAULT_PLACEHOLDER.to_string(),
        }
    }
}

impl ValueFormatter {
    pub fn new(truncate_at: usize, placeholder: impl Into<String>) -> Self {
        Self {
            truncate_at,
            placeholder: placeholder.into(),
        }
    }

    /// Resolves `path` against `record` and formats the result for display.
    pub fn format_field(&self, record: &Value, path: &FieldPath) -> String {
        self.format_values(&select(record, path))
    }

    /// Formats every value on its own, joins the non-empty ones, then
    /// applies the placeholder and truncation rules.
    pub fn format_values(&self, values: &[&Value]) -> String {
        let joined = join_non_empty(values.iter().map(|v| format_value(v)));
        if joined.trim().is_empty() {
            return self.placeholder.clone();
        }
        self.truncate(joined)
    }

    /// Cuts `text` to `truncate_at` characters (never inside a character),
    /// trims trailing whitespace and appends `...`. Text at or under the
    /// limit is returned untouched.
    pub fn truncate(&self, text: String) -> String {
        if text.chars().count() <= self.truncate_at {
            return text;
        }
        let mut cut: String = text.chars().take(self.truncate_at).collect();
        let kept = cut.trim_end().len();
        cut.truncate(kept);
        cut.push_str(ELLIPSIS);
        cut
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn scalars() {
        assert_eq!(format_value(&Value::Null), "");
        assert_eq!(format_value(&json!(true)), "Yes");
        assert_eq!(format_value(&json!(false)), "No");
        assert_eq!(format_value(&json!(42)), "42");
        assert_eq!(format_value(&json!(2.5)), "2.5");
        assert_eq!(format_value(&json!("Drill")), "Drill");
    }

    #[test]
    fn objects_use_the_first_usable_display_key() {
        assert_eq!(format_value(&json!({ "name": "Shelf", "code": "S1" })), "Shelf");
        assert_eq!(format_value(&json!({ "name": "  ", "code": "S1" })), "S1");
        assert_eq!(format_value(&json!({ "unit": "kg", "internalId": "X" })), "kg");
        assert_eq!(format_value(&json!({ "internalId": "  R-9 " })), "R-9");
        assert_eq!(format_value(&json!({ "name": null, "internalId": 7 })), "7");
        assert_eq!(format_value(&json!({ "colour": "red" })), "");
    }

    #[test]
    fn sequences_format_each_element_and_drop_empties() {
        let value = json!([true, { "name": "Shelf A" }, null, "", 3, { "colour": "red" }, false]);
        assert_eq!(format_value(&value), "Yes, Shelf A, 3, No");
    }

    #[test]
    fn empty_field_becomes_placeholder() {
        let formatter = ValueFormatter::default();
        assert_eq!(formatter.format_values(&[]), "N/A");
        assert_eq!(formatter.format_values(&[&Value::Null, &json!("  ")]), "N/A");
        assert_eq!(formatter.format_values(&[&json!([])]), "N/A");
    }

    #[test]
    fn multiple_resolved_values_are_joined() {
        let formatter = ValueFormatter::default();
        let record = json!({ "locations": [ { "name": "A" }, { "name": "B" } ] });
        let path = FieldPath::parse("locations").unwrap();
        assert_eq!(formatter.format_field(&record, &path), "A, B");

        let path = FieldPath::parse("locations.name").unwrap();
        assert_eq!(formatter.format_field(&record, &path), "A, B");
    }

    #[test]
    fn missing_path_formats_as_placeholder() {
        let formatter = ValueFormatter::default();
        let path = FieldPath::parse("system.name").unwrap();
        assert_eq!(formatter.format_field(&json!({ "name": "x" }), &path), "N/A");
    }

    #[test]
    fn text_at_the_limit_is_untouched() {
        let formatter = ValueFormatter::default();
        let exact = "a".repeat(56);
        assert_eq!(formatter.format_values(&[&json!(exact.clone())]), exact);
    }

    #[test]
    fn text_one_over_the_limit_is_cut() {
        let formatter = ValueFormatter::default();
        let over = "b".repeat(57);
        let expected = format!("{}...", "b".repeat(56));
        assert_eq!(formatter.format_values(&[&json!(over)]), expected);
    }

    #[test]
    fn truncation_trims_trailing_whitespace_before_the_ellipsis() {
        let formatter = ValueFormatter::new(6, "N/A");
        assert_eq!(formatter.truncate("abcd  efgh".to_string()), "abcd...");
    }

    #[test]
    fn truncation_counts_characters_not_bytes() {
        let formatter = ValueFormatter::new(3, "N/A");
        assert_eq!(formatter.truncate("ÄÖÜß".to_string()), "ÄÖÜ...");
        assert_eq!(formatter.truncate("ÄÖÜ".to_string()), "ÄÖÜ");
    }

    #[test]
    fn presence() {
        assert!(!is_present(&Value::Null));
        assert!(!is_present(&json!("")));
        assert!(!is_present(&json!(false)));
        assert!(!is_present(&json!(0)));
        assert!(is_present(&json!(" ")));
        assert!(is_present(&json!(12)));
        assert!(is_present(&json!({})));
    }

    #[test]
    fn text_conversion() {
        assert_eq!(to_text(&json!("abc")), "abc");
        assert_eq!(to_text(&json!(1001)), "1001");
        assert_eq!(to_text(&json!(true)), "true");
        assert_eq!(to_text(&Value::Null), "");
    }
}
