//! Parsed representation of a dot-separated field path.
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

use crate::error::JPathError;
use crate::parser::parse_field_path;

/// A non-empty sequence of object keys, e.g. `system.name` → `["system", "name"]`.
///
/// There is no index syntax: arrays met along the way are flattened by the
/// resolver instead of being addressed.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FieldPath {
    raw: String,
    segments: Vec<String>,
}

impl FieldPath {
    pub fn parse(input: &str) -> Result<Self, JPathError> {
        parse_field_path(input)
    }

    /// Like [`parse`](Self::parse), but accepts any non-blank input. Empty
    /// segments are kept as empty keys, so such a path usually selects
    /// nothing instead of failing.
    pub fn lenient(input: &str) -> Option<Self> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Self::parse(trimmed).unwrap_or_else(|_| {
            Self::from_parts(trimmed.to_string(), trimmed.split('.').map(str::to_string).collect())
        }))
    }

    pub(crate) fn from_parts(raw: String, segments: Vec<String>) -> Self {
        Self { raw, segments }
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The path as written, which doubles as its fallback display label.
    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for FieldPath {
    type Err = JPathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl Serialize for FieldPath {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for FieldPath {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        FieldPath::parse(&raw).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lenient_keeps_empty_segments() {
        let path = FieldPath::lenient(" system..name ").unwrap();
        assert_eq!(path.as_str(), "system..name");
        assert_eq!(path.segments(), ["system", "", "name"]);
        assert!(FieldPath::parse("system..name").is_err());
    }

    #[test]
    fn lenient_matches_parse_on_valid_input() {
        assert_eq!(FieldPath::lenient("system.name"), FieldPath::parse("system.name").ok());
        assert_eq!(FieldPath::lenient("   "), None);
    }
}
