use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Identifies which of the three input record shapes a print job carries.
///
/// The shape is always given explicitly by the caller; it is never inferred
/// from the data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PrintShape {
    /// One resource record, or a sequence of resource records.
    Resource,
    /// A purchase order: `itemList[*].resource`.
    Purchase,
    /// A wishlist: `items[*].resource`.
    Wishlist,
}

/// Returned when a discriminator string names none of the known shapes.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown print type '{given}', expected one of: {allowed}")]
pub struct UnknownShape {
    pub given: String,
    pub allowed: String,
}

impl PrintShape {
    pub const ALL: [PrintShape; 3] = [PrintShape::Resource, PrintShape::Purchase, PrintShape::Wishlist];

    pub fn as_str(&self) -> &'static str {
        match self {
            PrintShape::Resource => "resource",
            PrintShape::Purchase => "purchase",
            PrintShape::Wishlist => "wishlist",
        }
    }

    /// Comma-separated list of every accepted discriminator, for error messages.
    pub fn allowed() -> String {
        Self::ALL.iter().map(PrintShape::as_str).collect::<Vec<_>>().join(", ")
    }

    /// The key under which a collection shape keeps its line items.
    /// `None` for single resources.
    pub fn collection_key(&self) -> Option<&'static str> {
        match self {
            PrintShape::Resource => None,
            PrintShape::Purchase => Some("itemList"),
            PrintShape::Wishlist => Some("items"),
        }
    }
}

impl fmt::Display for PrintShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PrintShape {
    type Err = UnknownShape;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let needle = s.trim();
        Self::ALL
            .into_iter()
            .find(|shape| shape.as_str().eq_ignore_ascii_case(needle))
            .ok_or_else(|| UnknownShape {
                given: s.to_string(),
                allowed: Self::allowed(),
            })
    }
}
