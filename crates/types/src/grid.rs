use serde::{Deserialize, Serialize};
use std::fmt;

/// The number of labels printed on one page.
///
/// Only a fixed set of capacities is supported. Anything else, including
/// values that fail to parse, falls back to [`ItemsPerPage::DEFAULT`] instead
/// of being rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "u32", into = "u32")]
pub struct ItemsPerPage(u32);

impl ItemsPerPage {
    pub const SUPPORTED: [u32; 7] = [10, 12, 16, 18, 21, 24, 27];
    pub const DEFAULT: ItemsPerPage = ItemsPerPage(10);

    /// Maps a requested capacity onto a supported one.
    pub fn from_requested(requested: u32) -> Self {
        if Self::SUPPORTED.contains(&requested) {
            ItemsPerPage(requested)
        } else {
            Self::DEFAULT
        }
    }

    /// Parses a raw caller value such as a query parameter.
    pub fn parse_lenient(raw: Option<&str>) -> Self {
        raw.and_then(|s| s.trim().parse::<u32>().ok())
            .map(Self::from_requested)
            .unwrap_or_default()
    }

    pub fn get(self) -> u32 {
        self.0
    }

    pub fn is_supported(requested: u32) -> bool {
        Self::SUPPORTED.contains(&requested)
    }
}

impl Default for ItemsPerPage {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl From<u32> for ItemsPerPage {
    fn from(value: u32) -> Self {
        Self::from_requested(value)
    }
}

impl From<ItemsPerPage> for u32 {
    fn from(value: ItemsPerPage) -> Self {
        value.0
    }
}

impl fmt::Display for ItemsPerPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Portrait,
    Landscape,
}

/// Layout parameters for one page of labels.
///
/// `columns * rows` always equals `items_per_page`. Cell sizes are
/// percentages of the printable page area.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GridMetrics {
    pub items_per_page: ItemsPerPage,
    pub columns: u32,
    pub rows: u32,
    pub cell_width_pct: f64,
    pub cell_height_pct: f64,
    pub font_size: f32,
    pub qr_size_px: u32,
    pub orientation: Orientation,
}

impl GridMetrics {
    /// Number of label cells on one page.
    pub fn capacity(&self) -> usize {
        (self.columns * self.rows) as usize
    }

    pub fn is_landscape(&self) -> bool {
        self.orientation == Orientation::Landscape
    }
}
