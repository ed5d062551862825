//! Maps a page capacity onto a label grid.

use labelsheet_types::{GridMetrics, ItemsPerPage, Orientation};

/// Capacity → (columns, rows).
const GRIDS: [(u32, u32, u32); 7] = [
    (10, 2, 5),
    (12, 2, 6),
    (16, 2, 8),
    (18, 3, 6),
    (21, 3, 7),
    (24, 3, 8),
    (27, 3, 9),
];

/// Pages holding this many labels or more are printed landscape.
const LANDSCAPE_FROM: u32 = 18;

const REGULAR_FONT_SIZE: f32 = 8.0;
const REGULAR_QR_PX: u32 = 75;
const DENSE_FONT_SIZE: f32 = 6.0;
const DENSE_QR_PX: u32 = 50;

/// Derives [`GridMetrics`] from the configured capacity.
///
/// The grid only ever depends on the requested capacity, never on how many
/// items are actually being printed: a short last page keeps the full grid.
#[derive(Debug, Clone, Copy, Default)]
pub struct GridLayoutPlanner;

impl GridLayoutPlanner {
    pub fn plan(items_per_page: ItemsPerPage) -> GridMetrics {
        let requested = items_per_page.get();
        let (capacity, columns, rows) = GRIDS
            .iter()
            .copied()
            .find(|(capacity, _, _)| *capacity == requested)
            .unwrap_or(GRIDS[0]);

        // Three columns or eight rows leave too little room for the larger sizes.
        let dense = columns >= 3 || rows >= 8;
        let (font_size, qr_size_px) = if dense {
            (DENSE_FONT_SIZE, DENSE_QR_PX)
        } else {
            (REGULAR_FONT_SIZE, REGULAR_QR_PX)
        };

        GridMetrics {
            items_per_page: ItemsPerPage::from_requested(capacity),
            columns,
            rows,
            cell_width_pct: 100.0 / f64::from(columns),
            cell_height_pct: 100.0 / f64::from(rows),
            font_size,
            qr_size_px,
            orientation: if capacity >= LANDSCAPE_FROM {
                Orientation::Landscape
            } else {
                Orientation::Portrait
            },
        }
    }

    /// Plans from a raw number; unsupported values get the default grid.
    pub fn plan_requested(requested: u32) -> GridMetrics {
        Self::plan(ItemsPerPage::from_requested(requested))
    }
}
