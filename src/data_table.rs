//! Table preview surface.
//!
//! A display-ready copy of the first rows of the dataset (or all of them),
//! independent of the chart row limit. Absent values read `N/A`; empty text
//! stays empty.
//!
//! ## Usage
//!
//! ```rust,ignore
//! if let Some(preview) = store.table_preview() {
//!     println!("{} ({})", preview.title, preview.row_count_badge);
//!     for row in &preview.rows {
//!         println!("{}", row.join(" | "));
//!     }
//! }
//! ```

use crate::data::table_preview;
use crate::types::Dataset;
use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct TablePreview {
    pub title: String,
    pub headers: Vec<String>,
    /// Cell texts, one inner vector per shown row
    pub rows: Vec<Vec<String>>,
    /// Total rows in the dataset, e.g. "1.2K rows"
    pub row_count_badge: String,
    /// e.g. "Showing 1-50 of 120"
    pub position: String,
}

impl TablePreview {
    pub fn build(dataset: &Dataset, show_all: bool) -> Self {
        let shown = table_preview(dataset, show_all);
        let title = if show_all {
            "Data Preview (All Rows)".to_string()
        } else {
            format!("Data Preview (First {} Rows)", crate::constants::TABLE_PREVIEW_ROWS)
        };

        let rows = shown
            .iter()
            .map(|row| row.cells.iter().map(ToString::to_string).collect())
            .collect();

        Self {
            title,
            headers: dataset.headers().to_vec(),
            rows,
            row_count_badge: format_row_count(dataset.row_count()),
            position: format_position(shown.len(), dataset.row_count()),
        }
    }
}

/// Format row count with a compact suffix (e.g., "1.2K rows")
pub fn format_row_count(count: usize) -> String {
    let formatted = if count >= 1_000_000 {
        format!("{:.1}M", count as f64 / 1_000_000.0)
    } else if count >= 1_000 {
        format!("{:.1}K", count as f64 / 1_000.0)
    } else {
        count.to_string()
    };

    if count == 1 {
        format!("{} row", formatted)
    } else {
        format!("{} rows", formatted)
    }
}

/// "Showing 1-50 of 120", or "Showing 0-0 of 0" for an empty table
fn format_position(shown: usize, total: usize) -> String {
    let start = if total == 0 { 0 } else { 1 };
    format!("Showing {}-{} of {}", start, shown, total)
}
