//! Row projections feeding the chart and the table preview.
//!
//! Both are borrowed prefixes of the dataset: recomputed on demand, never
//! cached, never mutating the dataset.

use crate::constants::{CHART_ROW_LIMIT, TABLE_PREVIEW_ROWS};
use crate::types::{Dataset, Row};

/// Rows fed to the chart: the first [`CHART_ROW_LIMIT`] when `limit_rows`,
/// otherwise all of them, in original order.
pub fn derive_view(dataset: &Dataset, limit_rows: bool) -> &[Row] {
    if limit_rows {
        prefix(dataset.rows(), CHART_ROW_LIMIT)
    } else {
        dataset.rows()
    }
}

/// Rows shown in the table preview: the first [`TABLE_PREVIEW_ROWS`] unless
/// `show_all`. Independent of the chart row limit.
pub fn table_preview(dataset: &Dataset, show_all: bool) -> &[Row] {
    if show_all {
        dataset.rows()
    } else {
        prefix(dataset.rows(), TABLE_PREVIEW_ROWS)
    }
}

/// True when the chart view is dropping rows, so the user can be told
pub fn is_truncated(dataset: &Dataset, limit_rows: bool) -> bool {
    limit_rows && dataset.row_count() > CHART_ROW_LIMIT
}

fn prefix(rows: &[Row], limit: usize) -> &[Row] {
    &rows[..rows.len().min(limit)]
}
