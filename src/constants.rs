//! Application-wide constants.
//!
//! Centralizes the fixed numeric rules of ingestion, chart derivation and
//! export so that none of them appear as magic numbers elsewhere.

// ============================================================================
// Data Loading
// ============================================================================

/// Default maximum number of CSV data rows to load
pub const MAX_CSV_ROWS: usize = 100_000;

/// Default maximum CSV file size in MB
pub const MAX_CSV_SIZE_MB: usize = 100;

/// Required (case-sensitive) suffix of an uploaded file name
pub const CSV_EXTENSION: &str = ".csv";

/// Largest integer magnitude a number cell can hold exactly (2^53)
pub const MAX_EXACT_INTEGER: f64 = 9_007_199_254_740_992.0;

// ============================================================================
// Chart Data View
// ============================================================================

/// Rows fed to the chart when `limit_rows` is on
pub const CHART_ROW_LIMIT: usize = 100;

/// Rows shown in the table preview unless `show_all_table_rows` is on
pub const TABLE_PREVIEW_ROWS: usize = 50;

// ============================================================================
// Display Configuration
// ============================================================================

/// Chart width range in pixels
pub const MIN_CHART_WIDTH: u32 = 400;
pub const MAX_CHART_WIDTH: u32 = 1200;

/// Chart height range in pixels
pub const MIN_CHART_HEIGHT: u32 = 300;
pub const MAX_CHART_HEIGHT: u32 = 800;

/// Default chart size
pub const DEFAULT_CHART_WIDTH: u32 = 700;
pub const DEFAULT_CHART_HEIGHT: u32 = 400;

/// Default chart title
pub const DEFAULT_CHART_TITLE: &str = "Data Visualization";

/// Axis labels used while an axis binding is unset
pub const DEFAULT_X_AXIS_LABEL: &str = "X Axis";
pub const DEFAULT_Y_AXIS_LABEL: &str = "Y Axis";

// ============================================================================
// Pie Geometry
// ============================================================================

/// Pie canvases are clamped to this range on both axes
pub const MIN_PIE_SIZE: u32 = 350;
pub const MAX_PIE_SIZE: u32 = 600;

/// Outer radius = min(width, height) / this divisor
pub const PIE_RADIUS_DIVISOR: f32 = 2.5;

// ============================================================================
// Notifications
// ============================================================================

/// Time an error stays visible before it is auto-dismissed
pub const ERROR_DISMISS_MS: u64 = 6_000;

// ============================================================================
// Export
// ============================================================================

/// A4 paper in millimetres (portrait)
pub const PAGE_WIDTH_MM: f32 = 210.0;
pub const PAGE_HEIGHT_MM: f32 = 297.0;

/// Offset of the image from the top-left page corner
pub const PAGE_MARGIN_MM: f32 = 10.0;

/// Width the chart image is placed at before fitting to the page
pub const EXPORT_IMAGE_WIDTH_MM: f32 = 180.0;

/// Names handed to the export sink
pub const PDF_DOCUMENT_NAME: &str = "chart.pdf";
pub const PNG_DOCUMENT_NAME: &str = "chart.png";
