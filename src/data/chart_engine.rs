//! Chart render request assembly
//!
//! Bundles everything the rendering collaborator needs for one frame: the
//! chart rows, bindings, kind, display options, axis labels and, for pie
//! charts, the clamped geometry and legend. All heavy lifting stays here
//! rather than in the renderer.

use crate::constants::{
    DEFAULT_X_AXIS_LABEL, DEFAULT_Y_AXIS_LABEL, MAX_PIE_SIZE, MIN_PIE_SIZE, PIE_RADIUS_DIVISOR,
};
use crate::data::chart_view::{derive_view, is_truncated};
use crate::types::{BindingSet, ChartKind, Dataset, DisplayConfig, Row};
use serde::Serialize;

/// Chart color palette, cycled per series/slice
pub const CHART_COLORS: [&str; 15] = [
    "#0078D4", "#2B88D8", "#71AFE5", "#B4E0FA", "#E5E5E5",
    "#FFB900", "#FF8C00", "#E81123", "#B4009E", "#5C2D91",
    "#00B294", "#0099BC", "#BAD80A", "#FFF100", "#E3008C",
];

/// Color for the series or slice at `index`
pub fn palette_color(index: usize) -> &'static str {
    CHART_COLORS[index % CHART_COLORS.len()]
}

/// An opaque rendered chart, handed back by the renderer
pub trait ChartSurface: Send + Sync {
    /// Capture the surface into a raster image
    fn capture(&self) -> Result<image::RgbaImage, String>;
}

/// The rendering collaborator: turns a request into pixels
pub trait ChartRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Box<dyn ChartSurface>;
}

/// Everything the rendering collaborator consumes for one chart
#[derive(Clone, Debug, Serialize)]
pub struct RenderRequest<'a> {
    pub kind: ChartKind,
    pub title: &'a str,
    pub bindings: &'a BindingSet,
    pub display: &'a DisplayConfig,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub headers: &'a [String],
    /// Chart rows after the row limit
    pub rows: &'a [Row],
    /// The row limit dropped rows; the user should be told
    pub truncated: bool,
    /// Present only for pie charts
    pub pie: Option<PieLayout>,
    pub palette: &'static [&'static str],
}

/// Pie canvas geometry and legend
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PieLayout {
    pub width: u32,
    pub height: u32,
    pub outer_radius: f32,
    /// Always the first header
    pub name_column: String,
    pub value_column: Option<String>,
    pub legend: Vec<LegendEntry>,
}

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct LegendEntry {
    pub label: String,
    pub color: &'static str,
}

/// Axis labels follow the selected columns, with placeholders while unset
pub fn axis_labels(bindings: &BindingSet) -> (&str, &str) {
    (
        bindings.x_column.as_deref().unwrap_or(DEFAULT_X_AXIS_LABEL),
        bindings.y_column.as_deref().unwrap_or(DEFAULT_Y_AXIS_LABEL),
    )
}

/// Pie geometry for a display size.
///
/// The canvas is clamped to [`MIN_PIE_SIZE`, `MAX_PIE_SIZE`]; the radius is
/// derived from the unclamped size.
pub fn pie_geometry(display: &DisplayConfig) -> (u32, u32, f32) {
    let width = display.width.clamp(MIN_PIE_SIZE, MAX_PIE_SIZE);
    let height = display.height.clamp(MIN_PIE_SIZE, MAX_PIE_SIZE);
    let outer_radius = display.width.min(display.height) as f32 / PIE_RADIUS_DIVISOR;
    (width, height, outer_radius)
}

/// Assemble the render request.
///
/// Returns `None` when there is nothing to draw (no rows loaded).
pub fn build_render_request<'a>(
    dataset: &'a Dataset,
    kind: ChartKind,
    bindings: &'a BindingSet,
    display: &'a DisplayConfig,
) -> Option<RenderRequest<'a>> {
    if dataset.is_empty() {
        return None;
    }

    let rows = derive_view(dataset, display.limit_rows);
    let (x_label, y_label) = axis_labels(bindings);

    let pie = match kind {
        ChartKind::Pie => {
            let (width, height, outer_radius) = pie_geometry(display);
            let name_column = dataset.schema().first().unwrap_or_default().to_string();
            let legend = rows
                .iter()
                .enumerate()
                .map(|(i, row)| LegendEntry {
                    label: row.get(0).to_string(),
                    color: palette_color(i),
                })
                .collect();
            Some(PieLayout {
                width,
                height,
                outer_radius,
                name_column,
                value_column: bindings.pie_value_column.clone(),
                legend,
            })
        }
        _ => None,
    };

    Some(RenderRequest {
        kind,
        title: &display.title,
        bindings,
        display,
        x_label,
        y_label,
        headers: dataset.headers(),
        rows,
        truncated: is_truncated(dataset, display.limit_rows),
        pie,
        palette: &CHART_COLORS,
    })
}
