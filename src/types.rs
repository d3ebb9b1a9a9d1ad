//! Core types for the csvchart session model.
//!
//! This module defines the tabular dataset produced by ingestion, the schema
//! derived from it, and the chart-side types (kind, bindings, display options)
//! that the session store keeps consistent with that schema.

use crate::constants::{
    DEFAULT_CHART_HEIGHT, DEFAULT_CHART_TITLE, DEFAULT_CHART_WIDTH, MAX_CHART_HEIGHT,
    MAX_CHART_WIDTH, MIN_CHART_HEIGHT, MIN_CHART_WIDTH,
};
use crate::data::{ParseError, ParseResult};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

// ============================================================================
// Dataset Types
// ============================================================================

static ABSENT: CellValue = CellValue::Absent;

/// A single cell value.
///
/// `Absent` (the row has no value for the header) is distinct from empty
/// text (the field was present but empty).
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CellValue {
    Number(f64),
    Boolean(bool),
    Text(String),
    Absent,
}

impl CellValue {
    /// True only for present-but-empty text. Absent is not blank.
    pub fn is_blank(&self) -> bool {
        matches!(self, CellValue::Text(s) if s.is_empty())
    }

    pub fn is_absent(&self) -> bool {
        matches!(self, CellValue::Absent)
    }

    /// Numeric view of the cell, if it has one
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(n) => Some(*n),
            CellValue::Boolean(b) => Some(if *b { 1.0 } else { 0.0 }),
            CellValue::Text(_) | CellValue::Absent => None,
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            // Whole numbers print without a trailing ".0"
            CellValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => {
                write!(f, "{}", *n as i64)
            }
            CellValue::Number(n) => write!(f, "{}", n),
            CellValue::Boolean(b) => write!(f, "{}", b),
            CellValue::Text(s) => f.write_str(s),
            CellValue::Absent => f.write_str("N/A"),
        }
    }
}

/// One data row, positionally aligned with the dataset's headers
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Row {
    pub cells: Vec<CellValue>,
}

impl Row {
    pub fn new(cells: Vec<CellValue>) -> Self {
        Self { cells }
    }

    /// Value at a column position, `Absent` when the row has none
    pub fn get(&self, index: usize) -> &CellValue {
        self.cells.get(index).unwrap_or(&ABSENT)
    }

    /// A row carries no data when every field is empty text or absent
    pub fn is_empty_row(&self) -> bool {
        self.cells
            .iter()
            .all(|cell| cell.is_blank() || cell.is_absent())
    }
}

/// Ordered column names of a dataset, compared by content and order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Schema(Vec<String>);

impl Schema {
    pub fn new(headers: Vec<String>) -> Self {
        Self(headers)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn headers(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn first(&self) -> Option<&str> {
        self.get(0)
    }

    pub fn contains(&self, header: &str) -> bool {
        self.0.iter().any(|h| h == header)
    }

    pub fn position(&self, header: &str) -> Option<usize> {
        self.0.iter().position(|h| h == header)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

/// The full in-memory table from one CSV upload.
///
/// Headers and rows are fixed together at construction: every row holds
/// exactly one value per header and header names are unique.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    schema: Schema,
    rows: Vec<Row>,
}

impl Dataset {
    /// Build a dataset, padding short rows with `Absent`.
    ///
    /// Fails with `Malformed` on duplicate headers or on a row wider than
    /// the header line.
    pub fn new(headers: Vec<String>, rows: Vec<Row>) -> ParseResult<Self> {
        let mut seen = HashSet::new();
        for header in &headers {
            if !seen.insert(header.as_str()) {
                return Err(ParseError::Malformed {
                    line: Some(1),
                    message: format!("duplicate header \"{}\"", header),
                });
            }
        }
        if !rows.is_empty() && headers.is_empty() {
            return Err(ParseError::Malformed {
                line: Some(1),
                message: "rows without a header line".to_string(),
            });
        }

        let width = headers.len();
        let mut normalized = Vec::with_capacity(rows.len());
        for (i, mut row) in rows.into_iter().enumerate() {
            if row.cells.len() > width {
                return Err(ParseError::Malformed {
                    line: Some(i as u64 + 2),
                    message: format!(
                        "expected {} fields, found {}",
                        width,
                        row.cells.len()
                    ),
                });
            }
            row.cells.resize(width, CellValue::Absent);
            normalized.push(row);
        }

        Ok(Self {
            schema: Schema::new(headers),
            rows: normalized,
        })
    }

    pub fn empty() -> Self {
        Self::default()
    }

    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    pub fn headers(&self) -> &[String] {
        self.schema.headers()
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.schema.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Value of `row` under `header`, `Absent` for an unknown header
    pub fn cell<'a>(&self, row: &'a Row, header: &str) -> &'a CellValue {
        match self.schema.position(header) {
            Some(index) => row.get(index),
            None => &ABSENT,
        }
    }
}

// ============================================================================
// Chart Types
// ============================================================================

/// Types of charts available
#[derive(Clone, Copy, Debug, Default, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    #[default]
    Bar,
    Line,
    Pie,
    Area,
    Scatter,
}

impl ChartKind {
    pub fn label(&self) -> &'static str {
        match self {
            ChartKind::Bar => "Bar",
            ChartKind::Line => "Line",
            ChartKind::Pie => "Pie",
            ChartKind::Area => "Area",
            ChartKind::Scatter => "Scatter",
        }
    }

    pub fn all() -> &'static [ChartKind] {
        &[
            ChartKind::Bar,
            ChartKind::Line,
            ChartKind::Pie,
            ChartKind::Area,
            ChartKind::Scatter,
        ]
    }

    /// Kinds plotted against an x/y axis pair
    pub fn uses_axes(&self) -> bool {
        !matches!(self, ChartKind::Pie)
    }

    /// Which binding fields the user can meaningfully choose for this kind
    pub fn selectable_fields(&self) -> &'static [BindingField] {
        match self {
            ChartKind::Pie => &[BindingField::PieValue],
            _ => &[BindingField::X, BindingField::Y, BindingField::Category],
        }
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label().to_lowercase())
    }
}

impl FromStr for ChartKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "bar" => Ok(ChartKind::Bar),
            "line" => Ok(ChartKind::Line),
            "pie" => Ok(ChartKind::Pie),
            "area" => Ok(ChartKind::Area),
            "scatter" => Ok(ChartKind::Scatter),
            other => Err(format!(
                "unknown chart kind \"{}\" (expected bar, line, pie, area or scatter)",
                other
            )),
        }
    }
}

/// A visual role that can be bound to a schema column
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BindingField {
    X,
    Y,
    Category,
    PieValue,
}

impl BindingField {
    pub fn label(&self) -> &'static str {
        match self {
            BindingField::X => "X Axis",
            BindingField::Y => "Y Axis",
            BindingField::Category => "Category",
            BindingField::PieValue => "Pie Value",
        }
    }
}

impl fmt::Display for BindingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Mapping from chart roles to schema columns. `None` means unset.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BindingSet {
    pub x_column: Option<String>,
    pub y_column: Option<String>,
    pub category_column: Option<String>,
    pub pie_value_column: Option<String>,
}

impl BindingSet {
    pub fn unset() -> Self {
        Self::default()
    }

    pub fn with_x(mut self, header: impl Into<String>) -> Self {
        self.x_column = Some(header.into());
        self
    }

    pub fn with_y(mut self, header: impl Into<String>) -> Self {
        self.y_column = Some(header.into());
        self
    }

    pub fn with_category(mut self, header: impl Into<String>) -> Self {
        self.category_column = Some(header.into());
        self
    }

    pub fn with_pie_value(mut self, header: impl Into<String>) -> Self {
        self.pie_value_column = Some(header.into());
        self
    }

    pub fn get(&self, field: BindingField) -> Option<&str> {
        match field {
            BindingField::X => self.x_column.as_deref(),
            BindingField::Y => self.y_column.as_deref(),
            BindingField::Category => self.category_column.as_deref(),
            BindingField::PieValue => self.pie_value_column.as_deref(),
        }
    }

    pub fn set(&mut self, field: BindingField, header: Option<String>) {
        let slot = match field {
            BindingField::X => &mut self.x_column,
            BindingField::Y => &mut self.y_column,
            BindingField::Category => &mut self.category_column,
            BindingField::PieValue => &mut self.pie_value_column,
        };
        *slot = header;
    }

    pub fn is_unset(&self) -> bool {
        self == &Self::unset()
    }

    /// Every set field names a header of `schema`
    pub fn is_valid_for(&self, schema: &Schema) -> bool {
        [
            &self.x_column,
            &self.y_column,
            &self.category_column,
            &self.pie_value_column,
        ]
        .into_iter()
        .flatten()
        .all(|header| schema.contains(header))
    }
}

// ============================================================================
// Display Configuration
// ============================================================================

/// Presentation toggles and chart size. Independent of the schema.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub title: String,
    pub show_legend: bool,
    pub show_grid: bool,
    /// Feed only the first rows to the chart
    pub limit_rows: bool,
    /// Show every row in the table preview instead of the first rows
    pub show_all_table_rows: bool,
    /// Whether the table preview is shown at all
    pub show_table: bool,
    pub width: u32,
    pub height: u32,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            show_legend: true,
            show_grid: true,
            limit_rows: true,
            show_all_table_rows: false,
            show_table: true,
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
        }
    }
}

impl DisplayConfig {
    /// Copy of this configuration with width/height forced into range
    pub fn clamped(mut self) -> Self {
        self.width = clamp_width(self.width);
        self.height = clamp_height(self.height);
        self
    }

    /// Apply one option, clamping numeric values. Returns the option as stored.
    pub fn apply(&mut self, option: DisplayOption) -> DisplayOption {
        match option {
            DisplayOption::Title(title) => {
                self.title = title.clone();
                DisplayOption::Title(title)
            }
            DisplayOption::ShowLegend(v) => {
                self.show_legend = v;
                option
            }
            DisplayOption::ShowGrid(v) => {
                self.show_grid = v;
                option
            }
            DisplayOption::LimitRows(v) => {
                self.limit_rows = v;
                option
            }
            DisplayOption::ShowAllTableRows(v) => {
                self.show_all_table_rows = v;
                option
            }
            DisplayOption::ShowTable(v) => {
                self.show_table = v;
                option
            }
            DisplayOption::Width(w) => {
                self.width = clamp_width(w);
                DisplayOption::Width(self.width)
            }
            DisplayOption::Height(h) => {
                self.height = clamp_height(h);
                DisplayOption::Height(self.height)
            }
        }
    }
}

/// One settable display option with its new value
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "key", content = "value")]
pub enum DisplayOption {
    Title(String),
    ShowLegend(bool),
    ShowGrid(bool),
    LimitRows(bool),
    ShowAllTableRows(bool),
    ShowTable(bool),
    Width(u32),
    Height(u32),
}

pub fn clamp_width(width: u32) -> u32 {
    width.clamp(MIN_CHART_WIDTH, MAX_CHART_WIDTH)
}

pub fn clamp_height(height: u32) -> u32 {
    height.clamp(MIN_CHART_HEIGHT, MAX_CHART_HEIGHT)
}
