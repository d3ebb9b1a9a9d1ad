//! Test helpers and builders for reducing boilerplate in tests.
//!
//! This module provides:
//! - `TestDatasetBuilder` - Builder pattern for creating test datasets
//! - `FakeRenderer` / `FakeSurface` - a renderer that records requests
//! - `FakeWriter` / `MemorySink` - export collaborators that keep bytes in memory
//! - `loaded_store()` - a session store with a CSV already applied

#![allow(dead_code)]

use csvchart::app::{IngestOutcome, SessionStore};
use csvchart::data::{ChartRenderer, ChartSurface, RenderRequest};
use csvchart::pdf::{DocumentWriter, ExportError, ExportResult, ExportSink, PageLayout};
use csvchart::types::{CellValue, ChartKind, Dataset, Row};
use image::{Rgba, RgbaImage};
use std::cell::RefCell;
use std::io;

// ============================================================================
// TestDatasetBuilder - Builder pattern for creating test datasets
// ============================================================================

/// Builder for creating test datasets.
///
/// # Example
/// ```ignore
/// let dataset = TestDatasetBuilder::new(&["region", "revenue"])
///     .with_text_row(&["north", "10"])
///     .with_numeric_rows(5)
///     .build();
/// ```
pub struct TestDatasetBuilder {
    headers: Vec<String>,
    rows: Vec<Row>,
}

impl TestDatasetBuilder {
    pub fn new(headers: &[&str]) -> Self {
        Self {
            headers: headers.iter().map(|h| h.to_string()).collect(),
            rows: Vec::new(),
        }
    }

    pub fn with_row(mut self, cells: Vec<CellValue>) -> Self {
        self.rows.push(Row::new(cells));
        self
    }

    /// Add a row typed the way ingestion would type it
    pub fn with_text_row(self, fields: &[&str]) -> Self {
        let cells = fields.iter().map(|f| csvchart::data::parse_field(f)).collect();
        self.with_row(cells)
    }

    /// Add `count` rows whose every cell is the row index
    pub fn with_numeric_rows(mut self, count: usize) -> Self {
        let width = self.headers.len();
        for i in 0..count {
            self.rows
                .push(Row::new(vec![CellValue::Number(i as f64); width]));
        }
        self
    }

    pub fn build(self) -> Dataset {
        Dataset::new(self.headers, self.rows).expect("valid test dataset")
    }
}

/// CSV text with `count` numeric data rows under `headers`
pub fn numeric_csv(headers: &[&str], count: usize) -> String {
    let mut csv = headers.join(",");
    csv.push('\n');
    for i in 0..count {
        let row: Vec<String> = headers.iter().map(|_| i.to_string()).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }
    csv
}

/// A default store with `csv` uploaded as `data.csv`
pub fn loaded_store(csv: &str) -> SessionStore {
    let mut store = SessionStore::default();
    let outcome = store.load_file("data.csv", csv.as_bytes());
    assert_eq!(outcome, IngestOutcome::Applied);
    store
}

// ============================================================================
// Fake rendering collaborators
// ============================================================================

pub struct FakeSurface {
    pub width: u32,
    pub height: u32,
    pub fail: bool,
}

impl ChartSurface for FakeSurface {
    fn capture(&self) -> Result<RgbaImage, String> {
        if self.fail {
            return Err("surface detached".to_string());
        }
        Ok(RgbaImage::from_pixel(
            self.width,
            self.height,
            Rgba([0, 120, 212, 255]),
        ))
    }
}

/// Records what it was asked to draw; surfaces match the display size
#[derive(Default)]
pub struct FakeRenderer {
    pub kinds: Vec<ChartKind>,
    pub row_counts: Vec<usize>,
    pub fail_capture: bool,
}

impl ChartRenderer for FakeRenderer {
    fn render(&mut self, request: &RenderRequest<'_>) -> Box<dyn ChartSurface> {
        self.kinds.push(request.kind);
        self.row_counts.push(request.rows.len());
        Box::new(FakeSurface {
            width: request.display.width,
            height: request.display.height,
            fail: self.fail_capture,
        })
    }
}

// ============================================================================
// Fake export collaborators
// ============================================================================

/// Writes the layout as JSON instead of a real document
#[derive(Default)]
pub struct FakeWriter {
    pub layouts: RefCell<Vec<PageLayout>>,
    pub fail: bool,
}

impl DocumentWriter for FakeWriter {
    fn write_document(&self, image: &RgbaImage, layout: &PageLayout) -> ExportResult<Vec<u8>> {
        if self.fail {
            return Err(ExportError::Document("writer unavailable".to_string()));
        }
        self.layouts.borrow_mut().push(*layout);
        let mut payload = format!("{}x{}:", image.width(), image.height()).into_bytes();
        payload.extend(serde_json::to_vec(layout).expect("layout serializes"));
        Ok(payload)
    }
}

#[derive(Default)]
pub struct MemorySink {
    pub delivered: Vec<(String, Vec<u8>)>,
    pub fail: bool,
}

impl ExportSink for MemorySink {
    fn deliver(&mut self, name: &str, payload: Vec<u8>) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::PermissionDenied, "read-only"));
        }
        self.delivered.push((name.to_string(), payload));
        Ok(())
    }
}
