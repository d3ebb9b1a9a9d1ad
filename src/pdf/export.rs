//! Export adapter: captured chart surface → downloadable document.
//!
//! Reads nothing from the session but the surface it is given. The
//! document bytes come from a [`DocumentWriter`] and are handed to an
//! [`ExportSink`]; neither the writer backend nor the delivery mechanism
//! are known here.

use crate::constants::{PDF_DOCUMENT_NAME, PNG_DOCUMENT_NAME};
use crate::data::ChartSurface;
use crate::pdf::layout::PageLayout;
use image::{DynamicImage, ImageFormat, RgbaImage};
use std::io::Cursor;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ExportError {
    /// Nothing has been rendered to capture
    #[error("Nothing to export: load a CSV file first")]
    NoSurface,

    #[error("Failed to capture chart: {0}")]
    Capture(String),

    #[error("Failed to encode image: {0}")]
    Encode(#[from] image::ImageError),

    #[error("Failed to build document: {0}")]
    Document(String),

    #[error("Failed to deliver {name}: {source}")]
    Sink {
        name: String,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for export operations
pub type ExportResult<T> = Result<T, ExportError>;

/// Turns a raster image and its page layout into document bytes
pub trait DocumentWriter {
    fn write_document(&self, image: &RgbaImage, layout: &PageLayout) -> ExportResult<Vec<u8>>;
}

/// Receives a finished, named document
pub trait ExportSink {
    fn deliver(&mut self, name: &str, payload: Vec<u8>) -> std::io::Result<()>;
}

/// Sink writing the payload to a fixed path
#[derive(Clone, Debug)]
pub struct FileSink {
    pub path: PathBuf,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ExportSink for FileSink {
    fn deliver(&mut self, name: &str, payload: Vec<u8>) -> std::io::Result<()> {
        tracing::debug!(name, path = %self.path.display(), bytes = payload.len(), "Writing export");
        std::fs::write(&self.path, payload)
    }
}

/// Capture `surface` into a single-page document and deliver it as
/// `chart.pdf`.
pub fn export_as_document(
    surface: Option<&dyn ChartSurface>,
    writer: &dyn DocumentWriter,
    sink: &mut dyn ExportSink,
) -> ExportResult<()> {
    let image = capture(surface)?;
    let layout = PageLayout::for_image(image.width(), image.height())
        .ok_or_else(|| ExportError::Capture("captured image is empty".to_string()))?;

    let payload = writer.write_document(&image, &layout)?;
    deliver(sink, PDF_DOCUMENT_NAME, payload)?;

    tracing::info!(
        orientation = ?layout.orientation,
        width = image.width(),
        height = image.height(),
        "Exported {}",
        PDF_DOCUMENT_NAME
    );
    Ok(())
}

/// Capture `surface` and deliver it as `chart.png`
pub fn export_as_png(
    surface: Option<&dyn ChartSurface>,
    sink: &mut dyn ExportSink,
) -> ExportResult<()> {
    let image = capture(surface)?;
    let payload = encode_png(image)?;
    deliver(sink, PNG_DOCUMENT_NAME, payload)?;

    tracing::info!("Exported {}", PNG_DOCUMENT_NAME);
    Ok(())
}

/// PNG bytes of a captured image
pub fn encode_png(image: RgbaImage) -> ExportResult<Vec<u8>> {
    let mut buffer = Cursor::new(Vec::new());
    DynamicImage::ImageRgba8(image).write_to(&mut buffer, ImageFormat::Png)?;
    Ok(buffer.into_inner())
}

fn capture(surface: Option<&dyn ChartSurface>) -> ExportResult<RgbaImage> {
    let surface = surface.ok_or(ExportError::NoSurface)?;
    surface.capture().map_err(ExportError::Capture)
}

fn deliver(sink: &mut dyn ExportSink, name: &str, payload: Vec<u8>) -> ExportResult<()> {
    sink.deliver(name, payload).map_err(|source| ExportError::Sink {
        name: name.to_string(),
        source,
    })
}
