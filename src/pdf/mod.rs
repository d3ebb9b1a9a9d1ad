//! Chart export to PDF and PNG.
//!
//! - `export` - the export adapter, its error type and the writer/sink seams
//! - `layout` - page orientation and image placement
//! - `writer` - PDFium-backed document writer
//! - `pdfium_loader` - Shared PDFium library loading logic

mod export;
mod layout;
mod pdfium_loader;
mod writer;

pub use export::{
    DocumentWriter, ExportError, ExportResult, ExportSink, FileSink, encode_png,
    export_as_document, export_as_png,
};
pub use layout::{PageLayout, PageOrientation};
pub use pdfium_loader::{PDFIUM_DIR_ENV, PdfiumLoader};
pub use writer::PdfiumWriter;
