//! PDF document writer backed by PDFium.

use crate::pdf::export::{DocumentWriter, ExportError, ExportResult};
use crate::pdf::layout::PageLayout;
use crate::pdf::pdfium_loader::PdfiumLoader;
use image::{DynamicImage, RgbaImage};
use pdfium_render::prelude::*;

/// Writes a one-page PDF with the chart image placed per [`PageLayout`].
///
/// PDFium is bound lazily on each write so that a missing library only
/// affects export, never ingestion or rendering.
#[derive(Clone, Copy, Debug, Default)]
pub struct PdfiumWriter;

impl PdfiumWriter {
    pub fn new() -> Self {
        Self
    }
}

impl DocumentWriter for PdfiumWriter {
    fn write_document(&self, image: &RgbaImage, layout: &PageLayout) -> ExportResult<Vec<u8>> {
        let pdfium = PdfiumLoader::load().map_err(ExportError::Document)?;
        let document_error = |e: PdfiumError| ExportError::Document(format!("{:?}", e));

        let mut document = pdfium.create_new_pdf().map_err(document_error)?;
        {
            let paper = PdfPagePaperSize::Custom(
                PdfPoints::from_mm(layout.page_width_mm),
                PdfPoints::from_mm(layout.page_height_mm),
            );
            let mut page = document
                .pages_mut()
                .create_page_at_end(paper)
                .map_err(document_error)?;

            // PDF coordinates start at the bottom-left corner
            page.objects_mut()
                .create_image_object(
                    PdfPoints::from_mm(layout.image_x_mm),
                    PdfPoints::from_mm(layout.image_bottom_mm()),
                    &DynamicImage::ImageRgba8(image.clone()),
                    Some(PdfPoints::from_mm(layout.image_width_mm)),
                    Some(PdfPoints::from_mm(layout.image_height_mm)),
                )
                .map_err(document_error)?;
        }

        document.save_to_bytes().map_err(document_error)
    }
}
