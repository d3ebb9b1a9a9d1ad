//! Page layout for exported charts.
//!
//! All measurements are millimetres with the origin at the top-left corner
//! of the page.

use crate::constants::{EXPORT_IMAGE_WIDTH_MM, PAGE_HEIGHT_MM, PAGE_MARGIN_MM, PAGE_WIDTH_MM};
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum PageOrientation {
    Portrait,
    Landscape,
}

impl PageOrientation {
    /// Landscape only when strictly wider than tall
    pub fn for_size(width: u32, height: u32) -> Self {
        if width > height {
            PageOrientation::Landscape
        } else {
            PageOrientation::Portrait
        }
    }

    /// Page size in millimetres (width, height)
    pub fn page_size_mm(&self) -> (f32, f32) {
        match self {
            PageOrientation::Portrait => (PAGE_WIDTH_MM, PAGE_HEIGHT_MM),
            PageOrientation::Landscape => (PAGE_HEIGHT_MM, PAGE_WIDTH_MM),
        }
    }
}

/// Where a captured chart goes on its single page
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct PageLayout {
    pub orientation: PageOrientation,
    pub page_width_mm: f32,
    pub page_height_mm: f32,
    pub image_x_mm: f32,
    pub image_y_mm: f32,
    pub image_width_mm: f32,
    pub image_height_mm: f32,
}

impl PageLayout {
    /// Lay out a `width`×`height` pixel capture.
    ///
    /// The image is placed at the margin, [`EXPORT_IMAGE_WIDTH_MM`] wide with
    /// its aspect ratio kept, then shrunk uniformly if it would run past the
    /// bottom margin. Returns `None` for a zero-sized capture.
    pub fn for_image(width: u32, height: u32) -> Option<Self> {
        if width == 0 || height == 0 {
            return None;
        }

        let orientation = PageOrientation::for_size(width, height);
        let (page_width_mm, page_height_mm) = orientation.page_size_mm();
        let ratio = height as f32 / width as f32;

        let mut image_width_mm = EXPORT_IMAGE_WIDTH_MM;
        let mut image_height_mm = EXPORT_IMAGE_WIDTH_MM * ratio;

        let max_height = page_height_mm - 2.0 * PAGE_MARGIN_MM;
        if image_height_mm > max_height {
            let scale = max_height / image_height_mm;
            image_width_mm *= scale;
            image_height_mm = max_height;
        }

        Some(Self {
            orientation,
            page_width_mm,
            page_height_mm,
            image_x_mm: PAGE_MARGIN_MM,
            image_y_mm: PAGE_MARGIN_MM,
            image_width_mm,
            image_height_mm,
        })
    }

    /// Distance from the page bottom to the image bottom, for bottom-left
    /// origin document formats
    pub fn image_bottom_mm(&self) -> f32 {
        self.page_height_mm - self.image_y_mm - self.image_height_mm
    }
}
