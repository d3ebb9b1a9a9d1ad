//! Unit tests for the export adapter and page layout.

use crate::helpers::{FakeSurface, FakeWriter, MemorySink};
use csvchart::data::ChartSurface;
use csvchart::pdf::{
    ExportError, PageLayout, PageOrientation, export_as_document, export_as_png,
};

fn surface(width: u32, height: u32) -> FakeSurface {
    FakeSurface {
        width,
        height,
        fail: false,
    }
}

#[test]
fn test_export_without_surface() {
    let writer = FakeWriter::default();
    let mut sink = MemorySink::default();

    let err = export_as_document(None, &writer, &mut sink).unwrap_err();
    assert!(matches!(err, ExportError::NoSurface));
    assert!(sink.delivered.is_empty());
}

#[test]
fn test_wide_chart_exports_landscape() {
    let chart = surface(700, 400);
    let writer = FakeWriter::default();
    let mut sink = MemorySink::default();

    export_as_document(Some(&chart as &dyn ChartSurface), &writer, &mut sink).unwrap();

    let layouts = writer.layouts.borrow();
    assert_eq!(layouts[0].orientation, PageOrientation::Landscape);
    assert_eq!((layouts[0].image_x_mm, layouts[0].image_y_mm), (10.0, 10.0));
    assert_eq!(sink.delivered.len(), 1);
    assert_eq!(sink.delivered[0].0, "chart.pdf");
    assert!(sink.delivered[0].1.starts_with(b"700x400:"));
}

#[test]
fn test_square_chart_exports_portrait() {
    let layout = PageLayout::for_image(500, 500).unwrap();
    assert_eq!(layout.orientation, PageOrientation::Portrait);
    assert_eq!((layout.page_width_mm, layout.page_height_mm), (210.0, 297.0));
    assert_eq!(layout.image_width_mm, 180.0);
    assert_eq!(layout.image_height_mm, 180.0);
}

#[test]
fn test_tall_capture_is_shrunk_to_fit_page() {
    let layout = PageLayout::for_image(400, 800).unwrap();
    assert_eq!(layout.orientation, PageOrientation::Portrait);
    assert!(layout.image_y_mm + layout.image_height_mm <= layout.page_height_mm - 10.0 + 1e-3);
    let ratio = layout.image_height_mm / layout.image_width_mm;
    assert!((ratio - 2.0).abs() < 1e-3);
}

#[test]
fn test_capture_failure_is_reported() {
    let chart = FakeSurface {
        width: 700,
        height: 400,
        fail: true,
    };
    let mut sink = MemorySink::default();
    let err = export_as_png(Some(&chart as &dyn ChartSurface), &mut sink).unwrap_err();
    assert!(matches!(err, ExportError::Capture(_)));
}

#[test]
fn test_sink_failure_is_reported() {
    let chart = surface(700, 400);
    let mut sink = MemorySink {
        fail: true,
        ..Default::default()
    };
    let err = export_as_png(Some(&chart as &dyn ChartSurface), &mut sink).unwrap_err();
    match err {
        ExportError::Sink { name, .. } => assert_eq!(name, "chart.png"),
        other => panic!("expected Sink error, got {:?}", other),
    }
}

#[test]
fn test_png_export_is_png() {
    let chart = surface(400, 300);
    let mut sink = MemorySink::default();
    export_as_png(Some(&chart as &dyn ChartSurface), &mut sink).unwrap();

    let (name, bytes) = &sink.delivered[0];
    assert_eq!(name, "chart.png");
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
}
