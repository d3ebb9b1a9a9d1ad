//! Unit tests for chart and table row projections and render requests.

use crate::helpers::TestDatasetBuilder;
use csvchart::data::{build_render_request, derive_view, is_truncated, table_preview};
use csvchart::data_table::TablePreview;
use csvchart::types::{BindingSet, CellValue, ChartKind, DisplayConfig};

#[test]
fn test_chart_view_limits_to_first_hundred() {
    let dataset = TestDatasetBuilder::new(&["n"]).with_numeric_rows(150).build();

    let view = derive_view(&dataset, true);
    assert_eq!(view.len(), 100);
    assert_eq!(view[99].get(0), &CellValue::Number(99.0));
    assert!(is_truncated(&dataset, true));

    assert_eq!(derive_view(&dataset, false).len(), 150);
    assert!(!is_truncated(&dataset, false));
}

#[test]
fn test_short_dataset_is_not_truncated() {
    let dataset = TestDatasetBuilder::new(&["n"]).with_numeric_rows(100).build();
    assert_eq!(derive_view(&dataset, true).len(), 100);
    assert!(!is_truncated(&dataset, true));
}

#[test]
fn test_table_preview_is_independent_of_chart_limit() {
    let dataset = TestDatasetBuilder::new(&["n"]).with_numeric_rows(150).build();
    assert_eq!(table_preview(&dataset, false).len(), 50);
    assert_eq!(table_preview(&dataset, true).len(), 150);
}

#[test]
fn test_table_preview_surface() {
    let dataset = TestDatasetBuilder::new(&["region", "revenue"])
        .with_text_row(&["north", "1200"])
        .with_row(vec![CellValue::Text("south".to_string())])
        .build();

    let preview = TablePreview::build(&dataset, false);
    assert_eq!(preview.headers, ["region", "revenue"]);
    assert_eq!(preview.rows, [["north", "1200"], ["south", "N/A"]]);
    assert_eq!(preview.row_count_badge, "2 rows");
    assert_eq!(preview.position, "Showing 1-2 of 2");
}

#[test]
fn test_no_request_without_rows() {
    let dataset = TestDatasetBuilder::new(&["a", "b"]).build();
    let bindings = BindingSet::unset().with_x("a").with_y("b");
    let display = DisplayConfig::default();
    assert!(build_render_request(&dataset, ChartKind::Bar, &bindings, &display).is_none());
}

#[test]
fn test_request_carries_labels_and_limit_notice() {
    let dataset = TestDatasetBuilder::new(&["month", "sales"])
        .with_numeric_rows(120)
        .build();
    let bindings = BindingSet::unset().with_x("month").with_y("sales");
    let display = DisplayConfig::default();

    let request = build_render_request(&dataset, ChartKind::Line, &bindings, &display).unwrap();
    assert_eq!(request.x_label, "month");
    assert_eq!(request.y_label, "sales");
    assert_eq!(request.title, "Data Visualization");
    assert_eq!(request.rows.len(), 100);
    assert!(request.truncated);
    assert!(request.pie.is_none());
}
