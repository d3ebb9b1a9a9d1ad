//! Snapshot tests using the insta crate.
//!
//! Serialized shapes (session snapshot, table preview, display options) are
//! what the presentation layer and the CLI consume, so they are pinned here.
//!
//! To update snapshots after intentional changes:
//! ```sh
//! cargo insta test --accept
//! ```

use crate::helpers::loaded_store;
use csvchart::types::{ChartKind, DisplayOption};

const SALES_CSV: &str = "region,revenue\nnorth,1200\nsouth,\n";

#[test]
fn snapshot_session_after_load() {
    let store = loaded_store(SALES_CSV);
    insta::assert_json_snapshot!(store.state().snapshot(), @r#"
    {
      "headers": [
        "region",
        "revenue"
      ],
      "row_count": 2,
      "chart_kind": "bar",
      "bindings": {
        "x_column": "region",
        "y_column": "revenue",
        "category_column": null,
        "pie_value_column": "revenue"
      },
      "display": {
        "title": "Data Visualization",
        "show_legend": true,
        "show_grid": true,
        "limit_rows": true,
        "show_all_table_rows": false,
        "show_table": true,
        "width": 700,
        "height": 400
      },
      "loading": false,
      "error": null
    }
    "#);
}

#[test]
fn snapshot_session_after_switch_to_pie() {
    let mut store = loaded_store(SALES_CSV);
    store.set_chart_kind(ChartKind::Pie);
    insta::assert_json_snapshot!(store.state().bindings, @r#"
    {
      "x_column": "region",
      "y_column": "revenue",
      "category_column": "region",
      "pie_value_column": "revenue"
    }
    "#);
}

#[test]
fn snapshot_table_preview() {
    let store = loaded_store(SALES_CSV);
    insta::assert_json_snapshot!(store.table_preview(), @r#"
    {
      "title": "Data Preview (First 50 Rows)",
      "headers": [
        "region",
        "revenue"
      ],
      "rows": [
        [
          "north",
          "1200"
        ],
        [
          "south",
          ""
        ]
      ],
      "row_count_badge": "2 rows",
      "position": "Showing 1-2 of 2"
    }
    "#);
}

#[test]
fn snapshot_display_options() {
    let options = vec![
        DisplayOption::Title("Revenue".to_string()),
        DisplayOption::LimitRows(false),
        DisplayOption::Width(900),
    ];
    insta::assert_json_snapshot!(options, @r#"
    [
      {
        "key": "title",
        "value": "Revenue"
      },
      {
        "key": "limit_rows",
        "value": false
      },
      {
        "key": "width",
        "value": 900
      }
    ]
    "#);
}
