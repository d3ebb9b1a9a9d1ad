//! Unit tests for csvchart.

mod chart_view_tests;
mod export_tests;
mod notifications_tests;
mod snapshot_tests;
