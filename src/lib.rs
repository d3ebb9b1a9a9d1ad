//! csvchart - load a CSV file, bind its columns to a chart, export it.
//!
//! ## Modules
//!
//! - `types` - dataset, schema, bindings and display configuration
//! - `data` - ingestion, binding resolution and render request assembly
//! - `app` - the session store, the single owner of mutable state
//! - `data_table` - table preview surface
//! - `render` - software chart renderer
//! - `pdf` - PDF/PNG export
//! - `settings` - persisted defaults and limits
//! - `notifications` - the auto-dismissed error notice

pub mod app;
pub mod constants;
pub mod data;
pub mod data_table;
pub mod notifications;
pub mod pdf;
pub mod render;
pub mod settings;
pub mod types;
