//! Data ingestion and chart derivation
//!
//! This module turns an uploaded CSV into a typed dataset and derives
//! everything the chart needs from it.
//!
//! ## Pipeline
//!
//! file bytes → [`ingest`] → dataset → [`derive_schema`] → schema →
//! [`resolve`] (schema + prior bindings + chart kind) → bindings →
//! [`derive_view`] → [`build_render_request`] → rendering collaborator
//!
//! ## Error Handling
//!
//! Ingestion returns `ParseResult<T>` with a [`ParseError`]:
//! - `WrongExtension`: not a `.csv` name, raised before parsing
//! - `Malformed`: the tokenizer rejected a record
//! - `TooLarge` / `TooManyRows`: upload limits
//! - `Empty`: no header line
//!
//! Binding resolution never fails; it degrades to defaults instead.

mod binding;
mod chart_engine;
mod chart_view;
mod csv_parser;
mod error;
mod schema;

pub use binding::*;
pub use chart_engine::*;
pub use chart_view::*;
pub use csv_parser::*;
pub use error::*;
pub use schema::*;
