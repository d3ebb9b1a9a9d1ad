//! Application module - the session store and its mutation entry points.
//!
//! This module is organized into several submodules:
//! - `state` - The SessionState and SessionStore definitions
//! - `lifecycle` - Construction and the load-new-file transition
//! - `data_viz` - Chart kind, bindings, display options, rendering
//! - `ingestion` - Upload scheduling (cancel-and-replace)
//! - `error_recovery` - The auto-dismissed error notice
//! - `export` - PDF/PNG export handlers

mod data_viz;
mod error_recovery;
mod export;
mod ingestion;
mod lifecycle;
mod state;

pub use ingestion::{IngestOutcome, IngestTicket, SharedSession, shared, spawn_ingestion};
pub use state::{SessionSnapshot, SessionState, SessionStore};
