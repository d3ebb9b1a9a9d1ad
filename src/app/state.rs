//! Session state and the store that owns it.

use crate::data::ChartSurface;
use crate::notifications::ErrorNotice;
use crate::settings::Settings;
use crate::types::{BindingSet, ChartKind, Dataset, DisplayConfig, Schema};
use serde::Serialize;
use std::fmt;

/// The complete mutable state of one user session.
///
/// Only [`SessionStore`] can change it; readers get a shared reference and
/// always see bindings that are valid for the schema next to them.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub dataset: Dataset,
    pub schema: Schema,
    pub bindings: BindingSet,
    pub chart_kind: ChartKind,
    pub display: DisplayConfig,
    /// An ingestion is in flight
    pub loading: bool,
    pub error: Option<ErrorNotice>,
}

impl SessionState {
    pub fn has_data(&self) -> bool {
        !self.dataset.is_empty()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error.as_ref().map(|notice| notice.message.as_str())
    }

    /// Serializable view for logging, output and snapshots
    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            headers: self.schema.headers(),
            row_count: self.dataset.row_count(),
            chart_kind: self.chart_kind,
            bindings: &self.bindings,
            display: &self.display,
            loading: self.loading,
            error: self.error_message(),
        }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SessionSnapshot<'a> {
    pub headers: &'a [String],
    pub row_count: usize,
    pub chart_kind: ChartKind,
    pub bindings: &'a BindingSet,
    pub display: &'a DisplayConfig,
    pub loading: bool,
    pub error: Option<&'a str>,
}

/// Owner of the session state and the only place mutation happens.
///
/// Every mutation entry point runs to completion synchronously, so no reader
/// observes a half-applied transition.
pub struct SessionStore {
    pub(super) state: SessionState,
    pub(super) settings: Settings,
    /// Last surface handed back by the renderer, cleared on new data
    pub(super) surface: Option<Box<dyn ChartSurface>>,
    /// Ticket number of the most recently started ingestion
    pub(super) latest_ticket: u64,
    /// Axis-chart category held while pie forces its own
    pub(super) stashed_category: Option<String>,
}

impl SessionStore {
    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }
}

impl fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionStore")
            .field("state", &self.state)
            .field("settings", &self.settings)
            .field("has_surface", &self.surface.is_some())
            .field("latest_ticket", &self.latest_ticket)
            .field("stashed_category", &self.stashed_category)
            .finish()
    }
}
