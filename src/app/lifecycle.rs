//! Store construction and the "load new file" transition.

use super::state::{SessionState, SessionStore};
use crate::data::{derive_schema, resolve, schema_changed};
use crate::settings::Settings;
use crate::types::{BindingSet, ChartKind, Dataset};

impl SessionStore {
    /// Empty session using `settings` for display defaults and limits
    pub fn new(settings: Settings) -> Self {
        let state = SessionState {
            display: settings.display.clone(),
            ..SessionState::default()
        };
        Self {
            state,
            settings,
            surface: None,
            latest_ticket: 0,
            stashed_category: None,
        }
    }

    /// Replace the dataset and reset everything derived from it.
    ///
    /// Chart kind goes back to bar, display options to their defaults, the
    /// error is cleared and bindings are resolved from scratch. This is the
    /// only transition that discards still-valid bindings.
    pub fn load_dataset(&mut self, dataset: Dataset) {
        let schema = derive_schema(&dataset);
        if schema_changed(&self.state.schema, &schema) {
            tracing::debug!(headers = ?schema.headers(), "Schema changed");
        }

        let bindings = resolve(&schema, ChartKind::Bar, &BindingSet::unset());
        let rows = dataset.row_count();

        self.state = SessionState {
            dataset,
            schema,
            bindings,
            chart_kind: ChartKind::Bar,
            display: self.settings.display.clone(),
            loading: self.state.loading,
            error: None,
        };
        self.surface = None;
        self.stashed_category = None;

        tracing::info!(rows, columns = self.state.schema.len(), "Loaded dataset");
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}
