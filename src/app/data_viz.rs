//! Chart configuration methods - kind, bindings, display options, rendering

use super::state::SessionStore;
use crate::data::{
    ChartRenderer, InvalidBinding, RenderRequest, build_render_request, carry_value_role,
    is_user_selectable, resolve,
};
use crate::data_table::TablePreview;
use crate::types::{BindingField, ChartKind, DisplayOption};

impl SessionStore {
    /// Switch the chart kind and repair bindings against the current schema.
    ///
    /// Still-valid choices survive; the value column carries across the
    /// axis/pie boundary. The axis-chart category is set aside while pie
    /// forces its own and restored on the way back.
    pub fn set_chart_kind(&mut self, kind: ChartKind) {
        let previous = self.state.chart_kind;
        let mut prior = carry_value_role(&self.state.bindings, previous, kind);

        match (previous.uses_axes(), kind.uses_axes()) {
            (true, false) => self.stashed_category = prior.category_column.take(),
            (false, true) => prior.category_column = self.stashed_category.take(),
            _ => {}
        }

        self.state.bindings = resolve(&self.state.schema, kind, &prior);
        self.state.chart_kind = kind;

        tracing::debug!(
            from = %previous,
            to = %kind,
            bindings = ?self.state.bindings,
            "Chart kind changed"
        );
    }

    /// Bind `field` to `header`.
    ///
    /// Rejected (state unchanged apart from the error notice) when the header
    /// is not in the current schema or the field is fixed for this kind.
    pub fn set_binding(&mut self, field: BindingField, header: &str) -> Result<(), InvalidBinding> {
        let kind = self.state.chart_kind;
        let rejection = if !is_user_selectable(kind, field) {
            Some(InvalidBinding::FixedField { field, kind })
        } else if !self.state.schema.contains(header) {
            Some(InvalidBinding::UnknownHeader {
                field,
                header: header.to_string(),
            })
        } else {
            None
        };

        if let Some(err) = rejection {
            tracing::warn!("Rejected binding: {}", err);
            self.set_error(err.to_string());
            return Err(err);
        }

        self.state.bindings.set(field, Some(header.to_string()));
        tracing::debug!(%field, header, "Binding set");
        Ok(())
    }

    /// Update one display option. Width and height are clamped into range;
    /// the option as actually stored is returned.
    pub fn set_display_option(&mut self, option: DisplayOption) -> DisplayOption {
        let applied = self.state.display.apply(option.clone());
        if applied != option {
            tracing::warn!(requested = ?option, applied = ?applied, "Display value clamped");
        } else {
            tracing::debug!(option = ?applied, "Display option set");
        }
        applied
    }

    /// What the renderer should draw right now, if anything
    pub fn render_request(&self) -> Option<RenderRequest<'_>> {
        build_render_request(
            &self.state.dataset,
            self.state.chart_kind,
            &self.state.bindings,
            &self.state.display,
        )
    }

    /// Hand the current request to `renderer` and keep the surface it returns.
    ///
    /// Returns false (and drops any old surface) when there is nothing to draw.
    pub fn render(&mut self, renderer: &mut dyn ChartRenderer) -> bool {
        let surface = self.render_request().map(|request| renderer.render(&request));
        let rendered = surface.is_some();
        self.surface = surface;
        rendered
    }

    /// The table preview surface, unless hidden or empty
    pub fn table_preview(&self) -> Option<TablePreview> {
        if !self.state.display.show_table || !self.state.has_data() {
            return None;
        }
        Some(TablePreview::build(
            &self.state.dataset,
            self.state.display.show_all_table_rows,
        ))
    }
}
