//! Binding resolution
//!
//! Produces a binding set that is valid for a schema and chart kind. Runs at
//! every schema or chart-kind change. Still-valid user choices are kept;
//! only fields that no longer name a header are repaired to their defaults.
//!
//! Defaults:
//! - x: `headers[0]`
//! - y and pie value: `headers[1]`, or `headers[0]` for a one-column schema
//! - category: unset, except for pie where it is always `headers[0]`

use crate::types::{BindingField, BindingSet, ChartKind, Schema};

/// Resolve `prior` against `schema` for `kind`. Never fails.
pub fn resolve(schema: &Schema, kind: ChartKind, prior: &BindingSet) -> BindingSet {
    let Some(first) = schema.first() else {
        return BindingSet::unset();
    };
    let value_default = schema.get(1).unwrap_or(first);

    let keep = |current: &Option<String>| -> Option<String> {
        current
            .as_deref()
            .filter(|header| schema.contains(header))
            .map(str::to_string)
    };

    let category_column = match kind {
        ChartKind::Pie => Some(first.to_string()),
        _ => keep(&prior.category_column),
    };

    BindingSet {
        x_column: keep(&prior.x_column).or_else(|| Some(first.to_string())),
        y_column: keep(&prior.y_column).or_else(|| Some(value_default.to_string())),
        category_column,
        pie_value_column: keep(&prior.pie_value_column)
            .or_else(|| Some(value_default.to_string())),
    }
}

/// Carry the value role across a chart-kind switch.
///
/// Axis kinds plot `y`, pie plots `pie_value`. Entering pie takes the current
/// `y` as the pie value; leaving pie takes the pie value as `y`. A source
/// field that is unset leaves the target untouched.
pub fn carry_value_role(prior: &BindingSet, from: ChartKind, to: ChartKind) -> BindingSet {
    let mut carried = prior.clone();
    match (from.uses_axes(), to.uses_axes()) {
        (true, false) if prior.y_column.is_some() => {
            carried.set(BindingField::PieValue, prior.y_column.clone());
        }
        (false, true) if prior.pie_value_column.is_some() => {
            carried.set(BindingField::Y, prior.pie_value_column.clone());
        }
        _ => {}
    }
    carried
}

/// Whether `field` may be chosen by the user under `kind`
pub fn is_user_selectable(kind: ChartKind, field: BindingField) -> bool {
    !(kind == ChartKind::Pie && field == BindingField::Category)
}
