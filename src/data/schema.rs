//! Schema derivation and change detection

use crate::types::{Dataset, Schema};

/// The ordered header list of a dataset
pub fn derive_schema(dataset: &Dataset) -> Schema {
    dataset.schema().clone()
}

/// True iff the header sequences differ by content or order
pub fn schema_changed(old: &Schema, new: &Schema) -> bool {
    old.headers() != new.headers()
}
