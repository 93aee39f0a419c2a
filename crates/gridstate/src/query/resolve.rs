//! Column-to-field resolution.
//!
//! Every derivation starts by resolving a [`ColumnState`] to its backing
//! [`FieldMetadata`]: directly by `column_key`, or through a custom column's
//! leading-property mapping. Custom columns without a backing field are
//! legitimate (they occupy display space but contribute nothing to a query);
//! a non-custom column with an unresolvable key is a data-quality problem.

use gridstate_model::{ColumnState, FieldMetadata, FieldSet};

use crate::query::warning::BuildWarning;

/// Outcome of resolving a column to its backing field.
pub(crate) enum Backing<'a> {
    /// Resolved, directly or through the leading property.
    Field(&'a FieldMetadata),
    /// Custom column with no backing field; excluded silently.
    Custom,
    /// Non-custom column with an unresolvable key.
    Unresolved,
}

pub(crate) fn backing<'a>(fields: &'a FieldSet, state: &ColumnState) -> Backing<'a> {
    if let Some(field) = fields.get(&state.column_key) {
        return Backing::Field(field);
    }
    if state.custom {
        if let Some(leading) = &state.leading_property {
            if let Some(field) = fields.get(leading) {
                return Backing::Field(field);
            }
        }
        return Backing::Custom;
    }
    Backing::Unresolved
}

/// Resolves a column, recording a warning for unresolvable non-custom keys.
///
/// Returns `None` both for custom columns (silently) and for unresolvable
/// ones (with a warning); callers skip the column either way.
pub(crate) fn resolve<'a>(
    fields: &'a FieldSet,
    state: &ColumnState,
    warnings: &mut Vec<BuildWarning>,
) -> Option<&'a FieldMetadata> {
    match backing(fields, state) {
        Backing::Field(field) => Some(field),
        Backing::Custom => None,
        Backing::Unresolved => {
            warnings.push(BuildWarning::UnresolvedColumnReference {
                column_key: state.column_key.clone(),
            });
            None
        }
    }
}
