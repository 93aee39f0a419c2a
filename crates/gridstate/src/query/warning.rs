//! Non-fatal diagnostics emitted while deriving request parameters.

use thiserror::Error;

/// A recoverable problem found in personalization state or field metadata.
///
/// Warnings are returned beside results, never thrown: malformed
/// personalization payloads exist in the wild and must degrade to a partial
/// result rather than abort the whole table. The offending column, sorter,
/// or filter is simply omitted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Error)]
pub enum BuildWarning {
    /// A column references a key with no backing field and is not marked as
    /// a legitimate custom column.
    #[error("column '{column_key}' has no backing field")]
    UnresolvedColumnReference { column_key: String },

    /// A field references a unit/description/additional-property name that
    /// does not exist in the field set.
    #[error("field '{field}' references unknown field '{referent}'")]
    DanglingReference { field: String, referent: String },

    /// A sorted column's backing field is not sortable.
    #[error("field '{field}' is not sortable")]
    NotSortable { field: String },

    /// A filtered column's backing field is not filterable.
    #[error("field '{field}' is not filterable")]
    NotFilterable { field: String },
}
