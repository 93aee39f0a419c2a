//! gridstate-model - Field metadata and column personalization model.
//!
//! This crate defines the plain-data model shared by the gridstate
//! derivation engines:
//!
//! - [`FieldMetadata`] / [`FieldSet`] - one record per queryable property,
//!   loaded once from a metadata source and immutable for the session
//! - [`ColumnState`] - one per column of a personalization snapshot,
//!   mutated by user interaction in a host layer and serialized between
//!   sessions
//! - [`FilterOperator`] / [`FilterCondition`] / [`FilterValue`] - the filter
//!   vocabulary, with operator negation for exclusion semantics
//!
//! The model carries no behavior beyond construction, lookup, and serde:
//! metadata and state are plain data, independent of any rendering object.
//! Payload field names are camelCase so snapshots round-trip against the
//! host system's persistence format.
//!
//! # Example
//!
//! ```rust
//! use gridstate_model::{ColumnState, FieldMetadata, FieldSet, FieldType};
//!
//! let fields = FieldSet::new(vec![
//!     FieldMetadata::new("Name", FieldType::String).max_length(40),
//!     FieldMetadata::new("Amount", FieldType::Currency)
//!         .precision(10)
//!         .scale(2)
//!         .unit("Currency"),
//!     FieldMetadata::new("Currency", FieldType::String).max_length(3),
//! ])
//! .unwrap();
//!
//! let snapshot = vec![
//!     ColumnState::new("Name").ascending(),
//!     ColumnState::new("Amount"),
//! ];
//!
//! assert_eq!(fields.len(), 3);
//! assert!(snapshot.iter().all(|c| fields.contains(&c.column_key)));
//! ```

mod column;
mod error;
mod field;
mod fieldset;

pub use column::{ColumnState, FilterCondition, FilterOperator, FilterValue, SortOrder};
pub use error::{ModelError, Result};
pub use field::{AggregationRole, FieldMetadata, FieldType};
pub use fieldset::FieldSet;
