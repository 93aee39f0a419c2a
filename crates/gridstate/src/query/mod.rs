//! Request-parameter derivation.
//!
//! [`ParamBuilder`] turns a field set plus a personalization snapshot into
//! the parameters of a data request: select names, expand paths, sorters,
//! and a normalized filter tree. It fetches exactly what the current state
//! needs to render - nothing more (payload size) and nothing less (no
//! missing cell data).
//!
//! The builder is a pure, stateless transform: identical inputs always
//! produce identical [`RequestParameters`]. Data-quality problems never
//! abort a build; the offending entry is omitted and reported as a
//! [`BuildWarning`].
//!
//! ```rust
//! use gridstate::query::ParamBuilder;
//! use gridstate_model::{ColumnState, FieldMetadata, FieldSet, FieldType};
//!
//! let fields = FieldSet::new(vec![
//!     FieldMetadata::new("Name", FieldType::String).max_length(40),
//!     FieldMetadata::new("Amount", FieldType::Currency).unit("Currency"),
//!     FieldMetadata::new("Currency", FieldType::String).max_length(3),
//! ])
//! .unwrap();
//!
//! let snapshot = vec![
//!     ColumnState::new("Name").ascending(),
//!     ColumnState::new("Amount"),
//! ];
//!
//! let outcome = ParamBuilder::new(&fields).build(&snapshot);
//! assert_eq!(outcome.params.select, vec!["Name", "Amount", "Currency"]);
//! assert!(outcome.warnings.is_empty());
//! ```

mod expand;
mod filters;
mod params;
mod resolve;
mod select;
mod sorters;
mod warning;

pub use params::{BuildOutcome, FilterNode, RequestParameters, Sorter};
pub use warning::BuildWarning;

use gridstate_model::{ColumnState, FieldSet};

/// Derives request parameters from a personalization snapshot.
///
/// Holds the field set and build options; the snapshot is supplied per call
/// so one builder serves every rebind of a table.
#[derive(Clone, Debug)]
pub struct ParamBuilder<'a> {
    fields: &'a FieldSet,
    always_include: Vec<String>,
    multi_unit_sort: bool,
}

impl<'a> ParamBuilder<'a> {
    /// Creates a builder over the given field set.
    pub fn new(fields: &'a FieldSet) -> Self {
        ParamBuilder {
            fields,
            always_include: Vec::new(),
            multi_unit_sort: false,
        }
    }

    /// Field names appended to every select list (key fields, etag fields).
    pub fn always_include<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.always_include = names.into_iter().map(Into::into).collect();
        self
    }

    /// Enables implicit unit sorters for measures paired with a unit field.
    pub fn multi_unit_sort(mut self, enabled: bool) -> Self {
        self.multi_unit_sort = enabled;
        self
    }

    /// Derives the select list.
    pub fn select_fields(&self, states: &[ColumnState]) -> (Vec<String>, Vec<BuildWarning>) {
        let mut warnings = Vec::new();
        let select = select::build_select(self.fields, states, &self.always_include, &mut warnings);
        (select, warnings)
    }

    /// Derives the expand paths for an already-built select list.
    pub fn expand_paths(&self, select: &[String]) -> Vec<String> {
        expand::build_expand(self.fields, select)
    }

    /// Derives the sorter list.
    pub fn sorters(&self, states: &[ColumnState]) -> (Vec<Sorter>, Vec<BuildWarning>) {
        let mut warnings = Vec::new();
        let sorters = sorters::build_sorters(self.fields, states, self.multi_unit_sort, &mut warnings);
        (sorters, warnings)
    }

    /// Derives the filter tree. `None` means no filtering.
    pub fn filters(&self, states: &[ColumnState]) -> (Option<FilterNode>, Vec<BuildWarning>) {
        let mut warnings = Vec::new();
        let filters = filters::build_filters(self.fields, states, &mut warnings);
        (filters, warnings)
    }

    /// Runs all four derivations and deduplicates the combined warnings
    /// (one malformed column would otherwise be reported by every
    /// derivation that touches it).
    pub fn build(&self, states: &[ColumnState]) -> BuildOutcome {
        let mut warnings = Vec::new();
        let select = select::build_select(self.fields, states, &self.always_include, &mut warnings);
        let expand = expand::build_expand(self.fields, &select);
        let sorters = sorters::build_sorters(self.fields, states, self.multi_unit_sort, &mut warnings);
        let filters = filters::build_filters(self.fields, states, &mut warnings);

        let mut seen = std::collections::HashSet::new();
        warnings.retain(|w| seen.insert(w.clone()));

        BuildOutcome {
            params: RequestParameters {
                select,
                expand,
                filters,
                sorters,
            },
            warnings,
        }
    }
}
