//! Sorter derivation.
//!
//! Sort priority is encoded positionally: grouped columns come first (in
//! `group_order`), then explicitly sorted columns in snapshot order. A
//! measure paired with a unit field gets an implicit ascending unit sorter
//! spliced in directly after it when multi-unit sorting is enabled, so rows
//! with mixed currencies or units stay contiguous. Explicit sorters always
//! win over implicit ones, and no path appears twice.

use gridstate_model::{AggregationRole, ColumnState, FieldMetadata, FieldSet};

use crate::query::params::Sorter;
use crate::query::resolve::{self, Backing};
use crate::query::warning::BuildWarning;

pub(crate) fn build_sorters(
    fields: &FieldSet,
    states: &[ColumnState],
    multi_unit_sort: bool,
    warnings: &mut Vec<BuildWarning>,
) -> Vec<Sorter> {
    // Paths the user sorted or grouped on. Implicit unit sorters must never
    // displace or duplicate these, regardless of relative position.
    let mut explicit_paths: Vec<&str> = Vec::new();
    for state in states {
        if state.sort_order.is_none() && state.group_order.is_none() {
            continue;
        }
        if let Backing::Field(field) = resolve::backing(fields, state) {
            if field.sortable {
                explicit_paths.push(field.name.as_str());
            }
        }
    }

    let mut sorters: Vec<Sorter> = Vec::new();

    // Grouped columns lead, ordered by their group position.
    let mut grouped: Vec<&ColumnState> = states.iter().filter(|s| s.group_order.is_some()).collect();
    grouped.sort_by_key(|s| s.group_order);
    for state in grouped {
        emit(
            fields,
            state,
            multi_unit_sort,
            &explicit_paths,
            &mut sorters,
            warnings,
        );
    }

    // Explicitly sorted columns follow in snapshot order.
    for state in states {
        if state.group_order.is_some() || state.sort_order.is_none() {
            continue;
        }
        emit(
            fields,
            state,
            multi_unit_sort,
            &explicit_paths,
            &mut sorters,
            warnings,
        );
    }

    sorters
}

fn emit(
    fields: &FieldSet,
    state: &ColumnState,
    multi_unit_sort: bool,
    explicit_paths: &[&str],
    sorters: &mut Vec<Sorter>,
    warnings: &mut Vec<BuildWarning>,
) {
    let Some(field) = resolve::resolve(fields, state, warnings) else {
        return;
    };
    if !field.sortable {
        warnings.push(BuildWarning::NotSortable {
            field: field.name.clone(),
        });
        return;
    }
    if has_path(sorters, &field.name) {
        return;
    }
    sorters.push(Sorter {
        path: field.name.clone(),
        descending: state.sort_order.is_descending(),
    });

    if multi_unit_sort {
        emit_unit_sorter(fields, field, explicit_paths, sorters, warnings);
    }
}

/// Splices the implicit unit sorter in right after its measure, unless the
/// unit path is already sorted explicitly or implicitly.
fn emit_unit_sorter(
    fields: &FieldSet,
    field: &FieldMetadata,
    explicit_paths: &[&str],
    sorters: &mut Vec<Sorter>,
    warnings: &mut Vec<BuildWarning>,
) {
    if field.aggregation_role != AggregationRole::Measure {
        return;
    }
    let Some(unit) = field.unit.as_deref() else {
        return;
    };
    if !fields.contains(unit) {
        warnings.push(BuildWarning::DanglingReference {
            field: field.name.clone(),
            referent: unit.to_string(),
        });
        return;
    }
    if explicit_paths.contains(&unit) || has_path(sorters, unit) {
        return;
    }
    sorters.push(Sorter::asc(unit));
}

fn has_path(sorters: &[Sorter], path: &str) -> bool {
    sorters.iter().any(|s| s.path == path)
}
