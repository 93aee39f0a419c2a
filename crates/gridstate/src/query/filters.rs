//! Filter-tree derivation.
//!
//! Conditions on the same column combine with OR; columns combine with AND,
//! so the output is a normalized AND-of-ORs. Exclusion is folded in by
//! negating the operator before insertion, which keeps the per-column group
//! flat for every operator except `NotEmpty`, whose conjunction nests as a
//! child of the group. The `Empty` operator expands to concrete comparisons gated on
//! the field's type and nullability: only a String field can equal the empty
//! string, only a nullable field can equal null.

use gridstate_model::{ColumnState, FieldMetadata, FieldSet, FieldType, FilterOperator, FilterValue};

use crate::query::params::FilterNode;
use crate::query::resolve;
use crate::query::warning::BuildWarning;

pub(crate) fn build_filters(
    fields: &FieldSet,
    states: &[ColumnState],
    warnings: &mut Vec<BuildWarning>,
) -> Option<FilterNode> {
    let mut groups: Vec<FilterNode> = Vec::new();

    for state in states {
        if state.filter_conditions.is_empty() {
            continue;
        }
        let Some(field) = resolve::resolve(fields, state, warnings) else {
            continue;
        };
        if !field.filterable {
            warnings.push(BuildWarning::NotFilterable {
                field: field.name.clone(),
            });
            continue;
        }

        let mut leaves: Vec<FilterNode> = Vec::new();
        for condition in &state.filter_conditions {
            let op = if condition.exclude {
                condition.operator.negate()
            } else {
                condition.operator
            };
            match op {
                FilterOperator::Empty => leaves.extend(empty_branches(field)),
                FilterOperator::NotEmpty => leaves.extend(FilterNode::and(not_empty_branches(field))),
                _ => leaves.push(FilterNode::Compare {
                    path: field.name.clone(),
                    op,
                    value1: condition.value1.clone(),
                    value2: condition.value2.clone(),
                }),
            }
        }

        groups.extend(FilterNode::or(leaves));
    }

    FilterNode::and(groups)
}

/// `Empty` as OR-able branches: `eq ""` for strings, `eq null` when
/// nullable. Neither gate applying yields no predicate at all.
fn empty_branches(field: &FieldMetadata) -> Vec<FilterNode> {
    let mut branches = Vec::new();
    if field.field_type == Some(FieldType::String) {
        branches.push(FilterNode::compare(&field.name, FilterOperator::Equal, ""));
    }
    if field.nullable {
        branches.push(FilterNode::compare(
            &field.name,
            FilterOperator::Equal,
            FilterValue::Null,
        ));
    }
    branches
}

/// `NotEmpty` is the conjunction of the negated `Empty` branches, under the
/// same gates.
fn not_empty_branches(field: &FieldMetadata) -> Vec<FilterNode> {
    let mut branches = Vec::new();
    if field.field_type == Some(FieldType::String) {
        branches.push(FilterNode::compare(&field.name, FilterOperator::NotEqual, ""));
    }
    if field.nullable {
        branches.push(FilterNode::compare(
            &field.name,
            FilterOperator::NotEqual,
            FilterValue::Null,
        ));
    }
    branches
}
