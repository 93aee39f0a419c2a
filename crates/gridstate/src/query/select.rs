//! Select-list derivation.
//!
//! Collects the field names a data request must fetch for the current
//! snapshot: every visible or in-result column's field, each included
//! field's unit/description/additional-property referents (one level, not
//! transitive), and the caller's always-include tail. Order is first-seen;
//! the list never contains duplicates.

use gridstate_model::{ColumnState, FieldSet};

use crate::query::resolve;
use crate::query::warning::BuildWarning;

fn push_unique(list: &mut Vec<String>, name: &str) {
    if !list.iter().any(|entry| entry == name) {
        list.push(name.to_string());
    }
}

pub(crate) fn build_select(
    fields: &FieldSet,
    states: &[ColumnState],
    always_include: &[String],
    warnings: &mut Vec<BuildWarning>,
) -> Vec<String> {
    let mut select = Vec::new();
    // Fields whose referents have been walked, so duplicate columns don't
    // repeat the expansion (or its warnings).
    let mut expanded: Vec<String> = Vec::new();

    for state in states {
        let Some(field) = resolve::resolve(fields, state, warnings) else {
            continue;
        };
        if !(state.visible || field.in_result) {
            continue;
        }
        push_unique(&mut select, &field.name);
        if expanded.iter().any(|entry| entry == &field.name) {
            // A duplicate column; its referents were already walked.
            continue;
        }
        expanded.push(field.name.clone());

        // One level of expansion: referents ride along with the field that
        // names them, but are not themselves expanded further unless they
        // back a column of their own, in which case this loop reaches them
        // directly even when an earlier column already pulled them in.
        for referent in field.referents() {
            if fields.contains(referent) {
                push_unique(&mut select, referent);
            } else {
                warnings.push(BuildWarning::DanglingReference {
                    field: field.name.clone(),
                    referent: referent.to_string(),
                });
            }
        }
    }

    for name in always_include {
        push_unique(&mut select, name);
    }

    select
}
