//! Expand-path derivation.
//!
//! For every selected field that lives behind a navigation property, the
//! request must expand that path. Paths are deduplicated in first-appearance
//! order; several fields commonly share one navigation.

use gridstate_model::FieldSet;

pub(crate) fn build_expand(fields: &FieldSet, select: &[String]) -> Vec<String> {
    let mut expand: Vec<String> = Vec::new();
    for name in select {
        let Some(path) = fields.get(name).and_then(|f| f.navigation_property.as_deref()) else {
            continue;
        };
        if !expand.iter().any(|entry| entry == path) {
            expand.push(path.to_string());
        }
    }
    expand
}
