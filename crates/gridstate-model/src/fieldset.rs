//! Field registry: the full set of fields known for one entity.
//!
//! A [`FieldSet`] is loaded once from a metadata source and treated as
//! immutable for the session. It replaces hidden per-widget lookup caches
//! with an explicit, caller-owned value: every consumer receives the set as
//! a parameter, so derivations stay independently testable.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};
use crate::field::FieldMetadata;

/// An insertion-ordered, name-indexed set of field metadata.
///
/// Field names are unique; [`FieldSet::new`] rejects duplicates since a
/// metadata document with two fields of the same name is a caller bug, not a
/// degradable data-quality problem.
///
/// # Example
///
/// ```
/// use gridstate_model::{FieldMetadata, FieldSet, FieldType};
///
/// let fields = FieldSet::new(vec![
///     FieldMetadata::new("Name", FieldType::String).max_length(40),
///     FieldMetadata::new("Amount", FieldType::Currency).unit("Currency"),
///     FieldMetadata::new("Currency", FieldType::String).max_length(3),
/// ])
/// .unwrap();
///
/// assert_eq!(fields.len(), 3);
/// assert!(fields.get("Amount").is_some());
/// assert!(fields.get("Ghost").is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct FieldSet {
    fields: Vec<FieldMetadata>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl FieldSet {
    /// Builds a field set, rejecting duplicate names.
    pub fn new(fields: Vec<FieldMetadata>) -> Result<Self> {
        let mut index = HashMap::with_capacity(fields.len());
        for (i, field) in fields.iter().enumerate() {
            if index.insert(field.name.clone(), i).is_some() {
                return Err(ModelError::DuplicateField {
                    name: field.name.clone(),
                });
            }
        }
        Ok(FieldSet { fields, index })
    }

    /// Looks a field up by name.
    pub fn get(&self, name: &str) -> Option<&FieldMetadata> {
        self.index.get(name).map(|&i| &self.fields[i])
    }

    /// Returns `true` if a field with this name exists.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Iterates fields in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = &FieldMetadata> {
        self.fields.iter()
    }

    /// Number of fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the set has no fields.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Names of fields whose `unit`/`description`/`additional_property`
    /// reference a name not present in the set.
    ///
    /// Dangling references are tolerated (they degrade to warnings when a
    /// derivation actually touches them); this is a diagnostic for callers
    /// that want to audit a metadata load up front.
    pub fn dangling_references(&self) -> Vec<(&str, &str)> {
        let mut dangling = Vec::new();
        for field in &self.fields {
            for referent in field.referents() {
                if !self.contains(referent) {
                    dangling.push((field.name.as_str(), referent));
                }
            }
        }
        dangling
    }
}

impl<'de> Deserialize<'de> for FieldSet {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let fields = Vec::<FieldMetadata>::deserialize(deserializer)?;
        FieldSet::new(fields).map_err(serde::de::Error::custom)
    }
}

impl IntoIterator for FieldSet {
    type Item = FieldMetadata;
    type IntoIter = std::vec::IntoIter<FieldMetadata>;

    fn into_iter(self) -> Self::IntoIter {
        self.fields.into_iter()
    }
}
