//! Output shapes of the parameter builder.
//!
//! [`RequestParameters`] is everything a host needs to issue a data request
//! for the current table state: select names, expand paths, a normalized
//! filter tree, and ordered sorters. All shapes serialize so hosts can cache
//! or diff them between rebinds.

use gridstate_model::{FilterOperator, FilterValue};
use serde::{Deserialize, Serialize};

use crate::query::warning::BuildWarning;

/// One entry of a multi-level sort order, primary sorter first.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sorter {
    /// Field path to sort by.
    pub path: String,
    /// `true` for largest-first.
    pub descending: bool,
}

impl Sorter {
    /// Creates an ascending sorter.
    pub fn asc(path: impl Into<String>) -> Self {
        Sorter {
            path: path.into(),
            descending: false,
        }
    }

    /// Creates a descending sorter.
    pub fn desc(path: impl Into<String>) -> Self {
        Sorter {
            path: path.into(),
            descending: true,
        }
    }
}

/// A normalized filter expression tree.
///
/// The builder produces an `And` of per-column `Or` groups of `Compare`
/// leaves. The one deeper shape is `NotEmpty`, whose two-branch conjunction
/// appears as an `And` child inside its column's group. Single-child groups
/// collapse to their child and empty groups vanish, so the tree never
/// contains degenerate nodes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterNode {
    /// All children must hold.
    And(Vec<FilterNode>),
    /// At least one child must hold.
    Or(Vec<FilterNode>),
    /// A single comparison predicate.
    Compare {
        /// Field path the predicate applies to.
        path: String,
        /// Comparison operator; exclusion is already folded in as the
        /// negated operator.
        op: FilterOperator,
        /// Primary comparison value.
        value1: FilterValue,
        /// Upper bound for range operators.
        value2: Option<FilterValue>,
    },
}

impl FilterNode {
    /// Creates a comparison leaf with one value.
    pub fn compare(path: impl Into<String>, op: FilterOperator, value: impl Into<FilterValue>) -> Self {
        FilterNode::Compare {
            path: path.into(),
            op,
            value1: value.into(),
            value2: None,
        }
    }

    /// Creates a range comparison leaf.
    pub fn compare_range(
        path: impl Into<String>,
        op: FilterOperator,
        low: impl Into<FilterValue>,
        high: impl Into<FilterValue>,
    ) -> Self {
        FilterNode::Compare {
            path: path.into(),
            op,
            value1: low.into(),
            value2: Some(high.into()),
        }
    }

    /// Combines nodes with AND, collapsing degenerate groups.
    ///
    /// Empty input yields `None` (an absent filter, not an empty node);
    /// a single node is returned as-is.
    pub fn and(mut nodes: Vec<FilterNode>) -> Option<FilterNode> {
        match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(FilterNode::And(nodes)),
        }
    }

    /// Combines nodes with OR, collapsing degenerate groups.
    pub fn or(mut nodes: Vec<FilterNode>) -> Option<FilterNode> {
        match nodes.len() {
            0 => None,
            1 => nodes.pop(),
            _ => Some(FilterNode::Or(nodes)),
        }
    }

    /// Number of comparison leaves in this tree.
    pub fn leaf_count(&self) -> usize {
        match self {
            FilterNode::And(children) | FilterNode::Or(children) => {
                children.iter().map(FilterNode::leaf_count).sum()
            }
            FilterNode::Compare { .. } => 1,
        }
    }
}

/// Request parameters derived from one personalization snapshot.
///
/// Deterministic for identical inputs: the table rebinds repeatedly and must
/// not thrash the backend with spuriously different requests for the same
/// state.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestParameters {
    /// Field names to select, ordered, duplicate-free.
    pub select: Vec<String>,
    /// Navigation paths to expand, ordered, duplicate-free.
    pub expand: Vec<String>,
    /// Normalized filter tree; `None` when nothing is filtered.
    pub filters: Option<FilterNode>,
    /// Multi-level sort order, primary sorter first.
    pub sorters: Vec<Sorter>,
}

/// Result of a full parameter build: the parameters plus every warning
/// collected along the way.
#[derive(Clone, Debug, PartialEq)]
pub struct BuildOutcome {
    /// The derived request parameters.
    pub params: RequestParameters,
    /// Data-quality problems encountered; the related entries were omitted.
    pub warnings: Vec<BuildWarning>,
}
