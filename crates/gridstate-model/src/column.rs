//! Column personalization state.
//!
//! A [`ColumnState`] is one entry of a personalization snapshot: visibility,
//! sort order, filter conditions, grouping position, and an optional explicit
//! width. Snapshots are produced by user interaction in a host layer and
//! serialized between sessions; this crate only models them.

use serde::{Deserialize, Serialize};

/// Sort order of a column.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    /// Not sorted.
    #[default]
    None,
    /// Smallest first.
    Ascending,
    /// Largest first.
    Descending,
}

impl SortOrder {
    /// Returns `true` if the column is not sorted.
    pub fn is_none(self) -> bool {
        matches!(self, SortOrder::None)
    }

    /// Returns `true` for descending order.
    pub fn is_descending(self) -> bool {
        matches!(self, SortOrder::Descending)
    }

    /// Returns the display name of this order.
    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::None => "none",
            SortOrder::Ascending => "ascending",
            SortOrder::Descending => "descending",
        }
    }
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Comparison operator of a filter condition.
///
/// Operators come in complementary pairs so that exclusion can be expressed
/// by negating the operator in place (see [`FilterOperator::negate`]) rather
/// than wrapping the predicate in a NOT node.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterOperator {
    // Universal operators
    /// Equal.
    Equal,
    /// Not equal.
    NotEqual,

    // Ordering operators
    /// Less than.
    LessThan,
    /// Less than or equal.
    LessOrEqual,
    /// Greater than.
    GreaterThan,
    /// Greater than or equal.
    GreaterOrEqual,
    /// Within the closed range `[value1, value2]`.
    Between,
    /// Outside the closed range `[value1, value2]`.
    NotBetween,

    // String operators
    /// Contains substring.
    Contains,
    /// Does not contain substring.
    NotContains,
    /// Starts with prefix.
    StartsWith,
    /// Does not start with prefix.
    NotStartsWith,
    /// Ends with suffix.
    EndsWith,
    /// Does not end with suffix.
    NotEndsWith,

    // Presence operators (value-free)
    /// Empty string or null, gated on the field's type and nullability.
    Empty,
    /// Neither empty string nor null, under the same gates.
    NotEmpty,
}

impl FilterOperator {
    /// Returns the complementary operator.
    ///
    /// Negation is an involution: `op.negate().negate() == op`.
    pub fn negate(self) -> FilterOperator {
        match self {
            FilterOperator::Equal => FilterOperator::NotEqual,
            FilterOperator::NotEqual => FilterOperator::Equal,
            FilterOperator::LessThan => FilterOperator::GreaterOrEqual,
            FilterOperator::GreaterOrEqual => FilterOperator::LessThan,
            FilterOperator::GreaterThan => FilterOperator::LessOrEqual,
            FilterOperator::LessOrEqual => FilterOperator::GreaterThan,
            FilterOperator::Between => FilterOperator::NotBetween,
            FilterOperator::NotBetween => FilterOperator::Between,
            FilterOperator::Contains => FilterOperator::NotContains,
            FilterOperator::NotContains => FilterOperator::Contains,
            FilterOperator::StartsWith => FilterOperator::NotStartsWith,
            FilterOperator::NotStartsWith => FilterOperator::StartsWith,
            FilterOperator::EndsWith => FilterOperator::NotEndsWith,
            FilterOperator::NotEndsWith => FilterOperator::EndsWith,
            FilterOperator::Empty => FilterOperator::NotEmpty,
            FilterOperator::NotEmpty => FilterOperator::Empty,
        }
    }

    /// Returns `true` if this operator only makes sense on strings.
    pub fn is_string_op(self) -> bool {
        matches!(
            self,
            FilterOperator::Contains
                | FilterOperator::NotContains
                | FilterOperator::StartsWith
                | FilterOperator::NotStartsWith
                | FilterOperator::EndsWith
                | FilterOperator::NotEndsWith
        )
    }

    /// Returns `true` if this operator compares by ordering.
    pub fn is_ordering_op(self) -> bool {
        matches!(
            self,
            FilterOperator::LessThan
                | FilterOperator::LessOrEqual
                | FilterOperator::GreaterThan
                | FilterOperator::GreaterOrEqual
                | FilterOperator::Between
                | FilterOperator::NotBetween
        )
    }

    /// Returns `true` if this operator requires a second value.
    pub fn needs_second_value(self) -> bool {
        matches!(self, FilterOperator::Between | FilterOperator::NotBetween)
    }

    /// Returns the display name of this operator.
    pub fn as_str(self) -> &'static str {
        match self {
            FilterOperator::Equal => "eq",
            FilterOperator::NotEqual => "ne",
            FilterOperator::LessThan => "lt",
            FilterOperator::LessOrEqual => "le",
            FilterOperator::GreaterThan => "gt",
            FilterOperator::GreaterOrEqual => "ge",
            FilterOperator::Between => "bt",
            FilterOperator::NotBetween => "nb",
            FilterOperator::Contains => "contains",
            FilterOperator::NotContains => "notcontains",
            FilterOperator::StartsWith => "startswith",
            FilterOperator::NotStartsWith => "notstartswith",
            FilterOperator::EndsWith => "endswith",
            FilterOperator::NotEndsWith => "notendswith",
            FilterOperator::Empty => "empty",
            FilterOperator::NotEmpty => "notempty",
        }
    }
}

impl std::fmt::Display for FilterOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A comparison value in a filter condition.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    /// Text value.
    String(String),
    /// Numeric value.
    Number(f64),
    /// Boolean value.
    Bool(bool),
    /// Null.
    #[default]
    Null,
}

impl From<&str> for FilterValue {
    fn from(value: &str) -> Self {
        FilterValue::String(value.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(value: String) -> Self {
        FilterValue::String(value)
    }
}

impl From<f64> for FilterValue {
    fn from(value: f64) -> Self {
        FilterValue::Number(value)
    }
}

impl From<i64> for FilterValue {
    fn from(value: i64) -> Self {
        FilterValue::Number(value as f64)
    }
}

impl From<bool> for FilterValue {
    fn from(value: bool) -> Self {
        FilterValue::Bool(value)
    }
}

/// A single filter condition on a column.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterCondition {
    /// The comparison operator.
    pub operator: FilterOperator,
    /// The primary comparison value. Ignored by the presence operators.
    #[serde(default)]
    pub value1: FilterValue,
    /// The upper bound for range operators.
    #[serde(default)]
    pub value2: Option<FilterValue>,
    /// When set, the operator is negated before the condition is combined
    /// with its column's other conditions.
    #[serde(default)]
    pub exclude: bool,
}

impl FilterCondition {
    /// Creates a condition with one comparison value.
    pub fn new(operator: FilterOperator, value: impl Into<FilterValue>) -> Self {
        FilterCondition {
            operator,
            value1: value.into(),
            value2: None,
            exclude: false,
        }
    }

    /// Creates a `Between` condition.
    pub fn between(low: impl Into<FilterValue>, high: impl Into<FilterValue>) -> Self {
        FilterCondition {
            operator: FilterOperator::Between,
            value1: low.into(),
            value2: Some(high.into()),
            exclude: false,
        }
    }

    /// Creates an `Empty` condition.
    pub fn empty() -> Self {
        FilterCondition {
            operator: FilterOperator::Empty,
            value1: FilterValue::Null,
            value2: None,
            exclude: false,
        }
    }

    /// Marks this condition as excluding.
    pub fn excluded(mut self) -> Self {
        self.exclude = true;
        self
    }
}

fn default_true() -> bool {
    true
}

/// Personalization state of one column.
///
/// `column_key` usually equals a field name; custom columns may differ and
/// either carry no backing field at all (`custom` without
/// `leading_property`) or resolve through the leading-property mapping.
///
/// # Example
///
/// ```
/// use gridstate_model::{ColumnState, SortOrder};
///
/// let col = ColumnState::new("Amount").descending().group(0);
/// assert_eq!(col.sort_order, SortOrder::Descending);
/// assert!(col.visible);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnState {
    /// Key identifying the column, usually a field name.
    pub column_key: String,
    /// Whether the column is shown.
    #[serde(default = "default_true")]
    pub visible: bool,
    /// Sort order; list position encodes multi-level priority.
    #[serde(default)]
    pub sort_order: SortOrder,
    /// Filter conditions; conditions on the same column are OR-combined.
    #[serde(default)]
    pub filter_conditions: Vec<FilterCondition>,
    /// Group-by position, primary group first.
    #[serde(default)]
    pub group_order: Option<u32>,
    /// Explicit width override in character units; absent means the width
    /// estimator decides.
    #[serde(default)]
    pub width: Option<f64>,
    /// Marks a custom column with no backing field of its own.
    #[serde(default)]
    pub custom: bool,
    /// Field a custom column resolves to for query purposes.
    #[serde(default)]
    pub leading_property: Option<String>,
}

impl ColumnState {
    /// Creates a visible, unsorted, unfiltered column state.
    pub fn new(column_key: impl Into<String>) -> Self {
        ColumnState {
            column_key: column_key.into(),
            visible: true,
            sort_order: SortOrder::None,
            filter_conditions: Vec::new(),
            group_order: None,
            width: None,
            custom: false,
            leading_property: None,
        }
    }

    /// Hides the column.
    pub fn hidden(mut self) -> Self {
        self.visible = false;
        self
    }

    /// Sets the sort order.
    pub fn sort(mut self, order: SortOrder) -> Self {
        self.sort_order = order;
        self
    }

    /// Sorts ascending (shorthand for `.sort(SortOrder::Ascending)`).
    pub fn ascending(self) -> Self {
        self.sort(SortOrder::Ascending)
    }

    /// Sorts descending (shorthand for `.sort(SortOrder::Descending)`).
    pub fn descending(self) -> Self {
        self.sort(SortOrder::Descending)
    }

    /// Appends a filter condition.
    pub fn filter(mut self, condition: FilterCondition) -> Self {
        self.filter_conditions.push(condition);
        self
    }

    /// Sets the group-by position.
    pub fn group(mut self, order: u32) -> Self {
        self.group_order = Some(order);
        self
    }

    /// Sets an explicit width override.
    pub fn width(mut self, width: f64) -> Self {
        self.width = Some(width);
        self
    }

    /// Marks the column as custom (no backing field unless
    /// `leading_property` is set).
    pub fn custom(mut self) -> Self {
        self.custom = true;
        self
    }

    /// Sets the leading property a custom column resolves through.
    pub fn leading_property(mut self, name: impl Into<String>) -> Self {
        self.leading_property = Some(name.into());
        self
    }
}
