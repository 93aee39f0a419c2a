//! Field metadata: one record per queryable/displayable property.
//!
//! A [`FieldMetadata`] describes a property the way a metadata document
//! declares it: its data type, size constraints, related fields (a currency
//! code paired with an amount, a description paired with an id), and the
//! flags that control default visibility and sort/filter availability.

use serde::{Deserialize, Serialize};

/// Data type of a field.
///
/// `Currency` and `Unit` are composite types: a numeric amount paired with a
/// code field named by [`FieldMetadata::unit`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    /// Free text, sized by `max_length`.
    String,
    /// Numeric, sized by `precision`/`scale`.
    Number,
    /// True/false.
    Boolean,
    /// Calendar date.
    Date,
    /// Time of day.
    Time,
    /// Combined date and time.
    DateTime,
    /// Numeric amount paired with a currency-code field.
    Currency,
    /// Numeric amount paired with a unit-of-measure field.
    Unit,
    /// Anything else; sized by the caller's default width.
    Other,
}

impl FieldType {
    /// Returns `true` for text-valued fields.
    pub fn is_string(self) -> bool {
        matches!(self, FieldType::String)
    }

    /// Returns `true` for fields whose width derives from digit count.
    pub fn is_numeric(self) -> bool {
        matches!(self, FieldType::Number | FieldType::Currency | FieldType::Unit)
    }

    /// Returns `true` for date/time fields with fixed formatted lengths.
    pub fn is_temporal(self) -> bool {
        matches!(self, FieldType::Date | FieldType::Time | FieldType::DateTime)
    }
}

/// Role of a field in analytical grouping.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AggregationRole {
    /// Groupable attribute.
    Dimension,
    /// Aggregatable quantity; measures paired with a unit participate in
    /// multi-unit sorting.
    Measure,
    /// No analytical role.
    #[default]
    None,
}

fn default_true() -> bool {
    true
}

/// Metadata for a single queryable/displayable property.
///
/// Immutable for a session once loaded; consumers receive it through a
/// [`FieldSet`](crate::FieldSet) snapshot.
///
/// # Example
///
/// ```
/// use gridstate_model::{FieldMetadata, FieldType};
///
/// let amount = FieldMetadata::new("Amount", FieldType::Currency)
///     .label("Gross Amount")
///     .precision(10)
///     .scale(2)
///     .unit("Currency");
/// assert_eq!(amount.unit.as_deref(), Some("Currency"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FieldMetadata {
    /// Unique key within a field set.
    pub name: String,
    /// Human-readable header text.
    #[serde(default)]
    pub label: Option<String>,
    /// Declared data type. `None` models malformed metadata and is tolerated
    /// everywhere: width estimation falls back to a default, query building
    /// still selects the field by name.
    #[serde(default, rename = "type")]
    pub field_type: Option<FieldType>,
    /// Maximum text length for string fields.
    #[serde(default)]
    pub max_length: Option<u32>,
    /// Total digits for numeric fields.
    #[serde(default)]
    pub precision: Option<u32>,
    /// Fractional digits for numeric fields.
    #[serde(default)]
    pub scale: Option<u32>,
    /// Whether the backend accepts null for this field.
    #[serde(default = "default_true")]
    pub nullable: bool,
    /// Whether the field may appear in sort orders.
    #[serde(default = "default_true")]
    pub sortable: bool,
    /// Whether the field may appear in filter conditions.
    #[serde(default = "default_true")]
    pub filterable: bool,
    /// Name of the paired unit/currency-code field.
    #[serde(default)]
    pub unit: Option<String>,
    /// Name of the paired description field.
    #[serde(default)]
    pub description: Option<String>,
    /// Name of a generic companion field displayed alongside this one.
    #[serde(default)]
    pub additional_property: Option<String>,
    /// Navigation path that must be expanded to reach this field's data.
    #[serde(default)]
    pub navigation_property: Option<String>,
    /// Whether a fresh table shows this field's column.
    #[serde(default)]
    pub initially_visible: bool,
    /// Whether the field is fetched even when its column is hidden.
    #[serde(default)]
    pub in_result: bool,
    /// Analytical role.
    #[serde(default)]
    pub aggregation_role: AggregationRole,
}

impl FieldMetadata {
    /// Creates metadata for a typed field with defaults for everything else.
    pub fn new(name: impl Into<String>, field_type: FieldType) -> Self {
        FieldMetadata {
            name: name.into(),
            label: None,
            field_type: Some(field_type),
            max_length: None,
            precision: None,
            scale: None,
            nullable: true,
            sortable: true,
            filterable: true,
            unit: None,
            description: None,
            additional_property: None,
            navigation_property: None,
            initially_visible: false,
            in_result: false,
            aggregation_role: AggregationRole::None,
        }
    }

    /// Creates metadata with no declared type (malformed-metadata case).
    pub fn untyped(name: impl Into<String>) -> Self {
        let mut field = FieldMetadata::new(name, FieldType::Other);
        field.field_type = None;
        field
    }

    /// Sets the header label.
    pub fn label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the maximum text length.
    pub fn max_length(mut self, max_length: u32) -> Self {
        self.max_length = Some(max_length);
        self
    }

    /// Sets the total digit count.
    pub fn precision(mut self, precision: u32) -> Self {
        self.precision = Some(precision);
        self
    }

    /// Sets the fractional digit count.
    pub fn scale(mut self, scale: u32) -> Self {
        self.scale = Some(scale);
        self
    }

    /// Marks the field as non-nullable.
    pub fn not_nullable(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Sets sort availability.
    pub fn sortable(mut self, sortable: bool) -> Self {
        self.sortable = sortable;
        self
    }

    /// Sets filter availability.
    pub fn filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    /// Names the paired unit/currency-code field.
    pub fn unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = Some(unit.into());
        self
    }

    /// Names the paired description field.
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Names a generic companion field.
    pub fn additional_property(mut self, name: impl Into<String>) -> Self {
        self.additional_property = Some(name.into());
        self
    }

    /// Sets the navigation path required to reach this field.
    pub fn navigation_property(mut self, path: impl Into<String>) -> Self {
        self.navigation_property = Some(path.into());
        self
    }

    /// Marks the field as visible in a fresh table.
    pub fn initially_visible(mut self) -> Self {
        self.initially_visible = true;
        self
    }

    /// Marks the field as always fetched.
    pub fn in_result(mut self) -> Self {
        self.in_result = true;
        self
    }

    /// Sets the analytical role.
    pub fn aggregation_role(mut self, role: AggregationRole) -> Self {
        self.aggregation_role = role;
        self
    }

    /// Returns the companion field name displayed alongside this one, if any.
    ///
    /// Preference order: `additional_property`, then `unit`, then
    /// `description` (a field rarely declares more than one).
    pub fn companion(&self) -> Option<&str> {
        self.additional_property
            .as_deref()
            .or(self.unit.as_deref())
            .or(self.description.as_deref())
    }

    /// Iterates the names of all related fields this one references.
    pub fn referents(&self) -> impl Iterator<Item = &str> {
        self.unit
            .as_deref()
            .into_iter()
            .chain(self.description.as_deref())
            .chain(self.additional_property.as_deref())
    }
}
