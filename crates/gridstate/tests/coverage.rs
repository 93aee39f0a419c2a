//! End-to-end tests over a realistic sales-order field set.

use gridstate::query::{BuildWarning, FilterNode, ParamBuilder, Sorter};
use gridstate::width::{EstimateOptions, WidthEstimator, WidthSetting};
use gridstate_model::{
    AggregationRole, ColumnState, FieldMetadata, FieldSet, FieldType, FilterCondition,
    FilterOperator,
};

// ============================================================================
// Fixtures
// ============================================================================

fn sales_order_fields() -> FieldSet {
    FieldSet::new(vec![
        FieldMetadata::new("OrderID", FieldType::String)
            .max_length(10)
            .not_nullable(),
        FieldMetadata::new("Customer", FieldType::String)
            .max_length(10)
            .description("CustomerName"),
        FieldMetadata::new("CustomerName", FieldType::String)
            .max_length(40)
            .navigation_property("ToCustomer"),
        FieldMetadata::new("Amount", FieldType::Currency)
            .precision(12)
            .scale(2)
            .unit("Currency")
            .aggregation_role(AggregationRole::Measure),
        FieldMetadata::new("Currency", FieldType::String).max_length(3),
        FieldMetadata::new("Status", FieldType::String).max_length(1),
        FieldMetadata::new("Created", FieldType::Date),
        FieldMetadata::new("Note", FieldType::String),
    ])
    .unwrap()
}

fn personalized_snapshot() -> Vec<ColumnState> {
    vec![
        ColumnState::new("Customer").group(0),
        ColumnState::new("Amount").descending(),
        ColumnState::new("Status")
            .filter(FilterCondition::new(FilterOperator::Equal, "N"))
            .filter(FilterCondition::new(FilterOperator::Equal, "P")),
        ColumnState::new("Created").filter(FilterCondition::between("2026-01-01", "2026-06-30")),
        ColumnState::new("Note").hidden().filter(FilterCondition::empty()),
    ]
}

// ============================================================================
// Full build over a personalized snapshot
// ============================================================================

#[test]
fn full_build_selects_visible_columns_and_referents() {
    let fields = sales_order_fields();
    let builder = ParamBuilder::new(&fields)
        .always_include(["OrderID"])
        .multi_unit_sort(true);

    let outcome = builder.build(&personalized_snapshot());
    assert!(outcome.warnings.is_empty());

    // Visible columns in snapshot order, each followed by its referent;
    // the hidden Note column is not fetched; key fields come last.
    assert_eq!(
        outcome.params.select,
        [
            "Customer",
            "CustomerName",
            "Amount",
            "Currency",
            "Status",
            "Created",
            "OrderID",
        ]
    );

    // CustomerName lives behind a navigation property.
    assert_eq!(outcome.params.expand, ["ToCustomer"]);
}

#[test]
fn full_build_orders_sorters_group_first_with_unit_rider() {
    let fields = sales_order_fields();
    let builder = ParamBuilder::new(&fields).multi_unit_sort(true);

    let outcome = builder.build(&personalized_snapshot());
    assert_eq!(
        outcome.params.sorters,
        [
            Sorter::asc("Customer"),
            Sorter::desc("Amount"),
            Sorter::asc("Currency"),
        ]
    );
}

#[test]
fn full_build_produces_and_of_per_column_groups() {
    let fields = sales_order_fields();
    let builder = ParamBuilder::new(&fields);

    let outcome = builder.build(&personalized_snapshot());
    let filters = outcome.params.filters.expect("snapshot has filters");
    assert_eq!(filters.leaf_count(), 5);

    let FilterNode::And(groups) = &filters else {
        panic!("expected a top-level AND, got {filters:?}");
    };
    assert_eq!(groups.len(), 3);

    // Two equality alternatives for Status.
    assert_eq!(
        groups[0],
        FilterNode::Or(vec![
            FilterNode::compare("Status", FilterOperator::Equal, "N"),
            FilterNode::compare("Status", FilterOperator::Equal, "P"),
        ])
    );

    // A single range condition collapses to its leaf.
    assert_eq!(
        groups[1],
        FilterNode::compare_range("Created", FilterOperator::Between, "2026-01-01", "2026-06-30")
    );

    // Empty on a nullable string matches both the empty string and null.
    // Filters apply even though the Note column is hidden.
    let FilterNode::Or(note) = &groups[2] else {
        panic!("expected an OR group for Note, got {:?}", groups[2]);
    };
    assert_eq!(note.len(), 2);
}

#[test]
fn unpersonalized_snapshot_yields_minimal_parameters() {
    let fields = sales_order_fields();
    let outcome = ParamBuilder::new(&fields).build(&[ColumnState::new("OrderID")]);

    assert_eq!(outcome.params.select, ["OrderID"]);
    assert!(outcome.params.expand.is_empty());
    assert!(outcome.params.filters.is_none());
    assert!(outcome.params.sorters.is_empty());
    assert!(outcome.warnings.is_empty());
}

// ============================================================================
// Degraded inputs surface as warnings, never failures
// ============================================================================

#[test]
fn unknown_column_is_skipped_with_one_warning() {
    let fields = sales_order_fields();
    let states = vec![
        ColumnState::new("OrderID"),
        ColumnState::new("Legacy")
            .ascending()
            .filter(FilterCondition::new(FilterOperator::Equal, "x")),
    ];

    let outcome = ParamBuilder::new(&fields).build(&states);
    assert_eq!(outcome.params.select, ["OrderID"]);
    assert!(outcome.params.sorters.is_empty());
    assert!(outcome.params.filters.is_none());
    assert_eq!(
        outcome.warnings,
        [BuildWarning::UnresolvedColumnReference {
            column_key: "Legacy".into()
        }]
    );
}

#[test]
fn dangling_referent_is_omitted_with_warning() {
    let fields = FieldSet::new(vec![
        FieldMetadata::new("Amount", FieldType::Currency).unit("Missing")
    ])
    .unwrap();

    let outcome = ParamBuilder::new(&fields).build(&[ColumnState::new("Amount")]);
    assert_eq!(outcome.params.select, ["Amount"]);
    assert_eq!(
        outcome.warnings,
        [BuildWarning::DanglingReference {
            field: "Amount".into(),
            referent: "Missing".into()
        }]
    );
}

#[test]
fn capability_flags_gate_sorters_and_filters() {
    let fields = FieldSet::new(vec![
        FieldMetadata::new("Computed", FieldType::Number)
            .sortable(false)
            .filterable(false),
    ])
    .unwrap();
    let states = vec![ColumnState::new("Computed")
        .descending()
        .filter(FilterCondition::new(FilterOperator::GreaterThan, 10.0))];

    let outcome = ParamBuilder::new(&fields).build(&states);
    assert_eq!(outcome.params.select, ["Computed"]);
    assert!(outcome.params.sorters.is_empty());
    assert!(outcome.params.filters.is_none());
    assert_eq!(
        outcome.warnings,
        [
            BuildWarning::NotSortable {
                field: "Computed".into()
            },
            BuildWarning::NotFilterable {
                field: "Computed".into()
            },
        ]
    );
}

#[test]
fn custom_column_resolves_through_leading_property() {
    let fields = sales_order_fields();
    let states = vec![ColumnState::new("CustomProgress")
        .custom()
        .leading_property("Amount")
        .ascending()];

    let outcome = ParamBuilder::new(&fields).build(&states);
    assert_eq!(outcome.params.select, ["Amount", "Currency"]);
    assert_eq!(outcome.params.sorters, [Sorter::asc("Amount")]);
    assert!(outcome.warnings.is_empty());
}

#[test]
fn custom_column_without_leading_property_is_silently_ignored() {
    let fields = sales_order_fields();
    let states = vec![
        ColumnState::new("OrderID"),
        ColumnState::new("Actions").custom().ascending(),
    ];

    let outcome = ParamBuilder::new(&fields).build(&states);
    assert_eq!(outcome.params.select, ["OrderID"]);
    assert!(outcome.params.sorters.is_empty());
    assert!(outcome.warnings.is_empty());
}

// ============================================================================
// Width estimation across the same field set
// ============================================================================

#[test]
fn widths_stay_within_the_configured_range() {
    let fields = sales_order_fields();
    let mut estimator = WidthEstimator::new();
    let setting = WidthSetting::default();
    let options = EstimateOptions::default();

    for field in fields.iter() {
        let width = estimator.estimate(field, &fields, &setting, &options);
        assert!(
            (3.0..=20.0).contains(&width),
            "{}: width {width} outside [min + padding, max + padding]",
            field.name
        );
    }
}

#[test]
fn currency_column_width_covers_amount_and_code() {
    let fields = sales_order_fields();
    let mut estimator = WidthEstimator::new();
    let width = estimator.estimate(
        fields.get("Amount").unwrap(),
        &fields,
        &WidthSetting::default(),
        &EstimateOptions::default(),
    );
    // 14 cells for the amount (precision 12 plus separator and sign) plus
    // 3 for the code, plus padding.
    assert_eq!(width, 18.0);
}

// ============================================================================
// Serialization of the derived parameters
// ============================================================================

#[test]
fn request_parameters_round_trip_through_json() {
    let fields = sales_order_fields();
    let builder = ParamBuilder::new(&fields)
        .always_include(["OrderID"])
        .multi_unit_sort(true);
    let outcome = builder.build(&personalized_snapshot());

    let json = serde_json::to_string(&outcome.params).unwrap();
    let back: gridstate::query::RequestParameters = serde_json::from_str(&json).unwrap();
    assert_eq!(back, outcome.params);
}
