//! Width estimation algorithm.
//!
//! Widths derive from metadata alone: type, precision, max length, label.
//! No text measurement happens anywhere - the source system deliberately
//! avoids canvas measurement for every column on every render, and this
//! keeps the estimate cheap enough to recompute on each personalization
//! change.

use std::collections::HashMap;

use gridstate_model::{FieldMetadata, FieldSet, FieldType};

use crate::width::config::{CombineLayout, EstimateOptions, WidthConfig, WidthSetting};

// Fixed content widths for types whose formatted length doesn't vary with
// metadata constraints.
const BOOLEAN_WIDTH: f64 = 3.0;
const DATE_WIDTH: f64 = 10.0;
const TIME_WIDTH: f64 = 9.0;
const DATETIME_WIDTH: f64 = 17.0;

// Digit count assumed for numeric fields that don't declare a precision.
const DEFAULT_PRECISION: u32 = 10;

/// Estimates column widths in abstract character-cell units.
///
/// The estimator caches each field's content width so that
/// [`edit_width`](WidthEstimator::edit_width) can reuse it instead of
/// recomputing. Cached values derive from metadata alone; everything the
/// per-call config or options influence (the string cap, fallback widths,
/// clamping, padding) is applied outside the cache, so one estimator can
/// serve fields with differing width settings.
///
/// # Example
///
/// ```rust
/// use gridstate::width::{EstimateOptions, WidthEstimator, WidthSetting};
/// use gridstate_model::{FieldMetadata, FieldSet, FieldType};
///
/// let fields = FieldSet::new(vec![
///     FieldMetadata::new("Ordered", FieldType::Date),
/// ])
/// .unwrap();
///
/// let mut estimator = WidthEstimator::new();
/// let width = estimator.estimate(
///     fields.get("Ordered").unwrap(),
///     &fields,
///     &WidthSetting::default(),
///     &EstimateOptions::default(),
/// );
/// // 10 cells of formatted date plus 1 cell of outer padding.
/// assert_eq!(width, 11.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct WidthEstimator {
    content_cache: HashMap<String, f64>,
}

impl WidthEstimator {
    /// Creates an estimator with an empty cache.
    pub fn new() -> Self {
        WidthEstimator::default()
    }

    /// Estimates the display width for a column.
    ///
    /// The result is clamped to `[min, max]` and then gets the outer
    /// padding added, so for sane configs it always lies within
    /// `[min + padding, max + padding]`. The two escape hatches are
    /// [`WidthSetting::Disabled`] and metadata with no declared type, both
    /// of which fall back to the caller's default width. Rounded to 2
    /// decimals so repeated re-renders don't jitter the layout.
    pub fn estimate(
        &mut self,
        field: &FieldMetadata,
        fields: &FieldSet,
        setting: &WidthSetting,
        options: &EstimateOptions,
    ) -> f64 {
        let config = match setting {
            WidthSetting::Disabled => return round2(options.default_width),
            WidthSetting::Auto(config) => config.sanitized(),
        };
        if field.field_type.is_none() {
            // Malformed metadata: sizing is cosmetic and must never block
            // rendering.
            return round2(options.default_width + options.padding);
        }

        let mut content = self.capped_content(field, &config, options);

        if !options.id_only {
            if let Some(name) = field.companion() {
                if let Some(companion) = fields.get(name) {
                    let companion_width = self.capped_content(companion, &config, options);
                    content = match options.layout {
                        CombineLayout::Sum => content + companion_width,
                        CombineLayout::Max => content.max(companion_width),
                    };
                }
            }
        }

        content += config.gap;

        let mut width = content;
        if config.consider_label && !config.truncate_label {
            if let Some(label) = &field.label {
                width = width.max(label.chars().count() as f64);
            }
        }

        round2(width.clamp(config.min, config.max) + options.padding)
    }

    /// Width for the editable presentation of a column.
    ///
    /// An edit control needs extra room for interactive chrome (a value-help
    /// icon, a spinner). Reuses the cached content width; the result is
    /// never smaller than the display width.
    pub fn edit_width(
        &mut self,
        field: &FieldMetadata,
        setting: &WidthSetting,
        options: &EstimateOptions,
        display_width: f64,
        edit_chrome_width: f64,
    ) -> f64 {
        let content = match setting {
            WidthSetting::Disabled => options.default_width,
            WidthSetting::Auto(config) => {
                if field.field_type.is_none() {
                    options.default_width
                } else {
                    self.capped_content(field, &config.sanitized(), options)
                }
            }
        };
        round2(content + edit_chrome_width).max(display_width)
    }

    /// Content width with the per-call string cap applied. The cap belongs
    /// to the config, so it stays outside the cache.
    fn capped_content(
        &mut self,
        field: &FieldMetadata,
        config: &WidthConfig,
        options: &EstimateOptions,
    ) -> f64 {
        let width = self.content_for(field, options);
        if field.field_type == Some(FieldType::String) {
            width.min(config.max)
        } else {
            width
        }
    }

    /// Base content width from the field's type and constraints.
    ///
    /// Only widths that derive purely from metadata are cached; fallbacks
    /// to the caller's default width are recomputed each call so a field
    /// never pins an earlier call's options.
    fn content_for(&mut self, field: &FieldMetadata, options: &EstimateOptions) -> f64 {
        if let Some(&width) = self.content_cache.get(&field.name) {
            return width;
        }
        let width = match field.field_type {
            None | Some(FieldType::Other) => return options.default_width,
            Some(FieldType::Boolean) => BOOLEAN_WIDTH,
            Some(FieldType::Date) => DATE_WIDTH,
            Some(FieldType::Time) => TIME_WIDTH,
            Some(FieldType::DateTime) => DATETIME_WIDTH,
            Some(FieldType::Number | FieldType::Currency | FieldType::Unit) => {
                // Digits plus decimal separator plus optional sign.
                let precision = field.precision.unwrap_or(DEFAULT_PRECISION);
                f64::from(precision + 2)
            }
            Some(FieldType::String) => match field.max_length {
                Some(max_length) => f64::from(max_length),
                None => return options.default_width,
            },
        };
        self.content_cache.insert(field.name.clone(), width);
        width
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn estimate_one(field: FieldMetadata) -> f64 {
        let name = field.name.clone();
        let fields = FieldSet::new(vec![field]).unwrap();
        let mut estimator = WidthEstimator::new();
        estimator.estimate(
            fields.get(&name).unwrap(),
            &fields,
            &WidthSetting::default(),
            &EstimateOptions::default(),
        )
    }

    #[test]
    fn boolean_sits_near_the_minimum() {
        let width = estimate_one(FieldMetadata::new("Done", FieldType::Boolean));
        assert_eq!(width, 4.0); // 3 cells of content + 1 padding
    }

    #[test]
    fn temporal_widths_are_fixed() {
        assert_eq!(estimate_one(FieldMetadata::new("D", FieldType::Date)), 11.0);
        assert_eq!(estimate_one(FieldMetadata::new("T", FieldType::Time)), 10.0);
        assert_eq!(
            estimate_one(FieldMetadata::new("DT", FieldType::DateTime)),
            18.0
        );
    }

    #[test]
    fn numeric_width_scales_with_precision() {
        let narrow = estimate_one(FieldMetadata::new("N", FieldType::Number).precision(4));
        assert_eq!(narrow, 7.0); // 4 digits + separator + sign + padding

        let wide = estimate_one(FieldMetadata::new("W", FieldType::Number).precision(12));
        assert_eq!(wide, 15.0);
    }

    #[test]
    fn string_width_capped_at_max() {
        let short = estimate_one(FieldMetadata::new("S", FieldType::String).max_length(6));
        assert_eq!(short, 7.0);

        let long = estimate_one(FieldMetadata::new("L", FieldType::String).max_length(80));
        assert_eq!(long, 20.0); // max 19 + padding 1
    }

    #[test]
    fn string_without_max_length_uses_default_width() {
        let width = estimate_one(FieldMetadata::new("S", FieldType::String));
        assert_eq!(width, 9.0);
    }

    #[test]
    fn currency_combines_with_unit_field() {
        // Scenario: Amount(precision 10) paired with a 3-char currency code,
        // horizontal layout: 12 + 3, clamped to 15, plus padding.
        let fields = FieldSet::new(vec![
            FieldMetadata::new("Amount", FieldType::Currency)
                .precision(10)
                .scale(2)
                .unit("Currency"),
            FieldMetadata::new("Currency", FieldType::String).max_length(3),
        ])
        .unwrap();
        let mut estimator = WidthEstimator::new();
        let width = estimator.estimate(
            fields.get("Amount").unwrap(),
            &fields,
            &WidthSetting::default(),
            &EstimateOptions::default(),
        );
        assert_eq!(width, 16.0);
    }

    #[test]
    fn stacked_layout_takes_the_wider_of_the_pair() {
        let fields = FieldSet::new(vec![
            FieldMetadata::new("Amount", FieldType::Currency)
                .precision(10)
                .unit("Currency"),
            FieldMetadata::new("Currency", FieldType::String).max_length(3),
        ])
        .unwrap();
        let mut estimator = WidthEstimator::new();
        let width = estimator.estimate(
            fields.get("Amount").unwrap(),
            &fields,
            &WidthSetting::default(),
            &EstimateOptions::default().layout(CombineLayout::Max),
        );
        assert_eq!(width, 13.0); // max(12, 3) + padding
    }

    #[test]
    fn id_only_mode_suppresses_combination() {
        let fields = FieldSet::new(vec![
            FieldMetadata::new("Amount", FieldType::Currency)
                .precision(10)
                .unit("Currency"),
            FieldMetadata::new("Currency", FieldType::String).max_length(3),
        ])
        .unwrap();
        let mut estimator = WidthEstimator::new();
        let width = estimator.estimate(
            fields.get("Amount").unwrap(),
            &fields,
            &WidthSetting::default(),
            &EstimateOptions::default().id_only(),
        );
        assert_eq!(width, 13.0); // amount alone
    }

    #[test]
    fn gap_added_before_clamping() {
        let fields = FieldSet::new(vec![FieldMetadata::new("S", FieldType::String).max_length(6)])
            .unwrap();
        let mut estimator = WidthEstimator::new();
        let setting = WidthSetting::Auto(WidthConfig::default().gap(2.0));
        let width = estimator.estimate(
            fields.get("S").unwrap(),
            &fields,
            &setting,
            &EstimateOptions::default(),
        );
        assert_eq!(width, 9.0); // 6 + 2 gap + padding
    }

    #[test]
    fn label_floors_width_when_truncation_is_off() {
        let fields = FieldSet::new(vec![FieldMetadata::new("Qty", FieldType::Number)
            .precision(3)
            .label("Ordered Quantity")])
        .unwrap();
        let mut estimator = WidthEstimator::new();

        let truncating = estimator.estimate(
            fields.get("Qty").unwrap(),
            &fields,
            &WidthSetting::default(),
            &EstimateOptions::default(),
        );
        assert_eq!(truncating, 6.0); // label ignored: 5 + padding

        let mut estimator = WidthEstimator::new();
        let setting = WidthSetting::Auto(WidthConfig::default().keep_label());
        let floored = estimator.estimate(
            fields.get("Qty").unwrap(),
            &fields,
            &setting,
            &EstimateOptions::default(),
        );
        assert_eq!(floored, 17.0); // "Ordered Quantity" is 16 chars + padding
    }

    #[test]
    fn ignore_label_keeps_content_width() {
        let fields = FieldSet::new(vec![FieldMetadata::new("Qty", FieldType::Number)
            .precision(3)
            .label("Ordered Quantity")])
        .unwrap();
        let mut estimator = WidthEstimator::new();
        let setting = WidthSetting::Auto(WidthConfig::default().keep_label().ignore_label());
        let width = estimator.estimate(
            fields.get("Qty").unwrap(),
            &fields,
            &setting,
            &EstimateOptions::default(),
        );
        assert_eq!(width, 6.0);
    }

    #[test]
    fn inverted_range_sanitized_not_errored() {
        let fields =
            FieldSet::new(vec![FieldMetadata::new("S", FieldType::String).max_length(40)]).unwrap();
        let mut estimator = WidthEstimator::new();
        let setting = WidthSetting::Auto(WidthConfig::default().min(10.0).max(5.0));
        let width = estimator.estimate(
            fields.get("S").unwrap(),
            &fields,
            &setting,
            &EstimateOptions::default(),
        );
        assert_eq!(width, 11.0); // clamped into the repaired [10, 10] range
    }

    #[test]
    fn disabled_returns_default_width() {
        let fields = FieldSet::new(vec![FieldMetadata::new("S", FieldType::String).max_length(40)])
            .unwrap();
        let mut estimator = WidthEstimator::new();
        let width = estimator.estimate(
            fields.get("S").unwrap(),
            &fields,
            &WidthSetting::Disabled,
            &EstimateOptions::default(),
        );
        assert_eq!(width, 8.0);
    }

    #[test]
    fn missing_type_falls_back_to_default_width() {
        let width = estimate_one(FieldMetadata::untyped("Mystery"));
        assert_eq!(width, 9.0); // default 8 + padding
    }

    #[test]
    fn edit_width_never_below_display_width() {
        let fields = FieldSet::new(vec![FieldMetadata::new("N", FieldType::Number).precision(4)])
            .unwrap();
        let field = fields.get("N").unwrap();
        let mut estimator = WidthEstimator::new();
        let options = EstimateOptions::default();
        let setting = WidthSetting::default();

        let display = estimator.estimate(field, &fields, &setting, &options);
        assert_eq!(display, 7.0);

        // Small chrome: display width still wins.
        let edit = estimator.edit_width(field, &setting, &options, display, 0.5);
        assert_eq!(edit, 7.0);

        // Large chrome: content + chrome wins.
        let edit = estimator.edit_width(field, &setting, &options, display, 4.0);
        assert_eq!(edit, 10.0); // 6 content + 4 chrome
    }

    #[test]
    fn edit_width_reuses_cached_content() {
        let fields = FieldSet::new(vec![FieldMetadata::new("N", FieldType::Number).precision(4)])
            .unwrap();
        let field = fields.get("N").unwrap();
        let mut estimator = WidthEstimator::new();
        let options = EstimateOptions::default();
        let setting = WidthSetting::default();

        // Without a prior estimate the content width is computed on demand.
        let edit = estimator.edit_width(field, &setting, &options, 0.0, 1.0);
        assert_eq!(edit, 7.0); // 6 content + 1 chrome
    }

    #[test]
    fn cache_does_not_pin_the_string_cap() {
        let fields = FieldSet::new(vec![FieldMetadata::new("L", FieldType::String).max_length(40)])
            .unwrap();
        let field = fields.get("L").unwrap();
        let mut estimator = WidthEstimator::new();
        let options = EstimateOptions::default();

        let narrow = estimator.estimate(field, &fields, &WidthSetting::default(), &options);
        assert_eq!(narrow, 20.0); // capped at the default max of 19

        // The same estimator under a roomier config must widen.
        let setting = WidthSetting::Auto(WidthConfig::default().max(30.0));
        let wide = estimator.estimate(field, &fields, &setting, &options);
        assert_eq!(wide, 31.0);
    }

    #[test]
    fn fallback_widths_follow_the_current_options() {
        let fields = FieldSet::new(vec![FieldMetadata::new("S", FieldType::String)]).unwrap();
        let field = fields.get("S").unwrap();
        let mut estimator = WidthEstimator::new();
        let setting = WidthSetting::default();

        let first = estimator.estimate(field, &fields, &setting, &EstimateOptions::default());
        assert_eq!(first, 9.0);

        let second = estimator.estimate(
            field,
            &fields,
            &setting,
            &EstimateOptions::default().default_width(12.0),
        );
        assert_eq!(second, 13.0);
    }

    #[test]
    fn repeated_estimates_are_stable() {
        let fields = FieldSet::new(vec![FieldMetadata::new("S", FieldType::String).max_length(12)])
            .unwrap();
        let field = fields.get("S").unwrap();
        let mut estimator = WidthEstimator::new();
        let options = EstimateOptions::default();
        let setting = WidthSetting::default();

        let first = estimator.estimate(field, &fields, &setting, &options);
        let second = estimator.estimate(field, &fields, &setting, &options);
        assert_eq!(first, second);
    }

    #[test]
    fn width_monotone_in_max_length() {
        let mut last = 0.0;
        for max_length in [1u32, 2, 5, 10, 18, 19, 25, 100] {
            let width =
                estimate_one(FieldMetadata::new("S", FieldType::String).max_length(max_length));
            assert!(
                width >= last,
                "width {width} decreased from {last} at max_length {max_length}"
            );
            last = width;
        }
    }
}
