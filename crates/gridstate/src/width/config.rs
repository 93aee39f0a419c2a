//! Width estimation configuration.

use serde::{Deserialize, Serialize};

/// How a field's width combines with its companion field's width.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CombineLayout {
    /// Side by side: widths add up.
    #[default]
    Sum,
    /// Stacked: the wider of the two wins.
    Max,
}

/// Per-field tuning for the width heuristic.
///
/// All values are in abstract character-cell units; the caller converts to
/// rem/px. An inverted range (`max < min`) is sanitized by raising `max` to
/// `min` rather than surfacing an error - user-supplied configuration must
/// not produce an unsatisfiable range.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidthConfig {
    /// Floor for the computed width.
    #[serde(default = "default_min")]
    pub min: f64,
    /// Ceiling for the computed width.
    #[serde(default = "default_max")]
    pub max: f64,
    /// Flat amount added after content estimation, before the label floor.
    #[serde(default)]
    pub gap: f64,
    /// When `false`, the label's length becomes a hard floor even if the
    /// content width is shorter.
    #[serde(default = "default_true")]
    pub truncate_label: bool,
    /// Whether the label participates in the floor computation at all.
    /// Companion fields are estimated with this off.
    #[serde(default = "default_true")]
    pub consider_label: bool,
}

fn default_min() -> f64 {
    2.0
}

fn default_max() -> f64 {
    19.0
}

fn default_true() -> bool {
    true
}

impl Default for WidthConfig {
    fn default() -> Self {
        WidthConfig {
            min: default_min(),
            max: default_max(),
            gap: 0.0,
            truncate_label: true,
            consider_label: true,
        }
    }
}

impl WidthConfig {
    /// Sets the minimum width.
    pub fn min(mut self, min: f64) -> Self {
        self.min = min;
        self
    }

    /// Sets the maximum width.
    pub fn max(mut self, max: f64) -> Self {
        self.max = max;
        self
    }

    /// Sets the flat gap.
    pub fn gap(mut self, gap: f64) -> Self {
        self.gap = gap;
        self
    }

    /// Lets long labels force the column wider than its content.
    pub fn keep_label(mut self) -> Self {
        self.truncate_label = false;
        self
    }

    /// Excludes the label from the floor computation.
    pub fn ignore_label(mut self) -> Self {
        self.consider_label = false;
        self
    }

    /// Returns a copy with an inverted range repaired.
    pub fn sanitized(mut self) -> Self {
        if self.max < self.min {
            self.max = self.min;
        }
        self
    }
}

/// Width setting for one field: heuristic sizing with a [`WidthConfig`], or
/// the `"disabled"` escape hatch that pins the field to the default width.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "WidthSettingRaw", into = "WidthSettingRaw")]
pub enum WidthSetting {
    /// Skip the heuristic; the field gets the caller's default width.
    Disabled,
    /// Heuristic sizing with the given tuning.
    Auto(WidthConfig),
}

impl Default for WidthSetting {
    fn default() -> Self {
        WidthSetting::Auto(WidthConfig::default())
    }
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(untagged)]
enum WidthSettingRaw {
    Config(WidthConfig),
    Keyword(String),
}

impl From<WidthSetting> for WidthSettingRaw {
    fn from(setting: WidthSetting) -> Self {
        match setting {
            WidthSetting::Disabled => WidthSettingRaw::Keyword("disabled".to_string()),
            WidthSetting::Auto(config) => WidthSettingRaw::Config(config),
        }
    }
}

impl TryFrom<WidthSettingRaw> for WidthSetting {
    type Error = String;

    fn try_from(raw: WidthSettingRaw) -> Result<Self, Self::Error> {
        match raw {
            WidthSettingRaw::Config(config) => Ok(WidthSetting::Auto(config)),
            WidthSettingRaw::Keyword(s) if s == "disabled" => Ok(WidthSetting::Disabled),
            WidthSettingRaw::Keyword(s) => {
                Err(format!("invalid width setting: '{}'. Expected 'disabled'.", s))
            }
        }
    }
}

/// Caller-supplied constants shared by every estimate in one table.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateOptions {
    /// Fixed outer allowance for chrome/borders, added after clamping.
    #[serde(default = "default_padding")]
    pub padding: f64,
    /// Width used for disabled fields and malformed metadata.
    #[serde(default = "default_width")]
    pub default_width: f64,
    /// How companion widths combine.
    #[serde(default)]
    pub layout: CombineLayout,
    /// Display mode showing only the id, suppressing companion combination.
    #[serde(default)]
    pub id_only: bool,
}

fn default_padding() -> f64 {
    1.0
}

fn default_width() -> f64 {
    8.0
}

impl Default for EstimateOptions {
    fn default() -> Self {
        EstimateOptions {
            padding: default_padding(),
            default_width: default_width(),
            layout: CombineLayout::Sum,
            id_only: false,
        }
    }
}

impl EstimateOptions {
    /// Sets the outer padding allowance.
    pub fn padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Sets the fallback width.
    pub fn default_width(mut self, width: f64) -> Self {
        self.default_width = width;
        self
    }

    /// Sets the companion combination layout.
    pub fn layout(mut self, layout: CombineLayout) -> Self {
        self.layout = layout;
        self
    }

    /// Shows only the id portion of composite fields.
    pub fn id_only(mut self) -> Self {
        self.id_only = true;
        self
    }
}
