//! Heuristic column width estimation.
//!
//! Produces a width in abstract character-cell units for each column from
//! its [`FieldMetadata`](gridstate_model::FieldMetadata) alone, with no
//! text measurement. Hosts multiply the result by their font's average
//! character width to get pixels or rems.
//!
//! The pipeline: per-type content width, companion combination (a currency
//! amount widens to make room for its code), optional label floor, clamp
//! to `[min, max]`, outer padding. See [`WidthEstimator::estimate`] for
//! the details and [`WidthConfig`] / [`EstimateOptions`] for the knobs.

mod config;
mod estimate;

pub use config::{CombineLayout, EstimateOptions, WidthConfig, WidthSetting};
pub use estimate::WidthEstimator;
