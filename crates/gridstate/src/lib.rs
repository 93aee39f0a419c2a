//! Engines that turn grid personalization into backend-ready state.
//!
//! Two independent pieces, both pure and deterministic:
//!
//! - [`query`]: a [`ParamBuilder`](query::ParamBuilder) that derives the
//!   select list, expand paths, sorters, and a filter tree from field
//!   metadata plus the user's column states. Data-quality problems come
//!   back as [`BuildWarning`](query::BuildWarning)s, never as errors.
//! - [`width`]: a [`WidthEstimator`](width::WidthEstimator) that sizes
//!   columns in character-cell units from metadata alone.
//!
//! ```rust
//! use gridstate::query::ParamBuilder;
//! use gridstate_model::{ColumnState, FieldMetadata, FieldSet, FieldType};
//!
//! let fields = FieldSet::new(vec![
//!     FieldMetadata::new("Product", FieldType::String).description("ProductName"),
//!     FieldMetadata::new("ProductName", FieldType::String),
//!     FieldMetadata::new("Price", FieldType::Currency).precision(10),
//! ])
//! .unwrap();
//!
//! let states = vec![
//!     ColumnState::new("Product").ascending(),
//!     ColumnState::new("Price"),
//! ];
//!
//! let outcome = ParamBuilder::new(&fields).build(&states);
//! assert_eq!(outcome.params.select, ["Product", "ProductName", "Price"]);
//! assert_eq!(outcome.params.sorters[0].path, "Product");
//! assert!(outcome.warnings.is_empty());
//! ```

pub mod query;
pub mod width;

pub use query::{BuildOutcome, BuildWarning, FilterNode, ParamBuilder, RequestParameters, Sorter};
pub use width::{CombineLayout, EstimateOptions, WidthConfig, WidthEstimator, WidthSetting};
