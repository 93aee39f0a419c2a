//! Error types for the model crate.

use thiserror::Error;

/// Errors raised when constructing model values.
///
/// These indicate caller bugs, not data-quality problems: data-quality issues
/// in metadata and personalization payloads degrade with warnings downstream
/// instead of failing here.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    /// Two fields in a set share the same name.
    #[error("duplicate field name '{name}' in field set")]
    DuplicateField { name: String },
}

/// Result type for model construction.
pub type Result<T> = std::result::Result<T, ModelError>;
