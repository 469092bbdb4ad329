//! Error types for shape construction.

use thiserror::Error;

/// Errors that can occur when constructing a shape.
#[derive(Error, Debug)]
pub enum ShapeError {
    /// A shape parameter is geometrically meaningless.
    #[error("invalid shape: {0}")]
    InvalidShape(String),

    /// A dimension that must be positive is zero or negative.
    #[error("non-positive size: {0}")]
    NonPositiveSize(String),
}

/// Result type for shape construction.
pub type Result<T> = std::result::Result<T, ShapeError>;
