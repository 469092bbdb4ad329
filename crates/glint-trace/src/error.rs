//! Error types for hit queries.
//!
//! All of these are fail-fast: they indicate programmer or input error, not
//! transient conditions, and propagate to the caller uncaught.

use glint_shape::CsgOp;
use thiserror::Error;

/// Errors that can occur during a hit query.
#[derive(Error, Debug)]
pub enum TraceError {
    /// Hit testing for this composite operator is not implemented.
    #[error("{0} hit testing is not implemented")]
    Unimplemented(CsgOp),

    /// A structural guarantee of the hit pipeline was broken.
    #[error("geometry invariant violated: {0}")]
    InvariantViolation(&'static str),
}

/// Result type for hit queries.
pub type Result<T> = std::result::Result<T, TraceError>;
