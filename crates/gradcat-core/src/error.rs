//! Core error types for gradcat-core.
//!
//! Uses `thiserror` for structured, matchable error variants covering
//! validation failures in the program data model.

use thiserror::Error;

/// Core errors produced by the gradcat-core crate.
#[derive(Debug, Error)]
pub enum CoreError {
    /// A required field was left empty.
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    /// A ranking was given but is not a positive integer.
    #[error("invalid ranking in {field}: must be 1 or greater")]
    InvalidRanking { field: &'static str },
}
