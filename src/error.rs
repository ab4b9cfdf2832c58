//! Input validation errors
//!
//! The model itself has no failure modes; these cover malformed request
//! fields and arithmetic that escapes the finite range.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum EstimateError {
    /// A numeric field was present but not a number or numeric string
    #[error("invalid value for '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Inputs produced NaN or ±∞ in a reported quantity
    #[error("inputs produce a non-finite {quantity}; check for extreme or negative values")]
    NonFinite { quantity: &'static str },
}

impl EstimateError {
    pub(crate) fn invalid(field: &'static str, reason: impl Into<String>) -> Self {
        EstimateError::InvalidField { field, reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, EstimateError>;
