//! Error types
//!
//! A missing reading is not an error; `parse_reading` returns `None` for that.

use thiserror::Error;

/// Errors raised when validating input for a mix calculation
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MixError {
    #[error("Invalid amount '{0}': please enter a valid positive number")]
    InvalidAmount(String),

    #[error("Amount {amount} is too large (maximum {max})")]
    AmountTooLarge { amount: f64, max: f64 },

    #[error("Invalid mixing ratio {0}: ratio must be a positive number")]
    InvalidRatio(f64),

    #[error("Unknown fuel unit '{0}': expected gallons or liters")]
    UnknownUnit(String),

    #[error("Unknown mixing ratio '{0}': expected a form like 50:1")]
    UnknownRatio(String),
}

/// Result type for mix operations
pub type MixResult<T> = Result<T, MixError>;
