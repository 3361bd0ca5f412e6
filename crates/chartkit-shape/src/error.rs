//! Error types for shape generators and scales.

use thiserror::Error;

/// A specialized Result type for shape operations.
pub type ShapeResult<T> = Result<T, ShapeError>;

/// Errors that can occur while configuring shapes and scales.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ShapeError {
    /// The curve can only interpolate lines, not areas.
    #[error("Curve '{curve}' supports line interpolation only, not areas")]
    LineOnlyCurve {
        /// Name of the rejected curve.
        curve: String,
    },

    /// Path rounding precision is negative or not a number.
    #[error("Invalid digits: {digits}")]
    InvalidDigits {
        /// The rejected value.
        digits: f64,
    },

    /// Insufficient values for a domain or range.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required values.
        required: usize,
        /// Actual number of values.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },
}

impl ShapeError {
    /// Creates a line-only curve error.
    #[must_use]
    pub fn line_only(curve: impl Into<String>) -> Self {
        Self::LineOnlyCurve {
            curve: curve.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }
}
