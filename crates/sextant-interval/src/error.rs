//! Errors raised by interval operations.

use thiserror::Error;

use crate::Interval;

/// Errors that can occur during interval arithmetic.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum IntervalError {
    /// The operation is undefined somewhere on its input interval.
    #[error("domain error in {operation}: input {interval} is outside the function domain")]
    Domain {
        /// Name of the failing operation.
        operation: &'static str,
        /// The offending input interval.
        interval: Interval,
    },

    /// A power was requested with an exponent that is not a finite real.
    #[error("invalid exponent {0}: must be a finite real scalar")]
    InvalidExponent(f64),

    /// Bounds given in the wrong order, or NaN.
    #[error("invalid interval bounds: [{min}, {max}]")]
    InvertedBounds {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

impl IntervalError {
    pub(crate) fn domain(operation: &'static str, interval: Interval) -> Self {
        IntervalError::Domain {
            operation,
            interval,
        }
    }
}
