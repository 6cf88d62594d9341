//! Errors raised while evaluating expressions.

use thiserror::Error;

use sextant_interval::IntervalError;

/// Errors that can occur during evaluation.
///
/// Construction never fails; every variant here comes from one of the
/// evaluation entry points.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum EvalError {
    /// Interval evaluation reached a variable without declared bounds.
    #[error("variable `{0}` has no declared bounds")]
    MissingBound(String),

    /// Numeric evaluation reached a variable absent from the bindings.
    #[error("no binding supplied for variable `{0}`")]
    MissingBinding(String),

    /// A power node carries an exponent that is not a finite real.
    #[error("invalid exponent {0}: must be a finite real scalar")]
    InvalidExponent(f64),

    /// An interval operation was undefined on its input.
    #[error(transparent)]
    Interval(#[from] IntervalError),
}

impl EvalError {
    /// Returns true for interval domain violations (division across zero,
    /// real powers of negative ranges, `acos` outside `[-1, 1]`).
    #[must_use]
    pub fn is_domain(&self) -> bool {
        matches!(self, EvalError::Interval(IntervalError::Domain { .. }))
    }
}
