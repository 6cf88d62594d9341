//! Errors raised by the optimization routines.

use std::convert::Infallible;

use thiserror::Error;

use sextant_core::EvalError;

/// Errors that can occur while searching for a root or a minimum.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum OptimError {
    /// The bracket passed to bisection is empty or reversed.
    #[error("invalid bracket [{a}, {b}]: lower end must be strictly below upper end")]
    InvalidBracket {
        /// Lower end.
        a: f64,
        /// Upper end.
        b: f64,
    },

    /// The function has the same sign at both ends of the bracket.
    #[error("no sign change over [{a}, {b}]: f(a) = {fa}, f(b) = {fb}")]
    NoSignChange {
        /// Lower end.
        a: f64,
        /// Upper end.
        b: f64,
        /// Function value at `a`.
        fa: f64,
        /// Function value at `b`.
        fb: f64,
    },

    /// Evaluating the objective failed.
    #[error("objective evaluation failed: {0}")]
    Eval(#[from] EvalError),
}

impl From<Infallible> for OptimError {
    fn from(never: Infallible) -> Self {
        match never {}
    }
}
