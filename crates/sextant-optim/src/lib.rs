//! # sextant-optim
//!
//! Root finding and minimization routines that consume expression values
//! and gradients.
//!
//! This crate provides:
//! - Scalar bisection and Newton iterations ([`root_bisection`],
//!   [`root_newton`], [`minimize_newton`])
//! - Central finite differences ([`derivative`], [`derivatives`],
//!   [`gradient`])
//! - Fixed-step and adaptive-step gradient descent, and gradient-direction
//!   line search
//! - [`SymbolicObjective`], which turns an expression into an `fgrad`
//!   callback with exact gradients and an interval lower bound
//!
//! Every routine returns a [`Solution`] whose [`Status`] says why it
//! stopped; running out of iterations is a status, not an error.
//!
//! ## Example
//!
//! ```
//! use sextant_core::{ExprArena, Operand};
//! use sextant_interval::Interval;
//! use sextant_optim::{gradient_descent_root, SymbolicObjective, Tolerances};
//!
//! // booth(x) = (x0 + 2 x1 − 7)² + (2 x0 + x1 − 5)²
//! let mut arena = ExprArena::new();
//! let x = arena.variable_group("x", 2, Some(Interval::new(-10.0, 10.0)));
//! let two_x1 = arena.mul(2.0, x[1]);
//! let a = arena.sum([Operand::Node(x[0]), two_x1, Operand::Scalar(-7.0)]);
//! let two_x0 = arena.mul(2.0, x[0]);
//! let b = arena.sum([two_x0, Operand::Node(x[1]), Operand::Scalar(-5.0)]);
//! let a2 = arena.pow(a, 2.0);
//! let b2 = arena.pow(b, 2.0);
//! let booth = arena.add(a2, b2);
//!
//! let objective = SymbolicObjective::new(&arena, booth, "x");
//! let fmin = objective.lower_bound().unwrap();
//! let solution = gradient_descent_root(
//!     |x: &[f64]| objective.fgrad(x),
//!     &[0.0, 0.0],
//!     fmin,
//!     &Tolerances::default(),
//! )
//! .unwrap();
//! assert!((solution.x[0] - 1.0).abs() < 1e-2);
//! assert!((solution.x[1] - 3.0).abs() < 1e-2);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod config;
pub mod descent;
pub mod error;
pub mod objective;
pub mod scalar;

pub use config::{Solution, Status, Tolerances, FD_STEP};
pub use descent::{gradient, gradient_descent, gradient_descent_root, line_search};
pub use error::OptimError;
pub use objective::SymbolicObjective;
pub use scalar::{
    derivative, derivatives, minimize_newton, root_bisection, root_newton, second_derivative,
};

#[cfg(test)]
mod proptests;
#[cfg(test)]
mod tests;
