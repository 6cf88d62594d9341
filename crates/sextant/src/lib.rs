//! # Sextant
//!
//! Define a scalar expression once, then evaluate it three ways: its value,
//! its value with an exact gradient, and a guaranteed interval enclosing
//! every value it can take over bounded inputs.
//!
//! ## Features
//!
//! - **Arena-Allocated DAG**: 32-bit node ids, shared sub-expressions
//!   evaluated once per call
//! - **Eager Simplification**: flattened sums and products, folded constants
//! - **Forward-Mode Autodiff**: exact gradients propagated bottom-up over
//!   the DAG
//! - **Sound Bounds**: interval arithmetic through powers, sin, cos and acos
//! - **Optimization**: bisection, Newton, gradient descent and line search,
//!   seeded by interval lower bounds
//!
//! ## Quick Start
//!
//! ```rust
//! use sextant::prelude::*;
//!
//! let mut arena = ExprArena::new();
//! let x = arena.variable("x", Some(Interval::new(-2.0, 3.0)));
//! let f = arena.pow(x, 2.0);
//!
//! let at = Bindings::new().with("x", 3.0);
//! assert_eq!(arena.value_and_gradient(f, &at).unwrap(), (9.0, vec![6.0]));
//! assert!(arena.interval(f).unwrap().min() >= 0.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use sextant_core as core;
pub use sextant_interval as interval;
pub use sextant_linalg as linalg;
pub use sextant_optim as optim;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use sextant_core::{Bindings, EvalError, ExprArena, NodeId, Operand, SlotMap};
    pub use sextant_interval::{Interval, IntervalError};
    pub use sextant_linalg::{Algebra, Matrix, Reals};
    pub use sextant_optim::{OptimError, Solution, Status, SymbolicObjective, Tolerances};
}
