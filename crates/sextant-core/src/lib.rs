//! # sextant-core
//!
//! Expression graphs evaluated three ways: value, exact gradient and
//! guaranteed interval enclosure.
//!
//! This crate provides:
//! - Arena-allocated expression storage with 32-bit node ids
//! - Construction with eager flattening and constant folding
//! - Memoized value, gradient and interval evaluation over the DAG
//! - Parallel evaluation of one expression at many points
//!
//! ## Design Principles
//!
//! - **Identity, not structure**: every construction call yields a fresh
//!   [`NodeId`]; a sub-expression is shared only by reusing its id
//! - **Append-only arena**: operands always exist before their parents, so
//!   the graph is acyclic and needs no reference counting
//! - **Closed node set**: [`Node`] is matched exhaustively by every engine
//! - **Explicit work stack**: evaluation depth is bounded by heap, not stack
//!
//! ## Example
//!
//! ```
//! use sextant_core::{Bindings, ExprArena};
//! use sextant_interval::Interval;
//!
//! let mut arena = ExprArena::new();
//! let x = arena.variable("x", Some(Interval::new(-2.0, 3.0)));
//! let y = arena.variable("y", Some(Interval::new(0.0, 1.0)));
//!
//! let x2 = arena.pow(x, 2.0);
//! let sy = arena.sin(y);
//! let f = arena.add(x2, sy);
//!
//! let at = Bindings::new().with("x", 3.0).with("y", 0.0);
//! let (value, gradient) = arena.value_and_gradient(f, &at).unwrap();
//! assert_eq!(value, 9.0);
//! assert_eq!(gradient, vec![6.0, 1.0]);
//!
//! let bound = arena.interval(f).unwrap();
//! assert!(bound.min() >= 0.0 && bound.max() <= 10.0);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::float_cmp)]

pub mod arena;
pub mod batch;
pub mod bindings;
pub mod build;
pub mod display;
pub mod error;
pub mod eval;
pub mod expr;
pub mod handle;
pub mod intern;
pub mod traverse;

#[cfg(test)]
mod proptests;

pub use arena::ExprArena;
pub use batch::BatchConfig;
pub use bindings::{Bindings, SlotMap};
pub use error::EvalError;
pub use eval::{ValGrad, ValGradCache, ACOS_SLOPE_FLOOR};
pub use expr::{Node, Operand, SymbolId, Terms};
pub use handle::NodeId;
pub use traverse::Memo;
