//! # sextant-linalg
//!
//! Small dense matrices whose entries are either plain numbers or
//! expression operands.
//!
//! This crate provides:
//! - A row-major [`Matrix`] with vector-aware indexing
//! - The [`Algebra`] trait separating shape logic from element arithmetic
//! - [`Reals`] for numeric matrices and an [`Algebra`] impl for
//!   [`ExprArena`](sextant_core::ExprArena) for symbolic ones
//! - A rayon-parallel product for numeric matrices
//!
//! ## Example
//!
//! ```
//! use sextant_core::{Bindings, ExprArena, Operand};
//! use sextant_linalg::Matrix;
//!
//! let mut arena = ExprArena::new();
//! let x = arena.variable_group("x", 2, None);
//! let v = Matrix::from_column(x.iter().map(Operand::from).collect());
//!
//! let norm = v.norm(&mut arena);
//! let at = Bindings::from_group("x", &[3.0, 4.0]);
//! assert!((arena.value(norm, &at).unwrap() - 5.0).abs() < 1e-12);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod algebra;
pub mod matrix;

pub use algebra::{Algebra, Reals};
pub use matrix::Matrix;
