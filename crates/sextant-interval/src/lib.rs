//! # sextant-interval
//!
//! Closed-interval arithmetic for bound propagation.
//!
//! This crate provides:
//! - The [`Interval`] type with sound `+`, `-`, `*`, unary `-`
//! - Fallible division and real powers
//! - Sine, cosine and arccosine enclosures
//!
//! ## Soundness
//!
//! Every operation returns an interval containing `f(x)` for every `x` in the
//! input interval(s). Operations that are undefined somewhere on their input
//! fail with [`IntervalError::Domain`] rather than returning a partial result.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod interval;
pub mod power;
pub mod trig;

#[cfg(test)]
mod proptests;

pub use error::IntervalError;
pub use interval::Interval;
pub use power::EVEN_POWER_FLOOR;
