//! The three evaluation engines: value, value with gradient, and interval.
//!
//! Each engine is a single memoized traversal (see [`crate::traverse`]) with
//! its own per-call memo, so the same arena can be evaluated from several
//! threads at once.
//!
//! Numeric evaluation and interval evaluation deliberately disagree at the
//! boundary of `acos`: [`ExprArena::value`] and [`ExprArena::valgrad`]
//! saturate (`acos(v) = 0` for `v >= 1`, `π` for `v <= -1`, zero gradient),
//! while [`ExprArena::interval`] fails with a domain error.

use std::f64::consts::PI;

use sextant_interval::Interval;

use crate::arena::ExprArena;
use crate::bindings::{Bindings, SlotMap};
use crate::error::EvalError;
use crate::expr::{Node, Operand, SymbolId};
use crate::traverse::{fold, Memo};

/// Floor on `sqrt(1 - v²)` in the derivative of `acos`.
pub const ACOS_SLOPE_FLOOR: f64 = 1e-9;

/// A value together with its gradient.
#[derive(Clone, Debug, PartialEq)]
pub struct ValGrad {
    /// The function value.
    pub value: f64,
    /// One partial derivative per gradient slot.
    pub gradient: Vec<f64>,
}

impl ValGrad {
    /// A value whose gradient is identically zero.
    #[must_use]
    pub fn constant(value: f64, dimension: usize) -> Self {
        Self {
            value,
            gradient: vec![0.0; dimension],
        }
    }
}

/// The per-call cache of a gradient evaluation.
pub type ValGradCache = Memo<ValGrad>;

/// `acos` clamped to `0` above the domain and `π` below it.
pub(crate) fn saturating_acos(v: f64) -> f64 {
    if v >= 1.0 {
        0.0
    } else if v <= -1.0 {
        PI
    } else {
        v.acos()
    }
}

fn check_exponent(exponent: f64) -> Result<f64, EvalError> {
    if exponent.is_finite() {
        Ok(exponent)
    } else {
        Err(EvalError::InvalidExponent(exponent))
    }
}

/// `acc += scale * g`
fn axpy(acc: &mut [f64], scale: f64, g: &[f64]) {
    for (a, gi) in acc.iter_mut().zip(g) {
        *a += scale * gi;
    }
}

impl ExprArena {
    /// Evaluates `root` at the given bindings.
    ///
    /// # Errors
    ///
    /// - [`EvalError::MissingBinding`] if a reachable variable is unbound.
    /// - [`EvalError::InvalidExponent`] for a power node with a non-finite
    ///   exponent.
    pub fn value(&self, root: impl Into<Operand>, bindings: &Bindings) -> Result<f64, EvalError> {
        let root = match root.into() {
            Operand::Scalar(x) => return Ok(x),
            Operand::Node(id) => id,
        };

        let mut memo = Memo::new();
        fold(self, root, &mut memo, |node, memo| -> Result<f64, EvalError> {
            Ok(match node {
                Node::Variable { symbol, .. } => self.bound_value(*symbol, bindings)?,
                Node::Add { terms, constant } => {
                    terms.iter().fold(*constant, |acc, &t| acc + memo[t])
                }
                Node::Mul { factors, constant } => {
                    factors.iter().fold(*constant, |acc, &f| acc * memo[f])
                }
                Node::Pow { base, exponent } => memo[*base].powf(check_exponent(*exponent)?),
                Node::Sin(arg) => memo[*arg].sin(),
                Node::Cos(arg) => memo[*arg].cos(),
                Node::Acos(arg) => saturating_acos(memo[*arg]),
            })
        })?;
        log::trace!("value: {} nodes, {} cache hits", memo.len(), memo.hits());

        Ok(memo[root])
    }

    /// Evaluates `root` and its gradient, using the slot order implied by
    /// the bindings (see [`Bindings::slots`]).
    ///
    /// # Errors
    ///
    /// Same as [`ExprArena::valgrad`].
    pub fn value_and_gradient(
        &self,
        root: impl Into<Operand>,
        bindings: &Bindings,
    ) -> Result<(f64, Vec<f64>), EvalError> {
        let ValGrad { value, gradient } = self.valgrad(root, bindings, &bindings.slots())?;
        Ok((value, gradient))
    }

    /// Evaluates `root` and its gradient with respect to the variables
    /// tracked by `slots`.
    ///
    /// The gradient has `slots.dimension()` components; variables without a
    /// slot contribute nothing to it. Every node is evaluated at most once
    /// per call, however many parents share it.
    ///
    /// # Errors
    ///
    /// - [`EvalError::MissingBinding`] if a reachable variable is unbound.
    /// - [`EvalError::InvalidExponent`] for a power node with a non-finite
    ///   exponent.
    pub fn valgrad(
        &self,
        root: impl Into<Operand>,
        bindings: &Bindings,
        slots: &SlotMap,
    ) -> Result<ValGrad, EvalError> {
        self.valgrad_traced(root, bindings, slots).map(|(vg, _)| vg)
    }

    /// Like [`ExprArena::valgrad`], also returning the call's cache so the
    /// number of computations per node can be inspected.
    ///
    /// # Errors
    ///
    /// Same as [`ExprArena::valgrad`].
    pub fn valgrad_traced(
        &self,
        root: impl Into<Operand>,
        bindings: &Bindings,
        slots: &SlotMap,
    ) -> Result<(ValGrad, ValGradCache), EvalError> {
        let dim = slots.dimension();
        let mut cache = ValGradCache::new();
        let root = match root.into() {
            Operand::Scalar(x) => return Ok((ValGrad::constant(x, dim), cache)),
            Operand::Node(id) => id,
        };

        fold(self, root, &mut cache, |node, memo| {
            self.combine_valgrad(node, bindings, slots, memo)
        })?;
        log::trace!(
            "valgrad: {} nodes, {} cache hits, dimension {}",
            cache.len(),
            cache.hits(),
            dim
        );

        Ok((cache[root].clone(), cache))
    }

    /// Encloses every value `root` can take while each variable ranges over
    /// its declared bounds.
    ///
    /// # Errors
    ///
    /// - [`EvalError::MissingBound`] if a reachable variable has no bounds.
    /// - [`EvalError::InvalidExponent`] for a power node with a non-finite
    ///   exponent.
    /// - [`EvalError::Interval`] when an interval operation is undefined on
    ///   its input, e.g. division by a range containing zero or `acos` of a
    ///   range leaving `[-1, 1]`.
    pub fn interval(&self, root: impl Into<Operand>) -> Result<Interval, EvalError> {
        let root = match root.into() {
            Operand::Scalar(x) => return Ok(Interval::point(x)),
            Operand::Node(id) => id,
        };

        let mut memo = Memo::new();
        fold(self, root, &mut memo, |node, memo| -> Result<Interval, EvalError> {
            Ok(match node {
                Node::Variable { symbol, bounds } => bounds.ok_or_else(|| {
                    EvalError::MissingBound(self.symbol_name(*symbol).to_owned())
                })?,
                Node::Add { terms, constant } => terms
                    .iter()
                    .fold(Interval::point(*constant), |acc, &t| acc + memo[t]),
                Node::Mul { factors, constant } => factors
                    .iter()
                    .fold(Interval::point(*constant), |acc, &f| acc * memo[f]),
                Node::Pow { base, exponent } => memo[*base].powf(check_exponent(*exponent)?)?,
                Node::Sin(arg) => memo[*arg].sin(),
                Node::Cos(arg) => memo[*arg].cos(),
                Node::Acos(arg) => memo[*arg].acos()?,
            })
        })?;
        log::trace!("interval: {} nodes, {} cache hits", memo.len(), memo.hits());

        Ok(memo[root])
    }

    fn bound_value(&self, symbol: SymbolId, bindings: &Bindings) -> Result<f64, EvalError> {
        let name = self.symbol_name(symbol);
        bindings
            .get(name)
            .ok_or_else(|| EvalError::MissingBinding(name.to_owned()))
    }

    fn combine_valgrad(
        &self,
        node: &Node,
        bindings: &Bindings,
        slots: &SlotMap,
        memo: &ValGradCache,
    ) -> Result<ValGrad, EvalError> {
        let dim = slots.dimension();
        let mut gradient = vec![0.0; dim];

        let value = match node {
            Node::Variable { symbol, .. } => {
                if let Some(slot) = slots.slot(self.symbol_name(*symbol)) {
                    gradient[slot] = 1.0;
                }
                self.bound_value(*symbol, bindings)?
            }
            Node::Add { terms, constant } => {
                let mut value = *constant;
                for &t in terms {
                    let child = &memo[t];
                    value += child.value;
                    axpy(&mut gradient, 1.0, &child.gradient);
                }
                value
            }
            Node::Mul { factors, constant } => {
                let values: Vec<f64> = factors.iter().map(|&f| memo[f].value).collect();
                for (k, &f) in factors.iter().enumerate() {
                    // Product of every other factor, computed directly so a
                    // zero factor does not poison the division.
                    let others = values
                        .iter()
                        .enumerate()
                        .filter(|&(j, _)| j != k)
                        .fold(*constant, |acc, (_, v)| acc * v);
                    axpy(&mut gradient, others, &memo[f].gradient);
                }
                values.iter().fold(*constant, |acc, v| acc * v)
            }
            Node::Pow { base, exponent } => {
                let e = check_exponent(*exponent)?;
                let child = &memo[*base];
                axpy(&mut gradient, e * child.value.powf(e - 1.0), &child.gradient);
                child.value.powf(e)
            }
            Node::Sin(arg) => {
                let child = &memo[*arg];
                axpy(&mut gradient, child.value.cos(), &child.gradient);
                child.value.sin()
            }
            Node::Cos(arg) => {
                let child = &memo[*arg];
                axpy(&mut gradient, -child.value.sin(), &child.gradient);
                child.value.cos()
            }
            Node::Acos(arg) => {
                let child = &memo[*arg];
                let v = child.value;
                if v >= 1.0 || v <= -1.0 {
                    saturating_acos(v)
                } else {
                    let slope = (1.0 - v * v).sqrt().max(ACOS_SLOPE_FLOOR);
                    axpy(&mut gradient, -1.0 / slope, &child.gradient);
                    v.acos()
                }
            }
        };

        Ok(ValGrad { value, gradient })
    }
}
