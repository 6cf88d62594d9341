//! Adapter from an expression to the optimizers' `fgrad` callbacks.

use sextant_core::{Bindings, EvalError, ExprArena, Operand};

/// An expression over the variable group `group0, group1, ...`, viewed as a
/// function of a point `x` with `x[i]` bound to `group{i}`.
///
/// The gradient returned by [`SymbolicObjective::fgrad`] is exact, and
/// [`SymbolicObjective::lower_bound`] gives a guaranteed minimum over the
/// declared variable bounds.
#[derive(Clone, Debug)]
pub struct SymbolicObjective<'a> {
    arena: &'a ExprArena,
    root: Operand,
    group: String,
}

impl<'a> SymbolicObjective<'a> {
    /// Wraps `root`, whose variables are named after `group`.
    #[must_use]
    pub fn new(arena: &'a ExprArena, root: impl Into<Operand>, group: impl Into<String>) -> Self {
        Self {
            arena,
            root: root.into(),
            group: group.into(),
        }
    }

    /// Objective value at `x`.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors.
    pub fn value(&self, x: &[f64]) -> Result<f64, EvalError> {
        self.arena.value(self.root, &Bindings::from_group(&self.group, x))
    }

    /// Objective value and exact gradient at `x`; `gradient[i]` is the
    /// derivative with respect to `x[i]`.
    ///
    /// # Errors
    ///
    /// Propagates evaluation errors.
    pub fn fgrad(&self, x: &[f64]) -> Result<(f64, Vec<f64>), EvalError> {
        self.arena
            .value_and_gradient(self.root, &Bindings::from_group(&self.group, x))
    }

    /// A value no point inside the declared bounds can go below.
    ///
    /// # Errors
    ///
    /// Fails if a variable has no bounds or an interval operation leaves its
    /// domain.
    pub fn lower_bound(&self) -> Result<f64, EvalError> {
        let bound = self.arena.interval(self.root)?;
        log::debug!("objective enclosure over the declared box: {bound}");
        Ok(bound.min())
    }
}
