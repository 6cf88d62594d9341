//! Evaluating one expression at many points in parallel.
//!
//! The arena is only read during evaluation and every call owns its memo,
//! so points are independent tasks for rayon's work-stealing pool.

use rayon::prelude::*;

use crate::arena::ExprArena;
use crate::bindings::{Bindings, SlotMap};
use crate::error::EvalError;
use crate::eval::ValGrad;
use crate::expr::Operand;

/// Configuration for batch evaluation.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum number of points to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
        }
    }
}

impl ExprArena {
    /// Evaluates `root` at every set of bindings, in input order.
    pub fn values_par(
        &self,
        root: impl Into<Operand>,
        points: &[Bindings],
        config: &BatchConfig,
    ) -> Vec<Result<f64, EvalError>> {
        let root = root.into();
        if points.len() < config.parallel_threshold {
            return points.iter().map(|b| self.value(root, b)).collect();
        }
        points.par_iter().map(|b| self.value(root, b)).collect()
    }

    /// Evaluates `root` and its gradient at every set of bindings, in input
    /// order, with one shared slot assignment.
    pub fn valgrads_par(
        &self,
        root: impl Into<Operand>,
        points: &[Bindings],
        slots: &SlotMap,
        config: &BatchConfig,
    ) -> Vec<Result<ValGrad, EvalError>> {
        let root = root.into();
        if points.len() < config.parallel_threshold {
            return points.iter().map(|b| self.valgrad(root, b, slots)).collect();
        }
        points
            .par_iter()
            .map(|b| self.valgrad(root, b, slots))
            .collect()
    }
}
