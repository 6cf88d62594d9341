//! Element arithmetic for matrices.
//!
//! A [`Matrix`](crate::Matrix) never adds or multiplies its entries itself;
//! it asks an [`Algebra`]. Plain numbers use [`Reals`], while an
//! [`ExprArena`] builds expression nodes, so the same matrix code produces
//! either numbers or a symbolic objective.

use sextant_core::{ExprArena, Operand};

/// Arithmetic over a matrix element type.
pub trait Algebra {
    /// The element type.
    type Elem: Clone;

    /// Lifts a real constant into an element.
    fn constant(&self, x: f64) -> Self::Elem;

    /// Returns the element as a plain number when it is one.
    fn as_scalar(&self, a: &Self::Elem) -> Option<f64>;

    /// `a + b`
    fn add(&mut self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// `a * b`
    fn mul(&mut self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem;

    /// `a ^ exponent`
    fn pow(&mut self, a: &Self::Elem, exponent: f64) -> Self::Elem;

    /// The additive identity.
    fn zero(&self) -> Self::Elem {
        self.constant(0.0)
    }

    /// `-a`
    fn neg(&mut self, a: &Self::Elem) -> Self::Elem {
        let minus_one = self.constant(-1.0);
        self.mul(a, &minus_one)
    }

    /// `a - b`
    fn sub(&mut self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let nb = self.neg(b);
        self.add(a, &nb)
    }

    /// `a / b`
    fn div(&mut self, a: &Self::Elem, b: &Self::Elem) -> Self::Elem {
        let inv = self.pow(b, -1.0);
        self.mul(a, &inv)
    }
}

/// Ordinary `f64` arithmetic.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Reals;

impl Algebra for Reals {
    type Elem = f64;

    fn constant(&self, x: f64) -> f64 {
        x
    }

    fn as_scalar(&self, a: &f64) -> Option<f64> {
        Some(*a)
    }

    fn add(&mut self, a: &f64, b: &f64) -> f64 {
        a + b
    }

    fn mul(&mut self, a: &f64, b: &f64) -> f64 {
        a * b
    }

    fn pow(&mut self, a: &f64, exponent: f64) -> f64 {
        a.powf(exponent)
    }

    fn neg(&mut self, a: &f64) -> f64 {
        -a
    }

    fn sub(&mut self, a: &f64, b: &f64) -> f64 {
        a - b
    }

    fn div(&mut self, a: &f64, b: &f64) -> f64 {
        a / b
    }
}

/// Entries are operands; every operation appends (simplified) nodes.
impl Algebra for ExprArena {
    type Elem = Operand;

    fn constant(&self, x: f64) -> Operand {
        Operand::Scalar(x)
    }

    fn as_scalar(&self, a: &Operand) -> Option<f64> {
        a.as_scalar()
    }

    fn add(&mut self, a: &Operand, b: &Operand) -> Operand {
        ExprArena::add(self, a, b)
    }

    fn mul(&mut self, a: &Operand, b: &Operand) -> Operand {
        ExprArena::mul(self, a, b)
    }

    fn pow(&mut self, a: &Operand, exponent: f64) -> Operand {
        ExprArena::pow(self, a, exponent)
    }

    fn neg(&mut self, a: &Operand) -> Operand {
        ExprArena::neg(self, a)
    }

    fn sub(&mut self, a: &Operand, b: &Operand) -> Operand {
        ExprArena::sub(self, a, b)
    }

    fn div(&mut self, a: &Operand, b: &Operand) -> Operand {
        ExprArena::div(self, a, b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sextant_core::Node;

    #[test]
    fn test_reals() {
        let mut r = Reals;
        assert_eq!(r.add(&1.5, &2.0), 3.5);
        assert_eq!(r.sub(&1.5, &2.0), -0.5);
        assert_eq!(r.div(&3.0, &4.0), 0.75);
        assert_eq!(r.pow(&9.0, 0.5), 3.0);
        assert_eq!(r.zero(), 0.0);
    }

    #[test]
    fn test_arena_folds_scalars() {
        let mut arena = ExprArena::new();
        let two = arena.constant(2.0);
        let three = arena.constant(3.0);
        assert_eq!(Algebra::mul(&mut arena, &two, &three), Operand::Scalar(6.0));
        assert!(arena.is_empty());
    }

    #[test]
    fn test_arena_builds_nodes() {
        let mut arena = ExprArena::new();
        let x = Operand::from(arena.variable("x", None));
        let y = Operand::from(arena.variable("y", None));

        let d = Algebra::sub(&mut arena, &x, &y).as_node().unwrap();
        assert!(matches!(arena.get(d), Node::Add { terms, .. } if terms.len() == 2));
    }
}
