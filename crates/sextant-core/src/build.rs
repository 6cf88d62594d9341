//! Expression construction with eager simplification.
//!
//! Every constructor normalizes as it builds:
//! - neutral operands vanish (`x + 0`, `x * 1`, `x ^ 1`) and `x * 0` is `0`
//! - sums and products are flattened into a single operand list, with scalar
//!   operands merged into the node's accumulated constant
//! - nested powers collapse by multiplying exponents
//! - operations on plain numbers fold to numbers
//!
//! Nothing else is rewritten. In particular structurally equal
//! sub-expressions are not detected; sharing comes only from reusing a
//! [`NodeId`]. Construction never fails.

use smallvec::smallvec;

use crate::arena::ExprArena;
use crate::eval::saturating_acos;
use crate::expr::{Node, Operand, Terms};
use crate::handle::NodeId;

impl ExprArena {
    /// Builds `a + b`.
    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
        match (a.into(), b.into()) {
            (Operand::Scalar(x), Operand::Scalar(y)) => Operand::Scalar(x + y),
            (Operand::Node(n), Operand::Scalar(c)) | (Operand::Scalar(c), Operand::Node(n)) => {
                if c == 0.0 {
                    return Operand::Node(n);
                }
                let (terms, constant) = self.sum_parts(n);
                self.make_add(terms, constant + c)
            }
            (Operand::Node(a), Operand::Node(b)) => {
                let (mut terms, ca) = self.sum_parts(a);
                let (rest, cb) = self.sum_parts(b);
                terms.extend(rest);
                self.make_add(terms, ca + cb)
            }
        }
    }

    /// Builds `a * b`.
    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
        match (a.into(), b.into()) {
            (Operand::Scalar(x), Operand::Scalar(y)) => Operand::Scalar(x * y),
            (Operand::Node(n), Operand::Scalar(c)) | (Operand::Scalar(c), Operand::Node(n)) => {
                if c == 0.0 {
                    return Operand::Scalar(0.0);
                }
                if c == 1.0 {
                    return Operand::Node(n);
                }
                let (factors, constant) = self.product_parts(n);
                self.make_mul(factors, constant * c)
            }
            (Operand::Node(a), Operand::Node(b)) => {
                let (mut factors, ca) = self.product_parts(a);
                let (rest, cb) = self.product_parts(b);
                factors.extend(rest);
                self.make_mul(factors, ca * cb)
            }
        }
    }

    /// Builds `-a`, i.e. `a * -1`.
    pub fn neg(&mut self, a: impl Into<Operand>) -> Operand {
        self.mul(a, -1.0)
    }

    /// Builds `a - b`, i.e. `a + (-b)`.
    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
        let b = b.into();
        if b.is_zero() {
            return a.into();
        }
        let negated = self.neg(b);
        self.add(a, negated)
    }

    /// Builds `a ^ exponent`.
    ///
    /// A scalar base is folded immediately with `f64::powf`, so a non-finite
    /// exponent on a number yields a scalar (NaN for a NaN exponent) rather
    /// than [`EvalError::InvalidExponent`](crate::EvalError::InvalidExponent).
    /// With a node base the exponent is stored as given and every evaluation
    /// engine rejects it.
    pub fn pow(&mut self, a: impl Into<Operand>, exponent: f64) -> Operand {
        let n = match a.into() {
            Operand::Scalar(x) => return Operand::Scalar(x.powf(exponent)),
            Operand::Node(n) => n,
        };
        if exponent == 0.0 {
            return Operand::Scalar(1.0);
        }
        if exponent == 1.0 {
            return Operand::Node(n);
        }
        let nested = match self.get(n) {
            Node::Pow {
                base,
                exponent: inner,
            } => Some((*base, *inner)),
            _ => None,
        };
        match nested {
            Some((base, inner)) => self.pow(base, inner * exponent),
            None => Operand::Node(self.push(Node::Pow { base: n, exponent })),
        }
    }

    /// Builds `a / b`.
    ///
    /// Division by a number multiplies by its reciprocal; division by a node
    /// multiplies by that node raised to `-1`.
    pub fn div(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Operand {
        match b.into() {
            Operand::Scalar(y) if y == 1.0 => a.into(),
            Operand::Scalar(y) => self.mul(a, 1.0 / y),
            Operand::Node(d) => {
                let reciprocal = self.pow(d, -1.0);
                self.mul(a, reciprocal)
            }
        }
    }

    /// Builds `sin(a)`.
    pub fn sin(&mut self, a: impl Into<Operand>) -> Operand {
        match a.into() {
            Operand::Scalar(x) => Operand::Scalar(x.sin()),
            Operand::Node(n) => Operand::Node(self.push(Node::Sin(n))),
        }
    }

    /// Builds `cos(a)`.
    pub fn cos(&mut self, a: impl Into<Operand>) -> Operand {
        match a.into() {
            Operand::Scalar(x) => Operand::Scalar(x.cos()),
            Operand::Node(n) => Operand::Node(self.push(Node::Cos(n))),
        }
    }

    /// Builds `acos(a)`.
    ///
    /// A numeric argument outside `[-1, 1]` saturates to `0` or `π`, the
    /// same policy numeric evaluation applies.
    pub fn acos(&mut self, a: impl Into<Operand>) -> Operand {
        match a.into() {
            Operand::Scalar(x) => Operand::Scalar(saturating_acos(x)),
            Operand::Node(n) => Operand::Node(self.push(Node::Acos(n))),
        }
    }

    /// Sums a sequence of operands; the empty sum is `0`.
    pub fn sum<I>(&mut self, operands: I) -> Operand
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        operands
            .into_iter()
            .fold(Operand::Scalar(0.0), |acc, op| self.add(acc, op))
    }

    /// Multiplies a sequence of operands; the empty product is `1`.
    pub fn product<I>(&mut self, operands: I) -> Operand
    where
        I: IntoIterator,
        I::Item: Into<Operand>,
    {
        operands
            .into_iter()
            .fold(Operand::Scalar(1.0), |acc, op| self.mul(acc, op))
    }

    // === Internals ===

    /// Splits a node into sum operands: an `Add` yields its list and
    /// constant, anything else is a single term.
    fn sum_parts(&self, id: NodeId) -> (Terms, f64) {
        match self.get(id) {
            Node::Add { terms, constant } => (terms.clone(), *constant),
            _ => (smallvec![id], 0.0),
        }
    }

    /// Splits a node into product operands.
    fn product_parts(&self, id: NodeId) -> (Terms, f64) {
        match self.get(id) {
            Node::Mul { factors, constant } => (factors.clone(), *constant),
            _ => (smallvec![id], 1.0),
        }
    }

    fn make_add(&mut self, terms: Terms, constant: f64) -> Operand {
        if terms.len() == 1 && constant == 0.0 {
            return Operand::Node(terms[0]);
        }
        Operand::Node(self.push(Node::Add { terms, constant }))
    }

    fn make_mul(&mut self, factors: Terms, constant: f64) -> Operand {
        if constant == 0.0 {
            return Operand::Scalar(0.0);
        }
        if factors.len() == 1 && constant == 1.0 {
            return Operand::Node(factors[0]);
        }
        Operand::Node(self.push(Node::Mul { factors, constant }))
    }
}
