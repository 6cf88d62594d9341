//! Expression node types.
//!
//! This module defines the node variants stored in the arena and the
//! [`Operand`] sum type accepted and returned by every construction call.

use smallvec::SmallVec;

use sextant_interval::Interval;

use crate::handle::NodeId;

/// Unique identifier for a variable name.
pub type SymbolId = u32;

/// Operand list of a sum or product.
///
/// Most chains are short, so up to four ids are stored inline.
pub type Terms = SmallVec<[NodeId; 4]>;

/// An expression node stored in the arena.
///
/// Nodes are immutable once pushed. Every traversal matches on this enum
/// exhaustively, so adding a variant forces every evaluation engine to
/// handle it.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    // === Leaves ===
    /// A named input, optionally carrying a declared bound.
    Variable {
        /// The interned name.
        symbol: SymbolId,
        /// Bound used by interval evaluation.
        bounds: Option<Interval>,
    },

    // === Associative chains ===
    /// `constant + terms[0] + terms[1] + ...`
    ///
    /// Invariant: `terms` is non-empty.
    Add {
        /// The node operands.
        terms: Terms,
        /// Accumulated scalar summand.
        constant: f64,
    },

    /// `constant * factors[0] * factors[1] * ...`
    ///
    /// Invariant: `factors` is non-empty.
    Mul {
        /// The node operands.
        factors: Terms,
        /// Accumulated scalar factor.
        constant: f64,
    },

    /// `base^exponent` for a real scalar exponent.
    Pow {
        /// The base node.
        base: NodeId,
        /// The exponent.
        exponent: f64,
    },

    // === Functions ===
    /// `sin(arg)`
    Sin(NodeId),
    /// `cos(arg)`
    Cos(NodeId),
    /// `acos(arg)`
    Acos(NodeId),
}

impl Node {
    /// Returns true if this node has no operands.
    #[must_use]
    pub fn is_leaf(&self) -> bool {
        matches!(self, Node::Variable { .. })
    }

    /// Returns the operands of this node.
    #[must_use]
    pub fn children(&self) -> &[NodeId] {
        match self {
            Node::Variable { .. } => &[],
            Node::Add { terms, .. } => terms,
            Node::Mul { factors, .. } => factors,
            Node::Pow { base: arg, .. } | Node::Sin(arg) | Node::Cos(arg) | Node::Acos(arg) => {
                std::slice::from_ref(arg)
            }
        }
    }
}

/// Either a plain number or a node in the arena.
///
/// Construction calls take `impl Into<Operand>` so numbers and nodes mix
/// freely, and return an `Operand` because simplification may collapse a
/// result to a number (for example `x * 0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    /// A real constant.
    Scalar(f64),
    /// A node in the arena.
    Node(NodeId),
}

impl Operand {
    /// Returns the scalar value, if this is a constant.
    #[must_use]
    pub fn as_scalar(self) -> Option<f64> {
        match self {
            Operand::Scalar(x) => Some(x),
            Operand::Node(_) => None,
        }
    }

    /// Returns the node id, if this is a node.
    #[must_use]
    pub fn as_node(self) -> Option<NodeId> {
        match self {
            Operand::Node(id) => Some(id),
            Operand::Scalar(_) => None,
        }
    }

    /// Returns true if this is the constant zero.
    #[must_use]
    pub fn is_zero(self) -> bool {
        self == Operand::Scalar(0.0)
    }

    /// Returns true if this is the constant one.
    #[must_use]
    pub fn is_one(self) -> bool {
        self == Operand::Scalar(1.0)
    }
}

impl From<f64> for Operand {
    fn from(x: f64) -> Self {
        Operand::Scalar(x)
    }
}

impl From<i32> for Operand {
    fn from(x: i32) -> Self {
        Operand::Scalar(f64::from(x))
    }
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<&Operand> for Operand {
    fn from(op: &Operand) -> Self {
        *op
    }
}
