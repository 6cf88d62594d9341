//! Human-readable rendering of expressions.

use std::fmt;

use crate::arena::ExprArena;
use crate::expr::{Node, Operand, SymbolId};
use crate::handle::NodeId;

/// Displays an operand in infix notation, e.g. `(x + sin(y) + 2)`.
///
/// Created by [`ExprArena::display`].
pub struct Display<'a> {
    arena: &'a ExprArena,
    operand: Operand,
}

impl ExprArena {
    /// Returns a value that formats `operand` as infix text.
    #[must_use]
    pub fn display(&self, operand: impl Into<Operand>) -> Display<'_> {
        Display {
            arena: self,
            operand: operand.into(),
        }
    }
}

/// One pending piece of output.
enum Frame {
    Node(NodeId),
    Name(SymbolId),
    Text(&'static str),
    Number(f64),
}

impl Display<'_> {
    /// Renders `root` from an explicit stack, so nesting depth is bounded by
    /// heap rather than by the native stack.
    fn render(&self, f: &mut fmt::Formatter<'_>, root: NodeId) -> fmt::Result {
        let mut stack = vec![Frame::Node(root)];
        let mut pieces = Vec::new();

        while let Some(frame) = stack.pop() {
            match frame {
                Frame::Node(id) => {
                    expand(self.arena.get(id), &mut pieces);
                    // Pieces are in output order; the stack pops from the end.
                    stack.extend(pieces.drain(..).rev());
                }
                Frame::Name(symbol) => f.write_str(self.arena.symbol_name(symbol))?,
                Frame::Text(text) => f.write_str(text)?,
                Frame::Number(x) => write!(f, "{x}")?,
            }
        }
        Ok(())
    }
}

/// Appends the output pieces of one node, operands left as `Frame::Node`.
fn expand(node: &Node, out: &mut Vec<Frame>) {
    match node {
        Node::Variable { symbol, .. } => out.push(Frame::Name(*symbol)),
        Node::Add { terms, constant } => {
            out.push(Frame::Text("("));
            joined(terms, " + ", out);
            if *constant != 0.0 {
                out.push(Frame::Text(" + "));
                out.push(Frame::Number(*constant));
            }
            out.push(Frame::Text(")"));
        }
        Node::Mul { factors, constant } => {
            out.push(Frame::Text("("));
            if *constant != 1.0 {
                out.push(Frame::Number(*constant));
                out.push(Frame::Text("*"));
            }
            joined(factors, "*", out);
            out.push(Frame::Text(")"));
        }
        Node::Pow { base, exponent } => out.extend([
            Frame::Text("("),
            Frame::Node(*base),
            Frame::Text("^"),
            Frame::Number(*exponent),
            Frame::Text(")"),
        ]),
        Node::Sin(arg) => call("sin(", *arg, out),
        Node::Cos(arg) => call("cos(", *arg, out),
        Node::Acos(arg) => call("acos(", *arg, out),
    }
}

fn joined(ids: &[NodeId], sep: &'static str, out: &mut Vec<Frame>) {
    for (i, &id) in ids.iter().enumerate() {
        if i > 0 {
            out.push(Frame::Text(sep));
        }
        out.push(Frame::Node(id));
    }
}

fn call(open: &'static str, arg: NodeId, out: &mut Vec<Frame>) {
    out.extend([Frame::Text(open), Frame::Node(arg), Frame::Text(")")]);
}

impl fmt::Display for Display<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.operand {
            Operand::Scalar(x) => write!(f, "{x}"),
            Operand::Node(id) => self.render(f, id),
        }
    }
}
