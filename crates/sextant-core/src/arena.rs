//! Arena storage for expression nodes.
//!
//! All nodes live contiguously in a `Vec` and refer to their operands by
//! [`NodeId`]. The arena is append-only: a node can only be built from nodes
//! that already exist, so the graph is acyclic by construction and shared
//! operands trivially outlive every parent.

use sextant_interval::Interval;

use crate::expr::{Node, SymbolId};
use crate::handle::NodeId;
use crate::intern::SymbolTable;

/// The arena owning every node of one or more expressions.
#[derive(Debug, Default, Clone)]
pub struct ExprArena {
    /// Storage for all expression nodes, indexed by `NodeId`.
    nodes: Vec<Node>,
    /// Variable names in declaration order.
    symbols: SymbolTable,
}

impl ExprArena {
    /// Creates a new empty arena.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an arena with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(capacity),
            symbols: SymbolTable::new(),
        }
    }

    /// Appends a node, returning its fresh id.
    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let index = self.nodes.len();
        assert!(index < u32::MAX as usize, "Arena capacity exceeded");
        debug_assert!(node.children().iter().all(|c| (c.index() as usize) < index));

        #[allow(clippy::cast_possible_truncation)]
        let id = NodeId::new(index as u32);
        self.nodes.push(node);
        id
    }

    /// Gets the node with the given id.
    ///
    /// # Panics
    ///
    /// Panics if the id does not belong to this arena.
    #[must_use]
    pub fn get(&self, id: NodeId) -> &Node {
        &self.nodes[id.index() as usize]
    }

    /// Returns the number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the arena is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Returns the name behind a symbol id.
    ///
    /// # Panics
    ///
    /// Panics if the symbol was not interned by this arena.
    #[must_use]
    pub fn symbol_name(&self, id: SymbolId) -> &str {
        self.symbols.name(id)
    }

    /// Distinct variable names in the order they were first declared.
    pub fn variable_names(&self) -> impl Iterator<Item = &str> {
        self.symbols.iter()
    }

    /// Returns the name of a variable node, or `None` for compound nodes.
    #[must_use]
    pub fn variable_name(&self, id: NodeId) -> Option<&str> {
        match self.get(id) {
            Node::Variable { symbol, .. } => Some(self.symbol_name(*symbol)),
            _ => None,
        }
    }

    // === Variable factories ===

    /// Declares a variable, optionally bounded for interval evaluation.
    ///
    /// Every call creates a new node. Declaring the same name twice yields
    /// two leaves that read the same binding.
    pub fn variable(&mut self, name: &str, bounds: Option<Interval>) -> NodeId {
        let symbol = self.symbols.intern(name);
        self.push(Node::Variable { symbol, bounds })
    }

    /// Declares one variable per comma-separated name, e.g. `"a, b, c"`.
    ///
    /// # Panics
    ///
    /// Panics if `bounds` is given with a length different from the number
    /// of names.
    pub fn variables(&mut self, names: &str, bounds: Option<&[Interval]>) -> Vec<NodeId> {
        let names: Vec<&str> = names
            .split(',')
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .collect();
        if let Some(bounds) = bounds {
            assert_eq!(bounds.len(), names.len(), "one bound per variable");
        }
        names
            .iter()
            .enumerate()
            .map(|(i, name)| self.variable(name, bounds.map(|b| b[i])))
            .collect()
    }

    /// Declares the group `name0, name1, ..., name{n-1}`, all sharing one
    /// optional bound.
    pub fn variable_group(
        &mut self,
        name: &str,
        n: usize,
        bounds: Option<Interval>,
    ) -> Vec<NodeId> {
        (0..n)
            .map(|i| self.variable(&format!("{name}{i}"), bounds))
            .collect()
    }
}
