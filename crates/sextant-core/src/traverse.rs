//! Memoized post-order traversal over the node DAG.
//!
//! Every evaluation engine is a fold over the graph: a node's result is
//! combined from its operands' results. The driver here walks the graph with
//! an explicit work stack, so graph depth never turns into native recursion
//! depth, and records each result in a per-call [`Memo`] keyed by
//! [`NodeId`]. A node reached a second time through another parent is served
//! from the memo.

use std::ops::Index;

use hashbrown::HashMap;

use crate::arena::ExprArena;
use crate::expr::Node;
use crate::handle::NodeId;

/// Results of one traversal, keyed by node identity.
#[derive(Debug, Clone)]
pub struct Memo<T> {
    entries: HashMap<NodeId, T>,
    computations: HashMap<NodeId, u32>,
    hits: usize,
}

impl<T> Default for Memo<T> {
    fn default() -> Self {
        Self {
            entries: HashMap::new(),
            computations: HashMap::new(),
            hits: 0,
        }
    }
}

impl<T> Memo<T> {
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the memoized result for `id`.
    #[must_use]
    pub fn get(&self, id: NodeId) -> Option<&T> {
        self.entries.get(&id)
    }

    /// How many times the result of `id` was computed.
    ///
    /// Within a single traversal this is at most one.
    #[must_use]
    pub fn computations(&self, id: NodeId) -> u32 {
        self.computations.get(&id).copied().unwrap_or(0)
    }

    /// Number of lookups answered from the memo.
    #[must_use]
    pub fn hits(&self) -> usize {
        self.hits
    }

    /// Number of distinct nodes evaluated.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing has been evaluated.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn insert(&mut self, id: NodeId, value: T) {
        *self.computations.entry(id).or_insert(0) += 1;
        self.entries.insert(id, value);
    }
}

impl<T> Index<NodeId> for Memo<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `id` has not been evaluated yet.
    fn index(&self, id: NodeId) -> &T {
        &self.entries[&id]
    }
}

enum Visit {
    /// Schedule the operands of the node.
    Enter(NodeId),
    /// All operands are in the memo; combine them.
    Exit(NodeId),
}

/// Evaluates `root` bottom-up, combining each node exactly once.
///
/// `combine` receives a node whose operands are all present in the memo and
/// returns the node's own result. The first error aborts the traversal.
pub(crate) fn fold<T, E, F>(
    arena: &ExprArena,
    root: NodeId,
    memo: &mut Memo<T>,
    mut combine: F,
) -> Result<(), E>
where
    F: FnMut(&Node, &Memo<T>) -> Result<T, E>,
{
    let mut stack = vec![Visit::Enter(root)];

    while let Some(visit) = stack.pop() {
        match visit {
            Visit::Enter(id) => {
                if memo.entries.contains_key(&id) {
                    memo.hits += 1;
                    continue;
                }
                stack.push(Visit::Exit(id));
                // Reverse so operands are evaluated left to right.
                stack.extend(arena.get(id).children().iter().rev().map(|&c| Visit::Enter(c)));
            }
            Visit::Exit(id) => {
                let value = combine(arena.get(id), memo)?;
                memo.insert(id, value);
            }
        }
    }

    Ok(())
}
