//! Node identities.
//!
//! A [`NodeId`] is a 32-bit index into the arena. Ids are handed out in
//! construction order, so every child id is smaller than the id of any node
//! built on top of it.

use std::fmt;

/// The identity of an expression node.
///
/// This is a lightweight 32-bit index that can be copied freely. Two ids are
/// equal if and only if they name the same construction; structurally equal
/// expressions built by separate calls get different ids.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    /// Creates an id from a raw index.
    ///
    /// This is primarily for internal use by the arena.
    #[must_use]
    pub const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Returns the raw index of this id.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.0
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.0)
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_id_ordering() {
        let a = NodeId::new(3);
        let b = NodeId::new(7);
        assert!(a < b);
        assert_eq!(a, NodeId::new(3));
        assert_eq!(format!("{a:?}"), "Node(3)");
    }

    #[test]
    fn test_id_size() {
        assert_eq!(std::mem::size_of::<NodeId>(), 4);
    }
}
