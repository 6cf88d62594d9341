//! Variable name interning.

use hashbrown::HashMap;

use crate::expr::SymbolId;

/// Maps variable names to dense ids, remembering declaration order.
#[derive(Clone, Debug, Default)]
pub struct SymbolTable {
    ids: HashMap<String, SymbolId>,
    names: Vec<String>,
}

impl SymbolTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Interns `name`, returning its id.
    ///
    /// A name seen before keeps the id it was first given.
    pub fn intern(&mut self, name: &str) -> SymbolId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }

        let index = self.names.len();
        assert!(index < SymbolId::MAX as usize, "Symbol table capacity exceeded");

        #[allow(clippy::cast_possible_truncation)]
        let id = index as SymbolId;
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    /// Looks up the id of an already interned name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<SymbolId> {
        self.ids.get(name).copied()
    }

    /// Returns the name behind `id`.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not produced by this table.
    #[must_use]
    pub fn name(&self, id: SymbolId) -> &str {
        &self.names[id as usize]
    }

    /// Number of distinct names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no name has been interned.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in the order they were first declared.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_table() {
        let mut table = SymbolTable::new();

        let x = table.intern("x");
        let y = table.intern("y");
        let x2 = table.intern("x");

        assert_eq!(x, 0);
        assert_eq!(y, 1);
        assert_eq!(x, x2);
        assert_eq!(table.name(y), "y");
        assert_eq!(table.get("z"), None);
        assert_eq!(table.iter().collect::<Vec<_>>(), ["x", "y"]);
    }
}
