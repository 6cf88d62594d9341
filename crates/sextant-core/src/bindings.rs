//! Variable bindings and gradient slot assignment.
//!
//! A [`Bindings`] maps leaf names to numbers. A [`SlotMap`] decides which
//! gradient component each leaf name writes to. By default every newly bound
//! name takes the next slot, so slot order is binding order; grouped input
//! (`x` with `[1.0, 2.0]`) expands to the leaves `x0`, `x1` in sequence.

use hashbrown::HashMap;

/// Numeric values for variable names.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Bindings {
    values: HashMap<String, f64>,
    /// Names in the order they were first bound.
    order: Vec<String>,
}

impl Bindings {
    /// Creates an empty set of bindings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `name` to `value`, replacing any earlier value.
    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        let name = name.into();
        if let Some(slot) = self.values.get_mut(&name) {
            *slot = value;
            return;
        }
        self.order.push(name.clone());
        self.values.insert(name, value);
    }

    /// Builder form of [`Bindings::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: f64) -> Self {
        self.set(name, value);
        self
    }

    /// Binds `name0, name1, ...` to the successive entries of `values`.
    pub fn set_group(&mut self, name: &str, values: &[f64]) {
        for (i, &v) in values.iter().enumerate() {
            self.set(format!("{name}{i}"), v);
        }
    }

    /// Builder form of [`Bindings::set_group`].
    #[must_use]
    pub fn with_group(mut self, name: &str, values: &[f64]) -> Self {
        self.set_group(name, values);
        self
    }

    /// Bindings for a single group, the common case for optimizers.
    #[must_use]
    pub fn from_group(name: &str, values: &[f64]) -> Self {
        Self::new().with_group(name, values)
    }

    /// Returns the value bound to `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    /// Number of bound names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Returns true if nothing is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Bound names in binding order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// The default slot map: one slot per bound name, in binding order.
    #[must_use]
    pub fn slots(&self) -> SlotMap {
        SlotMap::from_names(self.names())
    }
}

/// Assignment of leaf names to gradient components.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SlotMap {
    slots: HashMap<String, usize>,
    dimension: usize,
}

impl SlotMap {
    /// Creates an empty map for gradients of length `dimension`.
    #[must_use]
    pub fn new(dimension: usize) -> Self {
        Self {
            slots: HashMap::new(),
            dimension,
        }
    }

    /// Assigns slots `0, 1, 2, ...` to the given names in order.
    ///
    /// Repeated names keep their first slot.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut map = Self::new(0);
        for name in names {
            let name = name.as_ref();
            if !map.slots.contains_key(name) {
                map.slots.insert(name.to_owned(), map.dimension);
                map.dimension += 1;
            }
        }
        map
    }

    /// Routes the derivative with respect to `name` into component `slot`.
    ///
    /// # Panics
    ///
    /// Panics if `slot` is not below the gradient dimension.
    pub fn assign(&mut self, name: impl Into<String>, slot: usize) {
        assert!(
            slot < self.dimension,
            "slot {slot} out of range for gradient dimension {}",
            self.dimension
        );
        self.slots.insert(name.into(), slot);
    }

    /// Builder form of [`SlotMap::assign`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, slot: usize) -> Self {
        self.assign(name, slot);
        self
    }

    /// Returns the slot of `name`, if it is tracked.
    #[must_use]
    pub fn slot(&self, name: &str) -> Option<usize> {
        self.slots.get(name).copied()
    }

    /// Length of the gradient vectors this map produces.
    #[must_use]
    pub fn dimension(&self) -> usize {
        self.dimension
    }
}
