use std::collections::HashSet;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding {
    pub name: String,
    pub value: i64,
}

/// Marks how many bindings existed at some point, see [`Environment::rollback`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Checkpoint(usize);

/// Flat symbol table. Bindings are only ever appended; a later `define` of the
/// same name shadows the earlier one.
#[derive(Default, Debug, Clone, PartialEq)]
pub struct Environment {
    store: Vec<Binding>,
}

impl Environment {
    pub fn new() -> Self {
        Self {
            store: vec![]
        }
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.store.iter()
            .rev()
            .find(|binding| binding.name == name)
            .map(|binding| binding.value)
    }

    pub fn define(&mut self, name: String, value: i64) {
        self.store.push(Binding { name, value });
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint(self.store.len())
    }

    /// Drops every binding added after `checkpoint` was taken.
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.store.truncate(checkpoint.0);
    }

    /// Visible bindings, most recently defined first.
    pub fn iter(&self) -> impl Iterator<Item = &Binding> {
        let mut seen = HashSet::new();

        self.store.iter()
            .rev()
            .filter(move |binding| seen.insert(binding.name.clone()))
    }

    /// Number of distinct names bound.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
