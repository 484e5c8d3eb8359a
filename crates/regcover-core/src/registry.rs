//! Name interning for one entity class.

use std::collections::HashMap;

/// Bidirectional mapping between entity names and dense integer ids.
///
/// Ids are handed out in first-seen order and always form `0..len()`.
///
/// # Example
///
/// ```
/// use regcover_core::EntityRegistry;
///
/// let mut regulators = EntityRegistry::new();
/// assert_eq!(regulators.intern("hsa-miR-21"), 0);
/// assert_eq!(regulators.intern("hsa-let-7a"), 1);
/// assert_eq!(regulators.intern("hsa-miR-21"), 0);
/// assert_eq!(regulators.name(1), Some("hsa-let-7a"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct EntityRegistry {
    ids: HashMap<String, usize>,
    names: Vec<String>,
}

impl EntityRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the id for `name`, registering it if it has not been seen.
    pub fn intern(&mut self, name: &str) -> usize {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = self.names.len();
        self.ids.insert(name.to_owned(), id);
        self.names.push(name.to_owned());
        id
    }

    /// Looks up the id of an already registered name.
    pub fn id(&self, name: &str) -> Option<usize> {
        self.ids.get(name).copied()
    }

    /// Returns the name registered under `id`.
    pub fn name(&self, id: usize) -> Option<&str> {
        self.names.get(id).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates names in id order.
    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.names.iter().map(String::as_str)
    }
}
