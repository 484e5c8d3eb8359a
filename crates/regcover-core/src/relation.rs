//! Regulator -> target relation storage.
//!
//! A [`RelationStore`] starts open: mappings may be added in any order and
//! duplicates are kept. [`RelationStore::finalize`] sorts the pairs by
//! `(target, regulator)` and drops exact duplicates. Model construction relies
//! on that ordering, so it only ever reads finalized stores.

use std::slice;

use crate::error::{RegcoverError, Result};
use crate::registry::EntityRegistry;

/// One directed mapping from a regulator to a target, by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Relation {
    pub regulator: usize,
    pub target: usize,
}

impl Relation {
    pub fn new(regulator: usize, target: usize) -> Self {
        Self { regulator, target }
    }
}

/// Owns the regulator and target registries and the mappings between them.
#[derive(Debug, Clone, Default)]
pub struct RelationStore {
    regulators: EntityRegistry,
    targets: EntityRegistry,
    relations: Vec<Relation>,
    finalized: bool,
}

impl RelationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a mapping between two named entities, interning both names.
    ///
    /// # Errors
    ///
    /// Returns [`RegcoverError::InvalidState`] once the store is finalized.
    pub fn add(&mut self, regulator: &str, target: &str) -> Result<Relation> {
        if self.finalized {
            return Err(RegcoverError::InvalidState(format!(
                "cannot add mapping {regulator} -> {target} to a finalized relation store"
            )));
        }
        let relation = Relation::new(
            self.regulators.intern(regulator),
            self.targets.intern(target),
        );
        self.relations.push(relation);
        Ok(relation)
    }

    /// Sorts mappings by `(target, regulator)` and removes duplicates.
    ///
    /// Subsequent calls are no-ops.
    pub fn finalize(&mut self) {
        if self.finalized {
            return;
        }
        self.relations
            .sort_unstable_by_key(|relation| (relation.target, relation.regulator));
        self.relations.dedup();
        self.finalized = true;
    }

    pub fn is_finalized(&self) -> bool {
        self.finalized
    }

    pub fn num_regulators(&self) -> usize {
        self.regulators.len()
    }

    pub fn num_targets(&self) -> usize {
        self.targets.len()
    }

    /// Number of stored mappings; duplicates count until the store is finalized.
    pub fn num_mappings(&self) -> usize {
        self.relations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.relations.is_empty()
    }

    pub fn regulators(&self) -> &EntityRegistry {
        &self.regulators
    }

    pub fn targets(&self) -> &EntityRegistry {
        &self.targets
    }

    pub fn regulator(&self, id: usize) -> Option<&str> {
        self.regulators.name(id)
    }

    pub fn target(&self, id: usize) -> Option<&str> {
        self.targets.name(id)
    }

    /// Iterates mappings in storage order (sorted by target once finalized).
    pub fn iter(&self) -> slice::Iter<'_, Relation> {
        self.relations.iter()
    }

    pub fn as_slice(&self) -> &[Relation] {
        &self.relations
    }
}

impl<'a> IntoIterator for &'a RelationStore {
    type Item = &'a Relation;
    type IntoIter = slice::Iter<'a, Relation>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests;
