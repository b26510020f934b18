//! In-memory registry of loaded set definitions.

use indexmap::IndexMap;

use crate::error::RegistryError;
use crate::set::{SetDefinition, SetId};

/// All loaded set definitions keyed by id, in insertion order.
///
/// Insertion order is the tie-break for lore matching: when two names could
/// both match a line, the set inserted first wins. [`insert`](Self::insert)
/// rejects overlapping names up front, so in a registry built through it the
/// tie-break never decides anything.
///
/// A registry is never patched in place by a reload. Loaders build a fresh
/// one and the runtime swaps it in whole.
#[derive(Clone, Debug, Default)]
pub struct SetRegistry {
    sets: IndexMap<SetId, SetDefinition>,
}

impl SetRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a definition, replacing any existing set with the same id.
    ///
    /// Returns the replaced definition. A replaced set keeps its original
    /// position in the iteration order.
    ///
    /// # Errors
    ///
    /// [`RegistryError::AmbiguousName`] if the name equals, contains, or is
    /// contained in the name of another set.
    pub fn insert(
        &mut self,
        definition: SetDefinition,
    ) -> Result<Option<SetDefinition>, RegistryError> {
        if let Some(other) = self.overlapping(&definition) {
            return Err(RegistryError::AmbiguousName {
                set: definition.id().clone(),
                name: definition.name().to_owned(),
                other: other.id().clone(),
                other_name: other.name().to_owned(),
            });
        }

        Ok(self.sets.insert(definition.id().clone(), definition))
    }

    /// Removes a set, preserving the order of the remaining ones.
    pub fn remove(&mut self, id: &str) -> Option<SetDefinition> {
        self.sets.shift_remove(id)
    }

    pub fn get(&self, id: &str) -> Option<&SetDefinition> {
        self.sets.get(id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.sets.contains_key(id)
    }

    /// Definitions in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &SetDefinition> + '_ {
        self.sets.values()
    }

    pub fn ids(&self) -> impl Iterator<Item = &SetId> + '_ {
        self.sets.keys()
    }

    pub fn len(&self) -> usize {
        self.sets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sets.is_empty()
    }

    fn overlapping(&self, candidate: &SetDefinition) -> Option<&SetDefinition> {
        let name = candidate.name();
        self.sets.values().find(|existing| {
            existing.id() != candidate.id()
                && (existing.name().contains(name) || name.contains(existing.name()))
        })
    }
}
