//! Error types for set definitions and the registry.
//!
//! Both kinds of error are configuration problems scoped to a single set.
//! Loaders report them and move on; nothing in the resolution path returns
//! an error.

use crate::set::SetId;

/// A set entry that cannot be turned into a [`SetDefinition`](crate::SetDefinition).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum DefinitionError {
    /// The display name is empty, so it would match every lore line.
    #[error("set `{set}` has an empty display name")]
    EmptyName { set: SetId },

    /// A threshold key is not a positive integer.
    #[error("set `{set}` has malformed threshold key `{key}` (expected a positive integer)")]
    InvalidThreshold { set: SetId, key: String },

    /// Two threshold keys resolve to the same piece count (e.g. `"2"` and `"02"`).
    #[error("set `{set}` declares threshold {threshold} more than once")]
    DuplicateThreshold { set: SetId, threshold: u32 },
}

impl DefinitionError {
    /// Returns the set the error belongs to.
    pub fn set(&self) -> &SetId {
        match self {
            Self::EmptyName { set }
            | Self::InvalidThreshold { set, .. }
            | Self::DuplicateThreshold { set, .. } => set,
        }
    }
}

/// A definition rejected by [`SetRegistry::insert`](crate::SetRegistry::insert).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The display name equals, contains, or is contained in another set's
    /// name. Matching is substring based, so such a pair is ambiguous.
    #[error("set `{set}` name `{name}` overlaps with set `{other}` name `{other_name}`")]
    AmbiguousName {
        set: SetId,
        name: String,
        other: SetId,
        other_name: String,
    },
}
