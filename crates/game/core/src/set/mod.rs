//! Set definitions: identity, display name, slot metadata and bonus tiers.

mod definition;
mod descriptor;

pub use definition::{SetDefinition, SetDefinitionBuilder, parse_threshold};
pub use descriptor::AttributeDescriptor;

use core::borrow::Borrow;
use core::fmt;

/// Stable identifier of a configured set (the top-level key in a set file).
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SetId(String);

impl SetId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for SetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for SetId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for SetId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Borrow<str> for SetId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn set_id_lookup_by_str() {
        let mut map = HashMap::new();
        map.insert(SetId::new("dragon"), 2);

        assert_eq!(map.get("dragon"), Some(&2));
        assert_eq!(SetId::from("dragon").to_string(), "dragon");
    }
}
