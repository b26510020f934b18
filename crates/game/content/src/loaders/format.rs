//! On-disk set format.
//!
//! ```yaml
//! dragon:
//!   name: "&6Dragon's embrace"   # defaults to the set id
//!   pieces:
//!     helmet: "Dragon Helm"       # descriptive only
//!   attributes:
//!     "2": ["Health: +40"]
//!     "4": ["Damage: +15%"]
//! ```

use std::collections::BTreeMap;

use armorset_core::set::parse_threshold;
use armorset_core::{DefinitionError, SetDefinition, SetId};
use serde::Deserialize;
use serde_yaml::{Mapping, Value};

use super::EntryError;

/// Configuration section of one set entry.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SetSection {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default)]
    pub pieces: BTreeMap<String, String>,

    /// Threshold key → descriptor list. Kept as a raw mapping so quoted
    /// (`"2"`) and bare (`2`) keys are both accepted.
    #[serde(default)]
    pub attributes: Mapping,
}

impl SetSection {
    /// Reads the configuration section of `id`.
    ///
    /// A section that is not a mapping (e.g. `dragon: 5`) counts as missing.
    pub fn from_value(id: &SetId, value: Value) -> Result<Self, EntryError> {
        if !value.is_mapping() {
            return Err(EntryError::MissingSection(id.clone()));
        }
        serde_yaml::from_value(value).map_err(|source| EntryError::Malformed {
            set: id.clone(),
            source,
        })
    }

    /// Converts the section into a validated definition.
    pub fn into_definition(self, id: SetId) -> Result<SetDefinition, EntryError> {
        let mut builder = SetDefinition::builder(id.clone());
        if let Some(name) = self.name {
            builder = builder.name(name);
        }
        for (role, keyword) in self.pieces {
            builder = builder.piece(role, keyword);
        }

        for (key, descriptors) in self.attributes {
            let key = scalar_key(&key).ok_or_else(|| DefinitionError::InvalidThreshold {
                set: id.clone(),
                key: format!("{key:?}"),
            })?;
            let count = parse_threshold(&id, &key)?;
            let descriptors: Vec<String> =
                serde_yaml::from_value(descriptors).map_err(|source| EntryError::Malformed {
                    set: id.clone(),
                    source,
                })?;
            builder = builder.threshold(count, descriptors);
        }

        Ok(builder.build()?)
    }
}

pub(crate) fn scalar_key(value: &Value) -> Option<String> {
    match value {
        Value::String(key) => Some(key.clone()),
        Value::Number(key) => Some(key.to_string()),
        _ => None,
    }
}
