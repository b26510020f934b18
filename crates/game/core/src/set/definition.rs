//! Immutable per-set configuration record.

use std::collections::BTreeMap;

use super::{AttributeDescriptor, SetId};
use crate::error::DefinitionError;

/// Parses a threshold key such as `"2"` into a piece count.
///
/// Keys must be positive integers; surrounding whitespace is ignored.
pub fn parse_threshold(set: &SetId, key: &str) -> Result<u32, DefinitionError> {
    match key.trim().parse::<u32>() {
        Ok(count) if count > 0 => Ok(count),
        _ => Err(DefinitionError::InvalidThreshold {
            set: set.clone(),
            key: key.to_owned(),
        }),
    }
}

/// A configured armor set.
///
/// # Design
///
/// - `name` is the matching token: an item belongs to this set when one of
///   its lore lines contains the name.
/// - `pieces` maps a slot role (`helmet`, `boots`, ...) to a keyword. It is
///   descriptive metadata and only feeds [`total_pieces`](Self::total_pieces).
/// - `thresholds` are kept sorted, so tiers are always visited in ascending
///   piece-count order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SetDefinition {
    id: SetId,
    name: String,
    pieces: BTreeMap<String, String>,
    thresholds: BTreeMap<u32, Vec<AttributeDescriptor>>,
}

impl SetDefinition {
    /// Creates a builder for the set with the given identifier.
    pub fn builder(id: impl Into<SetId>) -> SetDefinitionBuilder {
        SetDefinitionBuilder::new(id.into())
    }

    pub fn id(&self) -> &SetId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Slot role → slot keyword.
    pub fn pieces(&self) -> &BTreeMap<String, String> {
        &self.pieces
    }

    /// Tiers in ascending piece-count order.
    pub fn thresholds(&self) -> impl Iterator<Item = (u32, &[AttributeDescriptor])> + '_ {
        self.thresholds
            .iter()
            .map(|(count, descriptors)| (*count, descriptors.as_slice()))
    }

    /// Number of pieces that make up the full set.
    ///
    /// This is the number of configured piece slots. A set configured without
    /// pieces falls back to its highest threshold so the marker never reads
    /// `(n/0)`.
    pub fn total_pieces(&self) -> u32 {
        if self.pieces.is_empty() {
            self.max_threshold().unwrap_or(0)
        } else {
            u32::try_from(self.pieces.len()).unwrap_or(u32::MAX)
        }
    }

    /// Highest configured threshold, if any.
    pub fn max_threshold(&self) -> Option<u32> {
        self.thresholds.keys().next_back().copied()
    }

    /// Descriptors earned with `count` pieces worn.
    ///
    /// Tiers are cumulative: every threshold at or below `count` contributes,
    /// lowest threshold first.
    pub fn earned(&self, count: u32) -> impl Iterator<Item = &AttributeDescriptor> + '_ {
        self.thresholds
            .range(..=count)
            .flat_map(|(_, descriptors)| descriptors.iter())
    }
}

/// Builder for constructing set definitions.
///
/// The display name defaults to the set id when not provided.
#[derive(Debug)]
pub struct SetDefinitionBuilder {
    id: SetId,
    name: Option<String>,
    pieces: BTreeMap<String, String>,
    thresholds: Vec<(u32, Vec<AttributeDescriptor>)>,
}

impl SetDefinitionBuilder {
    fn new(id: SetId) -> Self {
        Self {
            id,
            name: None,
            pieces: BTreeMap::new(),
            thresholds: Vec::new(),
        }
    }

    /// Sets the display name used for lore matching.
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Adds a slot role and its keyword.
    pub fn piece(mut self, role: impl Into<String>, keyword: impl Into<String>) -> Self {
        self.pieces.insert(role.into(), keyword.into());
        self
    }

    /// Adds a bonus tier unlocked at `count` pieces.
    pub fn threshold<I, D>(mut self, count: u32, descriptors: I) -> Self
    where
        I: IntoIterator<Item = D>,
        D: Into<AttributeDescriptor>,
    {
        self.thresholds
            .push((count, descriptors.into_iter().map(Into::into).collect()));
        self
    }

    /// Validates and builds the definition.
    ///
    /// # Errors
    ///
    /// - [`DefinitionError::EmptyName`] if the name is blank
    /// - [`DefinitionError::InvalidThreshold`] for a zero threshold
    /// - [`DefinitionError::DuplicateThreshold`] if a count is given twice
    pub fn build(self) -> Result<SetDefinition, DefinitionError> {
        let name = self.name.unwrap_or_else(|| self.id.as_str().to_owned());
        if name.trim().is_empty() {
            return Err(DefinitionError::EmptyName { set: self.id });
        }

        let mut thresholds = BTreeMap::new();
        for (count, descriptors) in self.thresholds {
            if count == 0 {
                return Err(DefinitionError::InvalidThreshold {
                    set: self.id,
                    key: count.to_string(),
                });
            }
            if thresholds.insert(count, descriptors).is_some() {
                return Err(DefinitionError::DuplicateThreshold {
                    set: self.id,
                    threshold: count,
                });
            }
        }

        Ok(SetDefinition {
            id: self.id,
            name,
            pieces: self.pieces,
            thresholds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dragon() -> SetDefinition {
        SetDefinition::builder("dragon")
            .name("Dragon Set")
            .piece("helmet", "Dragon Helm")
            .piece("chestplate", "Dragon Plate")
            .piece("leggings", "Dragon Greaves")
            .piece("boots", "Dragon Boots")
            .threshold(4, ["desc_B"])
            .threshold(2, ["desc_A"])
            .build()
            .expect("valid definition")
    }

    #[test]
    fn thresholds_are_sorted_ascending() {
        let def = dragon();
        let counts: Vec<u32> = def.thresholds().map(|(count, _)| count).collect();
        assert_eq!(counts, vec![2, 4]);
    }

    #[test]
    fn earned_is_cumulative() {
        let def = dragon();

        assert_eq!(def.earned(1).count(), 0);
        let at_three: Vec<&str> = def.earned(3).map(AttributeDescriptor::as_str).collect();
        assert_eq!(at_three, vec!["desc_A"]);
        let at_four: Vec<&str> = def.earned(4).map(AttributeDescriptor::as_str).collect();
        assert_eq!(at_four, vec!["desc_A", "desc_B"]);
    }

    #[test]
    fn total_pieces_counts_slots() {
        assert_eq!(dragon().total_pieces(), 4);
    }

    #[test]
    fn total_pieces_falls_back_to_highest_threshold() {
        let def = SetDefinition::builder("bare")
            .threshold(3, ["x"])
            .build()
            .unwrap();
        assert_eq!(def.total_pieces(), 3);
    }

    #[test]
    fn name_defaults_to_id() {
        let def = SetDefinition::builder("shadow").build().unwrap();
        assert_eq!(def.name(), "shadow");
    }

    #[test]
    fn blank_name_is_rejected() {
        let err = SetDefinition::builder("blank").name("  ").build().unwrap_err();
        assert_eq!(
            err,
            DefinitionError::EmptyName {
                set: SetId::new("blank")
            }
        );
    }

    #[test]
    fn zero_and_duplicate_thresholds_are_rejected() {
        let zero = SetDefinition::builder("z").threshold(0, ["x"]).build();
        assert!(matches!(zero, Err(DefinitionError::InvalidThreshold { .. })));

        let dup = SetDefinition::builder("d")
            .threshold(2, ["x"])
            .threshold(2, ["y"])
            .build();
        assert!(matches!(
            dup,
            Err(DefinitionError::DuplicateThreshold { threshold: 2, .. })
        ));
    }

    #[test]
    fn parse_threshold_accepts_positive_integers_only() {
        let set = SetId::new("dragon");
        assert_eq!(parse_threshold(&set, "2"), Ok(2));
        assert_eq!(parse_threshold(&set, " 4 "), Ok(4));
        assert!(parse_threshold(&set, "0").is_err());
        assert!(parse_threshold(&set, "-1").is_err());
        assert!(parse_threshold(&set, "two").is_err());
    }
}
