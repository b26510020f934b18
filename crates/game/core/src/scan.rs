//! Membership scanning: which set does each worn item belong to?
//!
//! An item belongs to a set when any of its lore lines contains the set's
//! display name. Lines are compared after normalizing the server color-code
//! marker (`§`) to the plain `&` form that set files are written in.
//!
//! Definitions are tried in registry order and the first match wins.

use std::borrow::Cow;
use std::collections::BTreeMap;

use crate::equipment::ArmorContents;
use crate::registry::SetRegistry;
use crate::set::{SetDefinition, SetId};

/// Color-code marker used in live item text.
pub const COLOR_CODE_MARKER: char = '§';

/// Color-code marker used in configuration files.
pub const COLOR_CODE_PLAIN: char = '&';

/// Rewrites live color codes into their configuration form.
pub fn normalize_color_codes(line: &str) -> Cow<'_, str> {
    if line.contains(COLOR_CODE_MARKER) {
        Cow::Owned(line.replace(COLOR_CODE_MARKER, &COLOR_CODE_PLAIN.to_string()))
    } else {
        Cow::Borrowed(line)
    }
}

/// Returns true if the (normalized) line contains the set name.
pub fn line_mentions(line: &str, name: &str) -> bool {
    normalize_color_codes(line).contains(name)
}

/// Finds the set whose name appears in the given lore, if any.
pub fn identify_set<'r>(registry: &'r SetRegistry, lore: &[String]) -> Option<&'r SetDefinition> {
    registry
        .iter()
        .find(|definition| lore.iter().any(|line| line_mentions(line, definition.name())))
}

/// Per-call snapshot of worn piece counts keyed by set id.
///
/// Sets with no worn pieces are absent rather than stored as zero.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PieceCounts {
    counts: BTreeMap<SetId, u32>,
}

impl PieceCounts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one more worn piece of `set`.
    pub fn increment(&mut self, set: SetId) {
        *self.counts.entry(set).or_insert(0) += 1;
    }

    /// Worn pieces of `set`, zero if none.
    pub fn get(&self, set: &str) -> u32 {
        self.counts.get(set).copied().unwrap_or(0)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&SetId, u32)> + '_ {
        self.counts.iter().map(|(id, count)| (id, *count))
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl FromIterator<(SetId, u32)> for PieceCounts {
    fn from_iter<T: IntoIterator<Item = (SetId, u32)>>(iter: T) -> Self {
        let counts = iter
            .into_iter()
            .filter(|(_, count)| *count > 0)
            .collect();
        Self { counts }
    }
}

/// Counts worn pieces per set.
///
/// Empty slots, items without lore, and items matching no set are skipped.
pub fn scan_equipment(registry: &SetRegistry, armor: &ArmorContents) -> PieceCounts {
    let mut counts = PieceCounts::new();
    for (_, item) in armor.iter() {
        if !item.has_lore() {
            continue;
        }
        if let Some(definition) = identify_set(registry, &item.lore) {
            counts.increment(definition.id().clone());
        }
    }
    counts
}
