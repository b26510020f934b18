//! Lore progress synchronization.
//!
//! Each worn set piece shows its set's live progress on its identity line
//! (the first lore line containing the set name), e.g.
//! `"§6Dragon Set (2/4)"`. Synchronization rewrites that trailing marker in
//! place and only reports a change when the text actually differs, so
//! repeated triggers never cause redundant write-backs.

use core::fmt;

use crate::equipment::{ArmorContents, ArmorSlot, WornItem};
use crate::registry::SetRegistry;
use crate::scan::{PieceCounts, identify_set, line_mentions};
use crate::set::SetDefinition;

/// The `(current/total)` marker appended to an identity line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgressMarker {
    pub current: u32,
    pub total: u32,
}

impl ProgressMarker {
    pub const fn new(current: u32, total: u32) -> Self {
        Self { current, total }
    }
}

impl fmt::Display for ProgressMarker {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}/{})", self.current, self.total)
    }
}

/// Renders an identity line carrying `marker`.
///
/// If the line already ends in a parenthesized group that comes after the
/// set name, everything from its `(` onward is replaced. Otherwise the marker
/// is appended after a single space.
pub fn render_identity_line(line: &str, name: &str, marker: ProgressMarker) -> String {
    if let Some(open) = line.rfind('(') {
        let (prefix, group) = line.split_at(open);
        // The name must survive the cut, otherwise a name containing
        // parentheses would be eaten.
        if group.trim_end().ends_with(')') && line_mentions(prefix, name) {
            return format!("{prefix}{marker}");
        }
    }
    format!("{line} {marker}")
}

/// Updates the identity line of one item.
///
/// Returns true only if the lore changed. Items whose lore does not mention
/// the set are left alone.
pub fn sync_one(item: &mut WornItem, definition: &SetDefinition, current: u32, total: u32) -> bool {
    let name = definition.name();
    let Some(line) = item.lore.iter_mut().find(|line| line_mentions(line, name)) else {
        return false;
    };

    let rendered = render_identity_line(line, name, ProgressMarker::new(current, total));
    if *line == rendered {
        return false;
    }

    *line = rendered;
    true
}

/// Outcome of [`sync_all`]: which slots had their lore rewritten.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoreSyncReport {
    pub changed: Vec<ArmorSlot>,
}

impl LoreSyncReport {
    /// True if the armor must be written back to the host.
    pub fn needs_write_back(&self) -> bool {
        !self.changed.is_empty()
    }
}

/// Synchronizes every worn set piece against the piece counts.
///
/// Mutates `armor` in place. The caller writes the whole array back once
/// when [`LoreSyncReport::needs_write_back`] is true.
pub fn sync_all(armor: &mut ArmorContents, counts: &PieceCounts, registry: &SetRegistry) -> LoreSyncReport {
    let mut report = LoreSyncReport::default();

    for (slot, item) in armor.iter_mut() {
        if !item.has_lore() {
            continue;
        }
        let Some(definition) = identify_set(registry, &item.lore) else {
            continue;
        };

        let current = counts.get(definition.id().as_str());
        if sync_one(item, definition, current, definition.total_pieces()) {
            report.changed.push(slot);
        }
    }

    report
}
