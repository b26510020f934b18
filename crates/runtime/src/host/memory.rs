//! [`EquipmentHost`] backed by an in-memory map.
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{PoisonError, RwLock};

use armorset_core::ArmorContents;

use super::EquipmentHost;
use crate::api::PlayerId;

/// In-memory equipment store.
///
/// Counts armor write-backs so callers can observe that settled armor is not
/// rewritten.
#[derive(Debug, Default)]
pub struct InMemoryEquipment {
    players: RwLock<HashMap<PlayerId, ArmorContents>>,
    writes: AtomicUsize,
}

impl InMemoryEquipment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks a player online wearing `armor`.
    pub fn join(&self, player: PlayerId, armor: ArmorContents) {
        self.players
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(player, armor);
    }

    /// Marks a player offline.
    pub fn leave(&self, player: PlayerId) -> Option<ArmorContents> {
        self.players
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(&player)
    }

    /// Changes equipment without counting as a write-back (a player action).
    pub fn equip(&self, player: PlayerId, armor: ArmorContents) -> bool {
        let mut players = self.players.write().unwrap_or_else(PoisonError::into_inner);
        match players.get_mut(&player) {
            Some(slot) => {
                *slot = armor;
                true
            }
            None => false,
        }
    }

    /// Number of [`EquipmentHost::set_armor_contents`] calls so far.
    pub fn write_backs(&self) -> usize {
        self.writes.load(Ordering::Relaxed)
    }
}

impl EquipmentHost for InMemoryEquipment {
    fn armor_contents(&self, player: PlayerId) -> Option<ArmorContents> {
        self.players
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&player)
            .cloned()
    }

    fn set_armor_contents(&self, player: PlayerId, armor: ArmorContents) {
        self.writes.fetch_add(1, Ordering::Relaxed);
        if !self.equip(player, armor) {
            tracing::debug!(
                target: "armorset::service",
                %player,
                "Dropping armor write-back for offline player"
            );
        }
    }
}
