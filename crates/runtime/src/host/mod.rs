//! Seams to the game server.
//!
//! The runtime never talks to a server API directly. It reads and writes the
//! four armor slots through [`EquipmentHost`] and hands earned descriptors to
//! an [`AttributeCompiler`], which owns their syntax.
mod memory;

pub use memory::InMemoryEquipment;

use std::sync::Arc;

use armorset_core::{ArmorContents, AttributeDescriptor};

use crate::api::PlayerId;

/// Access to a player's worn armor.
pub trait EquipmentHost: Send + Sync {
    /// Returns a copy of the player's armor, or `None` if the player is not
    /// online.
    fn armor_contents(&self, player: PlayerId) -> Option<ArmorContents>;

    /// Replaces all four armor slots in one write.
    fn set_armor_contents(&self, player: PlayerId, armor: ArmorContents);
}

impl<T: EquipmentHost + ?Sized> EquipmentHost for Arc<T> {
    fn armor_contents(&self, player: PlayerId) -> Option<ArmorContents> {
        (**self).armor_contents(player)
    }

    fn set_armor_contents(&self, player: PlayerId, armor: ArmorContents) {
        (**self).set_armor_contents(player, armor)
    }
}

/// Turns opaque descriptor strings into host attribute effects.
pub trait AttributeCompiler: Send + Sync {
    type Effect;

    fn compile(&self, descriptors: &[AttributeDescriptor]) -> Vec<Self::Effect>;
}
