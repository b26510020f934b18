use armorset_core::ArmorSlot;

use crate::api::PlayerId;

/// Inventory a click happened in.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InventoryKind {
    /// The player's own inventory screen.
    Player,
    /// The 2x2 crafting view, which also shows the armor slots.
    Crafting,
    /// Chests, furnaces and everything else.
    Other,
}

impl InventoryKind {
    pub fn shows_armor(self) -> bool {
        matches!(self, Self::Player | Self::Crafting)
    }
}

/// Equipment-related server events.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HostEvent {
    PlayerJoin {
        player: PlayerId,
    },
    InventoryClick {
        player: PlayerId,
        inventory: InventoryKind,
        raw_slot: i32,
        cancelled: bool,
    },
    ItemHeld {
        player: PlayerId,
    },
    PlayerQuit {
        player: PlayerId,
    },
}

impl HostEvent {
    pub fn player(&self) -> PlayerId {
        match *self {
            Self::PlayerJoin { player }
            | Self::InventoryClick { player, .. }
            | Self::ItemHeld { player }
            | Self::PlayerQuit { player } => player,
        }
    }

    /// The armor slot touched by an inventory click, if any.
    pub fn armor_slot(&self) -> Option<ArmorSlot> {
        match *self {
            Self::InventoryClick {
                inventory,
                raw_slot,
                cancelled: false,
                ..
            } if inventory.shows_armor() => ArmorSlot::from_raw_slot(raw_slot),
            _ => None,
        }
    }
}

/// Entity an attribute computation is running for.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntityKind {
    Player(PlayerId),
    Other,
}

/// The host asking for an entity's extra attribute effects.
///
/// `effects` is the host's result container; it may be absent.
#[derive(Debug)]
pub struct AttributeRequest<'a, E> {
    pub entity: EntityKind,
    pub effects: Option<&'a mut Vec<E>>,
}

impl<'a, E> AttributeRequest<'a, E> {
    pub fn player(player: PlayerId, effects: &'a mut Vec<E>) -> Self {
        Self {
            entity: EntityKind::Player(player),
            effects: Some(effects),
        }
    }
}
