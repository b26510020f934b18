//! Worn armor as seen by the set engine.
//!
//! The host owns the real items. The runtime copies the four armor slots into
//! an [`ArmorContents`], the engine mutates that working copy, and the copy is
//! written back to the host as one batch.

/// Number of armor slots on a player.
pub const ARMOR_SLOT_COUNT: usize = 4;

/// Armor slots in host storage order (boots first).
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum ArmorSlot {
    Boots,
    Leggings,
    Chestplate,
    Helmet,
}

impl ArmorSlot {
    /// All slots in storage order.
    pub const ALL: [ArmorSlot; ARMOR_SLOT_COUNT] = [
        ArmorSlot::Boots,
        ArmorSlot::Leggings,
        ArmorSlot::Chestplate,
        ArmorSlot::Helmet,
    ];

    /// First raw player-inventory slot index used for armor.
    pub const FIRST_RAW_SLOT: i32 = 36;

    /// Maps a raw player-inventory slot index (36..=39) to an armor slot.
    pub fn from_raw_slot(raw: i32) -> Option<Self> {
        let offset = raw.checked_sub(Self::FIRST_RAW_SLOT)?;
        usize::try_from(offset)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }

    pub const fn index(self) -> usize {
        self as usize
    }
}

/// An equipped item: an optional display name plus its lore lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct WornItem {
    pub display_name: Option<String>,
    pub lore: Vec<String>,
}

impl WornItem {
    /// Creates an item with the given lore and no display name.
    pub fn with_lore<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            display_name: None,
            lore: lines.into_iter().map(Into::into).collect(),
        }
    }

    /// Sets the display name (builder pattern).
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn has_lore(&self) -> bool {
        !self.lore.is_empty()
    }
}

/// Fixed-size snapshot of a player's armor slots.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArmorContents {
    slots: [Option<WornItem>; ARMOR_SLOT_COUNT],
}

impl ArmorContents {
    /// Creates contents with every slot empty.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Places an item in a slot (builder pattern).
    pub fn with(mut self, slot: ArmorSlot, item: WornItem) -> Self {
        self.slots[slot.index()] = Some(item);
        self
    }

    /// Replaces a slot, returning the previous item if any.
    pub fn set(&mut self, slot: ArmorSlot, item: Option<WornItem>) -> Option<WornItem> {
        std::mem::replace(&mut self.slots[slot.index()], item)
    }

    pub fn get(&self, slot: ArmorSlot) -> Option<&WornItem> {
        self.slots[slot.index()].as_ref()
    }

    /// Occupied slots in storage order.
    pub fn iter(&self) -> impl Iterator<Item = (ArmorSlot, &WornItem)> + '_ {
        ArmorSlot::ALL
            .into_iter()
            .zip(self.slots.iter())
            .filter_map(|(slot, item)| item.as_ref().map(|item| (slot, item)))
    }

    /// Occupied slots in storage order, mutably.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (ArmorSlot, &mut WornItem)> + '_ {
        ArmorSlot::ALL
            .into_iter()
            .zip(self.slots.iter_mut())
            .filter_map(|(slot, item)| item.as_mut().map(|item| (slot, item)))
    }

    pub fn occupied(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }
}
