//! Host event handling.
//!
//! The server forwards its equipment-related events as [`HostEvent`]s and
//! attribute computations as [`AttributeRequest`]s. [`EquipmentListener`]
//! decides which of them need a lore refresh or a bonus resolution.
mod listener;
mod types;

pub use listener::EquipmentListener;
pub use types::{AttributeRequest, EntityKind, HostEvent, InventoryKind};
