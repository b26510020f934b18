//! Set-bonus rules shared by the loader and the server runtime.
//!
//! `armorset-core` defines the canonical data model (set definitions, worn
//! armor) and the pure operations over it:
//! - [`scan`] recognizes which configured set each worn item belongs to
//! - [`aggregate`] turns per-set piece counts into earned attribute descriptors
//! - [`lore`] keeps the `(current/total)` progress marker on each item in sync
//!
//! Nothing here touches files, hosts or clocks. The runtime crate reads armor
//! from the host, runs these functions against one registry snapshot, and
//! writes the result back.
pub mod aggregate;
pub mod equipment;
pub mod error;
pub mod lore;
pub mod registry;
pub mod scan;
pub mod set;

pub use aggregate::aggregate;
pub use equipment::{ARMOR_SLOT_COUNT, ArmorContents, ArmorSlot, WornItem};
pub use error::{DefinitionError, RegistryError};
pub use lore::{LoreSyncReport, ProgressMarker, sync_all, sync_one};
pub use registry::SetRegistry;
pub use scan::{PieceCounts, identify_set, scan_equipment};
pub use set::{AttributeDescriptor, SetDefinition, SetDefinitionBuilder, SetId};
