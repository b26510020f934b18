//! Server-side orchestration of set bonuses.
//!
//! This crate binds the pure rules of `armorset-core` to a running server:
//! it owns the published registry snapshot, reads and writes armor through a
//! host adapter, and turns host events into deferred display refreshes.
//!
//! Modules are organized by responsibility:
//! - [`service`] hosts the resolution façade and its builder
//! - [`api`] exposes error and identity types shared by the other modules
//! - [`host`] defines the host seams and an in-memory adapter
//! - [`scheduler`] coalesces deferred refreshes per player
//! - [`events`] translates host events into service and scheduler calls
pub mod api;
pub mod events;
pub mod host;
pub mod scheduler;
pub mod service;

pub use api::{PlayerId, Result, RuntimeError};
pub use events::{AttributeRequest, EntityKind, EquipmentListener, HostEvent, InventoryKind};
pub use host::{AttributeCompiler, EquipmentHost, InMemoryEquipment};
pub use scheduler::{DEFAULT_REFRESH_DELAY, RefreshScheduler};
pub use service::{ReloadSummary, SetService, SetServiceBuilder};
