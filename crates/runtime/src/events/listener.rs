use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, trace};

use super::types::{AttributeRequest, EntityKind, HostEvent};
use crate::host::{AttributeCompiler, EquipmentHost};
use crate::scheduler::RefreshScheduler;
use crate::service::SetService;

/// Routes host events to the service and the refresh scheduler.
pub struct EquipmentListener<H, C> {
    service: Arc<SetService<H, C>>,
    scheduler: RefreshScheduler<H, C>,
}

impl<H, C> EquipmentListener<H, C>
where
    H: EquipmentHost + 'static,
    C: AttributeCompiler + 'static,
{
    pub fn new(service: Arc<SetService<H, C>>, refresh_delay: Duration) -> Self {
        let scheduler = RefreshScheduler::new(Arc::clone(&service), refresh_delay);
        Self { service, scheduler }
    }

    pub fn service(&self) -> &Arc<SetService<H, C>> {
        &self.service
    }

    pub fn scheduler(&self) -> &RefreshScheduler<H, C> {
        &self.scheduler
    }

    /// Handles one host event. Returns true if a refresh was scheduled.
    pub fn handle(&self, event: HostEvent) -> bool {
        trace!(target: "armorset::listener", player = %event.player(), ?event, "Host event");
        match event {
            HostEvent::PlayerJoin { player } | HostEvent::ItemHeld { player } => {
                self.scheduler.schedule(player)
            }
            HostEvent::InventoryClick { player, .. } => match event.armor_slot() {
                Some(slot) => {
                    trace!(target: "armorset::listener", %player, %slot, "Armor slot clicked");
                    self.scheduler.schedule(player)
                }
                None => false,
            },
            HostEvent::PlayerQuit { player } => {
                self.scheduler.cancel(player);
                false
            }
        }
    }

    /// Appends a player's compiled set bonuses to the request's container.
    ///
    /// Requests for non-players or without a container are ignored. Returns
    /// the number of effects appended.
    pub fn on_attribute_request(&self, request: AttributeRequest<'_, C::Effect>) -> usize {
        let (EntityKind::Player(player), Some(effects)) = (request.entity, request.effects) else {
            return 0;
        };

        let compiled = self.service.compile_for_player(player);
        let appended = compiled.len();
        effects.extend(compiled);

        debug!(target: "armorset::listener", %player, appended, "Attribute request served");
        appended
    }

    /// Cancels every pending refresh.
    pub fn shutdown(&self) {
        self.scheduler.shutdown();
    }
}
