//! Deferred, coalescing display refreshes.
//!
//! Host events fire before the server applies the equipment change they
//! describe, so the lore refresh runs one tick later. Rapid triggers for the
//! same player collapse into the single refresh already pending.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, info, trace};

use crate::api::PlayerId;
use crate::host::{AttributeCompiler, EquipmentHost};
use crate::service::SetService;

/// One server tick.
pub const DEFAULT_REFRESH_DELAY: Duration = Duration::from_millis(50);

#[derive(Default)]
struct Pending {
    next_ticket: u64,
    tasks: HashMap<PlayerId, (u64, JoinHandle<()>)>,
}

/// Schedules at most one pending refresh per player.
///
/// Must be used from within a tokio runtime.
pub struct RefreshScheduler<H, C> {
    service: Arc<SetService<H, C>>,
    delay: Duration,
    pending: Arc<Mutex<Pending>>,
}

impl<H, C> RefreshScheduler<H, C>
where
    H: EquipmentHost + 'static,
    C: AttributeCompiler + 'static,
{
    pub fn new(service: Arc<SetService<H, C>>, delay: Duration) -> Self {
        Self {
            service,
            delay,
            pending: Arc::new(Mutex::new(Pending::default())),
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules a refresh for `player` after the configured delay.
    ///
    /// Returns false if one is already pending; that refresh will observe the
    /// latest equipment anyway.
    pub fn schedule(&self, player: PlayerId) -> bool {
        let mut pending = lock(&self.pending);
        if pending.tasks.contains_key(&player) {
            trace!(target: "armorset::scheduler", %player, "Refresh already pending");
            return false;
        }

        let ticket = pending.next_ticket;
        pending.next_ticket += 1;

        let service = Arc::clone(&self.service);
        let shared = Arc::clone(&self.pending);
        let delay = self.delay;
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            {
                // Release the slot first so triggers during the refresh
                // schedule a new one.
                let mut pending = lock(&shared);
                if pending.tasks.get(&player).is_some_and(|(t, _)| *t == ticket) {
                    pending.tasks.remove(&player);
                }
            }
            let written = service.refresh_display_only(player);
            trace!(target: "armorset::scheduler", %player, written, "Refresh ran");
        });

        pending.tasks.insert(player, (ticket, task));
        debug!(
            target: "armorset::scheduler",
            %player,
            delay_ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX),
            "Refresh scheduled"
        );
        true
    }

    /// Aborts a pending refresh. Returns false if none was pending.
    pub fn cancel(&self, player: PlayerId) -> bool {
        let Some((_, task)) = lock(&self.pending).tasks.remove(&player) else {
            return false;
        };
        task.abort();
        debug!(target: "armorset::scheduler", %player, "Refresh cancelled");
        true
    }

    pub fn is_pending(&self, player: PlayerId) -> bool {
        lock(&self.pending).tasks.contains_key(&player)
    }

    /// Number of refreshes waiting to run.
    pub fn pending(&self) -> usize {
        lock(&self.pending).tasks.len()
    }

    /// Aborts every pending refresh.
    pub fn shutdown(&self) {
        let tasks: Vec<_> = lock(&self.pending).tasks.drain().collect();
        for (_, (_, task)) in &tasks {
            task.abort();
        }
        info!(
            target: "armorset::scheduler",
            cancelled = tasks.len(),
            "Refresh scheduler stopped"
        );
    }
}

fn lock(pending: &Mutex<Pending>) -> MutexGuard<'_, Pending> {
    pending.lock().unwrap_or_else(PoisonError::into_inner)
}
