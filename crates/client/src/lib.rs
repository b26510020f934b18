//! Standalone set-bonus server.
//!
//! # Architecture
//!
//! ```text
//! Server (composition root)
//!   ├─→ SetService (registry snapshot, resolution, reload)
//!   ├─→ EquipmentListener (host events → deferred refreshes)
//!   └─→ InMemoryEquipment (host adapter)
//! ```
//!
//! Everything is owned here and passed down explicitly; there is no global
//! state.

pub mod compiler;
pub mod config;
pub mod console;
pub mod logging;

use std::fmt::Write as _;
use std::sync::Arc;

use anyhow::Result;
use armorset_content::SetLoader;
use armorset_core::{ArmorContents, ArmorSlot, SetRegistry, WornItem};
use armorset_runtime::{EquipmentListener, HostEvent, InMemoryEquipment, PlayerId, SetService};

use crate::compiler::StatCompiler;
use crate::config::ServerConfig;
use crate::console::{Command, HELP};

pub type Listener = EquipmentListener<Arc<InMemoryEquipment>, StatCompiler>;

/// Top-level server container.
pub struct Server {
    listener: Listener,
    equipment: Arc<InMemoryEquipment>,
}

impl Server {
    /// Builds the service, loads the set directory and starts listening.
    ///
    /// # Errors
    ///
    /// Fails when no attribute compiler is available or the set directory
    /// cannot be created or listed.
    pub fn start(config: &ServerConfig, compiler: Option<StatCompiler>) -> Result<Self> {
        let equipment = Arc::new(InMemoryEquipment::new());
        let service = SetService::builder()
            .host(Arc::clone(&equipment))
            .compiler_opt(compiler)
            .loader(SetLoader::new(config.sets_dir()))
            .build()?;

        let summary = service.reload()?;
        tracing::info!("Startup load: {summary}");

        let listener = EquipmentListener::new(Arc::new(service), config.refresh_delay);
        Ok(Self {
            listener,
            equipment,
        })
    }

    pub fn listener(&self) -> &Listener {
        &self.listener
    }

    pub fn equipment(&self) -> &Arc<InMemoryEquipment> {
        &self.equipment
    }

    /// Puts a player online wearing two pieces of the first loaded set and
    /// fires the join event.
    pub fn join_demo_player(&self, player: PlayerId) {
        let registry = self.listener.service().registry();
        self.equipment.join(player, demo_armor(&registry));
        self.listener.handle(HostEvent::PlayerJoin { player });
    }

    /// Runs one console command and returns its output.
    pub fn execute(&self, command: Command) -> String {
        let service = self.listener.service();
        match command {
            Command::Reload => match service.reload() {
                Ok(summary) => {
                    let mut out = format!("Reloaded: {summary}");
                    for entry in &summary.skipped {
                        let set = entry.set.as_ref().map_or("<file>", |id| id.as_str());
                        let _ = write!(
                            out,
                            "\n  skipped {set} in {}: {}",
                            entry.file.display(),
                            entry.reason
                        );
                    }
                    out
                }
                Err(err) => format!("Reload failed: {:#}", anyhow::Error::from(err)),
            },
            Command::Sets => {
                let registry = service.registry();
                if registry.is_empty() {
                    return "No sets loaded".to_owned();
                }
                let mut out = String::new();
                for set in registry.iter() {
                    let tiers: Vec<String> = set.thresholds().map(|(count, _)| count.to_string()).collect();
                    let _ = writeln!(
                        out,
                        "{}: \"{}\" ({} pieces, tiers {})",
                        set.id(),
                        set.name(),
                        set.total_pieces(),
                        tiers.join("/")
                    );
                }
                out.trim_end().to_owned()
            }
            Command::Bonus(player) => {
                let effects = service.compile_for_player(player);
                if effects.is_empty() {
                    return format!("{player} has no set bonuses");
                }
                let effects: Vec<String> = effects.iter().map(ToString::to_string).collect();
                format!("{player}: {}", effects.join(", "))
            }
            Command::Help => HELP.to_owned(),
            Command::Quit => "Bye".to_owned(),
        }
    }

    /// Cancels pending refreshes.
    pub fn shutdown(&self) {
        self.listener.shutdown();
        tracing::info!("Armor set service disabled");
    }
}

fn demo_armor(registry: &SetRegistry) -> ArmorContents {
    let Some(set) = registry.iter().next() else {
        return ArmorContents::empty();
    };

    // Lore as the game stores it, with section-sign color codes.
    let identity = set.name().replace('&', "§");
    let mut keywords = set.pieces().values();
    [ArmorSlot::Helmet, ArmorSlot::Chestplate]
        .into_iter()
        .fold(ArmorContents::empty(), |armor, slot| {
            let label = keywords
                .next()
                .cloned()
                .unwrap_or_else(|| slot.to_string());
            armor.with(
                slot,
                WornItem::with_lore([identity.clone()]).named(label),
            )
        })
}
