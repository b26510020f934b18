//! Resolution façade.
//!
//! [`SetService`] owns the published registry and the host seams. Every
//! resolution loads one registry snapshot at its start and uses it
//! throughout, so a concurrent [`SetService::reload`] never mixes old and new
//! definitions inside one call.

use core::fmt;
use std::sync::Arc;

use arc_swap::ArcSwap;
use tracing::{debug, info, warn};

use armorset_content::{SetLoader, SkippedEntry};
use armorset_core::{
    ArmorContents, AttributeDescriptor, PieceCounts, SetRegistry, aggregate, scan_equipment,
    sync_all,
};

use crate::api::{PlayerId, Result, RuntimeError};
use crate::host::{AttributeCompiler, EquipmentHost};

/// What a reload produced.
#[derive(Debug)]
pub struct ReloadSummary {
    pub loaded: usize,
    pub files: usize,
    pub skipped: Vec<SkippedEntry>,
    /// True if the set directory was created and seeded with the example.
    pub seeded: bool,
}

impl fmt::Display for ReloadSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "loaded {} set(s) from {} file(s), {} skipped",
            self.loaded,
            self.files,
            self.skipped.len()
        )?;
        if self.seeded {
            f.write_str(", example file created")?;
        }
        Ok(())
    }
}

/// Resolves set bonuses for players and keeps their lore in sync.
pub struct SetService<H, C> {
    registry: ArcSwap<SetRegistry>,
    loader: Option<SetLoader>,
    host: H,
    compiler: C,
}

impl<H, C> SetService<H, C>
where
    H: EquipmentHost,
    C: AttributeCompiler,
{
    pub fn builder() -> SetServiceBuilder<H, C> {
        SetServiceBuilder::new()
    }

    /// Current registry snapshot.
    pub fn registry(&self) -> Arc<SetRegistry> {
        self.registry.load_full()
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    /// Publishes a new registry. In-flight resolutions keep their snapshot.
    pub fn replace_registry(&self, registry: SetRegistry) {
        self.registry.store(Arc::new(registry));
    }

    /// Re-reads the set directory and replaces the registry.
    ///
    /// On failure the previous registry stays published.
    pub fn reload(&self) -> Result<ReloadSummary> {
        let loader = self.loader.as_ref().ok_or(RuntimeError::MissingLoader)?;
        let outcome = loader.load()?;

        let summary = ReloadSummary {
            loaded: outcome.registry.len(),
            files: outcome.files,
            skipped: outcome.skipped,
            seeded: outcome.seeded,
        };
        self.replace_registry(outcome.registry);

        info!(
            target: "armorset::service",
            dir = %loader.dir().display(),
            loaded = summary.loaded,
            skipped = summary.skipped.len(),
            seeded = summary.seeded,
            "Set registry reloaded"
        );
        Ok(summary)
    }

    /// Computes the descriptors earned by a player's armor and syncs the
    /// progress marker on every worn set piece.
    ///
    /// Offline players and unrecognized items resolve to an empty list.
    pub fn resolve_for_player(&self, player: PlayerId) -> Vec<AttributeDescriptor> {
        let registry = self.registry.load_full();
        let Some(mut armor) = self.host.armor_contents(player) else {
            return Vec::new();
        };

        let counts = scan_equipment(&registry, &armor);
        let descriptors = aggregate(&counts, &registry);
        self.sync_lore(player, &mut armor, &counts, &registry);

        debug!(
            target: "armorset::service",
            %player,
            worn = armor.occupied(),
            sets = counts.len(),
            descriptors = descriptors.len(),
            "Resolved set bonuses"
        );
        descriptors
    }

    /// Resolves and compiles a player's bonuses into host effects.
    pub fn compile_for_player(&self, player: PlayerId) -> Vec<C::Effect> {
        let descriptors = self.resolve_for_player(player);
        if descriptors.is_empty() {
            return Vec::new();
        }
        self.compiler.compile(&descriptors)
    }

    /// Scans and syncs lore without computing bonuses.
    ///
    /// Returns true if the armor was written back.
    pub fn refresh_display_only(&self, player: PlayerId) -> bool {
        let registry = self.registry.load_full();
        let Some(mut armor) = self.host.armor_contents(player) else {
            debug!(
                target: "armorset::service",
                %player,
                "Skipping refresh for offline player"
            );
            return false;
        };

        let counts = scan_equipment(&registry, &armor);
        self.sync_lore(player, &mut armor, &counts, &registry)
    }

    fn sync_lore(
        &self,
        player: PlayerId,
        armor: &mut ArmorContents,
        counts: &PieceCounts,
        registry: &SetRegistry,
    ) -> bool {
        let report = sync_all(armor, counts, registry);
        if !report.needs_write_back() {
            return false;
        }

        debug!(
            target: "armorset::lore",
            %player,
            changed = ?report.changed,
            "Writing back armor with updated progress"
        );
        self.host.set_armor_contents(player, armor.clone());
        true
    }
}

/// Builder for [`SetService`].
pub struct SetServiceBuilder<H, C> {
    host: Option<H>,
    compiler: Option<C>,
    loader: Option<SetLoader>,
    registry: SetRegistry,
}

impl<H, C> SetServiceBuilder<H, C>
where
    H: EquipmentHost,
    C: AttributeCompiler,
{
    fn new() -> Self {
        Self {
            host: None,
            compiler: None,
            loader: None,
            registry: SetRegistry::new(),
        }
    }

    /// Set the required equipment host
    pub fn host(mut self, host: H) -> Self {
        self.host = Some(host);
        self
    }

    /// Set the required attribute compiler
    pub fn compiler(mut self, compiler: C) -> Self {
        self.compiler = Some(compiler);
        self
    }

    /// Optional compiler, as discovered at startup
    pub fn compiler_opt(mut self, compiler: Option<C>) -> Self {
        self.compiler = compiler;
        self
    }

    /// Directory loader used by [`SetService::reload`]
    pub fn loader(mut self, loader: SetLoader) -> Self {
        self.loader = Some(loader);
        self
    }

    /// Initial registry (empty by default)
    pub fn registry(mut self, registry: SetRegistry) -> Self {
        self.registry = registry;
        self
    }

    pub fn build(self) -> Result<SetService<H, C>> {
        let Some(compiler) = self.compiler else {
            warn!(
                target: "armorset::service",
                "Attribute compiler not found, set bonuses cannot be applied"
            );
            return Err(RuntimeError::MissingAttributeCompiler);
        };
        let host = self.host.ok_or(RuntimeError::MissingHost)?;

        info!(
            target: "armorset::service",
            sets = self.registry.len(),
            reloadable = self.loader.is_some(),
            "Armor set service enabled"
        );
        Ok(SetService {
            registry: ArcSwap::from_pointee(self.registry),
            loader: self.loader,
            host,
            compiler,
        })
    }
}
