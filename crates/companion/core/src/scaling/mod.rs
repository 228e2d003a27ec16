//! One-shot synchronization of a companion with the player's progress.
//!
//! Scaling runs in three passes against live host state:
//!
//! 1. **Abilities**: each ability the class mirrors is raised to the player's
//!    value when the player leads by more than [`CompanionConfig::RAISE_EPSILON`].
//!    Values are clamped to [`CompanionConfig::ABILITY_CEILING`] and never lowered.
//! 2. **Unlocks**: each group is walked in catalog order. Held unlocks are
//!    skipped; the first unlock whose conditions fail or whose grant is
//!    refused ends that group. Other groups are unaffected.
//! 3. **Items** (support class only): each item whose band admits the recorded
//!    ability value is granted if the player has it and the companion does not.
//!
//! Host failures never escape; they are collected in the [`ScalingReport`].
mod report;

pub use report::{Raise, ScalingReport};

use crate::ability::{AbilityKind, CompanionClass};
use crate::catalog::Catalog;
use crate::config::CompanionConfig;
use crate::env::{ActorHost, HostError};
use crate::types::ActorId;

/// A live actor tracked as a companion of a known class.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Companion {
    actor: ActorId,
    class: CompanionClass,
    initialized: bool,
}

impl Companion {
    pub fn new(actor: ActorId, class: CompanionClass) -> Self {
        Self {
            actor,
            class,
            initialized: false,
        }
    }

    pub fn actor(&self) -> ActorId {
        self.actor
    }

    pub fn class(&self) -> CompanionClass {
        self.class
    }

    pub fn is_initialized(&self) -> bool {
        self.initialized
    }
}

/// Applies catalog rules to companions through an [`ActorHost`].
pub struct Scaler<'a> {
    catalog: &'a Catalog,
    host: &'a dyn ActorHost,
}

impl<'a> Scaler<'a> {
    pub fn new(catalog: &'a Catalog, host: &'a dyn ActorHost) -> Self {
        Self { catalog, host }
    }

    /// Scales the companion once. Returns `None` if it was already initialized.
    pub fn initialize(&self, companion: &mut Companion) -> Option<ScalingReport> {
        if companion.initialized {
            return None;
        }
        companion.initialized = true;

        let mut report = ScalingReport::default();
        self.scale_abilities(companion, &mut report);
        self.grant_unlocks(companion, &mut report);
        if companion.class.is_support() {
            self.grant_items(companion, &mut report);
        }

        tracing::info!(
            class = companion.class.tag(),
            actor = %companion.actor,
            raised = report.raised.len(),
            unlocks_held = report.unlocks_held,
            unlocks_granted = report.unlocks_granted.len(),
            items_granted = report.items_granted.len(),
            failures = report.failure_count(),
            "companion initialized"
        );
        Some(report)
    }

    fn scale_abilities(&self, companion: &Companion, report: &mut ScalingReport) {
        let player = self.host.player();
        for &kind in self.catalog.abilities(companion.class) {
            match self.scale_ability(player, companion.actor, kind) {
                Ok((value, raise)) => {
                    if let Some(raise) = raise {
                        tracing::trace!(
                            class = companion.class.tag(),
                            ability = %kind,
                            from = raise.from,
                            to = raise.to,
                            "ability raised"
                        );
                        report.raised.push(raise);
                    }
                    report.values.push((kind, value));
                }
                Err(error) => {
                    tracing::warn!(class = companion.class.tag(), ability = %kind, %error, "ability skipped");
                    report.ability_failures.push((kind, error));
                }
            }
        }
    }

    fn scale_ability(
        &self,
        player: ActorId,
        actor: ActorId,
        kind: AbilityKind,
    ) -> Result<(f32, Option<Raise>), HostError> {
        let target = CompanionConfig::clamp_ability(self.host.base_ability(player, kind)?);
        let current = CompanionConfig::clamp_ability(self.host.base_ability(actor, kind)?);
        if target > current + CompanionConfig::RAISE_EPSILON {
            self.host.set_base_ability(actor, kind, target)?;
            let raise = Raise {
                ability: kind,
                from: current,
                to: target,
            };
            return Ok((target, Some(raise)));
        }
        Ok((current, None))
    }

    fn grant_unlocks(&self, companion: &Companion, report: &mut ScalingReport) {
        let actor = companion.actor;
        for group in self.catalog.unlock_groups(companion.class) {
            for unlock in &group.unlocks {
                if self.host.has_unlock(actor, unlock.id) {
                    report.unlocks_held += 1;
                    continue;
                }
                if !self.host.unlock_conditions_met(actor, unlock.id) {
                    tracing::debug!(
                        class = companion.class.tag(),
                        ability = %group.ability,
                        unlock = %unlock.id,
                        name = %unlock.name,
                        "unlock conditions not met"
                    );
                    report.gated.push((group.ability, unlock.id));
                    break;
                }
                if let Err(error) = self.host.grant_unlock(actor, unlock.id) {
                    tracing::warn!(
                        class = companion.class.tag(),
                        ability = %group.ability,
                        unlock = %unlock.id,
                        name = %unlock.name,
                        %error,
                        "could not grant unlock"
                    );
                    report.unlock_failures.push((group.ability, error));
                    break;
                }
                report.unlocks_granted.push(unlock.id);
            }
        }
    }

    fn grant_items(&self, companion: &Companion, report: &mut ScalingReport) {
        let actor = companion.actor;
        let player = self.host.player();
        for item in self.catalog.items() {
            let Some(value) = report.value(item.ability) else {
                continue;
            };
            if !item.admits(value)
                || self.host.has_item(actor, item.id)
                || !self.host.has_item(player, item.id)
            {
                continue;
            }
            match self.host.grant_item(actor, item.id) {
                Ok(()) => {
                    tracing::trace!(class = companion.class.tag(), item = %item.id, name = %item.name, "item granted");
                    report.items_granted.push(item.id);
                }
                Err(error) => {
                    tracing::warn!(class = companion.class.tag(), item = %item.id, name = %item.name, %error, "could not grant item");
                    report.item_failures.push((item.id, error));
                }
            }
        }
    }
}
