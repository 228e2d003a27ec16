//! Progression catalog.
//!
//! The catalog is built once per world load from a [`CatalogSource`] and an
//! [`AssetSource`]. Building resolves every authored reference to a live
//! [`FormId`], checks its kind and name, and groups unlocks per class per
//! governing ability. The result is immutable and shared behind an `Arc`.
mod error;
mod packages;
mod source;
mod variant;

pub use error::CatalogError;
pub use packages::{OverridePackages, SupportAction};
pub use source::{
    CatalogSource, ClassAbilities, ClassRefs, ItemEntry, PackageRefs, RuleSet,
    UnlockEntry,
};
pub use variant::RulesetVariant;

use std::collections::HashMap;

use strum::IntoEnumIterator;

use crate::ability::{AbilityKind, CompanionClass};
use crate::env::{AssetSource, FormKind, FormRecord};
use crate::types::{FormId, FormRef};

/// A resolved unlock.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockRule {
    pub id: FormId,
    pub name: String,
    pub ability: AbilityKind,
    pub gate: u8,
    pub holders: Vec<CompanionClass>,
}

/// Unlocks of one class governed by one ability, in application order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UnlockGroup {
    pub ability: AbilityKind,
    pub unlocks: Vec<UnlockRule>,
}

/// A resolved ability-granting item.
#[derive(Clone, Debug, PartialEq)]
pub struct GrantableItem {
    pub id: FormId,
    pub name: String,
    pub ability: AbilityKind,
    pub min: f32,
    pub max: f32,
}

impl GrantableItem {
    /// Whether a governing-ability value lies within the inclusive band.
    pub fn admits(&self, value: f32) -> bool {
        self.min <= value && value <= self.max
    }
}

#[derive(Clone, Debug, Default)]
struct ClassRules {
    abilities: Vec<AbilityKind>,
    groups: Vec<UnlockGroup>,
}

/// Immutable progression tables for the detected ruleset.
#[derive(Clone, Debug)]
pub struct Catalog {
    variant: RulesetVariant,
    classes: HashMap<FormId, CompanionClass>,
    rules: HashMap<CompanionClass, ClassRules>,
    items: Vec<GrantableItem>,
    packages: OverridePackages,
}

impl Catalog {
    /// Detects the ruleset variant from the loaded content and builds it.
    pub fn detect(source: &CatalogSource, assets: &dyn AssetSource) -> Result<Self, CatalogError> {
        let variant = RulesetVariant::detect(assets, &source.overhaul_marker);
        Self::build(variant, source, assets)
    }

    /// Resolves every table of `variant`. Any missing, mistyped or unnamed
    /// asset aborts the build.
    pub fn build(
        variant: RulesetVariant,
        source: &CatalogSource,
        assets: &dyn AssetSource,
    ) -> Result<Self, CatalogError> {
        let rules_source = match variant {
            RulesetVariant::Base => &source.base,
            RulesetVariant::Overhaul => &source.overhaul,
        };

        let mut classes = HashMap::new();
        for class in CompanionClass::iter() {
            let record = resolve(assets, source.classes.get(class), FormKind::Npc)?;
            classes.insert(record.id, class);
        }

        let packages = OverridePackages {
            heal: resolve(assets, &source.packages.heal, FormKind::Package)?.id,
            heal_guard: resolve(assets, &source.packages.heal_guard, FormKind::Package)?.id,
            heal_knight: resolve(assets, &source.packages.heal_knight, FormKind::Package)?.id,
            heal_self: resolve(assets, &source.packages.heal_self, FormKind::Package)?.id,
        };

        let mut rules: HashMap<CompanionClass, ClassRules> = HashMap::new();
        for class in CompanionClass::iter() {
            let entry = rules.entry(class).or_default();
            for kind in rules_source.abilities_of(class) {
                if !entry.abilities.contains(&kind) {
                    entry.abilities.push(kind);
                }
            }
        }

        for authored in &rules_source.unlocks {
            let record = resolve_named(assets, &authored.form, FormKind::Perk)?;
            let rule = UnlockRule {
                id: record.id,
                name: record.name,
                ability: authored.ability,
                gate: authored.gate,
                holders: authored.holders.clone(),
            };
            for &class in &authored.holders {
                let class_rules = rules.entry(class).or_default();
                push_unlock(class_rules, class, &authored.form, rule.clone())?;
            }
        }

        let mut items = Vec::with_capacity(rules_source.items.len());
        for authored in &rules_source.items {
            if authored.min > authored.max {
                return Err(CatalogError::InvalidBand {
                    form: authored.form.clone(),
                    min: authored.min,
                    max: authored.max,
                });
            }
            let record = resolve_named(assets, &authored.form, FormKind::Spell)?;
            items.push(GrantableItem {
                id: record.id,
                name: record.name,
                ability: authored.ability,
                min: authored.min,
                max: authored.max,
            });
        }

        let catalog = Self {
            variant,
            classes,
            rules,
            items,
            packages,
        };
        tracing::info!(
            variant = %catalog.variant,
            guard_unlocks = catalog.unlock_count(CompanionClass::Guard),
            knight_unlocks = catalog.unlock_count(CompanionClass::Knight),
            warlock_unlocks = catalog.unlock_count(CompanionClass::Warlock),
            items = catalog.items.len(),
            "progression catalog built"
        );
        Ok(catalog)
    }

    pub fn variant(&self) -> RulesetVariant {
        self.variant
    }

    /// Companion class whose actor base form is `base`, if any.
    pub fn class_of(&self, base: FormId) -> Option<CompanionClass> {
        self.classes.get(&base).copied()
    }

    /// Ability kinds mirrored from the player, in authoring order.
    pub fn abilities(&self, class: CompanionClass) -> &[AbilityKind] {
        self.rules
            .get(&class)
            .map(|rules| rules.abilities.as_slice())
            .unwrap_or_default()
    }

    /// Unlock groups of a class, ordered by first appearance of their ability.
    pub fn unlock_groups(&self, class: CompanionClass) -> &[UnlockGroup] {
        self.rules
            .get(&class)
            .map(|rules| rules.groups.as_slice())
            .unwrap_or_default()
    }

    pub fn unlock_count(&self, class: CompanionClass) -> usize {
        self.unlock_groups(class)
            .iter()
            .map(|group| group.unlocks.len())
            .sum()
    }

    /// Ability-granting items. Only the support class receives these.
    pub fn items(&self) -> &[GrantableItem] {
        &self.items
    }

    pub fn packages(&self) -> &OverridePackages {
        &self.packages
    }
}

fn push_unlock(
    class_rules: &mut ClassRules,
    class: CompanionClass,
    form: &FormRef,
    rule: UnlockRule,
) -> Result<(), CatalogError> {
    let index = match class_rules
        .groups
        .iter()
        .position(|group| group.ability == rule.ability)
    {
        Some(index) => index,
        None => {
            class_rules.groups.push(UnlockGroup {
                ability: rule.ability,
                unlocks: Vec::new(),
            });
            class_rules.groups.len() - 1
        }
    };

    let group = &mut class_rules.groups[index];
    if let Some(previous) = group.unlocks.last().map(|last| last.gate) {
        if previous > rule.gate {
            return Err(CatalogError::UnorderedGates {
                form: form.clone(),
                class,
                ability: rule.ability,
                gate: rule.gate,
                previous,
            });
        }
    }
    group.unlocks.push(rule);
    Ok(())
}

fn resolve(
    assets: &dyn AssetSource,
    form: &FormRef,
    expected: FormKind,
) -> Result<FormRecord, CatalogError> {
    let record = assets
        .lookup(form)
        .ok_or_else(|| CatalogError::MissingAsset { form: form.clone() })?;
    if record.kind != expected {
        return Err(CatalogError::WrongKind {
            form: form.clone(),
            expected,
            found: record.kind,
        });
    }
    Ok(record)
}

fn resolve_named(
    assets: &dyn AssetSource,
    form: &FormRef,
    expected: FormKind,
) -> Result<FormRecord, CatalogError> {
    let record = resolve(assets, form, expected)?;
    if record.name.trim().is_empty() {
        return Err(CatalogError::Unnamed {
            form: form.clone(),
            kind: expected,
        });
    }
    Ok(record)
}
