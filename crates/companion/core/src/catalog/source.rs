//! Authored rule tables.
//!
//! These are the unresolved inputs to [`Catalog::build`](super::Catalog::build).
//! Tables reference assets by [`FormRef`]; nothing here touches the host.

use crate::ability::{AbilityKind, CompanionClass};
use crate::types::FormRef;

/// Everything needed to build a catalog for either ruleset variant.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CatalogSource {
    pub classes: ClassRefs,
    pub packages: PackageRefs,
    /// Source file whose presence selects the overhaul ruleset.
    pub overhaul_marker: String,
    pub base: RuleSet,
    pub overhaul: RuleSet,
}

/// Actor base forms identifying each companion class.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassRefs {
    pub guard: FormRef,
    pub knight: FormRef,
    pub warlock: FormRef,
}

impl ClassRefs {
    pub fn get(&self, class: CompanionClass) -> &FormRef {
        match class {
            CompanionClass::Guard => &self.guard,
            CompanionClass::Knight => &self.knight,
            CompanionClass::Warlock => &self.warlock,
        }
    }
}

/// The four well-known support override packages.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackageRefs {
    /// Heal the player.
    pub heal: FormRef,
    pub heal_guard: FormRef,
    pub heal_knight: FormRef,
    pub heal_self: FormRef,
}

/// One ruleset variant: abilities, unlocks and items.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RuleSet {
    pub abilities: Vec<ClassAbilities>,
    pub unlocks: Vec<UnlockEntry>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub items: Vec<ItemEntry>,
}

impl RuleSet {
    /// Ability kinds authored for a class, in authoring order.
    pub fn abilities_of(&self, class: CompanionClass) -> impl Iterator<Item = AbilityKind> + '_ {
        self.abilities
            .iter()
            .filter(move |entry| entry.class == class)
            .flat_map(|entry| entry.abilities.iter().copied())
    }
}

/// Ability kinds a class mirrors from the player.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ClassAbilities {
    pub class: CompanionClass,
    pub abilities: Vec<AbilityKind>,
}

/// An unlock as authored: which ability governs it, the level it is gated at
/// and which classes may hold it.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UnlockEntry {
    pub form: FormRef,
    pub ability: AbilityKind,
    pub gate: u8,
    pub holders: Vec<CompanionClass>,
}

/// An ability-granting item as authored, with its inclusive activation band.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ItemEntry {
    pub form: FormRef,
    pub ability: AbilityKind,
    pub min: f32,
    pub max: f32,
}
