//! Built-in rule tables.
//!
//! Both variants share the class and package references shipped with the
//! plugin. The base variant mirrors only guard and knight abilities; the
//! overhaul variant adds the warlock, its unlocks and its spells.
mod base;
mod overhaul;

use companion_core::{
    AbilityKind, CatalogSource, ClassRefs, CompanionClass, FormRef, ItemEntry,
    PackageRefs, UnlockEntry,
};

/// Plugin that defines the companions and their override packages.
pub const PLUGIN: &str = "Undead Trinity.esp";
/// Master file most unlocks and spells come from.
pub const BASE_MASTER: &str = "Skyrim.esm";
/// Presence of this file selects the overhaul tables.
pub const OVERHAUL_MARKER: &str = "Requiem.esp";

/// Tables for every supported ruleset.
pub fn builtin_source() -> CatalogSource {
    CatalogSource {
        classes: ClassRefs {
            guard: FormRef::new(0x000031, PLUGIN),
            knight: FormRef::new(0x000032, PLUGIN),
            warlock: FormRef::new(0x000033, PLUGIN),
        },
        packages: PackageRefs {
            heal: FormRef::new(0xF00004, PLUGIN),
            heal_guard: FormRef::new(0xF00005, PLUGIN),
            heal_knight: FormRef::new(0xF00006, PLUGIN),
            heal_self: FormRef::new(0xF00007, PLUGIN),
        },
        overhaul_marker: OVERHAUL_MARKER.to_string(),
        base: base::rules(),
        overhaul: overhaul::rules(),
    }
}

fn unlock(
    local_id: u32,
    source: &str,
    ability: AbilityKind,
    gate: u8,
    holders: &[CompanionClass],
) -> UnlockEntry {
    UnlockEntry {
        form: FormRef::new(local_id, source),
        ability,
        gate,
        holders: holders.to_vec(),
    }
}

fn item(local_id: u32, source: &str, ability: AbilityKind, min: f32, max: f32) -> ItemEntry {
    ItemEntry {
        form: FormRef::new(local_id, source),
        ability,
        min,
        max,
    }
}
