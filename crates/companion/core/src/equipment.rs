//! Armor coverage and per-class equip rules.
//!
//! Pure functions only. The runtime resolver pairs these with the host's
//! inventory and scripting calls.

use bitflags::bitflags;

use crate::ability::CompanionClass;
use crate::types::{ExtraDataId, FormId};

bitflags! {
    /// Body slots an armor piece occupies. Bit `n` is host slot `30 + n`.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SlotMask: u32 {
        const HEAD = 1 << 0;
        const HAIR = 1 << 1;
        const BODY = 1 << 2;
        const HANDS = 1 << 3;
        const FOREARMS = 1 << 4;
        const AMULET = 1 << 5;
        const RING = 1 << 6;
        const FEET = 1 << 7;
        const CALVES = 1 << 8;
        const SHIELD = 1 << 9;
        const TAIL = 1 << 10;
        const LONG_HAIR = 1 << 11;
        const CIRCLET = 1 << 12;
        const EARS = 1 << 13;

        // Mod-defined slots 44..=61 carry no names.
        const _ = !0;
    }
}

/// Weight class of an armor piece.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ArmorWeight {
    Light,
    Heavy,
    Clothing,
}

#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ArmorForm {
    pub id: FormId,
    pub name: String,
    pub weight: ArmorWeight,
    pub slots: SlotMask,
}

impl ArmorForm {
    pub fn is_shield(&self) -> bool {
        self.slots.contains(SlotMask::SHIELD)
    }
}

/// An inventory item as far as equip policy cares.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ItemForm {
    Armor(ArmorForm),
    /// Weapons, potions, books and everything else.
    Other(FormId),
}

impl ItemForm {
    pub fn id(&self) -> FormId {
        match self {
            Self::Armor(armor) => armor.id,
            Self::Other(id) => *id,
        }
    }

    pub fn as_armor(&self) -> Option<&ArmorForm> {
        match self {
            Self::Armor(armor) => Some(armor),
            Self::Other(_) => None,
        }
    }
}

/// One inventory stack of an actor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InventoryEntry {
    pub item: ItemForm,
    pub worn: bool,
    /// Data of the first extra list, needed to unequip this exact copy.
    pub extra: Option<ExtraDataId>,
}

/// Whether a companion class is allowed to wear an item.
pub fn can_equip(class: CompanionClass, item: &ItemForm) -> bool {
    let Some(armor) = item.as_armor() else {
        return false;
    };
    if armor.is_shield() {
        return class == CompanionClass::Guard;
    }
    match armor.weight {
        ArmorWeight::Light => class == CompanionClass::Knight,
        ArmorWeight::Heavy => matches!(class, CompanionClass::Guard | CompanionClass::Knight),
        ArmorWeight::Clothing => true,
    }
}

/// Worn armor in `inventory` whose coverage overlaps `armor`, excluding
/// `armor` itself.
pub fn conflicts<'a>(
    armor: &ArmorForm,
    inventory: &'a [InventoryEntry],
) -> impl Iterator<Item = (&'a ArmorForm, Option<ExtraDataId>)> + 'a {
    let id = armor.id;
    let slots = armor.slots;
    inventory.iter().filter_map(move |entry| {
        let worn = entry.item.as_armor()?;
        (entry.worn && worn.id != id && worn.slots.intersects(slots)).then_some((worn, entry.extra))
    })
}
