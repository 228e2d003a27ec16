//! Ability kinds and companion classes.
//!
//! Ability kinds mirror the host's skill actor values. Only the kinds a
//! companion class cares about are ever read or written; everything else in
//! the host's actor-value table is left alone.

/// A host skill value that companions can mirror from the player.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum AbilityKind {
    // ========================================================================
    // Combat
    // ========================================================================
    OneHanded,
    TwoHanded,
    Block,
    HeavyArmor,
    /// Light armor. The overhaul ruleset relabels this skill "Evasion".
    LightArmor,

    // ========================================================================
    // Magic
    // ========================================================================
    Alteration,
    Conjuration,
    Destruction,
    Restoration,
    Enchanting,
}

/// One of the three companion classes known to the catalog.
///
/// The class is derived from the actor's base form once, when the companion
/// is constructed, and never changes afterwards.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumCount,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CompanionClass {
    /// Shield bearer. Heavy armor, one-handed weapons and a shield.
    Guard,
    /// Melee fighter. Light or heavy armor, one- and two-handed weapons.
    Knight,
    /// Caster and healer. Clothing only; receives spells from the player.
    Warlock,
}

impl CompanionClass {
    pub const ALL: [Self; 3] = [Self::Guard, Self::Knight, Self::Warlock];

    /// Single-letter tag used in log lines.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Guard => "G",
            Self::Knight => "K",
            Self::Warlock => "W",
        }
    }

    /// Whether this class receives grantable items and drives support overrides.
    pub const fn is_support(self) -> bool {
        matches!(self, Self::Warlock)
    }
}
