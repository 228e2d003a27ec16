/// Scaling constants and support-policy tunables.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct CompanionConfig {
    pub support: SupportThresholds,
}

impl CompanionConfig {
    // ===== compile-time constants =====
    /// Highest value an ability is ever read as or raised to.
    pub const ABILITY_CEILING: f32 = 100.0;
    /// The player must lead by more than this before a companion is raised.
    pub const RAISE_EPSILON: f32 = 0.5;
    /// Priority the support overrides are added with.
    pub const DEFAULT_OVERRIDE_PRIORITY: i32 = 2;

    pub fn new() -> Self {
        Self {
            support: SupportThresholds::default(),
        }
    }

    pub fn with_support(support: SupportThresholds) -> Self {
        Self { support }
    }

    /// Clamps a raw host value into the range the scaler works with.
    pub fn clamp_ability(value: f32) -> f32 {
        value.min(Self::ABILITY_CEILING)
    }
}

impl Default for CompanionConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Health fractions below which the support companion reacts.
///
/// Out of combat every threshold collapses to [`Self::OUT_OF_COMBAT`], so any
/// missing health at all is worth topping up.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct SupportThresholds {
    pub player: f32,
    /// Threshold for the support companion healing itself.
    pub support: f32,
    pub knight: f32,
    pub guard: f32,
    /// Allies at or below this fraction are treated as lost causes.
    pub ally_floor: f32,
    /// Maximum distance between the support companion and an ally it heals.
    pub heal_range: f32,
}

impl SupportThresholds {
    pub const OUT_OF_COMBAT: f32 = 1.0;
    pub const DEFAULT_HEAL_RANGE: f32 = 900.0;

    /// Thresholds in effect for the given combat state.
    pub fn effective(&self, in_combat: bool) -> Self {
        if in_combat {
            return self.clone();
        }
        Self {
            player: Self::OUT_OF_COMBAT,
            support: Self::OUT_OF_COMBAT,
            knight: Self::OUT_OF_COMBAT,
            guard: Self::OUT_OF_COMBAT,
            ..self.clone()
        }
    }

    pub fn with_heal_range(mut self, heal_range: f32) -> Self {
        self.heal_range = heal_range;
        self
    }
}

impl Default for SupportThresholds {
    fn default() -> Self {
        Self {
            player: 0.9,
            support: 0.9,
            knight: 0.75,
            guard: 0.6,
            ally_floor: 0.1,
            heal_range: Self::DEFAULT_HEAL_RANGE,
        }
    }
}
