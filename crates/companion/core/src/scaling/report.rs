use arrayvec::ArrayVec;
use strum::EnumCount;

use crate::ability::AbilityKind;
use crate::env::HostError;
use crate::types::FormId;

const ABILITY_SLOTS: usize = AbilityKind::COUNT;

/// An ability raised to match the player.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Raise {
    pub ability: AbilityKind,
    pub from: f32,
    pub to: f32,
}

/// Everything one initialization did to a companion.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ScalingReport {
    /// Companion value per ability after scaling, in class order.
    pub values: ArrayVec<(AbilityKind, f32), ABILITY_SLOTS>,
    pub raised: ArrayVec<Raise, ABILITY_SLOTS>,
    /// Abilities that could not be read or written and were skipped.
    pub ability_failures: Vec<(AbilityKind, HostError)>,

    pub unlocks_held: usize,
    pub unlocks_granted: Vec<FormId>,
    /// Groups stopped at an unlock whose conditions were not met.
    pub gated: Vec<(AbilityKind, FormId)>,
    /// Groups stopped at an unlock the host refused to grant.
    pub unlock_failures: Vec<(AbilityKind, HostError)>,

    pub items_granted: Vec<FormId>,
    pub item_failures: Vec<(FormId, HostError)>,
}

impl ScalingReport {
    /// Recorded companion value for an ability, if it was scaled.
    pub fn value(&self, ability: AbilityKind) -> Option<f32> {
        self.values
            .iter()
            .find(|(kind, _)| *kind == ability)
            .map(|(_, value)| *value)
    }

    pub fn failure_count(&self) -> usize {
        self.ability_failures.len() + self.unlock_failures.len() + self.item_failures.len()
    }
}
