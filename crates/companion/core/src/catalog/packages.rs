use crate::types::FormId;

/// What the support companion should be doing this tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[strum(serialize_all = "snake_case")]
pub enum SupportAction {
    HealPlayer,
    HealSelf,
    HealKnight,
    HealGuard,
}

/// Resolved ids of the four support override packages.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct OverridePackages {
    pub heal: FormId,
    pub heal_guard: FormId,
    pub heal_knight: FormId,
    pub heal_self: FormId,
}

impl OverridePackages {
    pub fn for_action(&self, action: SupportAction) -> FormId {
        match action {
            SupportAction::HealPlayer => self.heal,
            SupportAction::HealSelf => self.heal_self,
            SupportAction::HealKnight => self.heal_knight,
            SupportAction::HealGuard => self.heal_guard,
        }
    }

    /// Removal order used when every support override is cleared.
    pub fn teardown_order(&self) -> [FormId; 4] {
        [self.heal_self, self.heal_knight, self.heal_guard, self.heal]
    }

    /// Short label for log lines.
    pub fn label(&self, package: FormId) -> &'static str {
        match package {
            p if p == self.heal => "Heal",
            p if p == self.heal_guard => "HealGuard",
            p if p == self.heal_knight => "HealKnight",
            p if p == self.heal_self => "HealSelf",
            _ => "unknown",
        }
    }
}
