//! Heal target selection for the support companion.
//!
//! ```text
//! Selector
//!   ├─ when player_hurt  → HealPlayer
//!   ├─ when self_hurt    → HealSelf
//!   ├─ when knight_hurt  → HealKnight
//!   └─ when guard_hurt   → HealGuard
//! ```
//!
//! The first branch whose condition holds records its action; if none holds
//! the support companion follows its normal packages.

use behavior_tree::{Behavior, builder};
use companion_core::{Position, SupportAction, SupportThresholds};

/// One actor's readings for a single tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Vitals {
    pub dead: bool,
    /// Fraction of maximum health.
    pub health: f32,
    pub position: Position,
}

impl Vitals {
    pub fn new(dead: bool, health: f32, position: Position) -> Self {
        Self {
            dead,
            health,
            position,
        }
    }
}

/// Everything the policy looks at, gathered once per tick.
#[derive(Clone, Debug, PartialEq)]
pub struct SupportSnapshot {
    pub in_combat: bool,
    pub player: Vitals,
    pub support: Vitals,
    /// `None` when no knight is tracked.
    pub knight: Option<Vitals>,
    pub guard: Option<Vitals>,
}

pub struct SupportContext {
    snapshot: SupportSnapshot,
    thresholds: SupportThresholds,
    choice: Option<SupportAction>,
}

impl SupportContext {
    fn ally_needs_heal(&self, ally: Option<Vitals>, threshold: f32) -> bool {
        let Some(ally) = ally else {
            return false;
        };
        !ally.dead
            && ally.health > self.thresholds.ally_floor
            && ally.health < threshold
            && self.snapshot.support.position.distance(&ally.position) < self.thresholds.heal_range
    }
}

pub type SupportTree = Box<dyn Behavior<SupportContext>>;

/// Decides which heal override the support companion should run.
pub struct SupportPolicy {
    thresholds: SupportThresholds,
    tree: SupportTree,
}

impl SupportPolicy {
    pub fn new(thresholds: SupportThresholds) -> Self {
        Self {
            thresholds,
            tree: heal_priorities(),
        }
    }

    pub fn thresholds(&self) -> &SupportThresholds {
        &self.thresholds
    }

    pub fn decide(&self, snapshot: SupportSnapshot) -> Option<SupportAction> {
        if snapshot.support.dead {
            return None;
        }
        let mut ctx = SupportContext {
            thresholds: self.thresholds.effective(snapshot.in_combat),
            snapshot,
            choice: None,
        };
        self.tree.tick(&mut ctx);
        ctx.choice
    }
}

impl Default for SupportPolicy {
    fn default() -> Self {
        Self::new(SupportThresholds::default())
    }
}

fn heal_priorities() -> SupportTree {
    builder::selector(vec![
        builder::when(
            "player_hurt",
            |ctx: &SupportContext| {
                let player = ctx.snapshot.player;
                !player.dead && player.health < ctx.thresholds.player
            },
            choose(SupportAction::HealPlayer),
        ),
        builder::when(
            "self_hurt",
            |ctx: &SupportContext| ctx.snapshot.support.health < ctx.thresholds.support,
            choose(SupportAction::HealSelf),
        ),
        builder::when(
            "knight_hurt",
            |ctx: &SupportContext| ctx.ally_needs_heal(ctx.snapshot.knight, ctx.thresholds.knight),
            choose(SupportAction::HealKnight),
        ),
        builder::when(
            "guard_hurt",
            |ctx: &SupportContext| ctx.ally_needs_heal(ctx.snapshot.guard, ctx.thresholds.guard),
            choose(SupportAction::HealGuard),
        ),
    ])
}

fn choose(action: SupportAction) -> impl Fn(&mut SupportContext) + Send + Sync + 'static {
    move |ctx| ctx.choice = Some(action)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn healthy() -> Vitals {
        Vitals::new(false, 1.0, Position::ORIGIN)
    }

    fn at(health: f32, x: f32) -> Vitals {
        Vitals::new(false, health, Position::new(x, 0.0, 0.0))
    }

    fn snapshot(in_combat: bool) -> SupportSnapshot {
        SupportSnapshot {
            in_combat,
            player: healthy(),
            support: healthy(),
            knight: Some(healthy()),
            guard: Some(healthy()),
        }
    }

    #[test]
    fn everyone_healthy_means_no_override() {
        let policy = SupportPolicy::default();
        assert_eq!(policy.decide(snapshot(true)), None);
        assert_eq!(policy.decide(snapshot(false)), None);
    }

    #[test]
    fn player_outranks_everyone() {
        let policy = SupportPolicy::default();
        let mut snap = snapshot(true);
        snap.player = at(0.5, 0.0);
        snap.support = at(0.2, 0.0);
        snap.knight = Some(at(0.2, 0.0));
        assert_eq!(policy.decide(snap), Some(SupportAction::HealPlayer));
    }

    #[test]
    fn dead_player_is_skipped() {
        let policy = SupportPolicy::default();
        let mut snap = snapshot(true);
        snap.player = Vitals::new(true, 0.0, Position::ORIGIN);
        snap.knight = Some(at(0.5, 100.0));
        assert_eq!(policy.decide(snap), Some(SupportAction::HealKnight));
    }

    #[test]
    fn combat_thresholds_are_per_role() {
        let policy = SupportPolicy::default();

        let mut snap = snapshot(true);
        snap.knight = Some(at(0.8, 0.0));
        snap.guard = Some(at(0.65, 0.0));
        assert_eq!(policy.decide(snap.clone()), None);

        snap.guard = Some(at(0.55, 0.0));
        assert_eq!(policy.decide(snap.clone()), Some(SupportAction::HealGuard));

        snap.knight = Some(at(0.7, 0.0));
        assert_eq!(policy.decide(snap), Some(SupportAction::HealKnight));
    }

    #[test]
    fn out_of_combat_any_missing_health_counts() {
        let policy = SupportPolicy::default();
        let mut snap = snapshot(false);
        snap.guard = Some(at(0.95, 0.0));
        assert_eq!(policy.decide(snap.clone()), Some(SupportAction::HealGuard));

        snap.support = at(0.99, 0.0);
        assert_eq!(policy.decide(snap), Some(SupportAction::HealSelf));
    }

    #[test]
    fn allies_out_of_range_or_nearly_dead_are_ignored() {
        let policy = SupportPolicy::default();
        let mut snap = snapshot(true);
        snap.knight = Some(at(0.3, 950.0));
        snap.guard = Some(at(0.05, 0.0));
        assert_eq!(policy.decide(snap), None);
    }

    #[test]
    fn missing_allies_are_skipped() {
        let policy = SupportPolicy::default();
        let mut snap = snapshot(true);
        snap.knight = None;
        snap.guard = Some(at(0.3, 10.0));
        assert_eq!(policy.decide(snap), Some(SupportAction::HealGuard));
    }

    #[test]
    fn dead_support_companion_decides_nothing() {
        let policy = SupportPolicy::default();
        let mut snap = snapshot(true);
        snap.support = Vitals::new(true, 0.0, Position::ORIGIN);
        snap.player = at(0.1, 0.0);
        assert_eq!(policy.decide(snap), None);
    }

    #[test]
    fn heal_range_is_tunable() {
        let policy = SupportPolicy::new(SupportThresholds::default().with_heal_range(2000.0));
        let mut snap = snapshot(true);
        snap.knight = Some(at(0.3, 1500.0));
        assert_eq!(policy.decide(snap), Some(SupportAction::HealKnight));
    }
}
