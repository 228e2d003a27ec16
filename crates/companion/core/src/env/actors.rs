use crate::ability::AbilityKind;
use crate::env::HostError;
use crate::types::{ActorId, FormId};

/// Synchronous view of the host's actors used by the scaling engine.
///
/// Every method observes live, externally mutable state. Callers must not
/// cache answers across calls.
pub trait ActorHost: Send + Sync {
    /// The player character, the source of truth for abilities and unlocks.
    fn player(&self) -> ActorId;

    /// Base form of an actor, used to derive its companion class.
    fn base_form(&self, actor: ActorId) -> Option<FormId>;

    fn is_dead(&self, actor: ActorId) -> bool;

    /// Base (unmodified) value of an ability.
    fn base_ability(&self, actor: ActorId, kind: AbilityKind) -> Result<f32, HostError>;

    fn set_base_ability(
        &self,
        actor: ActorId,
        kind: AbilityKind,
        value: f32,
    ) -> Result<(), HostError>;

    fn has_unlock(&self, actor: ActorId, unlock: FormId) -> bool;

    /// Evaluates the unlock's own runtime conditions against the actor.
    fn unlock_conditions_met(&self, actor: ActorId, unlock: FormId) -> bool;

    fn grant_unlock(&self, actor: ActorId, unlock: FormId) -> Result<(), HostError>;

    fn has_item(&self, actor: ActorId, item: FormId) -> bool;

    fn grant_item(&self, actor: ActorId, item: FormId) -> Result<(), HostError>;
}
