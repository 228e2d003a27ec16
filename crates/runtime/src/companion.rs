//! A companion as the runtime tracks it: scaling state plus its override driver.

use companion_core::{ActorId, Companion, CompanionClass, FormId, Scaler, ScalingReport};
use tokio::task::JoinHandle;

use crate::controller::{OverrideContext, OverrideController};

pub struct TrackedCompanion {
    companion: Companion,
    controller: OverrideController,
}

impl TrackedCompanion {
    /// Starts tracking `actor`. Must be called inside a tokio runtime.
    pub fn spawn(actor: ActorId, class: CompanionClass, context: OverrideContext) -> Self {
        Self {
            companion: Companion::new(actor, class),
            controller: OverrideController::spawn(actor, class, context),
        }
    }

    pub fn actor(&self) -> ActorId {
        self.companion.actor()
    }

    pub fn class(&self) -> CompanionClass {
        self.companion.class()
    }

    pub fn is_initialized(&self) -> bool {
        self.companion.is_initialized()
    }

    /// Scales the companion, then clears stale support overrides and asks the
    /// host to re-evaluate. Runs once; later calls return `None`.
    pub fn initialize(&mut self, scaler: &Scaler<'_>) -> Option<ScalingReport> {
        let report = scaler.initialize(&mut self.companion)?;
        self.controller.clear_and_evaluate();
        Some(report)
    }

    /// Requests a new override target.
    pub fn set_override(&self, target: Option<FormId>) -> bool {
        self.controller.set_desired(target)
    }

    pub fn desired_override(&self) -> Option<FormId> {
        self.controller.desired()
    }

    pub fn controller(&self) -> &OverrideController {
        &self.controller
    }

    /// Stops tracking. The returned handle completes once teardown has run.
    pub fn retire(self) -> JoinHandle<()> {
        self.controller.retire()
    }
}
