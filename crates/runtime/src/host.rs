//! Asynchronous host interfaces.
//!
//! The host's scripting calls complete through a callback some time after
//! dispatch. Here each call is an `async fn` that resolves when the host
//! acknowledges it, or immediately with an error if dispatch was refused.
//! None of these calls may be issued concurrently for the same actor; the
//! override driver and the equip resolver enforce that.

use std::sync::Arc;

use async_trait::async_trait;
use companion_core::{
    ActorHost, ActorId, AssetSource, ExtraDataId, FormId, HostError, InventoryEntry, ObjectHandle,
    Position,
};

/// Behavior override calls (`AddPackageOverride` and friends).
#[async_trait]
pub trait OverrideHost: Send + Sync {
    async fn add_override(
        &self,
        handle: ObjectHandle,
        package: FormId,
        priority: i32,
        force: bool,
    ) -> Result<(), HostError>;

    async fn remove_override(&self, handle: ObjectHandle, package: FormId) -> Result<(), HostError>;

    /// Removes every override on the actor, including ones this crate did not add.
    async fn clear_override(&self, handle: ObjectHandle) -> Result<(), HostError>;

    /// Asks the host to re-run AI package selection for the actor.
    async fn evaluate_package(&self, handle: ObjectHandle) -> Result<(), HostError>;
}

/// Issues scripting handles for actors.
pub trait HandlePolicy: Send + Sync {
    fn handle_for(&self, actor: ActorId) -> Result<ObjectHandle, HostError>;
}

/// Arguments of the host's extended equip call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EquipRequest {
    pub item: FormId,
    /// Equip slot; `0` lets the host choose.
    pub slot: u32,
    pub prevent_removal: bool,
    pub allow_stack: bool,
}

impl EquipRequest {
    pub fn new(item: FormId) -> Self {
        Self {
            item,
            slot: 0,
            prevent_removal: true,
            allow_stack: true,
        }
    }
}

#[async_trait]
pub trait InventoryHost: Send + Sync {
    fn inventory(&self, actor: ActorId) -> Vec<InventoryEntry>;

    /// Synchronous unequip through the host's equip manager.
    fn unequip(&self, actor: ActorId, item: FormId, extra: Option<ExtraDataId>);

    async fn equip(&self, handle: ObjectHandle, request: EquipRequest) -> Result<(), HostError>;

    /// Refreshes the open container UI, if any.
    fn refresh_inventory_ui(&self);
}

/// Live readings used by the support policy.
pub trait WorldView: Send + Sync {
    /// Current health as a fraction of maximum (`0.0` when dead).
    fn health(&self, actor: ActorId) -> f32;

    fn in_combat(&self, actor: ActorId) -> bool;

    fn position(&self, actor: ActorId) -> Position;
}

/// Every host interface the runtime talks to.
#[derive(Clone)]
pub struct HostServices {
    pub assets: Arc<dyn AssetSource>,
    pub actors: Arc<dyn ActorHost>,
    pub overrides: Arc<dyn OverrideHost>,
    pub handles: Arc<dyn HandlePolicy>,
    pub inventory: Arc<dyn InventoryHost>,
    pub world: Arc<dyn WorldView>,
}

impl HostServices {
    pub fn new(
        assets: Arc<dyn AssetSource>,
        actors: Arc<dyn ActorHost>,
        overrides: Arc<dyn OverrideHost>,
        handles: Arc<dyn HandlePolicy>,
        inventory: Arc<dyn InventoryHost>,
        world: Arc<dyn WorldView>,
    ) -> Self {
        Self {
            assets,
            actors,
            overrides,
            handles,
            inventory,
            world,
        }
    }
}
