#![allow(dead_code)]

use std::collections::{HashMap, HashSet, VecDeque};
use std::future::Future;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use companion_content::{BASE_MASTER, OVERHAUL_MARKER, PLUGIN, builtin_source};
use companion_core::{
    AbilityKind, ActorHost, ActorId, AssetSource, CatalogSource, CompanionClass, ExtraDataId,
    FormId, FormKind, FormRecord, FormRef, HostError, InventoryEntry, ObjectHandle,
    OverridePackages, Position,
};
use companion_runtime::{
    EquipRequest, HandlePolicy, HostServices, InventoryHost, OverrideHost, WorldView,
};
use tokio::sync::{oneshot, watch};

pub const PLAYER: ActorId = ActorId(0x14);
pub const GUARD_ACTOR: ActorId = ActorId(0x1100);
pub const KNIGHT_ACTOR: ActorId = ActorId(0x1200);
pub const WARLOCK_ACTOR: ActorId = ActorId(0x1300);

/// Upper bound for anything a test waits on.
pub const PATIENCE: Duration = Duration::from_secs(5);

pub async fn within<F: Future>(future: F) -> F::Output {
    tokio::time::timeout(PATIENCE, future)
        .await
        .expect("timed out waiting for the driver")
}

/// Polls `condition` until it holds, yielding to other tasks in between.
pub async fn eventually(mut condition: impl FnMut() -> bool) {
    within(async {
        while !condition() {
            tokio::time::sleep(Duration::from_millis(1)).await;
        }
    })
    .await
}

/// Asset ids are `file index << 24 | local id`.
pub fn id_of(form: &FormRef) -> FormId {
    let index = match form.source.as_str() {
        BASE_MASTER => 0x00,
        OVERHAUL_MARKER => 0x06,
        PLUGIN => 0x05,
        _ => 0x7F,
    };
    FormId(index << 24 | (form.local_id & 0x00FF_FFFF))
}

pub fn handle_of(actor: ActorId) -> ObjectHandle {
    ObjectHandle(u64::from(actor.0) | 0xFF00_0000_0000)
}

pub fn packages() -> OverridePackages {
    let source = builtin_source();
    OverridePackages {
        heal: id_of(&source.packages.heal),
        heal_guard: id_of(&source.packages.heal_guard),
        heal_knight: id_of(&source.packages.heal_knight),
        heal_self: id_of(&source.packages.heal_self),
    }
}

pub fn base_form(class: CompanionClass) -> FormId {
    id_of(builtin_source().classes.get(class))
}

// ============================================================================
// Assets
// ============================================================================

/// Answers for every reference a catalog source makes.
pub struct Installed {
    records: HashMap<FormRef, FormRecord>,
    files: HashSet<String>,
}

impl Installed {
    pub fn new(source: &CatalogSource) -> Self {
        let mut records = HashMap::new();
        let mut add = |form: &FormRef, kind: FormKind| {
            records.insert(form.clone(), FormRecord::new(id_of(form), kind, format!("{kind} {:06X}", form.local_id)));
        };
        for class in CompanionClass::ALL {
            add(source.classes.get(class), FormKind::Npc);
        }
        let packages = &source.packages;
        for form in [&packages.heal, &packages.heal_guard, &packages.heal_knight, &packages.heal_self] {
            add(form, FormKind::Package);
        }
        for rules in [&source.base, &source.overhaul] {
            for unlock in &rules.unlocks {
                add(&unlock.form, FormKind::Perk);
            }
            for item in &rules.items {
                add(&item.form, FormKind::Spell);
            }
        }
        let files = HashSet::from([PLUGIN.to_string(), BASE_MASTER.to_string()]);
        Self { records, files }
    }

    /// Nothing is loaded; every lookup fails.
    pub fn empty() -> Self {
        Self {
            records: HashMap::new(),
            files: HashSet::new(),
        }
    }
}

impl AssetSource for Installed {
    fn lookup(&self, form: &FormRef) -> Option<FormRecord> {
        if !self.files.contains(&form.source) {
            return None;
        }
        self.records.get(form).cloned()
    }

    fn has_source(&self, file: &str) -> bool {
        self.files.contains(file)
    }
}

// ============================================================================
// Actors and world
// ============================================================================

#[derive(Default)]
struct WorldState {
    bases: HashMap<ActorId, FormId>,
    dead: HashSet<ActorId>,
    health: HashMap<ActorId, f32>,
    positions: HashMap<ActorId, Position>,
    in_combat: bool,
}

/// Actors with no skills worth mirroring; health and positions are scripted.
#[derive(Default)]
pub struct TestWorld {
    state: Mutex<WorldState>,
}

impl TestWorld {
    pub fn with_roster() -> Self {
        let world = Self::default();
        world.spawn(GUARD_ACTOR, CompanionClass::Guard);
        world.spawn(KNIGHT_ACTOR, CompanionClass::Knight);
        world.spawn(WARLOCK_ACTOR, CompanionClass::Warlock);
        world
    }

    pub fn spawn(&self, actor: ActorId, class: CompanionClass) {
        self.state.lock().unwrap().bases.insert(actor, base_form(class));
    }

    pub fn kill(&self, actor: ActorId) {
        let mut state = self.state.lock().unwrap();
        state.dead.insert(actor);
        state.health.insert(actor, 0.0);
    }

    pub fn hurt(&self, actor: ActorId, health: f32) {
        self.state.lock().unwrap().health.insert(actor, health);
    }

    pub fn place(&self, actor: ActorId, position: Position) {
        self.state.lock().unwrap().positions.insert(actor, position);
    }

    pub fn set_combat(&self, in_combat: bool) {
        self.state.lock().unwrap().in_combat = in_combat;
    }
}

impl ActorHost for TestWorld {
    fn player(&self) -> ActorId {
        PLAYER
    }

    fn base_form(&self, actor: ActorId) -> Option<FormId> {
        self.state.lock().unwrap().bases.get(&actor).copied()
    }

    fn is_dead(&self, actor: ActorId) -> bool {
        self.state.lock().unwrap().dead.contains(&actor)
    }

    fn base_ability(&self, _actor: ActorId, _kind: AbilityKind) -> Result<f32, HostError> {
        Ok(15.0)
    }

    fn set_base_ability(&self, _actor: ActorId, _kind: AbilityKind, _value: f32) -> Result<(), HostError> {
        Ok(())
    }

    fn has_unlock(&self, _actor: ActorId, _unlock: FormId) -> bool {
        false
    }

    fn unlock_conditions_met(&self, _actor: ActorId, _unlock: FormId) -> bool {
        false
    }

    fn grant_unlock(&self, _actor: ActorId, _unlock: FormId) -> Result<(), HostError> {
        Ok(())
    }

    fn has_item(&self, _actor: ActorId, _item: FormId) -> bool {
        false
    }

    fn grant_item(&self, _actor: ActorId, _item: FormId) -> Result<(), HostError> {
        Ok(())
    }
}

impl WorldView for TestWorld {
    fn health(&self, actor: ActorId) -> f32 {
        self.state.lock().unwrap().health.get(&actor).copied().unwrap_or(1.0)
    }

    fn in_combat(&self, _actor: ActorId) -> bool {
        self.state.lock().unwrap().in_combat
    }

    fn position(&self, actor: ActorId) -> Position {
        self.state
            .lock()
            .unwrap()
            .positions
            .get(&actor)
            .copied()
            .unwrap_or(Position::ORIGIN)
    }
}

// ============================================================================
// Handles
// ============================================================================

#[derive(Default)]
pub struct TestHandles {
    unavailable: Mutex<HashSet<ActorId>>,
}

impl TestHandles {
    pub fn revoke(&self, actor: ActorId) {
        self.unavailable.lock().unwrap().insert(actor);
    }

    pub fn restore(&self, actor: ActorId) {
        self.unavailable.lock().unwrap().remove(&actor);
    }
}

impl HandlePolicy for TestHandles {
    fn handle_for(&self, actor: ActorId) -> Result<ObjectHandle, HostError> {
        if self.unavailable.lock().unwrap().contains(&actor) {
            return Err(HostError::HandleUnavailable { actor });
        }
        Ok(handle_of(actor))
    }
}

// ============================================================================
// Overrides
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Call {
    Add {
        handle: ObjectHandle,
        package: FormId,
        priority: i32,
        force: bool,
    },
    Remove {
        handle: ObjectHandle,
        package: FormId,
    },
    Clear {
        handle: ObjectHandle,
    },
    Evaluate {
        handle: ObjectHandle,
    },
}

impl Call {
    pub fn handle(&self) -> ObjectHandle {
        match *self {
            Call::Add { handle, .. }
            | Call::Remove { handle, .. }
            | Call::Clear { handle }
            | Call::Evaluate { handle } => handle,
        }
    }

    pub fn add(actor: ActorId, package: FormId) -> Self {
        Call::Add {
            handle: handle_of(actor),
            package,
            priority: 2,
            force: true,
        }
    }

    pub fn remove(actor: ActorId, package: FormId) -> Self {
        Call::Remove {
            handle: handle_of(actor),
            package,
        }
    }

    pub fn evaluate(actor: ActorId) -> Self {
        Call::Evaluate {
            handle: handle_of(actor),
        }
    }

    pub fn clear(actor: ActorId) -> Self {
        Call::Clear {
            handle: handle_of(actor),
        }
    }
}

type Ack = oneshot::Sender<Result<(), HostError>>;

#[derive(Default)]
struct OverrideState {
    calls: Vec<Call>,
    pending: VecDeque<(Call, Ack)>,
    refused: HashSet<&'static str>,
}

/// Override host that records every call.
///
/// In manual mode each dispatched call waits until the test releases it with
/// [`ack`](Self::ack) or [`fail`](Self::fail), in dispatch order.
pub struct ScriptedOverrides {
    manual: bool,
    state: Mutex<OverrideState>,
    changes: watch::Sender<usize>,
}

impl ScriptedOverrides {
    pub fn auto() -> Self {
        Self::new(false)
    }

    pub fn manual() -> Self {
        Self::new(true)
    }

    fn new(manual: bool) -> Self {
        Self {
            manual,
            state: Mutex::new(OverrideState::default()),
            changes: watch::channel(0).0,
        }
    }

    pub fn refuse(&self, function: &'static str) {
        self.state.lock().unwrap().refused.insert(function);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.state.lock().unwrap().calls.clone()
    }

    pub fn calls_for(&self, actor: ActorId) -> Vec<Call> {
        let handle = handle_of(actor);
        self.calls().into_iter().filter(|call| call.handle() == handle).collect()
    }

    pub fn pending(&self) -> usize {
        self.state.lock().unwrap().pending.len()
    }

    pub async fn wait_for_calls(&self, count: usize) {
        let mut changes = self.changes.subscribe();
        within(changes.wait_for(|_| self.calls().len() >= count))
            .await
            .expect("override host dropped");
    }

    /// Releases the oldest pending call with `result` and returns what it was.
    pub async fn release(&self, result: Result<(), HostError>) -> Call {
        let mut changes = self.changes.subscribe();
        let (call, ack) = within(async {
            loop {
                {
                    let mut state = self.state.lock().unwrap();
                    if let Some(pending) = state.pending.pop_front() {
                        break pending;
                    }
                }
                changes.changed().await.expect("override host dropped");
            }
        })
        .await;
        let _ = ack.send(result);
        call
    }

    pub async fn ack(&self) -> Call {
        self.release(Ok(())).await
    }

    pub async fn fail(&self, function: &'static str) -> Call {
        self.release(Err(HostError::DispatchFailed { function })).await
    }

    async fn dispatch(&self, function: &'static str, call: Call) -> Result<(), HostError> {
        let (refused, waiter) = {
            let mut state = self.state.lock().unwrap();
            state.calls.push(call);
            let refused = state.refused.contains(function);
            let waiter = (self.manual && !refused).then(|| {
                let (ack, waiter) = oneshot::channel();
                state.pending.push_back((call, ack));
                waiter
            });
            (refused, waiter)
        };
        self.changes.send_modify(|count| *count += 1);

        if refused {
            return Err(HostError::DispatchFailed { function });
        }
        match waiter {
            Some(waiter) => waiter
                .await
                .unwrap_or(Err(HostError::DispatchFailed { function })),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl OverrideHost for ScriptedOverrides {
    async fn add_override(
        &self,
        handle: ObjectHandle,
        package: FormId,
        priority: i32,
        force: bool,
    ) -> Result<(), HostError> {
        let call = Call::Add {
            handle,
            package,
            priority,
            force,
        };
        self.dispatch("AddPackageOverride", call).await
    }

    async fn remove_override(&self, handle: ObjectHandle, package: FormId) -> Result<(), HostError> {
        self.dispatch("RemovePackageOverride", Call::Remove { handle, package })
            .await
    }

    async fn clear_override(&self, handle: ObjectHandle) -> Result<(), HostError> {
        self.dispatch("ClearPackageOverride", Call::Clear { handle }).await
    }

    async fn evaluate_package(&self, handle: ObjectHandle) -> Result<(), HostError> {
        self.dispatch("EvaluatePackage", Call::Evaluate { handle }).await
    }
}

// ============================================================================
// Inventory
// ============================================================================

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InventoryOp {
    Unequip(ActorId, FormId, Option<ExtraDataId>),
    Equip(ObjectHandle, EquipRequest),
    Refresh,
}

#[derive(Default)]
pub struct TestInventory {
    entries: Mutex<HashMap<ActorId, Vec<InventoryEntry>>>,
    ops: Mutex<Vec<InventoryOp>>,
    refuse_equip: Mutex<bool>,
}

impl TestInventory {
    pub fn stock(&self, actor: ActorId, entries: Vec<InventoryEntry>) {
        self.entries.lock().unwrap().insert(actor, entries);
    }

    pub fn refuse_equip(&self) {
        *self.refuse_equip.lock().unwrap() = true;
    }

    pub fn ops(&self) -> Vec<InventoryOp> {
        self.ops.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventoryHost for TestInventory {
    fn inventory(&self, actor: ActorId) -> Vec<InventoryEntry> {
        self.entries.lock().unwrap().get(&actor).cloned().unwrap_or_default()
    }

    fn unequip(&self, actor: ActorId, item: FormId, extra: Option<ExtraDataId>) {
        self.ops.lock().unwrap().push(InventoryOp::Unequip(actor, item, extra));
    }

    async fn equip(&self, handle: ObjectHandle, request: EquipRequest) -> Result<(), HostError> {
        self.ops.lock().unwrap().push(InventoryOp::Equip(handle, request));
        if *self.refuse_equip.lock().unwrap() {
            return Err(HostError::DispatchFailed {
                function: "EquipItemEx",
            });
        }
        Ok(())
    }

    fn refresh_inventory_ui(&self) {
        self.ops.lock().unwrap().push(InventoryOp::Refresh);
    }
}

// ============================================================================
// Harness
// ============================================================================

pub struct Harness {
    pub world: Arc<TestWorld>,
    pub overrides: Arc<ScriptedOverrides>,
    pub handles: Arc<TestHandles>,
    pub inventory: Arc<TestInventory>,
    pub services: HostServices,
}

impl Harness {
    pub fn new(assets: Installed, overrides: ScriptedOverrides) -> Self {
        let world = Arc::new(TestWorld::with_roster());
        let overrides = Arc::new(overrides);
        let handles = Arc::new(TestHandles::default());
        let inventory = Arc::new(TestInventory::default());
        let services = HostServices::new(
            Arc::new(assets),
            world.clone(),
            overrides.clone(),
            handles.clone(),
            inventory.clone(),
            world.clone(),
        );
        Self {
            world,
            overrides,
            handles,
            inventory,
            services,
        }
    }

    /// Built-in content installed, overrides acknowledged immediately.
    pub fn installed() -> Self {
        Self::new(Installed::new(&builtin_source()), ScriptedOverrides::auto())
    }
}
