//! Session-wide owner of the catalog and the companion roster.
//!
//! At most one companion per class is tracked. The manager is driven entirely
//! by host events (see [`crate::events`]) and never blocks on the host: every
//! override call runs on the companion's driver, and equips run as spawned
//! tasks.

use std::collections::HashMap;
use std::sync::Arc;

use companion_core::{
    ActorId, Catalog, CatalogSource, CompanionClass, ExtraDataId, ItemForm, Scaler, SupportAction,
    can_equip,
};
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

use crate::companion::TrackedCompanion;
use crate::config::RuntimeConfig;
use crate::controller::OverrideContext;
use crate::equipment::{EquipOutcome, EquipmentResolver};
use crate::error::{Result, RuntimeError};
use crate::host::HostServices;
use crate::support::{SupportPolicy, SupportSnapshot, Vitals};

enum ManagerState {
    /// World data has not loaded yet.
    Inactive,
    Active(Arc<Catalog>),
    /// The catalog could not be built; the feature stays off for the session.
    Failed,
}

pub struct CompanionManager {
    host: HostServices,
    config: RuntimeConfig,
    state: ManagerState,
    roster: HashMap<CompanionClass, TrackedCompanion>,
    policy: SupportPolicy,
    resolver: EquipmentResolver,
    retiring: Vec<JoinHandle<()>>,
}

impl CompanionManager {
    pub fn new(host: HostServices, config: RuntimeConfig) -> Self {
        let policy = SupportPolicy::new(config.support.clone());
        let resolver = EquipmentResolver::new(
            Arc::clone(&host.inventory),
            Arc::clone(&host.handles),
            config.ack_timeout,
        );
        Self {
            host,
            config,
            state: ManagerState::Inactive,
            roster: HashMap::new(),
            policy,
            resolver,
            retiring: Vec::new(),
        }
    }

    /// Builds the catalog from `source`, picking the ruleset variant the
    /// loaded assets call for. A failure is final for this session and is
    /// left to the caller to report.
    pub fn activate(&mut self, source: &CatalogSource) -> Result<Arc<Catalog>> {
        match &self.state {
            ManagerState::Active(catalog) => return Ok(Arc::clone(catalog)),
            ManagerState::Failed => return Err(RuntimeError::Inactive),
            ManagerState::Inactive => {}
        }

        match Catalog::detect(source, self.host.assets.as_ref()) {
            Ok(catalog) => {
                let catalog = Arc::new(catalog);
                info!(variant = %catalog.variant(), "companion manager active");
                self.state = ManagerState::Active(Arc::clone(&catalog));
                Ok(catalog)
            }
            Err(error) => {
                self.state = ManagerState::Failed;
                Err(error.into())
            }
        }
    }

    /// [`activate`](Self::activate) with the built-in rule tables.
    pub fn activate_builtin(&mut self) -> Result<Arc<Catalog>> {
        self.activate(&companion_content::builtin_source())
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ManagerState::Active(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.state, ManagerState::Failed)
    }

    pub fn catalog(&self) -> Option<&Arc<Catalog>> {
        match &self.state {
            ManagerState::Active(catalog) => Some(catalog),
            _ => None,
        }
    }

    pub fn companion(&self, class: CompanionClass) -> Option<&TrackedCompanion> {
        self.roster.get(&class)
    }

    pub fn tracked(&self) -> impl Iterator<Item = &TrackedCompanion> {
        self.roster.values()
    }

    /// Starts tracking `actor` if it is a living companion not already
    /// tracked. Any other companion of the same class is retired first.
    pub fn add(&mut self, actor: ActorId) -> Result<bool> {
        let catalog = Arc::clone(self.active()?);
        let actors = Arc::clone(&self.host.actors);

        if actors.is_dead(actor) {
            debug!(%actor, "ignoring dead actor");
            return Ok(false);
        }
        let Some(class) = actors.base_form(actor).and_then(|base| catalog.class_of(base)) else {
            debug!(%actor, "ignoring actor that is not a companion");
            return Ok(false);
        };
        if self
            .roster
            .get(&class)
            .is_some_and(|tracked| tracked.actor() == actor)
        {
            return Ok(false);
        }

        if let Some(previous) = self.roster.remove(&class) {
            info!(class = class.tag(), previous = %previous.actor(), %actor, "replacing companion");
            self.retire(previous);
        }

        let mut companion = TrackedCompanion::spawn(actor, class, self.override_context(&catalog));
        companion.initialize(&Scaler::new(&catalog, actors.as_ref()));
        info!(class = class.tag(), %actor, "companion added");
        self.roster.insert(class, companion);
        Ok(true)
    }

    /// Stops tracking `actor`. Returns `false` if it was not tracked.
    pub fn remove(&mut self, actor: ActorId) -> Result<bool> {
        self.active()?;
        let Some(class) = self
            .roster
            .iter()
            .find_map(|(class, tracked)| (tracked.actor() == actor).then_some(*class))
        else {
            return Ok(false);
        };
        if let Some(companion) = self.roster.remove(&class) {
            info!(class = class.tag(), %actor, "companion removed");
            self.retire(companion);
        }
        Ok(true)
    }

    /// Re-evaluates the support companion's heal target and hands it to its
    /// driver. Does nothing without a tracked support companion.
    pub fn update(&self) -> Result<Option<SupportAction>> {
        let catalog = self.active()?;
        let Some(support) = self
            .roster
            .values()
            .find(|tracked| tracked.class().is_support())
        else {
            return Ok(None);
        };

        let player = self.host.actors.player();
        let snapshot = SupportSnapshot {
            in_combat: self.host.world.in_combat(player),
            player: self.vitals(player),
            support: self.vitals(support.actor()),
            knight: self
                .roster
                .get(&CompanionClass::Knight)
                .map(|tracked| self.vitals(tracked.actor())),
            guard: self
                .roster
                .get(&CompanionClass::Guard)
                .map(|tracked| self.vitals(tracked.actor())),
        };

        let action = self.policy.decide(snapshot);
        let target = action.map(|action| catalog.packages().for_action(action));
        if support.set_override(target) {
            debug!(?action, "support target changed");
        }
        Ok(action)
    }

    /// Retires every companion ahead of a save being loaded.
    pub fn pre_load_game(&mut self) -> Result<()> {
        self.active()?;
        let count = self.roster.len();
        let retired: Vec<_> = self.roster.drain().map(|(_, companion)| companion).collect();
        for companion in retired {
            self.retire(companion);
        }
        info!(count, "roster cleared before load");
        Ok(())
    }

    /// Re-tracks the followers the loaded save reports. Returns how many were
    /// added.
    pub fn post_load_game(&mut self, followers: &[ActorId]) -> Result<usize> {
        self.active()?;
        let mut added = 0;
        for &actor in followers {
            if self.add(actor)? {
                added += 1;
            }
        }
        info!(followers = followers.len(), added, "roster restored after load");
        Ok(added)
    }

    /// Handles an equip request from the inventory UI.
    ///
    /// The class comes from the roster, or from the actor's base form for a
    /// companion that is not tracked yet. Other actors are rejected.
    ///
    /// A worn item is taken off directly. Otherwise the item is equipped if the
    /// companion's class may wear it; the returned task resolves once the host
    /// acknowledges the equip.
    pub fn equip_request(
        &self,
        actor: ActorId,
        item: ItemForm,
        worn: bool,
        extra: Option<ExtraDataId>,
    ) -> Result<Option<JoinHandle<EquipOutcome>>> {
        let catalog = self.active()?;
        let class = self
            .roster
            .values()
            .find(|tracked| tracked.actor() == actor)
            .map(|tracked| tracked.class())
            .or_else(|| {
                self.host
                    .actors
                    .base_form(actor)
                    .and_then(|base| catalog.class_of(base))
            })
            .ok_or(RuntimeError::NotTracked { actor })?;

        if worn {
            self.resolver.unequip(actor, &item, extra);
            return Ok(None);
        }
        if !can_equip(class, &item) {
            debug!(class = class.tag(), item = %item.id(), "class cannot wear item");
            return Ok(None);
        }

        let resolver = self.resolver.clone();
        Ok(Some(tokio::spawn(async move {
            resolver.equip(actor, &item).await
        })))
    }

    /// Retired drivers whose teardown has not finished yet.
    pub fn pending_teardowns(&mut self) -> usize {
        self.retiring.retain(|driver| !driver.is_finished());
        self.retiring.len()
    }

    /// Waits until every retired companion has finished its teardown.
    pub async fn drain(&mut self) {
        for driver in std::mem::take(&mut self.retiring) {
            if let Err(error) = driver.await {
                warn!(%error, "override driver ended abnormally");
            }
        }
    }

    /// Retires everything and waits for teardown.
    pub async fn shutdown(mut self) {
        for (_, companion) in self.roster.drain() {
            self.retiring.push(companion.retire());
        }
        self.drain().await;
    }

    fn retire(&mut self, companion: TrackedCompanion) {
        self.retiring.retain(|driver| !driver.is_finished());
        self.retiring.push(companion.retire());
    }

    fn active(&self) -> Result<&Arc<Catalog>> {
        match &self.state {
            ManagerState::Active(catalog) => Ok(catalog),
            _ => Err(RuntimeError::Inactive),
        }
    }

    fn override_context(&self, catalog: &Catalog) -> OverrideContext {
        OverrideContext {
            overrides: Arc::clone(&self.host.overrides),
            handles: Arc::clone(&self.host.handles),
            packages: *catalog.packages(),
            priority: self.config.override_priority,
            ack_timeout: self.config.ack_timeout,
        }
    }

    fn vitals(&self, actor: ActorId) -> Vitals {
        Vitals::new(
            self.host.actors.is_dead(actor),
            self.host.world.health(actor),
            self.host.world.position(actor),
        )
    }
}
