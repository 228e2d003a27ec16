use companion_core::CatalogSource;
use tracing::debug;

use super::{EventKind, EventListener, HostEvent};
use crate::error::Result;
use crate::manager::CompanionManager;

/// Builds the catalog once world data is available.
pub struct ActivationListener {
    source: CatalogSource,
}

impl ActivationListener {
    pub fn new(source: CatalogSource) -> Self {
        Self { source }
    }
}

impl EventListener for ActivationListener {
    fn name(&self) -> &'static str {
        "activation"
    }

    fn kind(&self) -> EventKind {
        EventKind::DataLoaded
    }

    fn handle(&self, manager: &mut CompanionManager, _event: &HostEvent) -> Result<()> {
        manager.activate(&self.source).map(drop)
    }
}

pub struct PreLoadListener;

impl EventListener for PreLoadListener {
    fn name(&self) -> &'static str {
        "pre_load"
    }

    fn kind(&self) -> EventKind {
        EventKind::PreLoadGame
    }

    fn handle(&self, manager: &mut CompanionManager, _event: &HostEvent) -> Result<()> {
        manager.pre_load_game()
    }
}

pub struct PostLoadListener;

impl EventListener for PostLoadListener {
    fn name(&self) -> &'static str {
        "post_load"
    }

    fn kind(&self) -> EventKind {
        EventKind::PostLoadGame
    }

    fn handle(&self, manager: &mut CompanionManager, event: &HostEvent) -> Result<()> {
        if let HostEvent::PostLoadGame { followers } = event {
            manager.post_load_game(followers)?;
        }
        Ok(())
    }
}

pub struct JoinListener;

impl EventListener for JoinListener {
    fn name(&self) -> &'static str {
        "join"
    }

    fn kind(&self) -> EventKind {
        EventKind::FollowerAdded
    }

    fn handle(&self, manager: &mut CompanionManager, event: &HostEvent) -> Result<()> {
        if let HostEvent::FollowerAdded { actor } = event {
            manager.add(*actor)?;
        }
        Ok(())
    }
}

pub struct LeaveListener;

impl EventListener for LeaveListener {
    fn name(&self) -> &'static str {
        "leave"
    }

    fn kind(&self) -> EventKind {
        EventKind::FollowerRemoved
    }

    fn handle(&self, manager: &mut CompanionManager, event: &HostEvent) -> Result<()> {
        if let HostEvent::FollowerRemoved { actor } = event {
            manager.remove(*actor)?;
        }
        Ok(())
    }
}

/// Feeds the support policy on every host tick.
pub struct TickListener;

impl EventListener for TickListener {
    fn name(&self) -> &'static str {
        "tick"
    }

    fn kind(&self) -> EventKind {
        EventKind::Update
    }

    fn handle(&self, manager: &mut CompanionManager, _event: &HostEvent) -> Result<()> {
        manager.update().map(drop)
    }
}

pub struct EquipListener;

impl EventListener for EquipListener {
    fn name(&self) -> &'static str {
        "equip"
    }

    fn kind(&self) -> EventKind {
        EventKind::EquipRequested
    }

    fn handle(&self, manager: &mut CompanionManager, event: &HostEvent) -> Result<()> {
        if let HostEvent::EquipRequested {
            actor,
            item,
            worn,
            extra,
        } = event
        {
            // The resolver logs the outcome; the task runs detached.
            if manager
                .equip_request(*actor, item.clone(), *worn, *extra)?
                .is_some()
            {
                debug!(%actor, item = %item.id(), "equip scheduled");
            }
        }
        Ok(())
    }
}
