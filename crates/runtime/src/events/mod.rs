//! Host event routing.
//!
//! Every host notification becomes a [`HostEvent`]. The [`Dispatcher`] maps
//! each [`EventKind`] to exactly one [`EventListener`], which translates the
//! event into a [`CompanionManager`] call.
//!
//! # Error Handling
//!
//! Listener errors never reach the host. They are logged by severity and
//! returned to the embedding layer for inspection:
//! - `RuntimeError::Inactive`: the catalog is not built; the event is dropped
//! - Fatal: logged at error level
//! - Everything else: logged as a warning
mod listeners;

pub use listeners::{
    ActivationListener, EquipListener, JoinListener, LeaveListener, PostLoadListener,
    PreLoadListener, TickListener,
};

use std::collections::HashMap;
use std::sync::Arc;

use companion_core::{ActorId, CatalogSource, CompanionError, ExtraDataId, ItemForm};
use tracing::{error, trace, warn};

use crate::error::{Result, RuntimeError};
use crate::manager::CompanionManager;

/// Notifications the host delivers to the companion feature.
#[derive(Clone, Debug, PartialEq, strum::EnumDiscriminants)]
#[strum_discriminants(name(EventKind))]
#[strum_discriminants(derive(Hash, strum::Display))]
pub enum HostEvent {
    /// World data finished loading; assets can be resolved.
    DataLoaded,
    PreLoadGame,
    PostLoadGame { followers: Vec<ActorId> },
    FollowerAdded { actor: ActorId },
    FollowerRemoved { actor: ActorId },
    /// Periodic tick from the host's update loop.
    Update,
    EquipRequested {
        actor: ActorId,
        item: ItemForm,
        worn: bool,
        extra: Option<ExtraDataId>,
    },
}

impl HostEvent {
    pub fn kind(&self) -> EventKind {
        EventKind::from(self)
    }
}

/// Handles one kind of host event.
pub trait EventListener: Send + Sync {
    fn name(&self) -> &'static str;

    fn kind(&self) -> EventKind;

    /// Only called with events of [`Self::kind`].
    fn handle(&self, manager: &mut CompanionManager, event: &HostEvent) -> Result<()>;
}

/// Routes events to their listener.
pub struct Dispatcher {
    listeners: HashMap<EventKind, Arc<dyn EventListener>>,
}

impl Dispatcher {
    /// Later listeners replace earlier ones of the same kind.
    pub fn new(listeners: Vec<Arc<dyn EventListener>>) -> Self {
        let listeners = listeners
            .into_iter()
            .map(|listener| (listener.kind(), listener))
            .collect();
        Self { listeners }
    }

    /// One listener per event kind, activating from `source`.
    pub fn with_defaults(source: CatalogSource) -> Self {
        Self::new(vec![
            Arc::new(ActivationListener::new(source)) as Arc<dyn EventListener>,
            Arc::new(PreLoadListener),
            Arc::new(PostLoadListener),
            Arc::new(JoinListener),
            Arc::new(LeaveListener),
            Arc::new(TickListener),
            Arc::new(EquipListener),
        ])
    }

    pub fn listener(&self, kind: EventKind) -> Option<&Arc<dyn EventListener>> {
        self.listeners.get(&kind)
    }

    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    pub fn dispatch(&self, manager: &mut CompanionManager, event: &HostEvent) -> Result<()> {
        let kind = event.kind();
        let Some(listener) = self.listeners.get(&kind) else {
            trace!(%kind, "no listener");
            return Ok(());
        };

        let result = listener.handle(manager, event);
        if let Err(error) = &result {
            match error {
                RuntimeError::Inactive => trace!(%kind, "manager inactive; event dropped"),
                error if error.severity().is_fatal() => {
                    error!(listener = listener.name(), code = error.error_code(), %error, "listener failed")
                }
                error => {
                    warn!(listener = listener.name(), code = error.error_code(), %error, "listener failed")
                }
            }
        }
        result
    }
}
