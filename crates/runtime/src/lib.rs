//! Runtime orchestration for player companions.
//!
//! This crate sits between the host's event stream and the pure rules in
//! `companion-core`. The embedding layer owns a tokio runtime, builds a
//! [`CompanionManager`] over its [`HostServices`], and feeds every host
//! notification through a [`Dispatcher`].
//!
//! Modules are organized by responsibility:
//! - [`manager`] owns the catalog and the per-class roster
//! - [`controller`] serializes behavior override calls per companion
//! - [`equipment`] resolves slot conflicts before equipping armor
//! - [`support`] picks the support companion's heal target each tick
//! - [`events`] maps host events to single-purpose listeners
//! - [`host`] declares the asynchronous host interfaces
//! - [`config`] and [`logging`] cover environment configuration and log output
pub mod companion;
pub mod config;
pub mod controller;
pub mod equipment;
pub mod error;
pub mod events;
pub mod host;
pub mod logging;
pub mod manager;
pub mod support;

pub use companion::TrackedCompanion;
pub use config::{LogConfig, RuntimeConfig};
pub use controller::{Completion, OverrideContext, OverrideController};
pub use equipment::{EquipOutcome, EquipmentResolver};
pub use error::{Result, RuntimeError};
pub use events::{Dispatcher, EventKind, EventListener, HostEvent};
pub use host::{
    EquipRequest, HandlePolicy, HostServices, InventoryHost, OverrideHost, WorldView,
};
pub use manager::CompanionManager;
pub use support::{SupportPolicy, SupportSnapshot, Vitals};
