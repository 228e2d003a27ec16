//! Traits describing the host simulation.
//!
//! The host owns actors, assets and the scripting runtime. This crate only
//! reaches them through the narrow traits defined here, so every policy can be
//! exercised against in-memory doubles.
mod actors;
mod assets;
mod error;

pub use actors::ActorHost;
pub use assets::{AssetSource, FormKind, FormRecord};
pub use error::HostError;
