//! Authored progression content and loaders.
//!
//! This crate ships the built-in rule tables for both ruleset variants and
//! loaders for externally authored replacements:
//! - Rule tables (classes, packages, abilities, unlocks, items) via RON
//! - Support tuning (`CompanionConfig`) via TOML
//!
//! Content is turned into a [`companion_core::Catalog`] by the runtime once
//! the host reports that world data has loaded.

pub mod tables;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use tables::{BASE_MASTER, OVERHAUL_MARKER, PLUGIN, builtin_source};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RulesLoader};
