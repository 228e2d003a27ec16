//! Progression rules and equipment policy for player companions.
//!
//! `companion-core` holds everything that can be decided without waiting on
//! the host: the [`Catalog`] built from authored tables, the one-shot
//! [`Scaler`], and the pure equip rules. Host access goes through the traits
//! in [`env`]; the asynchronous override and equip plumbing lives in the
//! runtime crate.
pub mod ability;
pub mod catalog;
pub mod config;
pub mod env;
pub mod equipment;
pub mod error;
pub mod scaling;
pub mod types;

pub use ability::{AbilityKind, CompanionClass};
pub use catalog::{
    Catalog, CatalogError, CatalogSource, ClassAbilities, ClassRefs, GrantableItem,
    ItemEntry, OverridePackages, PackageRefs, RuleSet, RulesetVariant, SupportAction, UnlockEntry,
    UnlockGroup, UnlockRule,
};
pub use config::{CompanionConfig, SupportThresholds};
pub use env::{ActorHost, AssetSource, FormKind, FormRecord, HostError};
pub use equipment::{ArmorForm, ArmorWeight, InventoryEntry, ItemForm, SlotMask, can_equip, conflicts};
pub use error::{CompanionError, ErrorSeverity};
pub use scaling::{Companion, Raise, Scaler, ScalingReport};
pub use types::{ActorId, ExtraDataId, FormId, FormRef, ObjectHandle, Position};
