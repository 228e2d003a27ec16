//! Minimal behavior tree for per-tick decisions.
//!
//! Trees are evaluated once per host tick against an owned snapshot of the
//! world. Nothing is scheduled across ticks, so there is no `Running` state:
//! every node answers immediately.
//!
//! # Architecture
//!
//! - [`Behavior`]: the node trait
//! - [`Status`]: `Success` or `Failure`
//! - Leaves: [`Condition`] (reads the context), [`Action`] (writes a decision)
//! - Composites: [`Sequence`], [`Selector`]
//!
//! The [`builder`] functions assemble boxed trees without the nesting noise.

pub mod behavior;
pub mod builder;
pub mod composite;
pub mod leaf;
pub mod status;

pub use behavior::Behavior;
pub use composite::{Selector, Sequence};
pub use leaf::{Action, Condition};
pub use status::Status;
