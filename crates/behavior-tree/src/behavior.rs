//! The node trait.

use crate::Status;

/// A node evaluated against a context `C`.
///
/// Conditions only read `ctx`; actions record their outcome in it. Nodes are
/// `Send + Sync` so a built tree can be shared by the task that ticks it.
pub trait Behavior<C>: Send + Sync {
    fn tick(&self, ctx: &mut C) -> Status;
}

impl<C> Behavior<C> for Box<dyn Behavior<C>> {
    #[inline]
    fn tick(&self, ctx: &mut C) -> Status {
        (**self).tick(ctx)
    }
}
