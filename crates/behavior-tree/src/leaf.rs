//! Leaf nodes built from closures.

use crate::{Behavior, Status};

type Predicate<C> = Box<dyn Fn(&C) -> bool + Send + Sync>;
type Effect<C> = Box<dyn Fn(&mut C) + Send + Sync>;

/// Succeeds when the predicate holds. Never mutates the context.
pub struct Condition<C> {
    label: &'static str,
    predicate: Predicate<C>,
}

impl<C> Condition<C> {
    pub fn new(label: &'static str, predicate: impl Fn(&C) -> bool + Send + Sync + 'static) -> Self {
        Self {
            label,
            predicate: Box::new(predicate),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C> Behavior<C> for Condition<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        Status::from((self.predicate)(ctx))
    }
}

/// Applies its effect to the context and succeeds.
pub struct Action<C> {
    label: &'static str,
    effect: Effect<C>,
}

impl<C> Action<C> {
    pub fn new(label: &'static str, effect: impl Fn(&mut C) + Send + Sync + 'static) -> Self {
        Self {
            label,
            effect: Box::new(effect),
        }
    }

    pub fn label(&self) -> &'static str {
        self.label
    }
}

impl<C> Behavior<C> for Action<C> {
    fn tick(&self, ctx: &mut C) -> Status {
        (self.effect)(ctx);
        Status::Success
    }
}
