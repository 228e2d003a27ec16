//! Shorthand constructors returning boxed nodes.

use crate::{Action, Behavior, Condition, Selector, Sequence};

#[inline]
pub fn sequence<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Sequence::new(children))
}

#[inline]
pub fn selector<C: 'static>(children: Vec<Box<dyn Behavior<C>>>) -> Box<dyn Behavior<C>> {
    Box::new(Selector::new(children))
}

#[inline]
pub fn condition<C: 'static>(
    label: &'static str,
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Condition::new(label, predicate))
}

#[inline]
pub fn action<C: 'static>(
    label: &'static str,
    effect: impl Fn(&mut C) + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    Box::new(Action::new(label, effect))
}

/// `sequence([condition(label, predicate), action(label, effect)])`: the
/// most common shape of a priority branch.
#[inline]
pub fn when<C: 'static>(
    label: &'static str,
    predicate: impl Fn(&C) -> bool + Send + Sync + 'static,
    effect: impl Fn(&mut C) + Send + Sync + 'static,
) -> Box<dyn Behavior<C>> {
    sequence(vec![condition(label, predicate), action(label, effect)])
}
