//! Builder utilities for ergonomic chain construction.
//!
//! These helpers return `Box<dyn Modifier<S>>` so they can be passed straight
//! to [`ModifierChain::add_boxed`](crate::ModifierChain::add_boxed) or nested
//! inside decorators without spelling out `Box::new(...)` each time.

use crate::{AlwaysContinue, Conditional, Flow, FnModifier, Modifier, Terminal};

/// Creates a named modifier from a closure.
///
/// Shorthand for `Box::new(FnModifier::new(name, func))`.
#[inline]
pub fn from_fn<S, F>(name: impl Into<String>, func: F) -> Box<dyn Modifier<S>>
where
    S: 'static,
    F: Fn(&mut S) -> Flow + Send + Sync + 'static,
{
    Box::new(FnModifier::new(name, func))
}

/// Creates a conditional node.
///
/// Shorthand for `Box::new(Conditional::new(predicate, inner))`.
#[inline]
pub fn when<S, P>(predicate: P, inner: Box<dyn Modifier<S>>) -> Box<dyn Modifier<S>>
where
    S: 'static,
    P: Fn(&S) -> bool + Send + Sync + 'static,
{
    Box::new(Conditional::new(predicate, inner))
}

/// Creates an always-continue node.
///
/// Shorthand for `Box::new(AlwaysContinue::new(inner))`.
#[inline]
pub fn always_continue<S: 'static>(inner: Box<dyn Modifier<S>>) -> Box<dyn Modifier<S>> {
    Box::new(AlwaysContinue::new(inner))
}

/// Creates a terminal node.
#[inline]
pub fn terminal<S: 'static>() -> Box<dyn Modifier<S>> {
    Box::new(Terminal)
}
