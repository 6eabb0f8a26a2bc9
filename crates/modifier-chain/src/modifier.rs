//! Core modifier trait.
//!
//! This module defines the [`Modifier`] trait, the unit of mutation logic
//! attached to a [`ModifierChain`](crate::ModifierChain). The trait is
//! generic over a subject type `S`, the plain data record that every node in
//! a chain reads and mutates in turn.
//!
//! Modifiers never see the chain itself. Traversal (the "next" pointer and
//! forwarding) lives in [`Link`](crate::Link), so a concrete modifier only
//! implements its own effect and its continue/halt decision.

use core::any::type_name;

use crate::Flow;

/// A unit of mutation logic that can be attached to a chain.
pub trait Modifier<S>: Send + Sync {
    /// Apply this node's effect to the subject.
    ///
    /// # Arguments
    ///
    /// * `subject` - Mutable reference to the subject. Earlier nodes have
    ///   already applied their effects; later nodes will see whatever this
    ///   node leaves behind.
    ///
    /// # Returns
    ///
    /// - `Flow::Continue` to forward the subject to the next node
    /// - `Flow::Halt` to stop the chain here
    fn modify(&self, subject: &mut S) -> Flow;

    /// Label used in logs and in [`ChainOutcome::halted_by`](crate::ChainOutcome).
    ///
    /// Defaults to the unqualified type name.
    fn name(&self) -> &str {
        short_type_name::<Self>()
    }
}

/// Blanket implementation for boxed modifiers.
///
/// This allows `Box<dyn Modifier<S>>` to also implement `Modifier<S>`,
/// enabling dynamic dispatch and heterogeneous chains.
impl<S> Modifier<S> for Box<dyn Modifier<S>> {
    #[inline]
    fn modify(&self, subject: &mut S) -> Flow {
        (**self).modify(subject)
    }

    #[inline]
    fn name(&self) -> &str {
        (**self).name()
    }
}

/// Modifier backed by a closure.
///
/// The closure is the strategy: the same node type carries any mutation
/// supplied at construction time.
pub struct FnModifier<S> {
    name: String,
    func: Box<dyn Fn(&mut S) -> Flow + Send + Sync>,
}

impl<S> FnModifier<S> {
    /// Creates a named modifier from a closure.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&mut S) -> Flow + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Box::new(func),
        }
    }
}

impl<S> Modifier<S> for FnModifier<S> {
    fn modify(&self, subject: &mut S) -> Flow {
        (self.func)(subject)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

impl<S> core::fmt::Debug for FnModifier<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("FnModifier")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

/// `type_name` without the module path (`a::b::Foo<c::Bar>` -> `Foo<c::Bar>`).
fn short_type_name<T: ?Sized>() -> &'static str {
    let full = type_name::<T>();
    let head = full.split('<').next().unwrap_or(full);
    match head.rfind("::") {
        Some(idx) => &full[idx + 2..],
        None => full,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Counter;
    impl Modifier<i32> for Counter {
        fn modify(&self, subject: &mut i32) -> Flow {
            *subject += 1;
            Flow::Continue
        }
    }

    #[test]
    fn default_name_strips_module_path() {
        assert_eq!(Counter.name(), "Counter");
    }

    #[test]
    fn boxed_modifier_delegates() {
        let boxed: Box<dyn Modifier<i32>> = Box::new(Counter);
        let mut value = 0;
        assert_eq!(boxed.modify(&mut value), Flow::Continue);
        assert_eq!(value, 1);
        assert_eq!(boxed.name(), "Counter");
    }

    #[test]
    fn fn_modifier_runs_closure() {
        let triple = FnModifier::new("triple", |v: &mut i32| {
            *v *= 3;
            Flow::Halt
        });
        let mut value = 2;
        assert_eq!(triple.modify(&mut value), Flow::Halt);
        assert_eq!(value, 6);
        assert_eq!(triple.name(), "triple");
    }
}
