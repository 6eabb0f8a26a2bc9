//! Next-pointer helper shared by every node.
//!
//! A chain is a singly linked list of [`Node`]s. Each node pairs a boxed
//! [`Modifier`] with a [`Link`] to the rest of the list, so appending and
//! forwarding are written once here instead of in every concrete modifier.

use crate::{ChainOutcome, Modifier};

/// A single element of a chain: one modifier plus the link to the next node.
pub struct Node<S> {
    modifier: Box<dyn Modifier<S>>,
    link: Link<S>,
}

impl<S> Node<S> {
    /// Creates a detached node.
    pub fn new(modifier: Box<dyn Modifier<S>>) -> Self {
        Self {
            modifier,
            link: Link::new(),
        }
    }

    /// The modifier held by this node.
    pub fn modifier(&self) -> &dyn Modifier<S> {
        self.modifier.as_ref()
    }

    /// Appends `modifier` to the end of the list reachable from this node.
    pub fn add(&mut self, modifier: Box<dyn Modifier<S>>) {
        self.link.add(modifier);
    }

    /// Runs this node, then the rest of the list unless this node halts.
    pub fn handle(&self, subject: &mut S) -> ChainOutcome {
        let flow = self.modifier.modify(subject);
        if flow.is_halt() {
            return ChainOutcome::halted(1, self.modifier.name());
        }
        let rest = self.link.forward(subject, false);
        ChainOutcome {
            applied: rest.applied + 1,
            halted_by: rest.halted_by,
        }
    }
}

/// Optional pointer to the next node.
///
/// The head of a [`ModifierChain`](crate::ModifierChain) is a bare `Link`
/// with no modifier of its own.
pub struct Link<S> {
    next: Option<Box<Node<S>>>,
}

impl<S> Link<S> {
    /// Creates an empty link.
    pub const fn new() -> Self {
        Self { next: None }
    }

    /// Returns `true` if nothing is attached after this link.
    pub fn is_empty(&self) -> bool {
        self.next.is_none()
    }

    /// Appends a node holding `modifier` at the end of the reachable list.
    ///
    /// Repeated calls with equivalent modifiers attach repeated nodes. Walks
    /// to the tail with a loop, so stack depth does not grow with chain length.
    pub fn add(&mut self, modifier: Box<dyn Modifier<S>>) {
        let mut slot = &mut self.next;
        while let Some(node) = slot {
            slot = &mut node.link.next;
        }
        *slot = Some(Box::new(Node::new(modifier)));
    }

    /// Runs every node after this link in order, stopping at the first halt.
    ///
    /// Iterative, so stack depth does not grow with chain length.
    pub fn forward(&self, subject: &mut S, trace_nodes: bool) -> ChainOutcome {
        let mut outcome = ChainOutcome::default();
        let mut cursor = self.next.as_deref();

        while let Some(node) = cursor {
            let flow = node.modifier.modify(subject);
            outcome.applied += 1;

            if trace_nodes {
                tracing::trace!(
                    position = outcome.applied - 1,
                    modifier = node.modifier.name(),
                    ?flow,
                    "modifier applied"
                );
            }

            if flow.is_halt() {
                outcome.halted_by = Some(node.modifier.name().to_owned());
                break;
            }
            cursor = node.link.next.as_deref();
        }

        outcome
    }

    /// Iterates over the attached modifiers in attachment order.
    pub fn iter(&self) -> Iter<'_, S> {
        Iter {
            cursor: self.next.as_deref(),
        }
    }
}

impl<S> Default for Link<S> {
    fn default() -> Self {
        Self::new()
    }
}

// Unlink iteratively; the default recursive drop would use one frame per node.
impl<S> Drop for Link<S> {
    fn drop(&mut self) {
        let mut next = self.next.take();
        while let Some(mut node) = next {
            next = node.link.next.take();
        }
    }
}

/// Iterator over the modifiers reachable from a [`Link`].
pub struct Iter<'a, S> {
    cursor: Option<&'a Node<S>>,
}

impl<'a, S> Iterator for Iter<'a, S> {
    type Item = &'a dyn Modifier<S>;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.cursor?;
        self.cursor = node.link.next.as_deref();
        Some(node.modifier.as_ref())
    }
}
