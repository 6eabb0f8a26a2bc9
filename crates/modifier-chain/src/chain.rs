//! The chain composition root.
//!
//! [`ModifierChain`] owns the subject and the head [`Link`] of an
//! append-only list of modifiers. Running the chain walks the list in
//! attachment order; each node sees the subject exactly as the previous node
//! left it, which is what makes ordering observable.

use crate::{ChainConfig, ChainError, Link, Modifier};

/// Result of one pass over a chain.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ChainOutcome {
    /// Number of modifiers whose `modify` ran, the halting one included.
    pub applied: usize,

    /// Name of the modifier that stopped propagation, if any.
    pub halted_by: Option<String>,
}

impl ChainOutcome {
    pub(crate) fn halted(applied: usize, name: &str) -> Self {
        Self {
            applied,
            halted_by: Some(name.to_owned()),
        }
    }

    /// Returns `true` if some modifier stopped the chain early.
    pub fn was_halted(&self) -> bool {
        self.halted_by.is_some()
    }
}

/// An ordered, append-only chain of modifiers over an owned subject.
///
/// # Semantics
///
/// - Traversal is sequential and follows attachment order
/// - A modifier returning `Flow::Halt` stops the pass; later nodes do not run
/// - An empty chain is valid and running it leaves the subject unchanged
/// - Running twice applies every effect twice, unless
///   [`ChainConfig::guard_reentry`] is set
///
/// Modifiers are moved into the chain when attached, so one modifier can
/// never belong to two chains. They only ever receive `&mut S`, so a
/// modifier cannot reshape the chain while it is being walked.
///
/// # Example
///
/// ```
/// use modifier_chain::{Flow, FnModifier, ModifierChain};
///
/// let mut chain = ModifierChain::new(1);
/// chain
///     .add(FnModifier::new("double", |v: &mut i32| {
///         *v *= 2;
///         Flow::Continue
///     }))
///     .add(FnModifier::new("add_one", |v: &mut i32| {
///         *v += 1;
///         Flow::Continue
///     }));
///
/// let outcome = chain.handle().unwrap();
/// assert_eq!(outcome.applied, 2);
/// assert_eq!(*chain.subject(), 3);
/// ```
pub struct ModifierChain<S> {
    subject: S,
    head: Link<S>,
    len: usize,
    runs: usize,
    config: ChainConfig,
}

impl<S> ModifierChain<S> {
    /// Creates an empty chain that owns `subject`.
    pub fn new(subject: S) -> Self {
        Self::with_config(subject, ChainConfig::default())
    }

    /// Creates an empty chain with explicit configuration.
    pub fn with_config(subject: S, config: ChainConfig) -> Self {
        Self {
            subject,
            head: Link::new(),
            len: 0,
            runs: 0,
            config,
        }
    }

    /// Appends a modifier at the end of the chain.
    pub fn add<M>(&mut self, modifier: M) -> &mut Self
    where
        M: Modifier<S> + 'static,
    {
        self.add_boxed(Box::new(modifier))
    }

    /// Appends an already boxed modifier at the end of the chain.
    pub fn add_boxed(&mut self, modifier: Box<dyn Modifier<S>>) -> &mut Self {
        self.head.add(modifier);
        self.len += 1;
        self
    }

    /// Appends a modifier that may be missing.
    ///
    /// `None` is rejected with [`ChainError::InvalidChain`] and the chain is
    /// left untouched.
    pub fn try_add(
        &mut self,
        modifier: Option<Box<dyn Modifier<S>>>,
    ) -> Result<&mut Self, ChainError> {
        match modifier {
            Some(modifier) => Ok(self.add_boxed(modifier)),
            None => {
                tracing::warn!(len = self.len, "rejected missing modifier");
                Err(ChainError::InvalidChain)
            }
        }
    }

    /// Consuming variant of [`add`](Self::add) for one-expression construction.
    #[must_use]
    pub fn then<M>(mut self, modifier: M) -> Self
    where
        M: Modifier<S> + 'static,
    {
        self.add(modifier);
        self
    }

    /// Runs the chain over the owned subject.
    ///
    /// # Errors
    ///
    /// Returns [`ChainError::ReentrantHandle`] when the chain already ran and
    /// the configuration forbids running it again. The subject is not
    /// touched in that case.
    pub fn handle(&mut self) -> Result<ChainOutcome, ChainError> {
        if self.config.guard_reentry && self.runs > 0 {
            tracing::warn!(runs = self.runs, "rejected repeated chain run");
            return Err(ChainError::ReentrantHandle { runs: self.runs });
        }

        let outcome = self.head.forward(&mut self.subject, self.config.trace_nodes);
        self.runs += 1;

        tracing::debug!(
            len = self.len,
            applied = outcome.applied,
            halted_by = ?outcome.halted_by,
            run = self.runs,
            "chain handled"
        );
        Ok(outcome)
    }

    /// Runs the chain over a subject the caller keeps ownership of.
    ///
    /// The owned subject and the run counter are left untouched, so the
    /// re-entry guard does not apply here.
    pub fn handle_subject(&self, subject: &mut S) -> ChainOutcome {
        let outcome = self.head.forward(subject, self.config.trace_nodes);
        tracing::debug!(
            len = self.len,
            applied = outcome.applied,
            halted_by = ?outcome.halted_by,
            "chain handled external subject"
        );
        outcome
    }

    /// Number of attached modifiers.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no modifier is attached.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Names of the attached modifiers, in attachment order.
    pub fn names(&self) -> Vec<&str> {
        self.head.iter().map(|m| m.name()).collect()
    }

    /// How many times [`handle`](Self::handle) has run to completion.
    pub fn handled_count(&self) -> usize {
        self.runs
    }

    /// Configuration the chain was built with.
    pub fn config(&self) -> &ChainConfig {
        &self.config
    }

    /// The owned subject as the last run left it.
    pub fn subject(&self) -> &S {
        &self.subject
    }

    /// Mutable access to the owned subject between runs.
    pub fn subject_mut(&mut self) -> &mut S {
        &mut self.subject
    }

    /// Drops the modifiers and returns the subject.
    pub fn into_subject(self) -> S {
        self.subject
    }
}

impl<S: core::fmt::Debug> core::fmt::Debug for ModifierChain<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ModifierChain")
            .field("subject", &self.subject)
            .field("modifiers", &self.names())
            .field("runs", &self.runs)
            .finish()
    }
}
