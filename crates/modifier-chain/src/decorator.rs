//! Decorator modifiers.
//!
//! Decorators wrap a single inner modifier and change when it runs or how
//! its decision is reported. This module provides [`Conditional`] (run only
//! when a predicate holds) and [`AlwaysContinue`] (ignore a halt).

use crate::{Flow, Modifier};

type Predicate<S> = Box<dyn Fn(&S) -> bool + Send + Sync>;

/// Runs its inner modifier only when a predicate over the subject holds.
///
/// # Semantics
///
/// - Predicate true: the inner modifier runs and its `Flow` is returned
/// - Predicate false: the subject is untouched and the chain continues
///
/// The predicate sees the subject as earlier nodes left it.
pub struct Conditional<S> {
    predicate: Predicate<S>,
    inner: Box<dyn Modifier<S>>,
}

impl<S> Conditional<S> {
    /// Creates a conditional wrapper around `inner`.
    pub fn new<P>(predicate: P, inner: Box<dyn Modifier<S>>) -> Self
    where
        P: Fn(&S) -> bool + Send + Sync + 'static,
    {
        Self {
            predicate: Box::new(predicate),
            inner,
        }
    }
}

impl<S> Modifier<S> for Conditional<S> {
    fn modify(&self, subject: &mut S) -> Flow {
        if (self.predicate)(subject) {
            self.inner.modify(subject)
        } else {
            Flow::Continue
        }
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

/// Always forwards, regardless of the inner modifier's decision.
///
/// This is useful for:
/// - Reusing a modifier that halts on its own in the middle of a chain
/// - Observers that log the subject without affecting control flow
pub struct AlwaysContinue<S> {
    inner: Box<dyn Modifier<S>>,
}

impl<S> AlwaysContinue<S> {
    /// Creates an always-continue wrapper around `inner`.
    pub fn new(inner: Box<dyn Modifier<S>>) -> Self {
        Self { inner }
    }
}

impl<S> Modifier<S> for AlwaysContinue<S> {
    fn modify(&self, subject: &mut S) -> Flow {
        // Run the inner modifier but drop its decision
        let _ = self.inner.modify(subject);
        Flow::Continue
    }

    fn name(&self) -> &str {
        self.inner.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Terminal;

    struct TestSubject {
        value: i32,
    }

    struct Increment;
    impl Modifier<TestSubject> for Increment {
        fn modify(&self, subject: &mut TestSubject) -> Flow {
            subject.value += 1;
            Flow::Continue
        }
    }

    struct HaltAndIncrement;
    impl Modifier<TestSubject> for HaltAndIncrement {
        fn modify(&self, subject: &mut TestSubject) -> Flow {
            subject.value += 1;
            Flow::Halt
        }
    }

    #[test]
    fn conditional_runs_when_predicate_holds() {
        let cond: Conditional<TestSubject> =
            Conditional::new(|s: &TestSubject| s.value > 0, Box::new(Increment));

        let mut subject = TestSubject { value: 1 };
        assert_eq!(cond.modify(&mut subject), Flow::Continue);
        assert_eq!(subject.value, 2);
    }

    #[test]
    fn conditional_skips_and_continues_otherwise() {
        let cond: Conditional<TestSubject> =
            Conditional::new(|s: &TestSubject| s.value > 0, Box::new(Terminal));

        let mut subject = TestSubject { value: 0 };
        assert_eq!(cond.modify(&mut subject), Flow::Continue);
        assert_eq!(subject.value, 0);
    }

    #[test]
    fn conditional_reports_inner_name() {
        let cond: Conditional<TestSubject> =
            Conditional::new(|_: &TestSubject| true, Box::new(Increment));
        assert_eq!(cond.name(), "Increment");
    }

    #[test]
    fn always_continue_swallows_halt() {
        let always: AlwaysContinue<TestSubject> =
            AlwaysContinue::new(Box::new(HaltAndIncrement));

        let mut subject = TestSubject { value: 0 };
        assert_eq!(always.modify(&mut subject), Flow::Continue);
        assert_eq!(subject.value, 1); // Inner still executed
    }
}
