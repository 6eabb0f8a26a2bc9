//! Terminal node.

use crate::{Flow, Modifier};

/// Does nothing and never forwards.
///
/// Attaching a `Terminal` at position k truncates the chain: nodes before k
/// still run, nodes after k never see the subject. Useful for conditional
/// assembly (append it instead of removing nodes) and for tests.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Terminal;

impl<S> Modifier<S> for Terminal {
    #[inline]
    fn modify(&self, _subject: &mut S) -> Flow {
        Flow::Halt
    }
}
