//! Decision returned by modifier nodes.

/// What a modifier decided after running its mutation logic.
///
/// # Chain Semantics
///
/// Every node completes within a single call:
/// - `Continue` forwards the subject to the next node in the chain
/// - `Halt` stops propagation; no later node sees the subject
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Flow {
    /// Forward to the next node.
    #[default]
    Continue,

    /// Stop here.
    ///
    /// Used by terminal nodes and by modifiers that short-circuit the rest
    /// of the chain (e.g. a curse that cancels all later bonuses).
    Halt,
}

impl Flow {
    /// Returns `true` if this flow is `Continue`.
    #[inline]
    pub fn is_continue(self) -> bool {
        matches!(self, Flow::Continue)
    }

    /// Returns `true` if this flow is `Halt`.
    #[inline]
    pub fn is_halt(self) -> bool {
        matches!(self, Flow::Halt)
    }

    /// `Continue` when `condition` holds, `Halt` otherwise.
    #[inline]
    pub fn continue_if(condition: bool) -> Self {
        if condition { Flow::Continue } else { Flow::Halt }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_continue() {
        assert_eq!(Flow::default(), Flow::Continue);
    }

    #[test]
    fn continue_if_maps_condition() {
        assert!(Flow::continue_if(true).is_continue());
        assert!(Flow::continue_if(false).is_halt());
    }
}
