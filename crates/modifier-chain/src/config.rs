//! Chain configuration.
use std::env;

/// Tunables for a [`ModifierChain`](crate::ModifierChain).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct ChainConfig {
    /// Refuse to run the chain a second time.
    ///
    /// Off by default: running twice re-applies every effect.
    pub guard_reentry: bool,

    /// Emit a `trace` event for every node visited.
    pub trace_nodes: bool,
}

impl ChainConfig {
    pub const ENV_GUARD_REENTRY: &'static str = "MODIFIER_CHAIN_GUARD_REENTRY";
    pub const ENV_TRACE_NODES: &'static str = "MODIFIER_CHAIN_TRACE_NODES";

    pub const fn new() -> Self {
        Self {
            guard_reentry: false,
            trace_nodes: false,
        }
    }

    #[must_use]
    pub const fn with_guard_reentry(mut self, guard_reentry: bool) -> Self {
        self.guard_reentry = guard_reentry;
        self
    }

    #[must_use]
    pub const fn with_trace_nodes(mut self, trace_nodes: bool) -> Self {
        self.trace_nodes = trace_nodes;
        self
    }

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MODIFIER_CHAIN_GUARD_REENTRY` - Refuse repeated runs (default: false)
    /// - `MODIFIER_CHAIN_TRACE_NODES` - Trace every visited node (default: false)
    ///
    /// Values that do not parse as `bool` are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(guard) = read_env::<bool>(Self::ENV_GUARD_REENTRY) {
            config.guard_reentry = guard;
        }

        if let Some(trace) = read_env::<bool>(Self::ENV_TRACE_NODES) {
            config.trace_nodes = trace;
        }

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
