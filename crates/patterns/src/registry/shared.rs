//! Process-wide registry created at most once.
//!
//! Prefer building a [`Registry`] explicitly and passing it as a
//! [`Lookup`](super::Lookup); this slot exists for call sites that cannot
//! be handed one.

use std::path::Path;
use std::sync::{Arc, Mutex, PoisonError};

use super::{Registry, RegistryError};

static SHARED: Mutex<Option<Arc<Registry>>> = Mutex::new(None);

/// Returns the shared registry, loading it from `path` on first use.
///
/// The first caller performs the load while holding the lock; concurrent
/// callers block until it finishes and then receive the same instance.
/// Once initialised, `path` is ignored. A failed load leaves the slot empty
/// so a later call can retry.
pub fn shared(path: &Path) -> Result<Arc<Registry>, RegistryError> {
    let mut slot = SHARED.lock().unwrap_or_else(PoisonError::into_inner);

    if let Some(registry) = slot.as_ref() {
        return Ok(Arc::clone(registry));
    }

    let registry = Arc::new(Registry::load(path)?);
    tracing::info!(
        path = %path.display(),
        entries = registry.len(),
        "shared registry initialised"
    );
    *slot = Some(Arc::clone(&registry));
    Ok(registry)
}

/// Returns the shared registry if some caller already initialised it.
pub fn try_shared() -> Option<Arc<Registry>> {
    SHARED
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .as_ref()
        .map(Arc::clone)
}
