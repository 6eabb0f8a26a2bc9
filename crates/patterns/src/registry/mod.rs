//! Key-value registry loaded from line-pair text files.
//!
//! # File format
//!
//! ```text
//! Tokyo
//! 33200000
//! New York
//! 17800000
//! ```
//!
//! Each entry is a name line followed by an integer value line. Blank lines
//! between entries are ignored; a name without a value or a non-integer
//! value is an error. A repeated name keeps its last value.

pub mod error;
pub mod shared;

pub use error::RegistryError;
pub use shared::{shared, try_shared};

use std::collections::HashMap;
use std::path::Path;

/// Read access to named integer values.
///
/// Code that needs values takes `&dyn Lookup` (or `impl Lookup`) so tests
/// can pass a fake instead of a file-backed [`Registry`].
pub trait Lookup {
    fn value(&self, name: &str) -> Option<i64>;
}

/// Name to value map parsed from a registry file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Registry {
    entries: HashMap<String, i64>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a line-pair text file.
    pub fn load(path: &Path) -> Result<Self, RegistryError> {
        let content = std::fs::read_to_string(path).map_err(|source| RegistryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let registry = parse_pairs(&content)?;
        tracing::debug!(path = %path.display(), entries = registry.len(), "registry loaded");
        Ok(registry)
    }

    pub fn insert(&mut self, name: impl Into<String>, value: i64) -> Option<i64> {
        self.entries.insert(name.into(), value)
    }

    pub fn get(&self, name: &str) -> Option<i64> {
        self.entries.get(name).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }
}

impl Lookup for Registry {
    fn value(&self, name: &str) -> Option<i64> {
        self.get(name)
    }
}

impl Lookup for HashMap<String, i64> {
    fn value(&self, name: &str) -> Option<i64> {
        self.get(name).copied()
    }
}

/// Parse `name\nvalue\n` pairs.
pub fn parse_pairs(content: &str) -> Result<Registry, RegistryError> {
    let mut registry = Registry::new();
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(idx, line)| (idx + 1, line.trim()));

    while let Some((name_line, name)) = lines.next() {
        if name.is_empty() {
            continue;
        }

        let Some((value_line, raw)) = lines.next() else {
            return Err(RegistryError::MissingValue {
                name: name.to_owned(),
                line: name_line,
            });
        };

        let value = raw.parse::<i64>().map_err(|_| RegistryError::InvalidValue {
            name: name.to_owned(),
            value: raw.to_owned(),
            line: value_line,
        })?;

        if let Some(previous) = registry.insert(name, value) {
            tracing::warn!(name, previous, value, line = name_line, "duplicate registry entry");
        }
    }

    Ok(registry)
}

/// Sum of the values for `names`; unknown names contribute nothing.
///
/// # Errors
///
/// Returns [`RegistryError::Overflow`] naming the entry at which the sum
/// left the range of `i64`.
pub fn total<'a>(
    lookup: &dyn Lookup,
    names: impl IntoIterator<Item = &'a str>,
) -> Result<i64, RegistryError> {
    names.into_iter().try_fold(0_i64, |sum, name| {
        let Some(value) = lookup.value(name) else {
            tracing::debug!(name, "skipping unknown registry name");
            return Ok(sum);
        };
        sum.checked_add(value).ok_or_else(|| RegistryError::Overflow {
            name: name.to_owned(),
        })
    })
}
