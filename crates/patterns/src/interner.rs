//! Caller-owned string interning (flyweight).
//!
//! Repeated strings are stored once in an arena and referred to by a small
//! [`Symbol`] index. The table is an ordinary value: whoever builds names
//! owns the interner and passes it around, so there is no process-wide pool.

use std::collections::HashMap;
use std::sync::Arc;

/// Index of an interned string.
///
/// Only meaningful for the [`Interner`] that produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Symbol(pub u32);

impl Symbol {
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Deduplicating string table.
#[derive(Clone, Debug, Default)]
pub struct Interner {
    strings: Vec<Arc<str>>,
    lookup: HashMap<Arc<str>, Symbol>,
}

impl Interner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the symbol for `value`, storing it on first sight.
    ///
    /// # Panics
    ///
    /// Panics if more than `u32::MAX` distinct strings are interned.
    pub fn intern(&mut self, value: &str) -> Symbol {
        if let Some(&symbol) = self.lookup.get(value) {
            return symbol;
        }

        let index = u32::try_from(self.strings.len()).expect("interner symbol space exhausted");
        let symbol = Symbol(index);
        let stored: Arc<str> = Arc::from(value);
        self.strings.push(Arc::clone(&stored));
        self.lookup.insert(stored, symbol);
        tracing::trace!(value, index, "interned new string");
        symbol
    }

    /// Symbol for `value` if it was interned before.
    pub fn get(&self, value: &str) -> Option<Symbol> {
        self.lookup.get(value).copied()
    }

    /// String behind `symbol`, or `None` for a foreign symbol.
    pub fn resolve(&self, symbol: Symbol) -> Option<&str> {
        self.strings.get(symbol.index()).map(|s| &**s)
    }

    /// Number of distinct strings stored.
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Stored strings in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (Symbol, &str)> {
        self.strings
            .iter()
            .enumerate()
            .map(|(i, s)| (Symbol(i as u32), &**s))
    }
}

/// A multi-part name stored as interned pieces.
///
/// "John Smith" and "Jane Smith" share the `Smith` entry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InternedName {
    parts: Vec<Symbol>,
}

impl InternedName {
    /// Splits `full_name` on whitespace and interns each piece.
    pub fn new(full_name: &str, interner: &mut Interner) -> Self {
        let parts = full_name
            .split_whitespace()
            .map(|part| interner.intern(part))
            .collect();
        Self { parts }
    }

    pub fn parts(&self) -> &[Symbol] {
        &self.parts
    }

    /// Rebuilds the full name, skipping symbols the interner does not know.
    pub fn render(&self, interner: &Interner) -> String {
        self.parts
            .iter()
            .filter_map(|&symbol| interner.resolve(symbol))
            .collect::<Vec<_>>()
            .join(" ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intern_deduplicates() {
        let mut interner = Interner::new();
        let a = interner.intern("goblin");
        let b = interner.intern("orc");
        let c = interner.intern("goblin");

        assert_eq!(a, c);
        assert_ne!(a, b);
        assert_eq!(interner.len(), 2);
        assert_eq!(interner.resolve(b), Some("orc"));
    }

    #[test]
    fn unknown_symbols_resolve_to_none() {
        let interner = Interner::new();
        assert!(interner.is_empty());
        assert_eq!(interner.resolve(Symbol(3)), None);
        assert_eq!(interner.get("missing"), None);
    }

    #[test]
    fn names_share_surname_storage() {
        let mut interner = Interner::new();
        let john = InternedName::new("John Smith", &mut interner);
        let jane = InternedName::new("Jane  Smith", &mut interner);

        assert_eq!(interner.len(), 3);
        assert_eq!(john.parts()[1], jane.parts()[1]);
        assert_eq!(jane.render(&interner), "Jane Smith");
    }

    #[test]
    fn iter_preserves_insertion_order() {
        let mut interner = Interner::new();
        for word in ["b", "a", "b", "c"] {
            interner.intern(word);
        }
        let words: Vec<_> = interner.iter().map(|(_, s)| s).collect();
        assert_eq!(words, ["b", "a", "c"]);
    }
}
