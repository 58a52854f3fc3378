//! Name-to-symbol registry with duplicate protection.

#![allow(clippy::disallowed_types)]

use crate::evaluable::{entries_equal, Evaluable};
use rill_value::errors::already_defined;
use rill_value::EvalError;
use rustc_hash::FxHashMap;
use std::fmt;
use std::rc::Rc;

/// A symbol store: one nesting level's name→evaluable mapping.
///
/// Insertion order is irrelevant. The unique-insertion path refuses to
/// silently overwrite; the upsert path always succeeds. No internal
/// synchronization — the core is single-threaded.
#[derive(Clone, Default)]
pub struct SymbolStore {
    symbols: FxHashMap<String, Rc<dyn Evaluable>>,
}

impl SymbolStore {
    /// Create an empty store.
    pub fn new() -> Self {
        SymbolStore {
            symbols: FxHashMap::default(),
        }
    }

    /// Look up a symbol by name.
    #[inline]
    pub fn lookup(&self, name: &str) -> Option<Rc<dyn Evaluable>> {
        self.symbols.get(name).cloned()
    }

    /// Whether a symbol with this name exists.
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.symbols.contains_key(name)
    }

    /// Insert a symbol, failing with `AlreadyDefined` on collision.
    ///
    /// The existing entry is left untouched on failure.
    pub fn add_unique(
        &mut self,
        name: impl Into<String>,
        value: Rc<dyn Evaluable>,
    ) -> Result<(), EvalError> {
        let name = name.into();
        if self.symbols.contains_key(&name) {
            return Err(already_defined(name));
        }
        self.symbols.insert(name, value);
        Ok(())
    }

    /// Insert or replace a symbol. Always succeeds, bypassing the
    /// duplicate-protection invariant by design.
    pub fn add_or_replace(&mut self, name: impl Into<String>, value: Rc<dyn Evaluable>) {
        self.symbols.insert(name.into(), value);
    }

    /// Number of symbols.
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    /// Whether the store is empty.
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    /// Iterate over symbol names. Order is unspecified.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.symbols.keys().map(String::as_str)
    }

    /// Enumerate entries with early stop: the callback returns `false` to
    /// stop. Returns `true` if enumeration ran to completion.
    pub fn enumerate(&self, mut f: impl FnMut(&str, &Rc<dyn Evaluable>) -> bool) -> bool {
        for (name, value) in &self.symbols {
            if !f(name, value) {
                return false;
            }
        }
        true
    }

    /// Deep copy: the new store's values are themselves copied, so mutating
    /// either store never affects the other.
    #[must_use]
    pub fn copied(&self) -> Self {
        let symbols = self
            .symbols
            .iter()
            .map(|(name, value)| (name.clone(), value.boxed_clone()))
            .collect();
        SymbolStore { symbols }
    }
}

impl PartialEq for SymbolStore {
    /// Structural equality over the backing map: same key set, pairwise
    /// entry equality (literals through the algebra, other nodes by
    /// reference identity).
    fn eq(&self, other: &Self) -> bool {
        self.symbols.len() == other.symbols.len()
            && self.symbols.iter().all(|(name, value)| {
                other
                    .symbols
                    .get(name)
                    .is_some_and(|theirs| entries_equal(value, theirs))
            })
    }
}

impl fmt::Debug for SymbolStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.symbols.iter()).finish()
    }
}

#[cfg(test)]
mod tests;
