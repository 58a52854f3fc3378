//! One nesting level of evaluation: a store coupled with its call's
//! arguments.

#![allow(clippy::disallowed_types)]

use crate::arguments::Arguments;
use crate::evaluable::Evaluable;
use crate::store::SymbolStore;
use rill_value::EvalError;
use std::rc::Rc;

/// A stack frame: an optional symbol store plus one arguments list.
///
/// The store is allocated lazily on first write — most frames never define
/// a symbol. The arguments list defaults to empty.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StackFrame {
    store: Option<SymbolStore>,
    arguments: Arguments,
}

impl StackFrame {
    /// An empty frame: no store, no arguments.
    pub fn new() -> Self {
        StackFrame::default()
    }

    /// A frame around an existing store.
    pub fn with_store(store: SymbolStore) -> Self {
        StackFrame {
            store: Some(store),
            arguments: Arguments::default(),
        }
    }

    /// A frame carrying a call's arguments.
    pub fn with_arguments(arguments: Arguments) -> Self {
        StackFrame {
            store: None,
            arguments,
        }
    }

    /// The store, if one has been allocated.
    pub fn store(&self) -> Option<&SymbolStore> {
        self.store.as_ref()
    }

    /// The store, allocating an empty one on first use.
    pub fn store_mut(&mut self) -> &mut SymbolStore {
        self.store.get_or_insert_with(SymbolStore::new)
    }

    /// This call's arguments.
    pub fn arguments(&self) -> &Arguments {
        &self.arguments
    }

    /// Mutable access to this call's arguments.
    pub fn arguments_mut(&mut self) -> &mut Arguments {
        &mut self.arguments
    }

    /// Replace the arguments list.
    pub fn set_arguments(&mut self, arguments: Arguments) {
        self.arguments = arguments;
    }

    /// Look up a symbol in this frame's store.
    pub fn lookup(&self, name: &str) -> Option<Rc<dyn Evaluable>> {
        self.store.as_ref().and_then(|store| store.lookup(name))
    }

    /// Define a symbol, failing with `AlreadyDefined` on collision.
    /// Allocates the store on first write.
    pub fn define_unique(
        &mut self,
        name: impl Into<String>,
        value: Rc<dyn Evaluable>,
    ) -> Result<(), EvalError> {
        self.store_mut().add_unique(name, value)
    }

    /// Define or replace a symbol. Allocates the store on first write.
    pub fn define(&mut self, name: impl Into<String>, value: Rc<dyn Evaluable>) {
        self.store_mut().add_or_replace(name, value);
    }
}

/// Builder for the process-wide root store.
///
/// The root store holds every statically known built-in, is constructed
/// once at startup, and is shared read-only (by `Rc`) into every evaluation
/// context — an explicit value, not a hidden singleton. Registration logs
/// and keeps the first entry on name collision rather than aborting.
#[derive(Debug, Default)]
pub struct RootStoreBuilder {
    store: SymbolStore,
}

impl RootStoreBuilder {
    pub fn new() -> Self {
        RootStoreBuilder::default()
    }

    /// Register a built-in by name. Collisions keep the first registration.
    pub fn register(&mut self, name: &str, value: Rc<dyn Evaluable>) -> &mut Self {
        if let Err(error) = self.store.add_unique(name, value) {
            tracing::warn!(name, %error, "duplicate built-in registration ignored");
        }
        self
    }

    /// Finish building; the result is immutable from here on.
    pub fn finish(self) -> Rc<SymbolStore> {
        Rc::new(self.store)
    }
}
