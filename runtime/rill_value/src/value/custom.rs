//! Opaque, externally-defined values.
//!
//! The `Value` enum is closed: the comparison and coercion algorithms are
//! exhaustive matches over its tags. External types that must flow through
//! the evaluator are projected through `CustomValue` at the boundary. A
//! custom value can opt into equality, ordering, and numeric commensuration;
//! anything it does not opt into falls back to reference identity (equality)
//! or `Incomparable` (ordering) in the algebra.

// Rc is the intentional implementation detail of CustomRef
#![allow(clippy::disallowed_types)]

use crate::compare::Comparison;
use crate::value::Value;
use std::any::Any;
use std::fmt;
use std::rc::Rc;

/// Capability interface for externally-defined values.
///
/// All comparison hooks are optional; returning `None` means "this
/// capability is not supported against that operand" and the algebra falls
/// back to its non-throwing defaults.
pub trait CustomValue: fmt::Debug {
    /// Short type name, used in error messages and `Value::type_name`.
    fn type_name(&self) -> &str;

    /// Downcast support for the comparison hooks.
    fn as_any(&self) -> &dyn Any;

    /// Human-readable form used by `Display` and string coercion.
    fn description(&self) -> String {
        format!("<{}>", self.type_name())
    }

    /// Equality against another custom value, if this type supports it.
    fn eq_custom(&self, _other: &dyn CustomValue) -> Option<bool> {
        None
    }

    /// Ordering against another custom value, if this type supports it.
    fn cmp_custom(&self, _other: &dyn CustomValue) -> Option<Comparison> {
        None
    }

    /// Project this value into a plain numeric `Value` for commensuration
    /// with built-in numbers. Must not return `Value::Custom`.
    fn as_numeric(&self) -> Option<Value> {
        None
    }
}

/// Shared handle to a custom value.
///
/// Mirrors `Heap<T>` for the unsized trait-object case; construction goes
/// through `Value::custom`.
pub struct CustomRef(Rc<dyn CustomValue>);

impl CustomRef {
    #[inline]
    pub(crate) fn new(value: impl CustomValue + 'static) -> Self {
        CustomRef(Rc::new(value))
    }

    /// Borrow the underlying custom value.
    #[inline]
    pub fn get(&self) -> &dyn CustomValue {
        &*self.0
    }

    /// Whether two handles point at the same allocation.
    ///
    /// Reference identity is the algebra's last-resort equality for custom
    /// values without an `eq_custom` hook.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Clone for CustomRef {
    #[inline]
    fn clone(&self) -> Self {
        CustomRef(Rc::clone(&self.0))
    }
}

impl fmt::Debug for CustomRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}
