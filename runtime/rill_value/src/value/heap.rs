//! Factory-enforced shared pointer for heap-allocated value payloads.

// Rc is the intentional implementation detail of Heap<T>
#![allow(clippy::disallowed_types)]

use std::fmt;
use std::ops::Deref;
use std::rc::Rc;

/// A shared, immutable heap allocation for `Value` payloads.
///
/// The constructor is crate-private, so every heap payload is created through
/// a `Value::` factory method. This keeps allocation decisions in one place.
///
/// # Thread Safety
///
/// `Heap<T>` uses `Rc` internally and is NOT thread-safe. The evaluation core
/// is single-threaded by design; cloning a `Heap` is a reference-count bump,
/// never a deep copy.
#[repr(transparent)]
pub struct Heap<T: ?Sized>(Rc<T>);

impl<T> Heap<T> {
    /// Create a new heap allocation. Crate-private: go through `Value::`
    /// factory methods.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Rc::new(value))
    }
}

impl<T: ?Sized> Heap<T> {
    /// Whether two handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl<T: ?Sized> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Rc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug + ?Sized> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: PartialEq + ?Sized> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
