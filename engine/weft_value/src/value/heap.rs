//! Enforced `Arc` wrapper for heap-allocated values.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A shared, immutable heap allocation.
///
/// The constructor is crate-private so that all heap values are created
/// through `Value` factory methods (`Value::string`, `Value::list`, ...).
/// Cloning a `Heap<T>` clones the pointer, not the payload.
///
/// # Thread Safety
///
/// Backed by `Arc`, so values can cross threads; the payload is never
/// mutated after construction.
#[repr(transparent)]
pub struct Heap<T>(pub(super) Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap allocation. Crate-private on purpose.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
    }

    /// Returns `true` if both handles point at the same allocation.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }
}

impl<T> Clone for Heap<T> {
    #[inline]
    fn clone(&self) -> Self {
        Heap(Arc::clone(&self.0))
    }
}

impl<T> Deref for Heap<T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl<T: PartialEq> PartialEq for Heap<T> {
    fn eq(&self, other: &Self) -> bool {
        // Pointer equality is a fast path for the common clone-of-clone case.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}
