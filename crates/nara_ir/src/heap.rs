//! Shared heap payloads for `Value`.
//!
//! `Heap<T>` wraps `Arc<T>` and keeps its constructor crate-private, so
//! every heap allocation goes through the factory methods on `Value`
//! (`Value::string`, `Value::symbol`, ...). External code cannot build a
//! `Value::Str` around an arbitrary `Arc`.

use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

/// A reference-counted, immutable heap payload.
///
/// Cloning a `Heap<T>` bumps a reference count; the payload itself is
/// never copied. Equality and hashing go through the payload.
pub struct Heap<T>(Arc<T>);

impl<T> Heap<T> {
    /// Create a new heap payload.
    ///
    /// Crate-private on purpose: construction happens through `Value`
    /// factory methods only.
    #[inline]
    pub(crate) fn new(value: T) -> Self {
        Heap(Arc::new(value))
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

impl<T: PartialEq> PartialEq for Heap<T> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        // Pointer equality is a fast path; fall back to the payload.
        Arc::ptr_eq(&self.0, &other.0) || *self.0 == *other.0
    }
}

impl<T: Eq> Eq for Heap<T> {}

impl<T: fmt::Debug> fmt::Debug for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.0, f)
    }
}

impl<T: fmt::Display> fmt::Display for Heap<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&*self.0, f)
    }
}
