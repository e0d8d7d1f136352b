//! Scope frames and the bindings they hold.
//!
//! A `Frame` is one level of the scope stack: a mapping from name to
//! [`Binding`]. Frames that the caller must keep joint ownership of
//! (`globals` and `initial`, per the render API) are handed around as
//! [`SharedFrame`]s, so caller-side mutation stays visible through the
//! stack without copying.

use rustc_hash::FxHashMap;
use std::cell::{Ref, RefCell, RefMut};
use std::fmt;
use std::rc::Rc;

use weft_value::Value;

use crate::context::Context;
use crate::error::ContextResult;

/// Resolver signature for deferred bindings.
///
/// Called with the owning context and the name being resolved. The
/// resolver may re-enter `lookup`/`contains` on the same context; it can
/// never reach `push`/`pop`, which require `&mut Context`.
pub type ResolveFn = dyn Fn(&Context, &str) -> ContextResult<Value>;

/// A value computed on first read and cached back into its frame.
///
/// Cloning a `Deferred` clones the handle; the resolver itself runs at
/// most once per successful resolution of a given binding.
#[derive(Clone)]
pub struct Deferred(Rc<ResolveFn>);

impl Deferred {
    /// Wrap a resolver closure.
    pub fn new(resolve: impl Fn(&Context, &str) -> ContextResult<Value> + 'static) -> Self {
        Deferred(Rc::new(resolve))
    }

    /// Invoke the resolver.
    pub(crate) fn resolve(&self, context: &Context, name: &str) -> ContextResult<Value> {
        (self.0)(context, name)
    }
}

impl fmt::Debug for Deferred {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("<deferred>")
    }
}

/// One binding slot in a frame: either a concrete value or a still-pending
/// deferred computation.
#[derive(Clone, Debug)]
pub enum Binding {
    /// A concrete value; reads have no side effect.
    Value(Value),
    /// A pending computation, replaced in place on first successful
    /// resolution.
    Deferred(Deferred),
}

impl Binding {
    /// Returns `true` if this binding has not been resolved yet.
    #[inline]
    pub fn is_deferred(&self) -> bool {
        matches!(self, Binding::Deferred(_))
    }
}

/// A single scope level: a mapping from name to binding.
#[derive(Clone, Debug, Default)]
pub struct Frame {
    bindings: FxHashMap<String, Binding>,
}

impl Frame {
    /// Create an empty frame.
    pub fn new() -> Self {
        Frame {
            bindings: FxHashMap::default(),
        }
    }

    /// Build a frame from `(name, value)` pairs.
    pub fn from_entries<S, I>(entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Value)>,
    {
        let mut frame = Frame::new();
        for (name, value) in entries {
            frame.define(name, value);
        }
        frame
    }

    /// Bind a name to a concrete value.
    #[inline]
    pub fn define(&mut self, name: impl Into<String>, value: Value) {
        self.bindings.insert(name.into(), Binding::Value(value));
    }

    /// Bind a name to a deferred computation.
    #[inline]
    pub fn define_deferred(&mut self, name: impl Into<String>, deferred: Deferred) {
        self.bindings
            .insert(name.into(), Binding::Deferred(deferred));
    }

    /// Look up a binding by name.
    #[inline]
    pub fn get(&self, name: &str) -> Option<&Binding> {
        self.bindings.get(name)
    }

    /// Remove a binding, returning it if present.
    #[inline]
    pub fn remove(&mut self, name: &str) -> Option<Binding> {
        self.bindings.remove(name)
    }

    /// Returns `true` if the name is bound here (concrete or deferred).
    #[inline]
    pub fn contains(&self, name: &str) -> bool {
        self.bindings.contains_key(name)
    }

    /// Number of bindings in this frame.
    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    /// Returns `true` if this frame holds no bindings.
    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    /// Iterate over the bindings in this frame.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// A shared handle to a frame.
///
/// This wraps `Rc<RefCell<Frame>>` so a frame can sit in the layer stack
/// while the caller keeps its own handle: mutations made through either
/// side are visible through the other (same frame, not a snapshot).
///
/// # Thread Safety
///
/// `SharedFrame` is NOT thread-safe; a context and all its frames belong
/// to the render thread that created them. Global *values* are shareable
/// across threads, frames are not.
#[repr(transparent)]
pub struct SharedFrame(Rc<RefCell<Frame>>);

impl SharedFrame {
    /// Wrap a frame in a shared handle.
    #[inline]
    pub fn new(frame: Frame) -> Self {
        SharedFrame(Rc::new(RefCell::new(frame)))
    }

    /// Build a shared frame from `(name, value)` pairs.
    pub fn from_entries<S, I>(entries: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator<Item = (S, Value)>,
    {
        SharedFrame::new(Frame::from_entries(entries))
    }

    /// Borrow the frame immutably.
    #[inline]
    pub fn borrow(&self) -> Ref<'_, Frame> {
        self.0.borrow()
    }

    /// Borrow the frame mutably.
    #[inline]
    pub fn borrow_mut(&self) -> RefMut<'_, Frame> {
        self.0.borrow_mut()
    }

    /// Bind a name to a concrete value.
    #[inline]
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.0.borrow_mut().define(name, value);
    }

    /// Bind a name to a deferred computation.
    #[inline]
    pub fn define_deferred(&self, name: impl Into<String>, deferred: Deferred) {
        self.0.borrow_mut().define_deferred(name, deferred);
    }

    /// Returns `true` if both handles point at the same frame.
    #[inline]
    pub fn ptr_eq(a: &Self, b: &Self) -> bool {
        Rc::ptr_eq(&a.0, &b.0)
    }
}

impl Clone for SharedFrame {
    #[inline]
    fn clone(&self) -> Self {
        SharedFrame(Rc::clone(&self.0))
    }
}

impl Default for SharedFrame {
    fn default() -> Self {
        SharedFrame::new(Frame::new())
    }
}

impl fmt::Debug for SharedFrame {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SharedFrame").field(&self.0).finish()
    }
}

#[cfg(test)]
mod tests;
