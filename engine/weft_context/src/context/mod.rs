//! The scope context: name resolution over the layer stack.
//!
//! This is the object the compiled-template executor talks to while
//! rendering: `push`/`pop` around block scopes, `lookup`/`contains` for
//! reads, `set`/`delete` for local writes.

use weft_value::Value;

use crate::error::{ContextError, ContextResult};
use crate::frame::{Binding, Deferred, SharedFrame};
use crate::stack::{LayerStack, GLOBALS, INITIAL};

/// Names starting with this prefix are internal to the engine and never
/// visible to template code, whatever the frames contain.
const RESERVED_PREFIX: &str = "::";

/// Policy applied when a lookup reaches the bottom of the stack without a
/// hit.
#[derive(Clone, Debug)]
pub enum MissPolicy {
    /// Substitute the given sentinel; lookups never fail on a miss.
    Silent(Value),
    /// Fail with [`ContextError::NameNotFound`].
    Strict,
}

/// The scope context for one render pass.
///
/// Created with the caller-supplied `globals` and `initial` frames, lives
/// for the duration of one render, then is dropped; every frame pushed
/// above `initial` is released on `pop` or when the context goes away.
#[derive(Debug)]
pub struct Context {
    stack: LayerStack,
    policy: MissPolicy,
}

impl Context {
    /// Create a context over the given frames with the given miss policy.
    ///
    /// Both frames are shared with the caller, not copied; bindings added
    /// to them from outside remain visible through the context.
    pub fn new(globals: SharedFrame, initial: SharedFrame, policy: MissPolicy) -> Self {
        Context {
            stack: LayerStack::build(globals, initial),
            policy,
        }
    }

    /// A context that substitutes [`Value::Undefined`] for missing names.
    pub fn silent(globals: SharedFrame, initial: SharedFrame) -> Self {
        Context::new(globals, initial, MissPolicy::Silent(Value::Undefined))
    }

    /// A context that fails lookups of missing names.
    pub fn strict(globals: SharedFrame, initial: SharedFrame) -> Self {
        Context::new(globals, initial, MissPolicy::Strict)
    }

    /// Resolve a name against the stack, innermost frame first.
    ///
    /// A concrete hit is returned unchanged. A deferred hit runs its
    /// resolver with `(self, name)` and caches the result into the frame
    /// that held it - except for hits in `globals`, which are cached into
    /// `initial` so the shared global namespace is never written to. On a
    /// resolver failure the error propagates and the deferred marker
    /// stays in place, so the next lookup retries.
    ///
    /// Reserved `::`-prefixed names are treated as not found.
    pub fn lookup(&self, name: &str) -> ContextResult<Value> {
        if is_reserved(name) {
            return self.miss(name);
        }
        for idx in (0..self.stack.depth()).rev() {
            // Clone the binding out so no frame borrow is held while a
            // resolver runs (resolvers may re-enter lookup).
            let binding = self.stack.frame(idx).borrow().get(name).cloned();
            let Some(binding) = binding else {
                continue;
            };
            return match binding {
                Binding::Value(value) => Ok(value),
                Binding::Deferred(deferred) => self.resolve_deferred(idx, name, &deferred),
            };
        }
        self.miss(name)
    }

    fn resolve_deferred(&self, idx: usize, name: &str, deferred: &Deferred) -> ContextResult<Value> {
        let resolved = deferred.resolve(self, name)?;
        // Never touch the globals: results from there cache one level up.
        let target = if idx == GLOBALS { INITIAL } else { idx };
        self.stack
            .frame(target)
            .borrow_mut()
            .define(name, resolved.clone());
        tracing::trace!(name, frame = idx, "resolved deferred binding");
        Ok(resolved)
    }

    fn miss(&self, name: &str) -> ContextResult<Value> {
        match &self.policy {
            MissPolicy::Silent(sentinel) => Ok(sentinel.clone()),
            MissPolicy::Strict => {
                tracing::debug!(name, "lookup missed every frame");
                Err(ContextError::NameNotFound {
                    name: name.to_owned(),
                })
            }
        }
    }

    /// Report whether a name is bound anywhere in the stack.
    ///
    /// Purely a presence check: deferred bindings count as present and are
    /// not resolved, nothing is mutated. Reserved names report `false`.
    pub fn contains(&self, name: &str) -> bool {
        if is_reserved(name) {
            return false;
        }
        self.stack
            .frames()
            .iter()
            .any(|frame| frame.borrow().contains(name))
    }

    /// Bind a name in the current top frame.
    ///
    /// Lower frames are never written; a shadowed binding reappears once
    /// the local one is deleted or its frame popped. Reserved names are
    /// never bound through the context.
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        let name = name.into();
        if is_reserved(&name) {
            return;
        }
        self.stack.current().borrow_mut().define(name, value);
    }

    /// Remove a name from the current top frame.
    ///
    /// Fails with [`ContextError::KeyNotFound`] when the top frame has no
    /// such binding, even if a lower frame does.
    pub fn delete(&mut self, name: &str) -> ContextResult<()> {
        if !is_reserved(name) && self.stack.current().borrow_mut().remove(name).is_some() {
            return Ok(());
        }
        Err(ContextError::KeyNotFound {
            name: name.to_owned(),
        })
    }

    /// Enter a block scope: push a fresh empty frame and return it.
    pub fn push(&mut self) -> SharedFrame {
        self.stack.push(None)
    }

    /// Enter a block scope with pre-populated locals.
    pub fn push_frame(&mut self, frame: SharedFrame) -> SharedFrame {
        self.stack.push(Some(frame))
    }

    /// Leave a block scope: remove and return the top frame.
    pub fn pop(&mut self) -> ContextResult<SharedFrame> {
        self.stack.pop()
    }

    /// Stack depth: 3 plus the net number of pushes.
    pub fn size(&self) -> usize {
        self.stack.depth()
    }

    /// Handle to the globals frame.
    pub fn globals(&self) -> &SharedFrame {
        self.stack.globals()
    }

    /// Handle to the initial frame.
    pub fn initial(&self) -> &SharedFrame {
        self.stack.initial()
    }

    /// Handle to the current top frame.
    pub fn current(&self) -> &SharedFrame {
        self.stack.current()
    }

    /// Read-only snapshot of all frames, globals first.
    pub fn stack(&self) -> Vec<SharedFrame> {
        self.stack.snapshot()
    }
}

#[inline]
fn is_reserved(name: &str) -> bool {
    name.starts_with(RESERVED_PREFIX)
}
