//! Weft Context - layered scope resolution for the weft template engine.
//!
//! This crate is the variable-resolution core the compiled-template
//! executor runs against:
//!
//! - `Frame` / `SharedFrame`: one scope level (name to binding map) and the
//!   shared handle that lets the caller keep joint ownership of the
//!   `globals` and `initial` frames
//! - `LayerStack`: the ordered frame stack, globals at the bottom, the
//!   innermost block scope on top
//! - `Context`: push/pop of block scopes, name lookup with deferred-value
//!   resolution and write-back, containment tests, and local assignment
//!
//! # Scoping rules
//!
//! Lookups walk from the innermost frame down to globals; the most
//! recently pushed binding wins. Deferred bindings are resolved on first
//! read and the result is cached in the frame that held them - except for
//! hits in `globals`, which are cached one level up in `initial` so the
//! shared global namespace is never mutated while rendering.
//!
//! # Threading
//!
//! A `Context` serves exactly one render pass on one thread; the frame
//! handles are `Rc`-based and not `Send`. Renders on different threads
//! that share a global namespace each build their own globals frame from
//! the same (thread-safe) `weft_value::Value`s.

mod context;
mod error;
mod frame;
mod stack;

pub use context::{Context, MissPolicy};
pub use error::{ContextError, ContextResult};
pub use frame::{Binding, Deferred, Frame, ResolveFn, SharedFrame};
pub use stack::LayerStack;
