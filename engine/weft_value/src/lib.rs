//! Weft Value - runtime values for the weft template engine.
//!
//! This crate provides the value model the renderer and the scope engine
//! share:
//!
//! - `Value`: the runtime value enum (primitives inline, heap types behind
//!   `Heap<T>`)
//! - `Heap<T>`: enforced `Arc` wrapper so heap allocation only happens
//!   through `Value` factory methods
//! - `markup`: the output-escaping helper (`escape`, `escape_str`)
//!
//! Values are `Send + Sync`; a global namespace's values can be shared
//! across concurrent renders. Scope frames themselves live in
//! `weft_context` and are single-threaded.

pub mod markup;
mod value;

pub use markup::{escape, escape_str};
pub use value::{Heap, Value};
