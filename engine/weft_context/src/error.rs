//! Error types for scope resolution.

use thiserror::Error;

/// Result of a scope operation.
pub type ContextResult<T> = Result<T, ContextError>;

/// Failure raised by the layer stack or the scope context.
///
/// Deferred resolvers return this type directly, so a resolution failure
/// propagates through `Context::lookup` verbatim. A failed resolution
/// leaves the deferred marker in place; the next lookup retries it.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ContextError {
    /// `pop` attempted at the minimum stack depth. The globals, initial
    /// and bottom local frame are never popped.
    #[error("scope stack too small: cannot pop the globals, initial or bottom local frame")]
    Underflow,

    /// Strict-mode lookup walked every frame without a hit.
    #[error("'{name}' is not defined")]
    NameNotFound { name: String },

    /// Deletion of a name that is not bound in the top frame.
    #[error("no local binding named '{name}'")]
    KeyNotFound { name: String },

    /// Failure produced by a deferred resolver.
    #[error("{0}")]
    Resolution(String),
}

impl ContextError {
    /// Convenience constructor for resolver-authored failures.
    pub fn resolution(message: impl Into<String>) -> Self {
        ContextError::Resolution(message.into())
    }
}
