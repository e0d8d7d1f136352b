//! The layer stack: ordered scope frames from globals to current.
//!
//! Index 0 is always `globals`, index 1 is always `initial`, and the
//! highest index is the current frame. The stack never holds fewer than
//! three frames; only frames above `initial` are pushed and popped.

use crate::error::{ContextError, ContextResult};
use crate::frame::SharedFrame;

/// Index of the globals frame.
pub(crate) const GLOBALS: usize = 0;
/// Index of the initial (render-parameter) frame.
pub(crate) const INITIAL: usize = 1;
/// Globals, initial, and one local frame always remain.
const MIN_DEPTH: usize = 3;

/// The ordered stack of scope frames.
#[derive(Debug)]
pub struct LayerStack {
    frames: Vec<SharedFrame>,
}

impl LayerStack {
    /// Build a stack of exactly three frames: the given `globals` and
    /// `initial` handles plus a fresh empty current frame.
    ///
    /// Both handles are shared, not copied: bindings the caller adds to
    /// them later are visible through the stack.
    pub fn build(globals: SharedFrame, initial: SharedFrame) -> Self {
        LayerStack {
            frames: vec![globals, initial, SharedFrame::default()],
        }
    }

    /// Install `frame` (or a fresh empty frame) as the new top and return
    /// a handle to it.
    pub fn push(&mut self, frame: Option<SharedFrame>) -> SharedFrame {
        let frame = frame.unwrap_or_default();
        self.frames.push(frame.clone());
        tracing::trace!(depth = self.frames.len(), "pushed scope frame");
        frame
    }

    /// Remove and return the top frame.
    ///
    /// Fails with [`ContextError::Underflow`] at the minimum depth: the
    /// globals, initial and bottom local frame are permanent.
    pub fn pop(&mut self) -> ContextResult<SharedFrame> {
        if self.frames.len() <= MIN_DEPTH {
            return Err(ContextError::Underflow);
        }
        let frame = self.frames.pop().ok_or(ContextError::Underflow)?;
        tracing::trace!(depth = self.frames.len(), "popped scope frame");
        Ok(frame)
    }

    /// Current stack depth (always at least 3).
    #[inline]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// The frame at `idx` (0 = globals).
    #[inline]
    pub(crate) fn frame(&self, idx: usize) -> &SharedFrame {
        &self.frames[idx]
    }

    /// All frames, bottom to top.
    #[inline]
    pub(crate) fn frames(&self) -> &[SharedFrame] {
        &self.frames
    }

    /// Handle to the globals frame.
    #[inline]
    pub fn globals(&self) -> &SharedFrame {
        &self.frames[GLOBALS]
    }

    /// Handle to the initial frame.
    #[inline]
    pub fn initial(&self) -> &SharedFrame {
        &self.frames[INITIAL]
    }

    /// Handle to the current top frame.
    #[inline]
    pub fn current(&self) -> &SharedFrame {
        // Depth never drops below MIN_DEPTH.
        &self.frames[self.frames.len() - 1]
    }

    /// A read-only snapshot of the stack, bottom to top.
    ///
    /// The returned handles share the live frames; the vector itself is
    /// detached from the stack.
    pub fn snapshot(&self) -> Vec<SharedFrame> {
        self.frames.clone()
    }
}
