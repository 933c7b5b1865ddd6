use std::collections::VecDeque;
use std::sync::Arc;

use crate::foundation::error::{TouchupError, TouchupResult};
use crate::raster::buffer::PixelBuffer;

/// Default number of retained snapshots.
pub const DEFAULT_UNDO_CAP: usize = 25;

/// Bounded stack of full-buffer snapshots, newest last.
///
/// Pushing beyond the cap drops the oldest snapshot.
#[derive(Debug, Clone)]
pub struct UndoManager {
    cap: usize,
    stack: VecDeque<Arc<PixelBuffer>>,
}

impl UndoManager {
    /// Create an empty stack holding at most `cap` snapshots.
    pub fn new(cap: usize) -> TouchupResult<Self> {
        if cap == 0 {
            return Err(TouchupError::validation("undo cap must be >= 1"));
        }
        Ok(Self {
            cap,
            stack: VecDeque::with_capacity(cap),
        })
    }

    /// Push a snapshot. Returns the evicted oldest snapshot, if any.
    pub fn push(&mut self, snapshot: Arc<PixelBuffer>) -> Option<Arc<PixelBuffer>> {
        self.stack.push_back(snapshot);
        if self.stack.len() > self.cap {
            self.stack.pop_front()
        } else {
            None
        }
    }

    /// Remove and return the newest snapshot.
    pub fn pop(&mut self) -> Option<Arc<PixelBuffer>> {
        self.stack.pop_back()
    }

    /// Newest snapshot without removing it.
    pub fn peek(&self) -> Option<&Arc<PixelBuffer>> {
        self.stack.back()
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.stack.len()
    }

    /// Return `true` when there is nothing to undo.
    pub fn is_empty(&self) -> bool {
        self.stack.is_empty()
    }

    /// Maximum number of snapshots retained.
    pub fn cap(&self) -> usize {
        self.cap
    }

    /// Drop every snapshot.
    pub fn clear(&mut self) {
        self.stack.clear();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/undo.rs"]
mod tests;
