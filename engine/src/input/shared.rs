//! Shared key state for event sources running on another thread.
//!
//! An event thread owns an [`InputTracker`](super::InputTracker) built with
//! [`with_store`](super::InputTracker::with_store) over a clone of the handle,
//! so events are filtered and resolved exactly as on the frame thread. The
//! frame thread takes one [`SharedKeyState::snapshot`] per tick so a tick
//! never observes a half-applied update.

use std::sync::Arc;

use parking_lot::Mutex;

use super::{KeyState, KeyStore};

/// Cloneable handle to a key state guarded by a mutex.
#[derive(Debug, Clone, Default)]
pub struct SharedKeyState {
    inner: Arc<Mutex<KeyState>>,
}

impl SharedKeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release.
    pub fn set(&self, code: &str, pressed: bool) {
        self.inner.lock().set(code, pressed);
    }

    /// Forget every key.
    pub fn clear(&self) {
        self.inner.lock().clear();
    }

    /// Copy of the current state for one frame.
    pub fn snapshot(&self) -> KeyState {
        self.inner.lock().clone()
    }
}

impl KeyStore for SharedKeyState {
    fn set_key(&mut self, code: &str, pressed: bool) {
        self.set(code, pressed);
    }

    fn clear_keys(&mut self) {
        self.clear();
    }
}
