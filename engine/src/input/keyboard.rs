//! Keyboard State Module
//!
//! Tracks pressed/released state per canonical key identifier.
//! Identifiers follow the physical key naming used by browsers and winit
//! (`"KeyW"`, `"ArrowUp"`, ...), so any key can be tracked, not only the
//! movement set.

use std::collections::HashMap;

/// State of keyboard modifier keys at the time of an event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModifierState {
    pub shift: bool,
    pub ctrl: bool,
    pub alt: bool,
    pub meta: bool,
}

impl ModifierState {
    /// Create a new empty modifier state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if no modifiers are pressed.
    pub fn is_empty(&self) -> bool {
        !self.shift && !self.ctrl && !self.alt && !self.meta
    }
}

/// Destination for resolved key presses and releases.
///
/// [`InputTracker`](super::InputTracker) writes through this trait, so the
/// same filtering and resolution can feed a local [`KeyState`] or a
/// [`SharedKeyState`](super::SharedKeyState) read from another thread.
pub trait KeyStore {
    /// Record a press or release for `code`.
    fn set_key(&mut self, code: &str, pressed: bool);

    /// Forget every key.
    fn clear_keys(&mut self);
}

/// Pressed/released state keyed by canonical key identifier.
///
/// Entries are created lazily the first time a key is seen. A key with no
/// entry reads as released.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    keys: HashMap<String, bool>,
}

impl KeyState {
    /// Create an empty key state (every key released).
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a press or release for `code`.
    pub fn set(&mut self, code: &str, pressed: bool) {
        match self.keys.get_mut(code) {
            Some(state) => *state = pressed,
            None => {
                self.keys.insert(code.to_owned(), pressed);
            }
        }
    }

    /// Whether `code` is currently held.
    #[inline]
    pub fn is_pressed(&self, code: &str) -> bool {
        self.keys.get(code).copied().unwrap_or(false)
    }

    /// Whether any of `codes` is currently held.
    pub fn any_pressed(&self, codes: &[&str]) -> bool {
        codes.iter().any(|code| self.is_pressed(code))
    }

    /// Iterate the identifiers of all held keys.
    pub fn pressed_keys(&self) -> impl Iterator<Item = &str> {
        self.keys
            .iter()
            .filter(|(_, pressed)| **pressed)
            .map(|(code, _)| code.as_str())
    }

    /// Number of keys seen so far (pressed or released).
    pub fn tracked_len(&self) -> usize {
        self.keys.len()
    }

    /// Forget every key.
    pub fn clear(&mut self) {
        self.keys.clear();
    }
}

impl KeyStore for KeyState {
    fn set_key(&mut self, code: &str, pressed: bool) {
        self.set(code, pressed);
    }

    fn clear_keys(&mut self) {
        self.clear();
    }
}
