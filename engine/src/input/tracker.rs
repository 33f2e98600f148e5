//! Input Tracker
//!
//! Turns raw key events into key store updates. The tracker is the only
//! writer of key state; the motion integrator reads it once per frame.
//!
//! The store defaults to an owned [`KeyState`]. Event sources on another
//! thread use [`InputTracker::with_store`] over a
//! [`SharedKeyState`](super::SharedKeyState).

use super::{
    CapturePredicate, DefaultCapturePredicate, DefaultKeyTable, KeyState, KeyStore,
    LegacyKeyTable, RawKeyEvent,
};

/// Tracks which keys are held, filtered through a capture predicate and
/// resolved through a legacy key table.
#[derive(Debug, Clone)]
pub struct InputTracker<P = DefaultCapturePredicate, T = DefaultKeyTable, S = KeyState> {
    keys: S,
    predicate: P,
    table: T,
}

impl Default for InputTracker {
    fn default() -> Self {
        Self::new()
    }
}

impl InputTracker {
    /// Tracker with the default predicate and key table.
    pub fn new() -> Self {
        Self::with_collaborators(DefaultCapturePredicate, DefaultKeyTable::default())
    }
}

impl<P: CapturePredicate, T: LegacyKeyTable> InputTracker<P, T> {
    /// Tracker with a custom capture predicate and legacy key table.
    pub fn with_collaborators(predicate: P, table: T) -> Self {
        Self::with_store(predicate, table, KeyState::new())
    }

    /// Current key state.
    pub fn keys(&self) -> &KeyState {
        &self.keys
    }

    /// Whether `code` is currently held.
    pub fn is_pressed(&self, code: &str) -> bool {
        self.keys.is_pressed(code)
    }
}

impl<P: CapturePredicate, T: LegacyKeyTable, S: KeyStore> InputTracker<P, T, S> {
    /// Tracker writing into `store` instead of an owned [`KeyState`].
    pub fn with_store(predicate: P, table: T, store: S) -> Self {
        Self {
            keys: store,
            predicate,
            table,
        }
    }

    /// Handle a key press.
    pub fn on_key_down(&mut self, event: &RawKeyEvent) {
        self.apply(event, true);
    }

    /// Handle a key release.
    pub fn on_key_up(&mut self, event: &RawKeyEvent) {
        self.apply(event, false);
    }

    /// Forget every held key (blur / pause).
    pub fn reset(&mut self) {
        self.keys.clear_keys();
    }

    /// Resolve the canonical identifier for an event.
    ///
    /// A non-empty native identifier wins; otherwise the legacy code is
    /// looked up in the table.
    pub fn resolve<'a>(&'a self, event: &'a RawKeyEvent) -> Option<&'a str> {
        match event.code.as_deref() {
            Some(code) if !code.is_empty() => Some(code),
            _ => event.key_code.and_then(|key_code| self.table.lookup(key_code)),
        }
    }

    fn apply(&mut self, event: &RawKeyEvent, pressed: bool) {
        if !self.predicate.should_capture(event) {
            return;
        }
        let Some(code) = self.resolve(event).map(str::to_owned) else {
            log::trace!("ignoring unresolvable key event {event:?}");
            return;
        };
        self.keys.set_key(&code, pressed);
    }
}
