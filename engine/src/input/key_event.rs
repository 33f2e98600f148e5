//! Raw Key Events
//!
//! Platform-neutral description of a keyboard event as it arrives from the
//! event source, plus the capture predicate that decides whether the
//! controller should react to it.

use winit::keyboard::{ModifiersState, PhysicalKey};

use super::ModifierState;

/// Where the event was dispatched from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum EventTarget {
    /// The scene itself has focus (no widget is focused).
    #[default]
    Document,
    /// An editable text widget has focus; keystrokes are text, not movement.
    Editable,
    /// Some other focused, non-editable element.
    Other,
}

/// A keyboard event before key resolution.
///
/// `code` is the native physical key identifier when the source provides one.
/// `key_code` is the numeric legacy code some sources still send instead.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub code: Option<String>,
    pub key_code: Option<u32>,
    pub modifiers: ModifierState,
    pub target: EventTarget,
}

impl RawKeyEvent {
    /// Event carrying a native key identifier.
    pub fn with_code(code: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            ..Default::default()
        }
    }

    /// Event carrying only a legacy numeric key code.
    pub fn with_key_code(key_code: u32) -> Self {
        Self {
            key_code: Some(key_code),
            ..Default::default()
        }
    }

    /// Set the modifier state.
    pub fn modifiers(mut self, modifiers: ModifierState) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Set the dispatch target.
    pub fn target(mut self, target: EventTarget) -> Self {
        self.target = target;
        self
    }

    /// Translate a winit keyboard event.
    ///
    /// winit's `KeyCode` debug names match the physical key identifiers used
    /// everywhere else (`KeyW`, `ArrowLeft`, ...). Unidentified keys yield an
    /// event with no identifier, which the tracker ignores.
    pub fn from_winit(event: &winit::event::KeyEvent, modifiers: ModifiersState) -> Self {
        let code = match event.physical_key {
            PhysicalKey::Code(code) => Some(format!("{code:?}")),
            PhysicalKey::Unidentified(_) => None,
        };
        Self {
            code,
            key_code: None,
            modifiers: ModifierState {
                shift: modifiers.shift_key(),
                ctrl: modifiers.control_key(),
                alt: modifiers.alt_key(),
                meta: modifiers.super_key(),
            },
            target: EventTarget::Document,
        }
    }
}

/// Decides whether a raw event is eligible for movement input.
pub trait CapturePredicate {
    fn should_capture(&self, event: &RawKeyEvent) -> bool;
}

/// Captures events aimed at the scene, skipping meta-key chords and events
/// typed into other focused elements.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCapturePredicate;

impl CapturePredicate for DefaultCapturePredicate {
    fn should_capture(&self, event: &RawKeyEvent) -> bool {
        if event.modifiers.meta {
            return false;
        }
        event.target == EventTarget::Document
    }
}

impl<F> CapturePredicate for F
where
    F: Fn(&RawKeyEvent) -> bool,
{
    fn should_capture(&self, event: &RawKeyEvent) -> bool {
        self(event)
    }
}
