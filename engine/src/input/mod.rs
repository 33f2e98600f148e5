//! Input Module
//!
//! Platform-agnostic keyboard tracking for the movement controller.
//! Raw events from any source are filtered, resolved to canonical key
//! identifiers, and recorded as pressed/released state.
//!
//! # Example
//!
//! ```rust,ignore
//! use wasd_motion_engine::input::{InputTracker, RawKeyEvent};
//!
//! let mut tracker = InputTracker::new();
//!
//! tracker.on_key_down(&RawKeyEvent::with_code("KeyW"));
//! tracker.on_key_down(&RawKeyEvent::with_key_code(65)); // legacy code for KeyA
//! assert!(tracker.is_pressed("KeyW"));
//! assert!(tracker.is_pressed("KeyA"));
//!
//! // Focus lost
//! tracker.reset();
//! ```

pub mod bindings;
pub mod key_event;
pub mod keyboard;
pub mod shared;
pub mod tracker;

// Re-export commonly used types at module level
pub use bindings::{DefaultKeyTable, LegacyKeyTable, MoveAction, MovementBindings};
pub use key_event::{CapturePredicate, DefaultCapturePredicate, EventTarget, RawKeyEvent};
pub use keyboard::{KeyState, KeyStore, ModifierState};
pub use shared::SharedKeyState;
pub use tracker::InputTracker;
