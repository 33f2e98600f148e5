//! WASD Motion Engine
//!
//! Keyboard-driven movement for scene entities: held direction keys are
//! integrated into a smoothed velocity, and the velocity is turned into a
//! per-frame displacement relative to the entity's orientation.
//!
//! # Modules
//!
//! - [`input`] - Key event filtering, key resolution and pressed-key tracking
//! - [`motion`] - Configuration and the per-frame velocity integrator
//! - [`transform`] - Access to the driven entity's position and rotation
//! - [`component`] - `WasdControls`, tying the above to a host lifecycle
//!
//! # Example
//!
//! ```rust,ignore
//! use wasd_motion_engine::{RawKeyEvent, SimpleTransform, WasdConfig, WasdControls};
//!
//! let mut controls = WasdControls::new(WasdConfig::default());
//! let mut player = SimpleTransform::new();
//! controls.play();
//!
//! controls.on_key_down(&RawKeyEvent::with_code("KeyW"));
//! controls.tick(0.0, &mut player); // first tick only starts the clock
//! controls.tick(0.016, &mut player);
//! assert!(player.position.z < 0.0);
//! ```

pub mod component;
pub mod input;
pub mod motion;
pub mod transform;

// Re-export commonly used types
pub use component::{Lifecycle, WasdControls};
pub use input::{InputTracker, KeyState, RawKeyEvent};
pub use motion::{Axis, ConfigError, DecayModel, MotionIntegrator, WasdConfig};
pub use transform::{EntityTransform, SimpleTransform, apply_displacement};
