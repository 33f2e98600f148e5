//! Motion Module
//!
//! Velocity integration for keyboard-driven movement.
//!
//! - [`WasdConfig`] - Tunables (easing, acceleration, axis selection, fly mode)
//! - [`Axis`] - Which spatial component a key pair drives
//! - [`MotionIntegrator`] - Per-frame decay, acceleration and displacement

pub mod axis;
pub mod config;
pub mod integrator;

pub use axis::{Axis, ParseAxisError};
pub use config::{ConfigError, DEFAULT_ACCELERATION, DEFAULT_EASING, DecayModel, WasdConfig};
pub use integrator::{MAX_DELTA, MotionIntegrator, ResetReason, movement_vector};
