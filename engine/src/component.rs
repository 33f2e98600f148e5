//! WASD Controls Component
//!
//! Owns the input tracker and motion integrator for one entity and wires
//! them to the host lifecycle:
//!
//! - `new` attaches focus/visibility handling
//! - `play` starts listening to keys, `pause` stops and forgets held keys
//! - `remove` tears everything down for good
//! - `tick` runs once per frame while playing
//!
//! # Usage
//!
//! ```rust,ignore
//! use wasd_motion_engine::{SimpleTransform, WasdConfig, WasdControls};
//!
//! let mut controls = WasdControls::new(WasdConfig::default());
//! let mut transform = SimpleTransform::new();
//! controls.play();
//!
//! // From the event loop:
//! controls.handle_window_event(&event);
//!
//! // Each frame:
//! controls.tick(now_seconds, &mut transform);
//! ```

use glam::Vec3;
use winit::event::{ElementState, WindowEvent};
use winit::keyboard::ModifiersState;

use crate::input::{
    CapturePredicate, DefaultCapturePredicate, DefaultKeyTable, InputTracker, KeyState,
    LegacyKeyTable, RawKeyEvent,
};
use crate::motion::{MotionIntegrator, WasdConfig};
use crate::transform::{EntityTransform, apply_displacement};

/// Lifecycle state of the component.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Initialised or paused: key events are ignored and ticks do nothing.
    Idle,
    /// Playing: key events are tracked and ticks move the entity.
    Active,
    /// Removed: terminal, nothing is tracked any more.
    Removed,
}

/// Keyboard movement controller for a single entity.
#[derive(Debug)]
pub struct WasdControls<P = DefaultCapturePredicate, T = DefaultKeyTable> {
    config: WasdConfig,
    tracker: InputTracker<P, T>,
    integrator: MotionIntegrator,
    lifecycle: Lifecycle,
    key_listeners: bool,
    visibility_listeners: bool,
    modifiers: ModifiersState,
}

impl WasdControls {
    /// Component with the default capture predicate and legacy key table.
    pub fn new(config: WasdConfig) -> Self {
        Self::with_collaborators(config, DefaultCapturePredicate, DefaultKeyTable::default())
    }
}

impl<P: CapturePredicate, T: LegacyKeyTable> WasdControls<P, T> {
    /// Component with a custom capture predicate and legacy key table.
    pub fn with_collaborators(config: WasdConfig, predicate: P, table: T) -> Self {
        log::debug!("wasd controls initialised with {config:?}");
        Self {
            config,
            tracker: InputTracker::with_collaborators(predicate, table),
            integrator: MotionIntegrator::new(),
            lifecycle: Lifecycle::Idle,
            key_listeners: false,
            visibility_listeners: true,
            modifiers: ModifiersState::empty(),
        }
    }

    pub fn config(&self) -> &WasdConfig {
        &self.config
    }

    /// Replace the configuration. The next tick resets velocity.
    pub fn update_config(&mut self, config: WasdConfig) {
        if config == self.config {
            return;
        }
        log::debug!("wasd config changed: {config:?}");
        self.config = config;
        self.integrator.mark_config_changed();
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    /// Whether key events are currently being tracked.
    pub fn is_listening(&self) -> bool {
        self.key_listeners
    }

    pub fn keys(&self) -> &KeyState {
        self.tracker.keys()
    }

    pub fn velocity(&self) -> Vec3 {
        self.integrator.velocity()
    }

    pub fn integrator(&self) -> &MotionIntegrator {
        &self.integrator
    }

    /// Start tracking keys and moving on tick.
    pub fn play(&mut self) {
        if self.lifecycle == Lifecycle::Removed {
            log::warn!("play called on removed wasd controls");
            return;
        }
        self.key_listeners = true;
        self.lifecycle = Lifecycle::Active;
    }

    /// Stop tracking keys and forget any that are held.
    pub fn pause(&mut self) {
        self.tracker.reset();
        self.key_listeners = false;
        if self.lifecycle == Lifecycle::Active {
            self.lifecycle = Lifecycle::Idle;
        }
    }

    /// Tear down for good.
    pub fn remove(&mut self) {
        self.pause();
        self.visibility_listeners = false;
        self.lifecycle = Lifecycle::Removed;
    }

    pub fn on_blur(&mut self) {
        if self.visibility_listeners {
            self.pause();
        }
    }

    pub fn on_focus(&mut self) {
        if self.visibility_listeners {
            self.play();
        }
    }

    pub fn on_visibility_change(&mut self, hidden: bool) {
        if hidden {
            self.on_blur();
        } else {
            self.on_focus();
        }
    }

    pub fn on_key_down(&mut self, event: &RawKeyEvent) {
        if self.key_listeners {
            self.tracker.on_key_down(event);
        }
    }

    pub fn on_key_up(&mut self, event: &RawKeyEvent) {
        if self.key_listeners {
            self.tracker.on_key_up(event);
        }
    }

    /// Route a winit window event. Returns `true` if the event was consumed.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> bool {
        match event {
            WindowEvent::KeyboardInput { event, .. } => {
                let raw = RawKeyEvent::from_winit(event, self.modifiers);
                match event.state {
                    ElementState::Pressed => self.on_key_down(&raw),
                    ElementState::Released => self.on_key_up(&raw),
                }
                true
            }
            WindowEvent::ModifiersChanged(modifiers) => {
                self.modifiers = modifiers.state();
                false
            }
            WindowEvent::Focused(focused) => {
                if *focused {
                    self.on_focus();
                } else {
                    self.on_blur();
                }
                true
            }
            WindowEvent::Occluded(hidden) => {
                self.on_visibility_change(*hidden);
                true
            }
            _ => false,
        }
    }

    /// Displacement for this frame without touching any transform.
    ///
    /// Returns zero while not playing; velocity and timing are left alone so
    /// a long pause shows up as a frame gap on resume.
    pub fn step(&mut self, now: f64, orientation: Option<Vec3>) -> Vec3 {
        if self.lifecycle != Lifecycle::Active {
            return Vec3::ZERO;
        }
        self.integrator
            .tick(now, &self.config, self.tracker.keys(), orientation)
    }

    /// Advance one frame and move `transform`.
    pub fn tick<E: EntityTransform + ?Sized>(&mut self, now: f64, transform: &mut E) -> Vec3 {
        let displacement = self.step(now, transform.rotation_degrees());
        if self.lifecycle == Lifecycle::Active && self.integrator.last_reset().is_none() {
            apply_displacement(transform, displacement);
        }
        displacement
    }
}
