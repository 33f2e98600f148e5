//! Motion Integrator
//!
//! Integrates held movement keys into a smoothed velocity and turns that
//! velocity into a per-frame displacement.
//!
//! # Per-tick steps
//!
//! 1. Elapsed time is measured from the previous call, whatever that call did.
//! 2. On the first call or after a gap longer than [`MAX_DELTA`], both
//!    configured velocity components are zeroed and the displacement is zero.
//!    A configuration change zeroes the whole velocity, since the axes it
//!    previously drove may no longer be configured.
//! 3. Velocity decays by the configured [`DecayModel`](super::DecayModel).
//! 4. Held keys accelerate the configured axes.
//! 5. `velocity * dt` is rotated by the entity orientation (yaw, then pitch
//!    when flying, then roll).

use glam::{EulerRot, Quat, Vec3};

use super::WasdConfig;
use crate::input::{KeyState, MoveAction, MovementBindings};

/// Longest frame gap (seconds) that is integrated rather than treated as a reset.
pub const MAX_DELTA: f32 = 0.2;

/// Why a tick produced no motion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetReason {
    FirstTick,
    ConfigChanged,
    FrameGap,
}

/// Velocity state carried between frames.
#[derive(Debug, Clone)]
pub struct MotionIntegrator {
    /// Current velocity (units/s); ticks only write the two configured axes
    velocity: Vec3,
    /// Timestamp of the previous tick (seconds)
    prev_time: Option<f64>,
    /// Set by `mark_config_changed`, consumed by the next tick
    config_changed: bool,
    bindings: MovementBindings,
    last_reset: Option<ResetReason>,
}

impl Default for MotionIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl MotionIntegrator {
    pub fn new() -> Self {
        Self::with_bindings(MovementBindings::default())
    }

    /// Integrator reading movement from custom key bindings.
    pub fn with_bindings(bindings: MovementBindings) -> Self {
        Self {
            velocity: Vec3::ZERO,
            prev_time: None,
            config_changed: false,
            bindings,
            last_reset: None,
        }
    }

    /// Current velocity in units per second.
    #[inline]
    pub fn velocity(&self) -> Vec3 {
        self.velocity
    }

    /// Overwrite the velocity (e.g. for knockback or tests).
    pub fn set_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    pub fn bindings(&self) -> &MovementBindings {
        &self.bindings
    }

    /// Why the most recent tick was a reset, if it was one.
    pub fn last_reset(&self) -> Option<ResetReason> {
        self.last_reset
    }

    /// The next tick resets instead of integrating.
    pub fn mark_config_changed(&mut self) {
        self.config_changed = true;
    }

    /// Advance one frame and return the displacement for this frame.
    ///
    /// `now` is a monotonic timestamp in seconds. `orientation` is the entity
    /// rotation in degrees (x = pitch, y = yaw, z = roll), or `None` when the
    /// entity has no resolved rotation yet.
    pub fn tick(
        &mut self,
        now: f64,
        config: &WasdConfig,
        keys: &KeyState,
        orientation: Option<Vec3>,
    ) -> Vec3 {
        let elapsed = self.prev_time.map(|prev| (now - prev) as f32);
        self.prev_time = Some(now);
        let config_changed = std::mem::take(&mut self.config_changed);

        let reset = match elapsed {
            None => Some(ResetReason::FirstTick),
            Some(_) if config_changed => Some(ResetReason::ConfigChanged),
            Some(delta) if !(0.0..=MAX_DELTA).contains(&delta) => Some(ResetReason::FrameGap),
            Some(_) => None,
        };
        self.last_reset = reset;
        let delta = match (reset, elapsed) {
            (None, Some(delta)) => delta,
            _ => {
                log::trace!("velocity reset ({reset:?}, elapsed {elapsed:?})");
                if reset == Some(ResetReason::ConfigChanged) {
                    self.velocity = Vec3::ZERO;
                    return Vec3::ZERO;
                }
                *config.ad_axis.component_mut(&mut self.velocity) = 0.0;
                *config.ws_axis.component_mut(&mut self.velocity) = 0.0;
                return Vec3::ZERO;
            }
        };

        self.decay(config, delta);
        if config.enabled {
            self.accelerate(config, keys, delta);
        }

        movement_vector(self.velocity, delta, config.fly, orientation)
    }

    fn decay(&mut self, config: &WasdConfig, delta: f32) {
        let factor = config.decay.factor(config.easing, delta);
        *config.ad_axis.component_mut(&mut self.velocity) *= factor;
        *config.ws_axis.component_mut(&mut self.velocity) *= factor;
    }

    fn accelerate(&mut self, config: &WasdConfig, keys: &KeyState, delta: f32) {
        let step = config.acceleration * delta;
        let held = |action| self.bindings.is_action_pressed(action, keys);

        if config.ad_enabled {
            let mut change = 0.0;
            if held(MoveAction::Left) {
                change -= config.ad_sign() * step;
            }
            if held(MoveAction::Right) {
                change += config.ad_sign() * step;
            }
            *config.ad_axis.component_mut(&mut self.velocity) += change;
        }

        if config.ws_enabled {
            let mut change = 0.0;
            if held(MoveAction::Forward) {
                change -= config.ws_sign() * step;
            }
            if held(MoveAction::Back) {
                change += config.ws_sign() * step;
            }
            *config.ws_axis.component_mut(&mut self.velocity) += change;
        }
    }
}

/// Displacement for `delta` seconds at `velocity`, rotated into the entity's
/// frame.
///
/// Rotation order is yaw (Y), pitch (X), roll (Z). Pitch is dropped unless
/// `fly` is set so ground movement stays level when looking up or down.
/// Roll is always applied, so a rolled entity strafes along its tilted axes
/// rather than the level ones.
pub fn movement_vector(velocity: Vec3, delta: f32, fly: bool, orientation: Option<Vec3>) -> Vec3 {
    let direction = velocity * delta;
    let Some(degrees) = orientation else {
        return direction;
    };

    let pitch = if fly { degrees.x.to_radians() } else { 0.0 };
    let rotation = Quat::from_euler(
        EulerRot::YXZ,
        degrees.y.to_radians(),
        pitch,
        degrees.z.to_radians(),
    );
    rotation * direction
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::motion::{Axis, DecayModel};

    const EPS: f32 = 1e-4;

    fn keys(codes: &[&str]) -> KeyState {
        let mut keys = KeyState::new();
        for code in codes {
            keys.set(code, true);
        }
        keys
    }

    /// Integrator that has already seen its first tick at t = 0.
    fn primed(config: &WasdConfig) -> MotionIntegrator {
        let mut integrator = MotionIntegrator::new();
        integrator.tick(0.0, config, &KeyState::new(), None);
        integrator
    }

    #[test]
    fn test_first_tick_resets() {
        let config = WasdConfig::default();
        let mut integrator = MotionIntegrator::new();
        integrator.set_velocity(Vec3::new(3.0, 4.0, 5.0));

        let d = integrator.tick(10.0, &config, &keys(&["KeyW"]), None);

        assert_eq!(d, Vec3::ZERO);
        assert_eq!(integrator.last_reset(), Some(ResetReason::FirstTick));
        // Only the configured axes (x, z) are cleared
        assert_eq!(integrator.velocity(), Vec3::new(0.0, 4.0, 0.0));
    }

    #[test]
    fn test_forward_scenario() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);

        let d = integrator.tick(0.1, &config, &keys(&["KeyW"]), None);

        assert!((integrator.velocity().z + 6.5).abs() < EPS);
        assert!((d.z + 0.65).abs() < EPS);
        assert!(d.x.abs() < EPS && d.y.abs() < EPS);
        assert_eq!(integrator.last_reset(), None);
    }

    #[test]
    fn test_decay_applied_before_acceleration() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);
        integrator.set_velocity(Vec3::new(0.0, 0.0, -10.0));

        integrator.tick(0.01, &config, &keys(&["KeyW"]), None);

        // -10 * (1 - 20 * 0.01) - 65 * 0.01
        assert!((integrator.velocity().z - (-8.0 - 0.65)).abs() < EPS);
    }

    #[test]
    fn test_idle_decay_is_geometric() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);
        let v0 = Vec3::new(10.0, 0.0, -5.0);
        integrator.set_velocity(v0);

        let dt = 0.01;
        let factor = 1.0 - config.easing * dt;
        let empty = KeyState::new();
        for n in 1..=10 {
            integrator.tick(n as f64 * dt as f64, &config, &empty, None);
            let bound = v0.length() * factor.powi(n) + EPS;
            assert!(integrator.velocity().length() <= bound);
        }
    }

    #[test]
    fn test_large_gap_resets() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);
        integrator.set_velocity(Vec3::new(7.0, 0.0, 7.0));

        let d = integrator.tick(0.25, &config, &keys(&["KeyW", "KeyD"]), None);

        assert_eq!(d, Vec3::ZERO);
        assert_eq!(integrator.velocity(), Vec3::ZERO);
        assert_eq!(integrator.last_reset(), Some(ResetReason::FrameGap));
    }

    #[test]
    fn test_gap_measured_from_reset_tick() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);
        integrator.tick(1.0, &config, &KeyState::new(), None);

        // 1.0 -> 1.1 is a normal frame even though the 1.0 tick was a reset
        integrator.tick(1.1, &config, &keys(&["KeyS"]), None);
        assert!((integrator.velocity().z - 6.5).abs() < EPS);
    }

    #[test]
    fn test_backwards_time_resets() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);
        integrator.tick(1.0, &config, &KeyState::new(), None);

        let d = integrator.tick(0.9, &config, &keys(&["KeyW"]), None);
        assert_eq!(d, Vec3::ZERO);
        assert_eq!(integrator.last_reset(), Some(ResetReason::FrameGap));
    }

    #[test]
    fn test_config_change_resets_once() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);
        integrator.set_velocity(Vec3::new(1.0, 0.0, 1.0));
        integrator.mark_config_changed();

        let d = integrator.tick(0.05, &config, &keys(&["KeyW"]), None);
        assert_eq!(d, Vec3::ZERO);
        assert_eq!(integrator.last_reset(), Some(ResetReason::ConfigChanged));

        let d = integrator.tick(0.1, &config, &keys(&["KeyW"]), None);
        assert!(d.z < 0.0);
    }

    #[test]
    fn test_axis_switch_clears_previous_axis() {
        let before = WasdConfig::default();
        let mut integrator = primed(&before);
        for n in 1..=10 {
            integrator.tick(n as f64 * 0.016, &before, &keys(&["KeyW"]), None);
        }
        assert!(integrator.velocity().z < -1.0);

        // ws moves from z to y; z is no longer decayed by anything
        let after = WasdConfig {
            ws_axis: Axis::Y,
            ..Default::default()
        };
        integrator.mark_config_changed();
        integrator.tick(0.176, &after, &KeyState::new(), None);
        assert_eq!(integrator.velocity(), Vec3::ZERO);

        let empty = KeyState::new();
        for n in 12..=100 {
            let d = integrator.tick(n as f64 * 0.016, &after, &empty, None);
            assert_eq!(d, Vec3::ZERO);
        }
    }

    #[test]
    fn test_coinciding_axes_share_one_component() {
        let config = WasdConfig {
            ws_axis: Axis::X,
            ad_axis: Axis::X,
            ..Default::default()
        };
        let mut integrator = primed(&config);
        integrator.set_velocity(Vec3::new(10.0, 0.0, 0.0));

        // Decay runs once per key pair: 10 * 0.8 * 0.8
        integrator.tick(0.01, &config, &KeyState::new(), None);
        assert!((integrator.velocity().x - 6.4).abs() < EPS);

        // D pushes +x and S pushes +x as well: 6.4 * 0.64 + 0.65 + 0.65
        integrator.tick(0.02, &config, &keys(&["KeyD", "KeyS"]), None);
        assert!((integrator.velocity().x - (4.096 + 1.3)).abs() < EPS);

        // W cancels D on the shared component: only the decay remains
        let v = integrator.velocity().x;
        integrator.tick(0.03, &config, &keys(&["KeyD", "KeyW"]), None);
        assert!((integrator.velocity().x - v * 0.64).abs() < EPS);
        assert_eq!(integrator.velocity().z, 0.0);
    }

    #[test]
    fn test_ad_inversion_flips_sign() {
        let normal = WasdConfig::default();
        let inverted = WasdConfig {
            ad_inverted: true,
            ..Default::default()
        };
        let left = keys(&["KeyA"]);

        let mut a = primed(&normal);
        let mut b = primed(&inverted);
        a.tick(0.05, &normal, &left, None);
        b.tick(0.05, &inverted, &left, None);

        assert!(a.velocity().x < 0.0);
        assert!((a.velocity().x + b.velocity().x).abs() < EPS);
    }

    #[test]
    fn test_ws_disabled_ignores_forward_back() {
        let config = WasdConfig {
            ws_enabled: false,
            ..Default::default()
        };
        let mut integrator = primed(&config);

        for n in 1..=5 {
            integrator.tick(n as f64 * 0.02, &config, &keys(&["KeyW", "ArrowDown"]), None);
            assert_eq!(integrator.velocity().z, 0.0);
        }
    }

    #[test]
    fn test_disabled_only_decays() {
        let config = WasdConfig {
            enabled: false,
            ..Default::default()
        };
        let mut integrator = primed(&config);
        integrator.set_velocity(Vec3::new(0.0, 0.0, -5.0));

        integrator.tick(0.01, &config, &keys(&["KeyW", "KeyA"]), None);

        assert_eq!(integrator.velocity().x, 0.0);
        assert!((integrator.velocity().z + 4.0).abs() < EPS);
    }

    #[test]
    fn test_opposing_keys_cancel() {
        let config = WasdConfig::default();
        let mut integrator = primed(&config);

        integrator.tick(0.05, &config, &keys(&["KeyA", "KeyD", "KeyW", "ArrowDown"]), None);
        assert!(integrator.velocity().x.abs() < EPS);
        assert!(integrator.velocity().z.abs() < EPS);
    }

    #[test]
    fn test_custom_axes() {
        let config = WasdConfig {
            ws_axis: Axis::Y,
            ..Default::default()
        };
        let mut integrator = primed(&config);

        integrator.tick(0.1, &config, &keys(&["KeyW"]), None);
        assert!((integrator.velocity().y + 6.5).abs() < EPS);
        assert_eq!(integrator.velocity().z, 0.0);
    }

    #[test]
    fn test_exponential_decay_never_flips() {
        let config = WasdConfig {
            easing: 20.0,
            decay: DecayModel::Exponential,
            ..Default::default()
        };
        let mut integrator = primed(&config);
        integrator.set_velocity(Vec3::new(4.0, 0.0, 0.0));

        integrator.tick(0.15, &config, &KeyState::new(), None);
        assert!(integrator.velocity().x > 0.0);
        assert!(integrator.velocity().x < 4.0);
    }

    #[test]
    fn test_movement_vector_unrotated() {
        let d = movement_vector(Vec3::new(2.0, 0.0, -4.0), 0.5, false, None);
        assert_eq!(d, Vec3::new(1.0, 0.0, -2.0));
    }

    #[test]
    fn test_movement_vector_yaw_90() {
        let d = movement_vector(
            Vec3::new(1.0, 0.0, 0.0),
            1.0,
            false,
            Some(Vec3::new(0.0, 90.0, 0.0)),
        );
        // Strafing right while facing +90 deg yaw moves along -Z
        assert!(d.x.abs() < EPS);
        assert!((d.z + 1.0).abs() < EPS);
    }

    #[test]
    fn test_movement_vector_pitch_only_when_flying() {
        let forward = Vec3::new(0.0, 0.0, -1.0);
        let look_up = Some(Vec3::new(45.0, 0.0, 0.0));

        let ground = movement_vector(forward, 1.0, false, look_up);
        assert!(ground.y.abs() < EPS);
        assert!((ground.z + 1.0).abs() < EPS);

        let flying = movement_vector(forward, 1.0, true, look_up);
        assert!(flying.y > 0.5);
        assert!((flying.length() - 1.0).abs() < EPS);
    }

    #[test]
    fn test_movement_vector_applies_roll() {
        let right = Vec3::new(1.0, 0.0, 0.0);

        let level = movement_vector(right, 1.0, false, Some(Vec3::ZERO));
        assert!((level - right).length() < EPS);

        // Rolled 90 deg about Z: strafing right moves along +Y
        let rolled = movement_vector(right, 1.0, false, Some(Vec3::new(0.0, 0.0, 90.0)));
        assert!(rolled.x.abs() < EPS);
        assert!((rolled.y - 1.0).abs() < EPS);
    }
}
