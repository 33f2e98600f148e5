//! Controller Configuration
//!
//! Tunables for the WASD controller. Every field has a default, so a JSON
//! document only needs the fields it overrides:
//!
//! ```json
//! { "acceleration": 120, "fly": true, "wsAxis": "y" }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::Axis;

/// Default velocity decay rate (1/s).
pub const DEFAULT_EASING: f32 = 20.0;

/// Default acceleration (units/s^2).
pub const DEFAULT_ACCELERATION: f32 = 65.0;

/// How velocity decays each tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecayModel {
    /// `v -= v * easing * dt`. Overshoots and oscillates once
    /// `easing * dt > 2`.
    #[default]
    Euler,
    /// `v *= exp(-easing * dt)`. Never changes sign.
    Exponential,
}

impl DecayModel {
    /// Factor applied to velocity for a step of `delta` seconds.
    #[inline]
    pub fn factor(self, easing: f32, delta: f32) -> f32 {
        match self {
            DecayModel::Euler => 1.0 - easing * delta,
            DecayModel::Exponential => (-easing * delta).exp(),
        }
    }
}

/// Errors raised while loading or validating a configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid value for `{field}`: {value} ({reason})")]
    InvalidValue {
        field: &'static str,
        value: f32,
        reason: &'static str,
    },
}

/// Configuration for [`WasdControls`](crate::WasdControls).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WasdConfig {
    /// Velocity decay rate (1/s)
    pub easing: f32,
    /// Acceleration while a key is held (units/s^2)
    pub acceleration: f32,
    /// Master toggle for key-driven acceleration
    pub enabled: bool,
    /// Let look pitch tilt the movement direction
    pub fly: bool,
    /// Axis driven by forward/back keys
    pub ws_axis: Axis,
    /// Axis driven by left/right keys
    pub ad_axis: Axis,
    pub ws_inverted: bool,
    pub ws_enabled: bool,
    pub ad_inverted: bool,
    pub ad_enabled: bool,
    pub decay: DecayModel,
}

impl Default for WasdConfig {
    fn default() -> Self {
        Self {
            easing: DEFAULT_EASING,
            acceleration: DEFAULT_ACCELERATION,
            enabled: true,
            fly: false,
            ws_axis: Axis::Z,
            ad_axis: Axis::X,
            ws_inverted: false,
            ws_enabled: true,
            ad_inverted: false,
            ad_enabled: true,
            decay: DecayModel::Euler,
        }
    }
}

impl WasdConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sign applied to left/right acceleration.
    #[inline]
    pub fn ad_sign(&self) -> f32 {
        if self.ad_inverted { -1.0 } else { 1.0 }
    }

    /// Sign applied to forward/back acceleration.
    #[inline]
    pub fn ws_sign(&self) -> f32 {
        if self.ws_inverted { -1.0 } else { 1.0 }
    }

    /// Parse and validate a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        log::debug!("loaded controller config from {}", path.display());
        Ok(config)
    }

    /// Serialize as pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject rates the integrator cannot work with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_rate("easing", self.easing)?;
        check_rate("acceleration", self.acceleration)?;
        if self.enabled && self.ws_enabled && self.ad_enabled && self.ws_axis == self.ad_axis {
            log::warn!(
                "wsAxis and adAxis are both `{}`; both key pairs drive the same component",
                self.ws_axis
            );
        }
        Ok(())
    }
}

fn check_rate(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if !value.is_finite() {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must be finite",
        });
    }
    if value < 0.0 {
        return Err(ConfigError::InvalidValue {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}
