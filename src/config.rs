//! Simulation configuration
//!
//! Every tunable lives in `crate::consts`; `SimConfig::default()` gathers them
//! into one immutable value handed to the simulation at construction.

use glam::DVec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;
use crate::vec2;

/// How overlapping balls are pushed apart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
pub enum Correction {
    /// Remove the whole overlap in one substep
    #[default]
    Full,
    /// Remove `overlap * delta * coefficient` per substep, `delta` being the whole frame (soft repulsion)
    Scaled { coefficient: f64 },
}

impl Correction {
    /// Fraction of the half-overlap applied on each substep of a `delta`-second frame
    pub fn factor(&self, delta: f64) -> f64 {
        match self {
            Correction::Full => 1.0,
            Correction::Scaled { coefficient } => delta * coefficient,
        }
    }
}

/// Configuration rejected by `SimConfig::validate`
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("viewport must be positive, got {width}x{height}")]
    Viewport { width: f64, height: f64 },

    #[error("restitution must be within [0, 1], got {0}")]
    Restitution(f64),

    #[error("air damping must be non-negative, got {0}")]
    AirDamping(f64),

    #[error("invalid spawn radius range [{min}, {max})")]
    RadiusRange { min: f64, max: f64 },

    #[error("a ball of radius {radius} does not fit a {width}x{height} viewport")]
    RadiusTooLarge { radius: f64, width: f64, height: f64 },

    #[error("{name} must be positive, got {value}")]
    NotPositive { name: &'static str, value: f64 },

    #[error("max_bodies must be at least 1")]
    ZeroCapacity,
}

/// Immutable simulation parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimConfig {
    /// Viewport size (pixels)
    pub width: f64,
    pub height: f64,

    // === Forces ===
    /// Downward acceleration
    pub gravity: f64,
    /// Velocity decay per second
    pub air_damping: f64,
    /// Damping constant for wall bounces and collision impulses
    pub restitution: f64,

    // === Collisions ===
    pub correction: Correction,
    /// Minimum center distance with a usable collision normal
    pub epsilon: f64,

    // === Stepping ===
    pub substeps: u32,
    /// Multiplier from wall-clock to simulated time
    pub time_scale: f64,
    /// Cap on wall-clock frame time fed to the sim
    pub max_frame_dt: f64,

    // === Spawning ===
    pub spawn_interval: f64,
    pub spawn_position: DVec2,
    pub spawn_velocity: DVec2,
    pub spawn_radius_min: f64,
    pub spawn_radius_max: f64,
    /// Oldest ball is evicted when a spawn would exceed this
    pub max_bodies: Option<usize>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,

            gravity: GRAVITY,
            air_damping: AIR_DAMPING,
            restitution: RESTITUTION,

            correction: Correction::Full,
            epsilon: COLLISION_EPSILON,

            substeps: SUBSTEPS,
            time_scale: TIME_SCALE,
            max_frame_dt: MAX_FRAME_DT,

            spawn_interval: SPAWN_INTERVAL,
            spawn_position: vec2(SPAWN_POS),
            spawn_velocity: vec2(SPAWN_VEL),
            spawn_radius_min: SPAWN_RADIUS_MIN,
            spawn_radius_max: SPAWN_RADIUS_MAX,
            max_bodies: None,
        }
    }
}

impl SimConfig {
    /// Viewport size as a vector
    #[inline]
    pub fn viewport(&self) -> DVec2 {
        DVec2::new(self.width, self.height)
    }

    /// Same config with time-scaled soft repulsion instead of full correction
    pub fn with_scaled_correction(mut self) -> Self {
        self.correction = Correction::Scaled {
            coefficient: RESPONSE_COEF,
        };
        self
    }

    /// Check every invariant the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ConfigError::Viewport {
                width: self.width,
                height: self.height,
            });
        }
        if !(0.0..=1.0).contains(&self.restitution) {
            return Err(ConfigError::Restitution(self.restitution));
        }
        if !(self.air_damping >= 0.0) {
            return Err(ConfigError::AirDamping(self.air_damping));
        }
        if !(self.spawn_radius_min > 0.0 && self.spawn_radius_min < self.spawn_radius_max) {
            return Err(ConfigError::RadiusRange {
                min: self.spawn_radius_min,
                max: self.spawn_radius_max,
            });
        }
        if 2.0 * self.spawn_radius_max > self.width.min(self.height) {
            return Err(ConfigError::RadiusTooLarge {
                radius: self.spawn_radius_max,
                width: self.width,
                height: self.height,
            });
        }

        let positive = [
            ("epsilon", self.epsilon),
            ("time_scale", self.time_scale),
            ("max_frame_dt", self.max_frame_dt),
            ("spawn_interval", self.spawn_interval),
        ];
        for (name, value) in positive {
            if !(value > 0.0) {
                return Err(ConfigError::NotPositive { name, value });
            }
        }
        if let Correction::Scaled { coefficient } = self.correction {
            if !(coefficient > 0.0) {
                return Err(ConfigError::NotPositive {
                    name: "correction coefficient",
                    value: coefficient,
                });
            }
        }

        if self.max_bodies == Some(0) {
            return Err(ConfigError::ZeroCapacity);
        }
        Ok(())
    }
}
