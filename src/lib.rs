//! Ball Drop - balls bouncing inside a rectangular viewport
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, substepped integration, collisions, spawning)
//! - `config`: Immutable simulation configuration built from `consts`
//! - `platform`: Window/renderer boundary (events, frame timing, drawing)
//! - `renderer`: CPU tessellation and a headless `Window`
//! - `app`: Frame loop tying the window to the simulation

pub mod app;
pub mod config;
pub mod platform;
pub mod renderer;
pub mod sim;

pub use app::App;
pub use config::{ConfigError, Correction, SimConfig};
pub use sim::{Body, Simulation, Spawner};

use glam::DVec2;

/// Simulation configuration constants
pub mod consts {
    /// Viewport dimensions (pixels)
    pub const SCREEN_WIDTH: f64 = 1920.0;
    pub const SCREEN_HEIGHT: f64 = 1080.0;

    /// Downward acceleration (pixels/s²)
    pub const GRAVITY: f64 = 9.8;
    /// Air resistance, fraction of velocity lost per second
    pub const AIR_DAMPING: f64 = 0.01;
    /// Velocity kept on a wall bounce or collision impulse (< 1)
    pub const RESTITUTION: f64 = 0.9;
    /// Repulsion strength for `Correction::Scaled`
    pub const RESPONSE_COEF: f64 = 3.0;
    /// Centers closer than this are not separated (no usable normal)
    pub const COLLISION_EPSILON: f64 = 0.0001;

    /// Fixed substeps per frame
    pub const SUBSTEPS: u32 = 8;
    /// Simulation speed factor applied to wall-clock frame time
    pub const TIME_SCALE: f64 = 1.0;
    /// Longest frame the sim will integrate in one go (seconds)
    pub const MAX_FRAME_DT: f64 = 0.1;

    /// Spawn cadence (simulated seconds)
    pub const SPAWN_INTERVAL: f64 = 1.0;
    /// Spawn point (top-left of the ball's bounding box)
    pub const SPAWN_POS: (f64, f64) = (400.0, 100.0);
    /// Spawned ball velocity (pixels/s)
    pub const SPAWN_VEL: (f64, f64) = (200.0, 0.0);
    /// Spawned ball radius range
    pub const SPAWN_RADIUS_MIN: f64 = 5.0;
    pub const SPAWN_RADIUS_MAX: f64 = 25.0;
}

/// Build a `DVec2` from a constant tuple
#[inline]
pub fn vec2(t: (f64, f64)) -> DVec2 {
    DVec2::new(t.0, t.1)
}

/// Clamp a top-left position so a circle of `radius` lies fully inside `size`
#[inline]
pub fn clamp_to_viewport(pos: DVec2, radius: f64, size: DVec2) -> DVec2 {
    let max = (size - DVec2::splat(2.0 * radius)).max(DVec2::ZERO);
    pos.clamp(DVec2::ZERO, max)
}
