//! Spawn cadence
//!
//! Accumulates simulated time and drops a new ball at the spawn point each
//! time the interval is exceeded. Radii come from a seeded PCG stream so a
//! run is reproducible from its seed.

use glam::DVec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use super::world::Simulation;
use crate::config::SimConfig;

/// Periodic ball spawner
#[derive(Debug, Clone)]
pub struct Spawner {
    /// Seed the radius stream started from
    pub seed: u64,
    rng: Pcg32,
    interval: f64,
    elapsed: f64,
    position: DVec2,
    velocity: DVec2,
    radius_min: f64,
    radius_max: f64,
}

impl Spawner {
    pub fn new(config: &SimConfig, seed: u64) -> Self {
        Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            interval: config.spawn_interval,
            elapsed: 0.0,
            position: config.spawn_position,
            velocity: config.spawn_velocity,
            radius_min: config.spawn_radius_min,
            radius_max: config.spawn_radius_max,
        }
    }

    /// Simulated time since the last spawn
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Add `dt` to the clock; true (and the clock restarts) once it passes the interval
    pub fn advance(&mut self, dt: f64) -> bool {
        self.elapsed += dt;
        if self.elapsed > self.interval {
            self.elapsed = 0.0;
            true
        } else {
            false
        }
    }

    /// Uniform radius in `[radius_min, radius_max)`
    pub fn sample_radius(&mut self) -> f64 {
        self.rng.random_range(self.radius_min..self.radius_max)
    }

    /// Advance the clock and spawn into `sim` when due; returns the new ball's index
    pub fn update(&mut self, sim: &mut Simulation, dt: f64) -> Option<usize> {
        if !self.advance(dt) {
            return None;
        }
        let radius = self.sample_radius();
        sim.spawn(radius, self.position, self.velocity)
    }
}
