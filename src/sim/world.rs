//! Simulation state: the ordered set of balls and the config they live under
//!
//! Stepping lives in `tick.rs`.

use glam::DVec2;

use super::body::{Body, Rgba};
use crate::config::{ConfigError, SimConfig};

/// Owns every ball; insertion order decides which ball is "A" in a pair
#[derive(Debug, Clone)]
pub struct Simulation {
    pub(super) config: SimConfig,
    pub(super) bodies: Vec<Body>,
    /// Total simulated seconds
    pub(super) time: f64,
}

impl Simulation {
    /// Create an empty simulation, rejecting an invalid config
    pub fn new(config: SimConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self {
            config,
            bodies: Vec::new(),
            time: 0.0,
        })
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    /// Bodies in insertion order
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn len(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Simulated seconds advanced so far
    pub fn time(&self) -> f64 {
        self.time
    }

    /// Add a ball with top-left `position`; returns its index
    ///
    /// Non-positive or non-finite radii, and balls too large to fit the
    /// viewport, are refused. With `max_bodies` set, the oldest ball makes room.
    pub fn spawn(&mut self, radius: f64, position: DVec2, velocity: DVec2) -> Option<usize> {
        if !(radius.is_finite() && radius > 0.0) {
            log::warn!("Refusing to spawn ball with radius {}", radius);
            return None;
        }
        if 2.0 * radius > self.config.width.min(self.config.height) {
            log::warn!(
                "Refusing to spawn ball with radius {} in a {}x{} viewport",
                radius,
                self.config.width,
                self.config.height
            );
            return None;
        }
        if !(position.is_finite() && velocity.is_finite()) {
            log::warn!("Refusing to spawn ball at {:?} moving {:?}", position, velocity);
            return None;
        }

        if let Some(max) = self.config.max_bodies {
            while self.bodies.len() >= max {
                let evicted = self.bodies.remove(0);
                log::debug!("Capacity {} reached, evicted ball r={:.1}", max, evicted.radius());
            }
        }

        self.bodies.push(Body::new(radius, position, velocity));
        log::debug!(
            "Spawned ball #{} r={:.1} at ({:.1}, {:.1})",
            self.bodies.len(),
            radius,
            position.x,
            position.y
        );
        Some(self.bodies.len() - 1)
    }

    /// Visit each ball's draw data: top-left position, radius, current color
    pub fn for_each_body<F>(&self, mut visit: F)
    where
        F: FnMut(DVec2, f64, Rgba),
    {
        for body in &self.bodies {
            visit(body.position(), body.radius(), body.draw_color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::body::BALL_COLOR;

    #[test]
    fn test_new_rejects_invalid_config() {
        let config = SimConfig {
            restitution: -0.1,
            ..Default::default()
        };
        assert!(Simulation::new(config).is_err());
    }

    #[test]
    fn test_spawn_appends_in_order() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        assert!(sim.is_empty());
        assert_eq!(sim.spawn(20.0, DVec2::new(400.0, 0.0), DVec2::ZERO), Some(0));
        assert_eq!(sim.spawn(15.0, DVec2::new(400.0, 100.0), DVec2::ZERO), Some(1));
        assert_eq!(sim.len(), 2);
        assert_eq!(sim.bodies()[1].radius(), 15.0);
    }

    #[test]
    fn test_spawn_rejects_bad_radius() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        assert_eq!(sim.spawn(0.0, DVec2::ZERO, DVec2::ZERO), None);
        assert_eq!(sim.spawn(f64::NAN, DVec2::ZERO, DVec2::ZERO), None);
        assert_eq!(sim.spawn(5.0, DVec2::new(f64::INFINITY, 0.0), DVec2::ZERO), None);
        assert!(sim.is_empty());
    }

    #[test]
    fn test_spawn_rejects_oversized_radius() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        // 1080px tall viewport fits at most r=540
        assert_eq!(sim.spawn(600.0, DVec2::new(10.0, 10.0), DVec2::ZERO), None);
        assert_eq!(sim.spawn(540.0, DVec2::new(10.0, 10.0), DVec2::ZERO), Some(0));

        sim.step(0.016, 8);
        let body = &sim.bodies()[0];
        assert!(body.position().y >= 0.0 && body.position().y <= 1080.0 - 2.0 * body.radius());
    }

    #[test]
    fn test_capacity_evicts_oldest() {
        let config = SimConfig {
            max_bodies: Some(2),
            ..Default::default()
        };
        let mut sim = Simulation::new(config).unwrap();
        sim.spawn(5.0, DVec2::ZERO, DVec2::ZERO);
        sim.spawn(6.0, DVec2::ZERO, DVec2::ZERO);
        assert_eq!(sim.spawn(7.0, DVec2::ZERO, DVec2::ZERO), Some(1));
        let radii: Vec<f64> = sim.bodies().iter().map(|b| b.radius()).collect();
        assert_eq!(radii, vec![6.0, 7.0]);
    }

    #[test]
    fn test_for_each_body_visits_in_order() {
        let mut sim = Simulation::new(SimConfig::default()).unwrap();
        sim.spawn(20.0, DVec2::new(1.0, 2.0), DVec2::ZERO);
        sim.spawn(15.0, DVec2::new(3.0, 4.0), DVec2::ZERO);

        let mut seen = Vec::new();
        sim.for_each_body(|pos, radius, color| seen.push((pos, radius, color)));
        assert_eq!(
            seen,
            vec![
                (DVec2::new(1.0, 2.0), 20.0, BALL_COLOR),
                (DVec2::new(3.0, 4.0), 15.0, BALL_COLOR),
            ]
        );
    }
}
