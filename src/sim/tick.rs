//! Fixed-substep simulation tick
//!
//! One `step` call splits the frame delta into equal substeps. Each substep
//! integrates every ball, bounces it off the walls, then runs the O(n²)
//! pair pass and finally re-clamps anything correction pushed out of bounds.

use super::collision::{
    ball_ball_collision, ball_boundary_collision, bounce_scale, collision_impulse,
};
use super::world::Simulation;
use crate::clamp_to_viewport;

impl Simulation {
    /// Advance by `delta` seconds in `substeps` equal slices
    ///
    /// `substeps == 0` runs one slice. A non-finite `delta` is refused and
    /// leaves the state untouched. Negative deltas run time backward.
    pub fn step(&mut self, delta: f64, substeps: u32) {
        if !delta.is_finite() {
            log::warn!("Ignoring non-finite step delta {}", delta);
            return;
        }

        let substeps = substeps.max(1);
        let sub_delta = delta / substeps as f64;
        for _ in 0..substeps {
            self.substep(sub_delta, delta);
        }
        self.time += delta;
    }

    /// Collision response scales with the whole frame `delta`, not the slice
    fn substep(&mut self, dt: f64, delta: f64) {
        self.integrate_bodies(dt);
        self.resolve_collisions(delta);
        self.contain_bodies();
    }

    /// Gravity, motion, air drag and wall bounces for each ball in order
    fn integrate_bodies(&mut self, dt: f64) {
        let config = &self.config;
        let size = config.viewport();

        for (index, body) in self.bodies.iter_mut().enumerate() {
            let before = body.position();

            body.apply_gravity(config.gravity, dt);
            body.integrate(dt);
            body.apply_damping(config.air_damping, dt);

            if !body.is_finite() {
                log::warn!(
                    "Ball {} went non-finite (pos {:?}, vel {:?}); stopping it",
                    index,
                    body.position(),
                    body.velocity()
                );
                body.set_position(before);
                body.stop();
                continue;
            }

            let wall = ball_boundary_collision(body.position(), body.radius(), size);
            if wall.hit() {
                let vel = body.velocity();
                body.set_position(wall.clamped);
                body.reflect_axis(
                    bounce_scale(vel.x, wall.inward.x, config.restitution),
                    bounce_scale(vel.y, wall.inward.y, config.restitution),
                );
            }
        }
    }

    /// Pairwise overlap test, positional correction and impulse exchange
    fn resolve_collisions(&mut self, delta: f64) {
        for body in &mut self.bodies {
            body.set_highlighted(false);
        }

        let epsilon = self.config.epsilon;
        let correction = self.config.correction.factor(delta);
        let impulse_scale = delta * self.config.restitution;

        let n = self.bodies.len();
        for i in 0..n {
            for j in (i + 1)..n {
                let (head, tail) = self.bodies.split_at_mut(j);
                let a = &mut head[i];
                let b = &mut tail[0];

                let result = ball_ball_collision(a.center(), a.radius(), b.center(), b.radius(), epsilon);
                if !result.hit {
                    continue;
                }
                a.set_highlighted(true);
                b.set_highlighted(true);

                // Coincident centers: no direction to push along
                if !result.is_separable() {
                    continue;
                }

                let push = result.normal * (result.penetration / 2.0 * correction);
                a.translate(push);
                b.translate(-push);

                if let Some(impulse) = collision_impulse(a.velocity(), b.velocity(), result.normal) {
                    a.apply_impulse(-impulse * impulse_scale);
                    b.apply_impulse(impulse * impulse_scale);
                }
            }
        }
    }

    /// Pull balls shoved past an edge by correction back inside (velocity kept)
    fn contain_bodies(&mut self) {
        let size = self.config.viewport();
        for body in &mut self.bodies {
            let clamped = clamp_to_viewport(body.position(), body.radius(), size);
            if clamped != body.position() {
                body.set_position(clamped);
            }
        }
    }
}
