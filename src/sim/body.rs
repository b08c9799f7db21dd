//! A single ball
//!
//! Position is the top-left corner of the ball's bounding box, the way the
//! renderer places circle shapes. Pair tests work on `center()`.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// RGBA color, components in 0-1
pub type Rgba = [f32; 4];

/// Fill color of a freshly spawned ball
pub const BALL_COLOR: Rgba = [1.0, 0.0, 0.0, 1.0];
/// Fill color while overlapping another ball
pub const HIGHLIGHT_COLOR: Rgba = [1.0, 0.85, 0.2, 1.0];

/// A ball entity
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Body {
    pos: DVec2,
    vel: DVec2,
    radius: f64,
    color: Rgba,
    /// Overlapping another ball during the last collision pass
    #[serde(default)]
    highlighted: bool,
}

impl Body {
    pub fn new(radius: f64, pos: DVec2, vel: DVec2) -> Self {
        debug_assert!(radius > 0.0, "radius must be positive");
        Self {
            pos,
            vel,
            radius,
            color: BALL_COLOR,
            highlighted: false,
        }
    }

    pub fn with_color(mut self, color: Rgba) -> Self {
        self.color = color;
        self
    }

    #[inline]
    pub fn position(&self) -> DVec2 {
        self.pos
    }

    /// Circle center (`position + radius` on both axes)
    #[inline]
    pub fn center(&self) -> DVec2 {
        self.pos + DVec2::splat(self.radius)
    }

    #[inline]
    pub fn velocity(&self) -> DVec2 {
        self.vel
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    #[inline]
    pub fn color(&self) -> Rgba {
        self.color
    }

    /// Color to draw with this frame
    #[inline]
    pub fn draw_color(&self) -> Rgba {
        if self.highlighted {
            HIGHLIGHT_COLOR
        } else {
            self.color
        }
    }

    #[inline]
    pub fn is_highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    /// Both position and velocity are finite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.pos.is_finite() && self.vel.is_finite()
    }

    /// Advance position by velocity over `dt`
    #[inline]
    pub fn integrate(&mut self, dt: f64) {
        self.pos += self.vel * dt;
    }

    /// Accelerate downward (+y is down on screen)
    #[inline]
    pub fn apply_gravity(&mut self, g: f64, dt: f64) {
        self.vel.y += g * dt;
    }

    /// Linear velocity decay. A large `coefficient * dt` inverts velocity; not guarded.
    #[inline]
    pub fn apply_damping(&mut self, coefficient: f64, dt: f64) {
        self.vel *= 1.0 - coefficient * dt;
    }

    #[inline]
    pub fn apply_impulse(&mut self, impulse: DVec2) {
        self.vel += impulse;
    }

    /// Scale velocity per axis (wall bounces pass `-restitution` on the hit axis)
    #[inline]
    pub fn reflect_axis(&mut self, scale_x: f64, scale_y: f64) {
        self.vel *= DVec2::new(scale_x, scale_y);
    }

    /// Offset position without touching velocity
    #[inline]
    pub fn translate(&mut self, offset: DVec2) {
        self.pos += offset;
    }

    #[inline]
    pub fn set_position(&mut self, pos: DVec2) {
        self.pos = pos;
    }

    /// Drop all motion (used to recover from non-finite state)
    pub(crate) fn stop(&mut self) {
        self.vel = DVec2::ZERO;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_center_offset() {
        let body = Body::new(20.0, DVec2::new(400.0, 0.0), DVec2::ZERO);
        assert_eq!(body.center(), DVec2::new(420.0, 20.0));
    }

    #[test]
    fn test_integrate_and_gravity() {
        let mut body = Body::new(10.0, DVec2::ZERO, DVec2::new(2.0, 0.0));
        body.apply_gravity(10.0, 0.5);
        assert_eq!(body.velocity(), DVec2::new(2.0, 5.0));
        body.integrate(0.5);
        assert_eq!(body.position(), DVec2::new(1.0, 2.5));
    }

    #[test]
    fn test_negative_dt_runs_backward() {
        let mut body = Body::new(10.0, DVec2::new(5.0, 5.0), DVec2::new(2.0, -4.0));
        body.integrate(-1.0);
        assert_eq!(body.position(), DVec2::new(3.0, 9.0));
    }

    #[test]
    fn test_damping() {
        let mut body = Body::new(10.0, DVec2::ZERO, DVec2::new(100.0, -50.0));
        body.apply_damping(0.5, 0.2);
        assert!((body.velocity() - DVec2::new(90.0, -45.0)).length() < 1e-12);
    }

    #[test]
    fn test_reflect_axis() {
        let mut body = Body::new(10.0, DVec2::ZERO, DVec2::new(10.0, -20.0));
        body.reflect_axis(-0.5, 1.0);
        assert_eq!(body.velocity(), DVec2::new(-5.0, -20.0));
    }

    #[test]
    fn test_translate_keeps_velocity() {
        let mut body = Body::new(10.0, DVec2::ZERO, DVec2::new(1.0, 1.0));
        body.translate(DVec2::new(3.0, 4.0));
        body.apply_impulse(DVec2::new(-1.0, 0.0));
        assert_eq!(body.position(), DVec2::new(3.0, 4.0));
        assert_eq!(body.velocity(), DVec2::new(0.0, 1.0));
    }

    #[test]
    fn test_highlight_color() {
        let mut body = Body::new(10.0, DVec2::ZERO, DVec2::ZERO);
        assert_eq!(body.draw_color(), BALL_COLOR);
        body.set_highlighted(true);
        assert_eq!(body.draw_color(), HIGHLIGHT_COLOR);
        assert_eq!(body.color(), BALL_COLOR);
    }

    #[test]
    fn test_non_finite_detection() {
        let mut body = Body::new(10.0, DVec2::ZERO, DVec2::new(f64::INFINITY, 0.0));
        assert!(!body.is_finite());
        body.stop();
        assert!(body.is_finite());
    }
}
