//! Collision detection and response for balls in a box
//!
//! Pure functions over positions and velocities; `Simulation` decides when
//! to call them and applies the results to its bodies.

use glam::DVec2;

/// Every ball weighs the same
pub const UNIT_MASS: f64 = 1.0;

/// Result of a ball/ball overlap test
#[derive(Debug, Clone, PartialEq)]
pub struct CollisionResult {
    /// Circles overlap (strictly; touching is not a hit)
    pub hit: bool,
    /// Unit vector from B's center to A's center, zero when centers coincide
    pub normal: DVec2,
    /// `radius_a + radius_b - distance`
    pub penetration: f64,
    /// Distance between centers
    pub distance: f64,
}

impl CollisionResult {
    pub fn miss(distance: f64) -> Self {
        Self {
            hit: false,
            normal: DVec2::ZERO,
            penetration: 0.0,
            distance,
        }
    }

    /// Overlap can be resolved (centers far enough apart to define a normal)
    #[inline]
    pub fn is_separable(&self) -> bool {
        self.hit && self.normal != DVec2::ZERO
    }
}

/// Check overlap between two circles given by their centers
///
/// When the centers are within `epsilon` the pair still counts as a hit but
/// carries no normal, so no correction or impulse can be derived from it.
pub fn ball_ball_collision(
    center_a: DVec2,
    radius_a: f64,
    center_b: DVec2,
    radius_b: f64,
    epsilon: f64,
) -> CollisionResult {
    let d = center_a - center_b;
    let distance = d.length();
    let total_radius = radius_a + radius_b;

    if !(distance < total_radius) {
        return CollisionResult::miss(distance);
    }

    let normal = if distance > epsilon {
        d / distance
    } else {
        DVec2::ZERO
    };

    CollisionResult {
        hit: true,
        normal,
        penetration: total_radius - distance,
        distance,
    }
}

/// Impulse along `normal` for two unit-mass balls, `None` if they are separating
///
/// `impulse = 2 * dot(v_a - v_b, n) / (m_a + m_b) * n`. Subtract it from A,
/// add it to B.
pub fn collision_impulse(vel_a: DVec2, vel_b: DVec2, normal: DVec2) -> Option<DVec2> {
    let approach = (vel_a - vel_b).dot(normal);
    if approach >= 0.0 {
        return None;
    }
    Some(2.0 * approach / (UNIT_MASS + UNIT_MASS) * normal)
}

/// Result of testing a ball against the viewport edges
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryResult {
    /// Ball crossed the left or right edge
    pub hit_x: bool,
    /// Ball crossed the top or bottom edge
    pub hit_y: bool,
    /// Direction back into the viewport per axis (-1, 0 or 1)
    pub inward: DVec2,
    /// Top-left position with the circle fully inside
    pub clamped: DVec2,
}

impl BoundaryResult {
    #[inline]
    pub fn hit(&self) -> bool {
        self.hit_x || self.hit_y
    }
}

/// Check a ball (top-left `pos`) against the four edges of a `size` viewport
///
/// Axes are independent; a corner hit reports both.
pub fn ball_boundary_collision(pos: DVec2, radius: f64, size: DVec2) -> BoundaryResult {
    let max = (size - DVec2::splat(2.0 * radius)).max(DVec2::ZERO);

    let axis = |p: f64, hi: f64| -> f64 {
        if p < 0.0 {
            1.0
        } else if p > hi {
            -1.0
        } else {
            0.0
        }
    };
    let inward = DVec2::new(axis(pos.x, max.x), axis(pos.y, max.y));

    BoundaryResult {
        hit_x: inward.x != 0.0,
        hit_y: inward.y != 0.0,
        inward,
        clamped: pos.clamp(DVec2::ZERO, max),
    }
}

/// Velocity scale for one axis of a wall bounce
///
/// The result points the component back inward with `restitution` of its
/// magnitude, whether or not it was already heading inward.
#[inline]
pub fn bounce_scale(velocity: f64, inward: f64, restitution: f64) -> f64 {
    if inward == 0.0 {
        1.0
    } else if velocity * inward < 0.0 {
        -restitution
    } else {
        restitution
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlap_hit() {
        let result = ball_ball_collision(
            DVec2::new(0.0, 0.0),
            10.0,
            DVec2::new(15.0, 0.0),
            10.0,
            1e-4,
        );
        assert!(result.hit);
        assert!(result.is_separable());
        assert!((result.penetration - 5.0).abs() < 1e-12);
        // Normal points from B toward A
        assert_eq!(result.normal, DVec2::new(-1.0, 0.0));
    }

    #[test]
    fn test_tangent_is_not_a_hit() {
        let result = ball_ball_collision(DVec2::ZERO, 10.0, DVec2::new(20.0, 0.0), 10.0, 1e-4);
        assert!(!result.hit);
        assert_eq!(result.distance, 20.0);
    }

    #[test]
    fn test_vertical_alignment_has_normal() {
        // Stacked balls: an atan(y/x) normal would blow up here
        let result = ball_ball_collision(
            DVec2::new(100.0, 50.0),
            20.0,
            DVec2::new(100.0, 80.0),
            15.0,
            1e-4,
        );
        assert!(result.is_separable());
        assert_eq!(result.normal, DVec2::new(0.0, -1.0));
    }

    #[test]
    fn test_coincident_centers_not_separable() {
        let result = ball_ball_collision(DVec2::ONE, 10.0, DVec2::ONE, 10.0, 1e-4);
        assert!(result.hit);
        assert!(!result.is_separable());
        assert_eq!(result.normal, DVec2::ZERO);
    }

    #[test]
    fn test_impulse_only_when_closing() {
        let normal = DVec2::new(-1.0, 0.0);
        // A moving right into B, which sits to its right
        let impulse = collision_impulse(DVec2::new(10.0, 0.0), DVec2::ZERO, normal).unwrap();
        assert_eq!(impulse, DVec2::new(10.0, 0.0));

        assert!(collision_impulse(DVec2::new(-10.0, 0.0), DVec2::ZERO, normal).is_none());
    }

    #[test]
    fn test_boundary_inside() {
        let result = ball_boundary_collision(DVec2::new(10.0, 10.0), 5.0, DVec2::new(100.0, 100.0));
        assert!(!result.hit());
        assert_eq!(result.clamped, DVec2::new(10.0, 10.0));
    }

    #[test]
    fn test_boundary_corner() {
        let result = ball_boundary_collision(DVec2::new(-3.0, 95.0), 5.0, DVec2::new(100.0, 100.0));
        assert!(result.hit_x && result.hit_y);
        assert_eq!(result.inward, DVec2::new(1.0, -1.0));
        assert_eq!(result.clamped, DVec2::new(0.0, 90.0));
    }

    #[test]
    fn test_bounce_scale() {
        // Moving into the floor (inward is -y)
        assert_eq!(bounce_scale(50.0, -1.0, 0.9), -0.9);
        // Already moving away from it
        assert_eq!(bounce_scale(-50.0, -1.0, 0.9), 0.9);
        assert_eq!(bounce_scale(50.0, 0.0, 0.9), 1.0);
    }
}
