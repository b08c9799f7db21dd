//! Shape generation for 2D primitives

use glam::{DVec2, Vec2};
use std::f32::consts::PI;

use super::vertex::Vertex;

/// Fewest segments used for any circle
pub const MIN_SEGMENTS: u32 = 12;
/// Most segments used for any circle
pub const MAX_SEGMENTS: u32 = 64;

/// Segment count keeping edges around 4px long
pub fn segments_for_radius(radius: f32) -> u32 {
    let circumference = 2.0 * PI * radius.max(0.0);
    ((circumference / 4.0).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

/// Map a pixel position (origin top-left, +y down) to clip space
#[inline]
pub fn to_clip(pos: DVec2, viewport: DVec2) -> Vec2 {
    let ndc = pos / viewport * 2.0 - DVec2::ONE;
    Vec2::new(ndc.x as f32, -ndc.y as f32)
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Filled circle given in pixels, emitted in clip space
///
/// Radius is scaled per axis so circles stay round on non-square viewports.
pub fn circle_clip(center: DVec2, radius: f64, color: [f32; 4], viewport: DVec2) -> Vec<Vertex> {
    let segments = segments_for_radius(radius as f32);
    let c = to_clip(center, viewport);
    let scale = (DVec2::splat(2.0 * radius) / viewport).as_vec2();

    let mut vertices = circle(Vec2::ZERO, 1.0, color, segments);
    for v in &mut vertices {
        v.position = [c.x + v.position[0] * scale.x, c.y + v.position[1] * scale.y];
    }
    vertices
}
