//! Deterministic simulation module
//!
//! All physics lives here. This module must stay pure and deterministic:
//! - Time only advances through `Simulation::step`
//! - Seeded RNG only
//! - Stable iteration order (insertion order)
//! - No rendering or platform dependencies

pub mod body;
pub mod collision;
pub mod spawn;
pub mod tick;
pub mod world;

pub use body::{BALL_COLOR, Body, HIGHLIGHT_COLOR, Rgba};
pub use collision::{
    BoundaryResult, CollisionResult, ball_ball_collision, ball_boundary_collision, bounce_scale,
    collision_impulse,
};
pub use spawn::Spawner;
pub use world::Simulation;
