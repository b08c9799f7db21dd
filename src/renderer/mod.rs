//! Rendering module
//!
//! Circles are tessellated on the CPU into clip-space triangles; any backend
//! that can upload a `Vertex` buffer can present them.

pub mod headless;
pub mod shapes;
pub mod vertex;

pub use headless::{FrameStats, HeadlessWindow};
pub use vertex::{Vertex, colors};
