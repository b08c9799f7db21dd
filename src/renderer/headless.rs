//! Offscreen window
//!
//! Implements `Window` without a display: frames advance on a fixed clock,
//! input comes from a script, and draw calls are tessellated into a vertex
//! list that stands in for the GPU buffer. Used by the binary and tests.

use std::collections::VecDeque;
use std::time::Duration;

use glam::DVec2;

use super::shapes::circle_clip;
use super::vertex::{Vertex, as_bytes};
use crate::platform::{Event, Window};
use crate::sim::Rgba;

/// Per-run counters
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FrameStats {
    /// Frames presented so far
    pub frames: u64,
    /// Circles in the last presented frame
    pub circles: usize,
    /// Vertices in the last presented frame
    pub vertices: usize,
}

/// Window that renders into memory
#[derive(Debug)]
pub struct HeadlessWindow {
    viewport: DVec2,
    frame_time: Duration,
    /// (frame number, event) pairs not yet delivered, sorted by frame
    script: VecDeque<(u64, Event)>,
    /// Close by itself once this many frames were presented
    frame_limit: Option<u64>,
    open: bool,
    clear_color: Rgba,
    building: Vec<Vertex>,
    presented: Vec<Vertex>,
    circles: usize,
    stats: FrameStats,
}

impl HeadlessWindow {
    pub fn new(width: f64, height: f64, frame_time: Duration) -> Self {
        Self {
            viewport: DVec2::new(width, height),
            frame_time,
            script: VecDeque::new(),
            frame_limit: None,
            open: true,
            clear_color: [0.0; 4],
            building: Vec::new(),
            presented: Vec::new(),
            circles: 0,
            stats: FrameStats::default(),
        }
    }

    /// Deliver `event` at the start of frame `frame` (0-based)
    pub fn with_event(mut self, frame: u64, event: Event) -> Self {
        let at = self.script.partition_point(|(f, _)| *f <= frame);
        self.script.insert(at, (frame, event));
        self
    }

    /// Emit `Event::Closed` once `frames` frames were presented
    pub fn with_frame_limit(mut self, frames: u64) -> Self {
        self.frame_limit = Some(frames);
        self
    }

    pub fn stats(&self) -> &FrameStats {
        &self.stats
    }

    /// Clear color of the last frame
    pub fn clear_color(&self) -> Rgba {
        self.clear_color
    }

    /// Vertices of the last presented frame (clip space)
    pub fn frame_vertices(&self) -> &[Vertex] {
        &self.presented
    }

    /// Last presented frame as raw vertex bytes
    pub fn frame_bytes(&self) -> &[u8] {
        as_bytes(&self.presented)
    }
}

impl Window for HeadlessWindow {
    fn clear_frame(&mut self, color: Rgba) {
        self.clear_color = color;
        self.building.clear();
        self.circles = 0;
    }

    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Rgba) {
        self.building
            .extend(circle_clip(center, radius, color, self.viewport));
        self.circles += 1;
    }

    fn present_frame(&mut self) {
        std::mem::swap(&mut self.presented, &mut self.building);
        self.building.clear();
        self.stats.frames += 1;
        self.stats.circles = self.circles;
        self.stats.vertices = self.presented.len();
        log::trace!(
            "Frame {}: {} circles, {} vertices",
            self.stats.frames,
            self.stats.circles,
            self.stats.vertices
        );
    }

    fn poll_event(&mut self) -> Option<Event> {
        let frame = self.stats.frames;
        if let Some(&(at, event)) = self.script.front() {
            if at <= frame {
                self.script.pop_front();
                return Some(event);
            }
        }
        if let Some(limit) = self.frame_limit {
            if frame >= limit {
                self.frame_limit = None;
                return Some(Event::Closed);
            }
        }
        None
    }

    fn elapsed_since_last_poll(&mut self) -> Duration {
        self.frame_time
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) {
        self.open = false;
    }
}
