//! Platform abstraction layer
//!
//! The simulation never talks to a window directly. A `Window` hands out
//! input events and frame timing and accepts draw calls; anything that can
//! draw a filled circle can host the app.

use std::time::Duration;

use glam::DVec2;

use crate::sim::Rgba;

/// Keys the app reacts to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Escape,
    Space,
    Other(u32),
}

/// Input events delivered by a window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Window close requested
    Closed,
    KeyPressed(Key),
}

impl Event {
    /// Event ends the app (close button or Escape)
    pub fn is_quit(&self) -> bool {
        matches!(self, Event::Closed | Event::KeyPressed(Key::Escape))
    }
}

/// Window/renderer collaborator driven once per frame
pub trait Window {
    /// Start a new frame filled with `color`
    fn clear_frame(&mut self, color: Rgba);

    /// Queue a filled circle
    fn draw_circle(&mut self, center: DVec2, radius: f64, color: Rgba);

    /// Show everything drawn since `clear_frame`
    fn present_frame(&mut self);

    /// Next pending input event, if any
    fn poll_event(&mut self) -> Option<Event>;

    /// Wall-clock time since the previous call
    fn elapsed_since_last_poll(&mut self) -> Duration;

    fn is_open(&self) -> bool;

    fn close(&mut self);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_events() {
        assert!(Event::Closed.is_quit());
        assert!(Event::KeyPressed(Key::Escape).is_quit());
        assert!(!Event::KeyPressed(Key::Space).is_quit());
        assert!(!Event::KeyPressed(Key::Other(65)).is_quit());
    }
}
