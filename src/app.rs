//! Frame loop
//!
//! Each frame: drain input events, turn wall-clock time into a simulated
//! delta, maybe spawn a ball, step the simulation, then draw every ball.

use std::time::Duration;

use glam::DVec2;

use crate::config::{ConfigError, SimConfig};
use crate::platform::Window;
use crate::renderer::colors;
use crate::sim::{Simulation, Spawner};

/// Simulation plus the clocks that drive it
#[derive(Debug, Clone)]
pub struct App {
    sim: Simulation,
    spawner: Spawner,
    frames: u64,
}

impl App {
    pub fn new(config: SimConfig, seed: u64) -> Result<Self, ConfigError> {
        let spawner = Spawner::new(&config, seed);
        let sim = Simulation::new(config)?;
        Ok(Self {
            sim,
            spawner,
            frames: 0,
        })
    }

    /// Add the two starting balls (r=20 at (400, 0), r=15 at (400, 100))
    pub fn with_demo_scene(mut self) -> Self {
        let vel = self.sim.config().spawn_velocity;
        self.sim.spawn(20.0, DVec2::new(400.0, 0.0), vel);
        self.sim.spawn(15.0, DVec2::new(400.0, 100.0), vel);
        self
    }

    pub fn simulation(&self) -> &Simulation {
        &self.sim
    }

    /// Frames completed so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Simulated seconds for a frame that took `elapsed` wall-clock time
    pub fn frame_delta(&self, elapsed: Duration) -> f64 {
        let config = self.sim.config();
        elapsed.as_secs_f64().min(config.max_frame_dt) * config.time_scale
    }

    /// Spawn if due, then advance the simulation by `dt`
    pub fn update(&mut self, dt: f64) {
        if let Some(index) = self.spawner.update(&mut self.sim, dt) {
            log::debug!("Frame {}: spawned ball {} ({} total)", self.frames, index, self.sim.len());
        }
        let substeps = self.sim.config().substeps;
        self.sim.step(dt, substeps);
    }

    /// Draw every ball and present the frame
    pub fn render<W: Window>(&self, window: &mut W) {
        window.clear_frame(colors::BACKGROUND);
        self.sim.for_each_body(|pos, radius, color| {
            window.draw_circle(pos + DVec2::splat(radius), radius, color);
        });
        window.present_frame();
    }

    /// Run one frame; false once the window asked to quit
    pub fn frame<W: Window>(&mut self, window: &mut W) -> bool {
        while let Some(event) = window.poll_event() {
            if event.is_quit() {
                log::info!("Quit requested ({:?})", event);
                window.close();
            }
        }
        if !window.is_open() {
            return false;
        }

        let dt = self.frame_delta(window.elapsed_since_last_poll());
        self.update(dt);
        self.render(window);
        self.frames += 1;
        true
    }

    /// Run frames until the window closes; returns the frame count
    pub fn run<W: Window>(&mut self, window: &mut W) -> u64 {
        log::info!(
            "Running {}x{} viewport, {} substeps/frame",
            self.sim.config().width,
            self.sim.config().height,
            self.sim.config().substeps
        );
        while self.frame(window) {}
        log::info!(
            "Stopped after {} frames, {:.2}s simulated, {} balls",
            self.frames,
            self.sim.time(),
            self.sim.len()
        );
        self.frames
    }
}
