//! Ball Drop entry point
//!
//! Runs the simulation against the offscreen window at 60 Hz until it closes.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use ball_drop::renderer::HeadlessWindow;
use ball_drop::{App, SimConfig};

/// Frames to run before the offscreen window closes itself (one minute at 60 Hz)
const DEMO_FRAMES: u64 = 60 * 60;

fn main() {
    env_logger::init();
    log::info!("Ball Drop starting...");

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0);

    let config = SimConfig::default();
    let mut app = match App::new(config.clone(), seed) {
        Ok(app) => app.with_demo_scene(),
        Err(e) => {
            log::error!("Invalid configuration: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Seed: {}", seed);

    let mut window = HeadlessWindow::new(config.width, config.height, Duration::from_secs_f64(1.0 / 60.0))
        .with_frame_limit(DEMO_FRAMES);
    app.run(&mut window);

    let stats = window.stats();
    log::info!(
        "Last frame: {} circles, {} vertices ({} bytes)",
        stats.circles,
        stats.vertices,
        window.frame_bytes().len()
    );
}
