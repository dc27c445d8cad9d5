//! Breakout entry point
//!
//! Runs the simulation headlessly at the fixed tick rate with the demo
//! autopilot at the controls. Windowing and rendering belong to the host.

use std::path::Path;

use breakout::sim::{GameEvent, demo_input};
use breakout::{Config, Driver};

/// Frames to simulate (two minutes at 60 Hz)
const DEMO_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Breakout (headless) starting...");

    let config = match std::env::args().nth(1) {
        Some(path) => Config::load(Path::new(&path)).unwrap_or_else(|e| {
            log::warn!("Failed to load config from {}: {}; using defaults", path, e);
            Config::default()
        }),
        None => Config::default(),
    };

    let frame_dt = config.tick_dt();
    let mut driver = match Driver::new(config) {
        Ok(driver) => driver,
        Err(e) => {
            log::error!("Cannot start: {}", e);
            std::process::exit(1);
        }
    };
    log::info!("Placed {} blocks", driver.state().blocks.len());
    driver.drain_events();

    let mut destroyed = 0u32;
    let mut lost = 0u32;
    let mut wins = 0u32;

    for _ in 0..DEMO_FRAMES {
        for event in demo_input(driver.state()) {
            driver.push_input(event);
        }
        driver.advance(frame_dt);

        for event in driver.drain_events() {
            match event {
                GameEvent::BlockDestroyed { .. } => destroyed += 1,
                GameEvent::BallLost => lost += 1,
                GameEvent::Won => wins += 1,
                _ => {}
            }
        }
    }

    let state = driver.state();
    log::info!(
        "Simulated {} ticks: {} blocks destroyed, {} balls lost, {} wins, {} blocks left",
        state.time_ticks,
        destroyed,
        lost,
        wins,
        state.blocks.len()
    );
    println!(
        "ticks={} destroyed={} lost={} wins={} remaining={}",
        state.time_ticks,
        destroyed,
        lost,
        wins,
        state.blocks.len()
    );
}
