use std::time::Duration;

use anyhow::{Context, Result};
use ember_engine::logging::{init_logging, LoggingConfig};
use ember_engine::platform::WinitLoader;
use ember_engine::{AppVersion, Game};

/// How often the frame-rate line is logged.
const FPS_REPORT_INTERVAL: Duration = Duration::from_secs(1);

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let mut game = Game::with_options(WinitLoader, |o| {
        o.app_name = "Ember Demo".to_string();
        o.version = AppVersion::new(0, 1, 0);
        o.identifier = "game.ember.demo".to_string();
    });

    game.on_initializing(|| {
        log::info!("demo initialized; close the window to quit");
        Ok(())
    });

    let mut window_start = Duration::ZERO;
    let mut frames_in_window = 0u32;
    game.on_updating(move |time| {
        frames_in_window += 1;
        let elapsed = time.total - window_start;
        if elapsed >= FPS_REPORT_INTERVAL {
            let fps = frames_in_window as f64 / elapsed.as_secs_f64();
            log::info!("{fps:.0} fps (frame {})", time.frame_index);
            window_start = time.total;
            frames_in_window = 0;
        }
        Ok(())
    });

    game.on_drawing(|time| {
        log::trace!("draw frame {} at {:.3}s", time.frame_index, time.total_secs());
        Ok(())
    });

    game.on_exiting(|total| {
        log::info!("ran for {:.2}s", total.as_secs_f64());
        Ok(())
    });

    game.run().context("demo terminated with error")?;
    Ok(())
}
