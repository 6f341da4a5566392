//! Pong entry point
//!
//! Loads settings, opens the window, loads the assets and runs the frame loop.

use std::path::Path;
use std::process::ExitCode;

use pong::driver::FrameDriver;
use pong::platform::NativePlatform;
use pong::timer::SystemClock;
use pong::{Game, GameError, Settings};

fn run() -> Result<(), GameError> {
    let settings = Settings::load(Path::new(Settings::FILE_NAME));

    let platform = NativePlatform::new(&settings)?;
    let mut game = Game::init(&settings, platform.size())?;

    let mut driver = FrameDriver::new(
        platform,
        SystemClock::new(),
        settings.tuning.min_frame_time_ms,
    );
    driver.run(&mut game)?;
    Ok(())
}

fn main() -> ExitCode {
    env_logger::init();
    log::info!("Starting {}", pong::consts::GAME_NAME);

    match run() {
        Ok(()) => {
            log::info!("Shutting down");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("{err}");
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
