//! The paced frame loop
//!
//! One iteration per frame: wait out the minimum frame time, drain events,
//! sample the keyboard, step the scene, render and present. A quit request
//! ends the loop once the frame it arrived in is done. There is no
//! catch-up; a slow frame simply delays the next one.

use crate::platform::{Controls, InputEvent, Platform, PlatformError};
use crate::renderer::Canvas;
use crate::sim::TickInput;
use crate::timer::{Clock, FrameTimer};

/// What the driver steps and draws each frame
pub trait Scene {
    fn update(&mut self, input: &TickInput);

    fn render<C: Canvas>(&self, canvas: &mut C);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DriverState {
    Running,
    /// Terminal
    Stopped,
}

pub struct FrameDriver<P, C> {
    platform: P,
    clock: C,
    controls: Controls,
    timer: FrameTimer,
    min_frame_time_ms: u64,
    events: Vec<InputEvent>,
    state: DriverState,
    frames: u64,
}

impl<P: Platform, C: Clock> FrameDriver<P, C> {
    pub fn new(platform: P, clock: C, min_frame_time_ms: u64) -> Self {
        Self {
            platform,
            clock,
            controls: Controls::default(),
            timer: FrameTimer::new(),
            min_frame_time_ms,
            events: Vec::new(),
            state: DriverState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> DriverState {
        self.state
    }

    /// Frames presented so far
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    /// Run frames until the player quits or presenting fails
    pub fn run(&mut self, scene: &mut impl Scene) -> Result<(), PlatformError> {
        log::info!("Entering main loop");
        while self.state == DriverState::Running {
            self.frame(scene)?;
        }
        log::info!("Main loop stopped after {} frames", self.frames);
        Ok(())
    }

    /// Run a single iteration; a no-op once stopped
    pub fn frame(&mut self, scene: &mut impl Scene) -> Result<(), PlatformError> {
        if self.state == DriverState::Stopped {
            return Ok(());
        }

        if self.timer.is_started() {
            let elapsed = self.timer.ticks(&self.clock);
            if elapsed < self.min_frame_time_ms {
                self.clock.delay(self.min_frame_time_ms - elapsed);
            }
        }
        self.timer.restart(&self.clock);

        self.events.clear();
        self.platform.poll_events(&mut self.events);
        // A quit still finishes the current frame
        if self.events.iter().any(|event| self.controls.is_quit(event)) {
            log::info!("Quit requested");
            self.state = DriverState::Stopped;
        }

        let input = self.controls.tick_input(self.platform.keyboard());
        scene.update(&input);
        scene.render(self.platform.canvas());

        if let Err(err) = self.platform.present() {
            log::error!("{err}");
            self.state = DriverState::Stopped;
            return Err(err);
        }
        self.frames += 1;
        Ok(())
    }
}
