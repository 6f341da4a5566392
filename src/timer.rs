//! Stopwatch used for frame pacing
//!
//! Time comes from a [`Clock`] so pacing can be driven by a fake clock in
//! tests.

use std::thread;
use std::time::{Duration, Instant};

/// Millisecond tick source with a blocking delay
pub trait Clock {
    /// Milliseconds since an arbitrary fixed origin
    fn ticks(&self) -> u64;
    /// Block the calling thread for `ms` milliseconds
    fn delay(&self, ms: u64);
}

/// Wall clock backed by [`Instant`]
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn ticks(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn delay(&self, ms: u64) {
        thread::sleep(Duration::from_millis(ms));
    }
}

/// Start/pause/resume/stop stopwatch
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FrameTimer {
    start_ticks: u64,
    paused_ticks: u64,
    started: bool,
    paused: bool,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start counting; no-op while already started
    pub fn start(&mut self, clock: &impl Clock) {
        if !self.started {
            self.start_ticks = clock.ticks();
            self.started = true;
        }
    }

    /// Stop and discard any paused time
    pub fn stop(&mut self) {
        if self.started {
            self.paused_ticks = 0;
            self.started = false;
            self.paused = false;
        }
    }

    /// Restart from zero
    pub fn restart(&mut self, clock: &impl Clock) {
        self.stop();
        self.start(clock);
    }

    /// Freeze the elapsed time
    pub fn pause(&mut self, clock: &impl Clock) {
        if self.started && !self.paused {
            self.paused_ticks = self.ticks(clock);
            self.paused = true;
        }
    }

    /// Continue counting from the frozen elapsed time
    pub fn resume(&mut self, clock: &impl Clock) {
        if self.paused {
            self.start_ticks = clock.ticks();
            self.paused = false;
        }
    }

    /// Elapsed milliseconds: running total, frozen total while paused, 0 when stopped
    pub fn ticks(&self, clock: &impl Clock) -> u64 {
        if self.paused {
            self.paused_ticks
        } else if self.started {
            clock.ticks().saturating_sub(self.start_ticks) + self.paused_ticks
        } else {
            0
        }
    }

    pub fn is_started(&self) -> bool {
        self.started
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }
}
