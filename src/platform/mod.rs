//! Platform abstraction layer
//!
//! Handles window/OS differences for:
//! - Input events and the held-key snapshot
//! - The drawing target
//! - Presentation to the screen

pub mod input;
pub mod native;

pub use input::{Controls, InputEvent, Key, KeyboardState};
pub use native::NativePlatform;

use thiserror::Error;

use crate::renderer::Canvas;

#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("failed to create event loop: {0}")]
    EventLoop(#[source] winit::error::EventLoopError),
    #[error("failed to create window: {0}")]
    Window(#[source] winit::error::OsError),
    #[error("failed to create rendering surface: {0}")]
    Surface(#[source] pixels::Error),
    #[error("failed to present frame: {0}")]
    Present(#[source] pixels::Error),
}

/// Everything the frame driver needs from the host
pub trait Platform {
    type Canvas: Canvas;

    /// Append every pending event and update the keyboard snapshot
    fn poll_events(&mut self, events: &mut Vec<InputEvent>);

    /// Keys held as of the last poll
    fn keyboard(&self) -> &KeyboardState;

    /// Back buffer for the next frame
    fn canvas(&mut self) -> &mut Self::Canvas;

    /// Show the back buffer
    fn present(&mut self) -> Result<(), PlatformError>;
}
