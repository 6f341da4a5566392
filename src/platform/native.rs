//! Desktop backend: winit window + pixels surface
//!
//! Events are pumped pull-style once per frame so the frame driver keeps
//! ownership of the loop. The framebuffer is sized to the window at startup;
//! later resizes only rescale the surface.

use std::sync::Arc;
use std::time::Duration;

use pixels::{Pixels, PixelsBuilder, SurfaceTexture};
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, Event, KeyEvent, WindowEvent};
use winit::event_loop::EventLoop;
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::platform::pump_events::{EventLoopExtPumpEvents, PumpStatus};
use winit::window::{Fullscreen, Window, WindowBuilder};

use super::{InputEvent, Key, KeyboardState, Platform, PlatformError};
use crate::renderer::{Canvas, Framebuffer};
use crate::settings::Settings;
use crate::sim::Size;

/// Map a physical key to one the game reacts to
fn map_key(key: PhysicalKey) -> Option<Key> {
    match key {
        PhysicalKey::Code(KeyCode::KeyW) => Some(Key::W),
        PhysicalKey::Code(KeyCode::KeyS) => Some(Key::S),
        PhysicalKey::Code(KeyCode::ArrowUp) => Some(Key::Up),
        PhysicalKey::Code(KeyCode::ArrowDown) => Some(Key::Down),
        PhysicalKey::Code(KeyCode::Enter) | PhysicalKey::Code(KeyCode::NumpadEnter) => {
            Some(Key::Return)
        }
        PhysicalKey::Code(KeyCode::Escape) => Some(Key::Escape),
        _ => None,
    }
}

/// Translate a key event; auto-repeat presses are dropped
fn key_event(event: &KeyEvent) -> Option<InputEvent> {
    let key = map_key(event.physical_key)?;
    match event.state {
        ElementState::Pressed if event.repeat => None,
        ElementState::Pressed => Some(InputEvent::KeyDown(key)),
        ElementState::Released => Some(InputEvent::KeyUp(key)),
    }
}

pub struct NativePlatform {
    // Drop order: surface before window before event loop
    pixels: Pixels<'static>,
    window: Arc<Window>,
    event_loop: EventLoop<()>,
    framebuffer: Framebuffer,
    keyboard: KeyboardState,
}

impl NativePlatform {
    /// Open the game window and its presentation surface
    pub fn new(settings: &Settings) -> Result<Self, PlatformError> {
        let event_loop = EventLoop::new().map_err(PlatformError::EventLoop)?;

        let mut builder = WindowBuilder::new()
            .with_title(settings.window_title.as_str())
            .with_inner_size(PhysicalSize::new(
                settings.window_width.max(1),
                settings.window_height.max(1),
            ));
        if settings.fullscreen {
            builder = builder.with_fullscreen(Some(Fullscreen::Borderless(None)));
        }
        let window = Arc::new(builder.build(&event_loop).map_err(PlatformError::Window)?);

        let inner = window.inner_size();
        let (width, height) = if inner.width == 0 || inner.height == 0 {
            (settings.window_width.max(1), settings.window_height.max(1))
        } else {
            (inner.width, inner.height)
        };

        let surface = SurfaceTexture::new(width, height, Arc::clone(&window));
        let pixels = PixelsBuilder::new(width, height, surface)
            .enable_vsync(true)
            .clear_color(pixels::wgpu::Color::BLACK)
            .build()
            .map_err(PlatformError::Surface)?;

        log::info!("Window created ({}x{})", width, height);

        Ok(Self {
            pixels,
            window,
            event_loop,
            framebuffer: Framebuffer::new(width, height),
            keyboard: KeyboardState::new(),
        })
    }

    /// Drawable size in pixels, fixed for the lifetime of the platform
    pub fn size(&self) -> Size {
        self.framebuffer.size()
    }
}

impl Platform for NativePlatform {
    type Canvas = Framebuffer;

    fn poll_events(&mut self, events: &mut Vec<InputEvent>) {
        let Self {
            event_loop,
            pixels,
            keyboard,
            window,
            ..
        } = self;
        let window_id = window.id();

        let status = event_loop.pump_events(Some(Duration::ZERO), |event, _elwt| {
            let Event::WindowEvent { window_id: id, event } = event else {
                return;
            };
            if id != window_id {
                return;
            }
            match event {
                WindowEvent::CloseRequested => events.push(InputEvent::Quit),
                WindowEvent::KeyboardInput { event, .. } => {
                    if let Some(input) = key_event(&event) {
                        keyboard.apply(&input);
                        events.push(input);
                    }
                }
                WindowEvent::Focused(false) => keyboard.clear(),
                WindowEvent::Resized(size) => {
                    if size.width > 0 && size.height > 0 {
                        if let Err(err) = pixels.resize_surface(size.width, size.height) {
                            log::warn!("Failed to resize surface: {err}");
                        }
                    }
                }
                _ => {}
            }
        });

        if let PumpStatus::Exit(code) = status {
            log::info!("Event loop exited ({code})");
            events.push(InputEvent::Quit);
        }
    }

    fn keyboard(&self) -> &KeyboardState {
        &self.keyboard
    }

    fn canvas(&mut self) -> &mut Framebuffer {
        &mut self.framebuffer
    }

    fn present(&mut self) -> Result<(), PlatformError> {
        self.pixels
            .frame_mut()
            .copy_from_slice(self.framebuffer.as_bytes());
        self.window.pre_present_notify();
        self.pixels.render().map_err(PlatformError::Present)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyW)), Some(Key::W));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::ArrowDown)), Some(Key::Down));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Enter)), Some(Key::Return));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::Escape)), Some(Key::Escape));
        assert_eq!(map_key(PhysicalKey::Code(KeyCode::KeyA)), None);
    }
}
