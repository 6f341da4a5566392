//! Keyboard snapshot and fixed key bindings

use std::collections::HashSet;

use crate::sim::{Steer, TickInput};

/// Physical keys the game cares about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    W,
    S,
    Up,
    Down,
    Return,
    Escape,
}

/// Discrete window/keyboard events drained once per frame
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Window closed or the platform asked us to exit
    Quit,
    /// Fresh key press (auto-repeat filtered out)
    KeyDown(Key),
    KeyUp(Key),
}

/// Keys currently held
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyboardState {
    held: HashSet<Key>,
}

impl KeyboardState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn press(&mut self, key: Key) {
        self.held.insert(key);
    }

    pub fn release(&mut self, key: Key) {
        self.held.remove(&key);
    }

    /// Track an event; non-key events are ignored
    pub fn apply(&mut self, event: &InputEvent) {
        match *event {
            InputEvent::KeyDown(key) => self.press(key),
            InputEvent::KeyUp(key) => self.release(key),
            InputEvent::Quit => {}
        }
    }

    pub fn is_down(&self, key: Key) -> bool {
        self.held.contains(&key)
    }

    /// Release everything (e.g. when the window loses focus)
    pub fn clear(&mut self) {
        self.held.clear();
    }
}

/// One physical key per logical action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Controls {
    pub left_up: Key,
    pub left_down: Key,
    pub right_up: Key,
    pub right_down: Key,
    pub serve: Key,
    pub quit: Key,
}

impl Default for Controls {
    fn default() -> Self {
        Self {
            left_up: Key::W,
            left_down: Key::S,
            right_up: Key::Up,
            right_down: Key::Down,
            serve: Key::Return,
            quit: Key::Escape,
        }
    }
}

impl Controls {
    /// Sample the held keys into a simulation input
    pub fn tick_input(&self, keys: &KeyboardState) -> TickInput {
        TickInput {
            left: Steer::from_keys(keys.is_down(self.left_up), keys.is_down(self.left_down)),
            right: Steer::from_keys(keys.is_down(self.right_up), keys.is_down(self.right_down)),
            serve: keys.is_down(self.serve),
        }
    }

    /// Whether a drained event ends the game
    pub fn is_quit(&self, event: &InputEvent) -> bool {
        match *event {
            InputEvent::Quit => true,
            InputEvent::KeyDown(key) => key == self.quit,
            InputEvent::KeyUp(_) => false,
        }
    }
}
