//! Pong - A two-player table tennis game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (layout, paddles, ball, collisions, score)
//! - `renderer`: Textures, fonts and a software canvas
//! - `platform`: Window, keyboard and presentation
//! - `game`: Session that owns the assets and draws the simulation
//! - `driver`: The paced frame loop
//! - `tuning`: Data-driven game balance

pub mod driver;
pub mod game;
pub mod platform;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod timer;
pub mod tuning;

pub use driver::{DriverState, FrameDriver};
pub use game::{Game, GameError};
pub use settings::Settings;

/// Game configuration constants
pub mod consts {
    use crate::renderer::Colour;

    /// Window title
    pub const GAME_NAME: &str = "PONG";

    /// Sprite and font files, relative to their asset directories
    pub const TABLE_TEXTURE: &str = "table.png";
    pub const PADDLE_TEXTURE: &str = "pad.png";
    pub const BALL_TEXTURE: &str = "ball.png";
    pub const SCORE_FONT: &str = "lazy.ttf";

    /// Drawn between the two scores
    pub const SCORE_SEPARATOR: &str = ":";
    pub const SCORE_TEXT_COLOUR: Colour = Colour::WHITE;
    pub const CLEAR_COLOUR: Colour = Colour::BLACK;
}
