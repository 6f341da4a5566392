//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - One step per frame, integer pixels per frame
//! - Geometry fixed at startup by the layout
//! - No rendering or platform dependencies

pub mod collision;
pub mod layout;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{bounce_off_paddle, bounce_off_walls, goal_scorer, touches_paddle};
pub use layout::{AssetSizes, Layout, ScoreLayout};
pub use rect::{Rect, Size};
pub use state::{Ball, GameEvent, GameState, PlayerMoved, Score, Side};
pub use tick::{Steer, TickInput, move_paddle, tick};
