//! Game state and core simulation types
//!
//! Plain mutable state owned by a single game session.

use glam::IVec2;
use serde::{Deserialize, Serialize};

use super::layout::Layout;
use super::rect::Rect;

/// One side of the table
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    pub fn opposite(self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    /// Horizontal direction of a serve from this side (away from its paddle)
    pub fn serve_direction(self) -> i32 {
        match self {
            Side::Left => 1,
            Side::Right => -1,
        }
    }
}

/// How a paddle moved during the current frame
///
/// Recomputed every step and handed to the collision code; it never lives in
/// [`GameState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlayerMoved {
    Up,
    #[default]
    None,
    Down,
}

impl PlayerMoved {
    /// -1 up, 0 still, 1 down (screen y grows downwards)
    pub fn sign(self) -> i32 {
        match self {
            PlayerMoved::Up => -1,
            PlayerMoved::None => 0,
            PlayerMoved::Down => 1,
        }
    }
}

/// The ball
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub rect: Rect,
    /// Pixels per frame
    pub vel: IVec2,
    /// Paddle the ball is attached to, `None` while in play
    pub lock: Option<Side>,
}

impl Ball {
    /// A ball attached to `side`'s paddle at its lock position
    pub fn locked(layout: &Layout, side: Side) -> Self {
        Self {
            rect: layout.ball_lock(side),
            vel: IVec2::ZERO,
            lock: Some(side),
        }
    }

    #[inline]
    pub fn is_locked(&self) -> bool {
        self.lock.is_some()
    }

    /// Detach from the serving paddle
    pub fn release(&mut self, side: Side, speed_x: i32, speed_y: i32) {
        self.vel = IVec2::new(side.serve_direction() * speed_x, speed_y);
        self.lock = None;
    }
}

/// Points per side
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Score {
    pub left: u32,
    pub right: u32,
}

impl Score {
    pub fn get(&self, side: Side) -> u32 {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Award a point, returning the new total
    pub fn award(&mut self, side: Side) -> u32 {
        let slot = match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        };
        *slot += 1;
        *slot
    }
}

/// Things the session reacts to outside the simulation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// `side` scored and now has `score` points; its text must be re-rendered
    Scored { side: Side, score: u32 },
}

/// Complete simulation state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub left_paddle: Rect,
    pub right_paddle: Rect,
    pub ball: Ball,
    pub score: Score,
}

impl GameState {
    /// Paddles at their start positions, ball locked to the left paddle
    pub fn new(layout: &Layout) -> Self {
        Self {
            left_paddle: layout.left_paddle_start,
            right_paddle: layout.right_paddle_start,
            ball: Ball::locked(layout, Side::Left),
            score: Score::default(),
        }
    }

    pub fn paddle(&self, side: Side) -> &Rect {
        match side {
            Side::Left => &self.left_paddle,
            Side::Right => &self.right_paddle,
        }
    }

    pub fn paddle_mut(&mut self, side: Side) -> &mut Rect {
        match side {
            Side::Left => &mut self.left_paddle,
            Side::Right => &mut self.right_paddle,
        }
    }

    /// Put everything back on the table after a goal, `server` holding the ball
    pub fn reset_for_serve(&mut self, layout: &Layout, server: Side) {
        self.left_paddle = layout.left_paddle_start;
        self.right_paddle = layout.right_paddle_start;
        self.ball = Ball::locked(layout, server);
    }
}
