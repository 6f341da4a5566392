//! Per-frame simulation step
//!
//! Advances the game by exactly one frame from a keyboard snapshot.

use super::collision::{bounce_off_paddle, bounce_off_walls, goal_scorer};
use super::layout::Layout;
use super::rect::Rect;
use super::state::{GameEvent, GameState, PlayerMoved, Side};

/// Requested paddle direction for one side
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Steer {
    Up,
    #[default]
    Idle,
    Down,
}

impl Steer {
    /// Up wins when both keys are held
    pub fn from_keys(up: bool, down: bool) -> Self {
        if up {
            Steer::Up
        } else if down {
            Steer::Down
        } else {
            Steer::Idle
        }
    }
}

/// Input commands for a single tick
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TickInput {
    pub left: Steer,
    pub right: Steer,
    /// Serve key held
    pub serve: bool,
}

impl TickInput {
    pub fn steer(&self, side: Side) -> Steer {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }
}

/// Move a paddle one frame, landing exactly on the limit instead of crossing it
///
/// Returns the direction actually moved and the applied y delta. A paddle
/// already at its limit stays put and reports [`PlayerMoved::None`].
pub fn move_paddle(paddle: &mut Rect, steer: Steer, layout: &Layout) -> (PlayerMoved, i32) {
    match steer {
        Steer::Up if paddle.y > layout.paddle_upper_limit => {
            let step = layout.paddle_speed.min(paddle.y - layout.paddle_upper_limit);
            paddle.y -= step;
            (PlayerMoved::Up, -step)
        }
        Steer::Down if paddle.y < layout.paddle_lower_limit => {
            let step = layout.paddle_speed.min(layout.paddle_lower_limit - paddle.y);
            paddle.y += step;
            (PlayerMoved::Down, step)
        }
        _ => (PlayerMoved::None, 0),
    }
}

/// Advance the game state by one frame
///
/// Returns an event when a goal was scored this frame.
pub fn tick(state: &mut GameState, layout: &Layout, input: &TickInput) -> Option<GameEvent> {
    let mut moved = [PlayerMoved::None; 2];

    for (i, side) in Side::BOTH.into_iter().enumerate() {
        let (dir, delta) = move_paddle(state.paddle_mut(side), input.steer(side), layout);
        moved[i] = dir;

        // A locked ball rides its paddle, or leaves with the paddle's spin
        if state.ball.lock == Some(side) && dir != PlayerMoved::None {
            if input.serve {
                state
                    .ball
                    .release(side, layout.ball_default_speed, layout.paddle_speed * dir.sign());
            } else {
                state.ball.rect.y += delta;
            }
        }
    }

    // Serving from a stationary paddle
    if input.serve {
        if let Some(side) = state.ball.lock {
            state.ball.release(side, layout.ball_default_speed, 0);
        }
    }

    if state.ball.is_locked() {
        return None;
    }

    state.ball.rect.x += state.ball.vel.x;
    state.ball.rect.y += state.ball.vel.y;

    bounce_off_walls(
        &mut state.ball,
        layout.paddle_upper_limit,
        layout.ball_lower_limit,
    );

    let [left_moved, right_moved] = moved;
    if !bounce_off_paddle(
        &mut state.ball,
        &state.left_paddle,
        Side::Left,
        left_moved,
        layout.paddle_speed,
        layout.ball_default_speed,
    ) {
        bounce_off_paddle(
            &mut state.ball,
            &state.right_paddle,
            Side::Right,
            right_moved,
            layout.paddle_speed,
            layout.ball_default_speed,
        );
    }

    let scorer = goal_scorer(&state.ball, layout.left_goal, layout.right_goal)?;
    let score = state.score.award(scorer);
    // The scorer serves next
    state.reset_for_serve(layout, scorer);
    log::info!("{:?} scores ({}:{})", scorer, state.score.left, state.score.right);
    Some(GameEvent::Scored { side: scorer, score })
}
