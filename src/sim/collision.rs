//! Collision detection and response
//!
//! Discrete checks against the ball's post-move position. There is no swept
//! test and no overlap resolution: a fast ball can tunnel through a paddle,
//! and a bounced ball may stay inside the paddle for a frame.

use super::rect::Rect;
use super::state::{Ball, PlayerMoved, Side};

/// Reflect off the top or bottom border
///
/// Only flips when the ball is moving into the border, so a ball resting past
/// the limit doesn't jitter. Returns true on a bounce.
pub fn bounce_off_walls(ball: &mut Ball, upper_limit: i32, lower_limit: i32) -> bool {
    let hit_top = ball.rect.y <= upper_limit && ball.vel.y < 0;
    let hit_bottom = ball.rect.y >= lower_limit && ball.vel.y > 0;
    if hit_top || hit_bottom {
        ball.vel.y = -ball.vel.y;
        return true;
    }
    false
}

/// Whether the ball is touching `side`'s paddle while travelling toward it
pub fn touches_paddle(ball: &Ball, paddle: &Rect, side: Side) -> bool {
    let within_y = ball.rect.y >= paddle.y && ball.rect.y <= paddle.bottom();
    let reaches_x = match side {
        Side::Left => ball.rect.x <= paddle.right() && ball.vel.x < 0,
        Side::Right => ball.rect.right() >= paddle.x && ball.vel.x > 0,
    };
    within_y && reaches_x
}

/// Reflect off a paddle, adding spin from the paddle's movement this frame
///
/// The vertical speed is clamped to `[-max_speed_y, max_speed_y]`.
pub fn bounce_off_paddle(
    ball: &mut Ball,
    paddle: &Rect,
    side: Side,
    moved: PlayerMoved,
    paddle_speed: i32,
    max_speed_y: i32,
) -> bool {
    if !touches_paddle(ball, paddle, side) {
        return false;
    }
    ball.vel.x = -ball.vel.x;
    ball.vel.y = (ball.vel.y + paddle_speed * moved.sign()).clamp(-max_speed_y, max_speed_y);
    true
}

/// Side that scores if the ball has crossed a goal line
pub fn goal_scorer(ball: &Ball, left_goal: i32, right_goal: i32) -> Option<Side> {
    if ball.rect.x < left_goal {
        Some(Side::Right)
    } else if ball.rect.x > right_goal {
        Some(Side::Left)
    } else {
        None
    }
}
