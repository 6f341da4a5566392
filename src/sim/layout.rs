//! One-time derivation of table geometry from the window size
//!
//! Everything here is pure arithmetic on the window size, the native sizes of
//! the sprite images and the [`Tuning`] coefficients. Tiny windows produce
//! degenerate rectangles; that is accepted rather than handled.

use super::rect::{Rect, Size};
use super::state::Side;
use crate::tuning::Tuning;

/// Native pixel sizes of the sprites the layout scales from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetSizes {
    pub background: Size,
    pub paddle: Size,
    pub ball: Size,
}

/// Scale a native length, rounding to the nearest pixel
#[inline]
fn scaled(native: i32, scale: f32) -> i32 {
    (native as f32 * scale).round() as i32
}

/// Table geometry, immutable after startup
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub window: Size,
    /// Destination of the table background
    pub background: Rect,
    /// Window width / native background width
    pub h_scale: f32,
    /// Table height / native background height
    pub v_scale: f32,
    pub left_paddle_start: Rect,
    pub right_paddle_start: Rect,
    /// Minimum paddle y (also the ball's upper bound)
    pub paddle_upper_limit: i32,
    /// Maximum paddle y
    pub paddle_lower_limit: i32,
    /// Paddle movement per frame
    pub paddle_speed: i32,
    pub left_ball_lock: Rect,
    pub right_ball_lock: Rect,
    /// Horizontal ball speed at serve, and the vertical speed clamp
    pub ball_default_speed: i32,
    /// Maximum ball y before it bounces off the bottom border
    pub ball_lower_limit: i32,
    /// Ball x below which the right side scores
    pub left_goal: i32,
    /// Ball x above which the left side scores
    pub right_goal: i32,
}

impl Layout {
    pub fn new(window: Size, assets: &AssetSizes, tuning: &Tuning) -> Self {
        let table_h = (tuning.table_coeff * window.h as f32).round() as i32;
        let background = Rect::new(0, window.h - table_h, window.w, table_h);

        let h_scale = window.w as f32 / assets.background.w as f32;
        let v_scale = table_h as f32 / assets.background.h as f32;

        // Paddles sit centred on the goal line
        let pad_w = scaled(assets.paddle.w, h_scale);
        let pad_h = scaled(assets.paddle.h, v_scale);
        let offset = scaled(
            tuning.table_inset() + tuning.goal_offset + (tuning.goal_width >> 1),
            h_scale,
        );
        let pad_y = background.y + ((background.h - pad_h) >> 1);
        let left_paddle_start = Rect::new(offset - (pad_w >> 1), pad_y, pad_w, pad_h);
        let right_paddle_start = Rect::new(window.w - offset - (pad_w >> 1), pad_y, pad_w, pad_h);

        let paddle_speed = ((tuning.player_speed_coeff * window.h as f32).round() as i32).max(1);
        let paddle_upper_limit = background.y + scaled(tuning.table_inset(), v_scale);
        let paddle_lower_limit = window.h
            - scaled(
                tuning.table_inset() + assets.paddle.h + tuning.pad_border,
                v_scale,
            );

        // The ball keeps its aspect ratio, so both axes use the vertical scale
        let ball_w = scaled(assets.ball.w, v_scale);
        let ball_h = scaled(assets.ball.h, v_scale);
        let ball_y = pad_y + ((pad_h - ball_h) >> 1);
        let left_ball_lock = Rect::new(
            left_paddle_start.x
                + scaled(
                    tuning.pad_border + assets.paddle.w - tuning.ball_margin,
                    h_scale,
                ),
            ball_y,
            ball_w,
            ball_h,
        );
        let right_ball_lock = Rect::new(
            right_paddle_start.x - scaled(assets.paddle.w + (tuning.ball_margin << 1), h_scale),
            ball_y,
            ball_w,
            ball_h,
        );

        let ball_default_speed = ((window.w as f32 * tuning.ball_speed_coeff).round() as i32).max(1);
        let ball_lower_limit = window.h - scaled(tuning.table_inset(), v_scale) - ball_h;

        let left_goal = scaled(
            tuning.table_inset() + tuning.goal_offset + tuning.goal_width - tuning.ball_margin,
            h_scale,
        );
        let right_goal = window.w - left_goal;

        Self {
            window,
            background,
            h_scale,
            v_scale,
            left_paddle_start,
            right_paddle_start,
            paddle_upper_limit,
            paddle_lower_limit,
            paddle_speed,
            left_ball_lock,
            right_ball_lock,
            ball_default_speed,
            ball_lower_limit,
            left_goal,
            right_goal,
        }
    }

    pub fn paddle_start(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left_paddle_start,
            Side::Right => self.right_paddle_start,
        }
    }

    pub fn ball_lock(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left_ball_lock,
            Side::Right => self.right_ball_lock,
        }
    }
}

/// Placement of the score text above the table
///
/// Depends on the rendered separator glyph, so it is computed once the font
/// is loaded. Score widths follow the rendered text, so a two-digit score
/// keeps its aspect ratio.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreLayout {
    pub separator: Rect,
    /// Rendered text height -> on-screen height
    pub text_scale: f32,
    margin: i32,
}

impl ScoreLayout {
    pub fn new(window: Size, separator_native: Size, tuning: &Tuning) -> Self {
        let h = (((1.0 - tuning.table_coeff) / 2.0) * window.h as f32).round() as i32;
        let text_scale = if separator_native.h > 0 {
            h as f32 / separator_native.h as f32
        } else {
            0.0
        };
        let w = scaled(separator_native.w, text_scale);
        let separator = Rect::new((window.w - w) >> 1, tuning.upper_margin, w, h);
        Self {
            separator,
            text_scale,
            margin: tuning.separator_margin,
        }
    }

    /// Destination of one side's score given the native size of its rendered text
    pub fn score_rect(&self, side: Side, text_native: Size) -> Rect {
        let w = scaled(text_native.w, self.text_scale);
        let x = match side {
            Side::Left => self.separator.x - self.margin - w,
            Side::Right => self.separator.right() + self.margin,
        };
        Rect::new(x, self.separator.y, w, self.separator.h)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;

    /// A 1920x1200 window over a 1920x1080 table image: both scales are 1.0
    pub fn layout() -> Layout {
        Layout::new(Size::new(1920, 1200), &assets(), &Tuning::default())
    }

    pub fn assets() -> AssetSizes {
        AssetSizes {
            background: Size::new(1920, 1080),
            paddle: Size::new(30, 180),
            ball: Size::new(30, 30),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_and_scales() {
        let layout = fixtures::layout();
        assert_eq!(layout.background, Rect::new(0, 120, 1920, 1080));
        assert!((layout.h_scale - 1.0).abs() < 1e-6);
        assert!((layout.v_scale - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_paddles() {
        let layout = fixtures::layout();
        // Centre offset = 45 + 15 + 404 + 7 = 471
        assert_eq!(layout.left_paddle_start, Rect::new(456, 570, 30, 180));
        assert_eq!(layout.right_paddle_start, Rect::new(1434, 570, 30, 180));
        assert_eq!(layout.paddle_speed, 12);
        assert_eq!(layout.paddle_upper_limit, 180);
        assert_eq!(layout.paddle_lower_limit, 950);
    }

    #[test]
    fn test_ball_and_goals() {
        let layout = fixtures::layout();
        assert_eq!(layout.left_ball_lock, Rect::new(488, 645, 30, 30));
        assert_eq!(layout.right_ball_lock, Rect::new(1388, 645, 30, 30));
        assert_eq!(layout.ball_default_speed, 10);
        assert_eq!(layout.ball_lower_limit, 1110);
        assert_eq!(layout.left_goal, 471);
        assert_eq!(layout.right_goal, 1449);
    }

    #[test]
    fn test_ball_locks_sit_inside_the_paddles() {
        let layout = fixtures::layout();
        assert!(layout.left_ball_lock.x >= layout.left_paddle_start.right());
        assert!(layout.right_ball_lock.right() <= layout.right_paddle_start.x);
        assert!(layout.left_goal < layout.left_ball_lock.x);
        assert!(layout.right_goal > layout.right_ball_lock.right());
    }

    #[test]
    fn test_layout_scales_with_window() {
        let layout = Layout::new(Size::new(960, 600), &fixtures::assets(), &Tuning::default());
        // 0.9 * 600 = 540 -> v_scale 0.5, h_scale 0.5
        assert_eq!(layout.background, Rect::new(0, 60, 960, 540));
        assert_eq!(layout.left_paddle_start.w, 15);
        assert_eq!(layout.left_paddle_start.h, 90);
        assert_eq!(layout.paddle_speed, 6);
        assert_eq!(layout.ball_default_speed, 5);
    }

    #[test]
    fn test_tiny_window_keeps_speeds_positive() {
        let layout = Layout::new(Size::new(10, 10), &fixtures::assets(), &Tuning::default());
        assert!(layout.paddle_speed >= 1);
        assert!(layout.ball_default_speed >= 1);
    }

    #[test]
    fn test_score_layout() {
        let scores = ScoreLayout::new(Size::new(1920, 1200), Size::new(20, 100), &Tuning::default());
        assert_eq!(scores.separator, Rect::new(954, 30, 12, 60));
        assert!((scores.text_scale - 0.6).abs() < 1e-6);

        let text = Size::new(50, 100);
        assert_eq!(scores.score_rect(Side::Left, text), Rect::new(904, 30, 30, 60));
        assert_eq!(scores.score_rect(Side::Right, text), Rect::new(986, 30, 30, 60));

        // Wider text grows away from the separator
        let wide = scores.score_rect(Side::Left, Size::new(100, 100));
        assert_eq!(wide.right(), 954 - 20);
    }
}
