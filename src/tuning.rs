//! Data-driven game balance
//!
//! The design coefficients every rectangle and speed is derived from. Offsets
//! and margins are in native background-image pixels and get scaled by the
//! layout; coefficients are fractions of the window size.

use serde::{Deserialize, Serialize};

/// Fixed design coefficients
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Tuning {
    /// Fraction of the window height occupied by the table
    pub table_coeff: f32,
    /// Fraction of the window height a paddle covers per frame
    pub player_speed_coeff: f32,
    /// Fraction of the window width the ball covers per frame at serve speed
    pub ball_speed_coeff: f32,
    /// Offset of the table border from the image edge
    pub border_offset: i32,
    /// Width of the border line
    pub border_width: i32,
    /// Width of the goal line
    pub goal_width: i32,
    /// Offset of the goal line from the table border
    pub goal_offset: i32,
    /// Drop-shadow border around the paddle sprite
    pub pad_border: i32,
    /// Margin between the top of the window and the score text (window px)
    pub upper_margin: i32,
    /// Gap between a score and the separator (window px)
    pub separator_margin: i32,
    /// Transparent margin around the ball sprite
    pub ball_margin: i32,
    /// Pixel height the font is rasterised at
    pub font_size: f32,
    /// Minimum spacing between frames (ms)
    pub min_frame_time_ms: u64,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            table_coeff: 0.9,
            player_speed_coeff: 0.01,
            ball_speed_coeff: 0.005,
            border_offset: 45,
            border_width: 15,
            goal_width: 15,
            goal_offset: 404,
            pad_border: 10,
            upper_margin: 30,
            separator_margin: 20,
            ball_margin: 8,
            font_size: 100.0,
            min_frame_time_ms: 10,
        }
    }
}

impl Tuning {
    /// Border offset plus border width: distance from the image edge to the playfield
    #[inline]
    pub fn table_inset(&self) -> i32 {
        self.border_offset + self.border_width
    }
}
