//! Data-driven field geometry and tuning
//!
//! Everything the simulation treats as a parameter lives here. Defaults
//! describe the standard portrait layout; an embedding UI overrides what it
//! needs (typically just the field size) via [`Config::from_json`], which
//! accepts partial documents.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::consts::*;

/// Field geometry and gameplay tuning for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Play-area size in points
    pub field_width: f32,
    pub field_height: f32,

    /// Ball square side
    pub ball_size: f32,
    /// Initial per-frame velocity at session start
    pub ball_start_vx: f32,
    pub ball_start_vy: f32,
    /// Ball spawn height above the bottom edge
    pub ball_start_floor_offset: f32,
    /// Horizontal speed cap after paddle steering
    pub ball_max_vx: f32,

    pub paddle_width: f32,
    pub paddle_height: f32,
    /// Height of the paddle band top above the bottom edge
    pub paddle_floor_offset: f32,
    /// Paddle-center offset to added horizontal velocity ratio
    pub steer_factor: f32,

    /// Loss band height above the bottom edge
    pub floor_margin: f32,

    pub block_width: f32,
    pub block_height: f32,
    /// Spacing between neighboring blocks, both axes
    pub block_gap: f32,
    /// Top-left corner of the grid
    pub grid_left: f32,
    pub grid_top: f32,
    pub grid_rows: u32,
    pub grid_cols: u32,

    /// Score per destroyed block
    pub block_reward: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: FIELD_WIDTH,
            field_height: FIELD_HEIGHT,
            ball_size: BALL_SIZE,
            ball_start_vx: BALL_START_VX,
            ball_start_vy: BALL_START_VY,
            ball_start_floor_offset: BALL_START_FLOOR_OFFSET,
            ball_max_vx: BALL_MAX_VX,
            paddle_width: PADDLE_WIDTH,
            paddle_height: PADDLE_HEIGHT,
            paddle_floor_offset: PADDLE_FLOOR_OFFSET,
            steer_factor: STEER_FACTOR,
            floor_margin: FLOOR_MARGIN,
            block_width: BLOCK_WIDTH,
            block_height: BLOCK_HEIGHT,
            block_gap: BLOCK_GAP,
            grid_left: GRID_LEFT,
            grid_top: GRID_TOP,
            grid_rows: GRID_ROWS,
            grid_cols: GRID_COLS,
            block_reward: BLOCK_REWARD,
        }
    }
}

impl Config {
    /// Parse a config from JSON. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Top edge of the paddle band.
    pub fn paddle_y(&self) -> f32 {
        self.field_height - self.paddle_floor_offset
    }

    /// The ball is lost once its top edge reaches this line.
    pub fn floor_y(&self) -> f32 {
        self.field_height - self.floor_margin
    }

    /// Ball spawn position: horizontally centered, above the paddle band.
    pub fn ball_start(&self) -> Vec2 {
        Vec2::new(
            self.field_width / 2.0 - self.ball_size / 2.0,
            self.field_height - self.ball_start_floor_offset,
        )
    }

    /// Paddle spawn x: horizontally centered.
    pub fn paddle_start_x(&self) -> f32 {
        self.field_width / 2.0 - self.paddle_width / 2.0
    }

    /// Total number of blocks in the grid.
    pub fn block_count(&self) -> usize {
        (self.grid_rows * self.grid_cols) as usize
    }
}
