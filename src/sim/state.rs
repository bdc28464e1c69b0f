//! Entity state for one play session
//!
//! Plain data records mutated by the tick (ball, blocks) or by paddle input.
//! Everything is serializable so an embedding layer can marshal state across
//! a bridge boundary.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::geom::Rect;
use crate::config::Config;
use crate::consts::ROW_COLORS;

/// Side of the play field a ball can bounce off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Wall {
    Left,
    Right,
    Top,
}

/// A discrete fact produced by a single tick.
///
/// Events are consumed by the session layer (score, phase) and forwarded to
/// presentation side effects; they are never fed back into the next tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// Ball bounced off a field wall
    WallHit { wall: Wall },
    /// Ball rebounded off the paddle
    PaddleHit,
    /// Block at `index` was destroyed this tick
    BlockDestroyed { index: usize },
    /// The last intact block was destroyed this tick
    FieldCleared,
    /// Ball crossed the floor line; the session is over
    BallLost,
}

/// The ball. Collision tests treat it as an axis-aligned square.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    /// Per-frame velocity
    pub vel: Vec2,
    pub size: f32,
}

impl Ball {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: Vec2::splat(self.size),
        }
    }

    pub fn center_x(&self) -> f32 {
        self.pos.x + self.size / 2.0
    }
}

/// The player's paddle. Only `x` ever changes; physics never moves it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub x: f32,
    /// Fixed band top
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Paddle {
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.width / 2.0
    }
}

/// A destructible block.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Stable row-major grid index; doubles as the block's identity
    pub index: usize,
    pub pos: Vec2,
    pub size: Vec2,
    /// Row-derived display color (0xRRGGBB), no behavioral role
    pub color: u32,
    /// Set exactly once, on the tick the ball first overlaps this block
    pub destroyed: bool,
}

impl Block {
    pub fn rect(&self) -> Rect {
        Rect {
            pos: self.pos,
            size: self.size,
        }
    }
}

/// All mutable entity state for one session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimState {
    /// Play-area size
    pub field: Vec2,
    pub ball: Ball,
    pub paddle: Paddle,
    /// Fixed grid, ascending index; blocks are flagged, never removed
    pub blocks: Vec<Block>,
}

impl SimState {
    /// Seed a fresh session: ball above the paddle band, paddle centered,
    /// full grid intact.
    pub fn new(config: &Config) -> Self {
        Self {
            field: Vec2::new(config.field_width, config.field_height),
            ball: Ball {
                pos: config.ball_start(),
                vel: Vec2::new(config.ball_start_vx, config.ball_start_vy),
                size: config.ball_size,
            },
            paddle: Paddle {
                x: config.paddle_start_x(),
                y: config.paddle_y(),
                width: config.paddle_width,
                height: config.paddle_height,
            },
            blocks: block_grid(config),
        }
    }

    pub fn blocks_remaining(&self) -> usize {
        self.blocks.iter().filter(|b| !b.destroyed).count()
    }
}

/// Build the fixed rows x columns grid, row-major, colored by row.
fn block_grid(config: &Config) -> Vec<Block> {
    let mut blocks = Vec::with_capacity(config.block_count());
    for row in 0..config.grid_rows {
        for col in 0..config.grid_cols {
            blocks.push(Block {
                index: (row * config.grid_cols + col) as usize,
                pos: Vec2::new(
                    config.grid_left + col as f32 * (config.block_width + config.block_gap),
                    config.grid_top + row as f32 * (config.block_height + config.block_gap),
                ),
                size: Vec2::new(config.block_width, config.block_height),
                color: ROW_COLORS[row as usize % ROW_COLORS.len()],
                destroyed: false,
            });
        }
    }
    blocks
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_layout() {
        let state = SimState::new(&Config::default());
        assert_eq!(state.blocks.len(), 20);

        // Row-major indices
        for (i, block) in state.blocks.iter().enumerate() {
            assert_eq!(block.index, i);
            assert!(!block.destroyed);
        }

        // First block at the grid origin, second one slot to the right
        assert_eq!(state.blocks[0].pos, Vec2::new(20.0, 100.0));
        assert_eq!(state.blocks[1].pos, Vec2::new(85.0, 100.0));
        // First block of the second row one slot down
        assert_eq!(state.blocks[5].pos, Vec2::new(20.0, 125.0));
    }

    #[test]
    fn test_grid_row_colors() {
        let state = SimState::new(&Config::default());
        assert_eq!(state.blocks[0].color, 0xff6b6b);
        assert_eq!(state.blocks[5].color, 0x4ecdc4);
        assert_eq!(state.blocks[10].color, 0x45b7d1);
        assert_eq!(state.blocks[15].color, 0x96ceb4);
    }

    #[test]
    fn test_initial_entities() {
        let config = Config::default();
        let state = SimState::new(&config);

        assert_eq!(state.ball.vel, Vec2::new(2.0, -4.0));
        assert_eq!(state.ball.pos, config.ball_start());
        // Paddle centered on its fixed band
        assert_eq!(state.paddle.center_x(), config.field_width / 2.0);
        assert_eq!(state.paddle.y, config.paddle_y());
        assert_eq!(state.blocks_remaining(), 20);
    }
}
