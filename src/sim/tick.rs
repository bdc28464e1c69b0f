//! Per-frame simulation step
//!
//! Advances the ball by one fixed per-frame delta and resolves collisions in
//! a fixed order: walls, floor, paddle, blocks. The step mutates entity state
//! (ball, destroyed flags) and reports everything else that happened as
//! events; score and phase transitions are applied by the session layer.
//!
//! Known limitation: velocities are per-frame deltas, so perceived speed
//! tracks the driving frame rate. There is no wall-clock compensation.

use super::geom::reflect;
use super::state::{GameEvent, SimState, Wall};
use crate::config::Config;

/// Advance the simulation by one tick.
///
/// Every step below operates on the same tick's tentative ball position. A
/// floor crossing ends the tick early; nothing else does.
pub fn tick(state: &mut SimState, config: &Config) -> Vec<GameEvent> {
    let mut events = Vec::new();
    let SimState {
        field,
        ball,
        paddle,
        blocks,
    } = state;

    // Integrate
    ball.pos += ball.vel;

    // Wall clamps saturate the velocity sign instead of negating it, so a
    // stale sign from a prior frame cannot pin the ball to the boundary.
    if ball.pos.x < 0.0 {
        ball.pos.x = 0.0;
        ball.vel.x = ball.vel.x.abs();
        events.push(GameEvent::WallHit { wall: Wall::Left });
    }
    let max_x = field.x - ball.size;
    if ball.pos.x > max_x {
        ball.pos.x = max_x;
        ball.vel.x = -ball.vel.x.abs();
        events.push(GameEvent::WallHit { wall: Wall::Right });
    }
    if ball.pos.y < 0.0 {
        ball.pos.y = 0.0;
        ball.vel.y = ball.vel.y.abs();
        events.push(GameEvent::WallHit { wall: Wall::Top });
    }

    // Floor crossing is the sole loss condition and ends the tick before any
    // paddle or block resolution.
    if ball.pos.y >= config.floor_y() {
        events.push(GameEvent::BallLost);
        return events;
    }

    // Paddle rebound is one-way: only a downward-moving ball can hit, so the
    // upward rebound cannot re-collide and trap the ball inside the paddle.
    if ball.vel.y > 0.0 && ball.rect().overlaps(&paddle.rect()) {
        ball.pos.y = paddle.y - ball.size;
        ball.vel.y = -ball.vel.y.abs();

        // Off-center hits steer the rebound; this is the player-skill coupling
        // between paddle position and ball trajectory.
        let offset = ball.center_x() - paddle.center_x();
        ball.vel.x += offset * config.steer_factor;
        ball.vel.x = ball.vel.x.clamp(-config.ball_max_vx, config.ball_max_vx);

        events.push(GameEvent::PaddleHit);
    }

    // Scan blocks in ascending index; the first intact overlap wins and ends
    // the scan. At most one block is destroyed per tick even if the ball
    // overlaps several - an intentional simplification, and the index order
    // is the observable tie-break.
    let ball_rect = ball.rect();
    let mut destroyed = None;
    for block in blocks.iter_mut() {
        if !block.destroyed && block.rect().overlaps(&ball_rect) {
            block.destroyed = true;
            destroyed = Some(block.index);
            break;
        }
    }
    if let Some(index) = destroyed {
        ball.vel.y = reflect(ball.vel.y);
        events.push(GameEvent::BlockDestroyed { index });
        if blocks.iter().all(|b| b.destroyed) {
            events.push(GameEvent::FieldCleared);
        }
    }

    events
}
