//! Headless demo loop
//!
//! Stands in for the mobile presentation layer during development: drives one
//! session to completion with a ball-tracking autopilot and reports the
//! outcome. Run with `RUST_LOG=debug` for per-event detail.

use std::error::Error;

use pocket_breakout::{Config, EventSink, GameEvent, Session};

/// Narrates tick events; the slot a sound-effect player would occupy.
struct LogSink;

impl EventSink for LogSink {
    fn on_event(&mut self, event: &GameEvent) -> Result<(), Box<dyn Error>> {
        log::debug!("{event:?}");
        Ok(())
    }
}

/// Track the ball, leading it so each paddle rebound steers toward the lowest
/// intact block.
fn steer(session: &mut Session) {
    let snapshot = session.snapshot();
    let config = session.config();

    let ball_center = snapshot.ball_x + config.ball_size / 2.0;
    let target = snapshot
        .blocks
        .iter()
        .find(|b| !b.destroyed)
        .map(|b| b.x + config.block_width / 2.0)
        .unwrap_or(config.field_width / 2.0);

    // Rebound offset capped so the steering stays gentle
    let lead = ((target - ball_center) * 0.5).clamp(-30.0, 30.0);
    let x = ball_center - lead - config.paddle_width / 2.0;
    session.set_paddle_target(x);
}

fn main() {
    env_logger::init();

    let mut session = Session::new(Config::default());
    session.start();

    // Ten minutes of simulated play at 60 fps, in case the autopilot
    // settles into a cycle it cannot break
    const FRAME_LIMIT: u64 = 60 * 60 * 10;
    let mut frames: u64 = 0;

    while session.advance_frame(&mut LogSink) && frames < FRAME_LIMIT {
        steer(&mut session);
        frames += 1;
    }

    let snapshot = session.snapshot();
    log::info!(
        "{:?} after {frames} frames, score {}",
        snapshot.phase,
        snapshot.score
    );
    println!(
        "{:?}: score {} in {frames} frames",
        snapshot.phase, snapshot.score
    );
}
