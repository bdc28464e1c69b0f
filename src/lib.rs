//! Pocket Breakout - headless core for a single-screen block-breaker
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, entity state)
//! - `session`: Run/restart lifecycle, score and outcome tracking
//! - `config`: Data-driven field geometry and tuning
//!
//! Presentation (rendering, drag gestures, audio) lives outside this crate:
//! an adapter calls [`Session::advance_frame`] once per display frame, feeds
//! drag samples through [`Session::set_paddle_target`], and renders
//! [`Session::snapshot`].

pub mod config;
pub mod session;
pub mod sim;

pub use config::Config;
pub use session::{BlockView, EventSink, FnSink, GamePhase, NoopSink, Session, Snapshot};
pub use sim::{GameEvent, Wall};

/// Game configuration defaults
///
/// Velocities are in points per frame: the simulation advances by one fixed
/// per-frame delta per tick and does not compensate for elapsed wall-clock
/// time.
pub mod consts {
    /// Default play-area size (portrait phone, points)
    pub const FIELD_WIDTH: f32 = 390.0;
    pub const FIELD_HEIGHT: f32 = 844.0;

    /// Ball defaults - the ball is an axis-aligned square so wall, paddle,
    /// and block tests share one rectangle predicate
    pub const BALL_SIZE: f32 = 15.0;
    pub const BALL_START_VX: f32 = 2.0;
    pub const BALL_START_VY: f32 = -4.0;
    /// Ball spawns this far above the bottom edge
    pub const BALL_START_FLOOR_OFFSET: f32 = 250.0;
    /// Horizontal speed cap applied after paddle steering
    pub const BALL_MAX_VX: f32 = 6.0;

    /// Paddle defaults - the band top sits PADDLE_FLOOR_OFFSET above the
    /// bottom edge and never moves vertically
    pub const PADDLE_WIDTH: f32 = 80.0;
    pub const PADDLE_HEIGHT: f32 = 10.0;
    pub const PADDLE_FLOOR_OFFSET: f32 = 100.0;
    /// Paddle-center offset to added horizontal velocity ratio
    pub const STEER_FACTOR: f32 = 0.08;

    /// The ball is lost once its top edge enters this band above the bottom
    pub const FLOOR_MARGIN: f32 = 50.0;

    /// Block grid defaults
    pub const BLOCK_WIDTH: f32 = 60.0;
    pub const BLOCK_HEIGHT: f32 = 20.0;
    pub const BLOCK_GAP: f32 = 5.0;
    pub const GRID_LEFT: f32 = 20.0;
    pub const GRID_TOP: f32 = 100.0;
    pub const GRID_ROWS: u32 = 4;
    pub const GRID_COLS: u32 = 5;

    /// Score awarded per destroyed block
    pub const BLOCK_REWARD: u64 = 10;

    /// Display color per grid row (0xRRGGBB), cycled if the grid has more
    /// rows than entries. No behavioral role.
    pub const ROW_COLORS: [u32; 4] = [0xff6b6b, 0x4ecdc4, 0x45b7d1, 0x96ceb4];
}
