//! Deterministic simulation module
//!
//! All gameplay physics lives here. This module must stay pure and
//! deterministic:
//! - Fixed per-frame timestep only
//! - Stable block iteration order (ascending index)
//! - No rendering, input, or platform dependencies
//!
//! A tick reports what happened as [`GameEvent`]s; score and phase are the
//! session layer's business.

pub mod geom;
pub mod state;
pub mod tick;

pub use geom::{Rect, reflect};
pub use state::{Ball, Block, GameEvent, Paddle, SimState, Wall};
pub use tick::tick;
