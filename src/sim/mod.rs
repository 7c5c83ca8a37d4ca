//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must be pure and deterministic:
//! - Fixed cadence only, one step per tick
//! - Stable iteration order (blocks in creation order)
//! - No rendering or platform dependencies; ticks emit render intents and
//!   the host applies them

pub mod collision;
pub mod rect;
pub mod state;
pub mod tick;

pub use collision::{
    circle_overlaps_rect, classify_boundary_hit, horizontal_wall_hit, resolve, vertical_wall_hit,
    CollisionOutcome, WallSide,
};
pub use rect::Rect;
pub use state::{ArenaConfig, Ball, Block, BlockField, GamePhase, GameState, Paddle};
pub use tick::tick;
