//! Rebound - a single-screen block-breaking arcade game
//!
//! Core modules:
//! - `sim`: Deterministic simulation (geometry, collisions, game state)
//! - `renderer`: Render intents, the renderer contract, and its backends
//!
//! The simulation never renders or schedules anything itself. Each call to
//! [`sim::tick`] returns the shape operations the host must hand to a
//! [`renderer::Renderer`], and the host re-arms its timer only while the
//! game is still in play.

pub mod renderer;
pub mod sim;

use serde::{Deserialize, Serialize};

/// Game configuration constants
pub mod consts {
    /// Gap between the playable area and the window edge, on all four sides
    pub const MARGIN: f32 = 10.0;

    /// Arena dimensions at startup (resizable afterwards)
    pub const ARENA_WIDTH: f32 = 800.0;
    pub const ARENA_HEIGHT: f32 = 800.0;

    /// Ball defaults
    pub const BALL_RADIUS: f32 = 20.0;
    /// Per-axis speed in pixels per tick; only the signs ever change,
    /// so the ball always travels on 45-degree diagonals
    pub const BALL_SPEED: f32 = 6.0;

    /// Paddle defaults
    pub const PADDLE_WIDTH: f32 = 100.0;
    pub const PADDLE_HEIGHT: f32 = 30.0;

    /// Block field layout: three rows of seven, left to right
    pub const BLOCK_ROWS: usize = 3;
    pub const BLOCKS_PER_ROW: usize = 7;
    pub const BLOCK_WIDTH: f32 = 100.0;
    pub const BLOCK_HEIGHT: f32 = 30.0;
    pub const BLOCK_GAP: f32 = 10.0;
    /// Distance from the top margin to the first row
    pub const BLOCK_TOP_OFFSET: f32 = 30.0;

    /// Fixed delay between simulation ticks
    pub const TICK_INTERVAL_MS: u32 = 30;

    /// Font size for the end-of-game banner
    pub const BANNER_FONT_PX: u32 = 24;
}

/// An opaque RGB color, formatted as `#rrggbb` for canvas backends
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 128, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Color for the block at `index` of a `count`-wide row: fades from
    /// red on the left to blue on the right
    pub fn row_gradient(index: usize, count: usize) -> Self {
        let t = index as f32 / count.max(1) as f32;
        Self {
            r: (255.0 - 255.0 * t) as u8,
            g: 0,
            b: (255.0 * t) as u8,
        }
    }

    /// CSS hex form, e.g. `#ff0040`
    pub fn css(&self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}
