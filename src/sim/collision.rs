//! Collision detection and response
//!
//! The ball is a circle but every check here treats it as its axis-aligned
//! bounding box. That coarse approximation is intentional and matches the
//! rest of the design: reflections only ever flip a velocity sign, so an
//! exact circle-vs-rect distance would buy nothing visible at this scale.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use super::state::{ArenaConfig, Ball, BlockField, Paddle};
use crate::consts::MARGIN;
use crate::renderer::ShapeId;

/// A wall of the playable area
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WallSide {
    Left,
    Right,
    Top,
    Bottom,
}

/// True iff the ball's bounding box overlaps `rect`, strict on all four
/// sides: merely touching an edge does not count
pub fn circle_overlaps_rect(center: Vec2, radius: f32, rect: &Rect) -> bool {
    center.x + radius > rect.min.x
        && center.x - radius < rect.max.x
        && center.y + radius > rect.min.y
        && center.y - radius < rect.max.y
}

/// Left/right margin contact, left checked first, comparisons inclusive
pub fn horizontal_wall_hit(center: Vec2, radius: f32, config: &ArenaConfig) -> Option<WallSide> {
    if center.x - radius <= MARGIN {
        Some(WallSide::Left)
    } else if center.x + radius >= config.width - MARGIN {
        Some(WallSide::Right)
    } else {
        None
    }
}

/// Top/bottom margin contact, top checked first, comparisons inclusive
pub fn vertical_wall_hit(center: Vec2, radius: f32, config: &ArenaConfig) -> Option<WallSide> {
    if center.y - radius <= MARGIN {
        Some(WallSide::Top)
    } else if center.y + radius >= config.height - MARGIN {
        Some(WallSide::Bottom)
    } else {
        None
    }
}

/// First wall the ball has reached, in the fixed priority order left,
/// right, top, bottom. Reports at most one side; in a corner the earlier
/// side wins.
pub fn classify_boundary_hit(center: Vec2, radius: f32, config: &ArenaConfig) -> Option<WallSide> {
    horizontal_wall_hit(center, radius, config).or_else(|| vertical_wall_hit(center, radius, config))
}

/// What one resolution pass did, for logging and render intents
#[derive(Debug, Clone, Copy, Default)]
pub struct CollisionOutcome {
    pub horizontal_wall: Option<WallSide>,
    pub vertical_wall: Option<WallSide>,
    pub paddle_hit: bool,
    pub destroyed_block: Option<ShapeId>,
}

/// Resolve one tick's collisions against the pre-move ball position.
///
/// All three checks run every tick, in order: walls, paddle, blocks.
/// - The two wall axes are independent, so a corner flips both components.
/// - A paddle hit flips `vel.y` and forces `vel.x` away from the paddle
///   center; it runs after the wall check and wins ties on the x sign.
/// - At most one block is destroyed per tick: the first live one, in
///   creation order, whose rect overlaps the ball box.
pub fn resolve(
    ball: &mut Ball,
    paddle: &Paddle,
    blocks: &mut BlockField,
    config: &ArenaConfig,
) -> CollisionOutcome {
    let center = ball.pos;
    let mut outcome = CollisionOutcome::default();

    outcome.horizontal_wall = horizontal_wall_hit(center, ball.radius, config);
    if outcome.horizontal_wall.is_some() {
        ball.vel.x = -ball.vel.x;
    }
    outcome.vertical_wall = vertical_wall_hit(center, ball.radius, config);
    if outcome.vertical_wall.is_some() {
        ball.vel.y = -ball.vel.y;
    }

    outcome.paddle_hit = circle_overlaps_rect(center, ball.radius, &paddle.rect);
    if outcome.paddle_hit {
        ball.vel.y = -ball.vel.y;
        // Deflect away from the paddle center, whatever the incoming sign
        if center.x < paddle.rect.center().x {
            ball.vel.x = -ball.vel.x.abs();
        } else {
            ball.vel.x = ball.vel.x.abs();
        }
    }

    outcome.destroyed_block = blocks
        .iter_live()
        .find(|block| circle_overlaps_rect(center, ball.radius, &block.rect))
        .map(|block| block.id);
    if let Some(id) = outcome.destroyed_block {
        blocks.remove_by_id(id);
        ball.vel.y = -ball.vel.y;
    }

    outcome
}
