//! Game state and core simulation types
//!
//! Everything the engine mutates lives here, owned by a single [`GameState`].
//! No sharing, no back-references: the host holds the `GameState`, feeds it
//! pointer positions and ticks, and applies the render intents it gets back.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::rect::Rect;
use crate::consts::*;
use crate::renderer::{RenderIntent, ShapeId};
use crate::Color;

/// Current phase of gameplay
///
/// `Playing` is the initial phase; `Won` and `Lost` are terminal. Once a
/// terminal phase is reached no entity mutates again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Active gameplay, ticks keep coming
    Playing,
    /// Block field cleared
    Won,
    /// Ball crossed the paddle's baseline
    Lost,
}

impl GamePhase {
    #[inline]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, GamePhase::Playing)
    }
}

/// Playable-area dimensions, passed in at construction and changed only
/// through [`GameState::resize`]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f32,
    pub height: f32,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: ARENA_WIDTH,
            height: ARENA_HEIGHT,
        }
    }
}

/// The ball: a circle moving one velocity step per tick
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
    /// Immutable after construction
    pub radius: f32,
}

impl Ball {
    /// Ball at the arena center, serving toward the bottom-right
    pub fn centered(config: &ArenaConfig) -> Self {
        Self {
            pos: Vec2::new(config.width / 2.0, config.height / 2.0),
            vel: Vec2::splat(BALL_SPEED),
            radius: BALL_RADIUS,
        }
    }

    /// Bounding box of the circle, used both for collision checks and as
    /// the ellipse bounds handed to the renderer
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.pos.x - self.radius,
            self.pos.y - self.radius,
            self.pos.x + self.radius,
            self.pos.y + self.radius,
        )
    }
}

/// The player's paddle, pinned to the bottom margin
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Paddle {
    pub rect: Rect,
}

impl Paddle {
    /// Paddle resting against the left margin, as at game start
    pub fn new(config: &ArenaConfig) -> Self {
        let y1 = config.height - MARGIN - PADDLE_HEIGHT;
        Self {
            rect: Rect::new(MARGIN, y1, MARGIN + PADDLE_WIDTH, y1 + PADDLE_HEIGHT),
        }
    }

    /// Center the paddle under `pointer_x`, clamped so it never leaves the
    /// margins. Total for any finite input; out-of-surface coordinates clamp.
    pub fn recenter(&mut self, pointer_x: f32, config: &ArenaConfig) {
        let x1 = (pointer_x - PADDLE_WIDTH / 2.0)
            .clamp(MARGIN, config.width - MARGIN - PADDLE_WIDTH);
        self.rect = Rect::new(x1, self.rect.min.y, x1 + PADDLE_WIDTH, self.rect.max.y);
    }

    /// Re-pin the y-span to the bottom margin and re-clamp the x-span,
    /// used after the arena changes size
    pub fn repin(&mut self, config: &ArenaConfig) {
        let y1 = config.height - MARGIN - PADDLE_HEIGHT;
        let x1 = self
            .rect
            .min
            .x
            .clamp(MARGIN, config.width - MARGIN - PADDLE_WIDTH);
        self.rect = Rect::new(x1, y1, x1 + PADDLE_WIDTH, y1 + PADDLE_HEIGHT);
    }
}

/// A breakable block
///
/// Blocks never move or change color; the only mutation is clearing the
/// `alive` flag when the ball removes them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Block {
    /// Opaque handle, also used as the block's shape id
    pub id: ShapeId,
    pub rect: Rect,
    pub color: Color,
    pub alive: bool,
}

/// The field of breakable blocks, insertion order = creation order
///
/// Removal clears the alive flag instead of rebuilding the vector, so block
/// indices stay stable and iteration order never changes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BlockField {
    blocks: Vec<Block>,
}

impl BlockField {
    pub fn push(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Mark the block with `id` as removed. Returns false if no live block
    /// has that id.
    pub fn remove_by_id(&mut self, id: ShapeId) -> bool {
        match self.blocks.iter_mut().find(|b| b.alive && b.id == id) {
            Some(block) => {
                block.alive = false;
                true
            }
            None => false,
        }
    }

    /// True iff no live blocks remain (the win condition)
    pub fn is_empty(&self) -> bool {
        !self.blocks.iter().any(|b| b.alive)
    }

    pub fn live_count(&self) -> usize {
        self.blocks.iter().filter(|b| b.alive).count()
    }

    /// Live blocks in creation order
    pub fn iter_live(&self) -> impl Iterator<Item = &Block> {
        self.blocks.iter().filter(|b| b.alive)
    }
}

/// Complete game state (deterministic, serializable)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameState {
    pub config: ArenaConfig,
    pub phase: GamePhase,
    pub ball: Ball,
    pub paddle: Paddle,
    pub blocks: BlockField,
    paddle_id: ShapeId,
    ball_id: ShapeId,
    /// Next shape id
    next_id: u32,
}

impl GameState {
    /// Create a fresh game: ball at the center, paddle bottom-left, three
    /// rows of blocks under the top margin
    pub fn new(config: ArenaConfig) -> Self {
        let mut state = Self {
            ball: Ball::centered(&config),
            paddle: Paddle::new(&config),
            blocks: BlockField::default(),
            phase: GamePhase::Playing,
            config,
            paddle_id: ShapeId(0),
            ball_id: ShapeId(0),
            next_id: 1,
        };

        state.paddle_id = state.next_shape_id();
        state.ball_id = state.next_shape_id();
        state.spawn_block_rows();
        state
    }

    /// Allocate a new shape id
    pub fn next_shape_id(&mut self) -> ShapeId {
        let id = ShapeId(self.next_id);
        self.next_id += 1;
        id
    }

    pub fn paddle_id(&self) -> ShapeId {
        self.paddle_id
    }

    pub fn ball_id(&self) -> ShapeId {
        self.ball_id
    }

    fn spawn_block_rows(&mut self) {
        for row in 0..BLOCK_ROWS {
            let y = MARGIN + BLOCK_TOP_OFFSET + row as f32 * (BLOCK_HEIGHT + BLOCK_GAP);
            for i in 0..BLOCKS_PER_ROW {
                let x = MARGIN + i as f32 * (BLOCK_WIDTH + BLOCK_GAP);
                let block = Block {
                    id: self.next_shape_id(),
                    rect: Rect::new(x, y, x + BLOCK_WIDTH, y + BLOCK_HEIGHT),
                    color: Color::row_gradient(i, BLOCKS_PER_ROW),
                    alive: true,
                };
                self.blocks.push(block);
            }
        }
    }

    /// Shape operations that build the starting scene, in creation order:
    /// paddle, ball, then the block rows
    pub fn initial_scene(&self) -> Vec<RenderIntent> {
        let mut scene = Vec::with_capacity(2 + self.blocks.live_count());
        scene.push(RenderIntent::CreateRect {
            id: self.paddle_id,
            rect: self.paddle.rect,
            color: Color::BLUE,
        });
        scene.push(RenderIntent::CreateEllipse {
            id: self.ball_id,
            bounds: self.ball.bounds(),
            color: Color::BLACK,
        });
        for block in self.blocks.iter_live() {
            scene.push(RenderIntent::CreateRect {
                id: block.id,
                rect: block.rect,
                color: block.color,
            });
        }
        scene
    }

    /// Pointer-motion handler: center the paddle under the pointer
    ///
    /// Event-driven and independent of the tick; the next tick sees
    /// whatever the last pointer event left here. In a terminal phase the
    /// paddle no longer moves and the returned intent restates its current
    /// coordinates.
    pub fn aim_paddle(&mut self, pointer_x: f32) -> RenderIntent {
        if !self.phase.is_terminal() {
            self.paddle.recenter(pointer_x, &self.config);
        }
        RenderIntent::SetShapeCoords {
            id: self.paddle_id,
            rect: self.paddle.rect,
        }
    }

    /// Adopt new arena dimensions, re-clamping the paddle and ball into the
    /// new bounds. Never fails; returns the intents that reposition both.
    pub fn resize(&mut self, width: f32, height: f32) -> Vec<RenderIntent> {
        log::debug!("arena resized to {width}x{height}");
        self.config.width = width;
        self.config.height = height;

        self.paddle.repin(&self.config);

        let r = self.ball.radius;
        self.ball.pos = self.ball.pos.clamp(
            Vec2::splat(MARGIN + r),
            Vec2::new(width - MARGIN - r, height - MARGIN - r),
        );

        vec![
            RenderIntent::SetShapeCoords {
                id: self.paddle_id,
                rect: self.paddle.rect,
            },
            RenderIntent::SetShapeCoords {
                id: self.ball_id,
                rect: self.ball.bounds(),
            },
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_new_game_layout() {
        let state = GameState::new(ArenaConfig::default());

        assert_eq!(state.phase, GamePhase::Playing);
        assert_eq!(state.blocks.live_count(), BLOCK_ROWS * BLOCKS_PER_ROW);
        assert_eq!(state.ball.pos, Vec2::new(400.0, 400.0));
        assert_eq!(state.ball.vel, Vec2::splat(BALL_SPEED));

        // Paddle rests on the bottom margin, against the left margin
        assert_eq!(state.paddle.rect.min, Vec2::new(10.0, 760.0));
        assert_eq!(state.paddle.rect.max, Vec2::new(110.0, 790.0));

        // First row sits BLOCK_TOP_OFFSET below the top margin
        let first = state.blocks.iter_live().next().unwrap();
        assert_eq!(first.rect.min, Vec2::new(10.0, 40.0));
        assert_eq!(first.color, Color::rgb(255, 0, 0));
    }

    #[test]
    fn test_initial_scene_order() {
        let state = GameState::new(ArenaConfig::default());
        let scene = state.initial_scene();

        assert_eq!(scene.len(), 2 + BLOCK_ROWS * BLOCKS_PER_ROW);
        assert!(matches!(scene[0], RenderIntent::CreateRect { id, .. } if id == state.paddle_id()));
        assert!(
            matches!(scene[1], RenderIntent::CreateEllipse { id, .. } if id == state.ball_id())
        );
    }

    #[test]
    fn test_remove_by_id_is_single_shot() {
        let mut state = GameState::new(ArenaConfig::default());
        let id = state.blocks.iter_live().next().unwrap().id;

        assert!(state.blocks.remove_by_id(id));
        assert_eq!(state.blocks.live_count(), BLOCK_ROWS * BLOCKS_PER_ROW - 1);
        // A dead block cannot be removed again
        assert!(!state.blocks.remove_by_id(id));
        assert!(!state.blocks.is_empty());
    }

    #[test]
    fn test_resize_reclamps_paddle_and_ball() {
        let mut state = GameState::new(ArenaConfig::default());
        state.aim_paddle(800.0);
        assert_eq!(state.paddle.rect.min.x, 690.0);

        let intents = state.resize(400.0, 400.0);
        assert_eq!(intents.len(), 2);

        // Paddle clamped into the narrower arena and re-pinned to the new bottom
        assert_eq!(state.paddle.rect.min.x, 400.0 - MARGIN - PADDLE_WIDTH);
        assert_eq!(state.paddle.rect.max.y, 400.0 - MARGIN);

        // Ball pulled inside the new bounds
        let r = state.ball.radius;
        assert!(state.ball.pos.x <= 400.0 - MARGIN - r);
        assert!(state.ball.pos.y <= 400.0 - MARGIN - r);
    }

    #[test]
    fn test_aim_paddle_frozen_when_terminal() {
        let mut state = GameState::new(ArenaConfig::default());
        state.phase = GamePhase::Lost;
        let before = state.paddle.rect;

        let intent = state.aim_paddle(500.0);
        assert_eq!(state.paddle.rect, before);
        assert!(matches!(intent, RenderIntent::SetShapeCoords { rect, .. } if rect == before));
    }

    proptest! {
        /// Property 7: the paddle never leaves the margins, for any pointer x
        #[test]
        fn paddle_clamp_holds_for_any_pointer(pointer_x in -5000.0f32..5000.0) {
            let config = ArenaConfig::default();
            let mut paddle = Paddle::new(&config);
            paddle.recenter(pointer_x, &config);

            prop_assert!(paddle.rect.min.x >= MARGIN);
            prop_assert!(paddle.rect.min.x <= config.width - MARGIN - PADDLE_WIDTH);
            prop_assert!((paddle.rect.width() - PADDLE_WIDTH).abs() < 1e-3);
            // y-span is untouched by pointer motion
            prop_assert_eq!(paddle.rect.max.y, config.height - MARGIN);
        }
    }
}
