//! Fixed-cadence simulation tick
//!
//! One call advances the game by one step: resolve collisions against the
//! pre-move position, check for a loss, move the ball, check for a win.
//! The host owns the timer; it re-arms it only while the phase is still
//! [`GamePhase::Playing`], and applies the returned render intents itself.

use glam::Vec2;

use super::collision::resolve;
use super::state::{GamePhase, GameState};
use crate::consts::{BANNER_FONT_PX, MARGIN};
use crate::renderer::{RenderIntent, TextStyle};
use crate::Color;

/// Advance the game by one tick, appending render intents to `out`.
///
/// Calling this in a terminal phase is a no-op, so a stray timer callback
/// that fires after the game ended changes nothing.
pub fn tick(state: &mut GameState, out: &mut Vec<RenderIntent>) {
    if state.phase.is_terminal() {
        return;
    }

    let outcome = resolve(
        &mut state.ball,
        &state.paddle,
        &mut state.blocks,
        &state.config,
    );
    if let Some(id) = outcome.destroyed_block {
        log::debug!(
            "block {:?} destroyed, {} remaining",
            id,
            state.blocks.live_count()
        );
        out.push(RenderIntent::DeleteShape { id });
    }

    // Loss is decided on the pre-move position: once the ball's bottom edge
    // reaches the baseline, this tick's move never happens
    if state.ball.pos.y + state.ball.radius >= state.config.height - MARGIN {
        state.phase = GamePhase::Lost;
        log::info!("ball crossed the baseline, game over");
        out.push(banner(state, "Game Over", Color::RED));
        return;
    }

    state.ball.pos += state.ball.vel;
    out.push(RenderIntent::MoveShape {
        id: state.ball_id(),
        delta: state.ball.vel,
    });

    if state.blocks.is_empty() {
        state.phase = GamePhase::Won;
        log::info!("block field cleared, you win");
        out.push(banner(state, "You Win!", Color::GREEN));
    }
}

/// Centered end-of-game message, created exactly once per game because
/// every later tick returns before reaching a terminal transition again
fn banner(state: &mut GameState, text: &str, color: Color) -> RenderIntent {
    RenderIntent::CreateText {
        id: state.next_shape_id(),
        pos: Vec2::new(state.config.width / 2.0, state.config.height / 2.0),
        text: text.to_string(),
        style: TextStyle {
            color,
            font_px: BANNER_FONT_PX,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::state::ArenaConfig;

    fn playing_state() -> GameState {
        GameState::new(ArenaConfig::default())
    }

    fn run_tick(state: &mut GameState) -> Vec<RenderIntent> {
        let mut out = Vec::new();
        tick(state, &mut out);
        out
    }

    #[test]
    fn test_wall_reflection_flips_one_axis() {
        let mut state = playing_state();
        // At the left margin moving left, far from paddle and blocks
        state.ball.pos = Vec2::new(29.0, 400.0);
        state.ball.vel = Vec2::new(-BALL_SPEED, BALL_SPEED);

        run_tick(&mut state);

        assert_eq!(state.ball.vel, Vec2::new(BALL_SPEED, BALL_SPEED));
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_corner_reflection_flips_both_axes() {
        let mut state = playing_state();
        // Top-right corner, above the block rows (no block reaches x > 770)
        state.ball.pos = Vec2::new(772.0, 19.0);
        state.ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);

        run_tick(&mut state);

        assert_eq!(state.ball.vel, Vec2::new(-BALL_SPEED, BALL_SPEED));
    }

    #[test]
    fn test_paddle_redirects_away_from_center() {
        let mut state = playing_state();
        // Overlapping the paddle's left half, incoming rightward
        state.ball.pos = Vec2::new(40.0, 745.0);
        state.ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);

        run_tick(&mut state);

        assert!(state.ball.vel.x < 0.0, "deflected leftward");
        assert!(state.ball.vel.y < 0.0, "bounced upward");
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_block_hit_emits_delete_intent() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(60.0, 80.0);
        state.ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);
        let before = state.blocks.live_count();

        let out = run_tick(&mut state);

        assert_eq!(state.blocks.live_count(), before - 1);
        assert!(
            out.iter()
                .any(|i| matches!(i, RenderIntent::DeleteShape { .. }))
        );
        // The ball still moves on a block tick
        assert!(
            out.iter()
                .any(|i| matches!(i, RenderIntent::MoveShape { .. }))
        );
    }

    #[test]
    fn test_win_freezes_the_ball() {
        let mut state = playing_state();
        // Leave a single live block and park the ball on it
        let survivor = state.blocks.iter_live().next().unwrap().id;
        let rest: Vec<_> = state
            .blocks
            .iter_live()
            .skip(1)
            .map(|b| b.id)
            .collect();
        for id in rest {
            state.blocks.remove_by_id(id);
        }
        state.ball.pos = Vec2::new(60.0, 80.0);
        state.ball.vel = Vec2::new(BALL_SPEED, -BALL_SPEED);

        let out = run_tick(&mut state);

        assert!(!state.blocks.remove_by_id(survivor), "block already gone");
        assert_eq!(state.phase, GamePhase::Won);
        assert!(out.iter().any(|i| matches!(
            i,
            RenderIntent::CreateText { text, .. } if text == "You Win!"
        )));

        // Further ticks are no-ops: position frozen, nothing emitted
        let frozen = state.ball.pos;
        for _ in 0..3 {
            let out = run_tick(&mut state);
            assert!(out.is_empty());
            assert_eq!(state.ball.pos, frozen);
        }
    }

    #[test]
    fn test_loss_preempts_the_move() {
        let mut state = playing_state();
        state.ball.pos = Vec2::new(400.0, 771.0);
        state.ball.vel = Vec2::new(BALL_SPEED, BALL_SPEED);
        let pre_move = state.ball.pos;

        let out = run_tick(&mut state);

        assert_eq!(state.phase, GamePhase::Lost);
        assert_eq!(state.ball.pos, pre_move, "loss is decided before the move");
        assert!(
            !out.iter()
                .any(|i| matches!(i, RenderIntent::MoveShape { .. }))
        );
        assert!(out.iter().any(|i| matches!(
            i,
            RenderIntent::CreateText { text, .. } if text == "Game Over"
        )));

        // A stray scheduled callback after the loss changes nothing
        let out = run_tick(&mut state);
        assert!(out.is_empty());
        assert_eq!(state.phase, GamePhase::Lost);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing_state();
        let mut b = playing_state();

        for _ in 0..500 {
            a.aim_paddle(a.ball.pos.x);
            b.aim_paddle(b.ball.pos.x);
            run_tick(&mut a);
            run_tick(&mut b);
        }

        assert_eq!(a, b);
        // Snapshots agree too, byte for byte
        let snap_a = serde_json::to_string(&a).unwrap();
        let snap_b = serde_json::to_string(&b).unwrap();
        assert_eq!(snap_a, snap_b);
    }
}
