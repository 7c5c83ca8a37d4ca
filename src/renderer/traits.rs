//! Renderer contract consumed by the game's hosts
//!
//! One method per render intent plus provided dispatch helpers, so a
//! backend only implements the shape operations. Backends are expected to
//! tolerate unknown ids: the simulation treats rendering as fire-and-forget
//! and never waits for an answer.

use glam::Vec2;

use super::intent::{RenderIntent, ShapeId, TextStyle};
use crate::sim::Rect;
use crate::Color;

pub trait Renderer {
    fn create_rect(&mut self, id: ShapeId, rect: Rect, color: Color);
    fn create_ellipse(&mut self, id: ShapeId, bounds: Rect, color: Color);
    fn create_text(&mut self, id: ShapeId, pos: Vec2, text: &str, style: TextStyle);
    fn move_shape(&mut self, id: ShapeId, delta: Vec2);
    fn set_shape_coords(&mut self, id: ShapeId, rect: Rect);
    fn delete_shape(&mut self, id: ShapeId);

    /// Apply a single intent by dispatching to the matching method
    fn apply(&mut self, intent: &RenderIntent) {
        match intent {
            RenderIntent::CreateRect { id, rect, color } => self.create_rect(*id, *rect, *color),
            RenderIntent::CreateEllipse { id, bounds, color } => {
                self.create_ellipse(*id, *bounds, *color)
            }
            RenderIntent::CreateText {
                id,
                pos,
                text,
                style,
            } => self.create_text(*id, *pos, text, *style),
            RenderIntent::MoveShape { id, delta } => self.move_shape(*id, *delta),
            RenderIntent::SetShapeCoords { id, rect } => self.set_shape_coords(*id, *rect),
            RenderIntent::DeleteShape { id } => self.delete_shape(*id),
        }
    }

    /// Apply a batch of intents in order
    fn apply_all(&mut self, intents: &[RenderIntent]) {
        for intent in intents {
            self.apply(intent);
        }
    }
}
