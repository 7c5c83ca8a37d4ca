//! Retained shape scene
//!
//! Keeps every live shape keyed by id, in id order, which doubles as draw
//! order. [`ShapeScene`] implements [`Renderer`] directly, which makes it
//! the headless backend for tests and the native demo; the canvas backend
//! wraps one and redraws from it.

use std::collections::BTreeMap;

use glam::Vec2;

use super::intent::{ShapeId, TextStyle};
use super::traits::Renderer;
use crate::sim::Rect;
use crate::Color;

/// A retained shape, positioned in arena coordinates
#[derive(Debug, Clone, PartialEq)]
pub enum Shape {
    Rect { rect: Rect, color: Color },
    Ellipse { bounds: Rect, color: Color },
    Text {
        pos: Vec2,
        text: String,
        style: TextStyle,
    },
}

/// Shape store keyed by id; unknown ids are ignored rather than reported,
/// matching the total-function contract of the rest of the core
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ShapeScene {
    shapes: BTreeMap<ShapeId, Shape>,
}

impl ShapeScene {
    pub fn shape(&self, id: ShapeId) -> Option<&Shape> {
        self.shapes.get(&id)
    }

    pub fn len(&self) -> usize {
        self.shapes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Shapes in id order, which is creation order
    pub fn iter(&self) -> impl Iterator<Item = (ShapeId, &Shape)> {
        self.shapes.iter().map(|(id, shape)| (*id, shape))
    }
}

impl Renderer for ShapeScene {
    fn create_rect(&mut self, id: ShapeId, rect: Rect, color: Color) {
        self.shapes.insert(id, Shape::Rect { rect, color });
    }

    fn create_ellipse(&mut self, id: ShapeId, bounds: Rect, color: Color) {
        self.shapes.insert(id, Shape::Ellipse { bounds, color });
    }

    fn create_text(&mut self, id: ShapeId, pos: Vec2, text: &str, style: TextStyle) {
        self.shapes.insert(
            id,
            Shape::Text {
                pos,
                text: text.to_string(),
                style,
            },
        );
    }

    fn move_shape(&mut self, id: ShapeId, delta: Vec2) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            match shape {
                Shape::Rect { rect, .. } => *rect = rect.translated(delta),
                Shape::Ellipse { bounds, .. } => *bounds = bounds.translated(delta),
                Shape::Text { pos, .. } => *pos += delta,
            }
        }
    }

    fn set_shape_coords(&mut self, id: ShapeId, new_rect: Rect) {
        if let Some(shape) = self.shapes.get_mut(&id) {
            match shape {
                Shape::Rect { rect, .. } => *rect = new_rect,
                Shape::Ellipse { bounds, .. } => *bounds = new_rect,
                Shape::Text { pos, .. } => *pos = new_rect.center(),
            }
        }
    }

    fn delete_shape(&mut self, id: ShapeId) {
        self.shapes.remove(&id);
    }
}
