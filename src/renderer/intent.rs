//! Shape operations emitted by the simulation
//!
//! The vocabulary is deliberately small: create, move, re-coordinate, and
//! delete retained shapes. A backend applies them in order; the simulation
//! never holds a backend handle.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::sim::Rect;
use crate::Color;

/// Opaque handle for a retained shape, allocated by the engine
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub struct ShapeId(pub u32);

/// Style for text shapes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextStyle {
    pub color: Color,
    pub font_px: u32,
}

/// One retained-scene mutation for a [`super::Renderer`] to apply
#[derive(Debug, Clone, PartialEq)]
pub enum RenderIntent {
    /// New filled rectangle
    CreateRect { id: ShapeId, rect: Rect, color: Color },
    /// New filled ellipse inscribed in `bounds`
    CreateEllipse {
        id: ShapeId,
        bounds: Rect,
        color: Color,
    },
    /// New text run centered on `pos`
    CreateText {
        id: ShapeId,
        pos: Vec2,
        text: String,
        style: TextStyle,
    },
    /// Shift an existing shape by `delta`
    MoveShape { id: ShapeId, delta: Vec2 },
    /// Replace an existing shape's coordinates outright
    SetShapeCoords { id: ShapeId, rect: Rect },
    /// Remove a shape from the scene
    DeleteShape { id: ShapeId },
}
