//! Axis-aligned rectangle geometry for the paddle, blocks, and arena
//!
//! A rectangle is stored as its min (top-left) and max (bottom-right)
//! corners in screen coordinates, y growing downward.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle, min strictly above-left of max
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        debug_assert!(x1 < x2 && y1 < y2, "degenerate rect {x1},{y1},{x2},{y2}");
        Self {
            min: Vec2::new(x1, y1),
            max: Vec2::new(x2, y2),
        }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin.x, origin.y, origin.x + size.x, origin.y + size.y)
    }

    #[inline]
    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    #[inline]
    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }

    /// Geometric center of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// The same rectangle shifted by `delta`
    pub fn translated(&self, delta: Vec2) -> Self {
        Self {
            min: self.min + delta,
            max: self.max + delta,
        }
    }

    /// Check if a point is inside the rectangle (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_dimensions() {
        let rect = Rect::new(10.0, 20.0, 110.0, 50.0);
        assert_eq!(rect.width(), 100.0);
        assert_eq!(rect.height(), 30.0);
        assert_eq!(rect.center(), Vec2::new(60.0, 35.0));
    }

    #[test]
    fn test_rect_translated() {
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        let moved = rect.translated(Vec2::new(5.0, -2.0));
        assert_eq!(moved.min, Vec2::new(5.0, -2.0));
        assert_eq!(moved.max, Vec2::new(15.0, 8.0));
        // width preserved
        assert_eq!(moved.width(), rect.width());
    }

    #[test]
    fn test_rect_contains_point() {
        let rect = Rect::new(10.0, 10.0, 20.0, 20.0);
        assert!(rect.contains_point(Vec2::new(15.0, 15.0)));
        assert!(rect.contains_point(Vec2::new(10.0, 10.0)));
        assert!(!rect.contains_point(Vec2::new(9.9, 15.0)));
        assert!(!rect.contains_point(Vec2::new(15.0, 20.1)));
    }

    #[test]
    fn test_from_origin_size() {
        let rect = Rect::from_origin_size(Vec2::new(10.0, 40.0), Vec2::new(100.0, 30.0));
        assert_eq!(rect, Rect::new(10.0, 40.0, 110.0, 70.0));
    }
}
