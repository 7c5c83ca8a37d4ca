//! Canvas2D backend for the browser
//!
//! Canvas2D is immediate-mode, so this backend keeps a [`ShapeScene`] and
//! redraws the whole scene after every mutation. At this scene size (two
//! dozen shapes) a full redraw per tick is far below one frame of work.

use std::f64::consts::TAU;

use glam::Vec2;
use wasm_bindgen::JsCast;
use wasm_bindgen::JsValue;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use super::intent::{RenderIntent, ShapeId, TextStyle};
use super::shapes::{Shape, ShapeScene};
use super::traits::Renderer;
use crate::sim::Rect;
use crate::Color;

pub struct CanvasRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    scene: ShapeScene,
}

impl CanvasRenderer {
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("canvas has no 2d context"))?
            .dyn_into::<CanvasRenderingContext2d>()?;
        Ok(Self {
            canvas,
            ctx,
            scene: ShapeScene::default(),
        })
    }

    pub fn scene(&self) -> &ShapeScene {
        &self.scene
    }

    /// Clear the canvas and draw every retained shape in id order
    pub fn redraw(&self) {
        let w = self.canvas.width() as f64;
        let h = self.canvas.height() as f64;
        self.ctx.clear_rect(0.0, 0.0, w, h);

        for (_, shape) in self.scene.iter() {
            match shape {
                Shape::Rect { rect, color } => {
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.fill_rect(
                        rect.min.x as f64,
                        rect.min.y as f64,
                        rect.width() as f64,
                        rect.height() as f64,
                    );
                }
                Shape::Ellipse { bounds, color } => {
                    let center = bounds.center();
                    self.ctx.set_fill_style_str(&color.css());
                    self.ctx.begin_path();
                    let _ = self.ctx.ellipse(
                        center.x as f64,
                        center.y as f64,
                        (bounds.width() / 2.0) as f64,
                        (bounds.height() / 2.0) as f64,
                        0.0,
                        0.0,
                        TAU,
                    );
                    self.ctx.fill();
                }
                Shape::Text { pos, text, style } => {
                    self.ctx.set_fill_style_str(&style.color.css());
                    self.ctx.set_font(&format!("{}px sans-serif", style.font_px));
                    self.ctx.set_text_align("center");
                    self.ctx.set_text_baseline("middle");
                    let _ = self.ctx.fill_text(text, pos.x as f64, pos.y as f64);
                }
            }
        }
    }
}

impl Renderer for CanvasRenderer {
    fn create_rect(&mut self, id: ShapeId, rect: Rect, color: Color) {
        self.scene.create_rect(id, rect, color);
        self.redraw();
    }

    fn create_ellipse(&mut self, id: ShapeId, bounds: Rect, color: Color) {
        self.scene.create_ellipse(id, bounds, color);
        self.redraw();
    }

    fn create_text(&mut self, id: ShapeId, pos: Vec2, text: &str, style: TextStyle) {
        self.scene.create_text(id, pos, text, style);
        self.redraw();
    }

    fn move_shape(&mut self, id: ShapeId, delta: Vec2) {
        self.scene.move_shape(id, delta);
        self.redraw();
    }

    fn set_shape_coords(&mut self, id: ShapeId, rect: Rect) {
        self.scene.set_shape_coords(id, rect);
        self.redraw();
    }

    fn delete_shape(&mut self, id: ShapeId) {
        self.scene.delete_shape(id);
        self.redraw();
    }

    /// Batch application redraws once at the end instead of per intent
    fn apply_all(&mut self, intents: &[RenderIntent]) {
        self.scene.apply_all(intents);
        self.redraw();
    }
}
