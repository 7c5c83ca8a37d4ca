//! Rendering module
//!
//! The simulation talks to rendering through [`RenderIntent`] values and the
//! [`Renderer`] trait; backends retain shapes by id. `ShapeScene` is the
//! headless backend used by tests and the native demo, `CanvasRenderer`
//! draws to a browser canvas.

pub mod intent;
pub mod shapes;
pub mod traits;

#[cfg(target_arch = "wasm32")]
pub mod canvas;

pub use intent::{RenderIntent, ShapeId, TextStyle};
pub use shapes::{Shape, ShapeScene};
pub use traits::Renderer;

#[cfg(target_arch = "wasm32")]
pub use canvas::CanvasRenderer;
