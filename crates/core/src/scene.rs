//! Rendering seam between the core and whatever draws it.
//!
//! The core never knows about pixels or terminal cells. It folds its state
//! onto a [`Scene`], placing centered text at world coordinates.

use crate::types::Ink;

/// A drawing surface that accepts centered text at world coordinates.
///
/// Drawing consumes the scene and hands it back so that rendering reads as a
/// fold over the word collection.
pub trait Scene {
    fn place_text(self, text: &str, x: i32, y: i32, ink: Ink) -> Self;
}

/// One recorded [`Scene::place_text`] call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DrawCommand {
    pub text: String,
    pub x: i32,
    pub y: i32,
    pub ink: Ink,
}

impl DrawCommand {
    pub fn new(text: impl Into<String>, x: i32, y: i32, ink: Ink) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            ink,
        }
    }
}

/// Recording scene: keeps every draw call in order.
impl Scene for Vec<DrawCommand> {
    fn place_text(mut self, text: &str, x: i32, y: i32, ink: Ink) -> Self {
        self.push(DrawCommand::new(text, x, y, ink));
        self
    }
}
