//! Word module - a single falling word
//!
//! A word carries its remaining text, its position in world units and its
//! [`WordMode`]. Every operation returns a new value; nothing mutates in place.

use crate::scene::Scene;
use crate::types::{Ink, WordMode};

/// One on-screen word.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Word {
    text: String,
    x: i32,
    y: i32,
    mode: WordMode,
}

impl Word {
    pub fn new(text: impl Into<String>, x: i32, y: i32, mode: WordMode) -> Self {
        Self {
            text: text.into(),
            x,
            y,
            mode,
        }
    }

    /// Create a word nobody is typing yet
    pub fn inactive(text: impl Into<String>, x: i32, y: i32) -> Self {
        Self::new(text, x, y, WordMode::Inactive)
    }

    /// Create a word that is already being typed
    pub fn active(text: impl Into<String>, x: i32, y: i32) -> Self {
        Self::new(text, x, y, WordMode::Active)
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn x(&self) -> i32 {
        self.x
    }

    pub fn y(&self) -> i32 {
        self.y
    }

    pub fn mode(&self) -> WordMode {
        self.mode
    }

    /// True if the first letter of the word is `letter`.
    pub fn matches(&self, letter: char) -> bool {
        self.text.chars().next() == Some(letter)
    }

    /// Drop the first letter of an active word.
    ///
    /// Inactive words come back unchanged.
    pub fn reduce(self) -> Self {
        match self.mode {
            WordMode::Inactive => self,
            WordMode::Active => {
                let mut chars = self.text.chars();
                chars.next();
                Self {
                    text: chars.as_str().to_owned(),
                    ..self
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Fall `step` units toward the bottom.
    pub fn move_down(self, step: i32) -> Self {
        Self {
            y: self.y + step,
            ..self
        }
    }

    /// True once the word has reached `height`.
    pub fn touches_bottom(&self, height: i32) -> bool {
        self.y >= height
    }

    /// Promote to active. Already active words are returned as-is.
    pub fn activate(self) -> Self {
        Self {
            mode: WordMode::Active,
            ..self
        }
    }

    pub fn is_active(&self) -> bool {
        self.mode.is_active()
    }

    /// Draw this word centered at its position.
    pub fn draw<S: Scene>(&self, scene: S) -> S {
        scene.place_text(&self.text, self.x, self.y, Ink::from(self.mode))
    }
}
