//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]s. Letters are
//! passed through untouched; the core decides whether they match anything.

pub mod map;

pub use tui_ztype_types as types;

pub use map::{handle_key_event, should_quit};
