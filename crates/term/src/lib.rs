//! Terminal "game renderer" module.
//!
//! Renders the typing game into a simple framebuffer that is flushed to a
//! terminal backend, without any widget or layout library.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Project the world canvas onto whatever terminal size is available
//! - Only write changed cells after the first frame

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_ztype_core as core;
pub use tui_ztype_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{ink_style, CellScene, GameView, Projection, Viewport};
pub use renderer::TerminalRenderer;
