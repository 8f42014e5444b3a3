//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules and state transitions for the
//! falling-word typing game. It has **zero dependencies** on UI, terminal
//! or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical word streams
//! - **Testable**: Every rule is a pure function over plain values
//! - **Portable**: Anything implementing [`Scene`] can draw it
//!
//! # Module Structure
//!
//! - [`word`]: a single falling word and its inactive/active rules
//! - [`rng`]: seeded LCG and the random word generator
//! - [`collection`]: the ordered word list (activation, reduction, movement)
//! - [`game_state`]: tick and keystroke transitions, game over
//! - [`scene`]: the rendering seam
//!
//! # Game Rules
//!
//! - Every tick spawns one inactive word at the top, drops finished words
//!   and moves everything down one step.
//! - Typing a letter with no active word activates the oldest word starting
//!   with that letter and consumes its first letter at once.
//! - While a word is active, letters only consume it; other words wait.
//! - If any word has reached the bottom threshold when a tick arrives, the
//!   game is over.
//!
//! # Example
//!
//! ```
//! use tui_ztype_core::{GameState, Word, WordCollection};
//! use tui_ztype_types::GameConfig;
//!
//! let state = GameState::new(12345, GameConfig::default())
//!     .with_words(WordCollection::from_words([Word::inactive("rust", 100, 40)]));
//!
//! let state = state.on_key("r");
//! assert_eq!(state.words().words()[0], Word::active("ust", 100, 40));
//!
//! let state = state.on_tick();
//! assert_eq!(state.words().len(), 2);
//! ```

pub mod collection;
pub mod game_state;
pub mod rng;
pub mod scene;
pub mod word;

pub use tui_ztype_types as types;

// Re-export commonly used types for convenience
pub use collection::WordCollection;
pub use game_state::{initial_state, on_key, on_tick, render, GameState, Status};
pub use rng::{SimpleRng, WordGenerator};
pub use scene::{DrawCommand, Scene};
pub use word::Word;
