//! TUI ZType (workspace facade crate).
//!
//! Exposes `tui_ztype::{core,input,term,types}` while the implementation lives
//! in dedicated crates under `crates/`.

pub use tui_ztype_core as core;
pub use tui_ztype_input as input;
pub use tui_ztype_term as term;
pub use tui_ztype_types as types;
