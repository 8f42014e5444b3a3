//! Key mapping from terminal events to game actions.

use crate::types::GameAction;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Map keyboard input to game actions.
///
/// Any printable character becomes [`GameAction::Type`], including upper-case
/// letters, since words are matched case-sensitively. Control and Alt chords
/// are ignored.
pub fn handle_key_event(key: KeyEvent) -> Option<GameAction> {
    if key
        .modifiers
        .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT)
    {
        return None;
    }

    match key.code {
        KeyCode::Char(c) if !c.is_control() => Some(GameAction::Type(c)),
        KeyCode::Enter => Some(GameAction::Restart),
        _ => None,
    }
}

/// Check if key should quit the game.
///
/// Letter keys are game input, so quitting is on Esc or Ctrl-C.
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Esc
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
