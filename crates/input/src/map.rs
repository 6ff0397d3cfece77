//! Key mapping from terminal events to game actions.
//!
//! Every interaction in the game is a single key press: menu entries are
//! 1-3, cells are 1-9 (mapped to board indices 0-8), and `q` quits from
//! anywhere. Unmapped keys return `None` so callers can re-prompt.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_tictactoe_types::MenuChoice;

/// Map keyboard input to a main-menu choice.
pub fn map_menu_key(key: KeyEvent) -> Option<MenuChoice> {
    match key.code {
        KeyCode::Char('1') => Some(MenuChoice::TwoPlayer),
        KeyCode::Char('2') => Some(MenuChoice::VsComputer),
        KeyCode::Char('3') => Some(MenuChoice::Quit),
        _ => None,
    }
}

/// Map keyboard input to a board cell index (keys 1-9 to indices 0-8).
pub fn map_cell_key(key: KeyEvent) -> Option<usize> {
    match key.code {
        KeyCode::Char(c @ '1'..='9') => Some(c as usize - '1' as usize),
        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q'))
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
