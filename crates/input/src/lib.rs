//! Terminal input module (game-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into menu choices and cell indices; reading the
//! events from the terminal is the `term` layer's job.

pub mod map;

pub use tui_tictactoe_types as types;

pub use map::{map_cell_key, map_menu_key, should_quit};
