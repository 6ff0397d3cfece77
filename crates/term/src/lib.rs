//! Terminal presentation module.
//!
//! Two layers, split so the interesting one stays testable:
//!
//! - [`board_view`] is pure (no I/O): it formats a board into text lines
//! - [`console`] owns stdout: styled printing, prompts, and single-key reads
//!
//! The game core never touches this module; it receives a board and hands
//! back a verdict or a move, and everything the player sees goes through
//! here.

pub mod board_view;
pub mod console;

pub use tui_tictactoe_core as core;
pub use tui_tictactoe_types as types;

pub use board_view::render_lines;
pub use console::Console;
