//! BoardView: formats a board into terminal text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.
//!
//! The layout shows the live board next to a 1-9 legend so players always
//! see which key places where:
//!
//! ```text
//! *************       *************
//! * X *   * O *       * 1 * 2 * 3 *
//! *************       *************
//! *   * X *   *       * 4 * 5 * 6 *
//! *************       *************
//! *   *   * O *       * 7 * 8 * 9 *
//! *************       *************
//! ```

use tui_tictactoe_core::Board;
use tui_tictactoe_types::BOARD_SIZE;

const BORDER: &str = "*************       *************";

/// Render a board (plus the key legend) into text lines.
///
/// Returns 7 lines: 4 borders interleaved with 3 cell rows.
pub fn render_lines(board: &Board) -> Vec<String> {
    let mut lines = Vec::with_capacity(2 * BOARD_SIZE + 1);
    lines.push(BORDER.to_string());

    for row in 0..BOARD_SIZE {
        let base = row * BOARD_SIZE;
        let cell = |offset: usize| -> char {
            match board.get(base + offset) {
                Some(Some(mark)) => mark.as_char(),
                _ => ' ',
            }
        };

        lines.push(format!(
            "* {} * {} * {} *       * {} * {} * {} *",
            cell(0),
            cell(1),
            cell(2),
            base + 1,
            base + 2,
            base + 3,
        ));
        lines.push(BORDER.to_string());
    }

    lines
}
