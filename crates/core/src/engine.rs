//! Engine module - exhaustive minimax search and move selection
//!
//! The computer opponent scores every reachable continuation and picks the
//! move with the best guaranteed outcome. The board is small enough (at most
//! 9! leaf positions from an empty board) that exhaustive search without
//! pruning or memoization finishes in well under a millisecond, so the
//! implementation favors simplicity over search optimizations.
//!
//! Probing is done in place: the search places a mark, recurses, and undoes
//! the placement before returning. The caller's board is bit-for-bit
//! unchanged after any query.
//!
//! Two deliberate, order-dependent behaviors are part of the engine contract
//! and must not be "fixed":
//!
//! - [`evaluate`] checks the computer's win before the opponent's, so an
//!   illegal double-win board scores `WIN_SCORE`
//! - move selection keeps the first candidate under a strict `>` comparison,
//!   so equal-score moves resolve to the lowest cell index
//!
//! Scores carry no depth bias: a win in one ply and a win in five ply both
//! score `WIN_SCORE`. Every line fills by depth 9, so the engine never trades
//! a certain win for a faster one that does not exist.

use crate::board::Board;
use tui_tictactoe_types::{Mark, CELL_COUNT, DRAW_SCORE, LOSS_SCORE, WIN_SCORE};

/// Contract violation by the caller of [`computer_move`] or [`best_move`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EngineError {
    /// Move selection was invoked with no empty cell left
    BoardFull,
}

impl EngineError {
    pub fn code(self) -> &'static str {
        match self {
            EngineError::BoardFull => "board_full",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            EngineError::BoardFull => "no empty cell to place the computer mark",
        }
    }
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for EngineError {}

/// Score a position from the computer's point of view
///
/// Returns [`WIN_SCORE`] if `bot_mark` occupies a full line, [`LOSS_SCORE`]
/// if its opponent does, else [`DRAW_SCORE`]. Legal alternating play can
/// never produce a board where both marks have a line; if handed one anyway,
/// the computer-win check runs first and wins the tie.
pub fn evaluate(board: &Board, bot_mark: Mark) -> i32 {
    if board.has_won(bot_mark) {
        return WIN_SCORE;
    }
    if board.has_won(bot_mark.opponent()) {
        return LOSS_SCORE;
    }
    DRAW_SCORE
}

/// Exhaustive minimax over every continuation of `board`
///
/// `maximizing` says which side places the next mark: the computer
/// (`bot_mark`) when true, its opponent when false. The board is mutated
/// during the search and restored before returning.
///
/// Terminal positions: a decided board returns its [`evaluate`] score, a full
/// undecided board returns [`DRAW_SCORE`]. Otherwise the result folds the
/// child scores with `max` (computer to move) or `min` (opponent to move).
/// Recursion depth is bounded at 9 by board fullness, so the search always
/// terminates.
pub fn minimax(board: &mut Board, depth: u32, maximizing: bool, bot_mark: Mark) -> i32 {
    let score = evaluate(board, bot_mark);
    if score != DRAW_SCORE {
        return score;
    }
    if board.is_full() {
        return DRAW_SCORE;
    }

    // At least one cell is empty here, so the fold always sees a child.
    let mark = if maximizing {
        bot_mark
    } else {
        bot_mark.opponent()
    };

    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for idx in 0..CELL_COUNT {
        if !board.is_empty_cell(idx) {
            continue;
        }

        board.set(idx, Some(mark));
        let child = minimax(board, depth + 1, !maximizing, bot_mark);
        board.set(idx, None);

        best = if maximizing {
            best.max(child)
        } else {
            best.min(child)
        };
    }
    best
}

/// Pick the computer's best cell without placing anything
///
/// Probes every empty cell in ascending index order: tentatively place
/// `bot_mark`, score the opponent's best reply tree (`maximizing = false`,
/// since the tentative placement consumed the computer's turn), undo. A
/// candidate replaces the running best only under strict `>`, so ties keep
/// the lowest index. The board is unchanged on return.
pub fn best_move(board: &mut Board, bot_mark: Mark) -> Result<usize, EngineError> {
    let candidates = board.empty_cells();
    let mut best: Option<usize> = None;
    let mut best_score = i32::MIN;

    for idx in candidates {
        board.set(idx, Some(bot_mark));
        let score = minimax(board, 0, false, bot_mark);
        board.set(idx, None);

        if score > best_score {
            best_score = score;
            best = Some(idx);
        }
    }

    best.ok_or(EngineError::BoardFull)
}

/// Select and permanently place the computer's move
///
/// Returns the chosen cell index. Fails with [`EngineError::BoardFull`] when
/// called on a full board; callers are expected to check `is_full` (or the
/// game status) first.
pub fn computer_move(board: &mut Board, bot_mark: Mark) -> Result<usize, EngineError> {
    let idx = best_move(board, bot_mark)?;
    board.set(idx, Some(bot_mark));
    Ok(idx)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tui_tictactoe_types::COMPUTER_MARK;

    #[test]
    fn evaluate_scores_decided_boards() {
        let bot_line = Board::from_str("OOO..X.X.").unwrap();
        assert_eq!(evaluate(&bot_line, COMPUTER_MARK), WIN_SCORE);

        let human_line = Board::from_str("XXX..O.O.").unwrap();
        assert_eq!(evaluate(&human_line, COMPUTER_MARK), LOSS_SCORE);

        let open = Board::from_str("XO.......").unwrap();
        assert_eq!(evaluate(&open, COMPUTER_MARK), DRAW_SCORE);
    }

    #[test]
    fn evaluate_prefers_bot_win_on_illegal_double_win() {
        // Not reachable through legal play; the computer-win check comes
        // first and takes precedence.
        let board = Board::from_str("OOOXXX...").unwrap();
        assert_eq!(evaluate(&board, COMPUTER_MARK), WIN_SCORE);
    }

    #[test]
    fn minimax_sees_a_forced_win_in_one() {
        let mut board = Board::from_str("OO.XX....").unwrap();
        // Computer to move: placing at 2 wins immediately.
        assert_eq!(minimax(&mut board, 0, true, COMPUTER_MARK), WIN_SCORE);
    }

    #[test]
    fn minimax_restores_the_board() {
        let board = Board::from_str("X...O...X").unwrap();
        let mut probe = board;
        minimax(&mut probe, 0, true, COMPUTER_MARK);
        assert_eq!(probe, board);
    }

    #[test]
    fn best_move_takes_the_immediate_win() {
        let mut board = Board::from_str("OO.XX....").unwrap();
        assert_eq!(best_move(&mut board, COMPUTER_MARK), Ok(2));
        // Selection alone must not place anything.
        assert_eq!(board, Board::from_str("OO.XX....").unwrap());
    }

    #[test]
    fn computer_move_rejects_a_full_board() {
        let mut board = Board::from_str("XOXXOOOXX").unwrap();
        assert_eq!(
            computer_move(&mut board, COMPUTER_MARK),
            Err(EngineError::BoardFull)
        );
    }

    #[test]
    fn engine_error_code_and_message() {
        let err = EngineError::BoardFull;
        assert_eq!(err.code(), "board_full");
        assert!(err.to_string().contains("no empty cell"));
    }
}
