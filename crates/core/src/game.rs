//! Game module - a single round's state machine
//!
//! Ties the board and the engine together: whose turn it is, which mode the
//! round is played in, whether the round is decided. X always moves first,
//! and in [`GameMode::VsComputer`] the human plays X while the computer
//! plays O.

use crate::board::Board;
use crate::engine::{computer_move, EngineError};
use tui_tictactoe_types::{GameMode, GameStatus, Mark, COMPUTER_MARK, HUMAN_MARK};

/// A human move the board cannot accept
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveError {
    /// Cell index past the end of the board
    OutOfBounds { index: usize },
    /// Cell already holds a mark
    CellTaken { index: usize },
    /// The round already has a verdict
    RoundOver,
}

impl MoveError {
    pub fn code(self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "out_of_bounds",
            MoveError::CellTaken { .. } => "cell_taken",
            MoveError::RoundOver => "round_over",
        }
    }

    pub fn message(self) -> &'static str {
        match self {
            MoveError::OutOfBounds { .. } => "cell is outside the board",
            MoveError::CellTaken { .. } => "cell is already taken",
            MoveError::RoundOver => "the round is already over",
        }
    }
}

impl std::fmt::Display for MoveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveError::OutOfBounds { index } | MoveError::CellTaken { index } => {
                write!(f, "{} (cell {})", self.message(), index + 1)
            }
            MoveError::RoundOver => f.write_str(self.message()),
        }
    }
}

impl std::error::Error for MoveError {}

/// State of one round
#[derive(Debug, Clone, Copy)]
pub struct Game {
    board: Board,
    current: Mark,
    mode: GameMode,
}

impl Game {
    /// Start a fresh round; X moves first
    pub fn new(mode: GameMode) -> Self {
        Self {
            board: Board::new(),
            current: Mark::X,
            mode,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    /// The mark that places the next move
    pub fn current_mark(&self) -> Mark {
        self.current
    }

    /// True when the computer owns the current turn
    pub fn is_computer_turn(&self) -> bool {
        self.mode == GameMode::VsComputer && self.current == COMPUTER_MARK
    }

    /// Current verdict, human win checked before computer win
    pub fn status(&self) -> GameStatus {
        if self.board.has_won(HUMAN_MARK) {
            return GameStatus::Won(HUMAN_MARK);
        }
        if self.board.has_won(COMPUTER_MARK) {
            return GameStatus::Won(COMPUTER_MARK);
        }
        if self.board.is_full() {
            return GameStatus::Draw;
        }
        GameStatus::InProgress
    }

    /// Place the current mark at `index` and pass the turn
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if self.status().is_terminal() {
            return Err(MoveError::RoundOver);
        }
        match self.board.get(index) {
            None => return Err(MoveError::OutOfBounds { index }),
            Some(Some(_)) => return Err(MoveError::CellTaken { index }),
            Some(None) => {}
        }

        self.board.set(index, Some(self.current));
        self.current = self.current.opponent();
        Ok(())
    }

    /// Let the engine place the computer's mark and pass the turn
    ///
    /// Returns the chosen cell index. The caller is expected to have checked
    /// that the round is still in progress.
    pub fn play_computer(&mut self) -> Result<usize, EngineError> {
        let idx = computer_move(&mut self.board, COMPUTER_MARK)?;
        self.current = self.current.opponent();
        Ok(idx)
    }

    /// Reset the round for another game in the same mode
    pub fn reset(&mut self) {
        self.board.clear();
        self.current = Mark::X;
    }
}
