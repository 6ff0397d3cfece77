//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making
//! them usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Board Layout
//!
//! The board is a fixed 3x3 grid stored row-major as 9 cells:
//!
//! ```text
//!  0 | 1 | 2
//! ---+---+---
//!  3 | 4 | 5
//! ---+---+---
//!  6 | 7 | 8
//! ```
//!
//! Cell index = `row * 3 + col`. Players see the cells as 1-9; input mapping
//! converts to 0-8.
//!
//! # Examples
//!
//! ```
//! use tui_tictactoe_types::{Mark, CELL_COUNT, WINNING_LINES};
//!
//! assert_eq!(Mark::X.opponent(), Mark::O);
//! assert_eq!(CELL_COUNT, 9);
//! assert_eq!(WINNING_LINES[0], [0, 1, 2]);
//! ```

/// Board side length (3 columns, 3 rows)
pub const BOARD_SIZE: usize = 3;

/// Total number of cells on the board
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// The 8 index triples that constitute a win: 3 rows, 3 columns, 2 diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Search score for a position the computer has won
pub const WIN_SCORE: i32 = 10;

/// Search score for a position the computer's opponent has won
pub const LOSS_SCORE: i32 = -10;

/// Search score for a drawn (or undecided) position
pub const DRAW_SCORE: i32 = 0;

/// The mark the human plays by default
pub const HUMAN_MARK: Mark = Mark::X;

/// The mark the computer plays by default
pub const COMPUTER_MARK: Mark = Mark::O;

/// One of the two symbols a player places on a cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The other mark
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }

    /// Display character for this mark
    pub fn as_char(self) -> char {
        match self {
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }

    /// Parse a mark from its display character (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_types::Mark;
    ///
    /// assert_eq!(Mark::from_char('x'), Some(Mark::X));
    /// assert_eq!(Mark::from_char('O'), Some(Mark::O));
    /// assert_eq!(Mark::from_char('?'), None);
    /// ```
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'x' | 'X' => Some(Mark::X),
            'o' | 'O' => Some(Mark::O),
            _ => None,
        }
    }
}

/// A single board cell: empty or holding a mark
pub type Cell = Option<Mark>;

/// Which opponent the round is played against
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    /// Two humans sharing the keyboard
    TwoPlayer,
    /// Human versus the minimax computer opponent
    VsComputer,
}

/// Result of probing a board for a verdict
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

impl GameStatus {
    /// True once the round can no longer continue
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameStatus::InProgress)
    }
}

/// Main-menu selection
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    TwoPlayer,
    VsComputer,
    Quit,
}
