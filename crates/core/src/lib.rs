//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and the
//! adversarial search. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: the search is exhaustive with a fixed tie-break, so
//!   the same board always produces the same move
//! - **Testable**: every rule is exercised without a terminal
//! - **Portable**: can run in any environment (terminal, GUI, headless)
//! - **Fast**: zero-allocation board probing via in-place place/undo
//!
//! # Module Structure
//!
//! - [`board`]: the 9-cell grid with win and draw detection
//! - [`engine`]: minimax search and computer move selection
//! - [`game`]: a single round's state machine (turn order, verdicts, reset)
//!
//! # Example
//!
//! ```
//! use tui_tictactoe_core::{computer_move, Board};
//! use tui_tictactoe_types::{Mark, COMPUTER_MARK};
//!
//! let mut board = Board::new();
//! board.set(4, Some(Mark::X));
//!
//! // The computer replies with its best move.
//! let idx = computer_move(&mut board, COMPUTER_MARK).unwrap();
//! assert_eq!(board.get(idx), Some(Some(COMPUTER_MARK)));
//! ```

pub mod board;
pub mod engine;
pub mod game;

pub use board::{Board, BoardParseError};
pub use engine::{best_move, computer_move, evaluate, minimax, EngineError};
pub use game::{Game, MoveError};
