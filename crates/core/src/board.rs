//! Board module - the 3x3 game grid
//!
//! The board is a flat array of 9 cells in row-major order, where each cell is
//! empty or holds a mark. The flat layout matches the 0-8 cell indices used by
//! the engine and the 1-9 labels shown to players.
//!
//! The board carries no turn logic; it is a value the engine reads and
//! temporarily mutates during search under a strict place/undo discipline.

use arrayvec::ArrayVec;

use tui_tictactoe_types::{Cell, Mark, CELL_COUNT, WINNING_LINES};

/// The game board - 9 cells in row-major order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; CELL_COUNT],
}

/// Error parsing a board from text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardParseError {
    /// The text did not contain exactly 9 cell characters
    WrongLength { got: usize },
    /// A character was not one of `X`, `O`, `.`, `_` or space
    InvalidCell { character: char, index: usize },
}

impl std::fmt::Display for BoardParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BoardParseError::WrongLength { got } => {
                write!(f, "expected {} cell characters, got {}", CELL_COUNT, got)
            }
            BoardParseError::InvalidCell { character, index } => {
                write!(f, "invalid cell character {:?} at index {}", character, index)
            }
        }
    }
}

impl std::error::Error for BoardParseError {}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; CELL_COUNT],
        }
    }

    /// Get cell at `idx`
    ///
    /// Returns `None` if out of bounds.
    pub fn get(&self, idx: usize) -> Option<Cell> {
        self.cells.get(idx).copied()
    }

    /// Set cell at `idx`
    ///
    /// Returns false if out of bounds. No occupancy check; the engine relies
    /// on this to place and undo probe moves.
    pub fn set(&mut self, idx: usize, cell: Cell) -> bool {
        match self.cells.get_mut(idx) {
            Some(slot) => {
                *slot = cell;
                true
            }
            None => false,
        }
    }

    /// Check if cell `idx` is within bounds and empty
    pub fn is_empty_cell(&self, idx: usize) -> bool {
        matches!(self.get(idx), Some(None))
    }

    /// Check if no cell is empty
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_some())
    }

    /// Check whether `mark` fully occupies one of the 8 winning lines
    pub fn has_won(&self, mark: Mark) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| line.iter().all(|&i| self.cells[i] == Some(mark)))
    }

    /// Indices of all empty cells, in ascending order
    ///
    /// Ascending order is load-bearing: move selection breaks score ties by
    /// keeping the first candidate it sees.
    pub fn empty_cells(&self) -> ArrayVec<usize, CELL_COUNT> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(idx, _)| idx)
            .collect()
    }

    /// Number of cells holding `mark`
    pub fn count(&self, mark: Mark) -> usize {
        self.cells.iter().filter(|&&cell| cell == Some(mark)).count()
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; CELL_COUNT] {
        &self.cells
    }

    /// Reset every cell to empty
    pub fn clear(&mut self) {
        self.cells = [None; CELL_COUNT];
    }

    /// Create from a flat cell array
    pub fn from_cells(cells: [Cell; CELL_COUNT]) -> Self {
        Self { cells }
    }

    /// Parse a board from 9 cell characters
    ///
    /// `X`/`O` (either case) are marks; `.`, `_` and space are empty.
    /// Whitespace between rows is not allowed - the input is exactly the 9
    /// cells. Any other character is rejected.
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_tictactoe_core::Board;
    /// use tui_tictactoe_types::Mark;
    ///
    /// let board = Board::from_str("X.O......").unwrap();
    /// assert_eq!(board.get(0), Some(Some(Mark::X)));
    /// assert_eq!(board.get(1), Some(None));
    /// assert_eq!(board.get(2), Some(Some(Mark::O)));
    /// ```
    pub fn from_str(s: &str) -> Result<Self, BoardParseError> {
        let got = s.chars().count();
        if got != CELL_COUNT {
            return Err(BoardParseError::WrongLength { got });
        }

        let mut cells = [None; CELL_COUNT];
        for (index, character) in s.chars().enumerate() {
            cells[index] = match character {
                '.' | '_' | ' ' => None,
                _ => match Mark::from_char(character) {
                    Some(mark) => Some(mark),
                    None => return Err(BoardParseError::InvalidCell { character, index }),
                },
            };
        }
        Ok(Self { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
