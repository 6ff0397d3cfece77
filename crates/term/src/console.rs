//! Console: styled stdout printing and single-key input.
//!
//! The game uses ordinary line output (no alternate screen), so raw mode is
//! entered only for the duration of one key read and restored through a drop
//! guard. The guard runs on every exit path, including errors and panics.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    event::{self, Event, KeyEvent, KeyEventKind},
    style::{Color, Print, ResetColor, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::board_view::render_lines;
use tui_tictactoe_core::Board;

/// Restores cooked mode when dropped.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> Result<Self> {
        terminal::enable_raw_mode()?;
        Ok(Self)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        let _ = terminal::disable_raw_mode();
    }
}

pub struct Console {
    stdout: io::Stdout,
}

impl Console {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    /// Print one line.
    pub fn line(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(Print(text))?.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Print one line in a color.
    pub fn line_colored(&mut self, text: &str, color: Color) -> Result<()> {
        self.stdout
            .queue(SetForegroundColor(color))?
            .queue(Print(text))?
            .queue(ResetColor)?
            .queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Print without a newline (prompt style) and flush.
    pub fn prompt(&mut self, text: &str) -> Result<()> {
        self.stdout.queue(Print(text))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Draw the board with its key legend.
    pub fn draw_board(&mut self, board: &Board) -> Result<()> {
        self.stdout.queue(Print("\n"))?;
        for line in render_lines(board) {
            self.stdout.queue(Print(line))?.queue(Print("\n"))?;
        }
        self.stdout.queue(Print("\n"))?;
        self.stdout.flush()?;
        Ok(())
    }

    /// Announce a round verdict.
    pub fn announce(&mut self, text: &str) -> Result<()> {
        self.line_colored(text, Color::Green)
    }

    /// Warn about rejected input.
    pub fn warn(&mut self, text: &str) -> Result<()> {
        self.line_colored(text, Color::Red)
    }

    /// Block until one key press and return it.
    ///
    /// Raw mode is held only while waiting so regular printing stays in
    /// cooked mode.
    pub fn read_key(&mut self) -> Result<KeyEvent> {
        let _guard = RawModeGuard::enable()?;
        loop {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    return Ok(key);
                }
            }
        }
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}
