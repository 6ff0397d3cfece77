//! Terminal Tic-Tac-Toe runner (default binary).
//!
//! Menu loop plus the two round drivers. The core never reads or writes the
//! terminal; this binary feeds it moves and renders its verdicts.

use anyhow::Result;

use tui_tictactoe::core::{Game, MoveError};
use tui_tictactoe::input::{map_cell_key, map_menu_key, should_quit};
use tui_tictactoe::term::Console;
use tui_tictactoe::types::{GameMode, GameStatus, Mark, MenuChoice};

fn main() -> Result<()> {
    let mut console = Console::new();
    console.line("Welcome to Tic-Tac-Toe!")?;

    loop {
        match read_menu_choice(&mut console)? {
            MenuChoice::TwoPlayer => {
                console.line("Player 1: X, Player 2: O")?;
                run_round(&mut console, GameMode::TwoPlayer)?;
            }
            MenuChoice::VsComputer => {
                console.line("You: X, Computer: O")?;
                run_round(&mut console, GameMode::VsComputer)?;
            }
            MenuChoice::Quit => {
                console.line("Thanks for playing!")?;
                return Ok(());
            }
        }
    }
}

/// Show the menu and block until a valid choice (or quit key).
fn read_menu_choice(console: &mut Console) -> Result<MenuChoice> {
    console.line("")?;
    console.line("Menu:")?;
    console.line("  1. Play against a friend")?;
    console.line("  2. Play against the computer")?;
    console.line("  3. Quit (or q)")?;
    console.prompt("Enter your choice: ")?;

    loop {
        let key = console.read_key()?;
        if should_quit(key) {
            console.line("")?;
            return Ok(MenuChoice::Quit);
        }
        if let Some(choice) = map_menu_key(key) {
            console.line("")?;
            return Ok(choice);
        }
        // Anything else: keep waiting at the same prompt.
    }
}

/// Drive one round start to finish, then return to the menu.
fn run_round(console: &mut Console, mode: GameMode) -> Result<()> {
    let mut game = Game::new(mode);

    loop {
        console.draw_board(game.board())?;

        if game.is_computer_turn() {
            console.line("Computer's turn.")?;
            let idx = game.play_computer()?;
            console.line(&format!("Computer plays cell {}.", idx + 1))?;
        } else {
            let label = match mode {
                GameMode::TwoPlayer => format!("Player {}", game.current_mark().as_char()),
                GameMode::VsComputer => "Your".to_string(),
            };
            let moved = human_turn(console, &mut game, &label)?;
            if !moved {
                // Quit key pressed mid-round: abandon the round.
                return Ok(());
            }
        }

        match game.status() {
            GameStatus::InProgress => {}
            verdict => {
                console.draw_board(game.board())?;
                announce(console, mode, verdict)?;
                return Ok(());
            }
        }
    }
}

/// Prompt until the human places a legal mark. Returns false on quit.
fn human_turn(console: &mut Console, game: &mut Game, label: &str) -> Result<bool> {
    console.prompt(&format!("{} turn - press 1-9: ", label))?;

    loop {
        let key = console.read_key()?;
        if should_quit(key) {
            console.line("")?;
            return Ok(false);
        }
        let Some(idx) = map_cell_key(key) else {
            continue;
        };

        match game.play(idx) {
            Ok(()) => {
                console.line(&format!("{}", idx + 1))?;
                return Ok(true);
            }
            Err(err @ (MoveError::CellTaken { .. } | MoveError::OutOfBounds { .. })) => {
                console.line("")?;
                console.warn(&format!("Invalid move: {}. Try again.", err))?;
                console.prompt(&format!("{} turn - press 1-9: ", label))?;
            }
            Err(MoveError::RoundOver) => {
                // The round loop checks status after every move, so a move
                // on a finished round cannot happen from here.
                console.line("")?;
                return Ok(false);
            }
        }
    }
}

fn announce(console: &mut Console, mode: GameMode, verdict: GameStatus) -> Result<()> {
    match (mode, verdict) {
        (GameMode::VsComputer, GameStatus::Won(Mark::X)) => console.announce("You win!"),
        (GameMode::VsComputer, GameStatus::Won(Mark::O)) => console.announce("Computer wins!"),
        (_, GameStatus::Won(mark)) => {
            console.announce(&format!("Player {} wins!", mark.as_char()))
        }
        (_, GameStatus::Draw) => console.announce("It's a draw!"),
        (_, GameStatus::InProgress) => Ok(()),
    }
}
