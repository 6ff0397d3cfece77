//! Engine tests - search contract, scores and tie-breaks
//!
//! Several expectations here pin the deterministic tie-break (first-found
//! move under strict `>`); they are regression tests, not preferences.

use tui_tictactoe::core::{best_move, computer_move, evaluate, minimax, Board, EngineError};
use tui_tictactoe::types::{
    Mark, CELL_COUNT, COMPUTER_MARK, DRAW_SCORE, LOSS_SCORE, WIN_SCORE,
};

#[test]
fn test_evaluate_truth_table() {
    let computer_line = Board::from_str("X.X.X.OOO").unwrap();
    assert_eq!(evaluate(&computer_line, COMPUTER_MARK), WIN_SCORE);

    let human_line = Board::from_str("O.O.O.XXX").unwrap();
    assert_eq!(evaluate(&human_line, COMPUTER_MARK), LOSS_SCORE);

    let undecided = Board::from_str("XOX......").unwrap();
    assert_eq!(evaluate(&undecided, COMPUTER_MARK), DRAW_SCORE);

    assert_eq!(evaluate(&Board::new(), COMPUTER_MARK), DRAW_SCORE);
}

#[test]
fn test_evaluate_computer_win_checked_first() {
    // Illegal double-win board; the documented tie-break is computer first.
    let board = Board::from_str("OOOXXX...").unwrap();
    assert_eq!(evaluate(&board, COMPUTER_MARK), WIN_SCORE);
    // Seen from X's side the same rule applies symmetrically.
    assert_eq!(evaluate(&board, Mark::X), WIN_SCORE);
}

#[test]
fn test_empty_board_is_a_draw_for_every_opening() {
    // Optimal play from both sides draws, whichever cell the computer
    // opens with.
    let mut board = Board::new();
    for idx in 0..CELL_COUNT {
        board.set(idx, Some(COMPUTER_MARK));
        let score = minimax(&mut board, 0, false, COMPUTER_MARK);
        board.set(idx, None);
        assert_eq!(score, DRAW_SCORE, "opening at {} should draw", idx);
    }
    assert_eq!(board, Board::new());
}

#[test]
fn test_tie_break_picks_lowest_index() {
    // All nine openings score 0, so the strict `>` comparison keeps the
    // first candidate: cell 0.
    let mut board = Board::new();
    assert_eq!(best_move(&mut board, COMPUTER_MARK), Ok(0));
}

#[test]
fn test_takes_immediate_win_over_block() {
    // Computer at {0,1}, human at {3,4}: completing the top row wins now,
    // blocking at 5 merely postpones.
    let mut board = Board::from_str("OO.XX....").unwrap();
    let idx = computer_move(&mut board, COMPUTER_MARK).unwrap();
    assert_eq!(idx, 2);
    assert!(board.has_won(COMPUTER_MARK));
}

#[test]
fn test_blocks_the_human_threat() {
    // Human at {4,6} threatens the {2,4,6} diagonal; every computer move
    // except 2 loses to it.
    let mut board = Board::from_str("...OX.X.O").unwrap();
    let idx = computer_move(&mut board, COMPUTER_MARK).unwrap();
    assert_eq!(idx, 2);
    assert!(!board.has_won(Mark::X));
}

#[test]
fn test_search_leaves_the_board_unchanged() {
    let before = Board::from_str(".X..O...X").unwrap();

    let mut probe = before;
    minimax(&mut probe, 0, true, COMPUTER_MARK);
    assert_eq!(probe, before);

    let mut probe = before;
    best_move(&mut probe, COMPUTER_MARK).unwrap();
    assert_eq!(probe, before);
}

#[test]
fn test_computer_move_mutates_exactly_one_cell() {
    let before = Board::from_str("X........").unwrap();
    let mut board = before;

    let idx = computer_move(&mut board, COMPUTER_MARK).unwrap();

    assert_eq!(board.get(idx), Some(Some(COMPUTER_MARK)));
    for cell in 0..CELL_COUNT {
        if cell != idx {
            assert_eq!(board.get(cell), before.get(cell));
        }
    }
}

#[test]
fn test_full_board_is_a_checked_precondition() {
    let mut board = Board::from_str("XOXXOOOXX").unwrap();
    let before = board;
    assert_eq!(
        computer_move(&mut board, COMPUTER_MARK),
        Err(EngineError::BoardFull)
    );
    assert_eq!(board, before);
}

#[test]
fn test_engine_is_mark_agnostic() {
    // Same threat as the block test, but with the roles swapped: an engine
    // playing X must block O's {2,4,6} diagonal at 2.
    let mut board = Board::from_str("...XO.O.X").unwrap();
    let idx = computer_move(&mut board, Mark::X).unwrap();
    assert_eq!(idx, 2);
}

#[test]
fn test_optimal_play_never_loses_from_one_mark() {
    // From any single human opening, two optimal engines finish the game
    // without the computer losing (and in fact without anyone winning).
    for opening in 0..CELL_COUNT {
        let mut board = Board::new();
        board.set(opening, Some(Mark::X));

        let mut to_move = COMPUTER_MARK;
        while !board.is_full() && evaluate(&board, COMPUTER_MARK) == DRAW_SCORE {
            computer_move(&mut board, to_move).unwrap();
            to_move = to_move.opponent();
        }

        assert_eq!(
            evaluate(&board, COMPUTER_MARK),
            DRAW_SCORE,
            "opening {} should end in a draw",
            opening
        );
    }
}
