//! Term view tests - pure rendering through the facade

use tui_tictactoe::core::Board;
use tui_tictactoe::term::render_lines;

#[test]
fn test_view_matches_a_played_board() {
    let board = Board::from_str("X.O.X...O").unwrap();
    let lines = render_lines(&board);

    assert_eq!(
        lines,
        vec![
            "*************       *************".to_string(),
            "* X *   * O *       * 1 * 2 * 3 *".to_string(),
            "*************       *************".to_string(),
            "*   * X *   *       * 4 * 5 * 6 *".to_string(),
            "*************       *************".to_string(),
            "*   *   * O *       * 7 * 8 * 9 *".to_string(),
            "*************       *************".to_string(),
        ]
    );
}

#[test]
fn test_view_never_panics_on_any_fill() {
    // Exhaustive over single-cell fills; the view must tolerate any board.
    for idx in 0..9 {
        let mut board = Board::new();
        board.set(idx, Some(tui_tictactoe::types::Mark::O));
        let lines = render_lines(&board);
        assert_eq!(lines.len(), 7);
        assert!(lines.iter().any(|l| l.contains('O')));
    }
}
