//! Board tests - grid primitives, marking, settling, buffer rows

use tui_columns::core::{detect_matches, Board};
use tui_columns::types::{Cell, Jewel, BOARD_COLS, BUFFER_ROWS, VISIBLE_ROWS};

#[test]
fn test_new_board_is_empty_including_buffer() {
    let board = Board::new(VISIBLE_ROWS, BOARD_COLS);
    assert_eq!(board.rows(), VISIBLE_ROWS + BUFFER_ROWS);

    for row in 0..board.rows() as i16 {
        for col in 0..board.cols() as i16 {
            assert_eq!(board.get(row, col), Some(Cell::Empty));
        }
    }
}

#[test]
fn test_get_and_set_are_bounds_checked() {
    let mut board = Board::new(VISIBLE_ROWS, BOARD_COLS);

    assert!(board.set(5, 2, Cell::Jewel(Jewel::Cyan)));
    assert_eq!(board.get(5, 2), Some(Cell::Jewel(Jewel::Cyan)));

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(board.rows() as i16, 0), None);
    assert!(!board.set(0, board.cols() as i16, Cell::Empty));
}

#[test]
fn test_mark_is_idempotent_per_cell() {
    let mut board = Board::from_rows(
        1,
        4,
        &[
            "    ", //
            "    ", //
            "    ", //
            "GGG ",
        ],
    );

    let matches = detect_matches(&board);
    assert_eq!(matches.len(), 3);

    board.mark(&matches);
    let once = board.clone();
    // Re-marking overlapping runs must not change anything.
    board.mark(&matches);
    assert_eq!(board, once);
    assert!(board.get(3, 0).unwrap().is_marked());
}

#[test]
fn test_unmark_restores_plain_jewels_without_clearing() {
    let mut board = Board::from_rows(
        1,
        4,
        &[
            "    ", //
            "    ", //
            "    ", //
            "BBB ",
        ],
    );
    let before = board.clone();

    let matches = detect_matches(&board);
    board.mark(&matches);
    board.unmark(&matches);
    assert_eq!(board, before);
}

#[test]
fn test_clear_marked_empties_only_marked_cells() {
    let mut board = Board::from_rows(
        1,
        4,
        &[
            "    ", //
            "    ", //
            "    ", //
            "RRRB",
        ],
    );

    let matches = detect_matches(&board);
    board.mark(&matches);
    board.clear_marked();

    for col in 0..3 {
        assert_eq!(board.get(3, col), Some(Cell::Empty));
    }
    assert_eq!(board.get(3, 3), Some(Cell::Jewel(Jewel::Blue)));
}

#[test]
fn test_settle_preserves_column_order() {
    let mut board = Board::from_rows(
        5,
        2,
        &[
            "  ", //
            "  ", //
            "  ", //
            "R ", //
            "  ", //
            "G ", //
            "  ", //
            "B ",
        ],
    );
    board.settle();

    // Same multiset, same relative order, bottom-aligned.
    assert_eq!(board.get(5, 0), Some(Cell::Jewel(Jewel::Red)));
    assert_eq!(board.get(6, 0), Some(Cell::Jewel(Jewel::Green)));
    assert_eq!(board.get(7, 0), Some(Cell::Jewel(Jewel::Blue)));
    for row in 0..5 {
        assert_eq!(board.get(row, 0), Some(Cell::Empty));
    }
}

#[test]
fn test_settle_is_idempotent() {
    let mut board = Board::from_rows(
        3,
        3,
        &[
            " P ", //
            "   ", //
            "C  ", //
            "   ", //
            "  Y", //
            "R G",
        ],
    );
    board.settle();
    let once = board.clone();
    board.settle();
    assert_eq!(board, once);
}

#[test]
fn test_settle_pulls_buffer_jewels_into_view() {
    let mut board = Board::from_rows(
        2,
        1,
        &[
            "O", //
            " ", //
            " ", //
            " ", //
            " ",
        ],
    );
    board.settle();
    assert_eq!(board.get(0, 0), Some(Cell::Empty));
    assert_eq!(board.get(4, 0), Some(Cell::Jewel(Jewel::Orange)));
}

#[test]
fn test_check_buffer_rows_is_sticky() {
    let mut board = Board::new(VISIBLE_ROWS, BOARD_COLS);
    board.set(1, 4, Cell::Jewel(Jewel::Green));

    assert!(board.check_buffer_rows());
    assert!(board.is_game_over());

    // The flag survives the buffer emptying out again.
    board.set(1, 4, Cell::Empty);
    assert!(!board.check_buffer_rows());
    assert!(board.is_game_over());
}
