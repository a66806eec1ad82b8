use cfour::board::*;
use cfour::engine::config::*;

mod common;

#[test]
fn fresh_board() {
    let board = Board::new();
    assert_eq!(board.score(), NO_WIN);
    assert_eq!(board.winning_chips(), None);
    assert!(!board.has_winner());
    assert!(!board.is_full());
    assert_eq!(board.legal_columns().size(), 7);
}

#[test]
fn chips_stack_bottom_up() {
    let mut board = Board::new();
    assert_eq!(board.place(Player::Human, 2), Some(Coord { col: 2, row: 0 }));
    assert_eq!(board.place(Player::Opponent, 2), Some(Coord { col: 2, row: 1 }));
    assert_eq!(board.get(2, 0), Some(Player::Human));
    assert_eq!(board.get(2, 1), Some(Player::Opponent));
    assert_eq!(board.get(2, 2), None);
    assert_eq!(board.height(2), Some(2));
    assert_eq!(board.chip_count(), 2);
}

#[test]
fn full_column_is_a_no_op() {
    let mut board = Board::new();
    for i in 0..ROWS {
        let player = if i % 2 == 0 { Player::Human } else { Player::Opponent };
        assert!(board.place(player, 5).is_some());
    }
    let before = board;
    assert_eq!(board.place(Player::Human, 5), None);
    assert_eq!(board.place(Player::Opponent, 5), None);
    assert_eq!(board, before);
    assert_eq!(board.height(5), Some(ROWS));
    assert!(!board.legal_columns().contains(5));
}

#[test]
fn heights_never_exceed_rows() {
    let mut board = Board::new();
    let mut player = Player::Human;
    for i in 0..200 {
        let col = (i * 5 + i / 7) % COLS;
        let before = board.height(col).unwrap();
        match board.place(player, col) {
            Some(_) => assert_eq!(board.height(col), Some(before + 1)),
            None => assert_eq!(board.height(col), Some(ROWS)),
        }
        for c in 0..COLS {
            assert!(board.height(c).unwrap() <= ROWS);
        }
        player = player.other();
    }
    assert!(board.is_full());
    assert!(board.is_over());
}

#[test]
fn off_board_columns_have_no_height() {
    let board = Board::new();
    assert_eq!(board.height(COLS - 1), Some(0));
    assert_eq!(board.height(COLS), None);
    assert_eq!(board.get(COLS, 0), None);
}

#[test]
fn vertical_win_in_column_3() {
    common::setup();
    let mut board = Board::new();
    for i in 0..4 {
        assert!(!board.has_winner());
        board.place(Player::Human, 3);
        // the opponent plays elsewhere without blocking
        if i < 3 {
            board.place(Player::Opponent, i);
        }
    }
    assert!(board.has_winner());
    assert_eq!(board.score(), HUMAN_WIN);
    let chips = board.winning_chips().expect("winning chips");
    assert_eq!(common::sorted(chips), vec![(3, 0), (3, 1), (3, 2), (3, 3)]);
}

#[test]
fn horizontal_win_from_any_chip() {
    // fill three of 0..4 in row 0, then complete with the remaining one
    for last in 0..4 {
        let mut board = Board::new();
        for col in (0..4).filter(|&c| c != last) {
            board.place(Player::Opponent, col);
            assert!(!board.has_winner());
        }
        board.place(Player::Opponent, last);
        assert_eq!(board.score(), OPPONENT_WIN);
        let chips = board.winning_chips().unwrap();
        assert_eq!(common::sorted(chips), vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
    }
}

#[test]
fn rising_diagonal_win() {
    // opponent chips at (1,0) (2,1) (3,2) (4,3), human filler underneath
    let board = Board::from_columns(&["", "2", "12", "112", "1112"]).unwrap();
    assert_eq!(board.score(), OPPONENT_WIN);
    let chips = board.winning_chips().unwrap();
    assert_eq!(common::sorted(chips), vec![(1, 0), (2, 1), (3, 2), (4, 3)]);
}

#[test]
fn falling_diagonal_win_with_middle_chip_last() {
    // human chips at (0,3) (1,2) (2,1) (3,0); (1,2) goes in last
    let mut board = Board::from_columns(&["2221", "22", "21", "1"]).unwrap();
    assert!(!board.has_winner());
    board.place(Player::Human, 1);
    assert_eq!(board.score(), HUMAN_WIN);
    let chips = board.winning_chips().unwrap();
    assert_eq!(common::sorted(chips), vec![(0, 3), (1, 2), (2, 1), (3, 0)]);
    for chip in chips.iter() {
        assert_eq!(board.get(chip.col as usize, chip.row as usize), Some(Player::Human));
    }
}

#[test]
fn three_in_a_row_is_not_a_win() {
    let board = Board::from_columns(&["1", "1", "1", "2"]).unwrap();
    assert!(!board.has_winner());
    assert_eq!(board.score(), NO_WIN);
    assert_eq!(board.winning_chips(), None);
}

#[test]
fn longer_run_still_reports_four() {
    // 0,1,2 and 4,5 in row 0, then 3 joins them into a run of six
    let mut board = Board::from_columns(&["1", "1", "1", "", "1", "1"]).unwrap();
    assert!(!board.has_winner());
    board.place(Player::Human, 3);
    assert_eq!(board.score(), HUMAN_WIN);
    let chips = common::sorted(board.winning_chips().unwrap());
    assert_eq!(chips.len(), 4);
    assert!(chips.contains(&(3, 0)));
    for w in chips.windows(2) {
        assert_eq!(w[1].0, w[0].0 + 1);
        assert_eq!(w[1].1, 0);
    }
}

#[test]
fn later_move_rescores_board() {
    let mut board = Board::new();
    for _ in 0..4 {
        board.place(Player::Human, 0);
    }
    assert_eq!(board.score(), HUMAN_WIN);
    // placement still works on a won board and the score follows the new chip
    assert!(board.place(Player::Opponent, 6).is_some());
    assert_eq!(board.score(), NO_WIN);
    assert_eq!(board.winning_chips(), None);
}

#[test]
fn full_board_without_winner() {
    let columns = common::drawn_columns();
    let refs = columns.iter().map(|s| s.as_str()).collect::<Vec<_>>();
    let board = Board::from_columns(&refs).unwrap();
    assert!(board.is_full());
    assert!(!board.has_winner());
    assert!(board.legal_columns().is_empty());

    // same final position filled row by row instead of column by column
    let mut by_rows = Board::new();
    for row in 0..ROWS {
        for col in 0..COLS {
            let id = columns[col].as_bytes()[row] - b'0';
            by_rows.place(Player::from_id(id).unwrap(), col);
            assert!(!by_rows.has_winner());
        }
    }
    assert!(by_rows.is_full());
    assert!(!by_rows.has_winner());
}
