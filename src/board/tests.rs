use super::*;
use crate::error::GameError;

#[test]
fn test_side_opponent() {
    assert_eq!(Side::Dark.opponent(), Side::Light);
    assert_eq!(Side::Light.opponent(), Side::Dark);
    assert_eq!(Side::Dark.cell(), Cell::Dark);
    assert_eq!(Side::Light.cell(), Cell::Light);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 * 8 + 4);
    assert_eq!(Pos::from_index(28), pos);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
    assert_eq!(Pos::checked(8, 3), None);
    assert_eq!(Pos::checked(2, 3), Some(Pos::new(2, 3)));
}

#[test]
fn test_pos_ordering() {
    assert!(Pos::new(0, 7) < Pos::new(1, 0));
    assert!(Pos::new(2, 3) < Pos::new(2, 4));
}

#[test]
fn test_board_constants() {
    assert_eq!(BOARD_SIZE, 8);
    assert_eq!(TOTAL_CELLS, 64);
    assert_eq!(DIRECTIONS.len(), 4);
}

#[test]
fn test_initial_layout() {
    let board = Board::new();
    assert_eq!(board.side_to_move(), Side::Dark);
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Light);
    assert_eq!(board.get(Pos::new(4, 4)), Cell::Light);
    assert_eq!(board.get(Pos::new(3, 4)), Cell::Dark);
    assert_eq!(board.get(Pos::new(4, 3)), Cell::Dark);
    assert_eq!(board.occupied(), 4);
    assert_eq!(board.tally(), (2, 2));
}

#[test]
fn test_initial_legal_moves() {
    let board = Board::new();
    assert_eq!(
        board.legal_moves(),
        vec![
            Pos::new(2, 3),
            Pos::new(3, 2),
            Pos::new(4, 5),
            Pos::new(5, 4),
        ]
    );
}

#[test]
fn test_first_move_flips() {
    let mut board = Board::new();
    board.apply_move(Pos::new(2, 3));

    assert_eq!(board.get(Pos::new(2, 3)), Cell::Dark);
    assert_eq!(board.get(Pos::new(3, 3)), Cell::Dark);
    assert_eq!(board.count(Side::Dark), 4);
    assert_eq!(board.count(Side::Light), 1);
    assert_eq!(board.side_to_move(), Side::Light);
}

#[test]
fn test_out_of_bounds_never_legal() {
    let board = Board::new();
    for (row, col) in [(-1, 3), (3, -1), (8, 3), (3, 8), (100, 100), (i32::MIN, 0)] {
        assert!(!board.is_legal_move(row, col));
    }
}

#[test]
fn test_legality_check_is_pure() {
    let board = Board::new();
    let before = board.clone();
    for _ in 0..3 {
        assert!(board.is_legal_move(2, 3));
        assert!(!board.is_legal_move(2, 2));
        assert!(!board.is_legal_move(3, 3));
    }
    assert_eq!(board, before);
}

#[test]
fn test_apply_illegal_is_noop() {
    let mut board = Board::new();
    let before = board.clone();

    board.apply_move(Pos::new(0, 0));
    board.apply_move(Pos::new(3, 3));

    assert_eq!(board, before);
    assert_eq!(board.side_to_move(), Side::Dark);
}

#[test]
fn test_try_apply_illegal_errors() {
    let mut board = Board::new();
    let err = board.try_apply_move(Pos::new(0, 0)).unwrap_err();
    assert_eq!(err, GameError::IllegalMove { row: 0, col: 0 });
    assert_eq!(board, Board::new());
}

#[test]
fn test_off_board_target_is_illegal_not_a_panic() {
    let mut board = Board::new();
    let off = Pos { row: 8, col: 3 };
    assert!(!off.on_board());
    assert!(!board.is_legal(off));

    board.apply_move(off);
    assert_eq!(board, Board::new());

    let err = board.try_apply_move(Pos { row: 3, col: 200 }).unwrap_err();
    assert_eq!(err, GameError::IllegalMove { row: 3, col: 200 });
    assert_eq!(board, Board::new());
}

#[test]
fn test_undo_restores_position() {
    let mut board = Board::new();
    let first = board.try_apply_move(Pos::new(2, 3)).unwrap();
    let after_first = board.clone();
    let second = board.try_apply_move(Pos::new(2, 4)).unwrap();

    board.undo_move(&second);
    assert_eq!(board, after_first);
    board.undo_move(&first);
    assert_eq!(board, Board::new());
}

#[test]
fn test_legal_moves_for_keeps_side() {
    let board = Board::new();
    let light = board.legal_moves_for(Side::Light);
    assert_eq!(light.len(), 4);
    assert_eq!(board.side_to_move(), Side::Dark);
    assert_eq!(board.legal_moves_for(Side::Dark), board.legal_moves());
}

#[test]
fn test_pass_turn() {
    let mut board = Board::new();
    board.pass_turn();
    assert_eq!(board.side_to_move(), Side::Light);
    assert_eq!(board.occupied(), 4);
}

#[test]
fn test_score_perspective() {
    let mut board = Board::new();
    board.apply_move(Pos::new(2, 3));
    // Light to move, down 1 vs 4
    assert_eq!(board.score(), -3);
    assert_eq!(board.score_for(Side::Dark), 3);
    assert_eq!(board.score_for(Side::Light), -3);
}

#[test]
fn test_playout_invariants() {
    // Always take the first legal move; pass when stuck.
    let mut board = Board::new();
    let mut plies = 0;
    while !board.is_terminal() {
        let moves = board.legal_moves();
        let Some(&pos) = moves.first() else {
            board.pass_turn();
            continue;
        };

        let mover = board.side_to_move();
        let occupied = board.occupied();
        let record = board.try_apply_move(pos).unwrap();

        // Target holds the mover's disk, one new disk on the board
        assert_eq!(board.get(pos), mover.cell());
        assert_eq!(board.occupied(), occupied + 1);

        // Each flipped disk is contiguous back to the move cell
        for &flipped in &record.flipped {
            assert_eq!(board.get(flipped), mover.cell());
            let same_row = flipped.row == pos.row;
            let same_col = flipped.col == pos.col;
            assert!(same_row || same_col);
            let (lo, hi) = if same_row {
                (flipped.col.min(pos.col), flipped.col.max(pos.col))
            } else {
                (flipped.row.min(pos.row), flipped.row.max(pos.row))
            };
            for k in lo..=hi {
                let between = if same_row { Pos::new(pos.row, k) } else { Pos::new(k, pos.col) };
                assert_eq!(board.get(between), mover.cell());
            }
        }

        plies += 1;
        assert!(plies <= 60);
    }

    let outcome = board.outcome().unwrap();
    assert_eq!(outcome.dark + outcome.light, board.occupied());
}

#[test]
fn test_display() {
    let text = Board::new().to_string();
    assert!(text.starts_with("  0 1 2 3 4 5 6 7\n"));
    assert!(text.contains("3 . . . O X . . ."));
    assert!(text.ends_with("Dark to move"));
}
