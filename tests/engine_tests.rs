//! Engine tests - shift semantics, scoring, and liveness

use tui_2048::core::{can_shift, legal_shifts, shift, Board};
use tui_2048::types::Direction;

#[test]
fn test_move_left_merges_leading_pair() {
    let board = Board::from_rows(&[
        vec![2, 2, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let outcome = shift(&board, Direction::Left);
    assert_eq!(
        outcome.board.to_rows(),
        vec![
            vec![4, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
        ]
    );
    assert_eq!(outcome.score, 4);
}

#[test]
fn test_move_right_merges_across_gap() {
    let board = Board::from_rows(&[
        vec![2, 0, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let outcome = shift(&board, Direction::Right);
    assert_eq!(outcome.board.row(0), &[0, 0, 0, 4]);
    assert_eq!(outcome.score, 4);
}

#[test]
fn test_triple_merges_once_per_pass() {
    let board = Board::from_rows(&[
        vec![2, 2, 2, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let outcome = shift(&board, Direction::Left);
    assert_eq!(outcome.board.row(0), &[4, 2, 0, 0]);
    assert_eq!(outcome.score, 4);
}

#[test]
fn test_four_equal_tiles_merge_pairwise() {
    let board = Board::from_rows(&[
        vec![4, 4, 4, 4],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
        vec![0, 0, 0, 0],
    ]);

    let outcome = shift(&board, Direction::Left);
    assert_eq!(outcome.board.row(0), &[8, 8, 0, 0]);
    assert_eq!(outcome.score, 16);
}

#[test]
fn test_merge_conservation() {
    // Post-shift tile sum equals pre-shift sum; score equals half the value
    // of every tile created (merging two v's nets one 2v and scores 2v).
    let boards = [
        Board::from_rows(&[
            vec![2, 2, 4, 4],
            vec![8, 8, 8, 8],
            vec![2, 0, 2, 0],
            vec![16, 16, 2, 4],
        ]),
        Board::from_rows(&[
            vec![2, 0, 0, 2],
            vec![0, 4, 4, 0],
            vec![32, 32, 64, 64],
            vec![0, 0, 0, 0],
        ]),
    ];

    for board in &boards {
        for direction in Direction::all() {
            let outcome = shift(board, direction);
            assert_eq!(
                outcome.board.tile_sum(),
                board.tile_sum(),
                "sum must be conserved shifting {:?}",
                direction
            );
        }
    }
}

#[test]
fn test_directional_symmetry_right_is_mirrored_left() {
    let board = Board::from_rows(&[
        vec![2, 2, 4, 0],
        vec![0, 8, 8, 2],
        vec![4, 0, 4, 4],
        vec![2, 4, 2, 4],
    ]);

    let right = shift(&board, Direction::Right);
    let via_left = shift(&board.mirrored(), Direction::Left);
    assert_eq!(right.board, via_left.board.mirrored());
    assert_eq!(right.score, via_left.score);
}

#[test]
fn test_directional_symmetry_up_is_transposed_left() {
    let board = Board::from_rows(&[
        vec![2, 2, 4, 0],
        vec![2, 8, 8, 2],
        vec![4, 0, 4, 4],
        vec![2, 4, 2, 4],
    ]);

    let up = shift(&board, Direction::Up);
    let via_left = shift(&board.transposed(), Direction::Left);
    assert_eq!(up.board, via_left.board.transposed());
    assert_eq!(up.score, via_left.score);
}

#[test]
fn test_full_ordered_row_is_unchanged() {
    let board = Board::from_rows(&[
        vec![2, 4, 8, 16],
        vec![16, 8, 4, 2],
        vec![2, 4, 8, 16],
        vec![16, 8, 4, 2],
    ]);

    let outcome = shift(&board, Direction::Left);
    assert_eq!(outcome.board, board);
    assert_eq!(outcome.score, 0);
}

#[test]
fn test_can_shift_agrees_with_legal_shifts() {
    let cases = [
        Board::from_rows(&[
            vec![2, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 4],
        ]),
        Board::from_rows(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
        ]),
        Board::from_rows(&[
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 2],
            vec![2, 4, 2, 4],
            vec![4, 2, 4, 4],
        ]),
        Board::from_rows(&[
            vec![2, 4, 8, 16],
            vec![32, 64, 128, 256],
            vec![512, 1024, 2, 4],
            vec![8, 16, 32, 0],
        ]),
    ];

    for board in &cases {
        assert_eq!(
            can_shift(board),
            !legal_shifts(board).is_empty(),
            "liveness check must match exhaustive shift probing"
        );
    }
}

#[test]
fn test_larger_board_sizes() {
    // The engine is size-parametric, not 4x4-specific.
    let board = Board::from_rows(&[
        vec![2, 2, 2, 2, 2],
        vec![0; 5],
        vec![0; 5],
        vec![0; 5],
        vec![0; 5],
    ]);

    let outcome = shift(&board, Direction::Left);
    assert_eq!(outcome.board.row(0), &[4, 4, 2, 0, 0]);
    assert_eq!(outcome.score, 8);
}
