//! Shift engine - pure board transitions
//!
//! Everything in here is a total function: a board and a direction in, a
//! fresh board and a score delta out. The row primitive works toward index 0
//! (a "left" shift); the other three directions reuse it through mirror and
//! transpose, so merge policy lives in exactly one place.

use arrayvec::ArrayVec;

use crate::core::Board;
use crate::types::Direction;

/// Result of shifting a board in one direction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the shift (input is never mutated).
    pub board: Board,
    /// Sum of tile values created by merges during this shift.
    pub score: u32,
}

impl MoveOutcome {
    /// True if the shift changed at least one cell.
    pub fn changed_from(&self, before: &Board) -> bool {
        self.board != *before
    }
}

/// Slide all non-zero values toward index 0, preserving order.
fn compress_row(row: &mut [u32]) {
    let mut write = 0;
    for read in 0..row.len() {
        if row[read] != 0 {
            row.swap(write, read);
            write += 1;
        }
    }
}

/// Merge equal neighbors in a single left-to-right pass.
///
/// Each pair merges at its left slot and zeroes the right one; the scan then
/// moves past the zeroed slot, so a merge result never merges again in the
/// same pass. `[2, 2, 2, 0]` becomes `[4, 0, 2, 0]` here, not `[4, 4, ..]`.
/// Returns the score gained (the sum of the doubled values).
fn merge_row(row: &mut [u32]) -> u32 {
    let mut score = 0;
    for i in 0..row.len().saturating_sub(1) {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            score += row[i];
            row[i + 1] = 0;
        }
    }
    score
}

/// Shift every row toward index 0: compress, merge, compress again.
fn shift_rows_left(board: &Board) -> MoveOutcome {
    let mut out = board.clone();
    let mut score = 0;

    for r in 0..out.size() {
        let row = out.row_mut(r);
        compress_row(row);
        score += merge_row(row);
        compress_row(row);
    }

    MoveOutcome { board: out, score }
}

/// Shift the board in the given direction.
///
/// Directional dispatch reduces everything to the row-wise left shift:
/// Right mirrors rows first, Up and Down go through a transpose.
pub fn shift(board: &Board, direction: Direction) -> MoveOutcome {
    match direction {
        Direction::Left => shift_rows_left(board),
        Direction::Right => {
            let shifted = shift_rows_left(&board.mirrored());
            MoveOutcome {
                board: shifted.board.mirrored(),
                score: shifted.score,
            }
        }
        Direction::Up => {
            let shifted = shift_rows_left(&board.transposed());
            MoveOutcome {
                board: shifted.board.transposed(),
                score: shifted.score,
            }
        }
        Direction::Down => {
            let shifted = shift_rows_left(&board.transposed().mirrored());
            MoveOutcome {
                board: shifted.board.mirrored().transposed(),
                score: shifted.score,
            }
        }
    }
}

/// Liveness check: can any direction still change the board?
///
/// True iff some cell is empty or has an equal neighbor to its right or
/// below. Compress/merge only ever act on emptiness or such an adjacency,
/// so this is exact, not a heuristic.
pub fn can_shift(board: &Board) -> bool {
    let size = board.size();
    for r in 0..size {
        for c in 0..size {
            let v = board.get(r, c).unwrap_or(0);
            if v == 0 {
                return true;
            }
            if c + 1 < size && board.get(r, c + 1) == Some(v) {
                return true;
            }
            if r + 1 < size && board.get(r + 1, c) == Some(v) {
                return true;
            }
        }
    }
    false
}

/// The directions whose shift would change the board.
pub fn legal_shifts(board: &Board) -> ArrayVec<Direction, 4> {
    let mut legal = ArrayVec::new();
    for direction in Direction::all() {
        if shift(board, direction).changed_from(board) {
            legal.push(direction);
        }
    }
    legal
}
