//! Flip rules: a move must bracket at least one run of opponent disks
//!
//! Pattern along a direction: [placed] - opp - ... - opp - own.
//! Runs are only searched along the four axis-aligned directions.

use crate::board::{Board, Cell, MoveRecord, Pos, Side, DIRECTIONS, TOTAL_CELLS};
use crate::error::{GameError, GameResult};

/// Length of the opponent run bracketed from `pos` along `(dr, dc)`.
///
/// Returns 0 when the run is empty, hits an empty cell, or leaves the board
/// before reaching one of `side`'s disks.
#[inline]
pub fn bracketed_run(board: &Board, pos: Pos, side: Side, dr: i32, dc: i32) -> usize {
    let own = side.cell();
    let opponent = side.opponent().cell();

    let mut len = 0;
    let mut cur = pos.step(dr, dc);
    while let Some(p) = cur {
        let cell = board.get(p);
        if cell == opponent {
            len += 1;
            cur = p.step(dr, dc);
        } else if cell == own {
            return len;
        } else {
            return 0;
        }
    }
    0
}

/// Check if `side` may play at `pos`. Off-board positions are illegal.
#[inline]
pub fn is_legal(board: &Board, pos: Pos, side: Side) -> bool {
    pos.on_board()
        && board.is_empty(pos)
        && DIRECTIONS
            .iter()
            .any(|&(dr, dc)| bracketed_run(board, pos, side, dr, dc) > 0)
}

/// Positions that would be flipped if `side` played at `pos`.
///
/// Grouped by direction in `DIRECTIONS` order, nearest disk first.
/// Empty for an illegal move, including one off the board.
pub fn get_flipped_positions(board: &Board, pos: Pos, side: Side) -> Vec<Pos> {
    let mut flipped = Vec::new();
    if !pos.on_board() || !board.is_empty(pos) {
        return flipped;
    }

    for &(dr, dc) in &DIRECTIONS {
        let len = bracketed_run(board, pos, side, dr, dc);
        let mut cur = pos;
        for _ in 0..len {
            // bracketed_run only counts on-board cells
            if let Some(next) = cur.step(dr, dc) {
                flipped.push(next);
                cur = next;
            }
        }
    }

    flipped
}

/// Place a disk for `side` and turn over every bracketed run.
///
/// Does not change the side to move; `Board::try_apply_move` does that.
pub fn execute_flips(board: &mut Board, pos: Pos, side: Side) -> GameResult<Vec<Pos>> {
    let flipped = get_flipped_positions(board, pos, side);
    if flipped.is_empty() {
        return Err(GameError::IllegalMove {
            row: pos.row,
            col: pos.col,
        });
    }

    let cell = side.cell();
    board.place(pos, cell);
    for &p in &flipped {
        board.place(p, cell);
    }

    Ok(flipped)
}

/// Restore the cells touched by a move.
pub fn undo_flips(board: &mut Board, record: &MoveRecord) {
    let opponent = record.side.opponent().cell();
    for &p in &record.flipped {
        board.place(p, opponent);
    }
    board.place(record.pos, Cell::Empty);
}

/// All legal moves for `side` in row-major order.
pub fn legal_moves(board: &Board, side: Side) -> Vec<Pos> {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .filter(|&pos| is_legal(board, pos, side))
        .collect()
}

/// Check whether `side` has any legal move.
#[inline]
pub fn has_legal_move(board: &Board, side: Side) -> bool {
    (0..TOTAL_CELLS)
        .map(Pos::from_index)
        .any(|pos| is_legal(board, pos, side))
}
