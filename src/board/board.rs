//! Board structure with side-to-move tracking

use super::{Cell, Pos, Side, BOARD_SIZE};
use crate::error::GameResult;
use crate::rules::{self, GameOutcome};

/// Game board: the 8x8 grid plus the side to move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Row-major grid of cells
    grid: [[Cell; BOARD_SIZE]; BOARD_SIZE],
    side_to_move: Side,
}

/// Record of an applied move, enough to undo it exactly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveRecord {
    pub pos: Pos,
    pub side: Side,
    /// Opponent disks turned over, grouped by direction, nearest first
    pub flipped: Vec<Pos>,
}

impl Board {
    /// Standard starting layout, Dark to move
    pub fn new() -> Self {
        let mut board = Self::empty(Side::Dark);
        board.place(Pos::new(3, 3), Cell::Light);
        board.place(Pos::new(4, 4), Cell::Light);
        board.place(Pos::new(3, 4), Cell::Dark);
        board.place(Pos::new(4, 3), Cell::Dark);
        board
    }

    /// Board with no disks at all
    pub fn empty(side_to_move: Side) -> Self {
        Self {
            grid: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
            side_to_move,
        }
    }

    /// Get cell at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Cell {
        self.grid[pos.row as usize][pos.col as usize]
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        self.get(pos) == Cell::Empty
    }

    /// Set a cell directly (no flips, no turn change).
    /// Use `apply_move` for game moves.
    #[inline]
    pub fn place(&mut self, pos: Pos, cell: Cell) {
        self.grid[pos.row as usize][pos.col as usize] = cell;
    }

    /// Whole grid, row-major
    #[inline]
    pub fn cells(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.grid
    }

    #[inline]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    /// Override the side to move (position setup)
    #[inline]
    pub fn set_side_to_move(&mut self, side: Side) {
        self.side_to_move = side;
    }

    /// Hand the turn to the opponent without placing a disk
    #[inline]
    pub fn pass_turn(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
    }

    /// Legality for the side to move. Off-board coordinates are simply illegal.
    pub fn is_legal_move(&self, row: i32, col: i32) -> bool {
        Pos::checked(row, col).is_some_and(|pos| self.is_legal(pos))
    }

    #[inline]
    pub fn is_legal(&self, pos: Pos) -> bool {
        rules::is_legal(self, pos, self.side_to_move)
    }

    /// Apply a move for the side to move.
    ///
    /// An illegal target is silently ignored: the board and the side to move
    /// stay as they were. Use [`Board::try_apply_move`] to get an error instead.
    pub fn apply_move(&mut self, pos: Pos) {
        let _ = self.try_apply_move(pos);
    }

    /// Apply a move, returning the flip record or `IllegalMove`.
    pub fn try_apply_move(&mut self, pos: Pos) -> GameResult<MoveRecord> {
        let side = self.side_to_move;
        let flipped = rules::execute_flips(self, pos, side)?;
        self.side_to_move = side.opponent();
        Ok(MoveRecord { pos, side, flipped })
    }

    /// Revert a move previously returned by `try_apply_move`.
    /// Records must be undone in reverse order of application.
    pub fn undo_move(&mut self, record: &MoveRecord) {
        rules::undo_flips(self, record);
        self.side_to_move = record.side;
    }

    /// Legal moves for the side to move, row-major
    pub fn legal_moves(&self) -> Vec<Pos> {
        rules::legal_moves(self, self.side_to_move)
    }

    /// Legal moves as if `side` were to move. The stored side is untouched.
    pub fn legal_moves_for(&self, side: Side) -> Vec<Pos> {
        rules::legal_moves(self, side)
    }

    #[inline]
    pub fn has_legal_move(&self, side: Side) -> bool {
        rules::has_legal_move(self, side)
    }

    /// Neither side can move
    #[inline]
    pub fn is_terminal(&self) -> bool {
        rules::is_terminal(self)
    }

    /// Disk difference from the side to move's perspective
    #[inline]
    pub fn score(&self) -> i32 {
        self.score_for(self.side_to_move)
    }

    /// Disk difference from `side`'s perspective
    #[inline]
    pub fn score_for(&self, side: Side) -> i32 {
        self.count(side) as i32 - self.count(side.opponent()) as i32
    }

    /// Number of disks of a side
    pub fn count(&self, side: Side) -> u32 {
        let cell = side.cell();
        self.grid
            .iter()
            .flat_map(|row| row.iter())
            .filter(|&&c| c == cell)
            .count() as u32
    }

    /// (dark, light) disk counts
    #[inline]
    pub fn tally(&self) -> (u32, u32) {
        (self.count(Side::Dark), self.count(Side::Light))
    }

    /// Total disks on board
    #[inline]
    pub fn occupied(&self) -> u32 {
        let (dark, light) = self.tally();
        dark + light
    }

    /// Final result, available once the position is terminal
    pub fn outcome(&self) -> Option<GameOutcome> {
        rules::outcome(self)
    }

    /// Build a board from text rows: `X` Dark, `O` Light, anything else empty.
    #[cfg(test)]
    pub(crate) fn from_rows(rows: [&str; BOARD_SIZE], side_to_move: Side) -> Self {
        let mut board = Self::empty(side_to_move);
        for (r, line) in rows.iter().enumerate() {
            for (c, ch) in line.chars().take(BOARD_SIZE).enumerate() {
                let cell = match ch {
                    'X' => Cell::Dark,
                    'O' => Cell::Light,
                    _ => Cell::Empty,
                };
                board.place(Pos::new(r as u8, c as u8), cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, " ")?;
        for col in 0..BOARD_SIZE {
            write!(f, " {}", col)?;
        }
        writeln!(f)?;
        for (r, row) in self.grid.iter().enumerate() {
            write!(f, "{}", r)?;
            for cell in row {
                let ch = match cell {
                    Cell::Empty => '.',
                    Cell::Dark => 'X',
                    Cell::Light => 'O',
                };
                write!(f, " {}", ch)?;
            }
            writeln!(f)?;
        }
        write!(f, "{} to move", self.side_to_move)
    }
}
