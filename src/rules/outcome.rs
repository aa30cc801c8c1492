//! End-of-game detection and final tally

use crate::board::{Board, Side};
use super::flips::has_legal_move;

/// Final disk count of a finished game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOutcome {
    pub dark: u32,
    pub light: u32,
}

impl GameOutcome {
    /// Side with more disks, `None` on a tie
    pub fn winner(&self) -> Option<Side> {
        match self.dark.cmp(&self.light) {
            std::cmp::Ordering::Greater => Some(Side::Dark),
            std::cmp::Ordering::Less => Some(Side::Light),
            std::cmp::Ordering::Equal => None,
        }
    }

    /// Winning margin in disks
    pub fn margin(&self) -> u32 {
        self.dark.abs_diff(self.light)
    }
}

impl std::fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner() {
            Some(side) => {
                let (high, low) = (self.dark.max(self.light), self.dark.min(self.light));
                write!(f, "{} wins {}-{}", side, high, low)
            }
            None => write!(f, "Tie {}-{}", self.dark, self.light),
        }
    }
}

/// Neither the side to move nor its opponent has a legal move.
#[inline]
pub fn is_terminal(board: &Board) -> bool {
    let side = board.side_to_move();
    !has_legal_move(board, side) && !has_legal_move(board, side.opponent())
}

/// Final tally if the game is over.
pub fn outcome(board: &Board) -> Option<GameOutcome> {
    if !is_terminal(board) {
        return None;
    }
    let (dark, light) = board.tally();
    Some(GameOutcome { dark, light })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_not_terminal() {
        let board = Board::new();
        assert!(!is_terminal(&board));
        assert!(outcome(&board).is_none());
    }

    #[test]
    fn test_one_side_blocked_not_terminal() {
        // Dark cannot bracket anything, Light can play (0,2)
        let board = Board::from_rows(
            [
                "OX......",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
            ],
            Side::Dark,
        );
        assert!(board.legal_moves().is_empty());
        assert_eq!(board.legal_moves_for(Side::Light), vec![crate::board::Pos::new(0, 2)]);
        assert!(!is_terminal(&board));
    }

    #[test]
    fn test_both_blocked_terminal() {
        let board = Board::from_rows(
            [
                "XXXX....",
                "........",
                "........",
                "........",
                "........",
                "........",
                "........",
                ".......O",
            ],
            Side::Light,
        );
        assert!(is_terminal(&board));
        let result = outcome(&board).unwrap();
        assert_eq!(result, GameOutcome { dark: 4, light: 1 });
        assert_eq!(result.winner(), Some(Side::Dark));
        assert_eq!(result.margin(), 3);
    }

    #[test]
    fn test_tie_has_no_winner() {
        let result = GameOutcome { dark: 32, light: 32 };
        assert_eq!(result.winner(), None);
        assert_eq!(result.to_string(), "Tie 32-32");
    }

    #[test]
    fn test_outcome_display() {
        let result = GameOutcome { dark: 20, light: 44 };
        assert_eq!(result.to_string(), "Light wins 44-20");
    }
}
