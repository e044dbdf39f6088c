//! Win condition checking
//!
//! A move wins when it completes five or more stones in a row through
//! the cell just played. Overlines count.

use crate::board::{Board, Player, Pos, WIN_LENGTH};

use super::line::{line_through, run_length, AXES};

/// A completed line of at least five stones
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub winner: Player,
    /// Cells of the line, ordered from one end to the other
    pub cells: Vec<Pos>,
}

/// Check whether `player`'s stone at `pos` completes a line.
///
/// Axes are tried in the order of [`AXES`]; the first one long enough wins.
pub fn check_win(board: &Board, pos: Pos, player: Player) -> Option<WinningLine> {
    AXES.iter()
        .find(|&&axis| run_length(board, pos, axis, player) >= WIN_LENGTH)
        .map(|&axis| WinningLine {
            winner: player,
            cells: line_through(board, pos, axis, player),
        })
}

/// Fast check without collecting the line.
#[inline]
pub fn has_five_at_pos(board: &Board, pos: Pos, player: Player) -> bool {
    AXES.iter()
        .any(|&axis| run_length(board, pos, axis, player) >= WIN_LENGTH)
}
