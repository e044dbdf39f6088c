//! Single-ply heuristic for the computer's move
//!
//! Every empty cell is scored twice: as if the computer played there
//! (attack) and as if the human did (defense). The better of the two
//! weighted run lengths is the cell's score. There is no lookahead.

use crate::board::{Board, Player, Pos};
use crate::rules::best_run;

/// Weight applied to the computer's own best run through the cell
pub const ATTACK_WEIGHT: f64 = 1.2;

/// Weight applied to the opponent's best run through the cell.
/// Larger than [`ATTACK_WEIGHT`], so blocking wins ties against extending.
pub const DEFENSE_WEIGHT: f64 = 1.5;

/// Score an empty cell as a move for `player`.
#[must_use]
pub fn score_candidate(board: &Board, pos: Pos, player: Player) -> f64 {
    debug_assert!(board.is_empty_at(pos));

    let offensive_run = best_run(board, pos, player);
    let defensive_run = best_run(board, pos, player.opponent());

    (offensive_run as f64 * ATTACK_WEIGHT).max(defensive_run as f64 * DEFENSE_WEIGHT)
}

/// A chosen cell together with its heuristic score
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredMove {
    pub pos: Pos,
    pub score: f64,
}

/// Pick the highest scoring empty cell for `player`.
///
/// Cells are visited in row-major order and only a strictly better score
/// replaces the current best, so ties resolve to the earliest cell.
/// Returns `None` when the board is full.
#[must_use]
pub fn select_best_move(board: &Board, player: Player) -> Option<ScoredMove> {
    let mut best: Option<ScoredMove> = None;

    for pos in board.empty_cells() {
        let score = score_candidate(board, pos, player);
        if best.map_or(true, |b| score > b.score) {
            best = Some(ScoredMove { pos, score });
        }
    }

    best
}
