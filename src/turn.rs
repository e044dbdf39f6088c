//! Turn order state machine
//!
//! ```text
//! BlackToMove --black, no win--> WhiteToMove
//! WhiteToMove --white, no win--> BlackToMove
//! either      --win-----------> GameOver (terminal until reset)
//! ```

use crate::board::{Player, Pos};
use crate::error::GameError;
use crate::rules::WinningLine;

/// Current phase of a game
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    BlackToMove,
    WhiteToMove,
    GameOver(WinningLine),
}

impl Phase {
    /// The player allowed to move, `None` once the game is over
    #[inline]
    pub fn to_move(&self) -> Option<Player> {
        match self {
            Phase::BlackToMove => Some(Player::Black),
            Phase::WhiteToMove => Some(Player::White),
            Phase::GameOver(_) => None,
        }
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::GameOver(_))
    }

    pub fn winner(&self) -> Option<Player> {
        match self {
            Phase::GameOver(line) => Some(line.winner),
            _ => None,
        }
    }

    pub fn winning_cells(&self) -> Option<&[Pos]> {
        match self {
            Phase::GameOver(line) => Some(&line.cells),
            _ => None,
        }
    }

    /// Reject a move by `player` unless it is their turn.
    #[inline]
    pub fn ensure_turn(&self, player: Player) -> Result<(), GameError> {
        if self.to_move() == Some(player) {
            Ok(())
        } else {
            Err(GameError::WrongTurn)
        }
    }

    /// Next phase after an accepted move by the player to move.
    pub fn advance(self, win: Option<WinningLine>) -> Phase {
        match (self, win) {
            (Phase::GameOver(line), _) => Phase::GameOver(line),
            (_, Some(line)) => Phase::GameOver(line),
            (Phase::BlackToMove, None) => Phase::WhiteToMove,
            (Phase::WhiteToMove, None) => Phase::BlackToMove,
        }
    }
}
