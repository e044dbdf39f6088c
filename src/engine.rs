//! Game session: the single entry point for playing a game
//!
//! A [`GameSession`] owns the board and the turn state. The caller (a UI,
//! a test, a script) drives it with two synchronous operations:
//!
//! 1. [`GameSession::apply_human_move`] when Black clicks a cell
//! 2. [`GameSession::compute_and_apply_ai_move`] when White should reply
//!
//! Any pacing between the two belongs to the caller.
//!
//! # Example
//!
//! ```
//! use gomoku::{GameSession, Phase, Player};
//!
//! let mut session = GameSession::new();
//! let outcome = session.apply_human_move(4, 4).unwrap();
//! assert_eq!(outcome.player, Player::Black);
//! assert_eq!(outcome.phase, Phase::WhiteToMove);
//!
//! let reply = session.compute_and_apply_ai_move().unwrap().unwrap();
//! assert_eq!(reply.player, Player::White);
//! assert_eq!(session.white_moves(), 1);
//! ```

use tracing::{debug, info, trace};

use crate::board::{Board, Player, Pos, Stone, BOARD_SIZE};
use crate::error::GameError;
use crate::eval::select_best_move;
use crate::rules::check_win;
use crate::turn::Phase;

/// Result of an accepted move
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Cell the stone was placed on
    pub played: Pos,
    /// Who played it
    pub player: Player,
    /// Phase after the move
    pub phase: Phase,
}

impl MoveOutcome {
    /// Cells of the winning line, if this move ended the game
    pub fn winning_cells(&self) -> Option<&[Pos]> {
        self.phase.winning_cells()
    }
}

/// Read-only copy of the session for display
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub board: [[Stone; BOARD_SIZE]; BOARD_SIZE],
    /// `None` once the game is over
    pub current_player: Option<Player>,
    pub black_moves: u32,
    pub white_moves: u32,
    pub phase: Phase,
}

/// One game between the human (Black) and the computer (White)
#[derive(Debug, Clone, Default)]
pub struct GameSession {
    board: Board,
    phase: Phase,
    black_moves: u32,
    white_moves: u32,
    move_history: Vec<(Pos, Player)>,
}

impl GameSession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Place Black's stone at `(row, col)`.
    ///
    /// Rejected with [`GameError::WrongTurn`] unless Black is to move,
    /// [`GameError::OutOfBounds`] or [`GameError::CellOccupied`] for a bad
    /// cell. A rejected move leaves the session unchanged.
    pub fn apply_human_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let result = self.phase.ensure_turn(Player::Black).and_then(|()| {
            let pos = self.board.pos(row, col)?;
            self.play(pos, Player::Black)
        });

        if let Err(err) = &result {
            debug!(row, col, %err, "rejected human move");
        }
        result
    }

    /// Place a stone at `(row, col)` for whichever player is to move.
    ///
    /// Used for replaying recorded games and scripted positions; the
    /// interactive flow goes through [`GameSession::apply_human_move`] and
    /// [`GameSession::compute_and_apply_ai_move`].
    pub fn apply_move(&mut self, row: usize, col: usize) -> Result<MoveOutcome, GameError> {
        let result = self.phase.to_move().ok_or(GameError::WrongTurn).and_then(|player| {
            let pos = self.board.pos(row, col)?;
            self.play(pos, player)
        });

        if let Err(err) = &result {
            debug!(row, col, %err, "rejected move");
        }
        result
    }

    /// Let the computer (White) choose and play its move.
    ///
    /// Returns `Ok(None)` without changing anything when the board has no
    /// empty cell left.
    pub fn compute_and_apply_ai_move(&mut self) -> Result<Option<MoveOutcome>, GameError> {
        if let Err(err) = self.phase.ensure_turn(Player::White) {
            debug!(%err, "rejected computer move");
            return Err(err);
        }

        let Some(best) = select_best_move(&self.board, Player::White) else {
            info!("board is full, computer has no move");
            return Ok(None);
        };
        trace!(pos = %best.pos, score = best.score, "computer selected move");

        self.play(best.pos, Player::White).map(Some)
    }

    /// Start a fresh game. Always succeeds.
    pub fn reset(&mut self) {
        *self = Self::new();
        info!("game reset");
    }

    /// Apply a validated move for the player to move.
    fn play(&mut self, pos: Pos, player: Player) -> Result<MoveOutcome, GameError> {
        self.board.set(pos.row as usize, pos.col as usize, player)?;

        let count = match player {
            Player::Black => &mut self.black_moves,
            Player::White => &mut self.white_moves,
        };
        *count += 1;
        self.move_history.push((pos, player));
        debug!(%player, %pos, moves = *count, "move applied");

        let win = check_win(&self.board, pos, player);
        if let Some(line) = &win {
            info!(winner = %line.winner, cells = ?line.cells, "game won");
        }
        self.phase = std::mem::take(&mut self.phase).advance(win);

        Ok(MoveOutcome {
            played: pos,
            player,
            phase: self.phase.clone(),
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Player to move, `None` once the game is over
    #[inline]
    pub fn current_player(&self) -> Option<Player> {
        self.phase.to_move()
    }

    #[inline]
    pub fn black_moves(&self) -> u32 {
        self.black_moves
    }

    #[inline]
    pub fn white_moves(&self) -> u32 {
        self.white_moves
    }

    pub fn last_move(&self) -> Option<Pos> {
        self.move_history.last().map(|&(pos, _)| pos)
    }

    pub fn move_history(&self) -> &[(Pos, Player)] {
        &self.move_history
    }

    /// True when no empty cell is left. The game stalls in this state
    /// until reset.
    pub fn is_board_full(&self) -> bool {
        self.board.is_full()
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.cells(),
            current_player: self.current_player(),
            black_moves: self.black_moves,
            white_moves: self.white_moves,
            phase: self.phase.clone(),
        }
    }
}
