//! View-side game state: the session plus move pacing and notices

use std::time::{Duration, Instant};

use tracing::warn;

use crate::{GameError, GameSession, Phase, Player, Pos};

/// Everything the app needs between frames
pub struct GameState {
    pub session: GameSession,
    /// When the computer's pending reply is due
    ai_due: Option<Instant>,
    ai_delay: Duration,
    pub message: Option<String>,
}

impl GameState {
    pub fn new(ai_delay: Duration) -> Self {
        Self {
            session: GameSession::new(),
            ai_due: None,
            ai_delay,
            message: None,
        }
    }

    /// Start over, dropping any pending computer reply
    pub fn reset(&mut self) {
        self.session.reset();
        self.ai_due = None;
        self.message = Some("Game has been Reset!".to_string());
    }

    pub fn is_ai_pending(&self) -> bool {
        self.ai_due.is_some()
    }

    /// Time left before the pending reply, for repaint scheduling
    pub fn ai_remaining(&self) -> Option<Duration> {
        self.ai_due.map(|due| due.saturating_duration_since(Instant::now()))
    }

    /// Handle a click on a board cell
    pub fn try_place_stone(&mut self, pos: Pos) -> Result<(), GameError> {
        let outcome = self.session.apply_human_move(pos.row as usize, pos.col as usize)?;
        self.message = None;

        if outcome.phase == Phase::WhiteToMove {
            self.ai_due = Some(Instant::now() + self.ai_delay);
        }
        Ok(())
    }

    /// Play the computer's reply once its delay has passed
    pub fn poll_ai(&mut self) {
        let Some(due) = self.ai_due else {
            return;
        };
        if Instant::now() < due {
            return;
        }
        self.ai_due = None;

        match self.session.compute_and_apply_ai_move() {
            Ok(Some(_)) => {}
            Ok(None) => self.message = Some("Board is full".to_string()),
            Err(err) => {
                warn!(%err, "computer move rejected");
                self.message = Some(err.to_string());
            }
        }
    }

    /// Winner banner text, if the game is over
    pub fn winner_text(&self) -> Option<String> {
        self.session.phase().winner().map(|winner| format!("{winner} Wins!"))
    }

    pub fn turn_text(&self) -> String {
        let player = self.session.current_player().unwrap_or_else(|| {
            self.session.move_history().last().map_or(Player::Black, |&(_, p)| p)
        });
        format!("Current Turn: {player}")
    }

    pub fn moves_text(&self) -> String {
        format!(
            "Black Moves: {} | White Moves: {}",
            self.session.black_moves(),
            self.session.white_moves()
        )
    }
}
