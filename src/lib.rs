//! Connect-five engine with a heuristic computer opponent
//!
//! A human (Black) plays against the computer (White) on a fixed 10x10
//! board. Five or more stones in a row wins; overlines count.
//!
//! # Architecture
//!
//! - [`board`]: Cells, positions and the grid
//! - [`rules`]: Directional line scanning and win detection
//! - [`eval`]: Single-ply heuristic for the computer's move
//! - [`turn`]: Turn order state machine
//! - [`engine`]: [`GameSession`], the entry point tying it all together
//! - [`ui`]: egui front-end
//!
//! # Quick Start
//!
//! ```
//! use gomoku::{GameSession, Player};
//!
//! let mut session = GameSession::new();
//! session.apply_human_move(4, 4).unwrap();
//!
//! if let Some(reply) = session.compute_and_apply_ai_move().unwrap() {
//!     println!("Computer plays at {}", reply.played);
//! }
//! assert_eq!(session.current_player(), Some(Player::Black));
//! ```

pub mod board;
pub mod config;
pub mod engine;
pub mod error;
pub mod eval;
pub mod rules;
pub mod turn;
pub mod ui;

// Re-export commonly used types for convenience
pub use board::{Board, Player, Pos, Stone, BOARD_SIZE, WIN_LENGTH};
pub use config::AppConfig;
pub use engine::{GameSession, GameSnapshot, MoveOutcome};
pub use error::{ConfigError, GameError};
pub use rules::WinningLine;
pub use turn::Phase;
