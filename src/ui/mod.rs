//! GUI module for the game
//!
//! A thin egui/eframe view over [`crate::GameSession`].

mod app;
mod board_view;
mod game_state;
mod theme;

pub use app::GomokuApp;
pub use game_state::GameState;
