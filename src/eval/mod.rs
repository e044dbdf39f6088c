//! Move evaluation for the computer player

pub mod heuristic;

pub use heuristic::{score_candidate, select_best_move, ScoredMove, ATTACK_WEIGHT, DEFENSE_WEIGHT};
