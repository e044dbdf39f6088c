//! Game rules for connect-five
//!
//! - Directional line scanning (shared primitive)
//! - Win condition (five or more in a row)

pub mod line;
pub mod win;

// Re-exports for convenient access
pub use line::{best_run, count_in_direction, line_through, run_length, AXES};
pub use win::{check_win, has_five_at_pos, WinningLine};
