//! Property tests for the game engine

use gomoku::rules::check_win;
use gomoku::{GameError, GameSession, Phase, Player, Pos, BOARD_SIZE, WIN_LENGTH};
use proptest::prelude::*;

/// Replay arbitrary cells, skipping rejected ones, to reach a random
/// reachable session.
fn session_from(cells: &[(usize, usize)]) -> GameSession {
    let mut session = GameSession::new();
    for &(row, col) in cells {
        if session.phase().is_over() {
            break;
        }
        let _ = session.apply_move(row, col);
    }
    session
}

fn cells() -> impl Strategy<Value = Vec<(usize, usize)>> {
    prop::collection::vec((0..BOARD_SIZE, 0..BOARD_SIZE), 0..60)
}

proptest! {
    #[test]
    fn rejected_human_move_changes_nothing(
        history in cells(),
        row in 0..BOARD_SIZE + 3,
        col in 0..BOARD_SIZE + 3,
    ) {
        let mut session = session_from(&history);
        let before = session.snapshot();
        let history_len = session.move_history().len();

        if let Err(err) = session.apply_human_move(row, col) {
            let out_of_bounds = row >= BOARD_SIZE || col >= BOARD_SIZE;
            match err {
                GameError::OutOfBounds { .. } => prop_assert!(out_of_bounds),
                GameError::CellOccupied { .. } => prop_assert!(!out_of_bounds),
                GameError::WrongTurn => prop_assert_ne!(&before.phase, &Phase::BlackToMove),
            }
            prop_assert_eq!(session.snapshot(), before);
            prop_assert_eq!(session.move_history().len(), history_len);
        }
    }

    #[test]
    fn computer_only_plays_empty_cells(history in cells()) {
        let mut session = session_from(&history);
        if session.phase() == &Phase::BlackToMove {
            let first_empty = session.board().empty_cells().next();
            if let Some(pos) = first_empty {
                session.apply_human_move(pos.row as usize, pos.col as usize).unwrap();
            }
        }
        prop_assume!(session.phase() == &Phase::WhiteToMove);

        let board = session.board().clone();
        let reply = session.compute_and_apply_ai_move().unwrap().unwrap();
        prop_assert!(board.is_empty_at(reply.played));
        prop_assert_eq!(reply.player, Player::White);
    }

    #[test]
    fn computer_move_is_deterministic(history in cells()) {
        let session = session_from(&history);
        prop_assume!(session.phase() == &Phase::WhiteToMove);

        let mut first = session.clone();
        let mut second = session.clone();
        prop_assert_eq!(
            first.compute_and_apply_ai_move().unwrap(),
            second.compute_and_apply_ai_move().unwrap()
        );
    }

    #[test]
    fn reset_restores_initial_state(history in cells()) {
        let mut session = session_from(&history);
        session.reset();
        prop_assert_eq!(session.snapshot(), GameSession::new().snapshot());
        prop_assert!(session.move_history().is_empty());
    }

    #[test]
    fn win_iff_run_reaches_five(
        axis in 0usize..4,
        start_row in 0..BOARD_SIZE,
        start_col in 0..BOARD_SIZE,
        len in 1usize..=8,
        played in 0usize..8,
    ) {
        let (dr, dc) = gomoku::rules::AXES[axis];
        let line: Vec<Pos> = (0..len as i32)
            .map_while(|i| Pos::checked(start_row as i32 + dr * i, start_col as i32 + dc * i))
            .collect();
        let played = line[played % line.len()];

        let mut board = gomoku::Board::new();
        for pos in &line {
            board.set(pos.row as usize, pos.col as usize, Player::Black).unwrap();
        }

        let win = check_win(&board, played, Player::Black);
        prop_assert_eq!(win.is_some(), line.len() >= WIN_LENGTH);
        if let Some(win) = win {
            prop_assert_eq!(win.cells.len(), line.len());
            prop_assert_eq!(win.winner, Player::Black);
        }
    }
}
