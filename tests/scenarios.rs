//! End-to-end games driven through the public session API

use gomoku::{GameError, GameSession, Phase, Player, Pos, BOARD_SIZE};

/// Play `moves` alternately starting with Black, for whoever is to move.
fn play_script(session: &mut GameSession, moves: &[(usize, usize)]) {
    for &(row, col) in moves {
        session.apply_move(row, col).unwrap();
    }
}

#[test]
fn black_wins_top_row() {
    let mut session = GameSession::new();
    play_script(
        &mut session,
        &[(0, 0), (9, 0), (0, 1), (9, 2), (0, 2), (9, 4), (0, 3), (9, 6)],
    );

    let outcome = session.apply_human_move(0, 4).unwrap();
    assert_eq!(outcome.phase.winner(), Some(Player::Black));
    assert_eq!(
        outcome.winning_cells(),
        Some(&[Pos::new(0, 0), Pos::new(0, 1), Pos::new(0, 2), Pos::new(0, 3), Pos::new(0, 4)][..])
    );
    assert_eq!(session.black_moves(), 5);
    assert_eq!(session.white_moves(), 4);
    assert_eq!(session.current_player(), None);
}

#[test]
fn computer_blocks_four_instead_of_extending_three() {
    let mut session = GameSession::new();
    play_script(
        &mut session,
        &[(5, 1), (0, 6), (5, 2), (1, 6), (5, 3), (2, 6), (5, 4)],
    );
    assert_eq!(session.phase(), &Phase::WhiteToMove);

    let reply = session.compute_and_apply_ai_move().unwrap().unwrap();
    assert_eq!(reply.played, Pos::new(5, 0));
    assert_eq!(reply.phase, Phase::BlackToMove);
}

#[test]
fn computer_completes_its_own_five() {
    let mut session = GameSession::new();
    play_script(
        &mut session,
        &[(0, 0), (4, 4), (9, 9), (4, 5), (0, 9), (4, 6), (9, 0), (4, 7), (2, 0)],
    );

    let reply = session.compute_and_apply_ai_move().unwrap().unwrap();
    assert_eq!(reply.played, Pos::new(4, 3));
    assert_eq!(reply.phase.winner(), Some(Player::White));
    assert_eq!(reply.winning_cells().map(<[Pos]>::len), Some(5));
}

#[test]
fn moves_after_game_over_are_rejected() {
    let mut session = GameSession::new();
    play_script(
        &mut session,
        &[(3, 0), (8, 8), (3, 1), (8, 6), (3, 2), (8, 4), (3, 3), (8, 2), (3, 4)],
    );
    assert!(session.phase().is_over());
    let before = session.snapshot();

    assert_eq!(session.apply_human_move(6, 6), Err(GameError::WrongTurn));
    assert_eq!(session.compute_and_apply_ai_move(), Err(GameError::WrongTurn));
    assert_eq!(session.apply_move(6, 6), Err(GameError::WrongTurn));
    assert_eq!(session.snapshot(), before);

    session.reset();
    assert_eq!(session.phase(), &Phase::BlackToMove);
    assert!(session.apply_human_move(6, 6).is_ok());
}

#[test]
fn overline_wins_when_gap_is_filled() {
    let mut session = GameSession::new();
    play_script(
        &mut session,
        &[(7, 0), (0, 0), (7, 1), (0, 2), (7, 2), (0, 4), (7, 4), (0, 6), (7, 5), (0, 8)],
    );

    let outcome = session.apply_human_move(7, 3).unwrap();
    assert_eq!(outcome.winning_cells().map(<[Pos]>::len), Some(6));
}

#[test]
fn full_board_stalls_without_winner() {
    // Pairs of columns alternate colour; no line ever reaches three
    let colour = |r: usize, c: usize| if (r + c / 2) % 2 == 0 { Player::Black } else { Player::White };
    let cells: Vec<(usize, usize)> = (0..BOARD_SIZE)
        .flat_map(|r| (0..BOARD_SIZE).map(move |c| (r, c)))
        .collect();
    let black: Vec<_> = cells.iter().filter(|&&(r, c)| colour(r, c) == Player::Black).collect();
    let white: Vec<_> = cells.iter().filter(|&&(r, c)| colour(r, c) == Player::White).collect();
    assert_eq!(black.len(), white.len());

    let mut session = GameSession::new();
    for (&&b, &&w) in black.iter().zip(white.iter()) {
        session.apply_move(b.0, b.1).unwrap();
        session.apply_move(w.0, w.1).unwrap();
    }

    assert!(session.is_board_full());
    assert_eq!(session.phase(), &Phase::BlackToMove);
    assert_eq!(session.black_moves(), 50);
    assert_eq!(session.white_moves(), 50);
    assert_eq!(
        session.apply_human_move(0, 0),
        Err(GameError::CellOccupied { row: 0, col: 0 })
    );
}

#[test]
fn human_versus_computer_game_terminates() {
    let mut session = GameSession::new();
    let mut turns = 0;

    while !session.phase().is_over() && !session.is_board_full() {
        let pos = session.board().empty_cells().last().unwrap();
        session.apply_human_move(pos.row as usize, pos.col as usize).unwrap();
        if session.phase().is_over() {
            break;
        }
        session.compute_and_apply_ai_move().unwrap();
        turns += 1;
        assert!(turns <= 50);
    }

    assert_eq!(
        session.move_history().len() as u32,
        session.black_moves() + session.white_moves()
    );
}
