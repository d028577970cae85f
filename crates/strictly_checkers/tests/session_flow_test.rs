//! End-to-end tests for the checkers session state machine.

use strictly_checkers::{
    BoardInvariants, Board, Cell, CheckersGame, Command, EndReason, Event, GameConfig, GameError,
    InvariantSet, Operator, Phase, Piece, Side, Tick, Verdict, legal_moves,
};

fn seeded(seed: u64) -> GameConfig {
    GameConfig::default().with_seed(Some(seed))
}

fn board_with(pieces: &[(u8, u8, Piece)]) -> Board {
    let mut board = Board::empty();
    for &(row, col, piece) in pieces {
        board.place(Cell::new(row, col), piece).unwrap();
    }
    board
}

#[test]
fn test_correct_answer_commits_move() {
    let mut game = CheckersGame::new(seeded(1));
    let from = Cell::new(5, 0);
    let to = Cell::new(4, 1);

    let active = game.attempt_move(from, to).unwrap();
    let challenge = active.challenge();
    let hidden = challenge
        .presented_rows()
        .iter()
        .filter(|row| row.output.is_none())
        .count();
    assert_eq!(hidden, 1);
    assert_eq!(challenge.rows().len(), 4);
    assert_eq!(
        challenge.correct_answer(),
        challenge.rows()[challenge.hidden_index()].output
    );

    let answer = challenge.correct_answer();
    let resolution = game.submit_answer(answer).unwrap();
    assert_eq!(resolution.verdict, Verdict::Accepted);
    assert_eq!(resolution.message, "Correct! Great job!");
    assert!(game.board().is_empty(from));
    assert_eq!(game.board().get(to).map(|p| p.owner()), Some(Side::Player));
    assert_eq!(game.current_scores(), (2, 0));
    assert_eq!(game.to_move(), Side::Ai);
}

#[test]
fn test_wrong_answer_leaves_board_and_switches_turn() {
    let mut game = CheckersGame::new(seeded(2));
    let before = game.board().clone();

    let answer = game
        .attempt_move(Cell::new(5, 2), Cell::new(4, 3))
        .unwrap()
        .challenge()
        .correct_answer();
    let resolution = game.submit_answer(!answer).unwrap();

    assert_eq!(resolution.verdict, Verdict::Incorrect);
    assert!(resolution.committed.is_none());
    assert!(resolution.message.starts_with("Incorrect. The answer was"));
    assert_eq!(game.board(), &before);
    assert_eq!(game.current_scores(), (0, 0));
    assert_eq!(game.to_move(), Side::Ai);
}

#[test]
fn test_capturing_last_piece_ends_game() {
    let board = board_with(&[
        (4, 1, Piece::new(Side::Player, Operator::Or)),
        (3, 2, Piece::new(Side::Ai, Operator::And)),
    ]);
    let mut game = CheckersGame::with_board(seeded(3), board).unwrap();

    let answer = game
        .attempt_move(Cell::new(4, 1), Cell::new(2, 3))
        .unwrap()
        .challenge()
        .correct_answer();
    let resolution = game.submit_answer(answer).unwrap();

    let summary = resolution.committed.unwrap();
    assert_eq!(summary.captured, Some(Cell::new(3, 2)));
    assert_eq!(summary.points, 7);
    assert_eq!(game.current_scores(), (7, 0));

    let outcome = resolution.outcome.unwrap();
    assert_eq!(outcome.winner(), Side::Player);
    assert_eq!(outcome.reason(), EndReason::NoPieces);
    assert_eq!(game.winner(), Some(Side::Player));
    assert!(game.phase().is_over());

    assert_eq!(
        game.attempt_move(Cell::new(2, 3), Cell::new(1, 2)).err(),
        Some(GameError::GameOver)
    );
    assert_eq!(game.dispatch(Command::AiTurn), Err(GameError::GameOver));
    assert_eq!(game.dispatch(Command::Skip), Err(GameError::GameOver));

    assert_eq!(game.dispatch(Command::NewGame), Ok(Event::NewGame));
    assert_eq!(game.phase(), Phase::Playing);
    assert_eq!(game.current_scores(), (0, 0));
}

#[test]
fn test_board_without_ai_pieces_is_already_won() {
    let board = board_with(&[(5, 2, Piece::new(Side::Player, Operator::Not))]);
    let mut game = CheckersGame::with_board(seeded(4), board).unwrap();
    assert_eq!(game.winner(), Some(Side::Player));
    assert_eq!(game.click(Cell::new(5, 2)), Err(GameError::GameOver));
}

#[test]
fn test_skip_at_zero_stays_at_zero() {
    let mut game = CheckersGame::new(seeded(5));
    game.attempt_move(Cell::new(5, 4), Cell::new(4, 5)).unwrap();
    let resolution = game.skip_challenge().unwrap();
    assert_eq!(resolution.verdict, Verdict::Skipped);
    assert_eq!(resolution.penalty, 0);
    assert!(resolution.message.starts_with("Challenge skipped. -1 point."));
    assert_eq!(game.current_scores(), (0, 0));
    assert_eq!(game.to_move(), Side::Ai);
}

#[test]
fn test_skip_costs_a_point_after_scoring() {
    let board = board_with(&[
        (5, 0, Piece::new(Side::Player, Operator::And)),
        (5, 6, Piece::new(Side::Player, Operator::Or)),
        (0, 7, Piece::new(Side::Ai, Operator::Not)),
    ]);
    let mut game = CheckersGame::with_board(seeded(6), board).unwrap();

    let answer = game
        .attempt_move(Cell::new(5, 0), Cell::new(4, 1))
        .unwrap()
        .challenge()
        .correct_answer();
    game.submit_answer(answer).unwrap();
    game.play_ai_turn().unwrap();
    assert_eq!(game.current_scores(), (2, 2));

    game.attempt_move(Cell::new(5, 6), Cell::new(4, 5)).unwrap();
    let resolution = game.skip_challenge().unwrap();
    assert_eq!(resolution.penalty, 1);
    assert_eq!(game.current_scores(), (1, 2));
}

#[test]
fn test_submit_without_choice_changes_nothing() {
    let mut game = CheckersGame::new(seeded(7));
    game.attempt_move(Cell::new(5, 6), Cell::new(4, 7)).unwrap();
    let before = game.state().clone();
    assert_eq!(game.submit(), Err(GameError::NoAnswerSelected));
    assert_eq!(game.state(), &before);
}

#[test]
fn test_answers_require_a_challenge() {
    let mut game = CheckersGame::new(seeded(8));
    assert_eq!(game.submit(), Err(GameError::NoActiveChallenge));
    assert_eq!(game.skip_challenge(), Err(GameError::NoActiveChallenge));
    assert_eq!(game.on_timeout(), Err(GameError::NoActiveChallenge));
    assert_eq!(game.choose_answer(true), Err(GameError::NoActiveChallenge));
}

#[test]
fn test_timeout_rejects_move() {
    let mut game = CheckersGame::new(seeded(9));
    let before = game.board().clone();
    game.attempt_move(Cell::new(5, 2), Cell::new(4, 1)).unwrap();
    let resolution = game.on_timeout().unwrap();
    assert_eq!(resolution.verdict, Verdict::TimedOut);
    assert!(resolution.message.starts_with("Time's up!"));
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Side::Ai);
}

#[test]
fn test_old_timer_cannot_touch_next_challenge() {
    let mut game = CheckersGame::new(seeded(10));
    let first = game
        .attempt_move(Cell::new(5, 2), Cell::new(4, 1))
        .unwrap()
        .id();
    game.skip_challenge().unwrap();
    game.play_ai_turn().unwrap();

    let second = game
        .attempt_move(Cell::new(5, 4), Cell::new(4, 5))
        .unwrap()
        .id();
    assert_ne!(first, second);

    assert_eq!(game.dispatch(Command::Tick(first)), Ok(Event::Ticked(Tick::Stale)));
    assert_eq!(game.active_challenge().unwrap().remaining(), 120);
    assert_eq!(
        game.dispatch(Command::Tick(second)),
        Ok(Event::Ticked(Tick::Remaining(119)))
    );
}

#[test]
fn test_illegal_move_is_rejected_without_state_change() {
    let mut game = CheckersGame::new(seeded(11));
    let before = game.board().clone();
    // Occupied destination.
    assert!(matches!(
        game.attempt_move(Cell::new(6, 1), Cell::new(5, 0)),
        Err(GameError::InvalidMove(_))
    ));
    // Not a player piece.
    assert!(matches!(
        game.attempt_move(Cell::new(2, 1), Cell::new(3, 0)),
        Err(GameError::InvalidMove(_))
    ));
    assert_eq!(game.board(), &before);
    assert_eq!(game.to_move(), Side::Player);
    assert!(game.active_challenge().is_none());
}

#[test]
fn test_promotion_is_permanent() {
    let board = board_with(&[
        (1, 2, Piece::new(Side::Player, Operator::Biconditional)),
        (2, 7, Piece::new(Side::Ai, Operator::Or)),
    ]);
    let mut game = CheckersGame::with_board(seeded(12), board).unwrap();

    let answer = game
        .attempt_move(Cell::new(1, 2), Cell::new(0, 3))
        .unwrap()
        .challenge()
        .correct_answer();
    let resolution = game.submit_answer(answer).unwrap();
    assert!(resolution.committed.unwrap().promoted);
    assert!(game.board().get(Cell::new(0, 3)).unwrap().is_king());

    game.play_ai_turn().unwrap();

    // A king may now step backwards.
    let answer = game
        .attempt_move(Cell::new(0, 3), Cell::new(1, 4))
        .unwrap()
        .challenge()
        .correct_answer();
    game.submit_answer(answer).unwrap();
    let king = game.board().get(Cell::new(1, 4)).unwrap();
    assert!(king.is_king());
    assert_eq!(king.operator(), Operator::Biconditional);
}

#[test]
fn test_seeded_sessions_are_reproducible() {
    let a = CheckersGame::new(seeded(42));
    let b = CheckersGame::new(seeded(42));
    assert_eq!(a.board(), b.board());
}

#[test]
fn test_long_play_keeps_board_invariants() {
    let mut game = CheckersGame::new(seeded(99));
    for _ in 0..300 {
        if game.phase().is_over() {
            break;
        }
        match game.to_move() {
            Side::Player => {
                let action = legal_moves(game.board(), Side::Player)[0];
                let answer = game
                    .attempt_move(action.from, action.to)
                    .unwrap()
                    .challenge()
                    .correct_answer();
                game.submit_answer(answer).unwrap();
            }
            Side::Ai => {
                game.play_ai_turn().unwrap();
            }
        }
        assert!(BoardInvariants::check_all(game.board()).is_ok());
    }
    let (player, ai) = game.current_scores();
    assert!(player >= 2 && ai >= 2);
}
