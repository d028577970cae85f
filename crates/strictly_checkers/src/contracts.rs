//! Contract-based validation for moves.
//!
//! Contracts state correctness as preconditions and postconditions:
//! `{P(board, move)} apply {Q(before, after)}`.

use crate::action::{InvalidMove, Move};
use crate::board::Board;
use crate::error::GameError;
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::rules::check_move;
use crate::types::Side;
use tracing::{instrument, warn};

/// A contract defines preconditions and postconditions for state transitions.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), GameError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), GameError>;
}

/// A move proposed by a particular side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Proposed {
    /// Side making the move.
    pub side: Side,
    /// The move.
    pub action: Move,
}

impl Proposed {
    /// Creates a proposed move.
    pub fn new(side: Side, action: Move) -> Self {
        Self { side, action }
    }
}

/// Precondition: the moving piece belongs to the side making the move.
pub struct PieceBelongsToMover;

impl PieceBelongsToMover {
    /// Checks the precondition.
    #[instrument(skip(board))]
    pub fn check(proposed: &Proposed, board: &Board) -> Result<(), GameError> {
        let from = proposed.action.from;
        match board.get(from) {
            None => Err(InvalidMove::NoPiece(from).into()),
            Some(piece) if piece.owner() != proposed.side => {
                Err(InvalidMove::NotYourPiece(from, piece.owner()).into())
            }
            Some(_) => Ok(()),
        }
    }
}

/// Precondition: the move obeys the movement rules.
pub struct FollowsMovementRules;

impl FollowsMovementRules {
    /// Checks the precondition.
    #[instrument(skip(board))]
    pub fn check(proposed: &Proposed, board: &Board) -> Result<(), GameError> {
        check_move(board, proposed.action.from, proposed.action.to)?;
        Ok(())
    }
}

/// Contract for moves.
///
/// Preconditions:
/// - The piece belongs to the mover
/// - The move obeys the movement rules
///
/// Postconditions:
/// - Board invariants hold
/// - Neither side gained pieces
/// - No king was demoted
pub struct MoveContract;

impl Contract<Board, Proposed> for MoveContract {
    fn pre(board: &Board, proposed: &Proposed) -> Result<(), GameError> {
        PieceBelongsToMover::check(proposed, board)?;
        FollowsMovementRules::check(proposed, board)
    }

    fn post(before: &Board, after: &Board) -> Result<(), GameError> {
        let mut problems: Vec<String> = BoardInvariants::check_all(after)
            .err()
            .unwrap_or_default()
            .into_iter()
            .map(|v| v.description)
            .collect();

        for side in [Side::Player, Side::Ai] {
            let (was, now) = (before.count(side), after.count(side));
            if now > was {
                problems.push(format!("{side} gained pieces ({was} -> {now})"));
                continue;
            }
            // Kings may only disappear by being captured.
            if after.kings(side) + (was - now) < before.kings(side) {
                problems.push(format!("{side} lost a king without a capture"));
            }
        }

        if problems.is_empty() {
            Ok(())
        } else {
            warn!(?problems, "Move postcondition failed");
            Err(GameError::InvariantViolation(format!(
                "Postcondition failed: {}",
                problems.join("; ")
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::apply_move;
    use crate::{Cell, Operator, Piece};

    fn setup() -> Board {
        let mut board = Board::empty();
        board.place(Cell::new(5, 2), Piece::new(Side::Player, Operator::And)).unwrap();
        board.place(Cell::new(4, 3), Piece::new(Side::Ai, Operator::Or)).unwrap();
        board
    }

    #[test]
    fn test_precondition_legal_move() {
        let board = setup();
        let proposed = Proposed::new(Side::Player, Move::new(Cell::new(5, 2), Cell::new(4, 1)));
        assert!(MoveContract::pre(&board, &proposed).is_ok());
    }

    #[test]
    fn test_precondition_wrong_owner() {
        let board = setup();
        let proposed = Proposed::new(Side::Ai, Move::new(Cell::new(5, 2), Cell::new(4, 1)));
        assert!(matches!(
            MoveContract::pre(&board, &proposed),
            Err(GameError::InvalidMove(InvalidMove::NotYourPiece(_, Side::Player)))
        ));
    }

    #[test]
    fn test_precondition_occupied_square() {
        let board = setup();
        let proposed = Proposed::new(Side::Player, Move::new(Cell::new(5, 2), Cell::new(4, 3)));
        assert!(matches!(
            MoveContract::pre(&board, &proposed),
            Err(GameError::InvalidMove(InvalidMove::DestinationOccupied(_)))
        ));
    }

    #[test]
    fn test_postcondition_holds_after_capture() {
        let board = setup();
        let applied = apply_move(&board, Move::new(Cell::new(5, 2), Cell::new(3, 4))).unwrap();
        assert!(MoveContract::post(&board, &applied.board).is_ok());
    }

    #[test]
    fn test_postcondition_detects_demoted_king() {
        let mut before = Board::empty();
        before.place(Cell::new(2, 3), Piece::king(Side::Player, Operator::Not)).unwrap();
        let mut after = Board::empty();
        after.place(Cell::new(3, 4), Piece::new(Side::Player, Operator::Not)).unwrap();
        assert!(matches!(
            MoveContract::post(&before, &after),
            Err(GameError::InvariantViolation(_))
        ));
    }

    #[test]
    fn test_postcondition_detects_spawned_piece() {
        let before = setup();
        let mut after = before.clone();
        after.place(Cell::new(0, 1), Piece::king(Side::Player, Operator::Or)).unwrap();
        assert!(MoveContract::post(&before, &after).is_err());
    }
}
