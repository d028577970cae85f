//! Move application.

use super::movement::check_move;
use crate::action::{InvalidMove, Move, MoveKind};
use crate::board::Board;
use crate::types::{Cell, Piece};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Board after a move, plus what the move did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppliedMove {
    /// The resulting board.
    pub board: Board,
    /// The move that was applied.
    pub action: Move,
    /// The piece that was removed, if the move captured.
    pub captured: Option<(Cell, Piece)>,
    /// Whether the moving piece was promoted by this move.
    pub promoted: bool,
}

impl AppliedMove {
    /// Whether the move was a capture.
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Validates and applies a move, returning the new board.
///
/// A capture clears the jumped cell. Landing on the opponent's back rank
/// promotes the piece; a king stays a king.
#[instrument(skip(board), fields(action = %action))]
pub fn apply_move(board: &Board, action: Move) -> Result<AppliedMove, InvalidMove> {
    let kind = check_move(board, action.from, action.to)?;

    let mut next = board.clone();
    let mut piece = next
        .take(action.from)
        .ok_or(InvalidMove::NoPiece(action.from))?;

    let captured = match kind {
        MoveKind::Step => None,
        MoveKind::Capture { captured } => next.take(captured).map(|victim| (captured, victim)),
    };

    let promoted = !piece.is_king() && action.to.row() == piece.owner().promotion_row();
    if promoted {
        piece.promote();
    }

    next.place(action.to, piece)
        .map_err(|_| InvalidMove::OutOfBounds(action.to))?;

    debug!(
        capture = captured.is_some(),
        promoted,
        "Move applied"
    );

    Ok(AppliedMove {
        board: next,
        action,
        captured,
        promoted,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::Operator;
    use crate::types::Side;

    #[test]
    fn test_step_moves_piece_only() {
        let mut board = Board::empty();
        let piece = Piece::new(Side::Player, Operator::And);
        board.place(Cell::new(5, 2), piece).unwrap();
        board.place(Cell::new(3, 2), Piece::new(Side::Ai, Operator::Or)).unwrap();

        let applied = apply_move(&board, Move::new(Cell::new(5, 2), Cell::new(4, 3))).unwrap();
        assert!(applied.board.is_empty(Cell::new(5, 2)));
        assert_eq!(applied.board.get(Cell::new(4, 3)), Some(piece));
        assert!(!applied.is_capture());
        assert_eq!(applied.board.count(Side::Ai), 1);
    }

    #[test]
    fn test_capture_clears_midpoint() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 2), Piece::new(Side::Player, Operator::And)).unwrap();
        let victim = Piece::new(Side::Ai, Operator::Or);
        board.place(Cell::new(4, 3), victim).unwrap();

        let applied = apply_move(&board, Move::new(Cell::new(5, 2), Cell::new(3, 4))).unwrap();
        assert_eq!(applied.captured, Some((Cell::new(4, 3), victim)));
        assert!(applied.board.is_empty(Cell::new(4, 3)));
        assert_eq!(applied.board.count(Side::Ai), 0);
        // The input board is untouched.
        assert_eq!(board.count(Side::Ai), 1);
    }

    #[test]
    fn test_promotion_on_back_rank() {
        let mut board = Board::empty();
        board.place(Cell::new(1, 2), Piece::new(Side::Player, Operator::Not)).unwrap();
        board.place(Cell::new(6, 1), Piece::new(Side::Ai, Operator::Not)).unwrap();

        let applied = apply_move(&board, Move::new(Cell::new(1, 2), Cell::new(0, 1))).unwrap();
        assert!(applied.promoted);
        assert!(applied.board.get(Cell::new(0, 1)).unwrap().is_king());

        let applied = apply_move(&applied.board, Move::new(Cell::new(6, 1), Cell::new(7, 0))).unwrap();
        assert!(applied.promoted);
        assert!(applied.board.get(Cell::new(7, 0)).unwrap().is_king());
    }

    #[test]
    fn test_king_stays_king_off_back_rank() {
        let mut board = Board::empty();
        board.place(Cell::new(0, 1), Piece::king(Side::Player, Operator::Implies)).unwrap();

        let applied = apply_move(&board, Move::new(Cell::new(0, 1), Cell::new(1, 2))).unwrap();
        assert!(!applied.promoted);
        assert!(applied.board.get(Cell::new(1, 2)).unwrap().is_king());
    }

    #[test]
    fn test_illegal_move_leaves_board() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 2), Piece::new(Side::Player, Operator::And)).unwrap();
        assert_eq!(
            apply_move(&board, Move::new(Cell::new(5, 2), Cell::new(6, 3))),
            Err(InvalidMove::WrongDirection)
        );
    }
}
