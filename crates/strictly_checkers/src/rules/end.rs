//! End-of-game detection.

use super::movement::legal_moves;
use crate::board::Board;
use crate::phases::{EndReason, Outcome};
use crate::types::Side;
use tracing::instrument;

/// Checks whether `to_move` has lost before making a move.
///
/// A side with no pieces, or with pieces but no legal move, loses; the
/// opponent is declared winner. An opponent already wiped out also ends
/// the game, in favour of `to_move`.
#[instrument(skip(board))]
pub fn check_outcome(board: &Board, to_move: Side) -> Option<Outcome> {
    if board.count(to_move) == 0 {
        return Some(Outcome::new(to_move.opponent(), EndReason::NoPieces));
    }
    if board.count(to_move.opponent()) == 0 {
        return Some(Outcome::new(to_move, EndReason::NoPieces));
    }
    if legal_moves(board, to_move).is_empty() {
        return Some(Outcome::new(to_move.opponent(), EndReason::NoLegalMoves));
    }
    None
}
