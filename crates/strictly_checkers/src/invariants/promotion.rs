//! Promotion invariant: a man that reaches the far row is crowned on arrival.

use super::Invariant;
use crate::board::Board;

/// Invariant: no unpromoted piece rests on its promotion row.
pub struct PromotionInvariant;

impl Invariant<Board> for PromotionInvariant {
    fn holds(board: &Board) -> bool {
        board
            .pieces()
            .all(|(cell, piece)| piece.is_king() || cell.row() != piece.owner().promotion_row())
    }

    fn description() -> &'static str {
        "Pieces on the opponent's back rank are kings"
    }
}
