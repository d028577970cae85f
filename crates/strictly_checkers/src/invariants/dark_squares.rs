//! Dark-square invariant: pieces only ever stand where `row + col` is odd.

use super::Invariant;
use crate::board::Board;

/// Invariant: every piece stands on a dark square.
pub struct DarkSquaresInvariant;

impl Invariant<Board> for DarkSquaresInvariant {
    fn holds(board: &Board) -> bool {
        board.pieces().all(|(cell, _)| cell.is_dark())
    }

    fn description() -> &'static str {
        "Pieces only occupy dark squares"
    }
}
