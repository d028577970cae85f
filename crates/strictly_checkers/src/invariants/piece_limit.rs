//! Piece-limit invariant: no side ever has more than it started with.

use super::Invariant;
use crate::board::Board;
use crate::types::Side;

/// Pieces each side starts with.
pub const STARTING_PIECES: usize = 12;

/// Invariant: each side has at most twelve pieces.
pub struct PieceLimitInvariant;

impl Invariant<Board> for PieceLimitInvariant {
    fn holds(board: &Board) -> bool {
        [Side::Player, Side::Ai]
            .into_iter()
            .all(|side| board.count(side) <= STARTING_PIECES)
    }

    fn description() -> &'static str {
        "Each side has at most twelve pieces"
    }
}
