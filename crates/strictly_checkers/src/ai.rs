//! Computer opponent.

use crate::action::Move;
use crate::board::Board;
use crate::rules::legal_moves;
use crate::types::Side;
use rand::Rng;
use tracing::{debug, instrument};

/// Picks uniformly among every legal move for `side`.
///
/// Returns `None` when `side` cannot move. The AI never answers a
/// challenge; its moves are always committed.
#[instrument(skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(board: &Board, side: Side, rng: &mut R) -> Option<Move> {
    let moves = legal_moves(board, side);
    if moves.is_empty() {
        debug!("No legal moves available");
        return None;
    }
    let chosen = moves[rng.random_range(0..moves.len())];
    debug!(candidates = moves.len(), %chosen, "AI chose move");
    Some(chosen)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Operator, Piece};
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_choice_is_always_legal() {
        let board = Board::initial(&mut StdRng::seed_from_u64(5));
        let mut rng = StdRng::seed_from_u64(6);
        let legal = legal_moves(&board, Side::Ai);
        for _ in 0..20 {
            let mv = choose_move(&board, Side::Ai, &mut rng).unwrap();
            assert!(legal.contains(&mv));
        }
    }

    #[test]
    fn test_no_pieces_no_move() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 0), Piece::new(Side::Player, Operator::And)).unwrap();
        assert_eq!(choose_move(&board, Side::Ai, &mut rand::rng()), None);
    }
}
