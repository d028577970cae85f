//! Move legality.

use crate::action::{InvalidMove, Move, MoveKind};
use crate::board::Board;
use crate::types::{Cell, Side};
use tracing::instrument;

/// Classifies a move, or explains why it is illegal.
///
/// Checks, in order: both cells on the board, a piece on `from`, an empty
/// destination, a diagonal path, forward direction for non-kings, and a
/// step of one, or of two over an opposing piece.
#[instrument(skip(board))]
pub fn check_move(board: &Board, from: Cell, to: Cell) -> Result<MoveKind, InvalidMove> {
    if !from.in_bounds() {
        return Err(InvalidMove::OutOfBounds(from));
    }
    if !to.in_bounds() {
        return Err(InvalidMove::OutOfBounds(to));
    }

    let piece = board.get(from).ok_or(InvalidMove::NoPiece(from))?;

    if !board.is_empty(to) {
        return Err(InvalidMove::DestinationOccupied(to));
    }

    let (dr, dc) = from.delta(to);
    if dr.abs() != dc.abs() {
        return Err(InvalidMove::NotDiagonal);
    }

    if !piece.is_king() && dr.signum() != piece.owner().forward() {
        return Err(InvalidMove::WrongDirection);
    }

    match dr.abs() {
        1 => Ok(MoveKind::Step),
        2 => {
            let mid = from.midpoint(to).ok_or(InvalidMove::TooFar)?;
            match board.get(mid) {
                Some(victim) if victim.owner() != piece.owner() => {
                    Ok(MoveKind::Capture { captured: mid })
                }
                _ => Err(InvalidMove::NothingToCapture(mid)),
            }
        }
        _ => Err(InvalidMove::TooFar),
    }
}

/// Whether the piece on `from` may move to `to`.
pub fn is_legal_move(board: &Board, from: Cell, to: Cell) -> bool {
    check_move(board, from, to).is_ok()
}

/// Every cell the piece on `from` may move to, scanning all 64 cells.
#[instrument(skip(board))]
pub fn legal_destinations(board: &Board, from: Cell) -> Vec<Cell> {
    Cell::all()
        .filter(|to| is_legal_move(board, from, *to))
        .collect()
}

/// Every legal move available to `side`.
#[instrument(skip(board))]
pub fn legal_moves(board: &Board, side: Side) -> Vec<Move> {
    board
        .cells_of(side)
        .flat_map(|from| {
            legal_destinations(board, from)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}
