//! 8×8 board storage.

use crate::logic::Operator;
use crate::types::{BOARD_SIZE, Cell, Piece, Side};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

const N: usize = BOARD_SIZE as usize;

/// Grid of optional pieces, row-major, row 0 at the top.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Option<Piece>; N]; N],
}

impl Board {
    /// Creates a board with no pieces.
    pub fn empty() -> Self {
        Self {
            cells: [[None; N]; N],
        }
    }

    /// Sets up a new game: every dark square of the bottom three rows
    /// holds a player piece, every dark square of the top three rows an AI
    /// piece. Each piece draws its operator independently.
    #[instrument(skip(rng))]
    pub fn initial<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::empty();
        for side in [Side::Player, Side::Ai] {
            for row in side.starting_rows() {
                for col in 0..BOARD_SIZE {
                    let cell = Cell::new(row, col);
                    if cell.is_dark() {
                        board.cells[row as usize][col as usize] =
                            Some(Piece::new(side, Operator::random(rng)));
                    }
                }
            }
        }
        debug!(
            player = board.count(Side::Player),
            ai = board.count(Side::Ai),
            "Initial board placed"
        );
        board
    }

    /// Piece on a cell. Off-board cells are empty.
    pub fn get(&self, cell: Cell) -> Option<Piece> {
        if !cell.in_bounds() {
            return None;
        }
        self.cells[cell.row() as usize][cell.col() as usize]
    }

    /// Checks if a cell holds no piece.
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell).is_none()
    }

    /// Places a piece on a dark, on-board cell, replacing whatever was there.
    pub fn place(&mut self, cell: Cell, piece: Piece) -> Result<(), &'static str> {
        if !cell.in_bounds() {
            return Err("Cell out of bounds");
        }
        if !cell.is_dark() {
            return Err("Pieces may only stand on dark squares");
        }
        self.cells[cell.row() as usize][cell.col() as usize] = Some(piece);
        Ok(())
    }

    /// Removes and returns the piece on a cell.
    pub fn take(&mut self, cell: Cell) -> Option<Piece> {
        if !cell.in_bounds() {
            return None;
        }
        self.cells[cell.row() as usize][cell.col() as usize].take()
    }

    /// Every occupied cell with its piece, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Cell, Piece)> + '_ {
        Cell::all().filter_map(|cell| self.get(cell).map(|piece| (cell, piece)))
    }

    /// Cells holding pieces of `side`.
    pub fn cells_of(&self, side: Side) -> impl Iterator<Item = Cell> + '_ {
        self.pieces()
            .filter(move |(_, piece)| piece.owner() == side)
            .map(|(cell, _)| cell)
    }

    /// Number of pieces `side` has left.
    pub fn count(&self, side: Side) -> usize {
        self.cells_of(side).count()
    }

    /// Number of kings `side` has.
    pub fn kings(&self, side: Side) -> usize {
        self.pieces()
            .filter(|(_, piece)| piece.owner() == side && piece.is_king())
            .count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_initial_layout() {
        let board = Board::initial(&mut StdRng::seed_from_u64(1));
        assert_eq!(board.count(Side::Player), 12);
        assert_eq!(board.count(Side::Ai), 12);
        for (cell, piece) in board.pieces() {
            assert!(cell.is_dark(), "{cell} is light");
            assert!(!piece.is_king());
            match piece.owner() {
                Side::Player => assert!(cell.row() >= 5),
                Side::Ai => assert!(cell.row() <= 2),
            }
        }
        for row in 3..5 {
            for col in 0..BOARD_SIZE {
                assert!(board.is_empty(Cell::new(row, col)));
            }
        }
    }

    #[test]
    fn test_place_rejects_light_square() {
        let mut board = Board::empty();
        let piece = Piece::new(Side::Player, Operator::Or);
        assert!(board.place(Cell::new(0, 0), piece).is_err());
        assert!(board.place(Cell::new(8, 1), piece).is_err());
        assert!(board.place(Cell::new(0, 1), piece).is_ok());
        assert_eq!(board.get(Cell::new(0, 1)), Some(piece));
    }

    #[test]
    fn test_take_empties_cell() {
        let mut board = Board::empty();
        let piece = Piece::new(Side::Ai, Operator::Not);
        board.place(Cell::new(2, 3), piece).unwrap();
        assert_eq!(board.take(Cell::new(2, 3)), Some(piece));
        assert!(board.is_empty(Cell::new(2, 3)));
    }
}
