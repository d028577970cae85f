//! First-class move types.
//!
//! A move is the player's intent: a piece going from one cell to another.
//! It can be validated against a board before anything is changed.

use crate::types::{Cell, Side};
use serde::{Deserialize, Serialize};

/// A proposed relocation of the piece on `from` to `to`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// Source cell.
    pub from: Cell,
    /// Destination cell.
    pub to: Cell,
}

impl Move {
    /// Creates a new move.
    pub fn new(from: Cell, to: Cell) -> Self {
        Self { from, to }
    }

    /// Number of rows travelled.
    pub fn distance(&self) -> u8 {
        self.from.delta(self.to).0.unsigned_abs()
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// What a legal move does to the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveKind {
    /// One diagonal step.
    Step,
    /// Two diagonal steps over an opposing piece, which is removed.
    Capture {
        /// Cell of the piece being captured.
        captured: Cell,
    },
}

/// Reason a move was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum InvalidMove {
    /// A coordinate lies off the board.
    #[display("{} is off the board", _0)]
    OutOfBounds(Cell),

    /// There is no piece on the source cell.
    #[display("No piece at {}", _0)]
    NoPiece(Cell),

    /// The piece belongs to the other side.
    #[display("The piece at {} belongs to {}", _0, _1)]
    NotYourPiece(Cell, Side),

    /// The destination already holds a piece.
    #[display("Square {} is already occupied", _0)]
    DestinationOccupied(Cell),

    /// The move is not along a diagonal.
    #[display("Pieces only move diagonally")]
    NotDiagonal,

    /// A non-king piece tried to move away from the opponent.
    #[display("Only kings may move backwards")]
    WrongDirection,

    /// A two-step move without an opposing piece in between.
    #[display("No opposing piece to capture at {}", _0)]
    NothingToCapture(Cell),

    /// More than two steps.
    #[display("Pieces move one step, or two when capturing")]
    TooFar,
}

impl std::error::Error for InvalidMove {}
