//! Core domain types: sides, pieces and board cells.

use crate::logic::Operator;
use derive_new::new;
use serde::{Deserialize, Serialize};

/// Board dimension (rows and columns).
pub const BOARD_SIZE: u8 = 8;

/// One of the two sides in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human player, starting on the bottom three rows.
    Player,
    /// The computer opponent, starting on the top three rows.
    Ai,
}

impl Side {
    /// Returns the opposing side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }

    /// Row direction a non-king piece of this side moves in.
    pub fn forward(self) -> i8 {
        match self {
            Side::Player => -1,
            Side::Ai => 1,
        }
    }

    /// Row on which this side's pieces are promoted.
    pub fn promotion_row(self) -> u8 {
        match self {
            Side::Player => 0,
            Side::Ai => BOARD_SIZE - 1,
        }
    }

    /// Rows this side's pieces occupy at the start of a game.
    pub fn starting_rows(self) -> std::ops::Range<u8> {
        match self {
            Side::Player => 5..BOARD_SIZE,
            Side::Ai => 0..3,
        }
    }

    /// Display name.
    pub fn label(self) -> &'static str {
        match self {
            Side::Player => "Player",
            Side::Ai => "AI",
        }
    }
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A checkers piece tagged with a logical operator.
///
/// The operator never changes. The king flag only ever goes from
/// `false` to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, new)]
pub struct Piece {
    owner: Side,
    operator: Operator,
    #[new(value = "false")]
    king: bool,
}

impl Piece {
    /// Creates an already-promoted piece.
    pub fn king(owner: Side, operator: Operator) -> Self {
        Self {
            owner,
            operator,
            king: true,
        }
    }

    /// Side that owns the piece.
    pub fn owner(&self) -> Side {
        self.owner
    }

    /// Operator the piece carries.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Whether the piece has been promoted.
    pub fn is_king(&self) -> bool {
        self.king
    }

    /// Promotes the piece. Idempotent.
    pub(crate) fn promote(&mut self) {
        self.king = true;
    }
}

/// A square on the board, addressed by row (0 at the top) and column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    row: u8,
    col: u8,
}

impl Cell {
    /// Creates a cell. Coordinates are not range-checked here; see
    /// [`Cell::in_bounds`].
    pub const fn new(row: u8, col: u8) -> Self {
        Self { row, col }
    }

    /// Row index.
    pub fn row(&self) -> u8 {
        self.row
    }

    /// Column index.
    pub fn col(&self) -> u8 {
        self.col
    }

    /// Whether the cell lies on the 8×8 board.
    pub fn in_bounds(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Pieces may only stand on dark squares, where `row + col` is odd.
    pub fn is_dark(&self) -> bool {
        (self.row ^ self.col) & 1 == 1
    }

    /// Signed `(row, col)` difference from `self` to `other`.
    pub fn delta(&self, other: Cell) -> (i8, i8) {
        (
            other.row as i8 - self.row as i8,
            other.col as i8 - self.col as i8,
        )
    }

    /// The cell halfway to `other`, if the distance is even on both axes.
    pub fn midpoint(&self, other: Cell) -> Option<Cell> {
        let (dr, dc) = self.delta(other);
        if dr % 2 != 0 || dc % 2 != 0 {
            return None;
        }
        self.offset(dr / 2, dc / 2)
    }

    /// Cell displaced by `(dr, dc)`, if it stays on the board.
    pub fn offset(&self, dr: i8, dc: i8) -> Option<Cell> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Cell::new(row as u8, col as u8))
        } else {
            None
        }
    }

    /// All 64 cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..BOARD_SIZE).flat_map(|row| (0..BOARD_SIZE).map(move |col| Cell::new(row, col)))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
