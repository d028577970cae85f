//! Game phases and outcomes.

use crate::types::Side;
use serde::{Deserialize, Serialize};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EndReason {
    /// The losing side had no pieces left.
    NoPieces,
    /// The losing side had pieces but no legal move.
    NoLegalMoves,
}

/// Outcome of a finished game. There are no draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Outcome {
    winner: Side,
    reason: EndReason,
}

impl Outcome {
    /// Creates an outcome.
    pub fn new(winner: Side, reason: EndReason) -> Self {
        Self { winner, reason }
    }

    /// The winning side.
    pub fn winner(&self) -> Side {
        self.winner
    }

    /// Why the loser lost.
    pub fn reason(&self) -> EndReason {
        self.reason
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.winner {
            Side::Player => write!(f, "Game over. You win!"),
            Side::Ai => write!(f, "Game over. AI wins!"),
        }
    }
}

/// Top-level phase of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// Moves are being played.
    Playing,
    /// Terminal until a new game is started.
    Ended(Outcome),
}

impl Phase {
    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        matches!(self, Phase::Ended(_))
    }

    /// Winner, if the game has ended.
    pub fn winner(&self) -> Option<Side> {
        match self {
            Phase::Playing => None,
            Phase::Ended(outcome) => Some(outcome.winner()),
        }
    }
}
