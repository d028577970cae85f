//! Error types.

use crate::action::InvalidMove;
use crate::types::Side;
use derive_more::{Display, Error};
use tracing::instrument;

/// Error returned by a session operation. None of these change state.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The proposed move breaks a movement rule.
    #[display("Invalid move: {}", _0)]
    InvalidMove(InvalidMove),

    /// Submit was pressed before choosing True or False.
    #[display("Please select an answer first!")]
    NoAnswerSelected,

    /// An answer, skip or timeout arrived with no challenge open.
    #[display("No challenge is active")]
    NoActiveChallenge,

    /// A board action arrived while a challenge is open.
    #[display("Answer the current challenge first")]
    ChallengeInProgress,

    /// The action belongs to the other side's turn.
    #[display("It's not {}'s turn", _0)]
    NotYourTurn(Side),

    /// The game has ended; only a new game is accepted.
    #[display("Game is already over")]
    GameOver,

    /// A postcondition failed after a move.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for GameError {}

impl From<InvalidMove> for GameError {
    fn from(err: InvalidMove) -> Self {
        GameError::InvalidMove(err)
    }
}

/// Configuration error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
