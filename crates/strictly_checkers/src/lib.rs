//! Strictly Checkers - checkers where every move is gated by a truth table
//!
//! Each piece carries a propositional-logic operator. Moving a piece opens
//! a challenge: a four-row truth table for that operator with one output
//! hidden. Answer it correctly and the move goes through; answer wrongly,
//! skip, or run out of time and the turn is lost. The AI opponent moves at
//! random and never has to answer.
//!
//! # Architecture
//!
//! - **Logic**: operators, selection pools and the evaluator
//! - **Rules**: movement legality, capture, promotion and end detection
//! - **Challenge**: truth-table generation, explanations and hints
//! - **Session**: [`CheckersGame`], the state machine driven by [`Command`]s
//! - **Snapshot**: serializable views for a presentation layer
//!
//! # Example
//!
//! ```
//! use strictly_checkers::{Cell, CheckersGame, GameConfig, Side};
//!
//! let mut game = CheckersGame::new(GameConfig::default().with_seed(Some(7)));
//! let answer = game
//!     .attempt_move(Cell::new(5, 0), Cell::new(4, 1))?
//!     .challenge()
//!     .correct_answer();
//! let resolution = game.submit_answer(answer)?;
//! assert!(resolution.verdict.is_accepted());
//! assert_eq!(game.to_move(), Side::Ai);
//! # Ok::<(), strictly_checkers::GameError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod action;
mod ai;
mod board;
mod challenge;
mod config;
mod contracts;
mod error;
mod game;
mod hints;
mod invariants;
mod logic;
mod phases;
mod rules;
mod session;
mod snapshot;
mod types;

// Crate-level exports - Core types
pub use action::{InvalidMove, Move, MoveKind};
pub use board::Board;
pub use types::{BOARD_SIZE, Cell, Piece, Side};

// Crate-level exports - Logic evaluator
pub use logic::{
    ComplexExpression, Expression, ImplicationVariant, Operator, Selection, TautologyFormula,
    evaluate, formula_for,
};

// Crate-level exports - Rules
pub use ai::choose_move;
pub use rules::{
    AppliedMove, apply_move, check_move, check_outcome, is_legal_move, legal_destinations,
    legal_moves,
};

// Crate-level exports - Challenges and hints
pub use challenge::{
    AnswerOption, Challenge, INPUTS, OPTIONS, PresentedRow, TruthRow, letter, word,
};
pub use hints::{NO_CHALLENGE_HINT, hint_for};

// Crate-level exports - Contracts and invariants
pub use contracts::{Contract, FollowsMovementRules, MoveContract, PieceBelongsToMover, Proposed};
pub use invariants::{
    BoardInvariants, DarkSquaresInvariant, Invariant, InvariantSet, InvariantViolation,
    PieceLimitInvariant, PromotionInvariant,
};
pub use invariants::piece_limit::STARTING_PIECES;

// Crate-level exports - Session
pub use config::GameConfig;
pub use error::{ConfigError, GameError};
pub use game::{ActiveChallenge, ChallengeId, GameState, Scores, TurnPhase};
pub use phases::{EndReason, Outcome, Phase};
pub use session::{
    AiMove, CheckersGame, Command, Event, MISSING_DATA, MoveSummary, Resolution, Tick, Verdict,
};
pub use snapshot::{BoardSnapshot, ChallengeView, GameSnapshot, PieceView};
