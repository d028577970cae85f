//! Game state data.
//!
//! [`GameState`] is plain data: the board, whose turn it is, the turn's
//! sub-state, scores and phase. The [`CheckersGame`](crate::CheckersGame)
//! session is the only thing that mutates it.

use crate::board::Board;
use crate::challenge::Challenge;
use crate::phases::Phase;
use crate::types::{Cell, Side};
use serde::{Deserialize, Serialize};

/// Identifies one challenge within a session. Never reused, so a timer
/// holding an old id can be recognised as stale.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[display("#{}", _0)]
pub struct ChallengeId(pub u64);

/// A challenge that is waiting for an answer, with its countdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActiveChallenge {
    id: ChallengeId,
    challenge: Challenge,
    remaining: u32,
}

impl ActiveChallenge {
    pub(crate) fn new(id: ChallengeId, challenge: Challenge, remaining: u32) -> Self {
        Self {
            id,
            challenge,
            remaining,
        }
    }

    /// Id for matching timer ticks.
    pub fn id(&self) -> ChallengeId {
        self.id
    }

    /// The quiz itself.
    pub fn challenge(&self) -> &Challenge {
        &self.challenge
    }

    /// Ticks left before the challenge times out.
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    pub(crate) fn challenge_mut(&mut self) -> &mut Challenge {
        &mut self.challenge
    }

    /// Counts down one tick, returning what is left.
    pub(crate) fn tick(&mut self) -> u32 {
        self.remaining = self.remaining.saturating_sub(1);
        self.remaining
    }
}

/// Sub-state of a turn while the game is playing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum TurnPhase {
    /// Nothing selected.
    Idle,
    /// A piece is selected and destinations are highlighted.
    PieceSelected(Cell),
    /// A move is waiting on a truth-table answer.
    ChallengeActive(ActiveChallenge),
}

/// Running scores for both sides.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Scores {
    /// The human player's score.
    pub player: u32,
    /// The AI's score.
    pub ai: u32,
}

impl Scores {
    /// Score of one side.
    pub fn of(&self, side: Side) -> u32 {
        match side {
            Side::Player => self.player,
            Side::Ai => self.ai,
        }
    }

    fn slot(&mut self, side: Side) -> &mut u32 {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.ai,
        }
    }

    /// Adds points.
    pub(crate) fn award(&mut self, side: Side, points: u32) {
        let slot = self.slot(side);
        *slot = slot.saturating_add(points);
    }

    /// Removes points, flooring at zero. Returns how many were removed.
    pub(crate) fn penalize(&mut self, side: Side, points: u32) -> u32 {
        let slot = self.slot(side);
        let removed = points.min(*slot);
        *slot -= removed;
        removed
    }
}

/// Complete state of one game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    board: Board,
    to_move: Side,
    turn: TurnPhase,
    scores: Scores,
    phase: Phase,
}

impl GameState {
    /// Creates a state with the player to move on the given board.
    pub fn new(board: Board) -> Self {
        Self {
            board,
            to_move: Side::Player,
            turn: TurnPhase::Idle,
            scores: Scores::default(),
            phase: Phase::Playing,
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    /// Turn sub-state.
    pub fn turn(&self) -> &TurnPhase {
        &self.turn
    }

    /// Current scores.
    pub fn scores(&self) -> Scores {
        self.scores
    }

    /// Playing or ended.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Selected cell, if a piece is selected.
    pub fn selected(&self) -> Option<Cell> {
        match self.turn {
            TurnPhase::PieceSelected(cell) => Some(cell),
            TurnPhase::Idle | TurnPhase::ChallengeActive(_) => None,
        }
    }

    /// The open challenge, if any.
    pub fn active_challenge(&self) -> Option<&ActiveChallenge> {
        match &self.turn {
            TurnPhase::ChallengeActive(active) => Some(active),
            TurnPhase::Idle | TurnPhase::PieceSelected(_) => None,
        }
    }

    pub(crate) fn active_challenge_mut(&mut self) -> Option<&mut ActiveChallenge> {
        match &mut self.turn {
            TurnPhase::ChallengeActive(active) => Some(active),
            TurnPhase::Idle | TurnPhase::PieceSelected(_) => None,
        }
    }

    pub(crate) fn set_board(&mut self, board: Board) {
        self.board = board;
    }

    pub(crate) fn set_turn(&mut self, turn: TurnPhase) {
        self.turn = turn;
    }

    pub(crate) fn set_to_move(&mut self, side: Side) {
        self.to_move = side;
    }

    pub(crate) fn set_phase(&mut self, phase: Phase) {
        self.phase = phase;
    }

    pub(crate) fn scores_mut(&mut self) -> &mut Scores {
        &mut self.scores
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_penalty_floors_at_zero() {
        let mut scores = Scores::default();
        assert_eq!(scores.penalize(Side::Player, 1), 0);
        assert_eq!(scores.player, 0);
        scores.award(Side::Player, 2);
        assert_eq!(scores.penalize(Side::Player, 5), 2);
        assert_eq!(scores.of(Side::Player), 0);
    }

    #[test]
    fn test_new_state_is_idle_player_turn() {
        let state = GameState::new(Board::empty());
        assert_eq!(state.to_move(), Side::Player);
        assert_eq!(state.turn(), &TurnPhase::Idle);
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.selected(), None);
        assert!(state.active_challenge().is_none());
    }
}
