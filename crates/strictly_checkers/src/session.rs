//! The game session: one explicit owner for the game state.
//!
//! A [`CheckersGame`] consumes one [`Command`] at a time and reports an
//! [`Event`]. The presentation layer turns clicks and timer ticks into
//! commands; nothing here touches a display.

use crate::action::{InvalidMove, Move};
use crate::ai;
use crate::board::Board;
use crate::challenge::{Challenge, word};
use crate::config::GameConfig;
use crate::contracts::{Contract, MoveContract, Proposed};
use crate::error::GameError;
use crate::game::{ActiveChallenge, ChallengeId, GameState, Scores, TurnPhase};
use crate::hints::{NO_CHALLENGE_HINT, hint_for};
use crate::invariants::{BoardInvariants, InvariantSet};
use crate::phases::{EndReason, Outcome, Phase};
use crate::rules::{apply_move, check_outcome, legal_destinations};
use crate::snapshot::{BoardSnapshot, GameSnapshot};
use crate::types::{Cell, Side};
use rand::SeedableRng;
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Returned by explanation lookups when no challenge is open.
pub const MISSING_DATA: &str = "Missing data";

/// An input to the session, consumed one at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// A board cell was clicked.
    Click(Cell),
    /// A move was proposed directly.
    AttemptMove(Move),
    /// True or False was chosen but not yet submitted.
    ChooseAnswer(bool),
    /// The chosen answer was submitted.
    Submit,
    /// The challenge was skipped.
    Skip,
    /// One countdown tick for the given challenge.
    Tick(ChallengeId),
    /// The presentation clock reached zero.
    Timeout,
    /// The AI delay elapsed; let the AI move.
    AiTurn,
    /// Start over.
    NewGame,
}

/// How a challenge was settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    /// Answered correctly; the move was committed.
    Accepted,
    /// Answered incorrectly; the move was dropped.
    Incorrect,
    /// Skipped; the move was dropped and a point deducted.
    Skipped,
    /// The countdown ran out; the move was dropped.
    TimedOut,
}

impl Verdict {
    /// Whether the move went through.
    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// What a committed move did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveSummary {
    /// Side that moved.
    pub side: Side,
    /// The move.
    pub action: Move,
    /// Cell of the captured piece, if any.
    pub captured: Option<Cell>,
    /// Whether the piece was crowned.
    pub promoted: bool,
    /// Points awarded for the move.
    pub points: u32,
}

/// Result of settling a challenge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resolution {
    /// How the challenge was settled.
    pub verdict: Verdict,
    /// The expected answer.
    pub correct_answer: bool,
    /// Headline for the result panel.
    pub message: String,
    /// Why the hidden row has its value.
    pub explanation: String,
    /// The committed move, when accepted.
    pub committed: Option<MoveSummary>,
    /// Points deducted (skips only).
    pub penalty: u32,
    /// Set if the game ended when the turn passed.
    pub outcome: Option<Outcome>,
}

/// Result of the AI's turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiMove {
    /// The committed move.
    pub summary: MoveSummary,
    /// Set if the game ended when the turn passed back.
    pub outcome: Option<Outcome>,
}

/// Result of a countdown tick.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Tick {
    /// The tick belongs to a challenge that is no longer open.
    Stale,
    /// Ticks left on the open challenge.
    Remaining(u32),
    /// The countdown ran out and the challenge was settled.
    Expired(Resolution),
}

/// What a command did.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A piece was selected; its destinations are listed.
    Selected {
        /// Selected cell.
        cell: Cell,
        /// Where it may go.
        destinations: Vec<Cell>,
    },
    /// A selection was dropped after a click that was not a legal move.
    SelectionCleared,
    /// The click did nothing.
    Ignored,
    /// A challenge was opened.
    ChallengeStarted(ChallengeId),
    /// An answer was chosen.
    AnswerChosen(bool),
    /// A challenge was settled.
    Resolved(Resolution),
    /// The countdown advanced.
    Ticked(Tick),
    /// The AI moved.
    AiMoved(AiMove),
    /// A new game started.
    NewGame,
}

/// A single-player session against the AI.
#[derive(Debug, Clone)]
pub struct CheckersGame {
    state: GameState,
    config: GameConfig,
    rng: StdRng,
    next_challenge: u64,
}

impl CheckersGame {
    /// Starts a session with a fresh board.
    ///
    /// Uses the configured seed if there is one.
    #[instrument(skip(config))]
    pub fn new(config: GameConfig) -> Self {
        let mut rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        let board = Board::initial(&mut rng);
        info!(seed = ?config.seed(), "New checkers session");
        Self::assemble(config, board, rng)
    }

    /// Starts a session on a prepared board, player to move.
    ///
    /// The board must satisfy [`BoardInvariants`]; otherwise the first
    /// committed move would fail its postcondition.
    #[instrument(skip(config, board))]
    pub fn with_board(config: GameConfig, board: Board) -> Result<Self, GameError> {
        if let Err(violations) = BoardInvariants::check_all(&board) {
            let described: Vec<String> = violations.into_iter().map(|v| v.description).collect();
            warn!(?described, "Prepared board rejected");
            return Err(GameError::InvariantViolation(format!(
                "Invalid board: {}",
                described.join("; ")
            )));
        }
        let rng = match config.seed() {
            Some(seed) => StdRng::seed_from_u64(*seed),
            None => StdRng::from_os_rng(),
        };
        Ok(Self::assemble(config, board, rng))
    }

    fn assemble(config: GameConfig, board: Board, rng: StdRng) -> Self {
        let mut game = Self {
            state: GameState::new(board),
            config,
            rng,
            next_challenge: 0,
        };
        game.check_for_end();
        game
    }

    /// Throws away the current game and deals a new board.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        let board = Board::initial(&mut self.rng);
        self.state = GameState::new(board);
        info!("New game started");
        self.check_for_end();
    }

    // ─────────────────────────────────────────────────────────────
    //  Read access
    // ─────────────────────────────────────────────────────────────

    /// The full game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// The session configuration.
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// The board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Current scores.
    pub fn scores(&self) -> Scores {
        self.state.scores()
    }

    /// `(player, ai)` scores.
    pub fn current_scores(&self) -> (u32, u32) {
        let scores = self.state.scores();
        (scores.player, scores.ai)
    }

    /// Playing or ended.
    pub fn phase(&self) -> Phase {
        self.state.phase()
    }

    /// The winner, once the game has ended.
    pub fn winner(&self) -> Option<Side> {
        self.state.phase().winner()
    }

    /// Side whose turn it is.
    pub fn to_move(&self) -> Side {
        self.state.to_move()
    }

    /// The open challenge, if any.
    pub fn active_challenge(&self) -> Option<&ActiveChallenge> {
        self.state.active_challenge()
    }

    /// Where the piece on `from` may go. Empty for an empty cell.
    pub fn legal_destinations(&self, from: Cell) -> Vec<Cell> {
        legal_destinations(self.state.board(), from)
    }

    /// Board view for rendering.
    pub fn renderable_board_state(&self) -> BoardSnapshot {
        BoardSnapshot::from(self.state.board())
    }

    /// Full view for rendering.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::from(self)
    }

    /// Hint for the open challenge, or a prompt to start one.
    pub fn hint(&self) -> String {
        match self.state.active_challenge() {
            Some(active) => {
                let challenge = active.challenge();
                hint_for(challenge.operator(), challenge.selection())
            }
            None => NO_CHALLENGE_HINT.to_string(),
        }
    }

    /// Explanation for the open challenge, or [`MISSING_DATA`].
    pub fn explanation(&self) -> String {
        self.state
            .active_challenge()
            .map(|active| active.challenge().explanation())
            .unwrap_or_else(|| MISSING_DATA.to_string())
    }

    // ─────────────────────────────────────────────────────────────
    //  Player actions
    // ─────────────────────────────────────────────────────────────

    /// Handles a click on a board cell.
    ///
    /// With nothing selected, clicking one of the player's pieces selects
    /// it. With a piece selected, clicking a legal destination opens a
    /// challenge; any other cell clears the selection.
    #[instrument(skip(self))]
    pub fn click(&mut self, cell: Cell) -> Result<Event, GameError> {
        self.ensure_player_board_turn()?;

        match self.state.turn().clone() {
            TurnPhase::Idle => match self.state.board().get(cell) {
                Some(piece) if piece.owner() == Side::Player => {
                    let destinations = self.legal_destinations(cell);
                    self.state.set_turn(TurnPhase::PieceSelected(cell));
                    debug!(%cell, count = destinations.len(), "Piece selected");
                    Ok(Event::Selected { cell, destinations })
                }
                _ => Ok(Event::Ignored),
            },
            TurnPhase::PieceSelected(from) => match self.attempt_move(from, cell) {
                Ok(active) => Ok(Event::ChallengeStarted(active.id())),
                Err(GameError::InvalidMove(reason)) => {
                    debug!(%reason, "Selection cleared");
                    Ok(Event::SelectionCleared)
                }
                Err(e) => Err(e),
            },
            TurnPhase::ChallengeActive(_) => Err(GameError::ChallengeInProgress),
        }
    }

    /// Proposes moving the player's piece on `from` to `to`.
    ///
    /// A legal move opens a challenge for the piece's operator. An illegal
    /// one clears any selection and changes nothing else.
    #[instrument(skip(self))]
    pub fn attempt_move(&mut self, from: Cell, to: Cell) -> Result<&ActiveChallenge, GameError> {
        self.ensure_player_board_turn()?;

        let action = Move::new(from, to);
        if let Err(e) = MoveContract::pre(self.state.board(), &Proposed::new(Side::Player, action)) {
            warn!(error = %e, %action, "Move rejected");
            self.state.set_turn(TurnPhase::Idle);
            return Err(e);
        }

        let operator = self
            .state
            .board()
            .get(from)
            .map(|piece| piece.operator())
            .ok_or(GameError::InvalidMove(InvalidMove::NoPiece(from)))?;

        // Replaces any previous challenge; its id can no longer match.
        let challenge = Challenge::generate(operator, action, &mut self.rng);
        self.next_challenge += 1;
        let id = ChallengeId(self.next_challenge);
        info!(%id, %operator, %action, "Challenge started");
        self.state.set_turn(TurnPhase::ChallengeActive(ActiveChallenge::new(
            id,
            challenge,
            *self.config.challenge_seconds(),
        )));

        self.state
            .active_challenge()
            .ok_or(GameError::NoActiveChallenge)
    }

    /// Records the player's choice without submitting it.
    #[instrument(skip(self))]
    pub fn choose_answer(&mut self, answer: bool) -> Result<(), GameError> {
        self.ensure_playing()?;
        let active = self
            .state
            .active_challenge_mut()
            .ok_or(GameError::NoActiveChallenge)?;
        active.challenge_mut().choose(answer);
        Ok(())
    }

    /// Submits the chosen answer.
    ///
    /// Fails with [`GameError::NoAnswerSelected`] if nothing was chosen.
    #[instrument(skip(self))]
    pub fn submit(&mut self) -> Result<Resolution, GameError> {
        self.ensure_playing()?;
        let active = self
            .state
            .active_challenge()
            .ok_or(GameError::NoActiveChallenge)?;
        let challenge = active.challenge();
        let answer = challenge.answer().ok_or(GameError::NoAnswerSelected)?;
        let verdict = if answer == challenge.correct_answer() {
            Verdict::Accepted
        } else {
            Verdict::Incorrect
        };
        self.resolve(verdict)
    }

    /// Chooses and submits in one step.
    pub fn submit_answer(&mut self, answer: bool) -> Result<Resolution, GameError> {
        self.choose_answer(answer)?;
        self.submit()
    }

    /// Gives up on the open challenge, losing a point (never below zero).
    #[instrument(skip(self))]
    pub fn skip_challenge(&mut self) -> Result<Resolution, GameError> {
        self.ensure_playing()?;
        self.resolve(Verdict::Skipped)
    }

    /// Settles the open challenge as timed out.
    #[instrument(skip(self))]
    pub fn on_timeout(&mut self) -> Result<Resolution, GameError> {
        self.ensure_playing()?;
        self.resolve(Verdict::TimedOut)
    }

    /// Advances the countdown of challenge `id`.
    ///
    /// Ticks for any other challenge are ignored, so a timer that outlives
    /// its challenge cannot settle a later one.
    #[instrument(skip(self))]
    pub fn tick(&mut self, id: ChallengeId) -> Result<Tick, GameError> {
        self.ensure_playing()?;
        let Some(active) = self.state.active_challenge_mut() else {
            debug!("Tick with no open challenge");
            return Ok(Tick::Stale);
        };
        if active.id() != id {
            debug!(current = %active.id(), "Stale tick ignored");
            return Ok(Tick::Stale);
        }
        match active.tick() {
            0 => Ok(Tick::Expired(self.resolve(Verdict::TimedOut)?)),
            remaining => Ok(Tick::Remaining(remaining)),
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  AI turn
    // ─────────────────────────────────────────────────────────────

    /// Lets the AI make a random legal move, then hands the turn back.
    #[instrument(skip(self))]
    pub fn play_ai_turn(&mut self) -> Result<AiMove, GameError> {
        self.ensure_playing()?;
        if self.state.to_move() != Side::Ai {
            return Err(GameError::NotYourTurn(Side::Ai));
        }

        let Some(action) = ai::choose_move(self.state.board(), Side::Ai, &mut self.rng) else {
            let outcome = Outcome::new(Side::Player, EndReason::NoLegalMoves);
            self.finish(outcome);
            return Err(GameError::GameOver);
        };

        let summary = self.commit(Side::Ai, action)?;
        let outcome = self.pass_turn();
        Ok(AiMove { summary, outcome })
    }

    // ─────────────────────────────────────────────────────────────
    //  Command dispatch
    // ─────────────────────────────────────────────────────────────

    /// Applies one command.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, command: Command) -> Result<Event, GameError> {
        match command {
            Command::Click(cell) => self.click(cell),
            Command::AttemptMove(action) => self
                .attempt_move(action.from, action.to)
                .map(|active| Event::ChallengeStarted(active.id())),
            Command::ChooseAnswer(answer) => {
                self.choose_answer(answer)?;
                Ok(Event::AnswerChosen(answer))
            }
            Command::Submit => self.submit().map(Event::Resolved),
            Command::Skip => self.skip_challenge().map(Event::Resolved),
            Command::Tick(id) => self.tick(id).map(Event::Ticked),
            Command::Timeout => self.on_timeout().map(Event::Resolved),
            Command::AiTurn => self.play_ai_turn().map(Event::AiMoved),
            Command::NewGame => {
                self.new_game();
                Ok(Event::NewGame)
            }
        }
    }

    // ─────────────────────────────────────────────────────────────
    //  Internals
    // ─────────────────────────────────────────────────────────────

    fn ensure_playing(&self) -> Result<(), GameError> {
        if self.state.phase().is_over() {
            return Err(GameError::GameOver);
        }
        Ok(())
    }

    fn ensure_player_board_turn(&self) -> Result<(), GameError> {
        self.ensure_playing()?;
        if self.state.to_move() != Side::Player {
            return Err(GameError::NotYourTurn(Side::Player));
        }
        if self.state.active_challenge().is_some() {
            return Err(GameError::ChallengeInProgress);
        }
        Ok(())
    }

    /// Settles the open challenge and passes the turn to the AI.
    fn resolve(&mut self, verdict: Verdict) -> Result<Resolution, GameError> {
        let challenge = self
            .state
            .active_challenge()
            .map(|active| active.challenge().clone())
            .ok_or(GameError::NoActiveChallenge)?;

        let correct = word(challenge.correct_answer());
        let explanation = challenge.explanation();

        let (committed, penalty, message) = match verdict {
            Verdict::Accepted => {
                let summary = self.commit(Side::Player, challenge.action())?;
                (Some(summary), 0, "Correct! Great job!".to_string())
            }
            Verdict::Incorrect => (None, 0, format!("Incorrect. The answer was {correct}.")),
            Verdict::TimedOut => (None, 0, format!("Time's up! The answer was {correct}.")),
            Verdict::Skipped => {
                let penalty = self
                    .state
                    .scores_mut()
                    .penalize(Side::Player, *self.config.skip_penalty());
                let message = format!(
                    "Challenge skipped. -{} point. The answer was {correct}.",
                    self.config.skip_penalty()
                );
                (None, penalty, message)
            }
        };

        info!(?verdict, answer = challenge.correct_answer(), "Challenge resolved");
        let outcome = self.pass_turn();

        Ok(Resolution {
            verdict,
            correct_answer: challenge.correct_answer(),
            message,
            explanation,
            committed,
            penalty,
            outcome,
        })
    }

    /// Applies a move for `side` under the move contract and scores it.
    fn commit(&mut self, side: Side, action: Move) -> Result<MoveSummary, GameError> {
        let before = self.state.board();
        MoveContract::pre(before, &Proposed::new(side, action))?;
        let applied = apply_move(before, action)?;

        if cfg!(debug_assertions) {
            MoveContract::post(before, &applied.board)?;
        }

        let mut points = *self.config.move_points();
        if applied.is_capture() {
            points += *self.config.capture_points();
        }
        self.state.scores_mut().award(side, points);

        let summary = MoveSummary {
            side,
            action,
            captured: applied.captured.map(|(cell, _)| cell),
            promoted: applied.promoted,
            points,
        };
        self.state.set_board(applied.board);
        info!(%side, %action, points, "Move committed");
        Ok(summary)
    }

    /// Hands the turn to the other side and checks whether it can play.
    fn pass_turn(&mut self) -> Option<Outcome> {
        self.state.set_turn(TurnPhase::Idle);
        self.state.set_to_move(self.state.to_move().opponent());
        self.check_for_end()
    }

    fn check_for_end(&mut self) -> Option<Outcome> {
        let outcome = check_outcome(self.state.board(), self.state.to_move())?;
        self.finish(outcome);
        Some(outcome)
    }

    fn finish(&mut self, outcome: Outcome) {
        info!(winner = %outcome.winner(), reason = ?outcome.reason(), "Game over");
        self.state.set_turn(TurnPhase::Idle);
        self.state.set_phase(Phase::Ended(outcome));
    }
}

impl Default for CheckersGame {
    fn default() -> Self {
        Self::new(GameConfig::default())
    }
}
