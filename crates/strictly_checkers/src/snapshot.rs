//! Serializable views of a session for presentation layers.

use crate::board::Board;
use crate::challenge::{AnswerOption, PresentedRow};
use crate::game::{ActiveChallenge, ChallengeId, Scores};
use crate::logic::Operator;
use crate::phases::Phase;
use crate::session::CheckersGame;
use crate::types::{BOARD_SIZE, Cell, Side};
use derive_getters::Getters;
use serde::Serialize;

/// One piece as drawn on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Getters)]
pub struct PieceView {
    /// Side that owns the piece.
    owner: Side,
    /// Operator the piece carries.
    operator: Operator,
    /// Glyph for the operator.
    #[getter(skip)]
    symbol: &'static str,
    /// Whether the piece is a king.
    king: bool,
}

impl PieceView {
    /// Glyph for the operator.
    pub fn symbol(&self) -> &'static str {
        self.symbol
    }
}

/// Plain 8x8 grid of piece views, row 0 first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    cells: [[Option<PieceView>; BOARD_SIZE as usize]; BOARD_SIZE as usize],
}

impl BoardSnapshot {
    /// The piece view at `cell`, if any.
    pub fn get(&self, cell: Cell) -> Option<PieceView> {
        if !cell.in_bounds() {
            return None;
        }
        self.cells[cell.row() as usize][cell.col() as usize]
    }

    /// Rows from top (row 0) to bottom.
    pub fn rows(&self) -> &[[Option<PieceView>; BOARD_SIZE as usize]; BOARD_SIZE as usize] {
        &self.cells
    }
}

impl From<&Board> for BoardSnapshot {
    fn from(board: &Board) -> Self {
        let mut cells = [[None; BOARD_SIZE as usize]; BOARD_SIZE as usize];
        for (cell, piece) in board.pieces() {
            cells[cell.row() as usize][cell.col() as usize] = Some(PieceView {
                owner: piece.owner(),
                operator: piece.operator(),
                symbol: piece.operator().symbol(),
                king: piece.is_king(),
            });
        }
        Self { cells }
    }
}

/// What the challenge panel shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct ChallengeView {
    /// Id to send back with countdown ticks.
    id: ChallengeId,
    /// Instruction line.
    prompt: String,
    /// Output column header.
    #[getter(skip)]
    header: &'static str,
    /// Table rows, the hidden output masked.
    rows: [PresentedRow; 4],
    /// Answer buttons.
    options: [AnswerOption; 2],
    /// Ticks left.
    remaining: u32,
    /// Answer chosen but not yet submitted.
    chosen: Option<bool>,
}

impl ChallengeView {
    /// Output column header, e.g. `P ∧ Q`.
    pub fn header(&self) -> &'static str {
        self.header
    }
}

impl From<&ActiveChallenge> for ChallengeView {
    fn from(active: &ActiveChallenge) -> Self {
        let challenge = active.challenge();
        Self {
            id: active.id(),
            prompt: challenge.prompt(),
            header: challenge.header(),
            rows: challenge.presented_rows(),
            options: challenge.options(),
            remaining: active.remaining(),
            chosen: challenge.answer(),
        }
    }
}

/// Everything a presentation layer needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct GameSnapshot {
    /// Piece layout.
    board: BoardSnapshot,
    /// Both scores.
    scores: Scores,
    /// Side whose turn it is.
    to_move: Side,
    /// Playing or ended.
    phase: Phase,
    /// Selected cell, if any.
    selected: Option<Cell>,
    /// Legal destinations of the selected piece.
    highlighted: Vec<Cell>,
    /// The open challenge, if any.
    challenge: Option<ChallengeView>,
}

impl From<&CheckersGame> for GameSnapshot {
    fn from(game: &CheckersGame) -> Self {
        let state = game.state();
        let selected = state.selected();
        Self {
            board: BoardSnapshot::from(state.board()),
            scores: state.scores(),
            to_move: state.to_move(),
            phase: state.phase(),
            selected,
            highlighted: selected
                .map(|cell| game.legal_destinations(cell))
                .unwrap_or_default(),
            challenge: state.active_challenge().map(ChallengeView::from),
        }
    }
}

impl GameSnapshot {
    /// Returns a status string for display.
    pub fn status_string(&self) -> String {
        match self.phase {
            Phase::Ended(outcome) => outcome.to_string(),
            Phase::Playing if self.challenge.is_some() => "Answer the challenge".to_string(),
            Phase::Playing => match self.to_move {
                Side::Player => "Your move".to_string(),
                Side::Ai => "AI to move".to_string(),
            },
        }
    }

    /// Returns true if the game is over.
    pub fn is_over(&self) -> bool {
        self.phase.is_over()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::GameConfig;
    use crate::phases::{EndReason, Outcome};
    use crate::types::Piece;

    fn game() -> CheckersGame {
        let mut board = Board::empty();
        board.place(Cell::new(5, 0), Piece::new(Side::Player, Operator::Implies)).unwrap();
        board.place(Cell::new(0, 7), Piece::king(Side::Ai, Operator::Not)).unwrap();
        CheckersGame::with_board(GameConfig::default().with_seed(Some(3)), board).unwrap()
    }

    #[test]
    fn test_board_snapshot_carries_symbols() {
        let snapshot = game().renderable_board_state();
        let piece = snapshot.get(Cell::new(5, 0)).unwrap();
        assert_eq!(piece.symbol(), "→");
        assert!(!*piece.king());
        let king = snapshot.get(Cell::new(0, 7)).unwrap();
        assert!(*king.king());
        assert_eq!(*king.owner(), Side::Ai);
        assert_eq!(snapshot.get(Cell::new(9, 9)), None);
    }

    #[test]
    fn test_status_strings() {
        let mut game = game();
        assert_eq!(game.snapshot().status_string(), "Your move");

        game.attempt_move(Cell::new(5, 0), Cell::new(4, 1)).unwrap();
        let snapshot = game.snapshot();
        assert_eq!(snapshot.status_string(), "Answer the challenge");
        let view = snapshot.challenge().as_ref().unwrap();
        assert_eq!(view.rows().iter().filter(|r| r.output.is_none()).count(), 1);
        assert_eq!(view.options()[0].label, "True");

        game.skip_challenge().unwrap();
        assert_eq!(game.snapshot().status_string(), "AI to move");
    }

    #[test]
    fn test_glyphs_outlive_snapshot() {
        let mut game = game();
        game.attempt_move(Cell::new(5, 0), Cell::new(4, 1)).unwrap();
        let (symbol, header) = {
            let snapshot = game.snapshot();
            let piece = snapshot.board().get(Cell::new(5, 0)).unwrap();
            let view = snapshot.challenge().as_ref().unwrap();
            (piece.symbol(), view.header())
        };
        assert_eq!(symbol, "→");
        assert!(header.contains('→'));
    }

    #[test]
    fn test_ended_status() {
        let mut board = Board::empty();
        board.place(Cell::new(5, 0), Piece::new(Side::Player, Operator::And)).unwrap();
        let game = CheckersGame::with_board(GameConfig::default(), board).unwrap();
        let snapshot = game.snapshot();
        assert!(snapshot.is_over());
        assert_eq!(
            *snapshot.phase(),
            Phase::Ended(Outcome::new(Side::Player, EndReason::NoPieces))
        );
        assert_eq!(snapshot.status_string(), "Game over. You win!");
    }

    #[test]
    fn test_snapshot_serializes() {
        let json = serde_json::to_value(game().snapshot()).unwrap();
        assert_eq!(json["to_move"], "player");
        assert!(json["board"]["cells"][5][0].is_object());
        assert!(json["board"]["cells"][4][0].is_null());
    }
}
