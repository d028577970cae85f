//! Plain-text rendering of snapshots, challenges and results.

use std::fmt::Write;
use strictly_checkers::{
    AiMove, BOARD_SIZE, BoardSnapshot, Cell, ChallengeView, GameSnapshot, INPUTS, Operator,
    PieceView, Resolution, Selection, Side, evaluate, formula_for, letter,
};

/// Draws the board with row and column labels.
///
/// Player pieces are marked `p`, AI pieces `a`, kings in upper case.
/// Legal destinations of the selected piece show as `*`.
pub fn board(board: &BoardSnapshot, selected: Option<Cell>, highlighted: &[Cell]) -> String {
    let mut out = String::from("   ");
    for col in 0..BOARD_SIZE {
        let _ = write!(out, " {col} ");
    }
    out.push('\n');

    for row in 0..BOARD_SIZE {
        let _ = write!(out, " {row} ");
        for col in 0..BOARD_SIZE {
            let cell = Cell::new(row, col);
            let text = match board.get(cell) {
                Some(piece) => piece_text(&piece, selected == Some(cell)),
                None if highlighted.contains(&cell) => " * ".to_string(),
                None if cell.is_dark() => " . ".to_string(),
                None => "   ".to_string(),
            };
            out.push_str(&text);
        }
        out.push('\n');
    }
    out
}

fn piece_text(piece: &PieceView, selected: bool) -> String {
    let owner = match (piece.owner(), *piece.king()) {
        (Side::Player, false) => 'p',
        (Side::Player, true) => 'P',
        (Side::Ai, false) => 'a',
        (Side::Ai, true) => 'A',
    };
    let marker = if selected { '<' } else { ' ' };
    format!("{owner}{}{marker}", piece.symbol())
}

/// Board, scores and status line.
pub fn frame(snapshot: &GameSnapshot) -> String {
    let mut out = board(snapshot.board(), *snapshot.selected(), snapshot.highlighted());
    let scores = snapshot.scores();
    let _ = writeln!(out, "Score: You {} | AI {}", scores.player, scores.ai);
    let _ = writeln!(out, "{}", snapshot.status_string());
    out
}

/// The challenge panel: prompt, table with the hidden row, and options.
pub fn challenge(view: &ChallengeView) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", view.prompt());
    let _ = writeln!(out, " P | Q | {}", view.header());
    for row in view.rows() {
        let output = row.output.map(letter).unwrap_or('?');
        let _ = writeln!(out, " {} | {} | {}", letter(row.p), letter(row.q), output);
    }
    let options: Vec<String> = view
        .options()
        .iter()
        .map(|option| {
            let key = option.label.chars().next().unwrap_or('?').to_ascii_lowercase();
            let mark = if *view.chosen() == Some(option.value) { "*" } else { "" };
            format!("[{key}] {}{mark}", option.label)
        })
        .collect();
    let _ = writeln!(out, "{}   ({}s left)", options.join("  "), view.remaining());
    out
}

/// Result panel for a settled challenge.
pub fn resolution(resolution: &Resolution) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", resolution.message);
    let _ = writeln!(out, "{}", resolution.explanation);
    if let Some(summary) = resolution.committed {
        let _ = write!(out, "You moved {} (+{})", summary.action, summary.points);
        if summary.promoted {
            out.push_str(", crowned");
        }
        out.push('\n');
    }
    out
}

/// One-line summary of the AI's move.
pub fn ai_move(ai: &AiMove) -> String {
    let summary = ai.summary;
    let mut out = format!("AI moved {}", summary.action);
    if let Some(captured) = summary.captured {
        let _ = write!(out, ", capturing {captured}");
    }
    if summary.promoted {
        out.push_str(", crowned");
    }
    out
}

/// Full truth table for an operator, no hidden rows.
pub fn truth_table(operator: Operator, selection: Option<Selection>) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{operator} {}", operator.symbol());
    let _ = writeln!(out, " P | Q | {}", formula_for(operator, selection));
    for (p, q) in INPUTS {
        let value = evaluate(operator, p, q, selection);
        let _ = writeln!(out, " {} | {} | {}", letter(p), letter(q), letter(value));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_checkers::{Board, CheckersGame, GameConfig, ImplicationVariant, Piece};

    fn game() -> CheckersGame {
        let mut board = Board::empty();
        board.place(Cell::new(5, 2), Piece::new(Side::Player, Operator::And)).unwrap();
        board.place(Cell::new(0, 1), Piece::king(Side::Ai, Operator::Or)).unwrap();
        CheckersGame::with_board(GameConfig::default().with_seed(Some(1)), board).unwrap()
    }

    #[test]
    fn test_board_marks_owners_and_kings() {
        let text = board(&game().renderable_board_state(), None, &[]);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 9);
        assert!(lines[0].starts_with("    0  1"));
        assert!(lines[1].contains("A∨"));
        assert!(lines[6].contains("p∧"));
    }

    #[test]
    fn test_frame_highlights_destinations() {
        let mut game = game();
        game.click(Cell::new(5, 2)).unwrap();
        let text = frame(&game.snapshot());
        let row_four = text.lines().nth(5).unwrap();
        assert_eq!(row_four.matches('*').count(), 2);
        assert!(text.contains("p∧<"));
        assert!(text.contains("Score: You 0 | AI 0"));
        assert!(text.trim_end().ends_with("Your move"));
    }

    #[test]
    fn test_challenge_panel_hides_one_row() {
        let mut game = game();
        game.attempt_move(Cell::new(5, 2), Cell::new(4, 3)).unwrap();
        game.choose_answer(true).unwrap();
        let snapshot = game.snapshot();
        let text = challenge(snapshot.challenge().as_ref().unwrap());
        assert!(text.starts_with("Complete the truth table for AND operation:"));
        assert!(text.contains(" P | Q | P ∧ Q"));
        assert_eq!(text.matches('?').count(), 1);
        assert!(text.contains("[t] True*  [f] False"));
        assert!(text.contains("(120s left)"));
    }

    #[test]
    fn test_truth_table_for_variant() {
        let selection = Some(Selection::Implication(ImplicationVariant::PImpliesNotQ));
        let text = truth_table(Operator::Implies, selection);
        assert_eq!(
            text,
            "IMPLIES →\n P | Q | P→¬Q\n T | T | F\n T | F | T\n F | T | T\n F | F | T\n"
        );
    }
}
