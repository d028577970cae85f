//! Truth-table challenges gating a player's move.
//!
//! A challenge fixes its pool selection once, at construction, and keeps
//! it in the value. Every later evaluation and display goes through that
//! stored selection, so two challenges for the same operator never share
//! state.

use crate::action::Move;
use crate::logic::{Expression, Operator, Selection};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// The four `(P, Q)` input pairs, in table order.
pub const INPUTS: [(bool, bool); 4] = [(true, true), (true, false), (false, true), (false, false)];

/// One fully evaluated row of a truth table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TruthRow {
    /// Value of `P`.
    pub p: bool,
    /// Value of `Q`.
    pub q: bool,
    /// Value of the expression.
    pub output: bool,
}

/// A row as shown to the player; the hidden row has no output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PresentedRow {
    /// Value of `P`.
    pub p: bool,
    /// Value of `Q`.
    pub q: bool,
    /// Value of the expression, `None` on the row being asked about.
    pub output: Option<bool>,
}

/// One of the two answer buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct AnswerOption {
    /// Button text.
    pub label: &'static str,
    /// Value submitted when chosen.
    pub value: bool,
}

/// Answer options, always in this order.
pub const OPTIONS: [AnswerOption; 2] = [
    AnswerOption {
        label: "True",
        value: true,
    },
    AnswerOption {
        label: "False",
        value: false,
    },
];

/// A one-shot truth-table quiz for a proposed move.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Challenge {
    action: Move,
    operator: Operator,
    selection: Option<Selection>,
    rows: [TruthRow; 4],
    hidden_index: usize,
    correct_answer: bool,
    answer: Option<bool>,
}

impl Challenge {
    /// Builds a challenge with a random selection and hidden row.
    #[instrument(skip(rng), fields(action = %action))]
    pub fn generate<R: Rng + ?Sized>(operator: Operator, action: Move, rng: &mut R) -> Self {
        let selection = operator.draw_selection(rng);
        let hidden_index = rng.random_range(0..INPUTS.len());
        let challenge = Self::build(action, operator, selection, hidden_index);
        debug!(
            ?selection,
            hidden_index,
            correct = challenge.correct_answer,
            "Challenge generated"
        );
        challenge
    }

    /// Builds a challenge from explicit parts.
    ///
    /// Returns `None` if `hidden_index` is not a row index.
    pub fn from_parts(
        action: Move,
        operator: Operator,
        selection: Option<Selection>,
        hidden_index: usize,
    ) -> Option<Self> {
        (hidden_index < INPUTS.len()).then(|| Self::build(action, operator, selection, hidden_index))
    }

    fn build(
        action: Move,
        operator: Operator,
        selection: Option<Selection>,
        hidden_index: usize,
    ) -> Self {
        let expression = Expression::resolve(operator, selection);
        let rows = INPUTS.map(|(p, q)| TruthRow {
            p,
            q,
            output: expression.evaluate(p, q),
        });
        Self {
            action,
            operator,
            selection: expression.selection(),
            rows,
            hidden_index,
            correct_answer: rows[hidden_index].output,
            answer: None,
        }
    }

    /// The move this challenge gates.
    pub fn action(&self) -> Move {
        self.action
    }

    /// Operator of the moving piece.
    pub fn operator(&self) -> Operator {
        self.operator
    }

    /// Pool selection fixed for this challenge.
    pub fn selection(&self) -> Option<Selection> {
        self.selection
    }

    /// The expression being tabulated.
    pub fn expression(&self) -> Expression {
        Expression::resolve(self.operator, self.selection)
    }

    /// All four rows, including the hidden output.
    pub fn rows(&self) -> &[TruthRow; 4] {
        &self.rows
    }

    /// Index of the row whose output is asked for.
    pub fn hidden_index(&self) -> usize {
        self.hidden_index
    }

    /// The row whose output is asked for.
    pub fn hidden_row(&self) -> TruthRow {
        self.rows[self.hidden_index]
    }

    /// Expected answer.
    pub fn correct_answer(&self) -> bool {
        self.correct_answer
    }

    /// Answer chosen so far, if any.
    pub fn answer(&self) -> Option<bool> {
        self.answer
    }

    /// Records (or changes) the chosen answer.
    pub fn choose(&mut self, answer: bool) {
        self.answer = Some(answer);
    }

    /// Answer buttons, True then False.
    pub fn options(&self) -> [AnswerOption; 2] {
        OPTIONS
    }

    /// Column header for the output column.
    pub fn header(&self) -> &'static str {
        self.expression().formula()
    }

    /// The rows as displayed, with the hidden output masked.
    pub fn presented_rows(&self) -> [PresentedRow; 4] {
        let mut out = [PresentedRow {
            p: false,
            q: false,
            output: None,
        }; 4];
        for (i, row) in self.rows.iter().enumerate() {
            out[i] = PresentedRow {
                p: row.p,
                q: row.q,
                output: (i != self.hidden_index).then_some(row.output),
            };
        }
        out
    }

    /// Instruction line shown above the table.
    pub fn prompt(&self) -> String {
        let name = match self.operator {
            Operator::Complex => "complex expression".to_string(),
            Operator::Tautology => "tautology".to_string(),
            other => format!("{other} operation"),
        };
        format!("Complete the truth table for {name}:")
    }

    /// Why the hidden row has the value it has.
    pub fn explanation(&self) -> String {
        let row = self.hidden_row();
        let (p, q, out) = (letter(row.p), letter(row.q), letter(row.output));
        let values = format!("P={p}, Q={q} → {out}");
        match self.expression() {
            Expression::And => format!("AND: Both must be true\n{values}"),
            Expression::Or => format!("OR: At least one must be true\n{values}"),
            Expression::Not => format!("NOT: Flips the value\nP={p} → ¬P={out}"),
            Expression::Implies(variant) => format!(
                "{}: False only when premise=T, conclusion=F\n{values}",
                variant.formula()
            ),
            Expression::Biconditional => format!("↔: Same values = True\n{values}"),
            Expression::Complex(_) => format!("Complex: Follow operator order\n{values}"),
            Expression::Tautology(_) => "Tautology: Always true\nAny values → T".to_string(),
        }
    }
}

/// `T` or `F`.
pub fn letter(value: bool) -> char {
    if value { 'T' } else { 'F' }
}

/// "True" or "False".
pub fn word(value: bool) -> &'static str {
    if value { "True" } else { "False" }
}
