//! Propositional-logic operators and their truth functions.
//!
//! Every piece carries an [`Operator`]. Three operators (IMPLIES, COMPLEX,
//! TAUTOLOGY) stand for a pool of formulas; a concrete pick from that pool
//! is a [`Selection`]. An [`Expression`] is an operator with its selection
//! resolved, and is the only thing that gets evaluated.

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{instrument, warn};

/// A logical connective or formula class assigned to a piece.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::EnumString,
    strum::Display,
)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Operator {
    /// Conjunction, `P ∧ Q`.
    And,
    /// Disjunction, `P ∨ Q`.
    Or,
    /// Negation of `P`; `Q` is ignored.
    Not,
    /// Material conditional in one of four variants.
    Implies,
    /// Equivalence, `P ↔ Q`.
    Biconditional,
    /// One of five fixed compound formulas.
    Complex,
    /// One of five fixed tautologies.
    Tautology,
}

impl Operator {
    /// Every operator, in declaration order.
    pub const ALL: [Operator; 7] = [
        Operator::And,
        Operator::Or,
        Operator::Not,
        Operator::Implies,
        Operator::Biconditional,
        Operator::Complex,
        Operator::Tautology,
    ];

    /// Draws an operator uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }

    /// Glyph shown on a piece carrying this operator.
    pub fn symbol(self) -> &'static str {
        match self {
            Operator::And => "∧",
            Operator::Or => "∨",
            Operator::Not => "¬",
            Operator::Implies => "→",
            Operator::Biconditional => "↔",
            Operator::Complex => "⚡",
            Operator::Tautology => "⊤",
        }
    }

    /// Whether challenges for this operator need a [`Selection`].
    pub fn has_selection(self) -> bool {
        matches!(
            self,
            Operator::Implies | Operator::Complex | Operator::Tautology
        )
    }

    /// Draws a selection uniformly from this operator's pool.
    ///
    /// Returns `None` for operators without a pool.
    #[instrument(skip(rng))]
    pub fn draw_selection<R: Rng + ?Sized>(self, rng: &mut R) -> Option<Selection> {
        match self {
            Operator::Implies => {
                let all = ImplicationVariant::ALL;
                Some(Selection::Implication(all[rng.random_range(0..all.len())]))
            }
            Operator::Complex => {
                let all = ComplexExpression::ALL;
                Some(Selection::Complex(all[rng.random_range(0..all.len())]))
            }
            Operator::Tautology => {
                let all = TautologyFormula::ALL;
                Some(Selection::Tautology(all[rng.random_range(0..all.len())]))
            }
            Operator::And | Operator::Or | Operator::Not | Operator::Biconditional => None,
        }
    }
}

/// The four shapes of implication a challenge can ask about.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum ImplicationVariant {
    /// `P→Q`
    PImpliesQ,
    /// `P→¬Q`
    PImpliesNotQ,
    /// `¬P→Q`
    NotPImpliesQ,
    /// `¬P→¬Q`
    NotPImpliesNotQ,
}

impl ImplicationVariant {
    /// All variants, in pool order.
    pub const ALL: [ImplicationVariant; 4] = [
        ImplicationVariant::PImpliesQ,
        ImplicationVariant::PImpliesNotQ,
        ImplicationVariant::NotPImpliesQ,
        ImplicationVariant::NotPImpliesNotQ,
    ];

    /// Antecedent and consequent for the given inputs.
    fn terms(self, p: bool, q: bool) -> (bool, bool) {
        match self {
            ImplicationVariant::PImpliesQ => (p, q),
            ImplicationVariant::PImpliesNotQ => (p, !q),
            ImplicationVariant::NotPImpliesQ => (!p, q),
            ImplicationVariant::NotPImpliesNotQ => (!p, !q),
        }
    }

    /// False only when the antecedent holds and the consequent does not.
    pub fn evaluate(self, p: bool, q: bool) -> bool {
        let (antecedent, consequent) = self.terms(p, q);
        !antecedent || consequent
    }

    /// The single `(P, Q)` row on which this variant is false.
    pub fn falsifying_row(self) -> (bool, bool) {
        match self {
            ImplicationVariant::PImpliesQ => (true, false),
            ImplicationVariant::PImpliesNotQ => (true, true),
            ImplicationVariant::NotPImpliesQ => (false, false),
            ImplicationVariant::NotPImpliesNotQ => (false, true),
        }
    }

    /// Formula text.
    pub fn formula(self) -> &'static str {
        match self {
            ImplicationVariant::PImpliesQ => "P→Q",
            ImplicationVariant::PImpliesNotQ => "P→¬Q",
            ImplicationVariant::NotPImpliesQ => "¬P→Q",
            ImplicationVariant::NotPImpliesNotQ => "¬P→¬Q",
        }
    }
}

/// Compound formulas used by the COMPLEX operator.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum ComplexExpression {
    /// `(P ∧ Q) ∨ (¬P ∧ ¬Q)`
    SameValue,
    /// `¬P ∨ (P ∧ Q)`
    NotPOrBoth,
    /// `(P ∨ Q) ∧ ¬(P ∧ Q)`
    ExclusiveOr,
    /// `(¬P ∨ Q) ∧ (¬Q ∨ P)`
    MutualImplication,
    /// `¬(P ∧ ¬Q)`
    NoCounterexample,
}

impl ComplexExpression {
    /// All formulas, in pool order.
    pub const ALL: [ComplexExpression; 5] = [
        ComplexExpression::SameValue,
        ComplexExpression::NotPOrBoth,
        ComplexExpression::ExclusiveOr,
        ComplexExpression::MutualImplication,
        ComplexExpression::NoCounterexample,
    ];

    /// Evaluates the formula.
    pub fn evaluate(self, p: bool, q: bool) -> bool {
        match self {
            ComplexExpression::SameValue => (p && q) || (!p && !q),
            ComplexExpression::NotPOrBoth => !p || (p && q),
            ComplexExpression::ExclusiveOr => (p || q) && !(p && q),
            ComplexExpression::MutualImplication => (!p || q) && (!q || p),
            ComplexExpression::NoCounterexample => !(p && !q),
        }
    }

    /// Formula text.
    pub fn formula(self) -> &'static str {
        match self {
            ComplexExpression::SameValue => "(P ∧ Q) ∨ (¬P ∧ ¬Q)",
            ComplexExpression::NotPOrBoth => "¬P ∨ (P ∧ Q)",
            ComplexExpression::ExclusiveOr => "(P ∨ Q) ∧ ¬(P ∧ Q)",
            ComplexExpression::MutualImplication => "(¬P ∨ Q) ∧ (¬Q ∨ P)",
            ComplexExpression::NoCounterexample => "¬(P ∧ ¬Q)",
        }
    }
}

/// Formulas used by the TAUTOLOGY operator. Every entry is true on all rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter,
)]
pub enum TautologyFormula {
    /// `P ∨ ¬P`
    ExcludedMiddle,
    /// `¬P ∨ P`
    ExcludedMiddleReversed,
    /// `(P ∧ Q) ∨ (¬P ∨ ¬Q)`
    BothOrNotBoth,
    /// `(P ∨ Q) ∨ (¬P ∧ ¬Q)`
    EitherOrNeither,
    /// `(¬P ∨ Q) ∨ (P ∧ ¬Q)`
    ConditionalOrCounterexample,
}

impl TautologyFormula {
    /// All formulas, in pool order.
    pub const ALL: [TautologyFormula; 5] = [
        TautologyFormula::ExcludedMiddle,
        TautologyFormula::ExcludedMiddleReversed,
        TautologyFormula::BothOrNotBoth,
        TautologyFormula::EitherOrNeither,
        TautologyFormula::ConditionalOrCounterexample,
    ];

    /// Evaluates the formula.
    pub fn evaluate(self, p: bool, q: bool) -> bool {
        match self {
            TautologyFormula::ExcludedMiddle => p || !p,
            TautologyFormula::ExcludedMiddleReversed => !p || p,
            TautologyFormula::BothOrNotBoth => (p && q) || (!p || !q),
            TautologyFormula::EitherOrNeither => (p || q) || (!p && !q),
            TautologyFormula::ConditionalOrCounterexample => (!p || q) || (p && !q),
        }
    }

    /// Formula text.
    pub fn formula(self) -> &'static str {
        match self {
            TautologyFormula::ExcludedMiddle => "P ∨ ¬P",
            TautologyFormula::ExcludedMiddleReversed => "¬P ∨ P",
            TautologyFormula::BothOrNotBoth => "(P ∧ Q) ∨ (¬P ∨ ¬Q)",
            TautologyFormula::EitherOrNeither => "(P ∨ Q) ∨ (¬P ∧ ¬Q)",
            TautologyFormula::ConditionalOrCounterexample => "(¬P ∨ Q) ∨ (P ∧ ¬Q)",
        }
    }
}

/// A concrete pick from an operator's formula pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Selection {
    /// Pick for [`Operator::Implies`].
    Implication(ImplicationVariant),
    /// Pick for [`Operator::Complex`].
    Complex(ComplexExpression),
    /// Pick for [`Operator::Tautology`].
    Tautology(TautologyFormula),
}

impl Selection {
    /// The operator whose pool this selection belongs to.
    pub fn operator(self) -> Operator {
        match self {
            Selection::Implication(_) => Operator::Implies,
            Selection::Complex(_) => Operator::Complex,
            Selection::Tautology(_) => Operator::Tautology,
        }
    }

    /// Position of this selection within its pool.
    pub fn index(self) -> usize {
        match self {
            Selection::Implication(v) => ImplicationVariant::ALL.iter().position(|x| *x == v),
            Selection::Complex(e) => ComplexExpression::ALL.iter().position(|x| *x == e),
            Selection::Tautology(t) => TautologyFormula::ALL.iter().position(|x| *x == t),
        }
        .unwrap_or_default()
    }

    /// Looks a selection up by operator and pool index.
    pub fn from_index(operator: Operator, index: usize) -> Option<Self> {
        match operator {
            Operator::Implies => ImplicationVariant::ALL
                .get(index)
                .map(|v| Selection::Implication(*v)),
            Operator::Complex => ComplexExpression::ALL
                .get(index)
                .map(|e| Selection::Complex(*e)),
            Operator::Tautology => TautologyFormula::ALL
                .get(index)
                .map(|t| Selection::Tautology(*t)),
            Operator::And | Operator::Or | Operator::Not | Operator::Biconditional => None,
        }
    }

    /// Human-readable formula for this selection.
    pub fn formula(self) -> &'static str {
        match self {
            Selection::Implication(v) => v.formula(),
            Selection::Complex(e) => e.formula(),
            Selection::Tautology(t) => t.formula(),
        }
    }
}

/// An operator with its pool selection resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Expression {
    /// `P ∧ Q`
    And,
    /// `P ∨ Q`
    Or,
    /// `¬P`
    Not,
    /// `P ↔ Q`
    Biconditional,
    /// An implication variant.
    Implies(ImplicationVariant),
    /// A compound formula.
    Complex(ComplexExpression),
    /// A tautology.
    Tautology(TautologyFormula),
}

impl Expression {
    /// Pairs an operator with a selection.
    ///
    /// A missing selection, or one drawn from another operator's pool,
    /// falls back to the first entry of the operator's pool.
    #[instrument]
    pub fn resolve(operator: Operator, selection: Option<Selection>) -> Self {
        if let Some(sel) = selection
            && sel.operator() != operator
        {
            warn!(?operator, ?sel, "Selection does not match operator, using default");
        }
        match (operator, selection) {
            (Operator::And, _) => Expression::And,
            (Operator::Or, _) => Expression::Or,
            (Operator::Not, _) => Expression::Not,
            (Operator::Biconditional, _) => Expression::Biconditional,
            (Operator::Implies, Some(Selection::Implication(v))) => Expression::Implies(v),
            (Operator::Implies, _) => Expression::Implies(ImplicationVariant::ALL[0]),
            (Operator::Complex, Some(Selection::Complex(e))) => Expression::Complex(e),
            (Operator::Complex, _) => Expression::Complex(ComplexExpression::ALL[0]),
            (Operator::Tautology, Some(Selection::Tautology(t))) => Expression::Tautology(t),
            (Operator::Tautology, _) => Expression::Tautology(TautologyFormula::ALL[0]),
        }
    }

    /// The operator this expression was resolved from.
    pub fn operator(self) -> Operator {
        match self {
            Expression::And => Operator::And,
            Expression::Or => Operator::Or,
            Expression::Not => Operator::Not,
            Expression::Biconditional => Operator::Biconditional,
            Expression::Implies(_) => Operator::Implies,
            Expression::Complex(_) => Operator::Complex,
            Expression::Tautology(_) => Operator::Tautology,
        }
    }

    /// The pool selection, if the operator has one.
    pub fn selection(self) -> Option<Selection> {
        match self {
            Expression::Implies(v) => Some(Selection::Implication(v)),
            Expression::Complex(e) => Some(Selection::Complex(e)),
            Expression::Tautology(t) => Some(Selection::Tautology(t)),
            Expression::And | Expression::Or | Expression::Not | Expression::Biconditional => None,
        }
    }

    /// Truth value for the given inputs.
    pub fn evaluate(self, p: bool, q: bool) -> bool {
        match self {
            Expression::And => p && q,
            Expression::Or => p || q,
            Expression::Not => !p,
            Expression::Biconditional => p == q,
            Expression::Implies(v) => v.evaluate(p, q),
            Expression::Complex(e) => e.evaluate(p, q),
            Expression::Tautology(t) => t.evaluate(p, q),
        }
    }

    /// Formula text, used as the truth-table column header.
    pub fn formula(self) -> &'static str {
        match self {
            Expression::And => "P ∧ Q",
            Expression::Or => "P ∨ Q",
            Expression::Not => "¬P",
            Expression::Biconditional => "P ↔ Q",
            Expression::Implies(v) => v.formula(),
            Expression::Complex(e) => e.formula(),
            Expression::Tautology(t) => t.formula(),
        }
    }
}

impl std::fmt::Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.formula())
    }
}

/// Evaluates `operator` on `(p, q)` using the given pool selection.
///
/// Pure: the selection is always passed in, never remembered.
pub fn evaluate(operator: Operator, p: bool, q: bool, selection: Option<Selection>) -> bool {
    Expression::resolve(operator, selection).evaluate(p, q)
}

/// Human-readable formula for an operator and selection.
pub fn formula_for(operator: Operator, selection: Option<Selection>) -> &'static str {
    Expression::resolve(operator, selection).formula()
}
