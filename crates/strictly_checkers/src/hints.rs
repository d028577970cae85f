//! Static hint text for each operator.

use crate::logic::{ImplicationVariant, Operator, Selection};
use tracing::instrument;

/// Shown when a hint is asked for outside a challenge.
pub const NO_CHALLENGE_HINT: &str = "Start a challenge first to get hints!";

/// Explanatory text for an operator, specialised by selection where the
/// selection changes the rule (implication variants).
#[instrument]
pub fn hint_for(operator: Operator, selection: Option<Selection>) -> String {
    let lines: Vec<String> = match operator {
        Operator::And => vec![
            "AND (∧) Operator:".into(),
            "• Returns true only when BOTH inputs are true".into(),
            "• Think: \"P AND Q\" - both conditions must be met".into(),
            "• Example: \"It's sunny AND warm\" is only true if both are true".into(),
        ],
        Operator::Or => vec![
            "OR (∨) Operator:".into(),
            "• Returns true when AT LEAST ONE input is true".into(),
            "• Think: \"P OR Q\" - either condition (or both) can be met".into(),
            "• Example: \"Bring an umbrella OR sunglasses\" - you need at least one".into(),
        ],
        Operator::Not => vec![
            "NOT (¬) Operator:".into(),
            "• Returns the opposite of the input".into(),
            "• If P is true, ¬P is false".into(),
            "• If P is false, ¬P is true".into(),
            "• Think: \"NOT raining\" means it's not raining".into(),
        ],
        Operator::Implies => match selection {
            Some(Selection::Implication(variant)) => vec![
                format!("Implication ({}):", variant.formula()),
                "• An implication is false only when the premise is true but the conclusion is false".into(),
                format!("• For {}:", variant.formula()),
                variant_hint(variant).into(),
                "• Remember: \"If false, then anything\" is always true!".into(),
            ],
            _ => vec![
                "IMPLIES (→) Operator:".into(),
                "• P→Q is false only when P is true and Q is false".into(),
                "• Think: \"If it rains, then I'll bring an umbrella\"".into(),
                "• Only false if it rains but I don't bring an umbrella".into(),
            ],
        },
        Operator::Biconditional => vec![
            "BICONDITIONAL (↔) Operator:".into(),
            "• Returns true when both inputs have the SAME truth value".into(),
            "• P↔Q means \"P if and only if Q\"".into(),
            "• True when: (P=true, Q=true) or (P=false, Q=false)".into(),
            "• Think: \"The light is on if and only if the switch is up\"".into(),
        ],
        Operator::Complex => vec![
            "COMPLEX Expression:".into(),
            "• Break down the expression step by step".into(),
            "• Work from inside parentheses outward".into(),
            "• Apply operator precedence: NOT, then AND, then OR".into(),
            "• Substitute the truth values and evaluate each part".into(),
        ],
        Operator::Tautology => vec![
            "TAUTOLOGY (⊤):".into(),
            "• A tautology is ALWAYS true, regardless of input values".into(),
            "• Examples: P ∨ ¬P (something is either true or not true)".into(),
            "• No matter what P and Q are, the result is always true".into(),
            "• Think: \"It's either raining or not raining\" - always true!".into(),
        ],
    };
    lines.join("\n")
}

fn variant_hint(variant: ImplicationVariant) -> &'static str {
    match variant {
        ImplicationVariant::PImpliesQ => "• False only when P=true and Q=false",
        ImplicationVariant::PImpliesNotQ => {
            "• False only when P=true and Q=true (since ¬Q would be false)"
        }
        ImplicationVariant::NotPImpliesQ => "• False only when P=false (so ¬P=true) and Q=false",
        ImplicationVariant::NotPImpliesNotQ => {
            "• False only when P=false (so ¬P=true) and Q=true (so ¬Q=false)"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_every_operator_has_a_hint() {
        for op in Operator::iter() {
            assert!(!hint_for(op, None).is_empty());
        }
    }

    #[test]
    fn test_implication_variant_hint() {
        let hint = hint_for(
            Operator::Implies,
            Some(Selection::Implication(ImplicationVariant::PImpliesNotQ)),
        );
        assert!(hint.starts_with("Implication (P→¬Q):"));
        assert!(hint.contains("P=true and Q=true"));
    }

    #[test]
    fn test_generic_implication_hint() {
        assert!(hint_for(Operator::Implies, None).starts_with("IMPLIES (→) Operator:"));
    }
}
