//! Deterministic classification of action names into step kinds.

use crate::core::types::{EmittedAction, StepKind};

/// Classify a module method by name prefix.
///
/// Rules are checked in order and the first match wins:
///
/// - `see*` → `can` + capitalized name (conditional), then the name (assertion).
/// - `dontSee*` → name with `dont` replaced by `cant` (conditional), then the
///   name (assertion).
/// - `am*` → the name as a condition.
/// - anything else → the name as an action.
///
/// Prefix tests are literal, so `amount` is a condition and `seed` yields `canSeed`.
pub fn classify(method: &str) -> Vec<EmittedAction> {
    if method.starts_with("see") {
        vec![
            EmittedAction::new(
                StepKind::ConditionalAssertion,
                format!("can{}", ucfirst(method)),
            ),
            EmittedAction::new(StepKind::Assertion, method),
        ]
    } else if method.starts_with("dontSee") {
        vec![
            EmittedAction::new(StepKind::ConditionalAssertion, method.replace("dont", "cant")),
            EmittedAction::new(StepKind::Assertion, method),
        ]
    } else if method.starts_with("am") {
        vec![EmittedAction::new(StepKind::Condition, method)]
    } else {
        vec![EmittedAction::new(StepKind::Action, method)]
    }
}

fn ucfirst(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
