//! Shared deterministic types for the generator core.
//!
//! These types define stable contracts between core components. They should not
//! depend on external state or I/O and must remain deterministic across runs.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Behavioral category of a forwarded step.
///
/// The variant name doubles as the step class name in generated code
/// (`\Codeception\Step\Assertion`, ...).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StepKind {
    /// State-changing action (`click`, `fillField`).
    Action,
    /// Precondition set-up (`amOnPage`).
    Condition,
    /// Hard assertion: failing aborts the scenario.
    Assertion,
    /// Soft assertion: failing marks the step but the scenario continues.
    ConditionalAssertion,
}

impl StepKind {
    pub fn as_str(self) -> &'static str {
        match self {
            StepKind::Action => "Action",
            StepKind::Condition => "Condition",
            StepKind::Assertion => "Assertion",
            StepKind::ConditionalAssertion => "ConditionalAssertion",
        }
    }
}

impl fmt::Display for StepKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One forwarding method the classifier asks the emitter to produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedAction {
    pub kind: StepKind,
    /// Public name of the generated method.
    pub name: String,
}

impl EmittedAction {
    pub fn new(kind: StepKind, name: impl Into<String>) -> Self {
        Self {
            kind,
            name: name.into(),
        }
    }
}

/// Formal parameter of a module method.
///
/// Only optionality survives into generated code; the default expression itself
/// is not carried.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    pub name: String,
    pub has_default: bool,
}

impl Parameter {
    pub fn required(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_default: false,
        }
    }

    pub fn optional(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            has_default: true,
        }
    }
}

/// Externally visible signature and documentation of one module method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MethodDescriptor {
    /// Fully-qualified name of the type that declares the method.
    pub owner: String,
    pub method: String,
    pub params: Vec<Parameter>,
    /// Documentation body without `/**` and `*/`; empty when none was found.
    pub doc: String,
}

/// An instantiated module: configured name plus its implementing type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ModuleInstance {
    pub name: String,
    pub type_name: String,
}
