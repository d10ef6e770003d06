//! Error taxonomy for generation.

use thiserror::Error;

/// Errors raised while building or running a [`Generator`](crate::generator::Generator).
///
/// Generation is deterministic, so none of these are retryable: re-running with
/// the same inputs reproduces the same failure.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum GenerateError {
    /// A configured module cannot be resolved or instantiated.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A registry entry points at a method its owning module does not have.
    #[error("module {module} ({type_name}) has no method {method}")]
    Invariant {
        module: String,
        type_name: String,
        method: String,
    },

    /// A built-in template failed to parse or render.
    #[error("template {name}: {message}")]
    Template { name: String, message: String },
}

pub type GenerateResult<T> = Result<T, GenerateError>;
