//! Cross-cutting error types for Lexi.
//!
//! Domain-specific errors (e.g., `DatabaseError`, `ConfigError`) are defined
//! in their respective crates. This module holds the errors that can originate
//! from the domain types themselves.

use thiserror::Error;

/// Errors raised by the core domain types.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The input text normalized to an empty string and cannot become a word.
    /// Carries the original input for diagnostics.
    #[error("Word is empty after normalization: {raw:?}")]
    EmptyAfterNormalization { raw: String },

    /// Entity lookup returned no result.
    #[error("Entity not found: {entity_type} {id}")]
    NotFound { entity_type: String, id: String },

    /// Data failed validation (format, constraints).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Catch-all for unexpected errors.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
