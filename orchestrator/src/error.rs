//! Engine error types

use thiserror::Error;
use shared::ApiFailure;

#[derive(Error, Debug)]
pub enum EngineError {
    /// Blank category; rejected before any network call
    #[error("Invalid input: {reason}")]
    InvalidInput { reason: String },

    /// No fresh or fallback names could be produced.
    /// The message stays generic so upstream details never reach callers.
    #[error("Failed to generate names")]
    GenerationFailed,

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    /// Model or registry failure; absorbed inside the engine
    #[error("Upstream unavailable: {0}")]
    Upstream(#[from] ApiFailure),
}

impl EngineError {
    pub fn category_required() -> Self {
        EngineError::InvalidInput {
            reason: "Category is required".to_string(),
        }
    }
}

pub type EngineResult<T> = Result<T, EngineError>;
