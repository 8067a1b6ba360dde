//! Producer-specific data types

use std::time::Duration;

/// Raw text returned by one model call
#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: String,
    pub model_used: String,
    pub response_time: Duration,
}

impl ModelResponse {
    pub fn new(content: impl Into<String>, model_used: impl Into<String>, response_time: Duration) -> Self {
        Self {
            content: content.into(),
            model_used: model_used.into(),
            response_time,
        }
    }
}
