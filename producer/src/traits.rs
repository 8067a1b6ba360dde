//! Producer trait definitions for dependency injection

use async_trait::async_trait;

use shared::{ApiFailure, ModelBackend};
use crate::types::ModelResponse;

/// Client for a generative-text backend
#[mockall::automock]
#[async_trait]
pub trait ModelClient: Send + Sync {
    /// Send a free-text prompt and return the raw completion
    async fn complete(&self, prompt: &str) -> Result<ModelResponse, ApiFailure>;

    /// Backend this client talks to
    fn backend(&self) -> ModelBackend;
}
