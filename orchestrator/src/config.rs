//! Engine tunables

use std::time::Duration;

/// Limits that shape a generation request
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Names returned per request (and the early-stop threshold)
    pub target_count: usize,
    /// Model rounds per request
    pub max_attempts: u32,
    /// Most recent names remembered per category
    pub history_cap: usize,
    /// Names requested from the model per round
    pub request_size: usize,
    /// Categories returned by `suggest`
    pub suggestion_limit: usize,
    /// Deadline for a single model call
    pub model_timeout: Duration,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            target_count: 10,
            max_attempts: 3,
            history_cap: 30,
            request_size: 30,
            suggestion_limit: 5,
            model_timeout: Duration::from_secs(60),
        }
    }
}
