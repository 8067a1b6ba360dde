//! Core types used throughout the name generation service

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::time::Duration;

use crate::errors::{SharedError, SharedResult};

/// Component emitting a log line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Component {
    /// Generation engine (orchestrator + producer crates)
    Engine,
    /// HTTP surface
    WebServer,
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Component::Engine => write!(f, "engine"),
            Component::WebServer => write!(f, "webserver"),
        }
    }
}

/// Lowercased, trimmed form of a user-supplied category.
///
/// Every lookup into the history and frequency tables goes through this key,
/// which makes them case-insensitive.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CategoryKey(String);

impl CategoryKey {
    /// Build a key from raw input; blank input yields `None`
    pub fn new(category: &str) -> Option<Self> {
        let trimmed = category.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_lowercase()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CategoryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A brand-name candidate with its short explanation.
///
/// The display form keeps the model's casing; identity is the lowercased name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameCandidate {
    pub name: String,
    pub meaning: String,
}

impl NameCandidate {
    pub fn new(name: impl Into<String>, meaning: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            meaning: meaning.into(),
        }
    }

    /// Dedup identity (meaning is not part of it)
    pub fn key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn same_name(&self, other: &NameCandidate) -> bool {
        self.name.to_lowercase() == other.name.to_lowercase()
    }
}

/// Trademark flags per jurisdiction; `true` means a mark exists and the name is taken
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrademarkStatus(BTreeMap<String, bool>);

impl TrademarkStatus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, jurisdiction: impl Into<String>, trademarked: bool) {
        self.0.insert(jurisdiction.into(), trademarked);
    }

    pub fn get(&self, jurisdiction: &str) -> Option<bool> {
        self.0.get(jurisdiction).copied()
    }

    /// True when any registry reported an existing mark
    pub fn is_trademarked_anywhere(&self) -> bool {
        self.0.values().any(|taken| *taken)
    }

    pub fn jurisdictions(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(String, bool)> for TrademarkStatus {
    fn from_iter<I: IntoIterator<Item = (String, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// One entry of a generation response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedName {
    /// 1-based position in model output order
    pub rank: u32,
    pub name: String,
    pub meaning: String,
    pub trademark: TrademarkStatus,
}

/// Ranked, trademark-annotated names returned for one request (at most 10)
pub type GenerationResult = Vec<RankedName>;

/// Generative-text backends the model client can talk to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ModelBackend {
    Ollama,
    OpenAI,
    Anthropic,
    Gemini,
}

impl ModelBackend {
    pub fn default_model(&self) -> &'static str {
        match self {
            ModelBackend::Ollama => "phi3",
            ModelBackend::OpenAI => "gpt-4o-mini",
            ModelBackend::Anthropic => "claude-3-5-haiku-latest",
            ModelBackend::Gemini => "gemini-1.5-flash",
        }
    }

    pub fn default_host(&self) -> &'static str {
        match self {
            ModelBackend::Ollama => "http://localhost:11434",
            ModelBackend::OpenAI => "https://api.openai.com",
            ModelBackend::Anthropic => "https://api.anthropic.com",
            ModelBackend::Gemini => "https://generativelanguage.googleapis.com",
        }
    }

    /// Hosted backends need a key; a local Ollama does not
    pub fn requires_api_key(&self) -> bool {
        !matches!(self, ModelBackend::Ollama)
    }

    /// Environment variables consulted for the backend's API key, in order
    pub fn api_key_vars(&self) -> &'static [&'static str] {
        match self {
            ModelBackend::Ollama => &[],
            ModelBackend::OpenAI => &["OPENAI_API_KEY"],
            ModelBackend::Anthropic => &["ANTHROPIC_API_KEY"],
            ModelBackend::Gemini => &["GOOGLE_API_KEY", "GEMINI_API_KEY"],
        }
    }
}

impl fmt::Display for ModelBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelBackend::Ollama => write!(f, "ollama"),
            ModelBackend::OpenAI => write!(f, "openai"),
            ModelBackend::Anthropic => write!(f, "anthropic"),
            ModelBackend::Gemini => write!(f, "gemini"),
        }
    }
}

impl std::str::FromStr for ModelBackend {
    type Err = SharedError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "ollama" => Ok(ModelBackend::Ollama),
            "openai" => Ok(ModelBackend::OpenAI),
            "anthropic" | "claude" => Ok(ModelBackend::Anthropic),
            "gemini" | "google" => Ok(ModelBackend::Gemini),
            _ => Err(SharedError::UnknownBackend { name: s.to_string() }),
        }
    }
}

/// Connection and sampling settings for the model client
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    pub backend: ModelBackend,
    pub model: String,
    pub host: String,
    pub api_key: Option<String>,
    pub temperature: f32,
    pub max_tokens: u32,
    pub timeout_secs: u64,
}

impl ModelConfig {
    /// Defaults for a backend: its default model and public host
    pub fn for_backend(backend: ModelBackend) -> Self {
        Self {
            backend,
            model: backend.default_model().to_string(),
            host: backend.default_host().to_string(),
            api_key: None,
            temperature: 0.8,
            max_tokens: 1024,
            timeout_secs: 60,
        }
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Reject values no backend call could succeed with
    pub fn validate(&self) -> SharedResult<()> {
        if self.model.trim().is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "model".to_string(),
                value: self.model.clone(),
            });
        }
        if self.host.trim().is_empty() {
            return Err(SharedError::InvalidConfig {
                field: "host".to_string(),
                value: self.host.clone(),
            });
        }
        if self.timeout_secs == 0 {
            return Err(SharedError::InvalidConfig {
                field: "timeout_secs".to_string(),
                value: self.timeout_secs.to_string(),
            });
        }
        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(SharedError::InvalidConfig {
                field: "temperature".to_string(),
                value: self.temperature.to_string(),
            });
        }
        Ok(())
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self::for_backend(ModelBackend::Ollama)
    }
}

/// Failures reported by upstream services (model backends and trademark registries)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApiFailure {
    Timeout,
    NetworkError(String),
    AuthenticationFailed,
    RateLimitExceeded,
    ServiceUnavailable,
    ServerError(String),
    InvalidResponse(String),
}

impl ApiFailure {
    /// Map a non-success HTTP status to a failure
    pub fn from_status(status: u16) -> Self {
        match status {
            401 | 403 => ApiFailure::AuthenticationFailed,
            429 => ApiFailure::RateLimitExceeded,
            503 => ApiFailure::ServiceUnavailable,
            other => ApiFailure::ServerError(format!("HTTP {other}")),
        }
    }
}

impl fmt::Display for ApiFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiFailure::Timeout => write!(f, "request timed out"),
            ApiFailure::NetworkError(msg) => write!(f, "network error: {msg}"),
            ApiFailure::AuthenticationFailed => write!(f, "authentication failed"),
            ApiFailure::RateLimitExceeded => write!(f, "rate limit exceeded"),
            ApiFailure::ServiceUnavailable => write!(f, "service unavailable"),
            ApiFailure::ServerError(msg) => write!(f, "server error: {msg}"),
            ApiFailure::InvalidResponse(msg) => write!(f, "invalid response: {msg}"),
        }
    }
}

impl std::error::Error for ApiFailure {}
