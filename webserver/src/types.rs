//! Request and response bodies of the HTTP API

use serde::{Deserialize, Serialize};
use serde_json::Value;

use shared::GenerationResult;

/// `POST /generate` body.
///
/// Fields are read leniently: a missing or non-string category is treated as
/// blank so that it is rejected with the usual 400 instead of a parse error.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub category: Value,

    #[serde(default, rename = "isRegenerate")]
    pub is_regenerate: Value,
}

impl GenerateRequest {
    pub fn category(&self) -> &str {
        self.category.as_str().unwrap_or_default()
    }

    pub fn is_regenerate(&self) -> bool {
        self.is_regenerate.as_bool().unwrap_or(false)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub success: bool,
    pub category: String,
    pub results: GenerationResult,
}

/// `POST /suggest` body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SuggestRequest {
    #[serde(default)]
    pub query: Value,
}

impl SuggestRequest {
    pub fn query(&self) -> &str {
        self.query.as_str().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SuggestResponse {
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}
