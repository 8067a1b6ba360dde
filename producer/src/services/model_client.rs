//! HTTP model client for the supported generative-text backends

use std::time::Instant;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use url::Url;

use shared::{ApiFailure, ModelBackend, ModelConfig};
use crate::error::{ProducerError, ProducerResult};
use crate::traits::ModelClient;
use crate::types::ModelResponse;

/// Model client speaking the HTTP API of one configured backend
pub struct HttpModelClient {
    config: ModelConfig,
    base_url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct OllamaGenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
    options: OllamaOptions,
}

#[derive(Serialize)]
struct OllamaOptions {
    temperature: f32,
    num_predict: u32,
}

#[derive(Deserialize)]
struct OllamaGenerateResponse {
    response: String,
}

impl HttpModelClient {
    /// Validate the configuration and build the HTTP client
    pub fn from_config(config: ModelConfig) -> ProducerResult<Self> {
        config.validate()?;

        Url::parse(&config.host).map_err(|e| ProducerError::ConfigError {
            message: format!("invalid model host '{}': {}", config.host, e),
        })?;

        if config.backend.requires_api_key() && config.api_key.as_deref().map_or(true, |k| k.trim().is_empty()) {
            return Err(shared::SharedError::MissingApiKey {
                backend: config.backend.to_string(),
                vars: config.backend.api_key_vars().join(", "),
            }
            .into());
        }

        let client = reqwest::Client::builder().timeout(config.timeout()).build()?;

        Ok(Self {
            base_url: config.host.trim_end_matches('/').to_string(),
            config,
            client,
        })
    }

    pub fn config(&self) -> &ModelConfig {
        &self.config
    }

    fn api_key(&self) -> Result<&str, ApiFailure> {
        self.config.api_key.as_deref().ok_or(ApiFailure::AuthenticationFailed)
    }

    /// Ollama `/api/generate`, non-streaming
    async fn make_ollama_request(&self, prompt: &str) -> Result<String, ApiFailure> {
        let body = OllamaGenerateRequest {
            model: &self.config.model,
            prompt,
            stream: false,
            options: OllamaOptions {
                temperature: self.config.temperature,
                num_predict: self.config.max_tokens,
            },
        };

        let response = self
            .client
            .post(format!("{}/api/generate", self.base_url))
            .json(&body)
            .send()
            .await
            .map_err(map_send_error)?;

        let response = check_status(response)?;
        let parsed: OllamaGenerateResponse = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidResponse(format!("Failed to parse response: {e}")))?;

        Ok(parsed.response)
    }

    async fn make_openai_request(&self, prompt: &str) -> Result<String, ApiFailure> {
        let api_key = self.api_key()?;

        let request_body = serde_json::json!({
            "model": self.config.model,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ],
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature
        });

        let response = self
            .client
            .post(format!("{}/v1/chat/completions", self.base_url))
            .bearer_auth(api_key)
            .json(&request_body)
            .send()
            .await
            .map_err(map_send_error)?;

        let response_json = read_json(response).await?;

        response_json
            .get("choices")
            .and_then(|choices| choices.get(0))
            .and_then(|choice| choice.get("message"))
            .and_then(|message| message.get("content"))
            .and_then(|content| content.as_str())
            .map(str::to_string)
            .ok_or_else(|| ApiFailure::InvalidResponse("No content in response".to_string()))
    }

    async fn make_anthropic_request(&self, prompt: &str) -> Result<String, ApiFailure> {
        let api_key = self.api_key()?;

        let request_body = serde_json::json!({
            "model": self.config.model,
            "max_tokens": self.config.max_tokens,
            "temperature": self.config.temperature,
            "messages": [
                {
                    "role": "user",
                    "content": prompt
                }
            ]
        });

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", api_key)
            .header("anthropic-version", "2023-06-01")
            .json(&request_body)
            .send()
            .await
            .map_err(map_send_error)?;

        let response_json = read_json(response).await?;

        response_json
            .get("content")
            .and_then(|content| content.get(0))
            .and_then(|item| item.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or_else(|| ApiFailure::InvalidResponse("No content in response".to_string()))
    }

    async fn make_gemini_request(&self, prompt: &str) -> Result<String, ApiFailure> {
        let api_key = self.api_key()?;

        let request_body = serde_json::json!({
            "contents": [
                {
                    "parts": [
                        {
                            "text": prompt
                        }
                    ]
                }
            ],
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature
            }
        });

        let response = self
            .client
            .post(format!("{}/v1beta/models/{}:generateContent", self.base_url, self.config.model))
            .query(&[("key", api_key)])
            .json(&request_body)
            .send()
            .await
            .map_err(map_send_error)?;

        let response_json = read_json(response).await?;

        response_json
            .get("candidates")
            .and_then(|candidates| candidates.get(0))
            .and_then(|candidate| candidate.get("content"))
            .and_then(|content| content.get("parts"))
            .and_then(|parts| parts.get(0))
            .and_then(|part| part.get("text"))
            .and_then(|text| text.as_str())
            .map(str::to_string)
            .ok_or_else(|| ApiFailure::InvalidResponse("No content in response".to_string()))
    }
}

#[async_trait]
impl ModelClient for HttpModelClient {
    async fn complete(&self, prompt: &str) -> Result<ModelResponse, ApiFailure> {
        let request_start = Instant::now();

        let content = match self.config.backend {
            ModelBackend::Ollama => self.make_ollama_request(prompt).await?,
            ModelBackend::OpenAI => self.make_openai_request(prompt).await?,
            ModelBackend::Anthropic => self.make_anthropic_request(prompt).await?,
            ModelBackend::Gemini => self.make_gemini_request(prompt).await?,
        };

        let response_time = request_start.elapsed();
        tracing::debug!(
            backend = %self.config.backend,
            model = %self.config.model,
            elapsed_ms = response_time.as_millis() as u64,
            bytes = content.len(),
            "Model call completed"
        );

        Ok(ModelResponse::new(content, self.config.model.clone(), response_time))
    }

    fn backend(&self) -> ModelBackend {
        self.config.backend
    }
}

fn map_send_error(e: reqwest::Error) -> ApiFailure {
    if e.is_timeout() {
        ApiFailure::Timeout
    } else {
        ApiFailure::NetworkError(e.to_string())
    }
}

fn check_status(response: reqwest::Response) -> Result<reqwest::Response, ApiFailure> {
    if response.status().is_success() {
        Ok(response)
    } else {
        Err(ApiFailure::from_status(response.status().as_u16()))
    }
}

async fn read_json(response: reqwest::Response) -> Result<serde_json::Value, ApiFailure> {
    check_status(response)?
        .json()
        .await
        .map_err(|e| ApiFailure::InvalidResponse(format!("Failed to parse response: {e}")))
}
