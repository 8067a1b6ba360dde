//! Tests for HttpModelClient

use std::time::Duration;

use serde_json::json;
use shared::{ApiFailure, ModelBackend, ModelConfig, SharedError};
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::error::ProducerError;
use crate::services::model_client::HttpModelClient;
use crate::traits::ModelClient;

fn config_for(backend: ModelBackend, server: &MockServer) -> ModelConfig {
    let mut config = ModelConfig::for_backend(backend);
    config.host = server.uri();
    if backend.requires_api_key() {
        config.api_key = Some("test-key".to_string());
    }
    config
}

#[tokio::test]
async fn test_ollama_generate_request() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/generate"))
        .and(body_partial_json(json!({ "model": "phi3", "stream": false })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "model": "phi3",
            "response": "1. Nova - New star\n2. Brio - Vigor",
            "done": true
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = HttpModelClient::from_config(config_for(ModelBackend::Ollama, &server)).unwrap();
    let response = client.complete("prompt").await.unwrap();

    assert_eq!(response.content, "1. Nova - New star\n2. Brio - Vigor");
    assert_eq!(response.model_used, "phi3");
    assert_eq!(client.backend(), ModelBackend::Ollama);
}

#[tokio::test]
async fn test_openai_chat_completion() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .and(header("authorization", "Bearer test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "choices": [{ "message": { "role": "assistant", "content": "Zing - Energy" } }],
            "usage": { "total_tokens": 12 }
        })))
        .mount(&server)
        .await;

    let client = HttpModelClient::from_config(config_for(ModelBackend::OpenAI, &server)).unwrap();
    let response = client.complete("prompt").await.unwrap();
    assert_eq!(response.content, "Zing - Energy");
}

#[tokio::test]
async fn test_anthropic_messages() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/messages"))
        .and(header("x-api-key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [{ "type": "text", "text": "Kova - Strong" }]
        })))
        .mount(&server)
        .await;

    let client = HttpModelClient::from_config(config_for(ModelBackend::Anthropic, &server)).unwrap();
    assert_eq!(client.complete("prompt").await.unwrap().content, "Kova - Strong");
}

#[tokio::test]
async fn test_gemini_generate_content() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-1.5-flash:generateContent"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{ "content": { "parts": [{ "text": "Lyra - Song" }] } }]
        })))
        .mount(&server)
        .await;

    let client = HttpModelClient::from_config(config_for(ModelBackend::Gemini, &server)).unwrap();
    assert_eq!(client.complete("prompt").await.unwrap().content, "Lyra - Song");
}

#[tokio::test]
async fn test_status_codes_map_to_failures() {
    let cases = [
        (401, ApiFailure::AuthenticationFailed),
        (429, ApiFailure::RateLimitExceeded),
        (503, ApiFailure::ServiceUnavailable),
    ];

    for (status, expected) in cases {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(status))
            .mount(&server)
            .await;

        let client = HttpModelClient::from_config(config_for(ModelBackend::Ollama, &server)).unwrap();
        let failure = client.complete("prompt").await.unwrap_err();
        assert_eq!(failure, expected, "status {status}");
    }
}

#[tokio::test]
async fn test_malformed_body_is_invalid_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/chat/completions"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "choices": [] })))
        .mount(&server)
        .await;

    let client = HttpModelClient::from_config(config_for(ModelBackend::OpenAI, &server)).unwrap();
    let failure = client.complete("prompt").await.unwrap_err();
    assert!(matches!(failure, ApiFailure::InvalidResponse(_)));
}

#[tokio::test]
async fn test_slow_backend_times_out() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({ "response": "late" }))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = config_for(ModelBackend::Ollama, &server);
    config.timeout_secs = 1;

    let client = HttpModelClient::from_config(config).unwrap();
    let failure = client.complete("prompt").await.unwrap_err();
    assert_eq!(failure, ApiFailure::Timeout);
}

#[test]
fn test_hosted_backend_requires_key() {
    let config = ModelConfig::for_backend(ModelBackend::OpenAI);
    let result = HttpModelClient::from_config(config);
    assert!(matches!(result, Err(ProducerError::Shared(_))));
}

#[test]
fn test_empty_model_is_rejected() {
    let mut config = ModelConfig::default();
    config.model = "  ".to_string();
    assert!(matches!(
        HttpModelClient::from_config(config),
        Err(ProducerError::Shared(SharedError::InvalidConfig { .. }))
    ));
}

#[test]
fn test_zero_timeout_is_rejected() {
    let mut config = ModelConfig::default();
    config.timeout_secs = 0;
    assert!(matches!(
        HttpModelClient::from_config(config),
        Err(ProducerError::Shared(SharedError::InvalidConfig { .. }))
    ));
}

#[test]
fn test_invalid_host_is_rejected() {
    let mut config = ModelConfig::default();
    config.host = "not a url".to_string();
    assert!(matches!(
        HttpModelClient::from_config(config),
        Err(ProducerError::ConfigError { .. })
    ));
}
