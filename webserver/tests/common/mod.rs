//! Shared helpers for HTTP-level tests

use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use mockall::Sequence;
use serde_json::Value;
use tower::ServiceExt;

use orchestrator::{EngineConfig, GenerationOrchestrator, MockTrademarkRegistry, TrademarkAggregator, TrademarkRegistry};
use producer::{MockModelClient, ModelResponse};
use shared::ApiFailure;
use webserver::WebServer;

/// Numbered `Name - Meaning` lines
pub fn model_output(names: &[&str]) -> String {
    names
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{}. {} - About {}", i + 1, name, name))
        .collect::<Vec<_>>()
        .join("\n")
}

pub const NAMES: [&str; 10] = ["Nova", "Brio", "Lumo", "Zest", "Kova", "Lyra", "Vexa", "Quil", "Orro", "Tavi"];

/// Server whose model answers with `replies` in order, one attempt per request
pub fn server_with_replies(replies: Vec<Result<String, ApiFailure>>) -> WebServer<MockModelClient> {
    let mut client = MockModelClient::new();
    let mut sequence = Sequence::new();
    for reply in replies {
        client
            .expect_complete()
            .times(1)
            .in_sequence(&mut sequence)
            .returning(move |_| {
                reply
                    .clone()
                    .map(|content| ModelResponse::new(content, "phi3".to_string(), Duration::from_millis(1)))
            });
    }

    let mut us = MockTrademarkRegistry::new();
    us.expect_jurisdiction().return_const("us".to_string());
    us.expect_lookup().returning(|name| Ok(name == "Brio"));

    let mut india = MockTrademarkRegistry::new();
    india.expect_jurisdiction().return_const("india".to_string());
    india.expect_lookup().returning(|_| Ok(false));

    let registries: Vec<Arc<dyn TrademarkRegistry>> = vec![Arc::new(us), Arc::new(india)];
    let config = EngineConfig {
        max_attempts: 1,
        ..EngineConfig::default()
    };

    WebServer::new(GenerationOrchestrator::new(
        client,
        TrademarkAggregator::new(registries, Duration::from_secs(5)),
        config,
    ))
}

pub async fn send(router: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = router.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = serde_json::from_slice(&bytes).unwrap_or_else(|_| Value::String(String::from_utf8_lossy(&bytes).into_owned()));
    (status, body)
}

pub async fn post_json(router: Router, uri: &str, body: Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(router, request).await
}
