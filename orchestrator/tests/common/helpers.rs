//! Builders for engines wired to mock collaborators

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use mockall::Sequence;
use orchestrator::{EngineConfig, GenerationOrchestrator, MockTrademarkRegistry, TrademarkAggregator, TrademarkRegistry};
use producer::{MockModelClient, ModelClient, ModelResponse};
use shared::{ApiFailure, ModelBackend};

/// Builder for an engine whose model replies are scripted in order
pub struct EngineBuilder {
    replies: Vec<Result<String, ApiFailure>>,
    taken: Vec<String>,
    config: EngineConfig,
}

impl EngineBuilder {
    pub fn new() -> Self {
        Self {
            replies: Vec::new(),
            taken: Vec::new(),
            config: EngineConfig::default(),
        }
    }

    /// Next model call succeeds with `raw`
    pub fn reply(mut self, raw: impl Into<String>) -> Self {
        self.replies.push(Ok(raw.into()));
        self
    }

    /// Next model call fails
    pub fn fail(mut self, failure: ApiFailure) -> Self {
        self.replies.push(Err(failure));
        self
    }

    /// Names the US registry reports as trademarked
    pub fn with_taken(mut self, names: &[&str]) -> Self {
        self.taken = names.iter().map(|n| n.to_string()).collect();
        self
    }

    pub fn with_config(mut self, config: EngineConfig) -> Self {
        self.config = config;
        self
    }

    /// Every scripted reply must be consumed exactly once, in order
    pub fn build(self) -> GenerationOrchestrator<MockModelClient> {
        let mut client = MockModelClient::new();
        let mut sequence = Sequence::new();
        for reply in self.replies {
            client
                .expect_complete()
                .times(1)
                .in_sequence(&mut sequence)
                .returning(move |_| {
                    reply
                        .clone()
                        .map(|content| ModelResponse::new(content, "phi3".to_string(), Duration::from_millis(5)))
                });
        }
        client.expect_backend().return_const(ModelBackend::Ollama);

        GenerationOrchestrator::new(client, registries(self.taken), self.config)
    }
}

/// US registry honouring `taken`, India always available
pub fn registries(taken: Vec<String>) -> TrademarkAggregator {
    let mut us = MockTrademarkRegistry::new();
    us.expect_jurisdiction().return_const("us".to_string());
    us.expect_lookup().returning(move |name| Ok(taken.iter().any(|t| t == name)));

    let mut india = MockTrademarkRegistry::new();
    india.expect_jurisdiction().return_const("india".to_string());
    india.expect_lookup().returning(|_| Ok(false));

    let registries: Vec<Arc<dyn TrademarkRegistry>> = vec![Arc::new(us), Arc::new(india)];
    TrademarkAggregator::new(registries, Duration::from_secs(5))
}

/// Model client that never answers in time
pub struct StalledModelClient;

#[async_trait]
impl ModelClient for StalledModelClient {
    async fn complete(&self, _prompt: &str) -> Result<ModelResponse, ApiFailure> {
        tokio::time::sleep(Duration::from_secs(60)).await;
        Ok(ModelResponse::new(String::new(), "phi3".to_string(), Duration::from_secs(60)))
    }

    fn backend(&self) -> ModelBackend {
        ModelBackend::Ollama
    }
}
