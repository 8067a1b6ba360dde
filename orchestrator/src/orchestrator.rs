//! Generation engine
//!
//! Drives repeated model calls until enough fresh names are collected for a
//! category, remembers what was returned, and annotates the final list with
//! trademark availability.

use std::collections::HashSet;

use tracing::Instrument;
use uuid::Uuid;

use producer::{ModelClient, NameParser, PromptBuilder};
use shared::{ApiFailure, CategoryKey, Component, GenerationResult, NameCandidate};

use crate::config::EngineConfig;
use crate::core::{dedup_within_batch, HistoryStore, SuggestionRanker};
use crate::error::{EngineError, EngineResult};
use crate::services::TrademarkAggregator;

/// Names collected over all attempts of one request
struct Collected {
    fresh: Vec<NameCandidate>,
    last_batch: Option<Vec<NameCandidate>>,
    successful_attempts: u32,
    last_failure: Option<ApiFailure>,
}

/// Coordinates model client, parser, history store and trademark lookups
pub struct GenerationOrchestrator<M: ModelClient> {
    model_client: M,
    parser: NameParser,
    prompts: PromptBuilder,
    history: HistoryStore,
    ranker: SuggestionRanker,
    trademarks: TrademarkAggregator,
    config: EngineConfig,
}

impl<M: ModelClient> GenerationOrchestrator<M> {
    pub fn new(model_client: M, trademarks: TrademarkAggregator, config: EngineConfig) -> Self {
        Self {
            model_client,
            parser: NameParser::new(),
            prompts: PromptBuilder::new(config.request_size),
            history: HistoryStore::new(config.history_cap),
            ranker: SuggestionRanker::new(config.suggestion_limit),
            trademarks,
            config,
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn history_store(&self) -> &HistoryStore {
        &self.history
    }

    /// Produce up to `target_count` ranked, trademark-annotated names for a category.
    ///
    /// With `is_regenerate`, a request that finds nothing new falls back to the
    /// last parsed batch rather than returning an empty list.
    pub async fn generate(&self, category: &str, is_regenerate: bool) -> EngineResult<GenerationResult> {
        let key = CategoryKey::new(category).ok_or_else(EngineError::category_required)?;

        let span = tracing::info_span!(
            "generate",
            request_id = %Uuid::new_v4(),
            category = %key,
            is_regenerate
        );

        self.run(key, category.trim(), is_regenerate).instrument(span).await
    }

    /// Previously searched categories matching `query`
    pub async fn suggest(&self, query: &str) -> Vec<String> {
        let frequencies = self.history.frequencies().await;
        self.ranker.rank(query, &frequencies)
    }

    async fn run(&self, key: CategoryKey, category: &str, is_regenerate: bool) -> EngineResult<GenerationResult> {
        // Counted even when the request later fails
        let searches = self.history.record_search(&key).await;
        shared::component_debug!(Component::Engine, searches, "Recorded category search");

        let prompt = self.prompts.build(category);
        let collected = self.collect(&key, &prompt).await;

        let mut names = collected.fresh;
        if names.is_empty() && is_regenerate {
            if let Some(stale) = collected.last_batch.filter(|batch| !batch.is_empty()) {
                shared::component_info!(Component::Engine, count = stale.len(), "No fresh names on regenerate, returning last batch");
                names = stale;
            }
        }

        if names.is_empty() && collected.successful_attempts == 0 {
            let reason = collected
                .last_failure
                .map(|failure| failure.to_string())
                .unwrap_or_else(|| "no attempts were made".to_string());
            shared::component_error!(Component::Engine, %reason, "All model attempts failed");
            return Err(EngineError::GenerationFailed);
        }

        self.history.merge(&key, &names).await;

        names.truncate(self.config.target_count);
        let results = self.trademarks.annotate(&names).await;

        shared::component_info!(
            Component::Engine,
            returned = results.len(),
            attempts = collected.successful_attempts,
            "Generation complete"
        );
        Ok(results)
    }

    /// Bounded retry loop: stops at `target_count` fresh names or after `max_attempts` rounds
    async fn collect(&self, key: &CategoryKey, prompt: &str) -> Collected {
        let mut collected = Collected {
            fresh: Vec::new(),
            last_batch: None,
            successful_attempts: 0,
            last_failure: None,
        };
        let mut accepted: HashSet<String> = HashSet::new();

        for attempt in 1..=self.config.max_attempts {
            if collected.fresh.len() >= self.config.target_count {
                break;
            }

            let batch = match self.fetch_batch(prompt).await {
                Ok(batch) => batch,
                Err(failure) => {
                    shared::component_warn!(Component::Engine, attempt, %failure, "Model attempt failed");
                    collected.last_failure = Some(failure);
                    continue;
                }
            };
            collected.successful_attempts += 1;

            let unseen = self.history.record_and_filter(key, &batch).await;
            let before = collected.fresh.len();
            for candidate in unseen {
                if accepted.insert(candidate.key()) {
                    collected.fresh.push(candidate);
                }
            }

            shared::component_debug!(
                Component::Engine,
                attempt,
                parsed = batch.len(),
                fresh = collected.fresh.len() - before,
                total = collected.fresh.len(),
                "Model attempt finished"
            );
            collected.last_batch = Some(batch);
        }

        collected
    }

    /// One model round: call, parse, dedup within the batch
    async fn fetch_batch(&self, prompt: &str) -> Result<Vec<NameCandidate>, ApiFailure> {
        let response = tokio::time::timeout(self.config.model_timeout, self.model_client.complete(prompt))
            .await
            .map_err(|_| ApiFailure::Timeout)??;

        Ok(dedup_within_batch(self.parser.parse(&response.content)))
    }
}
