//! Trademark availability lookups
//!
//! One lookup per configured jurisdiction, run concurrently. A registry that
//! errors or times out is reported as "not trademarked" (`false`): a registry
//! outage must never block a usable name or fail a generation request.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use futures_util::future::join_all;
use serde::Deserialize;
use url::Url;

use shared::{ApiFailure, Component, NameCandidate, RankedName, TrademarkStatus};
use crate::error::{EngineError, EngineResult};
use crate::traits::TrademarkRegistry;

pub const US_JURISDICTION: &str = "us";
pub const INDIA_JURISDICTION: &str = "india";
pub const DEFAULT_USPTO_BASE_URL: &str = "https://developer.uspto.gov";

const USPTO_SEARCH_PATH: &str = "ibd-api/v1/application/publications";

/// Fans out lookups to every registry and merges the answers
#[derive(Clone)]
pub struct TrademarkAggregator {
    registries: Vec<Arc<dyn TrademarkRegistry>>,
    lookup_timeout: Duration,
}

impl TrademarkAggregator {
    pub fn new(registries: Vec<Arc<dyn TrademarkRegistry>>, lookup_timeout: Duration) -> Self {
        Self {
            registries,
            lookup_timeout,
        }
    }

    /// USPTO plus the simulated Indian registry
    pub fn with_default_registries(uspto_base_url: &str, lookup_timeout: Duration) -> EngineResult<Self> {
        let registries: Vec<Arc<dyn TrademarkRegistry>> = vec![
            Arc::new(UsptoRegistry::new(uspto_base_url, lookup_timeout)?),
            Arc::new(IndiaRegistry),
        ];
        Ok(Self::new(registries, lookup_timeout))
    }

    pub fn jurisdictions(&self) -> Vec<String> {
        self.registries.iter().map(|r| r.jurisdiction()).collect()
    }

    /// jurisdiction → trademarked, never failing
    pub async fn check_availability(&self, name: &str) -> TrademarkStatus {
        let lookups = self.registries.iter().map(|registry| async move {
            let jurisdiction = registry.jurisdiction();
            let taken = match tokio::time::timeout(self.lookup_timeout, registry.lookup(name)).await {
                Ok(Ok(taken)) => taken,
                Ok(Err(failure)) => {
                    shared::component_warn!(Component::Engine, %jurisdiction, name, %failure, "Trademark lookup failed, assuming available");
                    false
                }
                Err(_) => {
                    shared::component_warn!(Component::Engine, %jurisdiction, name, "Trademark lookup timed out, assuming available");
                    false
                }
            };
            (jurisdiction, taken)
        });

        join_all(lookups).await.into_iter().collect()
    }

    /// Rank candidates 1..=n in order and attach trademark status to each.
    ///
    /// Lookups for all names run concurrently; results stay with their name.
    pub async fn annotate(&self, candidates: &[NameCandidate]) -> Vec<RankedName> {
        let annotated = candidates.iter().enumerate().map(|(index, candidate)| async move {
            RankedName {
                rank: index as u32 + 1,
                name: candidate.name.clone(),
                meaning: candidate.meaning.clone(),
                trademark: self.check_availability(&candidate.name).await,
            }
        });

        join_all(annotated).await
    }
}

#[derive(Deserialize)]
struct UsptoSearchResponse {
    response: Option<UsptoSearchBody>,
}

#[derive(Deserialize)]
struct UsptoSearchBody {
    #[serde(rename = "numFound")]
    num_found: Option<u64>,
}

/// USPTO publication search; a name is taken when any publication matches
pub struct UsptoRegistry {
    endpoint: Url,
    client: reqwest::Client,
}

impl UsptoRegistry {
    /// `base_url` may carry a path prefix (e.g. a proxy mount); the search path is appended to it
    pub fn new(base_url: &str, timeout: Duration) -> EngineResult<Self> {
        let endpoint = Url::parse(base_url)
            .and_then(|mut base| {
                // Without a trailing slash `join` would replace the last segment
                if !base.path().ends_with('/') {
                    let prefixed = format!("{}/", base.path());
                    base.set_path(&prefixed);
                }
                base.join(USPTO_SEARCH_PATH)
            })
            .map_err(|e| EngineError::ConfigError {
                message: format!("invalid USPTO base URL '{base_url}': {e}"),
            })?;

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| EngineError::ConfigError {
                message: format!("failed to build USPTO client: {e}"),
            })?;

        Ok(Self { endpoint, client })
    }

    fn search_url(&self, name: &str) -> Url {
        let mut url = self.endpoint.clone();
        url.query_pairs_mut().append_pair("searchText", name).append_pair("rows", "1");
        url
    }
}

#[async_trait]
impl TrademarkRegistry for UsptoRegistry {
    fn jurisdiction(&self) -> String {
        US_JURISDICTION.to_string()
    }

    async fn lookup(&self, name: &str) -> Result<bool, ApiFailure> {
        let response = self
            .client
            .get(self.search_url(name))
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() {
                    ApiFailure::Timeout
                } else {
                    ApiFailure::NetworkError(e.to_string())
                }
            })?;

        if !response.status().is_success() {
            return Err(ApiFailure::from_status(response.status().as_u16()));
        }

        let body: UsptoSearchResponse = response
            .json()
            .await
            .map_err(|e| ApiFailure::InvalidResponse(format!("Failed to parse USPTO response: {e}")))?;

        Ok(body.response.and_then(|r| r.num_found).unwrap_or(0) > 0)
    }
}

/// Indian registry has no public search API; every name is reported available
pub struct IndiaRegistry;

#[async_trait]
impl TrademarkRegistry for IndiaRegistry {
    fn jurisdiction(&self) -> String {
        INDIA_JURISDICTION.to_string()
    }

    async fn lookup(&self, name: &str) -> Result<bool, ApiFailure> {
        shared::component_debug!(Component::Engine, name, "Simulated India trademark check");
        Ok(false)
    }
}
