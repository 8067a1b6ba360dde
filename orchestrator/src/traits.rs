//! Trait definitions with mockall annotations for testing
//!
//! External trademark registries are reached through this seam so that the
//! aggregator can be exercised without network access.

use async_trait::async_trait;
use shared::ApiFailure;

/// A single trademark registry (one jurisdiction)
#[mockall::automock]
#[async_trait]
pub trait TrademarkRegistry: Send + Sync {
    /// Key under which this registry's answer is reported, e.g. `"us"`
    fn jurisdiction(&self) -> String;

    /// `Ok(true)` when a mark for `name` already exists
    async fn lookup(&self, name: &str) -> Result<bool, ApiFailure>;
}
