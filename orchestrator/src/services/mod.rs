//! Service implementations
//!
//! Network-facing collaborators of the engine.

pub mod trademark;

#[cfg(test)]
pub mod tests;

pub use trademark::{
    IndiaRegistry, TrademarkAggregator, UsptoRegistry, DEFAULT_USPTO_BASE_URL, INDIA_JURISDICTION,
    US_JURISDICTION,
};
