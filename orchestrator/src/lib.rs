//! Brand-name generation engine
//!
//! Turns a product category into a ranked list of fresh, trademark-annotated
//! brand names. The engine remembers what it has already returned for each
//! category so that repeated requests keep producing new names, and counts
//! category searches to power autocomplete suggestions.

pub mod config;
pub mod core;
pub mod error;
pub mod orchestrator;
pub mod services;
pub mod traits;

// Re-export commonly used types
pub use config::EngineConfig;
pub use core::{dedup_within_batch, CategoryHistory, HistoryStore, SuggestionRanker};
pub use error::{EngineError, EngineResult};
pub use orchestrator::GenerationOrchestrator;
pub use services::{IndiaRegistry, TrademarkAggregator, UsptoRegistry};
pub use traits::{MockTrademarkRegistry, TrademarkRegistry};
