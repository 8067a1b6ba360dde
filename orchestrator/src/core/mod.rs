//! Core engine state and ranking
//!
//! Pure in-memory logic with no network I/O

pub mod history;
pub mod suggestions;

// Re-export commonly used types
pub use history::{dedup_within_batch, CategoryHistory, HistoryStore};
pub use suggestions::SuggestionRanker;
