//! Shared types for the brand-name generation service
//!
//! Holds the domain types passed between the model client, the generation
//! engine and the HTTP surface, plus common error and logging utilities.

pub mod errors;
pub mod logging;
pub mod types;

pub use errors::*;
pub use types::*;
