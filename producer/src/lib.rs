//! Producer library for the brand-name generation service
//!
//! Everything that faces the generative model lives here: the model client
//! abstraction and its HTTP backends, the prompt builder, and the parser that
//! turns free model text into structured name candidates.

pub mod core;
pub mod error;
pub mod services;
pub mod traits;
pub mod types;

// Re-export main types
pub use core::{NameParser, PromptBuilder};
pub use error::{ProducerError, ProducerResult};
pub use services::HttpModelClient;
pub use traits::*;
pub use types::*;
