//! Producer core logic (pure, no I/O)

pub mod parser;
pub mod prompt;

pub use parser::{NameParser, MAX_NAME_CHARS, NAME_SEPARATOR};
pub use prompt::PromptBuilder;
