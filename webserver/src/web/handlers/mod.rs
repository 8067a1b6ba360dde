pub mod api;

pub use api::{generate, health, suggest};
