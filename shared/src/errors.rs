//! Shared error types for the name generation service

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SharedError {
    #[error("Invalid configuration: {field} = {value}")]
    InvalidConfig { field: String, value: String },

    #[error("Unknown model backend: {name}")]
    UnknownBackend { name: String },

    #[error("Missing API key for {backend} (set one of: {vars})")]
    MissingApiKey { backend: String, vars: String },
}

pub type SharedResult<T> = Result<T, SharedError>;
