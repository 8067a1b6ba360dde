//! WebServer-specific error types

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use orchestrator::EngineError;
use shared::{Component, SharedError};

use crate::types::ErrorBody;

/// Message returned for any failure not caused by the request itself
pub const GENERATION_FAILED_MESSAGE: &str = "Failed to generate names";

#[derive(Error, Debug)]
pub enum WebServerError {
    #[error("Server startup error: {0}")]
    ServerStartup(String),

    #[error(transparent)]
    Engine(#[from] EngineError),

    #[error("Shared component error: {0}")]
    SharedError(#[from] SharedError),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl WebServerError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            WebServerError::Engine(EngineError::InvalidInput { .. }) => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Client-facing message; internal details stay in the logs
    pub fn public_message(&self) -> String {
        match self {
            WebServerError::Engine(EngineError::InvalidInput { reason }) => reason.clone(),
            _ => GENERATION_FAILED_MESSAGE.to_string(),
        }
    }
}

impl IntoResponse for WebServerError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            shared::component_error!(Component::WebServer, error = %self, "Request failed");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };
        (status, Json(body)).into_response()
    }
}

pub type WebServerResult<T> = Result<T, WebServerError>;
