//! HTTP surface of the brand-name generation service
//!
//! Exposes the generation engine over a small JSON API consumed by the
//! presentation layer.

pub mod error;
pub mod types;
pub mod web;
pub mod webserver_impl;

// Re-export main types
pub use error::{WebServerError, WebServerResult};
pub use types::*;
pub use webserver_impl::WebServer;
