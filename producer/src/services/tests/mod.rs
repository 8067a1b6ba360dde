//! Tests for producer services
//!
//! HTTP-level tests run against a local wiremock server standing in for
//! each backend.

pub mod model_client;
