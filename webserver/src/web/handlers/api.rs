//! REST API handlers
//!
//! JSON endpoints backed by the generation engine

use std::sync::Arc;

use axum::{extract::State, response::Json};

use orchestrator::GenerationOrchestrator;
use producer::ModelClient;
use shared::Component;

use crate::error::WebServerResult;
use crate::types::{GenerateRequest, GenerateResponse, SuggestRequest, SuggestResponse};

/// Plain-text liveness check
pub async fn health() -> &'static str {
    "Backend is running!"
}

/// Generate brand names - /generate
///
/// A missing or unreadable body is treated like a blank category.
pub async fn generate<M>(
    State(engine): State<Arc<GenerationOrchestrator<M>>>,
    body: Option<Json<GenerateRequest>>,
) -> WebServerResult<Json<GenerateResponse>>
where
    M: ModelClient + 'static,
{
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let category = request.category();

    shared::component_info!(
        Component::WebServer,
        category,
        is_regenerate = request.is_regenerate(),
        "Generate request"
    );

    let results = engine.generate(category, request.is_regenerate()).await?;

    Ok(Json(GenerateResponse {
        success: true,
        category: category.to_string(),
        results,
    }))
}

/// Category autocomplete - /suggest, always 200
pub async fn suggest<M>(
    State(engine): State<Arc<GenerationOrchestrator<M>>>,
    body: Option<Json<SuggestRequest>>,
) -> Json<SuggestResponse>
where
    M: ModelClient + 'static,
{
    let request = body.map(|Json(request)| request).unwrap_or_default();
    let suggestions = engine.suggest(request.query()).await;

    shared::component_debug!(Component::WebServer, query = request.query(), count = suggestions.len(), "Suggest request");
    Json(SuggestResponse { suggestions })
}
