//! Main webserver implementation
//!
//! Owns the generation engine and exposes it through an axum router.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use orchestrator::GenerationOrchestrator;
use producer::ModelClient;
use shared::{logging, Component};

use crate::error::{WebServerError, WebServerResult};
use crate::web::handlers::{generate, health, suggest};

/// HTTP front of one generation engine
pub struct WebServer<M: ModelClient> {
    engine: Arc<GenerationOrchestrator<M>>,
}

impl<M> WebServer<M>
where
    M: ModelClient + 'static,
{
    pub fn new(engine: GenerationOrchestrator<M>) -> Self {
        Self {
            engine: Arc::new(engine),
        }
    }

    /// Build the Axum router with all routes
    pub fn build_router(&self) -> Router {
        // Served both at the root and under /api
        let api = Router::new()
            .route("/generate", post(generate::<M>))
            .route("/suggest", post(suggest::<M>));

        Router::new()
            .route("/", get(health))
            .merge(api.clone())
            .nest("/api", api)
            .layer(
                ServiceBuilder::new()
                    .layer(TraceLayer::new_for_http())
                    .layer(CorsLayer::permissive()),
            )
            .with_state(Arc::clone(&self.engine))
    }

    /// Serve until `shutdown` resolves
    pub async fn run<F>(&self, bind_address: SocketAddr, shutdown: F) -> WebServerResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let router = self.build_router();

        let listener = tokio::net::TcpListener::bind(bind_address)
            .await
            .map_err(|e| WebServerError::ServerStartup(format!("Failed to bind to {}: {}", bind_address, e)))?;

        logging::log_startup(Component::WebServer, &format!("HTTP server on http://{}", bind_address));

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await?;

        Ok(())
    }
}
