//! Brand-name generation service entry point

use std::net::SocketAddr;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use tokio::signal;

use orchestrator::{EngineConfig, GenerationOrchestrator, TrademarkAggregator};
use producer::HttpModelClient;
use shared::{logging, Component, ModelBackend, ModelConfig};
use webserver::WebServer;

/// Command line arguments, each also readable from the environment
#[derive(Parser, Debug)]
#[command(name = "webserver")]
#[command(about = "Brand-name generation service")]
struct Args {
    /// Port for the HTTP server
    #[arg(long, env = "PORT", default_value = "3000")]
    port: u16,

    /// Interface to bind
    #[arg(long, env = "BIND_HOST", default_value = "0.0.0.0")]
    bind_host: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Model backend (ollama, openai, anthropic, gemini)
    #[arg(long, env = "MODEL_BACKEND", default_value = "ollama")]
    model_backend: String,

    /// Model name; defaults to the backend's default model
    #[arg(long, env = "MODEL_NAME")]
    model_name: Option<String>,

    /// Model API base URL; defaults to the backend's public host
    #[arg(long, env = "MODEL_HOST")]
    model_host: Option<String>,

    /// Deadline for one model call, in seconds
    #[arg(long, env = "MODEL_TIMEOUT_SECS", default_value = "60")]
    model_timeout_secs: u64,

    /// Deadline for one trademark lookup, in seconds
    #[arg(long, env = "TRADEMARK_TIMEOUT_SECS", default_value = "10")]
    trademark_timeout_secs: u64,

    /// USPTO search API base URL
    #[arg(long, env = "USPTO_BASE_URL", default_value = orchestrator::services::DEFAULT_USPTO_BASE_URL)]
    uspto_base_url: String,
}

impl Args {
    fn model_config(&self) -> anyhow::Result<ModelConfig> {
        let backend: ModelBackend = self.model_backend.parse()?;
        let mut config = ModelConfig::for_backend(backend);

        if let Some(model) = &self.model_name {
            config.model = model.clone();
        }
        if let Some(host) = &self.model_host {
            config.host = host.clone();
        }
        config.timeout_secs = self.model_timeout_secs;
        config.api_key = backend
            .api_key_vars()
            .iter()
            .find_map(|var| std::env::var(var).ok().filter(|key| !key.trim().is_empty()));

        Ok(config)
    }

    fn bind_address(&self) -> anyhow::Result<SocketAddr> {
        format!("{}:{}", self.bind_host, self.port)
            .parse()
            .with_context(|| format!("Invalid bind address {}:{}", self.bind_host, self.port))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let args = Args::parse();
    logging::init_tracing_with_level(Some(&args.log_level));

    let model_config = args.model_config()?;
    shared::component_info!(
        Component::WebServer,
        backend = %model_config.backend,
        model = %model_config.model,
        host = %model_config.host,
        "Model backend configured"
    );

    let model_client = HttpModelClient::from_config(model_config).context("Failed to create model client")?;
    let trademarks = TrademarkAggregator::with_default_registries(
        &args.uspto_base_url,
        Duration::from_secs(args.trademark_timeout_secs),
    )
    .context("Failed to create trademark registries")?;

    let engine_config = EngineConfig {
        model_timeout: Duration::from_secs(args.model_timeout_secs),
        ..EngineConfig::default()
    };
    let engine = GenerationOrchestrator::new(model_client, trademarks, engine_config);
    let server = WebServer::new(engine);

    let shutdown = async {
        match signal::ctrl_c().await {
            Ok(()) => logging::log_shutdown(Component::WebServer, "Received Ctrl+C signal"),
            Err(err) => logging::log_error(Component::WebServer, "Signal handling", &err),
        }
    };

    server.run(args.bind_address()?, shutdown).await?;

    logging::log_success(Component::WebServer, "WebServer stopped gracefully");
    Ok(())
}
