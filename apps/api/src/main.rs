mod config;
mod errors;
mod generation;
mod llm_client;
mod models;
mod render;
mod routes;
mod state;
mod styles;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::generation::templates::{preload, TemplateLibrary};
use crate::llm_client::LlmClient;
use crate::routes::build_router;
use crate::state::AppState;
use crate::styles::StyleRegistry;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_CRATE_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume Builder v{}", env!("CARGO_PKG_VERSION"));

    let styles = StyleRegistry::load(config.styles_dir.as_deref())?;

    let templates = TemplateLibrary::from_config(config.prompts_dir.as_deref());
    if let Err(e) = preload(&templates).await {
        // Requests for the affected kind will fail with the same error.
        warn!("Prompt templates not fully available: {e:#}");
    }

    let llm = LlmClient::new(&config)?;
    info!("LLM client initialized (model: {})", llm.model());
    if config.openai_api_key.is_none() {
        warn!("OPENAI_API_KEY not set; requests must supply api_key");
    }

    let state = AppState {
        config: Arc::new(config.clone()),
        styles: Arc::new(styles),
        templates,
        completion: Arc::new(llm),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
