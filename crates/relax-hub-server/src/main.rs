//! AE6 Relax Mode Agent Hub - HTTP server entry point

use std::sync::Arc;

use anyhow::{Context, Result};
use relax_hub::{AgentEngine, CrewRunner, LlmProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod application;
mod config;
mod error;
mod models;
mod routes;

#[cfg(test)]
mod test_support;

use adapters::OpenAiProvider;
use application::RelaxModeOrchestrator;
use config::HubConfig;

/// Application state shared across all routes
#[derive(Clone)]
pub struct AppState {
    pub orchestrator: Arc<RelaxModeOrchestrator>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "relax_hub=info,relax_hub_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("🏝️  AE6 Agent Hub initializing...");

    let config = HubConfig::from_env()?;

    if config.openai_api_key.is_none() {
        tracing::warn!("⚠️  No OPENAI_API_KEY set - missions will fail until it is configured");
    }

    // Model settings are shared read-only by every persona
    let model = Arc::new(config.model_settings());

    let provider = OpenAiProvider::new(
        config.openai_api_key.clone(),
        config.openai_base_url.clone(),
        model.model.clone(),
    );
    tracing::info!(
        "🧠 Model: {} via {} (temperature {})",
        provider.model_id(),
        provider.provider_name(),
        model.temperature
    );
    let engine: Arc<dyn AgentEngine> = Arc::new(CrewRunner::new(provider));
    let orchestrator = Arc::new(RelaxModeOrchestrator::new(engine, model));

    let router = routes::app(AppState { orchestrator });

    let addr = config.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .context("Failed to bind to address")?;

    tracing::info!("📚 Swagger UI: http://{}/docs", addr);
    tracing::info!("✅ AE6 Agent Hub ready on http://{}", addr);

    axum::serve(listener, router)
        .await
        .context("HTTP server error")?;

    Ok(())
}
