mod advice;
mod analysis;
mod config;
mod errors;
mod extraction;
mod llm_client;
mod matching;
mod registry;
mod routes;
mod state;

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::advice::{AdviceProvider, LlmAdvisor, StaticAdvisor};
use crate::config::Config;
use crate::llm_client::LlmClient;
use crate::registry::Registry;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails fast on invalid env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting CareerPath API v{}", env!("CARGO_PKG_VERSION"));

    let registry = Arc::new(load_registry(&config)?);
    info!(
        "Registry loaded: {} skills, {} career paths, {} learning resource entries",
        registry.catalog.len(),
        registry.career_paths.len(),
        registry.learning_resources.len()
    );
    let uncatalogued = registry.uncatalogued_labels();
    if !uncatalogued.is_empty() {
        warn!(
            "{} registry skills are not in the catalog and can never be matched from text: {}",
            uncatalogued.len(),
            uncatalogued.join(", ")
        );
    }

    let advisor = build_advisor(&config, registry.clone())?;
    info!(
        "Advice backend: {}, skill match threshold: {}, keyword policy: {}",
        advisor.backend(),
        config.match_threshold,
        config.keyword_policy
    );

    // Build app state
    let state = AppState {
        config: config.clone(),
        registry,
        advisor,
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Built-in registry unless REGISTRY_PATH points at a JSON file.
/// Any validation failure aborts startup.
fn load_registry(config: &Config) -> Result<Registry> {
    match &config.registry_path {
        Some(path) => {
            info!("Loading registry from {}", path.display());
            Registry::from_file(path)
                .with_context(|| format!("Invalid registry file {}", path.display()))
        }
        None => {
            let registry = Registry::builtin();
            registry.validate().context("Built-in registry is invalid")?;
            Ok(registry)
        }
    }
}

fn build_advisor(config: &Config, registry: Arc<Registry>) -> Result<Arc<dyn AdviceProvider>> {
    let advisor: Arc<dyn AdviceProvider> = match &config.anthropic_api_key {
        Some(key) => {
            let llm = LlmClient::new(key.clone()).context("Failed to build LLM client")?;
            info!("LLM client initialized (model: {})", llm_client::MODEL);
            Arc::new(LlmAdvisor::new(
                llm,
                Duration::from_secs(config.advice_timeout_secs),
            ))
        }
        None => Arc::new(StaticAdvisor::new(registry)),
    };
    Ok(advisor)
}
