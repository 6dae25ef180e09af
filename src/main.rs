use anyhow::Context;
use std::sync::Arc;
use tracing::{info, warn};
use vida_ativa::api::{self, app_state::AppState};
use vida_ativa::config::loader::ConfigLoader;
use vida_ativa::knowledge::KnowledgeStore;
use vida_ativa::llm::{OpenAiCompatibleClient, TextGenerator};
use vida_ativa::observability::{
    AppMetrics, ObservabilityState, create_observability_router, init_tracing,
};
use vida_ativa::services::create_analysis_service;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // .env 可选
    let _ = dotenvy::dotenv();

    let config = ConfigLoader::load().context("failed to load configuration")?;
    ConfigLoader::validate(&config)?;

    let _log_guard = init_tracing(&config.logging, &config.app_name);
    info!(environment = %config.environment, "Starting Vida+Ativa...");

    if config.llm.api_key.is_empty() {
        warn!("OPENAI_API_KEY is not set, analyses will fall back until it is configured");
    }

    let knowledge = Arc::new(KnowledgeStore::from_config(&config.knowledge));

    let generator: Arc<dyn TextGenerator> = Arc::new(OpenAiCompatibleClient::new(&config.llm)?);
    info!(
        "LLM client initialized: {} ({})",
        config.llm.model_name, config.llm.base_url
    );

    let metrics = Arc::new(AppMetrics::default());
    let analysis_service = create_analysis_service(knowledge, generator, metrics.clone());
    let app_state = AppState::new(analysis_service, metrics.clone());
    info!("Application state created");

    let observability_state = Arc::new(ObservabilityState::new(
        env!("CARGO_PKG_VERSION").to_string(),
        config.llm.model_name.clone(),
        metrics,
    ));
    let router = create_observability_router(observability_state).merge(api::create_router(app_state));

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!("Server listening on {}", addr);

    axum::serve(listener, router).await?;

    Ok(())
}
