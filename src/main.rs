use autohedge_analysis::api::{run_server, AppState};
use autohedge_analysis::config::AppConfig;
use autohedge_analysis::llm::{LLMClient, ModelClient};
use autohedge_analysis::services::pipeline::Pipeline;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env before anything reads the environment
    dotenvy::dotenv().ok();

    // Load Configuration
    let config = AppConfig::load()?;

    // Setup Logging; RUST_LOG wins over the configured level
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    info!("Starting AutoHedge Analysis...");
    info!("Loaded Configuration: {:?}", config);

    // Initialize Client
    info!("Initializing AI Client...");
    info!("Using LLM Base URL: {}", config.llm.base_url);
    info!("Using LLM Model: {}", config.llm.model);
    let llm: Arc<dyn ModelClient> = Arc::new(LLMClient::from_config(&config.llm));

    // Build and validate the stage chain once
    let pipeline = Pipeline::standard()?.with_temperature(config.llm.temperature);
    info!("📊 Pipeline ready with {} stages", pipeline.sections().count());

    let app_state = Arc::new(AppState { pipeline, llm, config });

    // Start API Server
    info!("Initializing API Server...");
    run_server(app_state).await?;

    Ok(())
}
