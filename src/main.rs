use options_advisor::api::{run_server, AppState};
use options_advisor::config::AppConfig;
use options_advisor::provider::factory::build_provider;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Load .env before anything reads the environment
    let dotenv = dotenvy::dotenv();

    // Setup Logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    info!("Starting Options Advisor...");
    if let Ok(path) = dotenv {
        info!("Loaded environment from {}", path.display());
    }

    // Load Configuration
    let config = AppConfig::load()?;
    info!("Loaded Configuration: {:?}", config);

    let provider = build_provider(&config)?;

    let app_state = Arc::new(AppState { provider, config });

    info!("Initializing API Server...");
    run_server(app_state).await?;

    Ok(())
}
