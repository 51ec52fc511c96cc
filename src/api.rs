use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse},
    routing::get,
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

use crate::config::AppConfig;
use crate::error::AdvisorError;
use crate::provider::traits::QuoteProvider;
use crate::services::advisor::suggest_trades;

const INDEX_HTML: &str = include_str!("../static/index.html");

pub struct AppState {
    pub provider: Arc<dyn QuoteProvider>,
    pub config: AppConfig,
}

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/api/trades", get(get_trades))
        .with_state(state)
}

pub async fn run_server(state: Arc<AppState>) -> Result<(), AdvisorError> {
    let bind_addr = state.config.server.bind_addr.clone();
    let app = router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| AdvisorError::Configuration(format!("Failed to bind {}: {}", bind_addr, e)))?;
    info!("API Server listening on {}", bind_addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AdvisorError::Configuration(format!("Server error: {}", e)))
}

#[derive(serde::Deserialize)]
struct TradeParams {
    symbol: Option<String>,
}

async fn get_trades(
    State(state): State<Arc<AppState>>,
    Query(params): Query<TradeParams>,
) -> impl IntoResponse {
    match suggest_trades(state.provider.as_ref(), params.symbol.as_deref()).await {
        Ok(body) => Json(body).into_response(),
        Err(e) => e.into_response(),
    }
}

async fn health() -> impl IntoResponse {
    Json(json!({"status": "ok"}))
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}
