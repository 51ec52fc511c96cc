//! Custom error types for the advisor service
//!
//! Every failure in the request path ends up as an `AdvisorError`, which knows
//! how to render itself as a JSON error body with the right status code.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

use crate::constants::messages;

/// Top-level errors surfaced by the trades endpoint
#[derive(Error, Debug)]
pub enum AdvisorError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("No quote data for {symbol}")]
    NotFound { symbol: String },

    #[error("Upstream error: {0}")]
    Upstream(#[from] UpstreamError),
}

/// Failures talking to the quote provider
#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("HTTP {status}: {body}")]
    Http { status: u16, body: String },

    #[error("Deserialization error: {0}")]
    Deserialization(#[from] serde_json::Error),

    #[error("Malformed quote for {symbol}: missing or invalid `{field}`")]
    MalformedQuote { symbol: String, field: &'static str },
}

/// Input validation errors for ticker symbols
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("symbol is empty")]
    EmptySymbol,
}

impl AdvisorError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AdvisorError::Validation(_) => StatusCode::BAD_REQUEST,
            AdvisorError::Configuration(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AdvisorError::NotFound { .. } => StatusCode::NOT_FOUND,
            AdvisorError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message shown to API callers. Never includes internal details.
    pub fn public_message(&self) -> &'static str {
        match self {
            AdvisorError::Validation(_) => messages::SYMBOL_REQUIRED,
            AdvisorError::Configuration(_) => messages::API_KEY_NOT_CONFIGURED,
            AdvisorError::NotFound { .. } => messages::NO_DATA,
            AdvisorError::Upstream(_) => messages::FETCH_FAILED,
        }
    }
}

impl IntoResponse for AdvisorError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!("❌ Error fetching trade suggestions: {}", self);
        }
        (status, Json(json!({ "error": self.public_message() }))).into_response()
    }
}

pub type AdvisorResult<T> = Result<T, AdvisorError>;

/// Conversion helpers so provider code can use `?` on transport results
impl From<reqwest::Error> for AdvisorError {
    fn from(err: reqwest::Error) -> Self {
        AdvisorError::Upstream(UpstreamError::Network(err))
    }
}

impl From<serde_json::Error> for AdvisorError {
    fn from(err: serde_json::Error) -> Self {
        AdvisorError::Upstream(UpstreamError::Deserialization(err))
    }
}
