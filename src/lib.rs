//! Options Advisor - heuristic options-trade suggestions for a ticker
//!
//! This library fetches a live quote for a symbol, runs it through a fixed
//! rule table and serves the result (plus a small web page) over HTTP.

pub mod api;
pub mod config;
pub mod constants;
pub mod error;
pub mod provider;
pub mod services;

// Re-export commonly used types
pub use config::AppConfig;
pub use error::{AdvisorError, AdvisorResult};
pub use provider::traits::QuoteProvider;
pub use provider::types::{Quote, Suggestion, Symbol};
pub use services::suggestions::generate_suggestions;
