use std::sync::Arc;
use tracing::{info, warn};

use crate::config::{AppConfig, ProviderKind};
use crate::constants::provider::FINNHUB_API_KEY_ENV;
use crate::error::AdvisorResult;

use super::{finnhub::FinnhubClient, fixed::FixedQuoteProvider, traits::QuoteProvider};

pub fn build_provider(config: &AppConfig) -> AdvisorResult<Arc<dyn QuoteProvider>> {
    match config.provider {
        ProviderKind::Finnhub => {
            let client = FinnhubClient::new(&config.finnhub)?;
            if !client.has_api_key() {
                // Requests will answer 500 "API key not configured" until it is set.
                warn!("⚠️ {} not set - trade lookups will fail", FINNHUB_API_KEY_ENV);
            }
            info!("📡 Using Finnhub quotes from {}", config.finnhub.base_url);
            Ok(Arc::new(client))
        }
        ProviderKind::Static => {
            let provider = FixedQuoteProvider::new();
            info!("🧪 Using static quotes for {:?}", provider.symbols());
            Ok(Arc::new(provider))
        }
    }
}
