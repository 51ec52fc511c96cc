use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::AdvisorResult;
use crate::provider::traits::QuoteProvider;
use crate::provider::types::{Suggestion, Symbol};
use crate::services::suggestions::{format_price, generate_suggestions};

/// Successful body of `GET /api/trades`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TradeSuggestions {
    pub symbol: String,
    pub current_price: String,
    pub change: String,
    pub change_percent: String,
    pub suggestions: Vec<Suggestion>,
    /// RFC 3339 UTC, stamped when the response is built
    pub timestamp: String,
}

/// Validate the symbol, fetch its quote and run the rule table.
pub async fn suggest_trades(
    provider: &dyn QuoteProvider,
    raw_symbol: Option<&str>,
) -> AdvisorResult<TradeSuggestions> {
    let symbol = Symbol::parse(raw_symbol.unwrap_or_default())?;

    let quote = provider.get_quote(&symbol).await?;
    let suggestions = generate_suggestions(symbol.as_str(), &quote);

    info!(
        "💡 {} @ {:.2} ({:+.2}%): {} suggestions via {}",
        symbol,
        quote.price,
        quote.change_percent,
        suggestions.len(),
        provider.name()
    );

    Ok(TradeSuggestions {
        symbol: symbol.to_string(),
        current_price: format_price(quote.price),
        change: format_price(quote.change),
        change_percent: format_price(quote.change_percent),
        suggestions,
        timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}
