use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, warn};

use crate::config::FinnhubConfig;
use crate::constants::provider::{ERROR_BODY_EXCERPT, FINNHUB_API_KEY_ENV};
use crate::error::{AdvisorError, AdvisorResult, UpstreamError};

use super::{
    traits::QuoteProvider,
    types::{Quote, Symbol},
};

/// Raw `/quote` payload. Finnhub answers unknown symbols with `c: 0` and
/// nulls elsewhere, so every field is optional here and checked afterwards.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct FinnhubQuote {
    /// Current price
    pub c: Option<f64>,
    /// Change
    pub d: Option<f64>,
    /// Percent change
    pub dp: Option<f64>,
}

impl FinnhubQuote {
    pub fn into_quote(self, symbol: &Symbol) -> AdvisorResult<Quote> {
        let price = match self.c {
            Some(c) if c.is_finite() && c > 0.0 => c,
            _ => {
                return Err(AdvisorError::NotFound {
                    symbol: symbol.to_string(),
                })
            }
        };

        let change = finite_field(self.d, symbol, "d")?;
        let change_percent = finite_field(self.dp, symbol, "dp")?;

        Ok(Quote {
            symbol: symbol.to_string(),
            price,
            change,
            change_percent,
        })
    }
}

fn finite_field(value: Option<f64>, symbol: &Symbol, field: &'static str) -> AdvisorResult<f64> {
    value.filter(|v| v.is_finite()).ok_or_else(|| {
        UpstreamError::MalformedQuote {
            symbol: symbol.to_string(),
            field,
        }
        .into()
    })
}

/// Parse a `/quote` response body into a validated quote.
pub fn parse_quote(symbol: &Symbol, body: &str) -> AdvisorResult<Quote> {
    let raw: FinnhubQuote = serde_json::from_str(body)?;
    raw.into_quote(symbol)
}

#[derive(Clone)]
pub struct FinnhubClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl FinnhubClient {
    pub fn new(config: &FinnhubConfig) -> AdvisorResult<Self> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        let client = builder
            .build()
            .map_err(|e| {
                AdvisorError::Configuration(format!("Failed to create HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key().map(str::to_string),
        })
    }

    pub fn has_api_key(&self) -> bool {
        self.api_key.is_some()
    }

    pub async fn fetch_quote(&self, symbol: &Symbol) -> AdvisorResult<Quote> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            AdvisorError::Configuration(format!("{} is not set", FINNHUB_API_KEY_ENV))
        })?;

        let url = format!("{}/quote", self.base_url);
        debug!("Fetching Finnhub quote for {}", symbol);

        let resp = self
            .client
            .get(&url)
            .query(&[("symbol", symbol.as_str()), ("token", api_key)])
            .send()
            .await?;

        let status = resp.status();
        let body = resp.text().await?;

        if !status.is_success() {
            warn!("⚠️ Finnhub returned {} for {}", status, symbol);
            return Err(UpstreamError::Http {
                status: status.as_u16(),
                body: body.chars().take(ERROR_BODY_EXCERPT).collect(),
            }
            .into());
        }

        parse_quote(symbol, &body)
    }
}

#[async_trait]
impl QuoteProvider for FinnhubClient {
    fn name(&self) -> &'static str {
        "finnhub"
    }

    async fn get_quote(&self, symbol: &Symbol) -> AdvisorResult<Quote> {
        self.fetch_quote(symbol).await
    }
}
