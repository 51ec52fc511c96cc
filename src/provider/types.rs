use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::ValidationError;

/// Normalized ticker symbol: trimmed and upper-cased.
///
/// Only emptiness is checked here. Anything else is passed through to the
/// provider, which decides whether it knows the symbol.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Symbol(String);

impl Symbol {
    pub fn parse(input: &str) -> Result<Self, ValidationError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptySymbol);
        }

        Ok(Self(trimmed.to_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Snapshot of a security's price and intraday move.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub symbol: String,
    /// Always positive and finite
    pub price: f64,
    pub change: f64,
    pub change_percent: f64,
}

/// One illustrative options-trade idea.
///
/// Prices are pre-formatted to two decimals; the struct is serialized as-is
/// into the API response.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Suggestion {
    pub title: String,
    pub description: String,
    pub entry_price: String,
    pub exit_price: String,
    pub timeframe: String,
    pub confidence: f64,
}
