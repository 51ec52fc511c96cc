//! In-process quote provider with a fixed symbol table.
//!
//! Selected with `provider: static` for local development and demos; needs no
//! credential and never touches the network.

use async_trait::async_trait;
use std::collections::HashMap;

use crate::error::{AdvisorError, AdvisorResult};

use super::{
    traits::QuoteProvider,
    types::{Quote, Symbol},
};

#[derive(Clone, Debug)]
pub struct FixedQuoteProvider {
    quotes: HashMap<String, Quote>,
}

impl FixedQuoteProvider {
    pub fn new() -> Self {
        Self::with_quotes([
            ("AAPL", 150.00, 3.00, 2.04),
            ("TSLA", 242.50, -8.75, -3.48),
            ("SPY", 512.30, 0.00, 0.00),
            ("MSFT", 415.10, -2.10, -0.50),
            ("NVDA", 880.00, 38.50, 4.58),
        ])
    }

    /// Build a provider from `(symbol, price, change, change_percent)` rows.
    pub fn with_quotes<'a, I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, f64, f64, f64)>,
    {
        let quotes = rows
            .into_iter()
            .map(|(symbol, price, change, change_percent)| {
                let symbol = symbol.to_ascii_uppercase();
                let quote = Quote {
                    symbol: symbol.clone(),
                    price,
                    change,
                    change_percent,
                };
                (symbol, quote)
            })
            .collect();
        Self { quotes }
    }

    pub fn symbols(&self) -> Vec<String> {
        let mut symbols: Vec<String> = self.quotes.keys().cloned().collect();
        symbols.sort();
        symbols
    }
}

impl Default for FixedQuoteProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl QuoteProvider for FixedQuoteProvider {
    fn name(&self) -> &'static str {
        "static"
    }

    async fn get_quote(&self, symbol: &Symbol) -> AdvisorResult<Quote> {
        self.quotes
            .get(symbol.as_str())
            .filter(|q| q.price.is_finite() && q.price > 0.0)
            .cloned()
            .ok_or_else(|| AdvisorError::NotFound {
                symbol: symbol.to_string(),
            })
    }
}
