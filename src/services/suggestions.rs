//! Rule table that turns a quote into options-trade suggestions.
//!
//! Each rule is an independent predicate over the same quote. Emission order
//! is directional (call or put), neutral, then volatility.

use crate::constants::rules::*;
use crate::provider::types::{Quote, Suggestion};

/// Format a currency figure the way the API exposes it.
pub fn format_price(value: f64) -> String {
    format!("{:.2}", value)
}

/// Round a confidence score to two decimals so float noise never leaks out.
fn round_confidence(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn directional_confidence(change_percent: f64) -> f64 {
    round_confidence(DIRECTIONAL_MAX_CONFIDENCE.min(DIRECTIONAL_BASE_CONFIDENCE + change_percent.abs()))
}

fn volatility_confidence(change_percent: f64) -> f64 {
    round_confidence(VOLATILITY_MAX_CONFIDENCE.min(VOLATILITY_BASE_CONFIDENCE + change_percent.abs() / 2.0))
}

fn bullish(symbol: &str, quote: &Quote) -> Suggestion {
    Suggestion {
        title: format!("{} Call Option - Bullish Momentum", symbol),
        description: format!(
            "Stock up {:.2}% today. Momentum suggests continued upside.",
            quote.change_percent
        ),
        entry_price: format_price(quote.price * BULLISH_ENTRY),
        exit_price: format_price(quote.price * BULLISH_EXIT),
        timeframe: BULLISH_TIMEFRAME.to_string(),
        confidence: directional_confidence(quote.change_percent),
    }
}

fn bearish(symbol: &str, quote: &Quote) -> Suggestion {
    Suggestion {
        title: format!("{} Put Option - Bearish Pressure", symbol),
        description: format!(
            "Stock down {:.2}% today. Downward pressure detected.",
            quote.change_percent.abs()
        ),
        entry_price: format_price(quote.price * BEARISH_ENTRY),
        exit_price: format_price(quote.price * BEARISH_EXIT),
        timeframe: BEARISH_TIMEFRAME.to_string(),
        confidence: directional_confidence(quote.change_percent),
    }
}

fn neutral(symbol: &str, quote: &Quote) -> Suggestion {
    Suggestion {
        title: format!("{} Iron Condor - Range-Bound Strategy", symbol),
        description: format!(
            "Current price: ${:.2}. Profit from low volatility.",
            quote.price
        ),
        entry_price: format_price(quote.price * NEUTRAL_ENTRY),
        exit_price: format_price(quote.price * NEUTRAL_EXIT),
        timeframe: NEUTRAL_TIMEFRAME.to_string(),
        confidence: NEUTRAL_CONFIDENCE,
    }
}

fn high_volatility(symbol: &str, quote: &Quote) -> Suggestion {
    let upward = quote.change_percent > 0.0;
    let exit = if upward {
        VOLATILITY_UP_EXIT
    } else {
        VOLATILITY_DOWN_EXIT
    };

    Suggestion {
        title: format!("{} Long Straddle - High Volatility Play", symbol),
        description: format!(
            "Significant {} movement. Volatility opportunity.",
            if upward { "upward" } else { "downward" }
        ),
        entry_price: format_price(quote.price),
        exit_price: format_price(quote.price * exit),
        timeframe: VOLATILITY_TIMEFRAME.to_string(),
        confidence: volatility_confidence(quote.change_percent),
    }
}

/// Generate suggestions for `symbol` from `quote`. Pure and deterministic.
pub fn generate_suggestions(symbol: &str, quote: &Quote) -> Vec<Suggestion> {
    let mut suggestions = Vec::with_capacity(3);

    if quote.change > 0.0 {
        suggestions.push(bullish(symbol, quote));
    }

    if quote.change < 0.0 {
        suggestions.push(bearish(symbol, quote));
    }

    suggestions.push(neutral(symbol, quote));

    if quote.change_percent.abs() > VOLATILITY_THRESHOLD_PCT {
        suggestions.push(high_volatility(symbol, quote));
    }

    suggestions
}
