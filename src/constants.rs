//! Application-wide constants
//!
//! The suggestion rule table lives here so the multipliers and confidence
//! caps can be tuned in one place.

/// Error bodies returned by the trades endpoint
pub mod messages {
    pub const SYMBOL_REQUIRED: &str = "Symbol is required";
    pub const API_KEY_NOT_CONFIGURED: &str = "API key not configured";
    pub const NO_DATA: &str = "Invalid symbol or no data available";
    pub const FETCH_FAILED: &str = "Failed to fetch trade suggestions";
}

/// Upstream provider defaults
pub mod provider {
    pub const FINNHUB_BASE_URL: &str = "https://finnhub.io/api/v1";

    /// Environment variable holding the Finnhub credential
    pub const FINNHUB_API_KEY_ENV: &str = "FINNHUB_API_KEY";

    /// Characters of an upstream error body kept in logs
    pub const ERROR_BODY_EXCERPT: usize = 200;
}

/// Server defaults
pub mod server {
    pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
}

/// Suggestion rule table
pub mod rules {
    /// Base confidence for directional (call/put) suggestions
    pub const DIRECTIONAL_BASE_CONFIDENCE: f64 = 70.0;
    pub const DIRECTIONAL_MAX_CONFIDENCE: f64 = 85.0;

    pub const BULLISH_ENTRY: f64 = 1.02;
    pub const BULLISH_EXIT: f64 = 1.08;
    pub const BULLISH_TIMEFRAME: &str = "2-4 weeks";

    pub const BEARISH_ENTRY: f64 = 0.98;
    pub const BEARISH_EXIT: f64 = 0.92;
    pub const BEARISH_TIMEFRAME: &str = "1-3 weeks";

    pub const NEUTRAL_ENTRY: f64 = 0.97;
    pub const NEUTRAL_EXIT: f64 = 1.03;
    pub const NEUTRAL_TIMEFRAME: &str = "3-5 weeks";
    pub const NEUTRAL_CONFIDENCE: f64 = 72.0;

    /// Absolute percent move above which the straddle is suggested
    pub const VOLATILITY_THRESHOLD_PCT: f64 = 3.0;
    pub const VOLATILITY_UP_EXIT: f64 = 1.10;
    pub const VOLATILITY_DOWN_EXIT: f64 = 0.90;
    pub const VOLATILITY_TIMEFRAME: &str = "1-2 weeks";
    pub const VOLATILITY_BASE_CONFIDENCE: f64 = 75.0;
    pub const VOLATILITY_MAX_CONFIDENCE: f64 = 88.0;
}
