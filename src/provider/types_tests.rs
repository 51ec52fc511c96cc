//! Unit tests for provider types - symbol parsing and serialization shape.

#[cfg(test)]
mod types_tests {
    use crate::error::ValidationError;
    use crate::provider::types::*;

    // ============= Symbol Tests =============

    #[test]
    fn test_symbol_uppercased_and_trimmed() {
        let symbol = Symbol::parse("  aapl ").unwrap();
        assert_eq!(symbol.as_str(), "AAPL");
        assert_eq!(symbol.to_string(), "AAPL");
    }

    #[test]
    fn test_symbol_allows_dot_and_dash() {
        assert_eq!(Symbol::parse("brk.b").unwrap().as_str(), "BRK.B");
        assert_eq!(Symbol::parse("rds-a").unwrap().as_str(), "RDS-A");
    }

    #[test]
    fn test_empty_symbol_rejected() {
        assert_eq!(Symbol::parse(""), Err(ValidationError::EmptySymbol));
        assert_eq!(Symbol::parse("   "), Err(ValidationError::EmptySymbol));
    }

    #[test]
    fn test_index_and_exchange_prefixed_symbols_pass_through() {
        assert_eq!(Symbol::parse("^gspc").unwrap().as_str(), "^GSPC");
        assert_eq!(
            Symbol::parse("binance:btcusdt").unwrap().as_str(),
            "BINANCE:BTCUSDT"
        );
    }

    #[test]
    fn test_long_symbol_accepted() {
        let symbol = Symbol::parse("ABCDEFGHIJKLMNOPQRSTUVWXYZ").unwrap();
        assert_eq!(symbol.as_str().len(), 26);
    }

    // ============= Suggestion Serialization =============

    #[test]
    fn test_suggestion_serializes_camel_case() {
        let suggestion = Suggestion {
            title: "AAPL Iron Condor - Range-Bound Strategy".to_string(),
            description: "Current price: $150.00. Profit from low volatility.".to_string(),
            entry_price: "145.50".to_string(),
            exit_price: "154.50".to_string(),
            timeframe: "3-5 weeks".to_string(),
            confidence: 72.0,
        };

        let value = serde_json::to_value(&suggestion).unwrap();
        assert_eq!(value["entryPrice"], "145.50");
        assert_eq!(value["exitPrice"], "154.50");
        assert_eq!(value["timeframe"], "3-5 weeks");
        assert_eq!(value["confidence"], 72.0);
        assert!(value.get("entry_price").is_none());
    }
}
