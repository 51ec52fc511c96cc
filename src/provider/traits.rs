use async_trait::async_trait;

use crate::error::AdvisorResult;

use super::types::{Quote, Symbol};

#[async_trait]
pub trait QuoteProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Fetch the latest quote for `symbol`.
    ///
    /// Implementations return `NotFound` when the provider has no usable
    /// price, never a quote with a zero price.
    async fn get_quote(&self, symbol: &Symbol) -> AdvisorResult<Quote>;
}
