// @file: market_data/src/connectors/rest_dispatch.rs
// @description: Generalized entry points that build a source and run a single history fetch.
// @author: LAS.

use crate::connectors::coingecko::CoinGeckoRestClient;
use crate::core::errors::FetchError;
use crate::core::interfaces::MarketDataSource;
use crate::core::models::{Days, HistoryRequest, PriceSeries};
use crate::utils::config::AppConfig;

// Factory function to get the configured source
fn get_source(config: &AppConfig) -> Result<Box<dyn MarketDataSource>, FetchError> {
    Ok(Box::new(CoinGeckoRestClient::from_config(config)?))
}

/// Fetches `days` of `coin_id` prices quoted in `currency` using the built-in
/// defaults (public CoinGecko host, client default timeout). Reads no
/// configuration and caches nothing.
pub async fn fetch(
    coin_id: &str,
    currency: &str,
    days: Days,
) -> Result<PriceSeries, FetchError> {
    let request: HistoryRequest = HistoryRequest::new(coin_id, currency, days);
    fetch_with_config(&AppConfig::default(), &request).await
}

/// `fetch("bitcoin", "usd", Days::Count(30))`
pub async fn fetch_default() -> Result<PriceSeries, FetchError> {
    fetch_with_config(&AppConfig::default(), &HistoryRequest::default()).await
}

pub async fn fetch_with_config(
    config: &AppConfig,
    request: &HistoryRequest,
) -> Result<PriceSeries, FetchError> {
    // 1. Get the specific implementation
    let source = get_source(config)?;

    // 2. Execute the trait method
    source.fetch_history(request).await
}
