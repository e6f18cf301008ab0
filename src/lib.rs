// @file: market_data/src/lib.rs
// @description: Historical crypto price fetching from the CoinGecko market chart API.
// @author: LAS.

pub mod core;
pub mod connectors;
pub mod utils;
#[cfg(test)]
mod tests;

pub use crate::connectors::coingecko::CoinGeckoRestClient;
pub use crate::connectors::rest_dispatch::{fetch, fetch_default, fetch_with_config};
pub use crate::core::errors::FetchError;
pub use crate::core::interfaces::MarketDataSource;
pub use crate::core::models::{Days, HistoryRequest, PriceObservation, PriceSeries};
pub use crate::utils::config::AppConfig;
