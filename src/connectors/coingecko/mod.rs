// @file: market_data/src/connectors/coingecko/mod.rs
// @description: CoinGecko REST connector.
// @author: LAS.

pub mod coingecko_rest;
pub mod wire;

pub use coingecko_rest::{CoinGeckoRestClient, COINGECKO_API_BASE};
