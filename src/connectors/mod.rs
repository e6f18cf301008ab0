// @file: market_data/src/connectors/mod.rs
// @description: Provider connectors and the generalized fetch entry points.
// @author: LAS.

pub mod coingecko;
pub mod rest_dispatch;
