// @file: market_data/src/connectors/coingecko/wire.rs
// @description: CoinGecko market chart wire model and its conversion into a PriceSeries.
// @author: LAS.

use chrono::{DateTime, Utc};
use serde::Deserialize;
use crate::core::errors::FetchError;
use crate::core::models::{PriceObservation, PriceSeries};


//
// COINGECKO WIRE MODELS
//

// Other top-level fields (market_caps, total_volumes) are ignored.
#[derive(Deserialize)]
struct MarketChartResponse {
    // [epoch_millis, price]
    prices: Vec<[f64; 2]>,
}


//
// CONVERSION
//

pub fn parse_market_chart(body: &str) -> Result<PriceSeries, FetchError> {
    // #1. Shape check (invalid JSON, missing field, wrong arity, non-numeric)
    let raw: MarketChartResponse = serde_json::from_str(body)?;

    // #2. Map entries one to one, preserving provider order
    let mut observations: Vec<PriceObservation> = Vec::with_capacity(raw.prices.len());

    for (idx, [epoch_ms, price]) in raw.prices.into_iter().enumerate() {
        let timestamp: DateTime<Utc> = epoch_millis_to_utc(epoch_ms)
            .ok_or_else(|| FetchError::malformed(format!(
                "prices[{}]: timestamp {} is not a representable epoch millisecond value",
                idx, epoch_ms
            )))?;

        observations.push(PriceObservation { timestamp, price });
    }

    Ok(PriceSeries::new(observations))
}

// Fractional milliseconds are truncated.
fn epoch_millis_to_utc(epoch_ms: f64) -> Option<DateTime<Utc>> {
    if !epoch_ms.is_finite() {
        return None;
    }
    DateTime::from_timestamp_millis(epoch_ms.trunc() as i64)
}
