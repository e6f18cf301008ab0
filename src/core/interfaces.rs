// @file: market_data/src/core/interfaces.rs
// @description: Defines the trait implemented by historical price sources.
// @author: LAS.

use crate::core::errors::FetchError;
use crate::core::models::{HistoryRequest, PriceSeries};
use async_trait::async_trait;

//
// TRAIT DEFINITIONS
//

#[async_trait]
pub trait MarketDataSource: Send + Sync {
    // #1. One outbound request per call, nothing retained between calls
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<PriceSeries, FetchError>;

    // #2. Identifier used in log lines
    fn name(&self) -> &'static str;
}
