// @file: market_data/src/connectors/coingecko/coingecko_rest.rs
// @description: HTTP client for fetching historical market chart prices from CoinGecko.
// @author: LAS.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, StatusCode};
use std::time::Duration;
use url::Url;
use crate::connectors::coingecko::wire::parse_market_chart;
use crate::core::errors::FetchError;
use crate::core::interfaces::MarketDataSource;
use crate::core::models::{HistoryRequest, PriceSeries};
use crate::utils::config::AppConfig;

pub const COINGECKO_API_BASE: &str = "https://api.coingecko.com";


//
// CLIENT
//

#[derive(Debug, Clone)]
pub struct CoinGeckoRestClient {
    base_url: Url,
    client: Client,
}

impl CoinGeckoRestClient {
    pub fn new() -> Result<Self, FetchError> {
        Self::with_base_url(COINGECKO_API_BASE, None)
    }

    pub fn from_config(config: &AppConfig) -> Result<Self, FetchError> {
        Self::with_base_url(&config.coingecko_base_url, config.request_timeout())
    }

    /// `timeout` of `None` leaves reqwest's default in place.
    pub fn with_base_url(base_url: &str, timeout: Option<Duration>) -> Result<Self, FetchError> {
        // #1. Validate Base URL
        let parsed: Url = Url::parse(base_url)
            .map_err(|e| FetchError::InvalidBaseUrl(format!("{}: {}", base_url, e)))?;

        if parsed.cannot_be_a_base() {
            return Err(FetchError::InvalidBaseUrl(base_url.to_string()));
        }

        // #2. Build HTTP Client
        // Idle connections are not kept, so every call stands alone.
        let mut builder = Client::builder().pool_max_idle_per_host(0);
        if let Some(t) = timeout {
            builder = builder.timeout(t);
        }

        Ok(Self {
            base_url: parsed,
            client: builder.build()?,
        })
    }

    /// `{base}/api/v3/coins/{coin_id}/market_chart?vs_currency=..&days=..`
    pub fn market_chart_url(&self, request: &HistoryRequest) -> Result<Url, FetchError> {
        let mut url: Url = self.base_url.clone();

        url.path_segments_mut()
            .map_err(|_| FetchError::InvalidBaseUrl(self.base_url.to_string()))?
            .pop_if_empty()
            .extend(["api", "v3", "coins", request.coin_id.as_str(), "market_chart"]);

        url.query_pairs_mut()
            .clear()
            .append_pair("vs_currency", &request.currency)
            .append_pair("days", &request.days.to_string());

        Ok(url)
    }

    pub async fn fetch_market_chart(&self, request: &HistoryRequest) -> Result<PriceSeries, FetchError> {
        // #1. Construct URL
        let url: Url = self.market_chart_url(request)?;
        debug!("GET {}", url);

        // #2. Execute Request
        let response = self.client.get(url).send().await?;

        // #3. Status Check (exactly 200, body untouched otherwise)
        let status: StatusCode = response.status();
        if status != StatusCode::OK {
            warn!("Market chart request for {} failed: {}", request.coin_id, status);
            return Err(FetchError::RemoteRequestFailed { status_code: status.as_u16() });
        }

        // #4. Parse Response
        let body: String = response.text().await?;
        let series: PriceSeries = parse_market_chart(&body).map_err(|e| {
            warn!("Market chart response for {} rejected: {}", request.coin_id, e);
            e
        })?;

        debug!(
            "Received {} observations for {}/{} over {} days",
            series.len(), request.coin_id, request.currency, request.days
        );

        Ok(series)
    }
}

#[async_trait]
impl MarketDataSource for CoinGeckoRestClient {
    async fn fetch_history(&self, request: &HistoryRequest) -> Result<PriceSeries, FetchError> {
        self.fetch_market_chart(request).await
    }

    fn name(&self) -> &'static str {
        "coingecko"
    }
}
