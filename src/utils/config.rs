// @file: market_data/src/utils/config.rs
// @description: Layered configuration (defaults, optional config file, APP_* environment).
// @author: LAS.

use serde::Deserialize;
use config::{Config, ConfigError, File, Environment};
use crate::core::models::{Days, HistoryRequest};
use std::time::Duration;

//
// TYPE DEFINITIONS
//

#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    pub log_level: String,

    // Provider
    pub coingecko_base_url: String,
    // Unset keeps the HTTP client's own default
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,

    // Request Defaults
    pub default_coin_id: String,
    pub default_currency: String,
    pub default_days: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            log_level: "info".to_string(),
            coingecko_base_url: "https://api.coingecko.com".to_string(),
            request_timeout_secs: None,
            default_coin_id: "bitcoin".to_string(),
            default_currency: "usd".to_string(),
            default_days: "30".to_string(),
        }
    }
}

impl AppConfig {
    //
    // PUBLIC INTERFACE
    //

    pub fn load() -> Result<Self, ConfigError> {
        let defaults: AppConfig = AppConfig::default();

        let builder = Config::builder()
            .set_default("log_level", defaults.log_level)?
            .set_default("coingecko_base_url", defaults.coingecko_base_url)?
            .set_default("default_coin_id", defaults.default_coin_id)?
            .set_default("default_currency", defaults.default_currency)?
            .set_default("default_days", defaults.default_days)?

            // File & Env Overrides
            .add_source(File::with_name("config").required(false))
            .add_source(Environment::with_prefix("APP"));

        let config = builder.build()?;
        config.try_deserialize()
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }

    pub fn default_request(&self) -> Result<HistoryRequest, ConfigError> {
        let days: Days = self.default_days.parse().map_err(ConfigError::Message)?;
        Ok(HistoryRequest::new(
            self.default_coin_id.clone(),
            self.default_currency.clone(),
            days,
        ))
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_provider_defaults() {
        let config: AppConfig = AppConfig::default();
        assert_eq!(config.coingecko_base_url, "https://api.coingecko.com");
        assert!(config.request_timeout().is_none());
        assert_eq!(config.default_request().unwrap(), HistoryRequest::default());
    }

    #[test]
    fn default_days_accepts_max_sentinel() {
        let config = AppConfig { default_days: "max".to_string(), ..AppConfig::default() };
        assert_eq!(config.default_request().unwrap().days, Days::Max);
    }

    #[test]
    fn bad_default_days_is_a_config_error() {
        let config = AppConfig { default_days: "a month".to_string(), ..AppConfig::default() };
        assert!(matches!(config.default_request(), Err(ConfigError::Message(_))));
    }

    #[test]
    fn timeout_converts_to_duration() {
        let config = AppConfig { request_timeout_secs: Some(5), ..AppConfig::default() };
        assert_eq!(config.request_timeout(), Some(Duration::from_secs(5)));
    }
}
