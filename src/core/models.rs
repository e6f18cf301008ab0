// @file: market_data/src/core/models.rs
// @description: Price observations, the series returned by a fetch, and request parameters.
// @author: LAS.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::slice;
use std::vec;


//
// REQUEST PARAMETERS
//

/// Lookback window sent as the `days` query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Days {
    Count(u32),
    /// Provider sentinel for the full available history.
    Max,
}

impl Default for Days {
    fn default() -> Self {
        Days::Count(30)
    }
}

impl fmt::Display for Days {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Days::Count(n) => write!(f, "{}", n),
            Days::Max => write!(f, "max"),
        }
    }
}

impl From<u32> for Days {
    fn from(n: u32) -> Self {
        Days::Count(n)
    }
}

impl std::str::FromStr for Days {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed: &str = s.trim();
        if trimmed.eq_ignore_ascii_case("max") {
            return Ok(Days::Max);
        }
        trimmed
            .parse::<u32>()
            .map(Days::Count)
            .map_err(|e| format!("Invalid days value '{}': {}", s, e))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HistoryRequest {
    pub coin_id: String,
    pub currency: String,
    pub days: Days,
}

impl HistoryRequest {
    pub fn new(coin_id: impl Into<String>, currency: impl Into<String>, days: Days) -> Self {
        Self {
            coin_id: coin_id.into(),
            currency: currency.into(),
            days,
        }
    }
}

impl Default for HistoryRequest {
    fn default() -> Self {
        Self::new("bitcoin", "usd", Days::default())
    }
}


//
// SERIES STRUCTURES
//

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceObservation {
    pub timestamp: DateTime<Utc>,
    pub price: f64,
}

/// Observations in provider order. Built once per fetch and never mutated.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct PriceSeries {
    observations: Vec<PriceObservation>,
}

impl PriceSeries {
    pub fn new(observations: Vec<PriceObservation>) -> Self {
        Self { observations }
    }

    pub fn len(&self) -> usize {
        self.observations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.observations.is_empty()
    }

    pub fn iter(&self) -> slice::Iter<'_, PriceObservation> {
        self.observations.iter()
    }

    pub fn as_slice(&self) -> &[PriceObservation] {
        &self.observations
    }

    pub fn first(&self) -> Option<&PriceObservation> {
        self.observations.first()
    }

    pub fn last(&self) -> Option<&PriceObservation> {
        self.observations.last()
    }

    pub fn into_inner(self) -> Vec<PriceObservation> {
        self.observations
    }
}

impl IntoIterator for PriceSeries {
    type Item = PriceObservation;
    type IntoIter = vec::IntoIter<PriceObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.into_iter()
    }
}

impl<'a> IntoIterator for &'a PriceSeries {
    type Item = &'a PriceObservation;
    type IntoIter = slice::Iter<'a, PriceObservation>;

    fn into_iter(self) -> Self::IntoIter {
        self.observations.iter()
    }
}
