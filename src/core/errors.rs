// @file: market_data/src/core/errors.rs
// @description: Typed failures for a history fetch.
// @author: LAS.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FetchError {
    /// Provider answered with anything other than 200. The body is not read.
    #[error("Remote request failed with status {status_code}")]
    RemoteRequestFailed { status_code: u16 },

    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Malformed response: {reason}")]
    MalformedResponse { reason: String },

    /// Only raised while building a client, never by a fetch.
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),
}

impl FetchError {
    pub fn malformed(reason: impl Into<String>) -> Self {
        FetchError::MalformedResponse { reason: reason.into() }
    }

    pub fn status_code(&self) -> Option<u16> {
        match self {
            FetchError::RemoteRequestFailed { status_code } => Some(*status_code),
            _ => None,
        }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(e: serde_json::Error) -> Self {
        FetchError::malformed(e.to_string())
    }
}
