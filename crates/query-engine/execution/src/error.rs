//! Errors that can be thrown when executing queries.

use thiserror::Error;

/// Query execution error.
#[derive(Debug, Error)]
pub enum Error {
    #[error("Unable to authenticate with Google Ads: {0}")]
    Authentication(String),
    #[error("Invalid Google Ads endpoint: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Request to Google Ads failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("Google Ads API error ({status}): {message}")]
    Api { status: u16, message: String },
    #[error("Unexpected Google Ads response: {0}")]
    Decode(String),
}
