//! Error types for the Wikipedia client.

use thiserror::Error;

/// Result type for Wikipedia client operations.
pub type Result<T> = std::result::Result<T, WikipediaError>;

/// Wikipedia client errors.
#[derive(Debug, Error)]
pub enum WikipediaError {
    /// Coordinates outside [-90, 90] x [-180, 180], checked before any request
    #[error("Invalid GPS coordinates ({latitude}, {longitude}): latitude must stay between -90 and 90, longitude between -180 and 180")]
    InvalidCoordinates { latitude: f64, longitude: f64 },

    /// Unsupported language tag or HTTP client construction failure
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout, unreadable body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP response
    #[error("Wikipedia API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// MediaWiki `error` object returned in a successful response
    #[error("Wikipedia service error {code}: {info}")]
    Service { code: String, info: String },

    /// Nothing around the coordinates, or the page does not exist
    #[error("No data has been found")]
    NothingFound,
}
