//! Error types for the geocoding client.

use thiserror::Error;

/// Result type for geocoding client operations.
pub type Result<T> = std::result::Result<T, GeocodingError>;

/// Geocoding client errors.
#[derive(Debug, Error)]
pub enum GeocodingError {
    /// Blank address, rejected before any request is made
    #[error("Address must not be empty")]
    EmptyAddress,

    /// HTTP client could not be built
    #[error("Configuration error: {0}")]
    Config(String),

    /// Network error (connection failed, timeout, unreadable body)
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx HTTP response
    #[error("Geocoding API error ({status}): {message}")]
    Api { status: u16, message: String },

    /// The service answered but matched nothing
    #[error("No result found for the requested address")]
    NothingFound,

    /// The service answered with a non-OK status (quota, denied key, ...)
    #[error("Geocoding service returned {status}: {message}")]
    Service { status: String, message: String },
}

