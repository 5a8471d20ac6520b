//! Pure Google Maps Geocoding REST API client.
//!
//! Resolves a free-text address to its formatted address and coordinates.
//!
//! # Example
//!
//! ```rust,ignore
//! use google_geocoding_client::{GeocodingOptions, GoogleGeocodingClient};
//!
//! let client = GoogleGeocodingClient::new(GeocodingOptions::new("your-api-key"))?;
//!
//! let place = client.search("tour eiffel").await?;
//! println!("{} ({}, {})", place.address, place.latitude, place.longitude);
//! ```

pub mod error;
pub mod types;

pub use error::{GeocodingError, Result};
pub use types::GeocodedPlace;

use std::time::Duration;

use types::GeocodeResponse;

/// Public Geocoding API endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://maps.googleapis.com/maps/api/geocode/json";

const STATUS_OK: &str = "OK";
const STATUS_ZERO_RESULTS: &str = "ZERO_RESULTS";

#[derive(Debug, Clone)]
pub struct GeocodingOptions {
    pub api_key: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl GeocodingOptions {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(10),
        }
    }

    /// Point the client at another endpoint (proxy, mock server).
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Clone)]
pub struct GoogleGeocodingClient {
    client: reqwest::Client,
    options: GeocodingOptions,
}

impl GoogleGeocodingClient {
    pub fn new(options: GeocodingOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .build()
            .map_err(|e| GeocodingError::Config(e.to_string()))?;

        Ok(Self { client, options })
    }

    pub fn endpoint(&self) -> &str {
        &self.options.endpoint
    }

    /// Look up an address and return the first candidate.
    pub async fn search(&self, address: &str) -> Result<GeocodedPlace> {
        if address.trim().is_empty() {
            return Err(GeocodingError::EmptyAddress);
        }

        tracing::debug!(address, "Geocoding address");

        let resp = self
            .client
            .get(&self.options.endpoint)
            .query(&[("address", address), ("key", self.options.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(GeocodingError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body: GeocodeResponse = resp.json().await?;
        match body.status.as_str() {
            STATUS_OK => {}
            STATUS_ZERO_RESULTS => return Err(GeocodingError::NothingFound),
            other => {
                return Err(GeocodingError::Service {
                    status: other.to_string(),
                    message: body.error_message.clone().unwrap_or_default(),
                });
            }
        }

        let place: GeocodedPlace = body
            .results
            .into_iter()
            .next()
            .map(Into::into)
            .ok_or(GeocodingError::NothingFound)?;

        tracing::debug!(
            address = %place.address,
            latitude = place.latitude,
            longitude = place.longitude,
            "Address geocoded"
        );

        Ok(place)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn options_default_to_public_endpoint() {
        let options = GeocodingOptions::new("key");
        assert_eq!(options.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(options.api_key, "key");
    }

    #[test]
    fn first_candidate_maps_to_place() {
        let body: GeocodeResponse = serde_json::from_value(serde_json::json!({
            "status": "OK",
            "results": [{
                "formatted_address": "Champ de Mars, 75007 Paris, France",
                "geometry": { "location": { "lat": 48.8583701, "lng": 2.2944813 } }
            }]
        }))
        .unwrap();

        let place: GeocodedPlace = body.results.into_iter().next().unwrap().into();
        assert_eq!(place.address, "Champ de Mars, 75007 Paris, France");
        assert_eq!(place.latitude, 48.8583701);
        assert_eq!(place.longitude, 2.2944813);
    }

    #[tokio::test]
    async fn blank_address_is_rejected_without_request() {
        let client = GoogleGeocodingClient::new(
            GeocodingOptions::new("key").with_endpoint("http://127.0.0.1:9/unreachable"),
        )
        .unwrap();

        assert!(matches!(
            client.search("   ").await,
            Err(GeocodingError::EmptyAddress)
        ));
        assert!(matches!(
            client.search("").await,
            Err(GeocodingError::EmptyAddress)
        ));
    }
}
