//! Server dependencies for request handling (using traits for testability)
//!
//! This module provides the central dependency container used by the answer
//! domain. All external services use trait abstractions to enable testing.

use anyhow::{Context, Result};
use async_trait::async_trait;
use google_geocoding_client::{GeocodingError, GoogleGeocodingClient};
use rand::Rng;
use std::sync::Arc;
use wikipedia_client::{PageRef, WikipediaClient, WikipediaError};

use crate::config::Config;
use crate::domains::parser::Parser;
use crate::kernel::{
    ArticleContent, ArticleRef, BaseEncyclopedia, BaseGeocoder, GeoResult, PhraseSelector,
};

// =============================================================================
// GoogleGeocodingClient Adapter (implements BaseGeocoder trait)
// =============================================================================

/// Wrapper around GoogleGeocodingClient that implements BaseGeocoder trait
pub struct GoogleGeocoderAdapter(pub Arc<GoogleGeocodingClient>);

impl GoogleGeocoderAdapter {
    pub fn new(client: Arc<GoogleGeocodingClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseGeocoder for GoogleGeocoderAdapter {
    async fn search(&self, place_name: &str) -> Result<GeoResult, GeocodingError> {
        let place = self.0.search(place_name).await?;
        Ok(GeoResult {
            address: place.address,
            latitude: place.latitude,
            longitude: place.longitude,
        })
    }
}

// =============================================================================
// WikipediaClient Adapter (implements BaseEncyclopedia trait)
// =============================================================================

/// Wrapper around WikipediaClient that implements BaseEncyclopedia trait
pub struct WikipediaAdapter(pub Arc<WikipediaClient>);

impl WikipediaAdapter {
    pub fn new(client: Arc<WikipediaClient>) -> Self {
        Self(client)
    }
}

#[async_trait]
impl BaseEncyclopedia for WikipediaAdapter {
    async fn geo_search(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ArticleRef>, WikipediaError> {
        let pages = self.0.geosearch(latitude, longitude).await?;
        Ok(pages
            .into_iter()
            .map(|page| ArticleRef {
                page_id: page.page_id,
                lang: page.lang,
            })
            .collect())
    }

    async fn fetch_content(&self, article: &ArticleRef) -> Result<ArticleContent, WikipediaError> {
        let page = PageRef {
            page_id: article.page_id,
            lang: article.lang,
            title: None,
            distance: None,
        };
        let content = self.0.fetch_content(&page).await?;
        Ok(ArticleContent {
            title: content.title,
            summary: content.summary,
            url: content.url,
        })
    }
}

// =============================================================================
// Random phrase selection
// =============================================================================

/// Picks phrases with the thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct RandomSelector;

impl PhraseSelector for RandomSelector {
    fn select(&self, pool_len: usize) -> usize {
        rand::rng().random_range(0..pool_len.max(1))
    }
}

// =============================================================================
// ServerDeps
// =============================================================================

/// Server dependencies accessible to request handlers (using traits for testability)
#[derive(Clone)]
pub struct ServerDeps {
    /// Question parser over the read-only lexicon
    pub parser: Arc<Parser>,
    pub geocoder: Arc<dyn BaseGeocoder>,
    pub encyclopedia: Arc<dyn BaseEncyclopedia>,
    /// Source of randomness for answer phrasing
    pub phrases: Arc<dyn PhraseSelector>,
}

impl ServerDeps {
    pub fn new(
        parser: Arc<Parser>,
        geocoder: Arc<dyn BaseGeocoder>,
        encyclopedia: Arc<dyn BaseEncyclopedia>,
        phrases: Arc<dyn PhraseSelector>,
    ) -> Self {
        Self {
            parser,
            geocoder,
            encyclopedia,
            phrases,
        }
    }

    /// Wire the real clients from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let lexicon = config.load_lexicon()?;
        tracing::info!(
            question_tags = lexicon.question_tags().len(),
            "Lexicon loaded"
        );

        let geocoding = GoogleGeocodingClient::new(config.geocoding_options())
            .context("Failed to create geocoding client")?;
        let wikipedia = WikipediaClient::new(config.wikipedia_options())
            .context("Failed to create Wikipedia client")?;

        Ok(Self::new(
            Arc::new(Parser::new(Arc::new(lexicon))),
            Arc::new(GoogleGeocoderAdapter::new(Arc::new(geocoding))),
            Arc::new(WikipediaAdapter::new(Arc::new(wikipedia))),
            Arc::new(RandomSelector),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn random_selector_stays_in_bounds() {
        let selector = RandomSelector;
        for _ in 0..100 {
            assert!(selector.select(4) < 4);
        }
    }

    #[test]
    fn random_selector_tolerates_empty_pool() {
        assert_eq!(RandomSelector.select(0), 0);
    }

    #[test]
    fn deps_build_from_config() {
        let config = Config::from_lookup(|key: &str| match key {
            "GOOGLE_MAPS_GEOCODING_KEY" => Some("k".to_string()),
            _ => None,
        })
        .unwrap();

        let deps = ServerDeps::from_config(&config).unwrap();
        assert_eq!(deps.parser.parse("Où est la Tour Eiffel ?"), "tour eiffel");
    }
}
