// Trait definitions for dependency injection
//
// These are INFRASTRUCTURE traits only - no business logic.
// Answering questions is a domain function (domains::answer) that uses these traits.
//
// Naming convention: Base* for trait names (e.g., BaseGeocoder, BaseEncyclopedia)

use async_trait::async_trait;
use google_geocoding_client::GeocodingError;
use serde::Serialize;
use wikipedia_client::{Lang, WikipediaError};

// =============================================================================
// Geocoding Trait (Infrastructure - address to coordinates)
// =============================================================================

/// Formatted address and coordinates of a geocoded place.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeoResult {
    pub address: String,
    pub latitude: f64,
    pub longitude: f64,
}

#[async_trait]
pub trait BaseGeocoder: Send + Sync {
    /// Resolve a place name to its first candidate.
    async fn search(&self, place_name: &str) -> Result<GeoResult, GeocodingError>;
}

// =============================================================================
// Encyclopedia Trait (Infrastructure - nearby articles)
// =============================================================================

/// Handle on an encyclopedia article. Carries no content.
#[derive(Debug, Clone, PartialEq)]
pub struct ArticleRef {
    pub page_id: u64,
    pub lang: Lang,
}

/// Title, length-bounded summary and URL of an article.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ArticleContent {
    pub title: String,
    pub summary: String,
    pub url: String,
}

#[async_trait]
pub trait BaseEncyclopedia: Send + Sync {
    /// Articles near a point, nearest first.
    async fn geo_search(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ArticleRef>, WikipediaError>;

    /// Download the content of one article.
    async fn fetch_content(&self, article: &ArticleRef) -> Result<ArticleContent, WikipediaError>;
}

// =============================================================================
// Phrase Selection Trait (Infrastructure - randomness)
// =============================================================================

pub trait PhraseSelector: Send + Sync {
    /// Index into a pool of `pool_len` phrases.
    fn select(&self, pool_len: usize) -> usize;
}
