// TestDependencies - mock implementations for testing
//
// Provides recording test doubles that can be injected into ServerDeps.

use async_trait::async_trait;
use google_geocoding_client::GeocodingError;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use wikipedia_client::{Lang, WikipediaError};

use super::{
    ArticleContent, ArticleRef, BaseEncyclopedia, BaseGeocoder, GeoResult, PhraseSelector,
    ServerDeps,
};
use crate::domains::parser::Parser;

// =============================================================================
// Mock Geocoder
// =============================================================================

pub struct MockGeocoder {
    responses: Arc<Mutex<Vec<Result<GeoResult, GeocodingError>>>>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockGeocoder {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(Vec::new())),
            calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a successful lookup
    pub fn with_place(self, address: &str, latitude: f64, longitude: f64) -> Self {
        self.responses.lock().unwrap().push(Ok(GeoResult {
            address: address.to_string(),
            latitude,
            longitude,
        }));
        self
    }

    /// Queue a failed lookup
    pub fn with_error(self, error: GeocodingError) -> Self {
        self.responses.lock().unwrap().push(Err(error));
        self
    }

    /// Get all place names that were searched
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

impl Default for MockGeocoder {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseGeocoder for MockGeocoder {
    async fn search(&self, place_name: &str) -> Result<GeoResult, GeocodingError> {
        self.calls.lock().unwrap().push(place_name.to_string());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            Err(GeocodingError::NothingFound)
        } else {
            responses.remove(0)
        }
    }
}

// =============================================================================
// Mock Encyclopedia
// =============================================================================

pub struct MockEncyclopedia {
    geo_search_responses: Arc<Mutex<Vec<Result<Vec<ArticleRef>, WikipediaError>>>>,
    contents: Arc<Mutex<HashMap<u64, ArticleContent>>>,
    geo_search_calls: Arc<Mutex<Vec<(f64, f64)>>>,
    fetch_calls: Arc<Mutex<Vec<u64>>>,
}

impl MockEncyclopedia {
    pub fn new() -> Self {
        Self {
            geo_search_responses: Arc::new(Mutex::new(Vec::new())),
            contents: Arc::new(Mutex::new(HashMap::new())),
            geo_search_calls: Arc::new(Mutex::new(Vec::new())),
            fetch_calls: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Queue a geosearch result listing the given page ids, nearest first
    pub fn with_articles(self, page_ids: &[u64]) -> Self {
        let articles = page_ids
            .iter()
            .map(|&page_id| ArticleRef {
                page_id,
                lang: Lang::Fr,
            })
            .collect();
        self.geo_search_responses.lock().unwrap().push(Ok(articles));
        self
    }

    /// Queue a failed geosearch
    pub fn with_geo_search_error(self, error: WikipediaError) -> Self {
        self.geo_search_responses.lock().unwrap().push(Err(error));
        self
    }

    /// Register the content returned for a page id. Unknown pages are NothingFound.
    pub fn with_content(self, page_id: u64, title: &str, summary: &str, url: &str) -> Self {
        self.contents.lock().unwrap().insert(
            page_id,
            ArticleContent {
                title: title.to_string(),
                summary: summary.to_string(),
                url: url.to_string(),
            },
        );
        self
    }

    /// Get all coordinates that were searched
    pub fn geo_search_calls(&self) -> Vec<(f64, f64)> {
        self.geo_search_calls.lock().unwrap().clone()
    }

    /// Get all page ids whose content was fetched
    pub fn fetch_calls(&self) -> Vec<u64> {
        self.fetch_calls.lock().unwrap().clone()
    }
}

impl Default for MockEncyclopedia {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseEncyclopedia for MockEncyclopedia {
    async fn geo_search(
        &self,
        latitude: f64,
        longitude: f64,
    ) -> Result<Vec<ArticleRef>, WikipediaError> {
        self.geo_search_calls
            .lock()
            .unwrap()
            .push((latitude, longitude));

        let mut responses = self.geo_search_responses.lock().unwrap();
        if responses.is_empty() {
            Err(WikipediaError::NothingFound)
        } else {
            responses.remove(0)
        }
    }

    async fn fetch_content(&self, article: &ArticleRef) -> Result<ArticleContent, WikipediaError> {
        self.fetch_calls.lock().unwrap().push(article.page_id);

        self.contents
            .lock()
            .unwrap()
            .get(&article.page_id)
            .cloned()
            .ok_or(WikipediaError::NothingFound)
    }
}

// =============================================================================
// Fixed phrase selection
// =============================================================================

/// Always picks the same index (wrapped to the pool size)
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedSelector(pub usize);

impl PhraseSelector for FixedSelector {
    fn select(&self, pool_len: usize) -> usize {
        self.0 % pool_len.max(1)
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

pub struct TestDependencies {
    pub parser: Arc<Parser>,
    pub geocoder: Arc<MockGeocoder>,
    pub encyclopedia: Arc<MockEncyclopedia>,
    pub phrases: Arc<FixedSelector>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            parser: Arc::new(Parser::french()),
            geocoder: Arc::new(MockGeocoder::new()),
            encyclopedia: Arc::new(MockEncyclopedia::new()),
            phrases: Arc::new(FixedSelector(0)),
        }
    }

    /// Set a mock geocoder
    pub fn mock_geocoder(mut self, geocoder: MockGeocoder) -> Self {
        self.geocoder = Arc::new(geocoder);
        self
    }

    /// Set a mock encyclopedia
    pub fn mock_encyclopedia(mut self, encyclopedia: MockEncyclopedia) -> Self {
        self.encyclopedia = Arc::new(encyclopedia);
        self
    }

    /// Pin phrase selection to an index
    pub fn phrase_index(mut self, index: usize) -> Self {
        self.phrases = Arc::new(FixedSelector(index));
        self
    }

    /// Convert into ServerDeps for testing. The mocks stay reachable through `self`.
    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.parser.clone(),
            self.geocoder.clone(),
            self.encyclopedia.clone(),
            self.phrases.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
