//! Pure Wikipedia client.
//!
//! A minimal client for the MediaWiki Action API of the French, English and
//! German editions. Supports geographic search around a point and fetching a
//! page's title, plain-text extract and canonical URL.
//!
//! # Example
//!
//! ```rust,ignore
//! use wikipedia_client::{Lang, WikipediaClient, WikipediaOptions};
//!
//! let client = WikipediaClient::new(WikipediaOptions::new(Lang::Fr))?;
//!
//! let pages = client.geosearch(48.858, 2.294).await?;
//! let content = client.fetch_content(&pages[0]).await?;
//! println!("{}: {}", content.title, content.url);
//! ```

pub mod error;
pub mod types;

pub use error::{Result, WikipediaError};
pub use types::{Lang, PageContent, PageRef};

use std::time::Duration;

use serde::de::DeserializeOwned;
use types::{GeoSearchResponse, PagesResponse};

/// Default geosearch radius, in metres (the API maximum).
pub const DEFAULT_SEARCH_RADIUS: u32 = 10_000;

/// Default cap on extract length, in characters.
pub const DEFAULT_EXTRACT_CHARS: u32 = 1_200;

const USER_AGENT: &str = concat!("grandpy-bot/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct WikipediaOptions {
    pub lang: Lang,
    pub search_radius: u32,
    pub extract_chars: u32,
    pub timeout: Duration,
    /// Overrides the edition URL derived from `lang`.
    pub base_url: Option<String>,
}

impl WikipediaOptions {
    pub fn new(lang: Lang) -> Self {
        Self {
            lang,
            search_radius: DEFAULT_SEARCH_RADIUS,
            extract_chars: DEFAULT_EXTRACT_CHARS,
            timeout: Duration::from_secs(10),
            base_url: None,
        }
    }

    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_search_radius(mut self, radius: u32) -> Self {
        self.search_radius = radius;
        self
    }

    pub fn with_extract_chars(mut self, chars: u32) -> Self {
        self.extract_chars = chars;
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

impl Default for WikipediaOptions {
    fn default() -> Self {
        Self::new(Lang::default())
    }
}

#[derive(Debug, Clone)]
pub struct WikipediaClient {
    client: reqwest::Client,
    options: WikipediaOptions,
    api_url: String,
}

impl WikipediaClient {
    pub fn new(options: WikipediaOptions) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(options.timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| WikipediaError::Config(e.to_string()))?;

        let api_url = options
            .base_url
            .clone()
            .unwrap_or_else(|| options.lang.api_url());

        Ok(Self {
            client,
            options,
            api_url,
        })
    }

    pub fn lang(&self) -> Lang {
        self.options.lang
    }

    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// Pages around a point, nearest first.
    ///
    /// An empty neighbourhood is reported as [`WikipediaError::NothingFound`].
    pub async fn geosearch(&self, latitude: f64, longitude: f64) -> Result<Vec<PageRef>> {
        validate_coordinates(latitude, longitude)?;

        let radius = self.options.search_radius.to_string();
        let coord = format!("{}|{}", latitude, longitude);
        let params = [
            ("format", "json"),
            ("action", "query"),
            ("list", "geosearch"),
            ("gsradius", radius.as_str()),
            ("gscoord", coord.as_str()),
        ];

        let body: GeoSearchResponse = self.get(&params).await?;
        if let Some(error) = body.error {
            return Err(WikipediaError::Service {
                code: error.code,
                info: error.info,
            });
        }

        let lang = self.options.lang;
        let pages: Vec<PageRef> = body
            .query
            .map(|q| q.geosearch)
            .unwrap_or_default()
            .into_iter()
            .map(|hit| PageRef {
                page_id: hit.pageid,
                lang,
                title: hit.title,
                distance: hit.dist,
            })
            .collect();

        tracing::debug!(latitude, longitude, count = pages.len(), "Wikipedia geosearch done");

        if pages.is_empty() {
            return Err(WikipediaError::NothingFound);
        }
        Ok(pages)
    }

    /// Download title, extract and URL of a page.
    pub async fn fetch_content(&self, page: &PageRef) -> Result<PageContent> {
        let exchars = self.options.extract_chars.to_string();
        let page_id = page.page_id.to_string();
        let params = [
            ("format", "json"),
            ("action", "query"),
            ("prop", "extracts|info"),
            ("inprop", "url"),
            ("exchars", exchars.as_str()),
            ("explaintext", "1"),
            ("pageids", page_id.as_str()),
        ];

        let body: PagesResponse = self.get(&params).await?;
        if let Some(error) = body.error {
            return Err(WikipediaError::Service {
                code: error.code,
                info: error.info,
            });
        }

        let content = body
            .query
            .and_then(|mut q| q.pages.remove(&page_id))
            .and_then(|raw| raw.into_content())
            .ok_or(WikipediaError::NothingFound)?;

        tracing::debug!(page_id = page.page_id, title = %content.title, "Wikipedia page fetched");

        Ok(content)
    }

    async fn get<T: DeserializeOwned>(&self, params: &[(&str, &str)]) -> Result<T> {
        let resp = self.client.get(&self.api_url).query(params).send().await?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(WikipediaError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        Ok(resp.json().await?)
    }
}

/// Reject coordinates outside the globe (NaN included).
pub fn validate_coordinates(latitude: f64, longitude: f64) -> Result<()> {
    let valid = (-90.0..=90.0).contains(&latitude) && (-180.0..=180.0).contains(&longitude);
    if !valid {
        return Err(WikipediaError::InvalidCoordinates {
            latitude,
            longitude,
        });
    }
    Ok(())
}
