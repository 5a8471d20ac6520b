use anyhow::{Context, Result};
use dotenvy::dotenv;
use google_geocoding_client::{GeocodingOptions, DEFAULT_ENDPOINT};
use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;
use wikipedia_client::{Lang, WikipediaOptions, DEFAULT_EXTRACT_CHARS, DEFAULT_SEARCH_RADIUS};

use crate::domains::parser::Lexicon;

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub geocoding_api_key: String,
    pub geocoding_endpoint: String,
    /// Browser-side Google Maps key, injected into the home page
    pub maps_javascript_key: String,
    pub wikipedia_lang: Lang,
    pub wikipedia_search_radius: u32,
    pub wikipedia_extract_chars: u32,
    /// Per-call timeout for both external services
    pub http_timeout: Duration,
    pub stop_words_path: Option<PathBuf>,
    pub question_tags_path: Option<PathBuf>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key/value source (the environment in production).
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let (stop_words_path, question_tags_path) = lexicon_paths(&lookup)?;

        Ok(Self {
            port: lookup("PORT")
                .unwrap_or_else(|| "5000".to_string())
                .parse::<u16>()
                .context("PORT must be a valid number")?,
            geocoding_api_key: lookup("GOOGLE_MAPS_GEOCODING_KEY")
                .context("GOOGLE_MAPS_GEOCODING_KEY must be set")?,
            geocoding_endpoint: lookup("GOOGLE_MAPS_GEOCODING_ENDPOINT")
                .unwrap_or_else(|| DEFAULT_ENDPOINT.to_string()),
            maps_javascript_key: lookup("GOOGLE_MAPS_JAVASCRIPT_KEY").unwrap_or_default(),
            wikipedia_lang: lookup("WIKIPEDIA_LANG")
                .map(|lang| lang.parse::<Lang>())
                .transpose()
                .context("WIKIPEDIA_LANG must be one of fr, en, de")?
                .unwrap_or_default(),
            wikipedia_search_radius: lookup("WIKIPEDIA_SEARCH_RADIUS")
                .map(|radius| radius.parse::<u32>())
                .transpose()
                .context("WIKIPEDIA_SEARCH_RADIUS must be a valid number")?
                .unwrap_or(DEFAULT_SEARCH_RADIUS),
            wikipedia_extract_chars: lookup("WIKIPEDIA_EXTRACT_CHARS")
                .map(|chars| chars.parse::<u32>())
                .transpose()
                .context("WIKIPEDIA_EXTRACT_CHARS must be a valid number")?
                .unwrap_or(DEFAULT_EXTRACT_CHARS),
            http_timeout: Duration::from_secs(
                lookup("HTTP_TIMEOUT_SECS")
                    .unwrap_or_else(|| "10".to_string())
                    .parse::<u64>()
                    .context("HTTP_TIMEOUT_SECS must be a valid number")?,
            ),
            stop_words_path,
            question_tags_path,
        })
    }

    pub fn geocoding_options(&self) -> GeocodingOptions {
        GeocodingOptions::new(self.geocoding_api_key.clone())
            .with_endpoint(self.geocoding_endpoint.clone())
            .with_timeout(self.http_timeout)
    }

    pub fn wikipedia_options(&self) -> WikipediaOptions {
        WikipediaOptions::new(self.wikipedia_lang)
            .with_search_radius(self.wikipedia_search_radius)
            .with_extract_chars(self.wikipedia_extract_chars)
            .with_timeout(self.http_timeout)
    }

    /// Lexicon from the configured files, or the bundled French one.
    pub fn load_lexicon(&self) -> Result<Lexicon> {
        read_lexicon(
            self.stop_words_path.as_deref(),
            self.question_tags_path.as_deref(),
        )
    }

    /// Lexicon settings only. Parsing needs no API key.
    pub fn lexicon_from_env() -> Result<Lexicon> {
        let _ = dotenv();

        Self::lexicon_from_lookup(|key| env::var(key).ok())
    }

    pub fn lexicon_from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Lexicon> {
        let (stop_words_path, question_tags_path) = lexicon_paths(&lookup)?;
        read_lexicon(stop_words_path.as_deref(), question_tags_path.as_deref())
    }
}

fn lexicon_paths(
    lookup: &impl Fn(&str) -> Option<String>,
) -> Result<(Option<PathBuf>, Option<PathBuf>)> {
    let stop_words_path = lookup("STOP_WORDS_PATH").map(PathBuf::from);
    let question_tags_path = lookup("QUESTION_TAGS_PATH").map(PathBuf::from);
    if stop_words_path.is_some() != question_tags_path.is_some() {
        anyhow::bail!("STOP_WORDS_PATH and QUESTION_TAGS_PATH must be set together");
    }
    Ok((stop_words_path, question_tags_path))
}

fn read_lexicon(stop_words: Option<&Path>, question_tags: Option<&Path>) -> Result<Lexicon> {
    match (stop_words, question_tags) {
        (Some(stop_words), Some(question_tags)) => {
            Lexicon::from_files(stop_words, question_tags).context("Failed to load lexicon")
        }
        _ => Ok(Lexicon::french()),
    }
}
