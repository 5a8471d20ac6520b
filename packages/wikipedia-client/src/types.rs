use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::WikipediaError;

/// Wikipedia editions the client can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lang {
    #[default]
    Fr,
    En,
    De,
}

impl Lang {
    pub fn as_str(&self) -> &'static str {
        match self {
            Lang::Fr => "fr",
            Lang::En => "en",
            Lang::De => "de",
        }
    }

    /// Action API endpoint of this edition.
    pub fn api_url(&self) -> String {
        format!("https://{}.wikipedia.org/w/api.php", self.as_str())
    }
}

impl fmt::Display for Lang {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Lang {
    type Err = WikipediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "fr" => Ok(Lang::Fr),
            "en" => Ok(Lang::En),
            "de" => Ok(Lang::De),
            other => Err(WikipediaError::Config(format!(
                "The lang must be one of fr, en, de (got '{}')",
                other
            ))),
        }
    }
}

/// Handle on a page found by geosearch. Holds no content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageRef {
    pub page_id: u64,
    pub lang: Lang,
    /// Title as reported by geosearch, when available.
    pub title: Option<String>,
    /// Distance to the searched point, in metres.
    pub distance: Option<f64>,
}

/// Title, plain-text summary and canonical URL of a page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageContent {
    pub title: String,
    pub summary: String,
    pub url: String,
}

/// MediaWiki `error` object.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorBody {
    pub code: String,
    #[serde(default)]
    pub info: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoSearchResponse {
    #[serde(default)]
    pub query: Option<GeoSearchQuery>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoSearchQuery {
    #[serde(default)]
    pub geosearch: Vec<GeoSearchHit>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct GeoSearchHit {
    pub pageid: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub dist: Option<f64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagesResponse {
    #[serde(default)]
    pub query: Option<PagesQuery>,
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PagesQuery {
    /// Keyed by page id rendered as a string.
    #[serde(default)]
    pub pages: HashMap<String, RawPage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawPage {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub extract: Option<String>,
    #[serde(default)]
    pub fullurl: Option<String>,
    #[serde(default)]
    pub missing: Option<serde_json::Value>,
}

impl RawPage {
    pub fn into_content(self) -> Option<PageContent> {
        if self.missing.is_some() {
            return None;
        }
        Some(PageContent {
            title: self.title?,
            summary: self.extract.unwrap_or_default(),
            url: self.fullurl?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lang_parses_supported_tags() {
        assert_eq!("fr".parse::<Lang>().unwrap(), Lang::Fr);
        assert_eq!("EN".parse::<Lang>().unwrap(), Lang::En);
        assert_eq!(" de ".parse::<Lang>().unwrap(), Lang::De);
    }

    #[test]
    fn lang_rejects_other_tags() {
        assert!(matches!("es".parse::<Lang>(), Err(WikipediaError::Config(_))));
    }

    #[test]
    fn lang_builds_edition_url() {
        assert_eq!(Lang::Fr.api_url(), "https://fr.wikipedia.org/w/api.php");
        assert_eq!(Lang::De.api_url(), "https://de.wikipedia.org/w/api.php");
    }

    #[test]
    fn missing_page_has_no_content() {
        let page: RawPage = serde_json::from_value(serde_json::json!({
            "ns": 0, "title": "Nope", "missing": ""
        }))
        .unwrap();
        assert!(page.into_content().is_none());
    }

    #[test]
    fn page_without_extract_keeps_empty_summary() {
        let page: RawPage = serde_json::from_value(serde_json::json!({
            "title": "Tour Eiffel",
            "fullurl": "https://fr.wikipedia.org/wiki/Tour_Eiffel"
        }))
        .unwrap();
        let content = page.into_content().unwrap();
        assert_eq!(content.title, "Tour Eiffel");
        assert_eq!(content.summary, "");
    }
}
