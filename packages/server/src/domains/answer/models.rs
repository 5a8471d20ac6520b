use google_geocoding_client::GeocodingError;
use serde::Serialize;
use thiserror::Error;
use wikipedia_client::WikipediaError;

use crate::kernel::{ArticleContent, ArticleRef, BaseEncyclopedia, GeoResult};

/// An encyclopedia article, before or after its content was downloaded.
#[derive(Debug, Clone, PartialEq)]
pub enum Article {
    Unfetched(ArticleRef),
    Fetched {
        reference: ArticleRef,
        content: ArticleContent,
    },
}

impl Article {
    pub fn reference(&self) -> &ArticleRef {
        match self {
            Article::Unfetched(reference) => reference,
            Article::Fetched { reference, .. } => reference,
        }
    }

    pub fn content(&self) -> Option<&ArticleContent> {
        match self {
            Article::Unfetched(_) => None,
            Article::Fetched { content, .. } => Some(content),
        }
    }

    pub fn into_content(self) -> Option<ArticleContent> {
        match self {
            Article::Unfetched(_) => None,
            Article::Fetched { content, .. } => Some(content),
        }
    }

    /// Download the content once. A fetched article is returned as is.
    pub async fn fetch(self, encyclopedia: &dyn BaseEncyclopedia) -> Result<Self, WikipediaError> {
        match self {
            Article::Fetched { .. } => Ok(self),
            Article::Unfetched(reference) => {
                let content = encyclopedia.fetch_content(&reference).await?;
                Ok(Article::Fetched { reference, content })
            }
        }
    }
}

impl From<ArticleRef> for Article {
    fn from(reference: ArticleRef) -> Self {
        Article::Unfetched(reference)
    }
}

/// Why a question could not be answered. Never shown to the user.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("geocoding failed: {0}")]
    Geocoding(#[from] GeocodingError),

    #[error("encyclopedia lookup failed: {0}")]
    Encyclopedia(#[from] WikipediaError),
}

/// Reply to one question, serialized as the JSON body of `/question`.
///
/// On failure only `found` and `answer` are present.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerResult {
    pub found: bool,
    pub answer: String,
    #[serde(flatten)]
    pub details: Option<AnswerDetails>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnswerDetails {
    pub intro: String,
    #[serde(flatten)]
    pub place: GeoResult,
    #[serde(flatten)]
    pub article: ArticleContent,
}

impl AnswerResult {
    pub fn found(answer: String, intro: String, place: GeoResult, article: ArticleContent) -> Self {
        Self {
            found: true,
            answer,
            details: Some(AnswerDetails {
                intro,
                place,
                article,
            }),
        }
    }

    pub fn not_found(answer: String) -> Self {
        Self {
            found: false,
            answer,
            details: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::MockEncyclopedia;
    use serde_json::json;
    use wikipedia_client::Lang;

    fn eiffel_content() -> ArticleContent {
        ArticleContent {
            title: "Tour Eiffel".to_string(),
            summary: "La tour Eiffel...".to_string(),
            url: "https://fr.wikipedia.org/wiki/Tour_Eiffel".to_string(),
        }
    }

    #[test]
    fn not_found_serializes_two_keys() {
        let value = serde_json::to_value(AnswerResult::not_found("Pardon ?".into())).unwrap();
        assert_eq!(value, json!({ "found": false, "answer": "Pardon ?" }));
    }

    #[test]
    fn found_serializes_flat_fields() {
        let result = AnswerResult::found(
            "Voici :".into(),
            "Au fait :".into(),
            GeoResult {
                address: "Champ de Mars, Paris".into(),
                latitude: 48.858,
                longitude: 2.294,
            },
            eiffel_content(),
        );

        let value = serde_json::to_value(result).unwrap();
        assert_eq!(
            value,
            json!({
                "found": true,
                "answer": "Voici :",
                "intro": "Au fait :",
                "address": "Champ de Mars, Paris",
                "latitude": 48.858,
                "longitude": 2.294,
                "title": "Tour Eiffel",
                "summary": "La tour Eiffel...",
                "url": "https://fr.wikipedia.org/wiki/Tour_Eiffel"
            })
        );
    }

    #[tokio::test]
    async fn fetch_downloads_content_once() {
        let encyclopedia = MockEncyclopedia::new().with_content(
            1359783,
            "Tour Eiffel",
            "La tour Eiffel...",
            "https://fr.wikipedia.org/wiki/Tour_Eiffel",
        );
        let article = Article::from(ArticleRef {
            page_id: 1359783,
            lang: Lang::Fr,
        });
        assert!(article.content().is_none());

        let article = article.fetch(&encyclopedia).await.unwrap();
        let article = article.fetch(&encyclopedia).await.unwrap();

        assert_eq!(article.content(), Some(&eiffel_content()));
        assert_eq!(article.reference().page_id, 1359783);
        assert_eq!(encyclopedia.fetch_calls(), vec![1359783]);
    }

    #[tokio::test]
    async fn fetch_of_missing_article_fails() {
        let encyclopedia = MockEncyclopedia::new();
        let article = Article::from(ArticleRef {
            page_id: 42,
            lang: Lang::Fr,
        });

        let err = article.fetch(&encyclopedia).await.unwrap_err();
        assert!(matches!(err, WikipediaError::NothingFound));
    }
}
