//! Answer domain actions - business logic functions
//!
//! `answer` never fails: every collaborator error turns into an apology.

use tracing::{info, warn};

use crate::domains::answer::models::{AnswerResult, Article, LookupError};
use crate::domains::answer::phrases::{pick, ARTICLE_INTROS, NEGATIVE_ANSWERS, POSITIVE_ANSWERS};
use crate::kernel::{ArticleContent, GeoResult, ServerDeps};
use wikipedia_client::WikipediaError;

/// Answer a "where is X" question in a conversational mode.
pub async fn answer(question: &str, deps: &ServerDeps) -> AnswerResult {
    match look_up(question, deps).await {
        Ok((place, article)) => {
            info!(address = %place.address, title = %article.title, "Question answered");
            AnswerResult::found(
                pick(&POSITIVE_ANSWERS, deps.phrases.as_ref()),
                pick(&ARTICLE_INTROS, deps.phrases.as_ref()),
                place,
                article,
            )
        }
        Err(error) => {
            warn!(error = %error, "Could not answer question");
            AnswerResult::not_found(pick(&NEGATIVE_ANSWERS, deps.phrases.as_ref()))
        }
    }
}

/// Parse, geocode, then fetch the nearest article. Stops at the first failure.
pub async fn look_up(
    question: &str,
    deps: &ServerDeps,
) -> Result<(GeoResult, ArticleContent), LookupError> {
    let place_name = deps.parser.parse(question);
    info!(place_name = %place_name, "Looking up place");

    let place = deps.geocoder.search(&place_name).await?;

    let nearest = deps
        .encyclopedia
        .geo_search(place.latitude, place.longitude)
        .await?
        .into_iter()
        .next()
        .ok_or(WikipediaError::NothingFound)?;

    let article = Article::from(nearest)
        .fetch(deps.encyclopedia.as_ref())
        .await?
        .into_content()
        .ok_or(WikipediaError::NothingFound)?;

    Ok((place, article))
}
