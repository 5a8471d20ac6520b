use axum::{extract::Extension, Form, Json};
use serde::Deserialize;

use crate::domains::answer::{self, AnswerResult};
use crate::server::app::AppState;

#[derive(Debug, Deserialize)]
pub struct QuestionForm {
    pub question: String,
}

/// Answer one question posted from the chat box
///
/// Always 200: failures are part of the answer (`found: false`).
pub async fn question_handler(
    Extension(state): Extension<AppState>,
    Form(form): Form<QuestionForm>,
) -> Json<AnswerResult> {
    Json(answer::answer(&form.question, &state.deps).await)
}
