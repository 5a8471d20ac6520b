use axum::{
    extract::Extension,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

use crate::server::app::AppState;
use crate::server::static_files::asset_text;

/// Placeholder replaced by the browser-side Maps key.
const MAPS_KEY_PLACEHOLDER: &str = "{{ google_maps_key }}";

/// Home page with the chat box and the Maps script tag
pub async fn home_handler(Extension(state): Extension<AppState>) -> Response {
    match asset_text("index.html") {
        Some(template) => {
            Html(template.replace(MAPS_KEY_PLACEHOLDER, &state.maps_javascript_key)).into_response()
        }
        None => {
            tracing::error!("index.html missing from embedded assets");
            (StatusCode::INTERNAL_SERVER_ERROR, "Home page unavailable").into_response()
        }
    }
}
