//! Application setup and server configuration.

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::kernel::ServerDeps;
use crate::server::routes::{health_handler, home_handler, question_handler};
use crate::server::static_files::serve_static;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub deps: ServerDeps,
    /// Browser-side Google Maps key rendered into the home page
    pub maps_javascript_key: String,
}

/// Build the Axum application router
pub fn build_app(deps: ServerDeps, maps_javascript_key: String) -> Router {
    let state = AppState {
        deps,
        maps_javascript_key,
    };

    Router::new()
        .route("/", get(home_handler))
        .route("/question", post(question_handler))
        .route("/static/*path", get(serve_static))
        .route("/health", get(health_handler))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
