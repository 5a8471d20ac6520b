use axum::{
    extract::Path,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use rust_embed::RustEmbed;

// Embed page, scripts and styles at compile time
#[derive(RustEmbed)]
#[folder = "static"]
pub struct StaticAssets;

/// Serve a file from the embedded assets
pub async fn serve_static(Path(path): Path<String>) -> Response {
    let path = path.trim_start_matches('/');

    match StaticAssets::get(path) {
        Some(content) => {
            let mime = mime_guess::from_path(path).first_or_octet_stream();
            ([(header::CONTENT_TYPE, mime.as_ref())], content.data).into_response()
        }
        None => (StatusCode::NOT_FOUND, "404 Not Found").into_response(),
    }
}

/// Embedded file as text, if present and valid UTF-8
pub fn asset_text(path: &str) -> Option<String> {
    let file = StaticAssets::get(path)?;
    String::from_utf8(file.data.into_owned()).ok()
}
