//! Default handler for requests that match no redirect.

use axum::{http::StatusCode, response::Html, Router};

pub const NOT_FOUND_PAGE: &str = "<h1>Not found :(</h1>";

pub async fn not_found() -> (StatusCode, Html<&'static str>) {
    (StatusCode::NOT_FOUND, Html(NOT_FOUND_PAGE))
}

/// Router answering every request with the not-found page.
pub fn default_fallback() -> Router {
    Router::new().fallback(not_found)
}
