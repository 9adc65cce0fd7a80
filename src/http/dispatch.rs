//! Per-request redirect decision.
//!
//! # Responsibilities
//! - Resolve the request path against the redirect table
//! - Answer hits with `302 Found`
//! - Hand misses to the fallback service, untouched
//!
//! # Design Decisions
//! - The table is shared read-only through an `Arc`; no locks on the hot path
//! - No I/O or awaiting before the decision is made
//! - The fallback is any infallible tower service, so callers can plug in a
//!   handler, a `Router` or a hand-written service

use std::convert::Infallible;
use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use tower::Service;

use crate::http::response;
use crate::observability::metrics::{self, Outcome};
use crate::routing::RedirectTable;
use crate::source::{Format, LoadError, RedirectSource};

/// Outcome of checking a request path against the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision<'a> {
    /// Redirect to this destination.
    Redirect(&'a str),
    /// Let the fallback handle the request.
    Fallback,
}

/// Owns the redirect table and decides, per request, between redirecting
/// and delegating.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    table: Arc<RedirectTable>,
}

impl Dispatcher {
    pub fn new(table: RedirectTable) -> Self {
        Self {
            table: Arc::new(table),
        }
    }

    /// Decode `source` and build a dispatcher over the resulting table.
    ///
    /// There is no dispatcher without a fully decoded table.
    pub fn from_source(format: Format, source: &RedirectSource) -> Result<Self, LoadError> {
        RedirectTable::load(format, source).map(Self::new)
    }

    pub fn table(&self) -> &RedirectTable {
        &self.table
    }

    pub fn decide(&self, path: &str) -> Decision<'_> {
        match self.table.resolve(path) {
            Some(destination) => Decision::Redirect(destination),
            None => Decision::Fallback,
        }
    }

    /// Build a router that redirects known paths and sends everything else
    /// to `fallback`.
    pub fn into_router<S>(self, fallback: S) -> Router
    where
        S: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        S::Response: IntoResponse,
        S::Future: Send + 'static,
    {
        Router::new()
            .fallback_service(fallback)
            .layer(middleware::from_fn_with_state(self, dispatch))
    }
}

async fn dispatch(State(dispatcher): State<Dispatcher>, request: Request, next: Next) -> Response {
    match dispatcher.decide(request.uri().path()) {
        Decision::Redirect(destination) => {
            tracing::debug!(
                path = %request.uri().path(),
                destination = %destination,
                "Redirecting"
            );
            metrics::record_dispatch(Outcome::Redirect);
            response::found(destination)
        }
        Decision::Fallback => {
            tracing::trace!(path = %request.uri().path(), "No redirect, using fallback");
            metrics::record_dispatch(Outcome::Fallback);
            next.run(request).await
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::Record;
    use axum::{
        body::{to_bytes, Body},
        http::{header, Method, StatusCode},
    };
    use tower::ServiceExt;

    /// Fallback that reports exactly what it received.
    async fn echo(request: Request) -> String {
        let (parts, body) = request.into_parts();
        let body = to_bytes(body, 1024).await.unwrap();
        format!(
            "{} {} x-trace={} body={}",
            parts.method,
            parts.uri,
            parts
                .headers
                .get("x-trace")
                .and_then(|v| v.to_str().ok())
                .unwrap_or("-"),
            String::from_utf8_lossy(&body)
        )
    }

    fn dispatcher() -> Dispatcher {
        Dispatcher::new(RedirectTable::from_records(vec![
            Record::new("/a", "https://example.com"),
            Record::new("/empty", ""),
        ]))
    }

    fn request(method: Method, uri: &str, body: &'static str) -> Request {
        axum::http::Request::builder()
            .method(method)
            .uri(uri)
            .header("x-trace", "abc")
            .body(Body::from(body))
            .unwrap()
    }

    fn get(uri: &str) -> Request {
        axum::http::Request::builder().uri(uri).body(Body::empty()).unwrap()
    }

    fn app() -> Router {
        dispatcher().into_router(Router::new().fallback(echo))
    }

    async fn body_string(response: Response) -> String {
        let bytes = to_bytes(response.into_body(), 1024).await.unwrap();
        String::from_utf8(bytes.to_vec()).unwrap()
    }

    #[test]
    fn test_decide() {
        let dispatcher = dispatcher();
        assert_eq!(dispatcher.decide("/a"), Decision::Redirect("https://example.com"));
        assert_eq!(dispatcher.decide("/b"), Decision::Fallback);
        assert_eq!(dispatcher.decide("/empty"), Decision::Fallback);
    }

    #[test]
    fn test_from_source_fails_on_malformed_payload() {
        let source = RedirectSource::Inline("[{\"path\":".to_string());
        assert!(Dispatcher::from_source(Format::Json, &source).is_err());
    }

    #[tokio::test]
    async fn test_known_path_redirects() {
        let response = app()
            .oneshot(get("/a"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
        assert_eq!(
            response.headers().get(header::LOCATION).unwrap(),
            "https://example.com"
        );
    }

    #[tokio::test]
    async fn test_query_string_is_not_part_of_the_match() {
        let response = app()
            .oneshot(get("/a?utm=1"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_any_method_redirects() {
        let response = app()
            .oneshot(request(Method::POST, "/a", "payload"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::FOUND);
    }

    #[tokio::test]
    async fn test_unknown_path_reaches_fallback_unmodified() {
        let response = app()
            .oneshot(request(Method::PUT, "/b/c?x=1&y=2", "hello"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            body_string(response).await,
            "PUT /b/c?x=1&y=2 x-trace=abc body=hello"
        );
    }

    #[tokio::test]
    async fn test_empty_destination_reaches_fallback() {
        let response = app()
            .oneshot(get("/empty"))
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_string(response).await.starts_with("GET /empty"));
    }

    #[tokio::test]
    async fn test_empty_table_always_falls_back() {
        let app = Dispatcher::new(RedirectTable::default()).into_router(Router::new().fallback(echo));

        for path in ["/", "/a", "/anything/else"] {
            let response = app
                .clone()
                .oneshot(get(path))
                .await
                .unwrap();
            assert_eq!(response.status(), StatusCode::OK, "path {}", path);
        }
    }
}
