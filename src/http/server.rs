//! HTTP server setup and configuration.
//!
//! # Responsibilities
//! - Create the Axum Router from the dispatcher and fallback
//! - Wire up middleware (tracing)
//! - Serve on an already bound listener
//! - Stop accepting and drain on shutdown

use std::convert::Infallible;

use axum::{extract::Request, response::IntoResponse, Router};
use tokio::net::TcpListener;
use tokio::sync::broadcast;
use tower::Service;
use tower_http::trace::TraceLayer;

use crate::http::dispatch::Dispatcher;
use crate::http::fallback::default_fallback;

/// HTTP server answering requests from a redirect table.
pub struct RedirectServer {
    router: Router,
}

impl RedirectServer {
    /// Create a server that sends unmatched requests to `fallback`.
    pub fn new<S>(dispatcher: Dispatcher, fallback: S) -> Self
    where
        S: Service<Request, Error = Infallible> + Clone + Send + Sync + 'static,
        S::Response: IntoResponse,
        S::Future: Send + 'static,
    {
        tracing::debug!(entries = dispatcher.table().len(), "Building redirect router");
        let router = dispatcher
            .into_router(fallback)
            .layer(TraceLayer::new_for_http());
        Self { router }
    }

    /// Create a server whose fallback is the built-in not-found page.
    pub fn with_default_fallback(dispatcher: Dispatcher) -> Self {
        Self::new(dispatcher, default_fallback())
    }

    /// The complete request pipeline, for in-process use.
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Run the server until a shutdown signal arrives.
    pub async fn run(
        self,
        listener: TcpListener,
        mut shutdown: broadcast::Receiver<()>,
    ) -> Result<(), std::io::Error> {
        let addr = listener.local_addr()?;
        tracing::info!(address = %addr, "HTTP server starting");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                let _ = shutdown.recv().await;
                tracing::info!("Shutdown signal received");
            })
            .await?;

        tracing::info!("HTTP server stopped");
        Ok(())
    }
}
