//! Startup orchestration.
//!
//! # Responsibilities
//! - Decode the redirect source and build the dispatcher
//! - Bind the listener, only once the table is complete
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal and returned, never panicked on
//! - No socket is opened while a decode error is possible

use thiserror::Error;
use tokio::net::TcpListener;

use crate::config::ServerConfig;
use crate::http::Dispatcher;
use crate::source::LoadError;

/// Fatal errors raised before the server starts accepting requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("failed to load redirects: {0}")]
    Load(#[from] LoadError),

    #[error("failed to bind {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },
}

/// A built dispatcher and the listener it will serve on.
#[derive(Debug)]
pub struct Prepared {
    pub dispatcher: Dispatcher,
    pub listener: TcpListener,
}

/// Decode the redirect table, then bind the listener.
///
/// Decoding reads file sources synchronously; it runs once, before any
/// request can arrive.
pub async fn prepare(config: &ServerConfig) -> Result<Prepared, StartupError> {
    let redirects = &config.redirects;
    let dispatcher = Dispatcher::from_source(redirects.format, &redirects.source)?;

    tracing::info!(
        format = %redirects.format,
        source = %redirects.source,
        entries = dispatcher.table().len(),
        "Redirect table loaded"
    );

    let address = config.listener.bind_address();
    let listener = TcpListener::bind(&address)
        .await
        .map_err(|source| StartupError::Bind {
            address: address.clone(),
            source,
        })?;

    Ok(Prepared {
        dispatcher,
        listener,
    })
}
