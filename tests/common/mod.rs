//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::io::Write;
use std::net::SocketAddr;

use axum::extract::Request;
use axum::Router;
use redirector::config::ServerConfig;
use redirector::lifecycle::{prepare, Shutdown};
use redirector::{Format, RedirectServer, RedirectSource};
use tempfile::NamedTempFile;

/// A configuration listening on a free local port.
pub fn local_config(format: Format, source: RedirectSource) -> ServerConfig {
    let mut config = ServerConfig::default();
    config.listener.address = "127.0.0.1".to_string();
    config.listener.port = 0;
    config.redirects.format = format;
    config.redirects.source = source;
    config
}

/// Write `contents` to a temporary file that lives as long as the handle.
pub fn source_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

/// Start a server with the default fallback. Returns its address and the
/// shutdown handle.
pub async fn start_server(config: &ServerConfig) -> (SocketAddr, Shutdown) {
    let prepared = prepare(config).await.unwrap();
    let server = RedirectServer::with_default_fallback(prepared.dispatcher);
    spawn(server, prepared.listener)
}

/// Start a server whose fallback echoes the request it received.
pub async fn start_echo_server(config: &ServerConfig) -> (SocketAddr, Shutdown) {
    let prepared = prepare(config).await.unwrap();
    let server = RedirectServer::new(prepared.dispatcher, Router::new().fallback(echo));
    spawn(server, prepared.listener)
}

fn spawn(server: RedirectServer, listener: tokio::net::TcpListener) -> (SocketAddr, Shutdown) {
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();

    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    (addr, shutdown)
}

/// Reports method, path and query, and the `x-trace` header.
async fn echo(request: Request) -> String {
    let trace = request
        .headers()
        .get("x-trace")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("-")
        .to_string();
    format!("fallback {} {} x-trace={}", request.method(), request.uri(), trace)
}

/// HTTP client that reports redirects instead of following them.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .no_proxy()
        .pool_max_idle_per_host(0)
        .build()
        .unwrap()
}
