//! Redirect server binary.
//!
//! ```text
//! redirector -u '[{"path":"/docs","url":"https://docs.example.com"}]'
//! redirector -m csv -r false -u redirects.csv -p 8000
//! ```

use std::process::ExitCode;

use clap::Parser;

use redirector::config::Cli;
use redirector::lifecycle::{prepare, signals::wait_for_signal, Shutdown};
use redirector::observability::{logging, metrics};
use redirector::RedirectServer;

#[tokio::main]
async fn main() -> ExitCode {
    match run(Cli::parse()).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("redirector: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = cli.into_config()?;

    logging::init_logging(&config.observability.log_level)?;
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "redirector starting");
    tracing::info!(
        bind_address = %config.listener.bind_address(),
        format = %config.redirects.format,
        source = %config.redirects.source,
        "Configuration loaded"
    );

    let prepared = prepare(&config).await?;

    if config.observability.metrics_enabled {
        match config.observability.metrics_address.parse() {
            Ok(addr) => {
                if let Err(e) = metrics::init_metrics(addr) {
                    tracing::warn!(error = %e, "Metrics disabled");
                }
            }
            Err(e) => tracing::warn!(error = %e, "Invalid metrics address, metrics disabled"),
        }
    }
    metrics::record_table_size(prepared.dispatcher.table().len());

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn({
        let shutdown = shutdown.clone();
        async move {
            wait_for_signal().await;
            shutdown.trigger();
        }
    });

    RedirectServer::with_default_fallback(prepared.dispatcher)
        .run(prepared.listener, server_shutdown)
        .await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
