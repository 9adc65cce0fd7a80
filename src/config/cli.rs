//! Command-line interface.
//!
//! Flags override the optional TOML file, which overrides the built-in
//! defaults. The merged result is validated before it is returned.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::config::loader::{load_config, ConfigError};
use crate::config::schema::ServerConfig;
use crate::config::validation::validate_config;
use crate::source::{Format, RedirectSource};

#[derive(Debug, Parser)]
#[command(name = "redirector", version)]
#[command(about = "Redirect known paths to their URLs, serve a not-found page otherwise", long_about = None)]
pub struct Cli {
    /// Redirect data: the payload itself, or a file path with `-r false`
    #[arg(short = 'u', long = "urls")]
    pub urls: Option<String>,

    /// Treat `-u` as the payload itself rather than a file path
    #[arg(short = 'r', long, default_value_t = true, action = ArgAction::Set)]
    pub raw: bool,

    /// Format of the redirect data
    #[arg(short = 'm', long, value_parser = ["json", "yaml", "csv"])]
    pub mode: Option<String>,

    /// Port to serve on [default: 8080]
    #[arg(short = 'p', long)]
    pub port: Option<u16>,

    /// IP address to serve on [default: 0.0.0.0]
    #[arg(long = "ip")]
    pub address: Option<String>,

    /// TOML configuration file
    #[arg(short = 'c', long)]
    pub config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Serve Prometheus metrics on this address
    #[arg(long)]
    pub metrics_address: Option<String>,
}

impl Cli {
    /// Overlay the flags that were given on top of `config`.
    pub fn apply(&self, mut config: ServerConfig) -> ServerConfig {
        if let Some(urls) = &self.urls {
            config.redirects.source = RedirectSource::from_flag(urls.as_str(), self.raw);
        }
        if let Some(mode) = &self.mode {
            config.redirects.format = Format::from_mode(mode);
        }
        if let Some(port) = self.port {
            config.listener.port = port;
        }
        if let Some(address) = &self.address {
            config.listener.address = address.clone();
        }
        if let Some(level) = &self.log_level {
            config.observability.log_level = level.clone();
        }
        if let Some(address) = &self.metrics_address {
            config.observability.metrics_enabled = true;
            config.observability.metrics_address = address.clone();
        }
        config
    }

    /// Build the final, validated configuration.
    pub fn into_config(self) -> Result<ServerConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => ServerConfig::default(),
        };

        let config = self.apply(base);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }
}
