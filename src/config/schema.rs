//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from TOML and fall back
//! to the defaults of the command-line interface.

use std::net::Ipv6Addr;

use serde::{Deserialize, Serialize};

use crate::source::{Format, RedirectSource};

/// Root configuration for the redirect server.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Where to listen for HTTP requests.
    pub listener: ListenerConfig,

    /// Where the redirect table comes from.
    pub redirects: RedirectsConfig,

    /// Logging and metrics settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// IP address or host name to bind.
    pub address: String,

    /// TCP port to bind. Zero picks a free port.
    pub port: u16,
}

impl ListenerConfig {
    /// `address:port`, with IPv6 literals bracketed.
    pub fn bind_address(&self) -> String {
        if self.address.parse::<Ipv6Addr>().is_ok() {
            format!("[{}]:{}", self.address, self.port)
        } else {
            format!("{}:{}", self.address, self.port)
        }
    }
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            address: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

/// Redirect table source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RedirectsConfig {
    /// Payload format (json, yaml, csv).
    pub format: Format,

    /// Inline payload or file path.
    pub source: RedirectSource,
}

/// Observability configuration.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable the Prometheus endpoint.
    pub metrics_enabled: bool,

    /// Prometheus endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}
