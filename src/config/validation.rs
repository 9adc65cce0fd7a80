//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde and clap handle syntax)
//! - Require a redirect source and a bind address
//! - Check the log level and metrics address parse
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: &ServerConfig → Result<(), Vec<ValidationError>>
//! - Runs after flags are merged, before anything is decoded or bound

use std::net::SocketAddr;

use thiserror::Error;
use tracing_subscriber::filter::LevelFilter;

use crate::config::schema::ServerConfig;

/// A single semantic problem with the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("redirect source must be set, use '-u' or [redirects.source]")]
    MissingSource,

    #[error("bind address must be set, use '--ip'")]
    MissingAddress,

    #[error("invalid metrics address '{0}'")]
    InvalidMetricsAddress(String),

    #[error("unknown log level '{0}'")]
    InvalidLogLevel(String),
}

pub fn validate_config(config: &ServerConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.redirects.source.is_empty() {
        errors.push(ValidationError::MissingSource);
    }

    if config.listener.address.trim().is_empty() {
        errors.push(ValidationError::MissingAddress);
    }

    let observability = &config.observability;
    if observability.log_level.parse::<LevelFilter>().is_err() {
        errors.push(ValidationError::InvalidLogLevel(observability.log_level.clone()));
    }

    if observability.metrics_enabled && observability.metrics_address.parse::<SocketAddr>().is_err() {
        errors.push(ValidationError::InvalidMetricsAddress(
            observability.metrics_address.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::RedirectSource;

    fn valid() -> ServerConfig {
        let mut config = ServerConfig::default();
        config.redirects.source = RedirectSource::Inline("[]".to_string());
        config
    }

    #[test]
    fn test_valid_config() {
        assert_eq!(validate_config(&valid()), Ok(()));
    }

    #[test]
    fn test_missing_source() {
        let config = ServerConfig::default();
        assert_eq!(validate_config(&config), Err(vec![ValidationError::MissingSource]));
    }

    #[test]
    fn test_reports_every_error() {
        let mut config = ServerConfig::default();
        config.listener.address = " ".to_string();
        config.observability.log_level = "loud".to_string();
        config.observability.metrics_enabled = true;
        config.observability.metrics_address = "nowhere".to_string();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(
            errors,
            vec![
                ValidationError::MissingSource,
                ValidationError::MissingAddress,
                ValidationError::InvalidLogLevel("loud".to_string()),
                ValidationError::InvalidMetricsAddress("nowhere".to_string()),
            ]
        );
    }

    #[test]
    fn test_metrics_address_ignored_when_disabled() {
        let mut config = valid();
        config.observability.metrics_address = "nowhere".to_string();
        assert!(validate_config(&config).is_ok());
    }
}
