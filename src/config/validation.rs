//! Configuration validation.
//!
//! Serde handles syntax; this module checks the values make sense before the
//! server is built. All errors are collected, not just the first.

use std::fmt;
use std::net::SocketAddr;

use crate::config::schema::CollectorConfig;

/// A single semantic problem with a loaded configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Validate a configuration, returning every problem found.
pub fn validate_config(config: &CollectorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.listener.host.trim().is_empty() {
        errors.push(ValidationError::new("listener.host", "must not be empty"));
    }
    if config.listener.request_timeout_secs == 0 {
        errors.push(ValidationError::new(
            "listener.request_timeout_secs",
            "must be greater than zero",
        ));
    }

    match url::Url::parse(&config.downstream.url) {
        Ok(url) if url.scheme() == "http" || url.scheme() == "https" => {}
        Ok(url) => errors.push(ValidationError::new(
            "downstream.url",
            format!("unsupported scheme '{}'", url.scheme()),
        )),
        Err(e) => errors.push(ValidationError::new(
            "downstream.url",
            format!("invalid URL '{}': {}", config.downstream.url, e),
        )),
    }
    if config.downstream.timeout_ms == 0 {
        errors.push(ValidationError::new(
            "downstream.timeout_ms",
            "must be greater than zero",
        ));
    }

    let request_timeout_ms = config.listener.request_timeout_secs.saturating_mul(1000);
    if request_timeout_ms > 0
        && config.downstream.timeout_ms > 0
        && config.downstream.timeout_ms >= request_timeout_ms
    {
        errors.push(ValidationError::new(
            "downstream.timeout_ms",
            format!(
                "must be below listener.request_timeout_secs ({} ms), got {} ms",
                request_timeout_ms, config.downstream.timeout_ms
            ),
        ));
    }

    if config.observability.metrics_enabled
        && config.observability.metrics_address.parse::<SocketAddr>().is_err()
    {
        errors.push(ValidationError::new(
            "observability.metrics_address",
            format!(
                "'{}' is not a socket address",
                config.observability.metrics_address
            ),
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

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&CollectorConfig::default()).is_ok());
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = CollectorConfig::default();
        config.downstream.url = "not a url".into();
        config.downstream.timeout_ms = 0;
        config.listener.request_timeout_secs = 0;

        let errors = validate_config(&config).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(
            fields,
            vec![
                "listener.request_timeout_secs",
                "downstream.url",
                "downstream.timeout_ms"
            ]
        );
    }

    #[test]
    fn test_rejects_non_http_scheme() {
        let mut config = CollectorConfig::default();
        config.downstream.url = "ftp://processor/api/data".into();

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("unsupported scheme 'ftp'"));
    }

    #[test]
    fn test_downstream_timeout_must_fit_inside_request_timeout() {
        let mut config = CollectorConfig::default();
        config.listener.request_timeout_secs = 30;
        config.downstream.timeout_ms = 40_000;

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "downstream.timeout_ms");

        config.downstream.timeout_ms = 30_000;
        assert!(validate_config(&config).is_err());

        config.downstream.timeout_ms = 29_999;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_metrics_address_checked_only_when_enabled() {
        let mut config = CollectorConfig::default();
        config.observability.metrics_address = "nowhere".into();
        assert!(validate_config(&config).is_ok());

        config.observability.metrics_enabled = true;
        assert!(validate_config(&config).is_err());
    }
}
