//! Configuration loading from disk and the process environment.

use std::env;
use std::fs;
use std::path::Path;

use crate::config::schema::CollectorConfig;
use crate::config::validation::{validate_config, ValidationError};

/// Path to an optional TOML config file.
pub const CONFIG_PATH_VAR: &str = "COLLECTOR_CONFIG";
/// Downstream URL override.
pub const DOWNSTREAM_URL_VAR: &str = "DATA_PROCESSOR_URL";
/// Downstream timeout override, in milliseconds.
pub const DOWNSTREAM_TIMEOUT_VAR: &str = "DOWNSTREAM_TIMEOUT_MS";
/// Listening port override.
pub const PORT_VAR: &str = "PORT";

/// Error type for configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    Env { var: &'static str, value: String },
    Validation(Vec<ValidationError>),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "IO error: {}", e),
            ConfigError::Parse(e) => write!(f, "Parse error: {}", e),
            ConfigError::Env { var, value } => {
                write!(f, "Invalid value for {}: '{}'", var, value)
            }
            ConfigError::Validation(errors) => {
                write!(f, "Validation failed: ")?;
                for (i, err) in errors.iter().enumerate() {
                    if i > 0 { write!(f, ", ")?; }
                    write!(f, "{}", err)?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Parse a TOML file into a configuration without validating it.
pub fn read_config_file(path: &Path) -> Result<CollectorConfig, ConfigError> {
    let content = fs::read_to_string(path).map_err(ConfigError::Io)?;
    toml::from_str(&content).map_err(ConfigError::Parse)
}

/// Load and validate configuration from a TOML file.
pub fn load_config(path: &Path) -> Result<CollectorConfig, ConfigError> {
    let config = read_config_file(path)?;
    validate_config(&config).map_err(ConfigError::Validation)?;
    Ok(config)
}

/// Apply environment overrides on top of `config`.
///
/// `lookup` abstracts `std::env::var` so precedence can be tested without
/// touching the process environment.
pub fn apply_env_overrides<F>(config: &mut CollectorConfig, lookup: F) -> Result<(), ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup(DOWNSTREAM_URL_VAR) {
        config.downstream.url = url;
    }

    if let Some(port) = lookup(PORT_VAR) {
        config.listener.port = port.trim().parse().map_err(|_| ConfigError::Env {
            var: PORT_VAR,
            value: port,
        })?;
    }

    if let Some(timeout) = lookup(DOWNSTREAM_TIMEOUT_VAR) {
        config.downstream.timeout_ms = timeout.trim().parse().map_err(|_| ConfigError::Env {
            var: DOWNSTREAM_TIMEOUT_VAR,
            value: timeout,
        })?;
    }

    Ok(())
}

/// Resolve the startup configuration: defaults, then the optional file named
/// by `COLLECTOR_CONFIG`, then environment overrides. The result is validated.
pub fn load_from_env() -> Result<CollectorConfig, ConfigError> {
    let lookup = |key: &str| env::var(key).ok().filter(|v| !v.is_empty());

    let mut config = match lookup(CONFIG_PATH_VAR) {
        Some(path) => read_config_file(Path::new(&path))?,
        None => CollectorConfig::default(),
    };

    apply_env_overrides(&mut config, lookup)?;
    validate_config(&config).map_err(ConfigError::Validation)?;

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_env_overrides_defaults() {
        let mut config = CollectorConfig::default();
        apply_env_overrides(
            &mut config,
            lookup_from(&[
                (DOWNSTREAM_URL_VAR, "http://localhost:3001/api/data"),
                (PORT_VAR, "8080"),
                (DOWNSTREAM_TIMEOUT_VAR, "2500"),
            ]),
        )
        .unwrap();

        assert_eq!(config.downstream.url, "http://localhost:3001/api/data");
        assert_eq!(config.listener.port, 8080);
        assert_eq!(config.downstream.timeout_ms, 2500);
    }

    #[test]
    fn test_no_env_leaves_config_untouched() {
        let mut config = CollectorConfig::default();
        apply_env_overrides(&mut config, lookup_from(&[])).unwrap();
        assert_eq!(config.listener.port, 5001);
    }

    #[test]
    fn test_invalid_port_is_reported() {
        let mut config = CollectorConfig::default();
        let err = apply_env_overrides(&mut config, lookup_from(&[(PORT_VAR, "http")]))
            .unwrap_err();
        assert_eq!(err.to_string(), "Invalid value for PORT: 'http'");
    }

    #[test]
    fn test_load_config_from_file() {
        let path = std::env::temp_dir().join(format!(
            "sensor-collector-{}.toml",
            uuid::Uuid::new_v4()
        ));
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "[listener]\nport = 6000\n\n[downstream]\ntimeout_ms = 500").unwrap();

        let config = load_config(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(config.listener.port, 6000);
        assert_eq!(config.downstream.timeout_ms, 500);
    }

    #[test]
    fn test_load_config_rejects_invalid_values() {
        let path = std::env::temp_dir().join(format!(
            "sensor-collector-{}.toml",
            uuid::Uuid::new_v4()
        ));
        fs::write(&path, "[downstream]\nurl = \"processor\"\n").unwrap();

        let result = load_config(&path);
        fs::remove_file(&path).unwrap();

        assert!(matches!(result, Err(ConfigError::Validation(_))));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let result = load_config(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(ConfigError::Io(_))));
    }
}
