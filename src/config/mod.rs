//! Configuration loading and management

use crate::core::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable overriding [`ClientConfig::base_url`]
pub const ENV_BASE_URL: &str = "COURIER_API_BASE_URL";
/// Environment variable overriding [`ClientConfig::timeout_ms`]
pub const ENV_TIMEOUT_MS: &str = "COURIER_API_TIMEOUT_MS";
/// Environment variable overriding [`LoggingConfig::filter`]
pub const ENV_LOG: &str = "COURIER_LOG";

/// Configuration of the REST API client
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Base URL every endpoint path is appended to
    pub base_url: String,

    /// Per-request timeout in milliseconds
    pub timeout_ms: u64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_string(),
            timeout_ms: 10_000,
        }
    }
}

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, e.g. `info,courier=debug`
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
        }
    }
}

/// Complete configuration of the dashboard data layer
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeskConfig {
    pub api: ClientConfig,
    pub logging: LoggingConfig,
}

impl DeskConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: &str) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.to_string(),
        })?;
        Self::from_yaml_str(&content)
    }

    /// Load configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Default configuration: local backend on port 3001, 10 s timeout
    pub fn default_config() -> Self {
        Self::default()
    }

    /// Apply overrides from the process environment
    pub fn with_env_overrides(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|key| std::env::var(key).ok())
    }

    /// Apply overrides from an arbitrary lookup (the environment in production)
    pub fn with_overrides_from(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(url) = lookup(ENV_BASE_URL) {
            self.api.base_url = url;
        }
        if let Some(raw) = lookup(ENV_TIMEOUT_MS) {
            self.api.timeout_ms = raw.trim().parse().map_err(|_| ConfigError::InvalidValue {
                field: "api.timeout_ms".to_string(),
                message: format!("'{}' is not a number of milliseconds", raw),
            })?;
        }
        if let Some(filter) = lookup(ENV_LOG) {
            self.logging.filter = filter;
        }
        self.validate()?;
        Ok(self)
    }

    /// Check that the base URL is absolute http(s) and the timeout non-zero
    pub fn validate(&self) -> Result<(), ConfigError> {
        let url = reqwest::Url::parse(&self.api.base_url).map_err(|e| {
            ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                message: e.to_string(),
            }
        })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".to_string(),
                message: format!("unsupported scheme '{}'", url.scheme()),
            });
        }
        if self.api.timeout_ms == 0 {
            return Err(ConfigError::InvalidValue {
                field: "api.timeout_ms".to_string(),
                message: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_default_config() {
        let config = DeskConfig::default_config();

        assert_eq!(config.api.base_url, "http://localhost:3001");
        assert_eq!(config.api.timeout(), Duration::from_secs(10));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_serialization() {
        let config = DeskConfig::default_config();
        let yaml = serde_yaml::to_string(&config).unwrap();

        let parsed = DeskConfig::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed = DeskConfig::from_yaml_str("api:\n  timeout_ms: 2500\n").unwrap();
        assert_eq!(parsed.api.timeout_ms, 2500);
        assert_eq!(parsed.api.base_url, "http://localhost:3001");
        assert_eq!(parsed.logging.filter, "info");
    }

    #[test]
    fn test_overrides() {
        let env: HashMap<&str, &str> = [
            (ENV_BASE_URL, "https://ops.example.com/api"),
            (ENV_TIMEOUT_MS, "500"),
        ]
        .into_iter()
        .collect();

        let config = DeskConfig::default_config()
            .with_overrides_from(|key| env.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.api.base_url, "https://ops.example.com/api");
        assert_eq!(config.api.timeout_ms, 500);
        assert_eq!(config.logging.filter, "info");
    }

    #[test]
    fn test_bad_timeout_override() {
        let err = DeskConfig::default_config()
            .with_overrides_from(|key| (key == ENV_TIMEOUT_MS).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidValue { .. }));
    }

    #[test]
    fn test_invalid_values_rejected() {
        assert!(DeskConfig::from_yaml_str("api:\n  timeout_ms: 0\n").is_err());
        assert!(DeskConfig::from_yaml_str("api:\n  base_url: not a url\n").is_err());
        assert!(DeskConfig::from_yaml_str("api:\n  base_url: ftp://host\n").is_err());
    }
}
