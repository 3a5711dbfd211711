//! Advisory configuration.
//!
//! Config file: ~/.config/quakelens/config.toml (override the path with
//! QUAKELENS_CONFIG). The uplink credential is injected at startup from
//! the file or QUAKELENS_API_KEY; it is redacted from Debug output and
//! must never reach the logs.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// Default cloud generation endpoint
pub const DEFAULT_ENDPOINT: &str = "https://generativelanguage.googleapis.com";

/// Default generation model
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";

/// Default uplink timeout (seconds)
pub const DEFAULT_TIMEOUT_SECS: u64 = 12;

/// Default offline-safeguard delay (milliseconds), standing in for
/// local inference latency
pub const DEFAULT_OFFLINE_DELAY_MS: u64 = 900;

/// Configuration for the advisory dispatcher and its uplink
#[derive(Clone, Serialize, Deserialize)]
pub struct AdvisoryConfig {
    /// Base URL of the generation service
    #[serde(default = "default_endpoint")]
    pub endpoint: String,

    /// Model identifier appended to the endpoint path
    #[serde(default = "default_model")]
    pub model: String,

    /// Opaque uplink credential; never logged
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,

    /// Bound on the remote call before the offline safeguard engages
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// Fixed delay applied on the offline path
    #[serde(default = "default_offline_delay_ms")]
    pub offline_delay_ms: u64,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

fn default_offline_delay_ms() -> u64 {
    DEFAULT_OFFLINE_DELAY_MS
}

impl Default for AdvisoryConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            model: default_model(),
            api_key: None,
            timeout_secs: default_timeout_secs(),
            offline_delay_ms: default_offline_delay_ms(),
        }
    }
}

impl std::fmt::Debug for AdvisoryConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AdvisoryConfig")
            .field("endpoint", &self.endpoint)
            .field("model", &self.model)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("offline_delay_ms", &self.offline_delay_ms)
            .finish()
    }
}

impl AdvisoryConfig {
    /// Resolve the config file path
    ///
    /// Priority:
    /// 1. $QUAKELENS_CONFIG environment variable (explicit override)
    /// 2. ~/.config/quakelens/config.toml
    pub fn config_path() -> Result<PathBuf> {
        if let Ok(path) = std::env::var("QUAKELENS_CONFIG") {
            return Ok(PathBuf::from(path));
        }
        let home = std::env::var("HOME").context("HOME is not set")?;
        Ok(PathBuf::from(home).join(".config/quakelens/config.toml"))
    }

    /// Load configuration, falling back to defaults when no file exists.
    ///
    /// QUAKELENS_API_KEY always overrides the file value.
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Ok(path) if path.exists() => {
                let contents = fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                toml::from_str(&contents)
                    .with_context(|| format!("Failed to parse {}", path.display()))?
            }
            _ => Self::default(),
        };

        if let Ok(key) = std::env::var("QUAKELENS_API_KEY") {
            if !key.is_empty() {
                config.api_key = Some(key);
            }
        }

        Ok(config)
    }

    /// Uplink timeout as a Duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Offline-safeguard delay as a Duration
    pub fn offline_delay(&self) -> Duration {
        Duration::from_millis(self.offline_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = AdvisoryConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.model, DEFAULT_MODEL);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
        assert_eq!(config.offline_delay_ms, DEFAULT_OFFLINE_DELAY_MS);
    }

    #[test]
    fn test_config_partial_toml_fills_defaults() {
        let config: AdvisoryConfig = toml::from_str("model = \"gemini-1.5-pro\"").unwrap();
        assert_eq!(config.model, "gemini-1.5-pro");
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.timeout_secs, DEFAULT_TIMEOUT_SECS);
    }

    #[test]
    fn test_config_roundtrip() {
        let original = AdvisoryConfig {
            endpoint: "http://localhost:9090".to_string(),
            model: "test-model".to_string(),
            api_key: Some("secret".to_string()),
            timeout_secs: 3,
            offline_delay_ms: 10,
        };
        let toml = toml::to_string(&original).unwrap();
        let parsed: AdvisoryConfig = toml::from_str(&toml).unwrap();
        assert_eq!(parsed.endpoint, original.endpoint);
        assert_eq!(parsed.api_key, original.api_key);
        assert_eq!(parsed.offline_delay_ms, 10);
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = AdvisoryConfig {
            api_key: Some("very-secret-key".to_string()),
            ..Default::default()
        };
        let debug = format!("{config:?}");
        assert!(!debug.contains("very-secret-key"));
        assert!(debug.contains("<redacted>"));
    }
}
