//! Console configuration.
//!
//! Defaults are embedded from `core/config/console.toml`; a different file can
//! be loaded with [`load_config`] when running natively.

use std::path::Path;

use anyhow::Result;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConsoleError;

const DEFAULT_CONFIG: &str = include_str!("../config/console.toml");

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    pub api_base_path: String,
    pub marketer_id: String,
    pub poll_interval_secs: u32,
    pub recent_activity_limit: usize,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        default_config()
    }
}

impl ConsoleConfig {
    /// Join a page origin (e.g. `http://localhost:8080`) with the configured
    /// API base path. The result always ends with a slash so relative joins
    /// keep the base path.
    pub fn api_base_url(&self, origin: &str) -> Result<Url, ConsoleError> {
        let origin = Url::parse(origin)
            .map_err(|e| ConsoleError::Config(format!("Invalid origin '{}': {}", origin, e)))?;
        let mut path = self.api_base_path.trim_matches('/').to_string();
        if !path.is_empty() {
            path.push('/');
        }
        origin
            .join(&format!("/{}", path))
            .map_err(|e| ConsoleError::Config(format!("Invalid API base path '{}': {}", self.api_base_path, e)))
    }
}

/// Load configuration from a TOML file at the given path.
pub fn load_config(path: &Path) -> Result<ConsoleConfig> {
    let content = std::fs::read_to_string(path)?;
    let config = parse_config(&content)?;
    Ok(config)
}

/// Parse configuration from a TOML string.
pub fn parse_config(content: &str) -> Result<ConsoleConfig, ConsoleError> {
    toml::from_str(content).map_err(|e| ConsoleError::Config(e.to_string()))
}

/// The configuration embedded in the binary.
///
/// # Panics
/// Panics if the embedded TOML is invalid (a build-time bug).
pub fn default_config() -> ConsoleConfig {
    parse_config(DEFAULT_CONFIG).expect("embedded console.toml must be valid TOML")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_loads() {
        let config = default_config();
        assert_eq!(config.api_base_path, "/api");
        assert_eq!(config.marketer_id, "tester");
        assert!(config.poll_interval_secs > 0);
    }

    #[test]
    fn test_api_base_url_joins_origin() {
        let config = default_config();
        let url = config.api_base_url("http://localhost:8080").unwrap();
        assert_eq!(url.as_str(), "http://localhost:8080/api/");
    }

    #[test]
    fn test_api_base_url_handles_trailing_slashes() {
        let mut config = default_config();
        config.api_base_path = "/backend/v1/".to_string();
        let url = config.api_base_url("https://console.example.com/").unwrap();
        assert_eq!(url.as_str(), "https://console.example.com/backend/v1/");
    }

    #[test]
    fn test_empty_base_path_uses_origin_root() {
        let mut config = default_config();
        config.api_base_path = String::new();
        let url = config.api_base_url("http://localhost:3000").unwrap();
        assert_eq!(url.as_str(), "http://localhost:3000/");
    }

    #[test]
    fn test_invalid_origin_is_config_error() {
        let config = default_config();
        let err = config.api_base_url("not a url").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "api_base_path = \"/v2\"\nmarketer_id = \"kim\"\npoll_interval_secs = 10\nrecent_activity_limit = 3"
        )
        .unwrap();

        let config = load_config(file.path()).unwrap();
        assert_eq!(config.api_base_path, "/v2");
        assert_eq!(config.marketer_id, "kim");
        assert_eq!(config.poll_interval_secs, 10);
        assert_eq!(config.recent_activity_limit, 3);
    }

    #[test]
    fn test_load_config_reports_bad_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "api_base_path = \"/v2\"").unwrap();

        let err = load_config(file.path()).unwrap_err();
        assert!(err.to_string().starts_with("Config error:"), "got: {}", err);
    }

    #[test]
    fn test_parse_config_rejects_missing_fields() {
        let err = parse_config("api_base_path = \"/api\"").unwrap_err();
        assert!(matches!(err, ConsoleError::Config(_)));
    }
}
