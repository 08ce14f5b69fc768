use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::codegen::Layout;
use crate::countries::fetch::DEFAULT_ENDPOINT;
use crate::errors::{GenError, Result};

/// Settings for a generator run.
///
/// Every field has a default, so a config file only needs the keys it
/// changes. Command-line flags are applied on top of whatever is loaded here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct GeneratorConfig {
    pub endpoint: String,
    /// Whole-request timeout in seconds.
    pub timeout: u32,
    #[serde(rename = "connectTimeout")]
    pub connect_timeout: u32,
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    pub layout: Layout,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.into(),
            timeout: 30,
            connect_timeout: 10,
            user_agent: concat!("countrygen/", env!("CARGO_PKG_VERSION")).into(),
            layout: Layout::LazyStatic,
        }
    }
}

impl GeneratorConfig {
    /// Load the config from a JSON file, or return the defaults when `path`
    /// is `None`. A given path that cannot be read or parsed is an error.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let content = std::fs::read_to_string(path).map_err(|e| {
            GenError::Config(format!("cannot read {}: {}", path.display(), e))
        })?;
        let config: Self = crate::json::deserialize(&content).map_err(|e| {
            GenError::Config(format!("cannot parse {}: {}", path.display(), e))
        })?;

        tracing::debug!(path = %path.display(), endpoint = %config.endpoint, "Loaded config");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_default_values() {
        let config = GeneratorConfig::default();
        assert_eq!(
            config.endpoint,
            "https://restcountries.com/v3.1/all?fields=name,altSpellings,cca2"
        );
        assert_eq!(config.timeout, 30);
        assert_eq!(config.connect_timeout, 10);
        assert!(config.user_agent.starts_with("countrygen/"));
        assert_eq!(config.layout, Layout::LazyStatic);
    }

    #[test]
    fn test_load_none_returns_defaults() {
        let config = GeneratorConfig::load(None).unwrap();
        assert_eq!(config, GeneratorConfig::default());
    }

    #[test]
    fn test_load_partial_file() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countrygen.json");
        std::fs::write(&path, r#"{"timeout": 5, "layout": "factory"}"#).unwrap();

        let config = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.timeout, 5);
        assert_eq!(config.layout, Layout::Factory);
        assert_eq!(config.connect_timeout, 10);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_load_camel_case_keys() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("countrygen.json");
        std::fs::write(
            &path,
            r#"{"connectTimeout": 3, "userAgent": "build-bot", "endpoint": "http://localhost:9000/all"}"#,
        )
        .unwrap();

        let config = GeneratorConfig::load(Some(&path)).unwrap();
        assert_eq!(config.connect_timeout, 3);
        assert_eq!(config.user_agent, "build-bot");
        assert_eq!(config.endpoint, "http://localhost:9000/all");
    }

    #[test]
    fn test_load_missing_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let err = GeneratorConfig::load(Some(&tmp.path().join("nope.json"))).unwrap_err();
        assert!(matches!(err, GenError::Config(_)));
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("bad.json");
        std::fs::write(&path, r#"{"layout": "sideways"}"#).unwrap();
        let err = GeneratorConfig::load(Some(&path)).unwrap_err();
        match err {
            GenError::Config(msg) => assert!(msg.contains("bad.json")),
            e => panic!("Expected GenError::Config, got {:?}", e),
        }
    }
}
