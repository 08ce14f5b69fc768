//! HTTP client configured from `GeneratorConfig`.
//!
//! Wraps `reqwest::Client` with the request and connect timeouts the run
//! depends on. There is no retry: an expired timeout aborts the run.

use std::time::Duration;

use crate::config::GeneratorConfig;
use crate::errors::{GenError, Result};

/// A configured HTTP client. Cloning is cheap, `reqwest::Client` is `Arc`-ed.
#[derive(Clone)]
pub struct HttpClient {
    inner: reqwest::Client,
}

impl HttpClient {
    /// Build a new `HttpClient` configured from the given `GeneratorConfig`.
    pub fn new(config: &GeneratorConfig) -> Result<Self> {
        Ok(Self {
            inner: Self::build_client(config)?,
        })
    }

    /// Build an `HttpClient` using `GeneratorConfig::default()`.
    pub fn from_defaults() -> Result<Self> {
        Self::new(&GeneratorConfig::default())
    }

    pub fn get_client(&self) -> &reqwest::Client {
        &self.inner
    }

    fn build_client(config: &GeneratorConfig) -> Result<reqwest::Client> {
        if config.timeout == 0 {
            return Err(GenError::Config("timeout must be at least 1 second".into()));
        }
        reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout as u64))
            .connect_timeout(Duration::from_secs(config.connect_timeout as u64))
            .user_agent(config.user_agent.clone())
            .build()
            .map_err(GenError::Http)
    }
}
