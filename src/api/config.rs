//! Environment-based configuration for the recruiting API client.
//!
//! Values are read once from the process environment (after `.env` has been
//! loaded by the caller) and turned into a `ClientConfig`. Programmatic callers
//! and tests build `ClientConfig` directly instead.

use std::{env, sync::LazyLock, time::Duration};

use anyhow::{Result, anyhow};

use crate::api::error::ApiError;

pub const DEFAULT_API_PREFIX: &str = "/api";

// Load configuration from environment variables
pub static RECRUIT_API_BASE_URL: LazyLock<Result<String>> = LazyLock::new(|| {
    env::var("RECRUIT_API_BASE_URL").map_err(|e| anyhow!("RECRUIT_API_BASE_URL must be set: {e}"))
});

pub static RECRUIT_API_PREFIX: LazyLock<String> = LazyLock::new(|| {
    env::var("RECRUIT_API_PREFIX").unwrap_or_else(|_| DEFAULT_API_PREFIX.to_string())
});

pub static RECRUIT_API_TIMEOUT_SECS: LazyLock<Result<Option<u64>>> =
    LazyLock::new(|| match env::var("RECRUIT_API_TIMEOUT_SECS") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .map_err(|e| anyhow!("RECRUIT_API_TIMEOUT_SECS must be a whole number of seconds: {e}")),
        Err(_) => Ok(None),
    });

/// Where the backend lives and how the transport should behave.
///
/// The full URL of an endpoint is `{base_url}{api_prefix}{endpoint}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub base_url: String,
    pub api_prefix: String,
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            timeout: None,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: &str) -> Self {
        self.api_prefix = prefix.to_string();
        self
    }

    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Builds the configuration from `RECRUIT_API_*` environment variables.
    ///
    /// # Errors
    /// * `MissingConfig` - `RECRUIT_API_BASE_URL` is unset or the timeout is not a number
    pub fn from_env() -> Result<Self, ApiError> {
        let base_url = RECRUIT_API_BASE_URL
            .as_ref()
            .map_err(|e| ApiError::MissingConfig(e.to_string()))?;
        let timeout = RECRUIT_API_TIMEOUT_SECS
            .as_ref()
            .map_err(|e| ApiError::MissingConfig(e.to_string()))?;

        let mut config = Self::new(base_url).with_prefix(RECRUIT_API_PREFIX.as_str());
        if let Some(secs) = timeout {
            config = config.with_timeout(Duration::from_secs(*secs));
        }
        Ok(config)
    }

    /// The fixed base path every endpoint is appended to.
    pub fn api_root(&self) -> String {
        format!("{}{}", self.base_url, self.api_prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trailing_slash_is_stripped() {
        let config = ClientConfig::new("http://localhost:5000/");
        assert_eq!(config.api_root(), "http://localhost:5000/api");
    }

    #[test]
    fn prefix_and_timeout_are_overridable() {
        let config = ClientConfig::new("http://hr.internal")
            .with_prefix("/v2")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_root(), "http://hr.internal/v2");
        assert_eq!(config.timeout, Some(Duration::from_secs(5)));
    }
}
