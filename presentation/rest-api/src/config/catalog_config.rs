use std::time::Duration;

use url::Url;

use http_catalog::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};

use super::error::ConfigError;

/// Where the remote product catalog lives and how long a request may take.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    pub base_url: Url,
    pub timeout: Duration,
}

impl CatalogConfig {
    /// Environment variables:
    /// - CATALOG_BASE_URL: absolute http(s) URL (default: "https://dummyjson.com/")
    /// - CATALOG_TIMEOUT_SECS: request timeout in seconds (default: 30)
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup("CATALOG_BASE_URL").unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = Url::parse(raw_url.trim())
            .map_err(|e| ConfigError::InvalidCatalogBaseUrl(format!("{}: {}", raw_url, e)))?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidCatalogBaseUrl(raw_url));
        }

        let timeout = match lookup("CATALOG_TIMEOUT_SECS") {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => return Err(ConfigError::InvalidCatalogTimeout(raw)),
            },
            None => DEFAULT_TIMEOUT,
        };

        Ok(Self { base_url, timeout })
    }
}
