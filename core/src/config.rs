//! Client configuration.
//!
//! # Design
//! `ClientConfig` is built once and then only read. The client wraps it in
//! an `Arc`, so every clone of a client shares the same value and no call
//! can change it.

use std::fmt;
use std::time::Duration;

use crate::error::ApiError;

/// Production endpoint of the CertCentral v2 API.
pub const DEFAULT_BASE_URL: &str = "https://www.digicert.com/services/v2/";

/// Header that carries the API key on every request.
pub const AUTH_HEADER: &str = "X-DC-DEVKEY";

/// Environment variable holding the API key.
pub const API_KEY_ENV: &str = "DC_KEY";

/// Environment variable overriding the base URL.
pub const BASE_URL_ENV: &str = "DC_BASE_URL";

/// Endpoint, credential and defaults shared by every call.
#[derive(Clone)]
pub struct ClientConfig {
    base_url: String,
    api_key: String,
    default_headers: Vec<(String, String)>,
    timeout: Option<Duration>,
}

impl ClientConfig {
    /// Fails with `MissingApiKey` when `api_key` is empty or blank.
    pub fn new(api_key: impl Into<String>) -> Result<Self, ApiError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ApiError::MissingApiKey);
        }
        Ok(Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key,
            default_headers: vec![(
                "User-Agent".to_string(),
                concat!("certcentral-core/", env!("CARGO_PKG_VERSION")).to_string(),
            )],
            timeout: None,
        })
    }

    /// Read `DC_KEY` and, if set, `DC_BASE_URL`.
    pub fn from_env() -> Result<Self, ApiError> {
        let key = std::env::var(API_KEY_ENV).unwrap_or_default();
        let config = Self::new(key)?;
        Ok(match std::env::var(BASE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => config.with_base_url(&url),
            _ => config,
        })
    }

    pub fn with_base_url(mut self, base_url: &str) -> Self {
        self.base_url = format!("{}/", base_url.trim().trim_end_matches('/'));
        self
    }

    /// Add a header sent on every request unless a call overrides it.
    pub fn with_default_header(mut self, name: &str, value: &str) -> Self {
        crate::http::set_header(&mut self.default_headers, name, value);
        self
    }

    /// Upper bound on a whole request, connect through body read.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn default_headers(&self) -> &[(String, String)] {
        &self.default_headers
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Base URL joined with `path`, leading and trailing slashes of `path`
    /// removed. The path is used verbatim otherwise.
    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_matches('/'))
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &"<redacted>")
            .field("default_headers", &self.default_headers)
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_key_is_rejected() {
        assert!(matches!(ClientConfig::new(""), Err(ApiError::MissingApiKey)));
        assert!(matches!(ClientConfig::new("  "), Err(ApiError::MissingApiKey)));
    }

    #[test]
    fn defaults_to_production_endpoint() {
        let config = ClientConfig::new("key").unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), "key");
        assert!(config.timeout().is_none());
    }

    #[test]
    fn url_joins_base_and_trimmed_path() {
        let config = ClientConfig::new("key")
            .unwrap()
            .with_base_url("https://api.example.com/v2/");
        assert_eq!(
            config.url_for("/order/certificate/123"),
            "https://api.example.com/v2/order/certificate/123"
        );
        assert_eq!(config.url_for("key/"), "https://api.example.com/v2/key");
    }

    #[test]
    fn base_url_gains_exactly_one_trailing_slash() {
        let config = ClientConfig::new("key")
            .unwrap()
            .with_base_url("http://localhost:3000/services/v2");
        assert_eq!(config.base_url(), "http://localhost:3000/services/v2/");

        let config = config.with_base_url("http://localhost:3000/services/v2//");
        assert_eq!(config.base_url(), "http://localhost:3000/services/v2/");
    }

    #[test]
    fn query_strings_pass_through_untouched() {
        let config = ClientConfig::new("key").unwrap();
        assert_eq!(
            config.url_for("/domain?container_id=5"),
            "https://www.digicert.com/services/v2/domain?container_id=5"
        );
    }

    #[test]
    fn debug_output_redacts_the_key() {
        let config = ClientConfig::new("super-secret").unwrap();
        let rendered = format!("{config:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("<redacted>"));
    }

    #[test]
    fn default_header_replaces_same_name() {
        let config = ClientConfig::new("key")
            .unwrap()
            .with_default_header("user-agent", "custom/1.0");
        assert_eq!(
            config.default_headers(),
            &[("user-agent".to_string(), "custom/1.0".to_string())]
        );
    }
}
