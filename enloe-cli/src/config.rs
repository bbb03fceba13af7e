//! Configuration module
//!
//! Handles CLI configuration: backend URL, session file location, upload
//! bucket and request timeout. Values come from flags, then environment
//! variables (a `.env` file is honoured), then defaults.

use anyhow::{Result, bail};
use std::path::PathBuf;
use std::time::Duration;

use enloe_client::EnloeClient;

/// CLI configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the backend
    pub base_url: String,

    /// Where the signed-in session is persisted between invocations
    pub session_file: PathBuf,

    /// Storage bucket for image uploads
    pub bucket: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl Config {
    /// Build a configuration from raw flag/env values; surrounding whitespace
    /// is dropped so validation and requests see the same URL
    pub fn new(
        base_url: &str,
        session_file: PathBuf,
        bucket: &str,
        timeout: Duration,
    ) -> Self {
        Self {
            base_url: base_url.trim().to_string(),
            session_file,
            bucket: bucket.trim().to_string(),
            timeout,
        }
    }

    /// Rejects settings no request could succeed with
    pub fn validate(&self) -> Result<()> {
        let url = &self.base_url;
        if url.is_empty() {
            bail!("Backend URL cannot be empty");
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            bail!("Backend URL must start with http:// or https://: {}", url);
        }
        if self.bucket.is_empty() {
            bail!("Storage bucket cannot be empty");
        }
        if self.timeout.is_zero() {
            bail!("Request timeout must be greater than zero");
        }
        Ok(())
    }

    /// Build a backend client honouring the timeout
    pub fn client(&self) -> Result<EnloeClient> {
        let http = reqwest::Client::builder().timeout(self.timeout).build()?;
        Ok(EnloeClient::with_client(&self.base_url, http))
    }
}

/// Default session file: `$HOME/.enloe/session.json`, or relative to the
/// working directory when `HOME` is unset
pub fn default_session_file() -> PathBuf {
    std::env::var_os("HOME")
        .map(PathBuf::from)
        .unwrap_or_default()
        .join(".enloe")
        .join("session.json")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base_url: &str) -> Config {
        Config::new(
            base_url,
            PathBuf::from("session.json"),
            "chat-images",
            Duration::from_secs(30),
        )
    }

    #[test]
    fn test_validate_accepts_http_urls() {
        assert!(config("http://localhost:7130").validate().is_ok());
        assert!(config("https://chat.example.com").validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_urls() {
        assert!(config("").validate().is_err());
        assert!(config("localhost:7130").validate().is_err());
    }

    #[test]
    fn test_padded_url_is_trimmed_for_requests_too() {
        let config = config("  http://localhost:7130/ ");
        assert!(config.validate().is_ok());
        assert_eq!(config.base_url, "http://localhost:7130/");
        assert_eq!(config.client().unwrap().base_url(), "http://localhost:7130");
    }

    #[test]
    fn test_blank_bucket_rejected() {
        let config = Config::new(
            "http://localhost:7130",
            PathBuf::from("session.json"),
            "   ",
            Duration::from_secs(30),
        );
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let mut config = config("http://localhost:7130");
        config.timeout = Duration::ZERO;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_session_file_name() {
        assert!(default_session_file().ends_with(".enloe/session.json"));
    }
}
