//! Client configuration
//!
//! Defaults match a service running locally. Environment variables
//! override the defaults; CLI flags override both.

use crate::error::{Error, Result};
use crate::types::Page;
use std::env;
use std::time::Duration;
use url::Url;

/// Default service address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8000";

/// Default polling interval in seconds
pub const DEFAULT_POLL_SECS: u64 = 5;

/// Default request timeout in seconds
const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Runtime configuration for the client
#[derive(Debug, Clone)]
pub struct Config {
    /// Service base address; API paths and `output_url` resolve against it
    pub base_url: Url,
    /// Delay between polls
    pub poll_interval: Duration,
    /// Page fetched on every refresh
    pub page: Page,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: Url::parse(DEFAULT_BASE_URL).expect("hardcoded default url is valid"),
            poll_interval: Duration::from_secs(DEFAULT_POLL_SECS),
            page: Page::default(),
            request_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration from the environment
    ///
    /// - `DOC_SANITIZER_API`: base address
    /// - `DOC_SANITIZER_POLL_SECS`: polling interval (seconds, > 0)
    /// - `DOC_SANITIZER_PAGE_LIMIT`: submissions fetched per refresh (> 0)
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Ok(api) = env::var("DOC_SANITIZER_API") {
            config = config.with_base_url(&api)?;
        }

        if let Ok(secs) = env::var("DOC_SANITIZER_POLL_SECS") {
            let secs = parse_positive("DOC_SANITIZER_POLL_SECS", &secs)?;
            config.poll_interval = Duration::from_secs(secs);
        }

        if let Ok(limit) = env::var("DOC_SANITIZER_PAGE_LIMIT") {
            let limit = parse_positive("DOC_SANITIZER_PAGE_LIMIT", &limit)?;
            config.page.limit = u32::try_from(limit)
                .map_err(|_| Error::Config(format!("DOC_SANITIZER_PAGE_LIMIT too large: {limit}")))?;
        }

        Ok(config)
    }

    /// Replace the base address
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self> {
        let url = Url::parse(base_url)?;
        if url.cannot_be_a_base() {
            return Err(Error::Config(format!("not a base url: {base_url}")));
        }
        self.base_url = url;
        Ok(self)
    }
}

fn parse_positive(name: &str, value: &str) -> Result<u64> {
    match value.trim().parse::<u64>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(Error::Config(format!(
            "{name} must be a positive integer, got {value:?}"
        ))),
    }
}
