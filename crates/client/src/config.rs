//! Client configuration.

use std::time::Duration;

/// Environment variable selecting the API origin.
pub const API_URL_VAR: &str = "STOCKROOM_API_URL";

const DEFAULT_BASE_URL: &str = "http://localhost:3000";
const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(10);

/// Where the remote store lives and how often to refresh from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreConfig {
    /// API origin, without a trailing slash.
    pub base_url: String,
    /// Period of the list-refresh poller.
    pub poll_interval: Duration,
}

impl StoreConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Self {
            base_url,
            poll_interval: DEFAULT_POLL_INTERVAL,
        }
    }

    /// Read the API origin from `STOCKROOM_API_URL`, falling back to a dev
    /// default with a warning.
    pub fn from_env() -> Self {
        let base_url = std::env::var(API_URL_VAR).unwrap_or_else(|_| {
            tracing::warn!("{API_URL_VAR} not set; using dev default {DEFAULT_BASE_URL}");
            DEFAULT_BASE_URL.to_string()
        });
        Self::new(base_url)
    }

    pub fn with_poll_interval(mut self, poll_interval: Duration) -> Self {
        self.poll_interval = poll_interval;
        self
    }
}
