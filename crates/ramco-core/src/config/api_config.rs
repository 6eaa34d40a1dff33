//! Endpoint and credential configuration.

use std::fmt;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::defaults;

/// Where and how requests are sent.
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct ApiConfig {
    /// Endpoint URL. Default: the public RAMCO v2 URL.
    pub url: Option<String>,
    /// Static access key sent with every request as `key`.
    pub key: Option<String>,
    /// Per-request timeout in seconds. Default: 30.
    pub timeout_secs: Option<u64>,
    /// Accept gzip-compressed responses. Default: true.
    pub gzip: Option<bool>,
}

impl ApiConfig {
    /// Returns the effective endpoint URL.
    pub fn effective_url(&self) -> &str {
        self.url.as_deref().unwrap_or(defaults::DEFAULT_API_URL)
    }

    /// Returns the effective request timeout.
    pub fn effective_timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs.unwrap_or(defaults::DEFAULT_TIMEOUT_SECS))
    }

    /// Returns whether gzip is enabled, defaulting to true.
    pub fn effective_gzip(&self) -> bool {
        self.gzip.unwrap_or(defaults::DEFAULT_GZIP)
    }
}

// The key never reaches logs.
impl fmt::Debug for ApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiConfig")
            .field("url", &self.url)
            .field("key", &self.key.as_ref().map(|_| "<redacted>"))
            .field("timeout_secs", &self.timeout_secs)
            .field("gzip", &self.gzip)
            .finish()
    }
}
