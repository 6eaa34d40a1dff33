//! Blocking reqwest transport with timeout and gzip.

use std::time::Duration;

use ramco_core::config::{defaults, ApiConfig};
use ramco_core::errors::TransportError;

use super::{RawResponse, Transport};

/// Configuration for the HTTP transport layer.
#[derive(Debug, Clone)]
pub struct HttpTransportConfig {
    /// Endpoint URL. Every request is a POST here.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
    /// Accept gzip-compressed responses.
    pub gzip: bool,
}

impl Default for HttpTransportConfig {
    fn default() -> Self {
        Self {
            url: defaults::DEFAULT_API_URL.to_string(),
            timeout: Duration::from_secs(defaults::DEFAULT_TIMEOUT_SECS),
            gzip: defaults::DEFAULT_GZIP,
        }
    }
}

impl From<&ApiConfig> for HttpTransportConfig {
    fn from(api: &ApiConfig) -> Self {
        Self {
            url: api.effective_url().to_string(),
            timeout: api.effective_timeout(),
            gzip: api.effective_gzip(),
        }
    }
}

/// HTTP transport. Holds one reqwest blocking client for its lifetime.
#[derive(Debug)]
pub struct HttpTransport {
    url: String,
    client: reqwest::blocking::Client,
}

impl HttpTransport {
    pub fn new(config: HttpTransportConfig) -> Result<Self, TransportError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(config.timeout)
            .gzip(config.gzip)
            .build()
            .map_err(|e| TransportError::ClientBuild {
                reason: e.to_string(),
            })?;
        Ok(Self {
            url: config.url,
            client,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

impl Transport for HttpTransport {
    fn post_form(&self, fields: &[(String, String)]) -> Result<RawResponse, TransportError> {
        let response = self
            .client
            .post(&self.url)
            .form(fields)
            .send()
            .map_err(|e| TransportError::Network {
                reason: e.to_string(),
            })?;

        let status = response.status().as_u16();
        let body = response.text().map_err(|e| TransportError::Network {
            reason: format!("reading body failed: {e}"),
        })?;
        Ok(RawResponse { status, body })
    }
}
