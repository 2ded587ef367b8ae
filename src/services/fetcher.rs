//! Blocking HTTP client for article pages and images.
//!
//! Uses `reqwest::blocking`, so a [`Fetcher`] must be created and used off
//! the async runtime (inside `spawn_blocking` or a plain thread).

use std::time::Duration;

use crate::models::FetchConfig;

/// Error from fetching a remote resource
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP {status} from {url}")]
    Status { url: String, status: u16 },
}

/// HTTP client with the configured timeout and user agent
pub struct Fetcher {
    client: reqwest::blocking::Client,
}

impl Fetcher {
    pub fn new(config: &FetchConfig) -> Result<Self, FetchError> {
        let client = reqwest::blocking::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(config.user_agent.clone())
            .build()?;

        Ok(Self { client })
    }

    fn get(&self, url: &str) -> Result<reqwest::blocking::Response, FetchError> {
        tracing::debug!(url, "Fetching");

        let response = self.client.get(url).send()?;
        let status = response.status();
        if !status.is_success() {
            tracing::warn!(url, status = status.as_u16(), "Fetch failed");
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        Ok(response)
    }

    /// Fetch a resource as raw bytes
    pub fn fetch_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let bytes = self.get(url)?.bytes()?;
        tracing::debug!(url, len = bytes.len(), "Fetched bytes");
        Ok(bytes.to_vec())
    }

    /// Fetch a resource as text, decoded per its declared charset
    pub fn fetch_text(&self, url: &str) -> Result<String, FetchError> {
        let text = self.get(url)?.text()?;
        tracing::debug!(url, len = text.len(), "Fetched text");
        Ok(text)
    }
}

/// Rewrite a Christian Science Monitor article URL to its text edition.
///
/// The text edition serves the same article without scripts or layout,
/// which keeps parsing simple. Other URLs are returned unchanged.
pub fn text_edition_url(url: &str) -> String {
    const HOST: &str = "www.csmonitor.com/";
    const TEXT_EDITION: &str = "www.csmonitor.com/text_edition/";

    if !url.contains(HOST) || url.contains(TEXT_EDITION) {
        return url.to_string();
    }
    url.replacen(HOST, TEXT_EDITION, 1)
}

/// True when `source` names a remote resource rather than a local file
pub fn is_remote(source: &str) -> bool {
    source.starts_with("http://") || source.starts_with("https://")
}
