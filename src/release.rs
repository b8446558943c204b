//! Latest-release fetching.
//!
//! Issues a blocking GET against a module's API URL and extracts the
//! published version from the `tag_name` field of the JSON body.

use std::time::Duration;

use crate::error::{Result, UpcheckError};
use crate::version::strip_tag;

/// Default request timeout.
const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// Fetches release metadata over HTTP.
pub struct ReleaseFetcher {
    client: reqwest::blocking::Client,
}

impl ReleaseFetcher {
    /// Create a fetcher with the default timeout.
    pub fn new() -> Result<Self> {
        Self::with_timeout(DEFAULT_TIMEOUT)
    }

    /// Create a fetcher with a custom timeout.
    pub fn with_timeout(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .user_agent(concat!("upcheck/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(|e| UpcheckError::Fetch {
                url: String::new(),
                message: format!("could not build HTTP client: {}", e),
            })?;
        Ok(Self { client })
    }

    /// Fetch the latest published version from `api_url`.
    ///
    /// The response must be JSON with a string `tag_name` field; a leading
    /// `v` in the tag is stripped. Any network, HTTP, or shape failure is
    /// reported as a per-module fetch error.
    pub fn latest_version(&self, api_url: &str) -> Result<String> {
        let response = self
            .client
            .get(api_url)
            .send()
            .map_err(|e| UpcheckError::Fetch {
                url: api_url.to_string(),
                message: e.to_string(),
            })?;

        if !response.status().is_success() {
            return Err(UpcheckError::Fetch {
                url: api_url.to_string(),
                message: format!("HTTP {}", response.status()),
            });
        }

        let body: serde_json::Value = response.json().map_err(|e| UpcheckError::Fetch {
            url: api_url.to_string(),
            message: format!("invalid JSON body: {}", e),
        })?;

        let tag = body["tag_name"]
            .as_str()
            .ok_or_else(|| UpcheckError::BadRelease {
                url: api_url.to_string(),
            })?;

        Ok(strip_tag(tag).to_string())
    }
}
