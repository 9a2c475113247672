use serde::Deserialize;
use thiserror::Error;

/// Error from a single API request.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] curl::Error),
    #[error("{url} returned HTTP {status}: {body}")]
    Http { url: String, status: u32, body: String },
    #[error("{0} not found")]
    NotFound(String),
    #[error("invalid JSON from {url}: {source}")]
    Json {
        url: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("invalid request URL: {0}")]
    Url(#[from] url::ParseError),
}

/// Repository as returned by the search endpoint (only the fields we use).
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawRepo {
    pub full_name: String,
    pub name: String,
    pub description: Option<String>,
    pub topics: Vec<String>,
    pub stargazers_count: Option<u64>,
    pub updated_at: Option<String>,
    pub pushed_at: Option<String>,
    pub license: Option<RawLicense>,
    pub html_url: String,
}

#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct RawLicense {
    pub spdx_id: Option<String>,
}

impl RawRepo {
    /// Splits `full_name` into `(owner, name)`; falls back to `name` when there is no slash.
    pub fn owner_and_name(&self) -> (&str, &str) {
        match self.full_name.split_once('/') {
            Some((owner, name)) => (owner, name),
            None => ("", self.full_name.as_str()),
        }
    }

    pub fn spdx_id(&self) -> Option<&str> {
        self.license.as_ref()?.spdx_id.as_deref()
    }
}

/// One page of search results plus the platform's reported total.
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
#[serde(default)]
pub struct SearchPage {
    pub total_count: u64,
    pub items: Vec<RawRepo>,
}

/// Latest release: version tag and release page URL (empty when unknown).
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Release {
    #[serde(rename = "tag_name")]
    pub version: String,
    #[serde(rename = "html_url")]
    pub url: String,
}
