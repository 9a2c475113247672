//! Production `CatalogApi` over the platform's REST API.

use serde::de::DeserializeOwned;

use super::http;
use super::types::{ApiError, Release, SearchPage};
use super::CatalogApi;

const ACCEPT: &str = "application/vnd.github.v3+json";
const ERROR_BODY_CHARS: usize = 200;

#[derive(Debug, Clone)]
pub struct GitHubClient {
    api_base_url: String,
    user_agent: String,
    token: Option<String>,
}

impl GitHubClient {
    pub fn new(api_base_url: &str, user_agent: &str, token: Option<String>) -> Self {
        Self {
            api_base_url: api_base_url.trim_end_matches('/').to_string(),
            user_agent: user_agent.to_string(),
            token,
        }
    }

    pub(crate) fn search_url(&self, topic: &str, page: u32, per_page: u32) -> Result<String, ApiError> {
        let base = format!("{}/search/repositories", self.api_base_url);
        let url = url::Url::parse_with_params(
            &base,
            &[
                ("q", format!("topic:{topic}")),
                ("per_page", per_page.to_string()),
                ("sort", "updated".to_string()),
                ("page", page.to_string()),
            ],
        )?;
        Ok(url.into())
    }

    pub(crate) fn release_url(&self, owner: &str, repo: &str) -> String {
        format!("{}/repos/{}/{}/releases/latest", self.api_base_url, owner, repo)
    }

    pub(crate) fn headers(&self) -> Vec<(String, String)> {
        let mut headers = vec![
            ("User-Agent".to_string(), self.user_agent.clone()),
            ("Accept".to_string(), ACCEPT.to_string()),
        ];
        if let Some(token) = &self.token {
            headers.push(("Authorization".to_string(), format!("token {token}")));
        }
        headers
    }

    fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, ApiError> {
        tracing::trace!("GET {}", url);
        let response = http::get(url, &self.headers())?;
        if response.status == 404 {
            return Err(ApiError::NotFound(url.to_string()));
        }
        if !response.is_success() {
            return Err(ApiError::Http {
                url: url.to_string(),
                status: response.status,
                body: response.body_prefix(ERROR_BODY_CHARS),
            });
        }
        serde_json::from_slice(&response.body).map_err(|source| ApiError::Json {
            url: url.to_string(),
            source,
        })
    }
}

impl CatalogApi for GitHubClient {
    fn search_page(&self, topic: &str, page: u32, per_page: u32) -> Result<SearchPage, ApiError> {
        let url = self.search_url(topic, page, per_page)?;
        self.get_json(&url)
    }

    fn latest_release(&self, owner: &str, repo: &str) -> Result<Release, ApiError> {
        let url = self.release_url(owner, repo);
        self.get_json(&url)
    }
}
