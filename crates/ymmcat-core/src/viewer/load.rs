//! Fetching the dataset artifact from a file or an HTTP(S) URL.

use anyhow::{Context, Result};
use std::fmt;
use std::path::PathBuf;

use crate::dataset;
use crate::github::http;
use crate::model::Dataset;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DatasetSource {
    File(PathBuf),
    Url(String),
}

impl DatasetSource {
    /// `http://` and `https://` values are URLs; anything else is a path.
    pub fn parse(value: &str) -> Self {
        let lower = value.to_ascii_lowercase();
        if lower.starts_with("http://") || lower.starts_with("https://") {
            DatasetSource::Url(value.to_string())
        } else {
            DatasetSource::File(PathBuf::from(value))
        }
    }
}

impl fmt::Display for DatasetSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DatasetSource::File(p) => write!(f, "{}", p.display()),
            DatasetSource::Url(u) => f.write_str(u),
        }
    }
}

/// Loads and parses the dataset. Blocking.
pub fn load_dataset(source: &DatasetSource, user_agent: &str) -> Result<Dataset> {
    match source {
        DatasetSource::File(path) => dataset::read_dataset(path),
        DatasetSource::Url(url) => {
            let headers = vec![("User-Agent".to_string(), user_agent.to_string())];
            let response = http::get(url, &headers).with_context(|| format!("fetch {url}"))?;
            if !response.is_success() {
                anyhow::bail!("GET {} returned HTTP {}", url, response.status);
            }
            dataset::parse_dataset(&response.body)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_source_kind() {
        assert_eq!(
            DatasetSource::parse("https://example.github.io/catalog/data/plugins.json"),
            DatasetSource::Url("https://example.github.io/catalog/data/plugins.json".to_string())
        );
        assert_eq!(
            DatasetSource::parse("data/plugins.json"),
            DatasetSource::File(PathBuf::from("data/plugins.json"))
        );
    }

    #[test]
    fn missing_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let source = DatasetSource::File(dir.path().join("plugins.json"));
        assert!(load_dataset(&source, "ua").is_err());
    }
}
