use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use std::time::Duration;

/// File name of the generated dataset inside `data_dir`.
pub const DATASET_FILE: &str = "plugins.json";
/// File name of the hand-maintained override file inside `data_dir`.
pub const MANUAL_FILE: &str = "plugins-manual.json";
/// Environment variable holding the optional API token.
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";
/// Largest page size the search API accepts.
pub const MAX_PER_PAGE: u32 = 100;

/// Global configuration loaded from `~/.config/ymmcat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Repository topics queried by the collector, in order.
    pub topics: Vec<String>,
    /// Base URL of the hosting platform's REST API.
    pub api_base_url: String,
    /// Base URL of the hosting platform's web UI (author links, exclusion matching).
    pub web_base_url: String,
    /// Client identifier sent as `User-Agent`.
    pub user_agent: String,
    /// Search results requested per page (platform maximum is 100).
    pub per_page: u32,
    /// Hard cap on results accumulated per topic.
    pub max_results: usize,
    /// Pause between search pages of the same topic.
    pub page_delay_ms: u64,
    /// Pause between topics.
    pub topic_delay_ms: u64,
    /// Pause after each release lookup.
    pub release_delay_ms: u64,
    /// Directory holding `plugins.json` and `plugins-manual.json`.
    pub data_dir: PathBuf,
    /// Viewer search debounce window.
    #[serde(default = "default_search_debounce_ms")]
    pub search_debounce_ms: u64,
}

fn default_search_debounce_ms() -> u64 {
    200
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            topics: vec![
                "ymm4-plugin".to_string(),
                "ymm-plugin".to_string(),
                "YMM4Plugin".to_string(),
            ],
            api_base_url: "https://api.github.com".to_string(),
            web_base_url: "https://github.com".to_string(),
            user_agent: "YMM4-Plugin-Collector".to_string(),
            per_page: 100,
            max_results: 1000,
            page_delay_ms: 1500,
            topic_delay_ms: 1000,
            release_delay_ms: 500,
            data_dir: PathBuf::from("data"),
            search_debounce_ms: default_search_debounce_ms(),
        }
    }
}

impl CatalogConfig {
    /// Clamps values the collector cannot work with.
    pub fn normalized(mut self) -> Self {
        let per_page = self.per_page.clamp(1, MAX_PER_PAGE);
        if per_page != self.per_page {
            tracing::warn!(
                "per_page = {} out of range, using {}",
                self.per_page,
                per_page
            );
            self.per_page = per_page;
        }
        self
    }

    pub fn dataset_path(&self) -> PathBuf {
        self.data_dir.join(DATASET_FILE)
    }

    pub fn manual_path(&self) -> PathBuf {
        self.data_dir.join(MANUAL_FILE)
    }

    pub fn page_delay(&self) -> Duration {
        Duration::from_millis(self.page_delay_ms)
    }

    pub fn topic_delay(&self) -> Duration {
        Duration::from_millis(self.topic_delay_ms)
    }

    pub fn release_delay(&self) -> Duration {
        Duration::from_millis(self.release_delay_ms)
    }

    pub fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }
}

/// Reads the API token from the environment; empty values count as unset.
pub fn token_from_env() -> Option<String> {
    std::env::var(TOKEN_ENV)
        .ok()
        .map(|t| t.trim().to_string())
        .filter(|t| !t.is_empty())
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("ymmcat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<CatalogConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = CatalogConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(&path)?;
    let cfg: CatalogConfig = toml::from_str(&data)?;
    Ok(cfg.normalized())
}
