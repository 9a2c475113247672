//! Sequential fetch -> derive -> merge -> write orchestration.

use anyhow::Result;
use std::collections::HashSet;
use std::path::Path;
use std::time::Duration;

use super::{classify, generate_tags, merge};
use crate::config::CatalogConfig;
use crate::dataset;
use crate::github::{lookup_latest_release, search_topic, CatalogApi, RawRepo, Release, SearchLimits};
use crate::model::{plugin_id, Plugin};

const NO_DESCRIPTION: &str = "説明なし";

/// Everything the collector needs besides the API itself.
#[derive(Debug, Clone)]
pub struct CollectOptions {
    pub topics: Vec<String>,
    pub limits: SearchLimits,
    pub topic_delay: Duration,
    pub release_delay: Duration,
    pub web_base_url: String,
}

impl CollectOptions {
    pub fn from_config(cfg: &CatalogConfig) -> Self {
        Self {
            topics: cfg.topics.clone(),
            limits: SearchLimits {
                per_page: cfg.per_page,
                max_results: cfg.max_results,
                page_delay: cfg.page_delay(),
            },
            topic_delay: cfg.topic_delay(),
            release_delay: cfg.release_delay(),
            web_base_url: cfg.web_base_url.trim_end_matches('/').to_string(),
        }
    }
}

/// Queries every topic and deduplicates by full name; first occurrence wins.
pub fn discover_repos(api: &dyn CatalogApi, opts: &CollectOptions) -> Vec<RawRepo> {
    let mut seen: HashSet<String> = HashSet::new();
    let mut repos = Vec::new();
    for topic in &opts.topics {
        for repo in search_topic(api, topic, opts.limits).into_repos() {
            if seen.insert(repo.full_name.clone()) {
                repos.push(repo);
            }
        }
        std::thread::sleep(opts.topic_delay);
    }
    tracing::info!("{} unique repositories discovered", repos.len());
    repos
}

/// Derives a catalog record from a search hit and its (possibly empty) release.
pub fn build_plugin(repo: &RawRepo, release: &Release, web_base_url: &str) -> Plugin {
    let (owner, name) = repo.owner_and_name();
    let category = classify(&repo.topics, repo.description.as_deref());
    let tags = generate_tags(&repo.topics, category);
    let non_empty = |s: &Option<String>| s.clone().filter(|v| !v.is_empty());

    Plugin {
        id: plugin_id(owner, name),
        name: repo.name.clone(),
        description: non_empty(&repo.description).unwrap_or_else(|| NO_DESCRIPTION.to_string()),
        author: owner.to_string(),
        author_url: format!("{web_base_url}/{owner}"),
        repo_url: repo.html_url.clone(),
        download_url: if release.url.is_empty() {
            format!("{}/releases", repo.html_url)
        } else {
            release.url.clone()
        },
        category: category.as_str().to_string(),
        tags,
        stars: repo.stargazers_count.unwrap_or(0),
        last_updated: non_empty(&repo.updated_at).or_else(|| non_empty(&repo.pushed_at)),
        latest_version: release.version.clone(),
        license: repo.spdx_id().unwrap_or_default().to_string(),
    }
}

/// Discovers repositories and builds one record per repository, in discovery order.
pub fn collect_plugins(api: &dyn CatalogApi, opts: &CollectOptions) -> Vec<Plugin> {
    let repos = discover_repos(api, opts);
    let mut plugins = Vec::with_capacity(repos.len());
    for repo in &repos {
        tracing::info!("processing {}", repo.full_name);
        let (owner, name) = repo.owner_and_name();
        let release = lookup_latest_release(api, owner, name).into_release();
        std::thread::sleep(opts.release_delay);
        plugins.push(build_plugin(repo, &release, &opts.web_base_url));
    }
    plugins
}

/// Full collector run: discover, merge with `manual_path`, write the dataset to `output_path`.
/// Returns the number of records written.
pub fn collect_to_file(
    api: &dyn CatalogApi,
    opts: &CollectOptions,
    manual_path: &Path,
    output_path: &Path,
) -> Result<usize> {
    let discovered = collect_plugins(api, opts);
    let manual = dataset::read_manual_or_empty(manual_path);
    let merged = merge(discovered, &manual, &opts.web_base_url);
    let count = merged.len();
    dataset::write_dataset(output_path, merged)?;
    tracing::info!("wrote {} plugins to {}", count, output_path.display());
    Ok(count)
}
