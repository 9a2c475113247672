//! `ymmcat collect` – regenerate the dataset from the hosting platform.

use anyhow::{Context, Result};
use std::path::PathBuf;
use ymmcat_core::collect::{collect_to_file, CollectOptions};
use ymmcat_core::config::{self, CatalogConfig};
use ymmcat_core::github::GitHubClient;

pub async fn run_collect(
    cfg: &CatalogConfig,
    output: Option<PathBuf>,
    manual: Option<PathBuf>,
) -> Result<()> {
    let output = output.unwrap_or_else(|| cfg.dataset_path());
    let manual = manual.unwrap_or_else(|| cfg.manual_path());

    let token = config::token_from_env();
    if token.is_none() {
        tracing::warn!("{} not set; using unauthenticated API requests", config::TOKEN_ENV);
    }
    let client = GitHubClient::new(&cfg.api_base_url, &cfg.user_agent, token);
    let opts = CollectOptions::from_config(cfg);

    tracing::info!("collecting plugins for topics {:?}", opts.topics);
    let count = tokio::task::spawn_blocking({
        let output = output.clone();
        move || collect_to_file(&client, &opts, &manual, &output)
    })
    .await
    .context("collect task join")??;

    println!("Saved {count} plugins to {}", output.display());
    Ok(())
}
