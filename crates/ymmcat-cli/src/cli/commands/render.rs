//! `ymmcat render` – write a static HTML catalog page.

use anyhow::{Context, Result};
use std::path::Path;
use ymmcat_core::config::CatalogConfig;
use ymmcat_core::viewer::render::html::{render_page, PageContext};

use super::{apply_filter_args, open_session};
use crate::cli::FilterArgs;

pub async fn run_render(
    cfg: &CatalogConfig,
    data: Option<&str>,
    out: &Path,
    filter: &FilterArgs,
) -> Result<()> {
    let mut session = open_session(cfg, data).await?;
    apply_filter_args(&mut session, filter);

    let Some(catalog) = session.catalog() else {
        anyhow::bail!("catalog not loaded");
    };
    let visible = session.visible();
    let message = session.results_message().unwrap_or_default();
    let page = render_page(&PageContext {
        visible: &visible,
        filter: session.filter(),
        stats: catalog.stats,
        dataset_updated: catalog.last_updated.as_deref(),
        results_message: &message,
    });

    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create dir: {}", parent.display()))?;
    }
    std::fs::write(out, page).with_context(|| format!("write page: {}", out.display()))?;
    println!("Rendered {} plugins to {}", visible.len(), out.display());
    Ok(())
}
