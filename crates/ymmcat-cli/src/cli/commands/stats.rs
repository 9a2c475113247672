//! `ymmcat stats` – catalog totals.

use anyhow::Result;
use ymmcat_core::config::CatalogConfig;
use ymmcat_core::viewer::render::text;

use super::open_session;

pub async fn run_stats(cfg: &CatalogConfig, data: Option<&str>) -> Result<()> {
    let session = open_session(cfg, data).await?;
    if let Some(catalog) = session.catalog() {
        print!(
            "{}",
            text::render_stats(&catalog.stats, catalog.last_updated.as_deref())
        );
    }
    Ok(())
}
