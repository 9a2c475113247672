//! `ymmcat show <id>` – detail view of one entry.

use anyhow::Result;
use ymmcat_core::config::CatalogConfig;
use ymmcat_core::viewer::render::text;

use super::open_session;

pub async fn run_show(cfg: &CatalogConfig, data: Option<&str>, id: &str) -> Result<()> {
    let mut session = open_session(cfg, data).await?;
    match session.select(id) {
        Some(plugin) => print!("{}", text::render_detail(plugin)),
        None => anyhow::bail!("no plugin with id {id}"),
    }
    Ok(())
}
