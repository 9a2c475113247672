//! `ymmcat list` – filtered, sorted table of catalog entries.

use anyhow::Result;
use ymmcat_core::config::CatalogConfig;
use ymmcat_core::viewer::render::text;

use super::{apply_filter_args, open_session};
use crate::cli::FilterArgs;

pub async fn run_list(cfg: &CatalogConfig, data: Option<&str>, filter: &FilterArgs) -> Result<()> {
    let mut session = open_session(cfg, data).await?;
    apply_filter_args(&mut session, filter);

    if let Some(message) = session.results_message() {
        println!("{message}");
    }
    let visible = session.visible();
    if visible.is_empty() {
        println!("該当するプラグインが見つかりませんでした");
    } else {
        print!("{}", text::render_table(&visible));
    }
    Ok(())
}
