//! CLI command handlers. Each command is in its own file.

mod browse;
mod collect;
mod list;
mod render;
mod show;
mod stats;

pub use browse::run_browse;
pub use collect::run_collect;
pub use list::run_list;
pub use render::run_render;
pub use show::run_show;
pub use stats::run_stats;

use anyhow::{Context, Result};
use ymmcat_core::config::CatalogConfig;
use ymmcat_core::viewer::{load_dataset, DatasetSource, Session, ViewerState};

use super::FilterArgs;

/// Loads the dataset (off the async runtime) into a ready session.
/// A load failure leaves the session in its terminal error state and is reported as an error.
pub(crate) async fn open_session(cfg: &CatalogConfig, data: Option<&str>) -> Result<Session> {
    let source = match data {
        Some(value) => DatasetSource::parse(value),
        None => DatasetSource::File(cfg.dataset_path()),
    };
    let mut session = Session::new(cfg.search_debounce());
    let result = tokio::task::spawn_blocking({
        let source = source.clone();
        let user_agent = cfg.user_agent.clone();
        move || load_dataset(&source, &user_agent)
    })
    .await
    .context("load task join")?;
    session.finish_loading(result.with_context(|| format!("load dataset from {source}")));

    if let ViewerState::Error(message) = session.state() {
        anyhow::bail!("データの読み込みに失敗しました: {message}");
    }
    Ok(session)
}

/// Applies category, sort and search from the command line.
pub(crate) fn apply_filter_args(session: &mut Session, filter: &FilterArgs) {
    session.set_category(&filter.category);
    session.set_sort(filter.sort);
    if let Some(search) = &filter.search {
        session.set_search(search);
    }
}
