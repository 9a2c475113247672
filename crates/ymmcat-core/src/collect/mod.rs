//! Collector pipeline: topic search, per-repository derivation, merge with the
//! manual override file.

mod classify;
mod merge;
mod pipeline;
mod tags;

pub use classify::{classify, DESCRIPTION_RULES, TOPIC_RULES};
pub use merge::{merge, repo_path};
pub use pipeline::{build_plugin, collect_plugins, collect_to_file, discover_repos, CollectOptions};
pub use tags::{generate_tags, MAX_TAGS};
