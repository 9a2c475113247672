//! Merge discovered records with the manual override file.

use std::collections::HashSet;

use crate::model::{ManualOverrides, Plugin};

/// `owner/repo` part of a repository URL: the web base prefix is stripped and the rest lowercased.
pub fn repo_path(repo_url: &str, web_base_url: &str) -> String {
    let prefix = format!("{}/", web_base_url.trim_end_matches('/'));
    let stripped = match repo_url.get(..prefix.len()) {
        Some(head) if head.eq_ignore_ascii_case(&prefix) => &repo_url[prefix.len()..],
        _ => repo_url,
    };
    stripped.trim_end_matches('/').to_lowercase()
}

/// Applies exclusions, then category overrides, then appends manual-only records.
///
/// Discovered records keep their order; manual records whose id is already
/// present are skipped, so the discovered record wins. Category overrides only
/// touch discovered records.
pub fn merge(auto: Vec<Plugin>, manual: &ManualOverrides, web_base_url: &str) -> Vec<Plugin> {
    let excluded: HashSet<String> = manual
        .exclude_repos
        .iter()
        .map(|r| r.trim().to_lowercase())
        .collect();

    let mut merged: Vec<Plugin> = auto
        .into_iter()
        .filter(|p| {
            let keep = !excluded.contains(&repo_path(&p.repo_url, web_base_url));
            if !keep {
                tracing::debug!("excluded {}", p.repo_url);
            }
            keep
        })
        .collect();

    for plugin in &mut merged {
        if let Some(category) = manual.category_overrides.get(&plugin.id) {
            tracing::debug!("category override {}: {} -> {}", plugin.id, plugin.category, category);
            plugin.category = category.clone();
        }
    }

    let auto_ids: HashSet<String> = merged.iter().map(|p| p.id.clone()).collect();
    let mut manual_ids: HashSet<&str> = HashSet::new();
    for manual_plugin in &manual.plugins {
        if auto_ids.contains(&manual_plugin.id) || !manual_ids.insert(manual_plugin.id.as_str()) {
            continue;
        }
        merged.push(manual_plugin.clone());
    }

    merged
}
