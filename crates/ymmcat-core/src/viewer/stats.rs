use std::collections::HashSet;

use super::FilterState;
use crate::model::Plugin;

/// Aggregate header numbers for a loaded catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CatalogStats {
    pub total: usize,
    pub categories: usize,
    pub authors: usize,
}

impl CatalogStats {
    pub fn compute(plugins: &[Plugin]) -> Self {
        let categories: HashSet<&str> = plugins.iter().map(|p| p.category.as_str()).collect();
        let authors: HashSet<&str> = plugins.iter().map(|p| p.author.as_str()).collect();
        Self {
            total: plugins.len(),
            categories: categories.len(),
            authors: authors.len(),
        }
    }
}

/// Line shown above the grid.
pub fn results_message(state: &FilterState, visible: usize, total: usize) -> String {
    if state.is_filtered() {
        format!("{visible}件のプラグインが見つかりました")
    } else {
        format!("全{total}件のプラグイン")
    }
}
