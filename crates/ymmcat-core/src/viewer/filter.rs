use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate};
use feruca::Collator;
use thiserror::Error;

use crate::model::{Plugin, CATEGORY_ALL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    NameAsc,
    NameDesc,
    StarsDesc,
    #[default]
    UpdatedDesc,
    UpdatedAsc,
}

#[derive(Debug, Error)]
#[error("unknown sort order '{0}' (expected name-asc, name-desc, stars-desc, updated-desc or updated-asc)")]
pub struct UnknownSortOrder(pub String);

impl SortOrder {
    pub const ALL: [SortOrder; 5] = [
        SortOrder::UpdatedDesc,
        SortOrder::UpdatedAsc,
        SortOrder::NameAsc,
        SortOrder::NameDesc,
        SortOrder::StarsDesc,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortOrder::NameAsc => "name-asc",
            SortOrder::NameDesc => "name-desc",
            SortOrder::StarsDesc => "stars-desc",
            SortOrder::UpdatedDesc => "updated-desc",
            SortOrder::UpdatedAsc => "updated-asc",
        }
    }

    fn compare(self, collator: &mut Collator, a: &Plugin, b: &Plugin) -> Ordering {
        match self {
            SortOrder::NameAsc => collator.collate(&a.name, &b.name),
            SortOrder::NameDesc => collator.collate(&b.name, &a.name),
            SortOrder::StarsDesc => b.stars.cmp(&a.stars),
            SortOrder::UpdatedDesc => sort_key_millis(b).cmp(&sort_key_millis(a)),
            SortOrder::UpdatedAsc => sort_key_millis(a).cmp(&sort_key_millis(b)),
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortOrder {
    type Err = UnknownSortOrder;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortOrder::ALL
            .into_iter()
            .find(|o| o.as_str() == s.trim())
            .ok_or_else(|| UnknownSortOrder(s.to_string()))
    }
}

/// `lastUpdated` as epoch milliseconds; missing or unparseable counts as 0.
pub fn sort_key_millis(plugin: &Plugin) -> i64 {
    let Some(ts) = plugin.last_updated.as_deref().map(str::trim) else {
        return 0;
    };
    if let Ok(dt) = DateTime::parse_from_rfc3339(ts) {
        return dt.timestamp_millis();
    }
    NaiveDate::parse_from_str(ts, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .map(|dt| dt.and_utc().timestamp_millis())
        .unwrap_or(0)
}

/// Active search/category/sort selection. Methods return updated copies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterState {
    /// Trimmed, lowercased search term; empty means no search.
    pub search: String,
    /// Category id or `all`.
    pub category: String,
    pub sort: SortOrder,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: CATEGORY_ALL.to_string(),
            sort: SortOrder::default(),
        }
    }
}

impl FilterState {
    pub fn with_search(self, raw: &str) -> Self {
        Self {
            search: raw.trim().to_lowercase(),
            ..self
        }
    }

    pub fn with_category(self, category: &str) -> Self {
        Self {
            category: category.to_string(),
            ..self
        }
    }

    pub fn with_sort(self, sort: SortOrder) -> Self {
        Self { sort, ..self }
    }

    /// True when a search term or a specific category narrows the list.
    pub fn is_filtered(&self) -> bool {
        !self.search.is_empty() || self.category != CATEGORY_ALL
    }
}

fn search_haystack(plugin: &Plugin) -> String {
    let label = plugin.category_kind().label();
    let mut fields: Vec<&str> = vec![
        plugin.name.as_str(),
        plugin.description.as_str(),
        plugin.author.as_str(),
    ];
    fields.extend(plugin.tags.iter().map(String::as_str));
    fields.push(label);
    fields.join(" ").to_lowercase()
}

pub fn matches(plugin: &Plugin, state: &FilterState) -> bool {
    if state.category != CATEGORY_ALL && plugin.category != state.category {
        return false;
    }
    state.search.is_empty() || search_haystack(plugin).contains(&state.search)
}

/// Indices into `records` that pass the filter, in sort order.
pub fn visible_indices(records: &[Plugin], state: &FilterState) -> Vec<usize> {
    let mut indices: Vec<usize> = records
        .iter()
        .enumerate()
        .filter(|(_, p)| matches(p, state))
        .map(|(i, _)| i)
        .collect();
    // UCA root order; lowercase before uppercase on ties.
    let mut collator = Collator::default();
    indices.sort_by(|&a, &b| state.sort.compare(&mut collator, &records[a], &records[b]));
    indices
}

pub fn compute_visible<'a>(records: &'a [Plugin], state: &FilterState) -> Vec<&'a Plugin> {
    visible_indices(records, state)
        .into_iter()
        .map(|i| &records[i])
        .collect()
}
