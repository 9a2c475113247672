//! View models for cards and the detail overlay, plus HTML and text renderers.

pub mod html;
pub mod text;

use chrono::{DateTime, Datelike, NaiveDate};

use crate::model::{CategoryInfo, Plugin};

/// Tags shown on a grid card; the detail view shows all of them.
pub const CARD_TAGS: usize = 4;
const UNKNOWN: &str = "不明";

/// `YYYY年M月D日` for an ISO 8601 timestamp (UTC date). `None` if missing or unparseable.
pub fn display_date(timestamp: Option<&str>) -> Option<String> {
    let ts = timestamp?.trim();
    let date = DateTime::parse_from_rfc3339(ts)
        .map(|dt| dt.naive_utc().date())
        .or_else(|_| NaiveDate::parse_from_str(ts, "%Y-%m-%d"))
        .ok()?;
    Some(format!("{}年{}月{}日", date.year(), date.month(), date.day()))
}

/// Uppercase first character of the author, `?` when empty.
pub fn author_initial(author: &str) -> String {
    match author.chars().next() {
        Some(c) => c.to_uppercase().collect(),
        None => "?".to_string(),
    }
}

fn non_empty(value: &str) -> Option<String> {
    (!value.is_empty()).then(|| value.to_string())
}

/// What a grid card displays.
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: String,
    pub name: String,
    pub badge: CategoryInfo,
    /// Raw category id, used for badge styling.
    pub category: String,
    pub description: String,
    pub tags: Vec<String>,
    pub author: String,
    pub avatar: String,
    /// Star count, only when positive.
    pub stars: Option<u64>,
    /// Display date or `-`.
    pub updated: String,
}

impl CardView {
    pub fn from_plugin(plugin: &Plugin) -> Self {
        Self {
            id: plugin.id.clone(),
            name: plugin.name.clone(),
            badge: plugin.category_kind().info(),
            category: plugin.category.clone(),
            description: plugin.description.clone(),
            tags: plugin.tags.iter().take(CARD_TAGS).cloned().collect(),
            author: plugin.author.clone(),
            avatar: author_initial(&plugin.author),
            stars: (plugin.stars > 0).then_some(plugin.stars),
            updated: display_date(plugin.last_updated.as_deref()).unwrap_or_else(|| "-".to_string()),
        }
    }
}

/// What the detail overlay displays.
#[derive(Debug, Clone, PartialEq)]
pub struct DetailView {
    pub name: String,
    pub badge: CategoryInfo,
    pub category: String,
    pub author: String,
    pub author_url: String,
    pub avatar: String,
    pub description: String,
    pub stars: u64,
    pub updated: String,
    pub version: String,
    pub license: String,
    pub tags: Vec<String>,
    pub download_url: Option<String>,
    pub repo_url: Option<String>,
}

impl DetailView {
    pub fn from_plugin(plugin: &Plugin) -> Self {
        Self {
            name: plugin.name.clone(),
            badge: plugin.category_kind().info(),
            category: plugin.category.clone(),
            author: plugin.author.clone(),
            author_url: plugin.author_url.clone(),
            avatar: author_initial(&plugin.author),
            description: plugin.description.clone(),
            stars: plugin.stars,
            updated: display_date(plugin.last_updated.as_deref()).unwrap_or_else(|| UNKNOWN.to_string()),
            version: non_empty(&plugin.latest_version).unwrap_or_else(|| UNKNOWN.to_string()),
            license: non_empty(&plugin.license).unwrap_or_else(|| UNKNOWN.to_string()),
            tags: plugin.tags.clone(),
            download_url: non_empty(&plugin.download_url),
            repo_url: non_empty(&plugin.repo_url),
        }
    }
}
