//! Plain-text rendering for the terminal.

use std::fmt::Write;

use super::{display_date, CardView, DetailView};
use crate::model::Plugin;
use crate::viewer::CatalogStats;

fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        return s.to_string();
    }
    let mut out: String = s.chars().take(max_chars.saturating_sub(1)).collect();
    out.push('…');
    out
}

/// One line per visible record: id, category, stars, updated date, name.
pub fn render_table(visible: &[&Plugin]) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<32} {:<16} {:>6} {:<14} {}",
        "ID", "CATEGORY", "STARS", "UPDATED", "NAME"
    );
    for plugin in visible {
        let card = CardView::from_plugin(plugin);
        let _ = writeln!(
            out,
            "{:<32} {:<16} {:>6} {:<14} {}",
            truncate(&card.id, 32),
            card.badge.label,
            card.stars.unwrap_or(0),
            card.updated,
            card.name
        );
    }
    out
}

pub fn render_detail(plugin: &Plugin) -> String {
    let d = DetailView::from_plugin(plugin);
    let mut out = String::new();
    let _ = writeln!(out, "{} {}  {}", d.badge.icon, d.badge.label, d.name);
    let _ = writeln!(out, "作者: {} <{}>", d.author, d.author_url);
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", d.description);
    let _ = writeln!(out);
    let _ = writeln!(out, "⭐ スター数:   {}", d.stars);
    let _ = writeln!(out, "📅 最終更新:   {}", d.updated);
    let _ = writeln!(out, "🏷️ バージョン: {}", d.version);
    let _ = writeln!(out, "📜 ライセンス: {}", d.license);
    if !d.tags.is_empty() {
        let _ = writeln!(out, "タグ: {}", d.tags.join(", "));
    }
    if let Some(url) = &d.download_url {
        let _ = writeln!(out, "ダウンロード: {url}");
    }
    if let Some(url) = &d.repo_url {
        let _ = writeln!(out, "GitHub: {url}");
    }
    out
}

pub fn render_stats(stats: &CatalogStats, dataset_updated: Option<&str>) -> String {
    let updated = display_date(dataset_updated).unwrap_or_else(|| "-".to_string());
    format!(
        "plugins: {}\ncategories: {}\nauthors: {}\nlast updated: {}\n",
        stats.total, stats.categories, stats.authors, updated
    )
}
