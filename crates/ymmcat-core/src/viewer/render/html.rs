//! Static HTML rendering of the catalog page.

use std::fmt::Write;

use super::{CardView, DetailView};
use crate::model::{Category, CategoryInfo, Plugin, CATEGORY_ALL};
use crate::viewer::{CatalogStats, FilterState, SortOrder};

/// Escapes text for element content and quoted attribute values.
pub fn escape_html(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

fn badge(card_category: &str, info: CategoryInfo) -> String {
    format!(
        r#"<span class="card-category-badge badge-{}">{} {}</span>"#,
        escape_html(card_category),
        info.icon,
        escape_html(info.label)
    )
}

fn detail_anchor(id: &str) -> String {
    format!("plugin-{}", escape_html(id))
}

pub fn render_card(card: &CardView, index: usize) -> String {
    let mut html = String::new();
    let _ = write!(
        html,
        r##"<article class="plugin-card" data-plugin-id="{id}" style="animation-delay: {delay:.2}s"><a class="card-link" href="#{anchor}">"##,
        id = escape_html(&card.id),
        delay = index as f64 * 0.05,
        anchor = detail_anchor(&card.id),
    );
    let _ = write!(
        html,
        r#"<div class="card-header"><h2 class="card-title">{}</h2>{}</div>"#,
        escape_html(&card.name),
        badge(&card.category, card.badge)
    );
    let _ = write!(
        html,
        r#"<p class="card-description">{}</p>"#,
        escape_html(&card.description)
    );
    if !card.tags.is_empty() {
        html.push_str(r#"<div class="card-tags">"#);
        for tag in &card.tags {
            let _ = write!(html, r#"<span class="card-tag">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div>");
    }
    let _ = write!(
        html,
        r#"<div class="card-footer"><div class="card-author"><span class="card-author-avatar">{}</span>{}</div><div class="card-meta">"#,
        escape_html(&card.avatar),
        escape_html(&card.author)
    );
    if let Some(stars) = card.stars {
        let _ = write!(html, r#"<span class="card-meta-item">⭐ {stars}</span>"#);
    }
    let _ = write!(
        html,
        r#"<span class="card-meta-item">🕒 {}</span></div></div></a></article>"#,
        escape_html(&card.updated)
    );
    html
}

pub fn render_detail(plugin: &Plugin) -> String {
    let d = DetailView::from_plugin(plugin);
    let mut html = String::new();
    let _ = write!(
        html,
        r##"<div class="modal-overlay" id="{anchor}"><div class="modal"><a class="modal-close" href="#">×</a><div class="modal-content">"##,
        anchor = detail_anchor(&plugin.id)
    );
    let _ = write!(
        html,
        r#"<span class="modal-badge card-category-badge badge-{}">{} {}</span>"#,
        escape_html(&d.category),
        d.badge.icon,
        escape_html(d.badge.label)
    );
    let _ = write!(html, r#"<h2 class="modal-title">{}</h2>"#, escape_html(&d.name));
    let _ = write!(
        html,
        r#"<div class="modal-author"><span class="card-author-avatar">{}</span>作者: <a href="{}" target="_blank" rel="noopener">{}</a></div>"#,
        escape_html(&d.avatar),
        escape_html(&d.author_url),
        escape_html(&d.author)
    );
    let _ = write!(
        html,
        r#"<div class="modal-description">{}</div>"#,
        escape_html(&d.description)
    );
    html.push_str(r#"<div class="modal-info-grid">"#);
    let stars = d.stars.to_string();
    for (label, value) in [
        ("⭐ スター数", stars.as_str()),
        ("📅 最終更新", d.updated.as_str()),
        ("🏷️ バージョン", d.version.as_str()),
        ("📜 ライセンス", d.license.as_str()),
    ] {
        let _ = write!(
            html,
            r#"<div class="modal-info-item"><div class="modal-info-label">{label}</div><div class="modal-info-value">{}</div></div>"#,
            escape_html(value)
        );
    }
    html.push_str("</div>");
    if !d.tags.is_empty() {
        html.push_str(r#"<div class="modal-tags">"#);
        for tag in &d.tags {
            let _ = write!(html, r#"<span class="modal-tag">{}</span>"#, escape_html(tag));
        }
        html.push_str("</div>");
    }
    html.push_str(r#"<div class="modal-actions">"#);
    if let Some(url) = &d.download_url {
        let _ = write!(
            html,
            r#"<a href="{}" target="_blank" rel="noopener" class="modal-btn modal-btn-primary">ダウンロード</a>"#,
            escape_html(url)
        );
    }
    if let Some(url) = &d.repo_url {
        let _ = write!(
            html,
            r#"<a href="{}" target="_blank" rel="noopener" class="modal-btn modal-btn-secondary">GitHub</a>"#,
            escape_html(url)
        );
    }
    html.push_str("</div></div></div></div>");
    html
}

fn render_chips(filter: &FilterState) -> String {
    let ids = std::iter::once(CATEGORY_ALL).chain(Category::ALL.into_iter().map(Category::as_str));
    let mut html = String::from(r#"<nav class="category-filters">"#);
    for id in ids {
        let info = Category::filter_info(id);
        let active = if filter.category == id { " active" } else { "" };
        let _ = write!(
            html,
            r#"<span class="filter-chip{active}" data-category="{id}">{} {}</span>"#,
            info.icon,
            escape_html(info.label)
        );
    }
    html.push_str("</nav>");
    html
}

fn sort_label(sort: SortOrder) -> &'static str {
    match sort {
        SortOrder::UpdatedDesc => "更新日（新しい順）",
        SortOrder::UpdatedAsc => "更新日（古い順）",
        SortOrder::NameAsc => "名前（A→Z）",
        SortOrder::NameDesc => "名前（Z→A）",
        SortOrder::StarsDesc => "スター数",
    }
}

/// Everything needed to render the catalog page.
pub struct PageContext<'a> {
    pub visible: &'a [&'a Plugin],
    pub filter: &'a FilterState,
    pub stats: CatalogStats,
    pub dataset_updated: Option<&'a str>,
    pub results_message: &'a str,
}

/// Full page: stats header, filter chips, result grid (or empty state) and one detail overlay per card.
pub fn render_page(ctx: &PageContext<'_>) -> String {
    let mut html = String::from(
        "<!DOCTYPE html>\n<html lang=\"ja\">\n<head>\n<meta charset=\"utf-8\">\n<title>YMM4 Plugin Catalog</title>\n</head>\n<body>\n",
    );
    let updated = super::display_date(ctx.dataset_updated).unwrap_or_default();
    let _ = writeln!(
        html,
        r#"<header class="stats"><span id="total-count">{}</span><span id="category-count">{}</span><span id="author-count">{}</span><span id="last-updated">{}</span></header>"#,
        ctx.stats.total,
        ctx.stats.categories,
        ctx.stats.authors,
        escape_html(&updated)
    );
    html.push_str(&render_chips(ctx.filter));
    html.push('\n');
    let _ = writeln!(
        html,
        r#"<div class="toolbar"><span class="search-term">{}</span><span class="sort" data-sort="{}">{}</span><p id="results-count">{}</p></div>"#,
        escape_html(&ctx.filter.search),
        ctx.filter.sort.as_str(),
        sort_label(ctx.filter.sort),
        escape_html(ctx.results_message)
    );
    if ctx.visible.is_empty() {
        html.push_str(r#"<div id="empty-state"><p>該当するプラグインが見つかりませんでした</p></div>"#);
        html.push('\n');
    } else {
        html.push_str(r#"<main id="plugin-grid" class="plugin-grid">"#);
        html.push('\n');
        for (i, plugin) in ctx.visible.iter().enumerate() {
            html.push_str(&render_card(&CardView::from_plugin(plugin), i));
            html.push('\n');
        }
        html.push_str("</main>\n");
        for plugin in ctx.visible {
            html.push_str(&render_detail(plugin));
            html.push('\n');
        }
    }
    html.push_str("</body>\n</html>\n");
    html
}
