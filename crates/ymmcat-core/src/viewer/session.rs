use anyhow::Result;
use std::time::{Duration, Instant};

use super::{results_message, visible_indices, CatalogStats, FilterState, SearchDebouncer, SortOrder};
use crate::model::{Dataset, Plugin};

/// A successfully loaded dataset.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub last_updated: Option<String>,
    pub plugins: Vec<Plugin>,
    pub stats: CatalogStats,
}

impl From<Dataset> for Catalog {
    fn from(dataset: Dataset) -> Self {
        let stats = CatalogStats::compute(&dataset.plugins);
        Self {
            last_updated: dataset.last_updated,
            plugins: dataset.plugins,
            stats,
        }
    }
}

/// Loading -> Ready | Error. `Error` is terminal for the session.
#[derive(Debug, Clone)]
pub enum ViewerState {
    Loading,
    Ready(Catalog),
    Error(String),
}

/// One viewer session over a dataset.
///
/// Event methods return `true` when the visible list was recomputed and the
/// caller should re-render.
#[derive(Debug)]
pub struct Session {
    state: ViewerState,
    filter: FilterState,
    visible: Vec<usize>,
    selected: Option<usize>,
    debouncer: SearchDebouncer,
}

impl Session {
    pub fn new(search_debounce: Duration) -> Self {
        Self {
            state: ViewerState::Loading,
            filter: FilterState::default(),
            visible: Vec::new(),
            selected: None,
            debouncer: SearchDebouncer::new(search_debounce),
        }
    }

    /// Session that starts from an already loaded dataset.
    pub fn ready(dataset: Dataset, search_debounce: Duration) -> Self {
        let mut session = Self::new(search_debounce);
        session.finish_loading(Ok(dataset));
        session
    }

    /// Completes the initial load. Ignored unless the session is still loading.
    pub fn finish_loading(&mut self, result: Result<Dataset>) {
        if !matches!(self.state, ViewerState::Loading) {
            return;
        }
        match result {
            Ok(dataset) => {
                let catalog = Catalog::from(dataset);
                tracing::debug!(
                    "catalog ready: {} plugins, {} categories, {} authors",
                    catalog.stats.total,
                    catalog.stats.categories,
                    catalog.stats.authors
                );
                self.state = ViewerState::Ready(catalog);
                self.recompute();
            }
            Err(e) => {
                tracing::error!("error loading plugins: {:#}", e);
                self.state = ViewerState::Error(format!("{e:#}"));
            }
        }
    }

    pub fn state(&self) -> &ViewerState {
        &self.state
    }

    pub fn catalog(&self) -> Option<&Catalog> {
        match &self.state {
            ViewerState::Ready(c) => Some(c),
            _ => None,
        }
    }

    pub fn filter(&self) -> &FilterState {
        &self.filter
    }

    pub fn stats(&self) -> Option<CatalogStats> {
        self.catalog().map(|c| c.stats)
    }

    pub fn visible(&self) -> Vec<&Plugin> {
        match self.catalog() {
            Some(c) => self.visible.iter().map(|&i| &c.plugins[i]).collect(),
            None => Vec::new(),
        }
    }

    pub fn results_message(&self) -> Option<String> {
        self.catalog()
            .map(|c| results_message(&self.filter, self.visible.len(), c.plugins.len()))
    }

    fn recompute(&mut self) -> bool {
        let Some(catalog) = self.catalog() else {
            return false;
        };
        let visible = visible_indices(&catalog.plugins, &self.filter);
        self.visible = visible;
        true
    }

    fn apply(&mut self, filter: FilterState) -> bool {
        self.filter = filter;
        self.recompute()
    }

    /// Buffers a search keystroke; it is applied by `poll` once the debounce delay elapses.
    pub fn input_search(&mut self, raw: &str, now: Instant) {
        self.debouncer.push(raw, now);
    }

    /// When the buffered search becomes due.
    pub fn search_deadline(&self) -> Option<Instant> {
        self.debouncer.deadline()
    }

    /// Applies the buffered search if it is due.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.debouncer.poll(now) {
            Some(raw) => {
                let filter = self.filter.clone().with_search(&raw);
                self.apply(filter)
            }
            None => false,
        }
    }

    /// Applies a search term immediately, dropping any buffered input.
    pub fn set_search(&mut self, raw: &str) -> bool {
        self.debouncer.cancel();
        let filter = self.filter.clone().with_search(raw);
        self.apply(filter)
    }

    /// Clear button.
    pub fn clear_search(&mut self) -> bool {
        self.set_search("")
    }

    pub fn set_category(&mut self, category: &str) -> bool {
        let filter = self.filter.clone().with_category(category);
        self.apply(filter)
    }

    pub fn set_sort(&mut self, sort: SortOrder) -> bool {
        let filter = self.filter.clone().with_sort(sort);
        self.apply(filter)
    }

    /// Restores empty search, category `all` and `updated-desc`.
    pub fn reset(&mut self) -> bool {
        self.debouncer.cancel();
        self.apply(FilterState::default())
    }

    /// Opens the detail view for `id`. Returns the record, or `None` if no such id.
    pub fn select(&mut self, id: &str) -> Option<&Plugin> {
        let index = self.catalog()?.plugins.iter().position(|p| p.id == id)?;
        self.selected = Some(index);
        self.selected()
    }

    pub fn selected(&self) -> Option<&Plugin> {
        let catalog = self.catalog()?;
        self.selected.map(|i| &catalog.plugins[i])
    }

    pub fn close_detail(&mut self) {
        self.selected = None;
    }
}
