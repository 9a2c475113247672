//! Paginated topic search with partial-result tolerance.

use std::time::Duration;

use super::types::{ApiError, RawRepo};
use super::CatalogApi;

/// Paging limits for one topic query.
#[derive(Debug, Clone, Copy)]
pub struct SearchLimits {
    pub per_page: u32,
    /// Stop once this many repositories have been accumulated.
    pub max_results: usize,
    pub page_delay: Duration,
}

impl Default for SearchLimits {
    fn default() -> Self {
        Self {
            per_page: 100,
            max_results: 1000,
            page_delay: Duration::from_millis(1500),
        }
    }
}

/// Repositories gathered for one topic, plus the error that cut paging short (if any).
#[derive(Debug)]
pub struct SearchOutcome {
    pub repos: Vec<RawRepo>,
    pub failure: Option<ApiError>,
}

impl SearchOutcome {
    pub fn into_repos(self) -> Vec<RawRepo> {
        self.repos
    }
}

/// Fetches pages 1, 2, ... for `topic` until a short page, the reported total,
/// or `max_results` is reached. A failing page ends the search and keeps what
/// was accumulated before it.
pub fn search_topic(api: &dyn CatalogApi, topic: &str, limits: SearchLimits) -> SearchOutcome {
    tracing::info!("searching topic \"{}\"", topic);
    let mut repos: Vec<RawRepo> = Vec::new();
    let mut page = 1u32;

    loop {
        let result = match api.search_page(topic, page, limits.per_page) {
            Ok(r) => r,
            Err(e) => {
                tracing::warn!("search error ({}): {}", topic, e);
                if !repos.is_empty() {
                    tracing::warn!(
                        "keeping {} repositories fetched before the error",
                        repos.len()
                    );
                }
                return SearchOutcome {
                    repos,
                    failure: Some(e),
                };
            }
        };

        let page_len = result.items.len();
        repos.extend(result.items);
        tracing::info!(
            "  page {}: {} items (total {}/{})",
            page,
            page_len,
            repos.len(),
            result.total_count
        );

        let short_page = page_len == 0 || page_len < limits.per_page as usize;
        let reached_total = repos.len() as u64 >= result.total_count;
        let reached_cap = repos.len() >= limits.max_results;
        if short_page || reached_total || reached_cap {
            break;
        }

        page += 1;
        std::thread::sleep(limits.page_delay);
    }

    tracing::info!("topic \"{}\": {} repositories", topic, repos.len());
    SearchOutcome {
        repos,
        failure: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::github::{Release, SearchPage};
    use std::cell::RefCell;

    /// Serves `total` synthetic repos; pages listed in `fail_pages` error out.
    struct PagedApi {
        total: usize,
        fail_pages: Vec<u32>,
        reported_total: Option<u64>,
        requested: RefCell<Vec<u32>>,
    }

    impl PagedApi {
        fn new(total: usize) -> Self {
            Self {
                total,
                fail_pages: Vec::new(),
                reported_total: None,
                requested: RefCell::new(Vec::new()),
            }
        }
    }

    impl CatalogApi for PagedApi {
        fn search_page(&self, topic: &str, page: u32, per_page: u32) -> Result<SearchPage, ApiError> {
            self.requested.borrow_mut().push(page);
            if self.fail_pages.contains(&page) {
                return Err(ApiError::Http {
                    url: format!("search/{topic}/{page}"),
                    status: 403,
                    body: "rate limited".to_string(),
                });
            }
            let start = (page as usize - 1) * per_page as usize;
            let end = (start + per_page as usize).min(self.total);
            let items = (start..end)
                .map(|i| RawRepo {
                    full_name: format!("owner{i}/repo{i}"),
                    name: format!("repo{i}"),
                    ..RawRepo::default()
                })
                .collect();
            Ok(SearchPage {
                total_count: self.reported_total.unwrap_or(self.total as u64),
                items,
            })
        }

        fn latest_release(&self, owner: &str, repo: &str) -> Result<Release, ApiError> {
            Err(ApiError::NotFound(format!("{owner}/{repo}")))
        }
    }

    fn limits(per_page: u32, max_results: usize) -> SearchLimits {
        SearchLimits {
            per_page,
            max_results,
            page_delay: Duration::ZERO,
        }
    }

    #[test]
    fn stops_on_short_page() {
        let api = PagedApi::new(25);
        let out = search_topic(&api, "ymm4-plugin", limits(10, 1000));
        assert_eq!(out.repos.len(), 25);
        assert!(out.failure.is_none());
        assert_eq!(*api.requested.borrow(), vec![1, 2, 3]);
    }

    #[test]
    fn stops_at_reported_total_on_full_page() {
        let api = PagedApi::new(20);
        let out = search_topic(&api, "t", limits(10, 1000));
        assert_eq!(out.repos.len(), 20);
        assert_eq!(*api.requested.borrow(), vec![1, 2]);
    }

    #[test]
    fn empty_page_ends_topic_even_below_reported_total() {
        let mut api = PagedApi::new(0);
        api.reported_total = Some(500);
        let out = search_topic(&api, "t", limits(0, 1000));
        assert!(out.repos.is_empty());
        assert!(out.failure.is_none());
        assert_eq!(*api.requested.borrow(), vec![1]);
    }

    #[test]
    fn stops_at_hard_cap() {
        let api = PagedApi::new(5000);
        let out = search_topic(&api, "t", limits(100, 1000));
        assert_eq!(out.repos.len(), 1000);
        assert_eq!(api.requested.borrow().len(), 10);
    }

    #[test]
    fn mid_pagination_failure_keeps_partial_results() {
        let mut api = PagedApi::new(50);
        api.fail_pages = vec![3];
        let out = search_topic(&api, "t", limits(10, 1000));
        assert_eq!(out.repos.len(), 20);
        assert!(matches!(out.failure, Some(ApiError::Http { status: 403, .. })));
    }

    #[test]
    fn first_page_failure_is_empty() {
        let mut api = PagedApi::new(50);
        api.fail_pages = vec![1];
        let out = search_topic(&api, "t", limits(10, 1000));
        assert!(out.failure.is_some());
        assert!(out.into_repos().is_empty());
    }
}
