//! Code-hosting platform access: repository search by topic and latest releases.
//!
//! `CatalogApi` is the seam between the collector and the network; the curl
//! backed `GitHubClient` is the production implementation.

mod client;
pub mod http;
mod release;
mod search;
mod types;

pub use client::GitHubClient;
pub use release::{lookup_latest_release, ReleaseLookup};
pub use search::{search_topic, SearchLimits, SearchOutcome};
pub use types::{ApiError, RawLicense, RawRepo, Release, SearchPage};

/// Read-only view of the platform API used by the collector.
pub trait CatalogApi {
    /// One page (1-based) of repositories tagged with `topic`, most recently updated first.
    fn search_page(&self, topic: &str, page: u32, per_page: u32) -> Result<SearchPage, ApiError>;

    /// Latest published release of `owner/repo`. `ApiError::NotFound` when there is none.
    fn latest_release(&self, owner: &str, repo: &str) -> Result<Release, ApiError>;
}
