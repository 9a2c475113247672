//! Latest-release lookup with absence and failure kept distinct.

use super::types::{ApiError, Release};
use super::CatalogApi;

/// Outcome of asking for a repository's latest release.
#[derive(Debug)]
pub enum ReleaseLookup {
    Found(Release),
    /// The repository has no published release.
    Absent,
    /// The request failed for another reason.
    Failed(ApiError),
}

impl ReleaseLookup {
    /// The release, or an empty one when absent or failed.
    pub fn into_release(self) -> Release {
        match self {
            ReleaseLookup::Found(r) => r,
            ReleaseLookup::Absent | ReleaseLookup::Failed(_) => Release::default(),
        }
    }
}

pub fn lookup_latest_release(api: &dyn CatalogApi, owner: &str, repo: &str) -> ReleaseLookup {
    match api.latest_release(owner, repo) {
        Ok(release) => ReleaseLookup::Found(release),
        Err(ApiError::NotFound(_)) => ReleaseLookup::Absent,
        Err(e) => {
            tracing::debug!("release lookup failed for {}/{}: {}", owner, repo, e);
            ReleaseLookup::Failed(e)
        }
    }
}
