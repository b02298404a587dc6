use std::path::PathBuf;

use crate::error::Result;
use crate::github::{GitHubClient, Listing};
use crate::services::record_store::RecordStore;
use crate::types::RepositoryId;

/// Order in which the listings are fetched and stored
pub const LISTINGS: [Listing; 3] = [Listing::Milestones, Listing::Issues, Listing::PullRequests];

/// Mirrors the GitHub listings of one repository into the record stores
pub struct Fetcher {
    github_client: GitHubClient,
    store: RecordStore,
}

impl Fetcher {
    /// Creates a new Fetcher instance
    pub fn new(github_client: GitHubClient, store: RecordStore) -> Self {
        Self {
            github_client,
            store,
        }
    }

    /// Fetches milestones, issues and pull requests one after another and
    /// saves each listing as soon as it arrives.
    ///
    /// The first failure aborts the run; stores written before it are kept.
    pub async fn run(&self, repository_id: &RepositoryId) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(LISTINGS.len());

        for listing in LISTINGS {
            let records = match self
                .github_client
                .fetch_listing(repository_id, listing)
                .await
            {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!("Failed to fetch {} from {}: {}", listing, repository_id, e);
                    return Err(e);
                }
            };
            written.push(self.store.save(listing, &records)?);
        }

        Ok(written)
    }
}
