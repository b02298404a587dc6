use crate::error::{Error, Result};
use crate::github::error::{classify_octocrab_error, classify_status};
use crate::types::RepositoryId;

use octocrab::{FromResponse, Octocrab, Page};
use octocrab::service::middleware::retry::RetryConfig;
use serde_json::Value;
use tokio::time::Duration;
use tracing::{info, warn};

/// Largest page size the REST API accepts
pub const MAX_PER_PAGE: u32 = 100;

/// One of the three listings mirrored into the record stores
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Listing {
    Milestones,
    Issues,
    PullRequests,
}

impl Listing {
    fn endpoint(&self) -> &'static str {
        match self {
            Self::Milestones => "milestones",
            Self::Issues => "issues",
            Self::PullRequests => "pulls",
        }
    }
}

impl std::fmt::Display for Listing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.endpoint())
    }
}

#[derive(Clone)]
pub struct GitHubClient {
    pub(crate) client: octocrab::Octocrab,
    max_pages: Option<usize>,
}

impl GitHubClient {
    pub fn new(token: Option<String>, timeout: Option<Duration>) -> Result<Self> {
        Self::build(token, timeout, None)
    }

    /// Client talking to a different API root, e.g. GitHub Enterprise or a mock server
    pub fn with_base_uri(
        base_uri: &str,
        token: Option<String>,
        timeout: Option<Duration>,
    ) -> Result<Self> {
        Self::build(token, timeout, Some(base_uri))
    }

    fn build(
        token: Option<String>,
        timeout: Option<Duration>,
        base_uri: Option<&str>,
    ) -> Result<Self> {
        let mut builder = Octocrab::builder().add_retry_config(RetryConfig::None);

        if let Some(token) = token {
            builder = builder.personal_token(token);
        }

        if let Some(base_uri) = base_uri {
            builder = builder.base_uri(base_uri).map_err(|e| {
                Error::Config(format!("Invalid GitHub API base URI '{}': {}", base_uri, e))
            })?;
        }

        if let Some(timeout_duration) = timeout {
            let read_write_timeout = std::cmp::max(timeout_duration, Duration::from_secs(1));
            builder = builder
                .set_connect_timeout(Some(read_write_timeout))
                .set_read_timeout(Some(read_write_timeout))
                .set_write_timeout(Some(read_write_timeout));
        }

        let client = builder.build().map_err(|e| {
            Error::Config(format!("Failed to build GitHub client: {}", e))
        })?;

        Ok(Self {
            client,
            max_pages: None,
        })
    }

    /// Stop following `next` links after this many pages.
    ///
    /// `Some(1)` reproduces the first-page-only listing of earlier versions.
    pub fn with_max_pages(mut self, max_pages: Option<usize>) -> Self {
        self.max_pages = max_pages;
        self
    }

    pub async fn fetch_milestones(&self, repository_id: &RepositoryId) -> Result<Vec<Value>> {
        self.fetch_listing(repository_id, Listing::Milestones).await
    }

    pub async fn fetch_issues(&self, repository_id: &RepositoryId) -> Result<Vec<Value>> {
        self.fetch_listing(repository_id, Listing::Issues).await
    }

    pub async fn fetch_pull_requests(&self, repository_id: &RepositoryId) -> Result<Vec<Value>> {
        self.fetch_listing(repository_id, Listing::PullRequests).await
    }

    /// Fetches every record of a listing with `state=all`, in API order.
    ///
    /// Records are returned untouched so they can be persisted verbatim.
    pub async fn fetch_listing(
        &self,
        repository_id: &RepositoryId,
        listing: Listing,
    ) -> Result<Vec<Value>> {
        let start_time = std::time::Instant::now();
        let route = format!(
            "{}/{}?state=all&per_page={}",
            repository_id.api_route(),
            listing.endpoint(),
            MAX_PER_PAGE
        );

        info!("Fetching {} from {}", listing, route);

        let mut page = self.get_page(route).await?;

        let mut records = page.take_items();
        let mut next = page.next.take();
        let mut page_count = 1;

        while let Some(uri) = next.take() {
            if self.max_pages.is_some_and(|max| page_count >= max) {
                warn!(
                    "Stopping {} pagination after {} page(s); more records are available",
                    listing, page_count
                );
                break;
            }

            let mut next_page = self.get_page(uri.to_string()).await?;
            records.extend(next_page.take_items());
            next = next_page.next.take();
            page_count += 1;
        }

        info!(
            "Fetched {} {} record(s) over {} page(s) in {:?}",
            records.len(),
            listing,
            page_count,
            start_time.elapsed()
        );

        Ok(records)
    }

    /// GET one listing page.
    ///
    /// The status is checked before the body is decoded, so an error page
    /// that is not GitHub's JSON error shape (an HTML 503 from a proxy, an
    /// empty 401) still maps to `Auth` or `Http { status }`.
    async fn get_page(&self, uri: String) -> Result<Page<Value>> {
        let response = self
            .client
            ._get(uri)
            .await
            .map_err(classify_octocrab_error)?;

        let status = response.status();
        if !status.is_success() {
            let body = self
                .client
                .body_to_string(response)
                .await
                .unwrap_or_default();
            let message = error_message(&body)
                .or_else(|| status.canonical_reason().map(str::to_string))
                .unwrap_or_default();
            return Err(classify_status(status.as_u16(), message));
        }

        Page::<Value>::from_response(response)
            .await
            .map_err(classify_octocrab_error)
    }
}

/// `message` of a GitHub JSON error body, or the trimmed body when it is not JSON
fn error_message(body: &str) -> Option<String> {
    if let Ok(Value::Object(fields)) = serde_json::from_str::<Value>(body) {
        if let Some(Value::String(message)) = fields.get("message") {
            return Some(message.clone());
        }
    }
    let trimmed = body.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
