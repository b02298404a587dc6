//! JSON record stores shared by the fetcher and the generators
//!
//! The fetcher writes each GitHub listing verbatim into a fixed file; the
//! generators read them back through the typed wire structs, so a record
//! missing a required field fails the run here rather than in the renderers.

use std::path::PathBuf;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{Error, Result};
use crate::github::Listing;
use crate::github::rest_types::{IssueNode, MilestoneNode, PullRequestNode};
use crate::types::{Issue, Milestone, PullRequest};

pub const MILESTONES_FILE: &str = "milestones.json";
pub const ISSUES_FILE: &str = "issues.json";
pub const PULL_REQUESTS_FILE: &str = "prs.json";

/// Everything the generators render from, loaded once per run
#[derive(Debug, Clone, Default)]
pub struct Snapshot {
    pub milestones: Vec<Milestone>,
    pub issues: Vec<Issue>,
    pub pull_requests: Vec<PullRequest>,
}

/// Directory holding the three record stores
#[derive(Debug, Clone)]
pub struct RecordStore {
    root: PathBuf,
}

impl RecordStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn file_name(listing: Listing) -> &'static str {
        match listing {
            Listing::Milestones => MILESTONES_FILE,
            Listing::Issues => ISSUES_FILE,
            Listing::PullRequests => PULL_REQUESTS_FILE,
        }
    }

    pub fn path_of(&self, listing: Listing) -> PathBuf {
        self.root.join(Self::file_name(listing))
    }

    /// Persist raw records, replacing any previous content
    pub fn save(&self, listing: Listing, records: &[Value]) -> Result<PathBuf> {
        let path = self.path_of(listing);
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| Error::invalid_record(Self::file_name(listing), e))?;

        std::fs::write(&path, json).map_err(|e| Error::io(&path, e))?;

        tracing::info!("Saved {} record(s) to {}", records.len(), path.display());
        Ok(path)
    }

    pub fn load_milestones(&self) -> Result<Vec<Milestone>> {
        self.load::<MilestoneNode, Milestone>(Listing::Milestones)
    }

    pub fn load_issues(&self) -> Result<Vec<Issue>> {
        self.load::<IssueNode, Issue>(Listing::Issues)
    }

    pub fn load_pull_requests(&self) -> Result<Vec<PullRequest>> {
        self.load::<PullRequestNode, PullRequest>(Listing::PullRequests)
    }

    pub fn load_snapshot(&self) -> Result<Snapshot> {
        let snapshot = Snapshot {
            milestones: self.load_milestones()?,
            issues: self.load_issues()?,
            pull_requests: self.load_pull_requests()?,
        };

        tracing::debug!(
            "Loaded snapshot: {} milestones, {} issues, {} pull requests",
            snapshot.milestones.len(),
            snapshot.issues.len(),
            snapshot.pull_requests.len()
        );
        Ok(snapshot)
    }

    fn load<N, T>(&self, listing: Listing) -> Result<Vec<T>>
    where
        N: DeserializeOwned,
        T: TryFrom<N, Error = String>,
    {
        let store = Self::file_name(listing);
        let path = self.path_of(listing);
        let content = std::fs::read_to_string(&path).map_err(|e| Error::io(&path, e))?;

        let nodes: Vec<N> =
            serde_json::from_str(&content).map_err(|e| Error::invalid_record(store, e))?;

        nodes
            .into_iter()
            .enumerate()
            .map(|(index, node)| {
                T::try_from(node)
                    .map_err(|e| Error::invalid_record(store, format!("record {}: {}", index, e)))
            })
            .collect()
    }
}
