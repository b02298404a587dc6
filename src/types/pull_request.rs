use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::github::rest_types::PullRequestNode;

/// Wrapper type for pull request numbers providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PullRequestNumber(pub u64);

impl PullRequestNumber {
    /// Create a new pull request number
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// Get the inner value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PullRequestNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PullRequest {
    pub number: PullRequestNumber,
    pub title: String,
    /// Absent for pull requests that were never merged
    pub merged_at: Option<DateTime<Utc>>,
}

impl PullRequest {
    pub fn new<T: Into<String>>(number: u64, title: T, merged_at: Option<DateTime<Utc>>) -> Self {
        Self {
            number: PullRequestNumber::new(number),
            title: title.into(),
            merged_at,
        }
    }

    pub fn is_merged(&self) -> bool {
        self.merged_at.is_some()
    }
}

impl TryFrom<PullRequestNode> for PullRequest {
    type Error = String;

    fn try_from(node: PullRequestNode) -> Result<Self, Self::Error> {
        let merged_at = node
            .merged_at
            .map(|date_str| {
                DateTime::parse_from_rfc3339(&date_str)
                    .map(|date| date.with_timezone(&Utc))
                    .map_err(|e| {
                        format!(
                            "Pull request #{} has invalid merged_at '{}': {}",
                            node.number, date_str, e
                        )
                    })
            })
            .transpose()?;

        Ok(Self {
            number: PullRequestNumber::new(node.number),
            title: node.title,
            merged_at,
        })
    }
}
