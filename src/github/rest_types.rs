//! Wire shapes of the GitHub REST list endpoints
//!
//! Only the fields the reports need are declared; everything else in the
//! payload is ignored on deserialization. The record stores keep the full
//! payload, these structs are the typed view over it.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

/// Element of `GET /repos/{owner}/{repo}/milestones`
#[derive(Debug, Clone, Deserialize)]
pub struct MilestoneNode {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub state: String,
    #[serde(default)]
    pub due_on: Option<String>,
    pub open_issues: u64,
    pub closed_issues: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LabelNode {
    pub name: String,
}

/// Element of `GET /repos/{owner}/{repo}/issues`
///
/// The issues endpoint also lists pull requests; those carry a
/// `pull_request` key, plain issues have no such key. Any value counts,
/// `null` included.
#[derive(Debug, Clone, Deserialize)]
pub struct IssueNode {
    pub number: u64,
    pub title: String,
    pub state: String,
    #[serde(default)]
    pub labels: Vec<LabelNode>,
    #[serde(default, deserialize_with = "key_present")]
    pub pull_request: bool,
}

fn key_present<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    IgnoredAny::deserialize(deserializer)?;
    Ok(true)
}

/// Element of `GET /repos/{owner}/{repo}/pulls`
#[derive(Debug, Clone, Deserialize)]
pub struct PullRequestNode {
    pub number: u64,
    pub title: String,
    #[serde(default)]
    pub merged_at: Option<String>,
}
