//! Issue domain types
//!
//! The REST issues listing mixes issues and pull requests. The pull request
//! entries are kept as issues flagged with `is_pull_request` so the record
//! order stays intact; the report code filters them out.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use super::label::Label;
use crate::github::rest_types::IssueNode;

/// Wrapper type for issue numbers providing type safety
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IssueNumber(pub u64);

impl IssueNumber {
    /// Create a new issue number
    pub fn new(number: u64) -> Self {
        Self(number)
    }

    /// Get the inner value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for IssueNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Represents the state of a GitHub issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")] // For REST API compatibility
pub enum IssueState {
    /// Issue is open and active
    Open,
    /// Issue is closed
    Closed,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub number: IssueNumber,
    pub title: String,
    pub state: IssueState,
    pub labels: Vec<Label>,
    pub is_pull_request: bool,
}

impl Issue {
    pub fn new<T: Into<String>>(number: u64, title: T, state: IssueState) -> Self {
        Self {
            number: IssueNumber::new(number),
            title: title.into(),
            state,
            labels: Vec::new(),
            is_pull_request: false,
        }
    }

    pub fn with_labels<I, L>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Label>,
    {
        self.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn as_pull_request(mut self) -> Self {
        self.is_pull_request = true;
        self
    }

    pub fn is_closed(&self) -> bool {
        self.state == IssueState::Closed
    }

    pub fn has_label(&self, name: &str) -> bool {
        self.labels.iter().any(|label| label.name() == name)
    }
}

impl TryFrom<IssueNode> for Issue {
    type Error = String;

    fn try_from(node: IssueNode) -> Result<Self, Self::Error> {
        let state = node
            .state
            .parse::<IssueState>()
            .map_err(|_| format!("Issue #{} has unknown state '{}'", node.number, node.state))?;

        Ok(Self {
            number: IssueNumber::new(node.number),
            title: node.title,
            state,
            labels: node
                .labels
                .into_iter()
                .map(|label_node| Label::new(label_node.name))
                .collect(),
            is_pull_request: node.pull_request,
        })
    }
}
