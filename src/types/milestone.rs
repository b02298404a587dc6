//! Milestone domain type and completion arithmetic

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

use crate::github::rest_types::MilestoneNode;

/// Represents the state of a GitHub milestone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumString, Display)]
#[strum(serialize_all = "lowercase")] // For REST API compatibility
pub enum MilestoneState {
    Open,
    Closed,
}

/// A tracked unit of work with a target date and aggregate issue counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Milestone {
    pub title: String,
    pub description: Option<String>,
    pub state: MilestoneState,
    /// Due date exactly as the API sent it
    pub due_on: Option<String>,
    pub open_issues: u64,
    pub closed_issues: u64,
}

impl Milestone {
    pub fn new<T: Into<String>>(
        title: T,
        state: MilestoneState,
        open_issues: u64,
        closed_issues: u64,
    ) -> Self {
        Self {
            title: title.into(),
            description: None,
            state,
            due_on: None,
            open_issues,
            closed_issues,
        }
    }

    pub fn total_issues(&self) -> u64 {
        self.open_issues + self.closed_issues
    }

    /// Share of closed issues as a whole percentage, truncated.
    ///
    /// A milestone without any issue is reported at 0%.
    pub fn completion_percentage(&self) -> u64 {
        let total = self.total_issues();
        if total == 0 {
            return 0;
        }
        self.closed_issues * 100 / total
    }
}

impl TryFrom<MilestoneNode> for Milestone {
    type Error = String;

    fn try_from(node: MilestoneNode) -> Result<Self, Self::Error> {
        let state = node
            .state
            .parse::<MilestoneState>()
            .map_err(|_| format!("Unknown milestone state '{}'", node.state))?;

        Ok(Self {
            title: node.title,
            description: node.description,
            state,
            due_on: node.due_on,
            open_issues: node.open_issues,
            closed_issues: node.closed_issues,
        })
    }
}
