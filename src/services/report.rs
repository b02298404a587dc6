//! Selection rules shared by the document and wiki generators

use crate::types::{DocConfig, Issue, Label, PullRequest};

/// Issues filed under one included label
#[derive(Debug, Clone)]
pub struct LabelGroup<'a> {
    pub label: Label,
    pub issues: Vec<&'a Issue>,
}

/// Which label lists take part in grouping
#[derive(Debug, Clone, Copy)]
pub struct GroupingRule<'a> {
    pub include_labels: &'a [String],
    /// `None` disables the exclusion step
    pub exclude_labels: Option<&'a [String]>,
}

impl<'a> GroupingRule<'a> {
    /// Include and exclude lists both apply
    pub fn include_exclude(config: &'a DocConfig) -> Self {
        Self {
            include_labels: config.include_labels.as_slice(),
            exclude_labels: Some(config.exclude_labels.as_slice()),
        }
    }

    /// Only the include list applies
    pub fn include_only(config: &'a DocConfig) -> Self {
        Self {
            include_labels: config.include_labels.as_slice(),
            exclude_labels: None,
        }
    }

    fn is_excluded(&self, issue: &Issue) -> bool {
        self.exclude_labels
            .is_some_and(|exclude| exclude.iter().any(|name| issue.has_label(name)))
    }

    fn is_included(&self, label: &Label) -> bool {
        self.include_labels.iter().any(|l| l == label.name())
    }
}

/// Groups issues by included label.
///
/// Pull requests are skipped. An issue carrying any excluded label is dropped
/// from every group, even when another of its labels is included. Groups
/// appear in the order their label is first met; issues keep source order.
pub fn group_issues_by_label<'a>(
    issues: &'a [Issue],
    rule: GroupingRule<'_>,
) -> Vec<LabelGroup<'a>> {
    let mut groups: Vec<LabelGroup<'a>> = Vec::new();

    for issue in issues.iter().filter(|issue| !issue.is_pull_request) {
        if rule.is_excluded(issue) {
            tracing::debug!("Issue #{} skipped by exclude_labels", issue.number);
            continue;
        }

        for label in issue.labels.iter().filter(|label| rule.is_included(label)) {
            match groups.iter_mut().find(|group| &group.label == label) {
                Some(group) => group.issues.push(issue),
                None => groups.push(LabelGroup {
                    label: label.clone(),
                    issues: vec![issue],
                }),
            }
        }
    }

    groups
}

/// Closed issues, pull requests excluded, in source order
pub fn changelog(issues: &[Issue]) -> Vec<&Issue> {
    issues
        .iter()
        .filter(|issue| issue.is_closed() && !issue.is_pull_request)
        .collect()
}

/// Merged pull requests in source order
pub fn release_notes(pull_requests: &[PullRequest]) -> Vec<&PullRequest> {
    pull_requests.iter().filter(|pr| pr.is_merged()).collect()
}
