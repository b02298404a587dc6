use crate::types::Issue;

use super::MarkdownContent;

/// Listing line for an issue under a label group
pub fn issue_line_markdown(issue: &Issue) -> String {
    format!("- {} (#{}) [{}]", issue.title, issue.number, issue.state)
}

/// Changelog line for a closed issue
pub fn changelog_line_markdown(issue: &Issue) -> String {
    format!("- {} (#{})", issue.title, issue.number)
}

/// Every issue line of a group, each terminated by a newline
pub fn issue_list_markdown(issues: &[&Issue]) -> MarkdownContent {
    let mut content = String::new();
    for issue in issues {
        content.push_str(&issue_line_markdown(issue));
        content.push('\n');
    }
    MarkdownContent(content)
}

/// Changelog entries joined by newlines, without a trailing newline
pub fn changelog_markdown(issues: &[&Issue]) -> MarkdownContent {
    MarkdownContent(
        issues
            .iter()
            .map(|issue| changelog_line_markdown(issue))
            .collect::<Vec<_>>()
            .join("\n"),
    )
}
